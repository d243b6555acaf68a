use std::io::{self, BufRead, Write};
use std::{env, process::exit};

use eval::{Evaluator, Mode};
use log::info;
use parser::parse;

const PROMPT: &str = ">> ";
const USAGE: &str = "Usage: monkey [--strict] [path]";

fn main() {
    env_logger::init();
    let mut mode = Mode::Lenient;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict" => mode = Mode::Strict,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            flag if flag.starts_with('-') => {
                eprintln!("Unknown option {}.", flag);
                eprintln!("{}", USAGE);
                exit(1);
            }
            _ if path.is_some() => {
                eprintln!("{}", USAGE);
                exit(1);
            }
            _ => path = Some(arg),
        }
    }
    let evaluator = Evaluator::new(mode);
    info!("Evaluating in {:?} mode", mode);
    match path {
        Some(path) => run_file(&evaluator, &path),
        None => {
            if let Err(err) = repl(&evaluator) {
                eprintln!("Ran into error while reading input.");
                eprintln!("{}", err);
                exit(1);
            }
        }
    }
}

fn run_file(evaluator: &Evaluator, path: &str) {
    info!("Trying to open {}", path);
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Ran into error while trying to open the file.");
            eprintln!("{}", err);
            exit(1);
        }
    };
    let program = match parse(&source) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("Parsing Error: {}", err);
            exit(1);
        }
    };
    match evaluator.eval((&program).into()) {
        Ok(Some(value)) => println!("{}", value),
        Ok(None) => {}
        Err(err) => {
            eprintln!("Runtime Error: {}", err);
            exit(1);
        }
    }
}

fn repl(evaluator: &Evaluator) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;
        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            return Ok(());
        };
        let line = line?;
        let program = match parse(&line) {
            Ok(program) => program,
            Err(err) => {
                writeln!(stdout, "Parsing Error: {}", err)?;
                continue;
            }
        };
        match evaluator.eval((&program).into()) {
            Ok(Some(value)) => writeln!(stdout, "{}", value)?,
            Ok(None) => {}
            Err(err) => writeln!(stdout, "Runtime Error: {}", err)?,
        }
    }
}
