//! Command line driver for the SIL interpreter. Loads the program named by
//! the single positional argument and runs it to completion. Fatal errors
//! are printed to standard output and the process exits nonzero; the engine
//! itself never terminates the process.

use ansi_term::Style;
use sil::error;
use sil::lang::Error;
use sil::mach::{Program, Runtime, StdConsole};
use std::io::{BufRead, BufReader};

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: sil <program.sil>");
            std::process::exit(2);
        }
    };
    if let Err(error) = run_file(&path) {
        println!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run_file(path: &str) -> Result<(), Error> {
    let file = std::fs::File::open(path)
        .map_err(|error| error!(FileNotFound; format!("{}: {}", path, error)))?;
    let mut lines: Vec<String> = vec![];
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(error) => {
                return Err(error!(FileNotFound; format!("{}: {}", path, error)));
            }
        }
    }
    let program = Program::load(lines.iter().map(String::as_str))?;
    let mut runtime = Runtime::new(program);
    runtime.run(&mut StdConsole::new())
}
