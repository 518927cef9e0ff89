//! Interactive arbitrary-precision calculator.
//!
//! Reads one infix expression per line from standard input and prints the
//! decimal result. The first syntax or arithmetic error is reported to
//! standard error and the process exits with a non-zero status; end of
//! input terminates cleanly.

use std::io::{self, BufRead};
use std::process;

use bigcalc::eval_line;

fn main() {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: {}", err);
                process::exit(1);
            }
        };

        match eval_line(&line) {
            Ok(value) => println!("{}", value),
            Err(err) => {
                eprintln!("error: {}", err);
                process::exit(1);
            }
        }
    }
}
