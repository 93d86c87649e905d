//! Print spiral matrices the two ways the classic console driver does:
//! a single order-3 matrix, then orders 5, 6 and 12 in sequence.
//!
//! Usage: cargo run --example generate -- [n...]
//!
//! Example:
//!   cargo run --example generate -- 7 8

use spiral_matrix::{FormatParams, format, generate};
use std::env;

fn print_spiral(n: usize) {
    match generate(n) {
        Ok(m) => print!("{}", format(&m, &FormatParams::default())),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_spiral(3);
        println!();
        for n in [5, 6, 12] {
            print_spiral(n);
        }
        return;
    }

    for arg in &args {
        let n: usize = arg.parse().unwrap_or_else(|_| {
            eprintln!("Usage: generate [n...] (got {:?})", arg);
            std::process::exit(1);
        });
        print_spiral(n);
    }
}
