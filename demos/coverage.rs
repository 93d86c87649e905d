//! Check that every order up to a limit produces a full spiral: values form
//! a permutation of 1..=n², value 1 sits on the biased centre, and each
//! value is a 4-neighbour of the next.
//!
//! Usage: cargo run --release --example coverage -- [max_n]

use spiral_matrix::{SpiralMatrix, generate};
use std::env;
use std::time::Instant;

fn check(m: &SpiralMatrix) -> Result<(), String> {
    let n = m.n();
    let mut seen = vec![false; n * n];
    for &v in m.cells() {
        let slot = (v as usize)
            .checked_sub(1)
            .filter(|&s| s < seen.len())
            .ok_or_else(|| format!("value {} out of range", v))?;
        if seen[slot] {
            return Err(format!("value {} repeated", v));
        }
        seen[slot] = true;
    }

    let centre = if n % 2 == 0 { n / 2 - 1 } else { n / 2 };
    if m.get(centre, centre) != 1 {
        return Err(format!("1 is not at ({}, {})", centre, centre));
    }

    let mut positions = vec![(0usize, 0usize); n * n];
    for (idx, &v) in m.cells().iter().enumerate() {
        positions[v as usize - 1] = (idx / n, idx % n);
    }
    for (v, pair) in positions.windows(2).enumerate() {
        let ((r0, c0), (r1, c1)) = (pair[0], pair[1]);
        if r0.abs_diff(r1) + c0.abs_diff(c1) != 1 {
            return Err(format!("{} and {} are not adjacent", v + 1, v + 2));
        }
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let max_n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);

    println!("=== Spiral Coverage Check ===");
    println!("n = 1..={}", max_n);
    println!();

    let start = Instant::now();
    let mut failures = 0;
    for n in 1..=max_n {
        let m = match generate(n) {
            Ok(m) => m,
            Err(e) => {
                println!("n={:>5}: {}", n, e);
                failures += 1;
                continue;
            }
        };
        if let Err(reason) = check(&m) {
            println!("n={:>5}: FAIL ({})", n, reason);
            failures += 1;
        }
    }

    println!(
        "checked {} orders in {:.2?}, {} failure(s)",
        max_n,
        start.elapsed(),
        failures
    );
    if failures > 0 {
        std::process::exit(1);
    }
}
