//! Measurement driver for the transpose kernels.
//!
//! Runs every registered candidate on the evaluation shapes, checks each
//! result against the correctness predicate, and reports the simulated
//! miss counts side by side.

use blocked_transpose::cache::{CACHE_BYTES, LINE_BYTES, MissProfile, count_misses};
use blocked_transpose::is_transpose;
use blocked_transpose::registry::candidates;

fn main() {
    println!("=== Blocked Transpose Miss Counts ===\n");
    println!(
        "Cache model: {} bytes, {}-byte lines, direct-mapped ({} sets)\n",
        CACHE_BYTES,
        LINE_BYTES,
        CACHE_BYTES / LINE_BYTES
    );

    println!("Registered functions:");
    for candidate in candidates() {
        println!("  {:10} {}", candidate.name, candidate.desc);
    }
    println!();

    // (m, n): A is n rows × m cols. These are the graded shapes.
    let shapes = [(32, 32), (64, 64), (61, 67)];
    let mut summary = Vec::new();

    for (m, n) in shapes {
        println!("Matrix: {}×{} -> {}×{}", n, m, m, n);
        println!("{}", "-".repeat(60));

        let a: Vec<i32> = (0..(n * m) as i32).collect();
        let mut results: Vec<(&str, MissProfile)> = Vec::new();
        let mut baseline = None;

        for candidate in candidates() {
            if !candidate.accepts(m, n) {
                continue;
            }

            let mut b = vec![0i32; m * n];
            let profile = count_misses(m, n, &a, &mut b, candidate.run);

            if !is_transpose(m, n, &a, &b) {
                println!("{:10} INCORRECT RESULT, skipping", candidate.name);
                continue;
            }

            if candidate.name == "rowwise" {
                baseline = Some(profile.misses);
            }
            results.push((candidate.name, profile));
        }

        for (i, (name, profile)) in results.iter().enumerate() {
            let vs_naive = match baseline {
                Some(base) if base > 0 => base as f64 / profile.misses as f64,
                _ => 1.0,
            };
            println!(
                "{}. {:10} {:6} misses  {:6} hits  {:6} evictions  ({:.1}× vs naive)",
                i + 1,
                name,
                profile.misses,
                profile.hits,
                profile.evictions,
                vs_naive
            );
        }
        println!();

        summary.push((m, n, results));
    }

    print_summary_table(&summary);
}

fn print_summary_table(summary: &[(usize, usize, Vec<(&str, MissProfile)>)]) {
    println!("=== Summary (misses, lower is better) ===\n");

    print!("{:12}", "kernel");
    for (m, n, _) in summary {
        print!("{:>12}", format!("{}x{}", n, m));
    }
    println!();

    for candidate in candidates() {
        let name = candidate.name;
        print!("{:12}", name);
        for (_, _, results) in summary {
            match results.iter().find(|(other, _)| *other == name) {
                Some((_, profile)) => print!("{:>12}", profile.misses),
                None => print!("{:>12}", "-"),
            }
        }
        println!();
    }
}
