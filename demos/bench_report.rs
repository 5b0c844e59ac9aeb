//! Fetch and print the latest benchmark run.
//!
//! ```sh
//! cargo run --example bench_report -- https://bench.example.org
//! ```

use anyhow::{Context, Result};

use docdeck::bench;

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let base_url = std::env::args()
        .nth(1)
        .context("usage: bench_report <service-url>")?;

    let run = bench::get_last_benchmark_run(&base_url)?;

    println!("run {} ({})", run.id, run.created.to_rfc3339());
    for file in run.files() {
        println!("{file}");
        let Some(suites) = run.suites(file) else {
            continue;
        };
        for (suite, methods) in suites {
            for (method, stats) in methods {
                println!(
                    "  {suite} / {method}: {:>12.0} ops/s  ±{:.2}%  mean {:.6}s",
                    stats.hz, stats.rme, stats.mean
                );
            }
        }
    }
    Ok(())
}
