use shopsim::core::execution::run_replications;
use shopsim::{ConcurrencyMode, ReplicationConfig, WorkloadConfig};
use std::time::Instant;

fn main() -> Result<(), String> {
    env_logger::init();

    let replications: u64 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().map_err(|_| format!("Invalid replication count '{}'", arg)))
        .transpose()?
        .unwrap_or(32);

    println!("🛒 Running {} shop replications 🛒", replications);

    let workload = WorkloadConfig::new(2, 3, 2, 1_000)
        .with_rates(1.8, 1.0)
        .with_rest(0.5, 0.25);
    let seeds: Vec<u64> = (1..=replications).collect();

    for mode in [ConcurrencyMode::Sequential, ConcurrencyMode::Rayon] {
        let config = ReplicationConfig::new().with_concurrency(mode);
        let start = Instant::now();
        let results = run_replications(&workload, &seeds, &config).map_err(|e| e.to_string())?;
        let elapsed = start.elapsed();

        let runs = results.len().max(1) as f64;
        let mean_wait = results.iter().map(|s| s.average_wait()).sum::<f64>() / runs;
        let mean_left = results.iter().map(|s| s.left as f64).sum::<f64>() / runs;
        println!(
            "{:?}: mean wait {:.3}, mean left {:.1}, took {:?}",
            mode, mean_wait, mean_left, elapsed
        );
    }

    Ok(())
}
