use super::config::{ConcurrencyMode, ReplicationConfig, WorkloadConfig};
use crate::core::errors::ConfigError;
use crate::core::random::Workload;
use crate::core::simulation_engine::SimulationEngine;
use crate::core::statistics::Statistics;
use log::debug;
use rayon::prelude::*;

/// Run one randomized simulation per seed.
///
/// Every replication builds its own roster and generator inside the worker,
/// so no simulation state crosses threads. Results are in `seeds` order and
/// do not depend on the concurrency mode.
pub fn run_replications(
    workload: &WorkloadConfig,
    seeds: &[u64],
    config: &ReplicationConfig,
) -> Result<Vec<Statistics>, ConfigError> {
    workload.validate()?;

    match config.concurrency_mode {
        ConcurrencyMode::Sequential => seeds.iter().map(|&seed| replicate(workload, seed)).collect(),
        ConcurrencyMode::Rayon => {
            let run = || {
                seeds
                    .par_iter()
                    .map(|&seed| replicate(workload, seed))
                    .collect::<Result<Vec<_>, _>>()
            };
            match config.thread_pool_size {
                Some(threads) => rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| ConfigError::ThreadPool(e.to_string()))?
                    .install(run),
                None => run(),
            }
        }
    }
}

fn replicate(workload: &WorkloadConfig, seed: u64) -> Result<Statistics, ConfigError> {
    let seeded = WorkloadConfig {
        seed,
        ..workload.clone()
    };
    let Workload {
        config,
        service_time,
        rest_time,
    } = Workload::generate(&seeded)?;

    let report = SimulationEngine::new(&config, service_time, rest_time)?.run();
    debug!("Replication with seed {} finished: {}", seed, report.statistics);
    Ok(report.statistics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload() -> WorkloadConfig {
        WorkloadConfig::new(2, 2, 2, 40)
            .with_rates(1.0, 1.2)
            .with_rest(0.5, 0.3)
    }

    #[test]
    fn test_sequential_vs_parallel_execution() {
        let seeds: Vec<u64> = (1..=8).collect();

        let sequential = run_replications(&workload(), &seeds, &ReplicationConfig::new()).unwrap();
        let parallel = run_replications(
            &workload(),
            &seeds,
            &ReplicationConfig::new().with_concurrency(ConcurrencyMode::Rayon),
        )
        .unwrap();

        assert_eq!(sequential.len(), seeds.len());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_parallel_with_thread_pool_size() {
        let seeds = [11, 12, 13];
        let config = ReplicationConfig::new()
            .with_concurrency(ConcurrencyMode::Rayon)
            .with_thread_pool_size(2);

        let results = run_replications(&workload(), &seeds, &config).unwrap();
        for stats in results {
            assert_eq!(stats.resolved(), 40);
        }
    }

    #[test]
    fn test_replications_reject_invalid_workload() {
        let bad = WorkloadConfig::new(0, 0, 1, 5);
        let result = run_replications(&bad, &[1], &ReplicationConfig::new());
        assert_eq!(result, Err(ConfigError::NoServers));
    }
}
