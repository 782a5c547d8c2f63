// Tests for SimulationEngine functionality
#[cfg(test)]
mod tests {
    use crate::core::{
        execution::config::{SimulationConfig, WorkloadConfig},
        random::Workload,
        roster::Roster,
        simulation_engine::{simulate, SimulationEngine, SimulationObserver},
        event::Event,
        supplier::Supplier,
        types::SimTime,
    };
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn shop(servers: usize, self_checkouts: usize, max_queue: usize, arrivals: &[f64]) -> SimulationConfig {
        SimulationConfig::new()
            .with_servers(servers)
            .with_self_checkouts(self_checkouts)
            .with_max_queue(max_queue)
            .with_arrival_times(arrivals.to_vec())
    }

    fn run_fixed(config: &SimulationConfig, service: f64, rest: f64) -> String {
        simulate(config, Supplier::constant(service), Supplier::constant(rest)).unwrap()
    }

    /// Records every roster invariant violation seen during a run
    #[derive(Default)]
    struct InvariantProbe {
        violations: Rc<RefCell<Vec<String>>>,
        last_time: Rc<Cell<SimTime>>,
        events: Rc<Cell<usize>>,
    }

    impl SimulationObserver for InvariantProbe {
        fn on_time_advance(&mut self, old_time: SimTime, new_time: SimTime) {
            if new_time < old_time {
                self.violations
                    .borrow_mut()
                    .push(format!("time went back from {} to {}", old_time, new_time));
            }
            self.last_time.set(new_time);
        }

        fn on_event_processed(&mut self, event: &Event, roster: &Roster) {
            self.events.set(self.events.get() + 1);
            let mut violations = self.violations.borrow_mut();
            for server in roster {
                if server.queue_len() > server.max_queue() {
                    violations.push(format!("server {} over capacity after {}", server.id(), event.name()));
                }
            }
            let mut counters = roster.self_checkouts().map(|s| s.queue_len());
            if let Some(first) = counters.next() {
                if counters.any(|len| len != first) {
                    violations.push(format!("self-checkout queues diverged after {}", event.name()));
                }
            }
        }
    }

    #[test]
    fn test_single_customer_single_server() {
        let output = run_fixed(&shop(1, 0, 0, &[0.0]), 1.0, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             1.000 1 done serving by 1\n\
             [0.000 1 0]"
        );
    }

    #[test]
    fn test_tie_goes_to_lower_customer_and_second_leaves() {
        let output = run_fixed(&shop(1, 0, 0, &[0.0, 0.0]), 1.0, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             0.000 2 arrives\n\
             0.000 2 leaves\n\
             1.000 1 done serving by 1\n\
             [0.000 1 1]"
        );
    }

    #[test]
    fn test_queued_customer_served_when_server_frees() {
        let output = run_fixed(&shop(1, 0, 1, &[0.0, 0.0]), 2.0, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             0.000 2 arrives\n\
             0.000 2 waits at 1\n\
             2.000 1 done serving by 1\n\
             2.000 2 serves by 1\n\
             4.000 2 done serving by 1\n\
             [1.000 2 0]"
        );
    }

    #[test]
    fn test_negative_zero_arrival_ties_with_zero() {
        let output = run_fixed(&shop(1, 0, 0, &[0.0, -0.0]), 1.0, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             0.000 2 arrives\n\
             0.000 2 leaves\n\
             1.000 1 done serving by 1\n\
             [0.000 1 1]"
        );
    }

    #[test]
    fn test_half_millisecond_times_round_up() {
        let output = run_fixed(&shop(1, 0, 1, &[0.0, 0.0]), 0.0625, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             0.000 2 arrives\n\
             0.000 2 waits at 1\n\
             0.063 1 done serving by 1\n\
             0.063 2 serves by 1\n\
             0.125 2 done serving by 1\n\
             [0.031 2 0]"
        );
    }

    #[test]
    fn test_self_checkouts_share_one_queue() {
        let output = run_fixed(&shop(0, 2, 5, &[0.0, 0.0, 0.0]), 1.0, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by self-check 1\n\
             0.000 2 arrives\n\
             0.000 2 serves by self-check 2\n\
             0.000 3 arrives\n\
             0.000 3 waits at self-check 1\n\
             1.000 1 done serving by self-check 1\n\
             1.000 2 done serving by self-check 2\n\
             1.000 3 serves by self-check 1\n\
             2.000 3 done serving by self-check 1\n\
             [0.333 3 0]"
        );
    }

    #[test]
    fn test_self_checkout_queue_counts_move_together() {
        let config = shop(0, 2, 5, &[0.0, 0.0, 0.0]);
        let mut engine = SimulationEngine::new(&config, Supplier::constant(1.0), Supplier::constant(0.0)).unwrap();

        let mut peak = 0;
        while engine.step() {
            let lens: Vec<usize> = engine.roster().self_checkouts().map(|s| s.queue_len()).collect();
            assert!(lens.windows(2).all(|w| w[0] == w[1]), "queues diverged: {:?}", lens);
            peak = peak.max(lens[0]);
        }

        assert_eq!(peak, 1);
        assert!(engine.roster().self_checkouts().all(|s| s.queue_len() == 0));
        assert_eq!(engine.statistics().served, 3);
    }

    #[test]
    fn test_rest_delays_next_service() {
        let output = run_fixed(&shop(1, 0, 1, &[0.0, 0.5]), 1.0, 2.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             0.500 2 arrives\n\
             0.500 2 waits at 1\n\
             1.000 1 done serving by 1\n\
             3.000 2 serves by 1\n\
             4.000 2 done serving by 1\n\
             [1.250 2 0]"
        );
    }

    #[test]
    fn test_humans_and_self_checkouts_together() {
        let output = run_fixed(&shop(1, 1, 1, &[0.0, 0.0, 0.0, 0.0]), 1.0, 0.0);
        assert_eq!(
            output,
            "0.000 1 arrives\n\
             0.000 1 serves by 1\n\
             0.000 2 arrives\n\
             0.000 2 serves by self-check 2\n\
             0.000 3 arrives\n\
             0.000 3 waits at 1\n\
             0.000 4 arrives\n\
             0.000 4 waits at self-check 2\n\
             1.000 1 done serving by 1\n\
             1.000 2 done serving by self-check 2\n\
             1.000 3 serves by 1\n\
             1.000 4 serves by self-check 2\n\
             2.000 3 done serving by 1\n\
             2.000 4 done serving by self-check 2\n\
             [0.500 4 0]"
        );
    }

    #[test]
    fn test_no_customers() {
        let output = run_fixed(&shop(2, 1, 1, &[]), 1.0, 0.0);
        assert_eq!(output, "[0.000 0 0]");
    }

    #[test]
    fn test_service_time_drawn_once_per_served_customer() {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let service = Supplier::new(move || {
            counter.set(counter.get() + 1);
            1.5
        });

        let config = shop(1, 1, 1, &[0.0, 0.0, 0.1, 0.2, 0.3, 0.4, 2.0]);
        let report = SimulationEngine::new(&config, service, Supplier::constant(0.25))
            .unwrap()
            .run();

        assert_eq!(calls.get(), report.statistics.served);
        assert_eq!(report.statistics.resolved(), 7);
    }

    #[test]
    fn test_invariants_hold_under_random_load() {
        for seed in 0..20 {
            let workload = WorkloadConfig::new(2, 3, 2, 200)
                .with_seed(seed)
                .with_rates(2.0, 0.6)
                .with_rest(0.5, 0.4);
            let Workload {
                config,
                service_time,
                rest_time,
            } = Workload::generate(&workload).unwrap();

            let probe = InvariantProbe::default();
            let violations = Rc::clone(&probe.violations);
            let events = Rc::clone(&probe.events);

            let mut engine = SimulationEngine::new(&config, service_time, rest_time).unwrap();
            engine.add_observer(Box::new(probe));
            let report = engine.run();

            assert!(violations.borrow().is_empty(), "seed {}: {:?}", seed, violations.borrow());
            assert_eq!(report.statistics.resolved(), 200, "seed {}", seed);
            assert!(events.get() >= 400);
        }
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let result = SimulationEngine::new(
            &shop(0, 0, 1, &[0.0]),
            Supplier::constant(1.0),
            Supplier::constant(0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_step_reports_pending_events() {
        let config = shop(1, 0, 0, &[0.0]);
        let mut engine = SimulationEngine::new(&config, Supplier::constant(1.0), Supplier::constant(0.0)).unwrap();

        assert!(engine.has_pending_events());
        assert!(engine.step()); // arrive
        assert!(engine.step()); // serve
        assert!(!engine.step()); // done
        assert!(!engine.step());
        assert_eq!(engine.events_processed(), 3);
        assert_eq!(engine.current_time(), 1.0);
        assert_eq!(engine.lines().len(), 3);
    }
}
