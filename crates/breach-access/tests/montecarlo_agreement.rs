use breach_access::{compose, cross_check, simulate, AccessOp, DeckSpec, Scenario, SimulationOpts};
use breach_core::{BreachError, DeckState};

fn super_round() -> Vec<AccessOp> {
    vec![AccessOp::khusyuk(4), AccessOp::DeepDive, AccessOp::DeepDive]
}

#[test]
fn sampled_super_round_matches_exact() {
    let deck = DeckState::new(24, 4).unwrap();
    let opts = SimulationOpts {
        trials: 20_000,
        seed: 7,
    };
    let estimate = simulate(&deck, &super_round(), 4, &opts).unwrap();
    let exact = compose(&deck, &super_round(), 4).unwrap();
    assert!((estimate.total() - 1.0).abs() < 1e-9);
    assert!(
        exact.max_abs_deviation(&estimate) < 0.02,
        "exact {exact:?} vs estimate {estimate:?}"
    );
}

#[test]
fn sampled_breaches_match_exact() {
    let deck = DeckState::new(10, 3).unwrap();
    let ops = [AccessOp::Breach, AccessOp::Breach, AccessOp::DeepDive];
    let opts = SimulationOpts {
        trials: 20_000,
        seed: 11,
    };
    let estimate = simulate(&deck, &ops, 4, &opts).unwrap();
    let exact = compose(&deck, &ops, 4).unwrap();
    assert!(exact.max_abs_deviation(&estimate) < 0.02);
}

#[test]
fn same_seed_same_estimate() {
    let deck = DeckState::new(24, 4).unwrap();
    let opts = SimulationOpts {
        trials: 2_000,
        seed: 99,
    };
    let a = simulate(&deck, &super_round(), 4, &opts).unwrap();
    let b = simulate(&deck, &super_round(), 4, &opts).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_trials_is_rejected() {
    let deck = DeckState::new(24, 4).unwrap();
    let opts = SimulationOpts { trials: 0, seed: 1 };
    let err = simulate(&deck, &super_round(), 4, &opts).unwrap_err();
    assert!(matches!(err, BreachError::Config(_)));
}

#[test]
fn cross_check_report_records_seed() {
    let scenario = Scenario::super_round(DeckSpec::with_agendas(24, 4), 4);
    let opts = SimulationOpts {
        trials: 5_000,
        seed: 3,
    };
    let report = cross_check(&scenario, &opts).unwrap();
    assert_eq!(report.provenance.seed, Some(3));
    assert_eq!(report.trials, 5_000);
    assert!(report.max_abs_deviation < 0.04);
}
