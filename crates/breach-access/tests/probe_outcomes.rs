use breach_access::{Access, AccessOp, Breach, DeepDive, Khusyuk, Outcome};
use breach_core::{DeckState, ExactHypergeometric};

const EPS: f64 = 1e-9;

fn deck(cards: u32, agendas: u32) -> DeckState {
    DeckState::new(cards, agendas).expect("valid deck")
}

fn total(outcomes: &[Outcome]) -> f64 {
    outcomes.iter().map(|o| o.probability).sum()
}

fn assert_near(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < EPS, "{actual} != {expected}");
}

#[test]
fn breach_hits_with_agenda_share() {
    let outcomes = Breach
        .access(&deck(24, 4), 4, &ExactHypergeometric)
        .unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_near(outcomes[0].probability, 20.0 / 24.0);
    assert_near(outcomes[1].probability, 4.0 / 24.0);
    assert!(outcomes.iter().all(|o| o.clicks_spent == 1));
}

#[test]
fn every_access_idles_on_dry_deck_or_no_clicks() {
    let ops = [AccessOp::Breach, AccessOp::khusyuk(4), AccessOp::DeepDive];
    for op in ops {
        let dry = op.access(&deck(24, 0), 4, &ExactHypergeometric).unwrap();
        assert_eq!(dry, vec![Outcome::idle()], "{} on dry deck", op.name());
        let broke = op.access(&deck(24, 4), 0, &ExactHypergeometric).unwrap();
        assert_eq!(broke, vec![Outcome::idle()], "{} without clicks", op.name());
    }
    // An empty deck is dry as well.
    let empty = DeepDive
        .access(&deck(0, 0), 3, &ExactHypergeometric)
        .unwrap();
    assert_eq!(empty[0].clicks_spent, 0);
}

#[test]
fn khusyuk_folds_multiple_hits_into_one() {
    let outcomes = Khusyuk::new(4)
        .access(&deck(24, 4), 1, &ExactHypergeometric)
        .unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_near(outcomes[0].probability, 0.455_957_086_391_869);
    assert_near(outcomes[1].probability, 0.544_042_913_608_131);
    assert_near(total(&outcomes), 1.0);
    assert!(outcomes.iter().all(|o| o.clicks_spent == 1));
}

#[test]
fn khusyuk_cap_is_configurable() {
    let outcomes = Khusyuk::with_cap(4, 2)
        .access(&deck(24, 4), 1, &ExactHypergeometric)
        .unwrap();
    let stolen: Vec<u32> = outcomes.iter().map(|o| o.agendas_stolen).collect();
    assert_eq!(stolen, vec![0, 1, 2]);
    assert_near(outcomes[1].probability, 0.429_136_081_309_994_4);
    assert_near(outcomes[2].probability, 0.114_906_832_298_136_6);
}

#[test]
fn deep_dive_costs_a_click_per_steal() {
    let outcomes = DeepDive
        .access(&deck(24, 4), 2, &ExactHypergeometric)
        .unwrap();
    let costs: Vec<u32> = outcomes.iter().map(|o| o.clicks_spent).collect();
    assert_eq!(costs, vec![1, 1, 2]);
    assert_near(outcomes[0].probability, 0.171_277_997_364_953_9);
    assert_near(outcomes[1].probability, 0.421_607_378_129_117_25);
    assert_near(outcomes[2].probability, 0.407_114_624_505_928_8);
}

#[test]
fn deep_dive_with_one_click_steals_at_most_one() {
    let outcomes = DeepDive
        .access(&deck(24, 4), 1, &ExactHypergeometric)
        .unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_near(outcomes[1].probability, 0.828_722_002_635_046_1);
    assert!(outcomes.iter().all(|o| o.clicks_spent <= 1));
}

#[test]
fn deep_dive_on_short_deck_sees_every_card() {
    let outcomes = DeepDive
        .access(&deck(6, 3), 3, &ExactHypergeometric)
        .unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].probability, 0.0);
    assert_eq!(outcomes[1].probability, 0.0);
    assert_near(outcomes[2].probability, 1.0);
}

#[test]
fn access_op_matches_concrete_accesses() {
    let deck = deck(30, 5);
    let pairs: [(AccessOp, Box<dyn Access>); 3] = [
        (AccessOp::Breach, Box::new(Breach)),
        (AccessOp::khusyuk(6), Box::new(Khusyuk::new(6))),
        (AccessOp::DeepDive, Box::new(DeepDive)),
    ];
    for (op, concrete) in pairs {
        assert_eq!(op.name(), concrete.name());
        assert_eq!(
            op.access(&deck, 3, &ExactHypergeometric).unwrap(),
            concrete.access(&deck, 3, &ExactHypergeometric).unwrap()
        );
    }
    assert_eq!(
        AccessOp::from(Khusyuk::with_cap(5, 2)),
        AccessOp::Khusyuk { width: 5, cap: 2 }
    );
}

#[test]
fn single_hit_probabilities() {
    let deck = deck(24, 4);
    let khusyuk = Khusyuk::new(4).hit_probability(&deck).unwrap();
    assert_near(khusyuk, 0.544_042_913_608_131);
    let one = DeepDive::hit_probability(&deck, false).unwrap();
    assert_near(one, 0.828_722_002_635_046_1);
    let two = DeepDive::hit_probability(&deck, true).unwrap();
    assert_near(two, 0.407_114_624_505_928_8);
}
