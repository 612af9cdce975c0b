use breach_access::{compose, AccessOp, Histogram};
use breach_core::DeckState;
use proptest::prelude::*;

fn access_op() -> impl Strategy<Value = AccessOp> {
    prop_oneof![
        Just(AccessOp::Breach),
        (1u32..10, 1u32..3).prop_map(|(width, cap)| AccessOp::Khusyuk { width, cap }),
        Just(AccessOp::DeepDive),
    ]
}

fn deck() -> impl Strategy<Value = DeckState> {
    (0u32..30)
        .prop_flat_map(|cards| (Just(cards), 0..=cards))
        .prop_map(|(cards, agendas)| DeckState::new(cards, agendas).unwrap())
}

proptest! {
    #[test]
    fn histogram_sums_to_one(
        deck in deck(),
        ops in prop::collection::vec(access_op(), 1..5),
        clicks in 0u32..7,
    ) {
        let histogram = compose(&deck, &ops, clicks).unwrap();
        prop_assert!((histogram.total() - 1.0).abs() < 1e-9);
        prop_assert!(histogram.iter().all(|(_, p)| (-1e-12..=1.0 + 1e-12).contains(&p)));
        let max = histogram.max_successes().unwrap_or(0);
        prop_assert!(max <= deck.agendas_left());
    }

    #[test]
    fn no_agendas_or_no_clicks_means_no_steals(
        cards in 0u32..30,
        agendas in 0u32..30,
        ops in prop::collection::vec(access_op(), 1..5),
        clicks in 0u32..7,
    ) {
        prop_assume!(agendas <= cards);
        let dry = DeckState::new(cards, 0).unwrap();
        prop_assert_eq!(compose(&dry, &ops, clicks).unwrap(), Histogram::certain_miss());
        let deck = DeckState::new(cards, agendas).unwrap();
        prop_assert_eq!(compose(&deck, &ops, 0).unwrap(), Histogram::certain_miss());
    }

    #[test]
    fn more_clicks_never_lower_the_odds(
        deck in deck(),
        ops in prop::collection::vec(access_op(), 1..4),
        clicks in 0u32..6,
    ) {
        let fewer = compose(&deck, &ops, clicks).unwrap();
        let more = compose(&deck, &ops, clicks + 1).unwrap();
        for threshold in 0..=deck.agendas_left() {
            prop_assert!(more.at_least(threshold) + 1e-9 >= fewer.at_least(threshold));
        }
    }
}
