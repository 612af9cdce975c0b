use breach_core::{from_json_slice, to_canonical_json_bytes, BreachError, DeckState};
use proptest::prelude::*;

#[test]
fn rejects_more_agendas_than_cards() {
    let err = DeckState::new(3, 4).unwrap_err();
    assert!(matches!(err, BreachError::InvalidState(_)));
    assert_eq!(err.info().code, "agendas-exceed-cards");
    let cards = err.info().context.get("cards_left").map(String::as_str);
    assert_eq!(cards, Some("3"));
}

#[test]
fn steal_returns_new_state_and_keeps_original() {
    let deck = DeckState::new(24, 4).unwrap();
    let before = deck;
    let after = deck.steal(2).unwrap();
    assert_eq!(deck, before);
    assert_eq!(deck.cards_left(), 24);
    assert_eq!(deck.agendas_left(), 4);
    assert_eq!(after.cards_left(), 22);
    assert_eq!(after.agendas_left(), 2);
}

#[test]
fn steal_more_than_remaining_is_invalid() {
    let deck = DeckState::new(24, 1).unwrap();
    let err = deck.steal(2).unwrap_err();
    assert_eq!(err.info().code, "steal-overdraw");
}

#[test]
fn density_floors_agenda_count() {
    let deck = DeckState::from_density(24, 6).unwrap();
    assert_eq!(deck.agendas_left(), 4);
    let deck = DeckState::from_density(23, 6).unwrap();
    assert_eq!(deck.agendas_left(), 3);
    assert!(DeckState::from_density(24, 0).is_err());
}

#[test]
fn deserialization_validates() {
    let deck = DeckState::new(10, 2).unwrap();
    let bytes = to_canonical_json_bytes(&deck).unwrap();
    assert_eq!(
        String::from_utf8(bytes.clone()).unwrap(),
        r#"{"agendas_left":2,"cards_left":10}"#
    );
    let decoded: DeckState = from_json_slice(&bytes).unwrap();
    assert_eq!(decoded, deck);

    let bad: Result<DeckState, _> = from_json_slice(br#"{"cards_left":1,"agendas_left":5}"#);
    assert!(bad.is_err());
    let negative: Result<DeckState, _> = from_json_slice(br#"{"cards_left":-1,"agendas_left":0}"#);
    assert!(negative.is_err());
}

proptest! {
    #[test]
    fn steal_preserves_invariant(cards in 0u32..60, agendas in 0u32..60, take in 0u32..60) {
        prop_assume!(agendas <= cards);
        let deck = DeckState::new(cards, agendas).unwrap();
        match deck.steal(take) {
            Ok(next) => {
                prop_assert!(take <= agendas);
                prop_assert!(next.agendas_left() <= next.cards_left());
                prop_assert_eq!(next.cards_left() + take, cards);
            }
            Err(_) => prop_assert!(take > agendas),
        }
        prop_assert_eq!(deck.cards_left(), cards);
        prop_assert_eq!(deck.agendas_left(), agendas);
    }
}
