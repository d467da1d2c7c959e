//! Leg sequence editing.
//!
//! Leg order is an explicit sequence because display order matters to
//! the user even though it is payoff-irrelevant. The UI layer translates
//! drag gestures into [`move_leg`] calls; all operations are total over
//! valid ids and no-ops over unknown ones.

use super::ids::LegId;
use super::leg::OptionLeg;

/// Relocate one leg to `to_index`, preserving the relative order of all
/// others (stable remove-then-insert semantics).
///
/// The destination is clamped to the valid range. Moving an unknown id
/// is a no-op. Returns whether the leg was found.
pub fn move_leg(legs: &mut Vec<OptionLeg>, id: &LegId, to_index: usize) -> bool {
    let Some(from) = legs.iter().position(|leg| &leg.id == id) else {
        return false;
    };
    let to = to_index.min(legs.len() - 1);
    if from != to {
        let leg = legs.remove(from);
        legs.insert(to, leg);
    }
    true
}

/// Append a leg at the end of the sequence.
pub fn insert_after_last(legs: &mut Vec<OptionLeg>, leg: OptionLeg) {
    legs.push(leg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::leg::{LegAction, OptionKind};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn make_legs(count: u32) -> Vec<OptionLeg> {
        (0..count)
            .map(|i| {
                OptionLeg::new(
                    OptionKind::Call,
                    LegAction::Buy,
                    Decimal::from(24000 + i * 50),
                    "21 Nov 24",
                    1,
                    25,
                    Decimal::from(100 + i),
                )
                .unwrap()
            })
            .collect()
    }

    fn order(legs: &[OptionLeg]) -> Vec<LegId> {
        legs.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_move_forward_and_backward() {
        let mut legs = make_legs(4);
        let ids = order(&legs);

        assert!(move_leg(&mut legs, &ids[0], 2));
        assert_eq!(order(&legs), vec![
            ids[1].clone(),
            ids[2].clone(),
            ids[0].clone(),
            ids[3].clone()
        ]);

        assert!(move_leg(&mut legs, &ids[0], 0));
        assert_eq!(order(&legs), ids);
    }

    #[test]
    fn test_move_clamps_destination() {
        let mut legs = make_legs(3);
        let ids = order(&legs);

        assert!(move_leg(&mut legs, &ids[0], 99));
        assert_eq!(order(&legs), vec![
            ids[1].clone(),
            ids[2].clone(),
            ids[0].clone()
        ]);
    }

    #[test]
    fn test_move_unknown_id_is_noop() {
        let mut legs = make_legs(3);
        let before = order(&legs);

        assert!(!move_leg(&mut legs, &LegId::new("missing"), 1));
        assert_eq!(order(&legs), before);
    }

    #[test]
    fn test_move_to_same_index_is_noop() {
        let mut legs = make_legs(3);
        let before = order(&legs);

        assert!(move_leg(&mut legs, &before[1], 1));
        assert_eq!(order(&legs), before);
    }

    #[test]
    fn test_insert_after_last_appends() {
        let mut legs = make_legs(2);
        let extra = make_legs(1).pop().unwrap();
        let extra_id = extra.id.clone();

        insert_after_last(&mut legs, extra);
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[2].id, extra_id);
    }

    proptest! {
        // move(id, j) followed by move back to the original index
        // restores the original order.
        #[test]
        fn prop_move_round_trip(len in 1u32..8, from in 0usize..8, to in 0usize..8) {
            let mut legs = make_legs(len);
            let before = order(&legs);
            let from = from.min(legs.len() - 1);
            let id = before[from].clone();

            prop_assert!(move_leg(&mut legs, &id, to));
            prop_assert!(move_leg(&mut legs, &id, from));
            prop_assert_eq!(order(&legs), before);
        }
    }
}
