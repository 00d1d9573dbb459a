use super::DecisionError;
use heartless_core::model::card::Card;
use heartless_core::model::hand::Hand;
use tracing::{Level, event};

/// Queen of spades sits below every other score so it always goes first.
const QUEEN_OF_SPADES_PASS_SCORE: i32 = -60;

pub struct PassPlanner;

impl PassPlanner {
    /// Picks the three lowest-scoring cards, lowest first.
    pub fn choose(hand: &Hand) -> Result<[Card; 3], DecisionError> {
        if hand.len() < 3 {
            return Err(DecisionError::HandTooSmall { held: hand.len() });
        }

        let mut scored: Vec<(Card, i32)> = hand
            .iter()
            .copied()
            .map(|card| (card, passing_score(card)))
            .collect();
        scored.sort_by_key(|(_, score)| *score);

        let picks = [scored[0].0, scored[1].0, scored[2].0];
        event!(
            target: "heartless_bot::pass_decision",
            Level::DEBUG,
            hand_size = hand.len(),
            first = %picks[0],
            second = %picks[1],
            third = %picks[2],
            scores = ?[scored[0].1, scored[1].1, scored[2].1],
        );
        Ok(picks)
    }
}

/// Lower scores are passed first: high ranks before low ones, and within a
/// rank the later suit (hearts, then spades, diamonds, clubs).
pub fn passing_score(card: Card) -> i32 {
    if card.is_queen_of_spades() {
        return QUEEN_OF_SPADES_PASS_SCORE;
    }
    -(card.rank.value() as i32 * 4 + card.suit.index() as i32)
}
