mod replica;

pub use replica::ReplicaPolicy;

use crate::bot::DecisionError;
use heartless_core::model::card::Card;
use heartless_core::model::decision::Decision;
use heartless_core::model::hand::Hand;
use heartless_core::model::player::{Seat, SeatMap, SeatState};
use heartless_core::model::round::{RoundPhase, RoundState};

/// Everything observable by the deciding seat
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub round: &'a RoundState,
    pub seats: &'a SeatMap<SeatState>,
}

/// Decision-making interface for one seat
pub trait Policy: Send {
    /// Choose 3 cards to pass (round 0)
    fn choose_pass(&mut self, ctx: &PolicyContext) -> Result<[Card; 3], DecisionError>;

    /// Choose 1 card to play (round 1 and later)
    fn choose_play(&mut self, ctx: &PolicyContext) -> Result<Card, DecisionError>;

    /// Dispatches on the round phase.
    fn decide(&mut self, ctx: &PolicyContext) -> Result<Decision, DecisionError> {
        match ctx.round.phase() {
            RoundPhase::Passing => self.choose_pass(ctx).map(Decision::Pass),
            RoundPhase::Playing => self.choose_play(ctx).map(Decision::Play),
        }
    }
}
