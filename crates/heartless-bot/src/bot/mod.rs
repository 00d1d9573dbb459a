mod pass;
mod play;

pub use pass::{PassPlanner, passing_score};
pub use play::{PlayBranch, PlayPlanner, discard_score, lead_count};

use heartless_core::codec::CodecError;
use heartless_core::model::hand::Hand;
use heartless_core::model::player::{Seat, SeatMap, SeatState};
use heartless_core::model::round::RoundState;
use heartless_core::model::suit::Suit;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("cannot pass three cards from a hand of {held}")]
    HandTooSmall { held: usize },
    #[error("no card in hand can be played")]
    NoPlayableCard,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// What the deciding seat is asked to do in the current trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRole {
    /// Under the gun: opens the trick.
    Lead,
    /// Holds at least one card of the led suit.
    Follow(Suit),
    /// Void in the led suit (or no suit was given), free to discard anything.
    Slough(Option<Suit>),
}

#[derive(Debug, Clone, Copy)]
pub struct BotContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub round: &'a RoundState,
    pub seats: &'a SeatMap<SeatState>,
}

impl<'a> BotContext<'a> {
    pub fn new(
        seat: Seat,
        hand: &'a Hand,
        round: &'a RoundState,
        seats: &'a SeatMap<SeatState>,
    ) -> Self {
        Self {
            seat,
            hand,
            round,
            seats,
        }
    }

    pub fn role(&self) -> PlayRole {
        if self.seat == self.round.under_the_gun() {
            return PlayRole::Lead;
        }
        match self.round.suit_to_follow() {
            Some(suit) if self.hand.contains_suit(suit) => PlayRole::Follow(suit),
            lead => PlayRole::Slough(lead),
        }
    }

    /// Whether a seat still to play after us in this trick may hold `suit`.
    ///
    /// Only the next two seats are checked, and the scan stops at the leader,
    /// who has already played.
    pub fn late_hand_follows(&self, suit: Suit) -> bool {
        let leader = self.round.under_the_gun();
        let mut follows = false;
        for steps in 1..3 {
            let seat = self.seat.after(steps);
            if seat == leader {
                break;
            }
            if self.seats[seat].may_have.contains(suit) {
                follows = true;
            }
        }
        follows
    }
}
