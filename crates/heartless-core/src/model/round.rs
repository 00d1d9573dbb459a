use crate::model::card::Card;
use crate::model::player::Seat;
use crate::model::suit::Suit;
use std::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Passing,
    Playing,
}

/// Table state for the trick being decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    round: u8,
    under_the_gun: Seat,
    round_winner: Option<Seat>,
    suit_to_follow: Option<Suit>,
    high_card: Option<Card>,
    discarded: Vec<Card>,
}

impl RoundState {
    /// State for round 0, where nothing but the hand matters.
    pub fn passing() -> Self {
        Self {
            round: 0,
            under_the_gun: Seat::Me,
            round_winner: None,
            suit_to_follow: None,
            high_card: None,
            discarded: Vec::new(),
        }
    }

    pub fn playing(
        round: u8,
        under_the_gun: Seat,
        round_winner: Option<Seat>,
        suit_to_follow: Option<Suit>,
        high_card: Option<Card>,
        discarded: Vec<Card>,
    ) -> Self {
        Self {
            round,
            under_the_gun,
            round_winner,
            suit_to_follow,
            high_card,
            discarded,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        if self.round == 0 {
            RoundPhase::Passing
        } else {
            RoundPhase::Playing
        }
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn is_first_trick(&self) -> bool {
        self.round == 1
    }

    pub fn under_the_gun(&self) -> Seat {
        self.under_the_gun
    }

    /// Seat holding the high card of the trick so far; `None` until someone
    /// has played.
    pub fn round_winner(&self) -> Option<Seat> {
        self.round_winner
    }

    pub fn suit_to_follow(&self) -> Option<Suit> {
        self.suit_to_follow
    }

    pub fn high_card(&self) -> Option<Card> {
        self.high_card
    }

    /// Rank value of the current high card, 0 when nothing has been played.
    pub fn high_rank(&self) -> u8 {
        self.high_card.map(|card| card.rank.value()).unwrap_or(0)
    }

    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    pub fn hearts_broken(&self) -> bool {
        self.discarded.iter().any(|card| card.is_heart())
    }
}
