use super::{BotContext, DecisionError, PlayRole};
use heartless_core::model::card::Card;
use heartless_core::model::hand::Hand;
use heartless_core::model::rank::Rank;
use heartless_core::model::suit::Suit;
use tracing::{Level, event};

/// Spade count used when leading spades would expose the queen or a card that
/// can be forced to take it.
const GUARDED_SPADE_COUNT: usize = 14;
/// Heart count used before hearts are broken, so hearts are led last.
const UNBROKEN_HEART_COUNT: usize = 15;

/// Which heuristic rule produced the card; reported in decision logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayBranch {
    OpeningTwoOfClubs,
    LeadShortSuit,
    DuckQueenOfSpades,
    DuckUnder,
    FollowLow,
    FollowHigh,
    SloughQueenOfSpades,
    SloughHighHeart,
    SloughLowestScore,
}

pub struct PlayPlanner;

impl PlayPlanner {
    pub fn choose(ctx: &BotContext<'_>) -> Result<(Card, PlayBranch), DecisionError> {
        let (card, branch) = match ctx.role() {
            PlayRole::Lead => lead(ctx)?,
            PlayRole::Follow(suit) => follow(ctx, suit)?,
            PlayRole::Slough(_) => slough(ctx)?,
        };
        event!(
            target: "heartless_bot::play_decision",
            Level::DEBUG,
            seat = %ctx.seat,
            round = ctx.round.round(),
            role = ?ctx.role(),
            branch = ?branch,
            card = %card,
        );
        Ok((card, branch))
    }
}

fn lead(ctx: &BotContext<'_>) -> Result<(Card, PlayBranch), DecisionError> {
    if ctx.round.is_first_trick() {
        return Ok((Card::TWO_OF_CLUBS, PlayBranch::OpeningTwoOfClubs));
    }

    let hearts_broken = ctx.round.hearts_broken();
    let mut counts: Vec<(Suit, usize)> = Suit::ALL
        .into_iter()
        .map(|suit| (suit, lead_count(ctx.hand, suit, hearts_broken)))
        .collect();
    // Stable: equal counts keep club, diamond, spade, heart order.
    counts.sort_by_key(|(_, count)| *count);

    counts
        .into_iter()
        .find_map(|(suit, _)| ctx.hand.cards_of_suit(suit).first().copied())
        .map(|card| (card, PlayBranch::LeadShortSuit))
        .ok_or(DecisionError::NoPlayableCard)
}

/// Effective suit length used to pick the suit to lead; shortest goes first.
pub fn lead_count(hand: &Hand, suit: Suit, hearts_broken: bool) -> usize {
    match suit {
        Suit::Clubs | Suit::Diamonds => hand.count_suit(suit),
        Suit::Spades => {
            let guarded = hand
                .iter()
                .any(|card| card.suit == Suit::Spades && card.rank >= Rank::Queen);
            if guarded {
                GUARDED_SPADE_COUNT
            } else {
                hand.count_suit(suit)
            }
        }
        Suit::Hearts => {
            if hearts_broken {
                hand.count_suit(suit)
            } else {
                UNBROKEN_HEART_COUNT
            }
        }
    }
}

fn follow(ctx: &BotContext<'_>, suit: Suit) -> Result<(Card, PlayBranch), DecisionError> {
    let mut cards = ctx.hand.cards_of_suit(suit);
    cards.sort_by(|a, b| b.rank.cmp(&a.rank));

    let high_rank = ctx.round.high_rank();
    let mut rank_to_discard = Rank::Ace.value();
    let mut high_rank_to_discard = 0;

    for card in cards {
        let rank = card.rank.value();
        if rank < high_rank {
            if suit == Suit::Spades
                && ctx.hand.contains(Card::QUEEN_OF_SPADES)
                && Rank::Queen.value() < high_rank
            {
                return Ok((Card::QUEEN_OF_SPADES, PlayBranch::DuckQueenOfSpades));
            }
            return Ok((card, PlayBranch::DuckUnder));
        }
        if rank_to_discard >= rank {
            rank_to_discard = rank;
            if high_rank_to_discard < rank && suit != Suit::Hearts && !card.is_queen_of_spades() {
                high_rank_to_discard = rank;
            }
        }
    }

    // Every card we hold would take the trick.
    let (rank, branch) = if ctx.late_hand_follows(suit) || high_rank_to_discard == 0 {
        (rank_to_discard, PlayBranch::FollowLow)
    } else {
        (high_rank_to_discard, PlayBranch::FollowHigh)
    };
    Ok((Card::from_value(rank, suit)?, branch))
}

fn slough(ctx: &BotContext<'_>) -> Result<(Card, PlayBranch), DecisionError> {
    let first_trick = ctx.round.is_first_trick();

    if !first_trick {
        if ctx.hand.contains(Card::QUEEN_OF_SPADES) {
            return Ok((Card::QUEEN_OF_SPADES, PlayBranch::SloughQueenOfSpades));
        }
        if let Some(heart) = ctx.hand.cards_of_suit(Suit::Hearts).last().copied() {
            return Ok((heart, PlayBranch::SloughHighHeart));
        }
    }

    ctx.hand
        .iter()
        .copied()
        .min_by_key(|card| discard_score(*card, first_trick))
        .map(|card| (card, PlayBranch::SloughLowestScore))
        .ok_or(DecisionError::NoPlayableCard)
}

/// Lower scores are discarded first. Hearts stay close to zero and therefore
/// rank after every club, diamond and spade; among those, high ranks go first
/// and within a rank spades before diamonds before clubs.
pub fn discard_score(card: Card, first_trick: bool) -> i32 {
    if first_trick && card.is_queen_of_spades() {
        return 0;
    }
    let rank = card.rank.value() as i32;
    match card.suit {
        Suit::Hearts => -rank,
        Suit::Clubs => -rank * 4 - 1 - 16,
        Suit::Diamonds => -rank * 4 - 2 - 16,
        Suit::Spades => -rank * 4 - 3 - 16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::test_support::{card, hand, open_table, round};
    use heartless_core::model::player::{Seat, SeatMap, SeatState};
    use heartless_core::model::round::RoundState;
    use heartless_core::model::suit::SuitSet;

    fn decide(held: &str, state: &RoundState, seats: &SeatMap<SeatState>) -> (Card, PlayBranch) {
        let held = hand(held);
        let ctx = BotContext::new(Seat::Me, &held, state, seats);
        PlayPlanner::choose(&ctx).expect("decision")
    }

    #[test]
    fn first_trick_leader_opens_with_two_of_clubs() {
        let state = round(1, Seat::Me, None, None, "");
        let (chosen, branch) = decide("2cAs9h", &state, &open_table());
        assert_eq!(chosen, Card::TWO_OF_CLUBS);
        assert_eq!(branch, PlayBranch::OpeningTwoOfClubs);
    }

    #[test]
    fn leader_picks_shortest_suit_lowest_card() {
        let state = round(4, Seat::Me, None, None, "");
        // clubs 3, diamonds 1, spades 2 (no Q/K/A), hearts unbroken.
        let (chosen, branch) = decide("259c8d37s2h", &state, &open_table());
        assert_eq!(chosen, card("8d"));
        assert_eq!(branch, PlayBranch::LeadShortSuit);
    }

    #[test]
    fn guarded_spades_are_led_late() {
        let state = round(4, Seat::Me, None, None, "");
        // One spade but it is the king: clubs (2 cards) go first.
        let (chosen, _) = decide("59cKs", &state, &open_table());
        assert_eq!(chosen, card("5c"));
    }

    #[test]
    fn hearts_are_led_only_once_broken() {
        let unbroken = round(5, Seat::Me, None, None, "2c3c");
        let (chosen, _) = decide("4h789c", &unbroken, &open_table());
        assert_eq!(chosen, card("7c"));

        let broken = round(5, Seat::Me, None, None, "2c9h");
        let (chosen, _) = decide("4h789c", &broken, &open_table());
        assert_eq!(chosen, card("4h"));
    }

    #[test]
    fn leader_with_only_unbroken_hearts_still_leads() {
        let state = round(6, Seat::Me, None, None, "");
        let (chosen, _) = decide("9K7h", &state, &open_table());
        assert_eq!(chosen, card("7h"));
    }

    #[test]
    fn leader_with_empty_hand_fails() {
        let held = hand("");
        let state = round(6, Seat::Me, None, None, "");
        let seats = open_table();
        let ctx = BotContext::new(Seat::Me, &held, &state, &seats);
        assert_eq!(PlayPlanner::choose(&ctx), Err(DecisionError::NoPlayableCard));
    }

    #[test]
    fn follower_ducks_with_highest_losing_card() {
        let state = round(3, Seat::Left, Some(Suit::Diamonds), Some("0d"), "0d");
        let (chosen, branch) = decide("38KAd", &state, &open_table());
        assert_eq!(chosen, card("8d"));
        assert_eq!(branch, PlayBranch::DuckUnder);
    }

    #[test]
    fn follower_ducks_queen_of_spades_under_king() {
        let state = round(3, Seat::Left, Some(Suit::Spades), Some("Ks"), "Ks");
        let (chosen, branch) = decide("4Q0s", &state, &open_table());
        assert_eq!(chosen, Card::QUEEN_OF_SPADES);
        assert_eq!(branch, PlayBranch::DuckQueenOfSpades);
    }

    #[test]
    fn follower_plays_low_when_someone_behind_may_follow() {
        let state = round(3, Seat::Opposite, Some(Suit::Clubs), Some("5c"), "5c");
        let (chosen, branch) = decide("9KAc", &state, &open_table());
        assert_eq!(chosen, card("9c"));
        assert_eq!(branch, PlayBranch::FollowLow);
    }

    #[test]
    fn last_to_play_dumps_high_card_it_must_win_with() {
        let mut seats = open_table();
        seats[Seat::Left].may_have = SuitSet::ALL.without(Suit::Clubs);
        let state = round(3, Seat::Opposite, Some(Suit::Clubs), Some("5c"), "5c");
        let (chosen, branch) = decide("9KAc", &state, &seats);
        assert_eq!(chosen, card("Ac"));
        assert_eq!(branch, PlayBranch::FollowHigh);
    }

    #[test]
    fn winning_hearts_are_followed_low() {
        let mut seats = open_table();
        seats[Seat::Left].may_have = SuitSet::EMPTY;
        let state = round(6, Seat::Opposite, Some(Suit::Hearts), Some("5h"), "5h");
        let (chosen, branch) = decide("9Ah", &state, &seats);
        assert_eq!(chosen, card("9h"));
        assert_eq!(branch, PlayBranch::FollowLow);
    }

    #[test]
    fn missing_high_card_counts_as_rank_zero() {
        let state = round(3, Seat::Opposite, Some(Suit::Diamonds), None, "");
        let (chosen, branch) = decide("27d", &state, &open_table());
        assert_eq!(chosen, card("2d"));
        assert_eq!(branch, PlayBranch::FollowLow);
    }

    #[test]
    fn void_follower_sheds_queen_of_spades_first() {
        let state = round(2, Seat::Left, Some(Suit::Clubs), Some("Ac"), "Ac");
        let (chosen, branch) = decide("AhQs2d", &state, &open_table());
        assert_eq!(chosen, Card::QUEEN_OF_SPADES);
        assert_eq!(branch, PlayBranch::SloughQueenOfSpades);
    }

    #[test]
    fn void_follower_sheds_highest_heart_next() {
        let state = round(2, Seat::Left, Some(Suit::Clubs), Some("Ac"), "Ac");
        let (chosen, branch) = decide("3Jh2dAs", &state, &open_table());
        assert_eq!(chosen, card("Jh"));
        assert_eq!(branch, PlayBranch::SloughHighHeart);
    }

    #[test]
    fn void_follower_without_penalty_cards_uses_discard_score() {
        let state = round(2, Seat::Left, Some(Suit::Clubs), Some("Ac"), "Ac");
        let (chosen, branch) = decide("Kd0sKs", &state, &open_table());
        assert_eq!(chosen, card("Ks"));
        assert_eq!(branch, PlayBranch::SloughLowestScore);
    }

    #[test]
    fn first_trick_keeps_penalty_cards() {
        let state = round(1, Seat::Left, Some(Suit::Clubs), Some("2c"), "2c");
        let (chosen, branch) = decide("QsAh4d", &state, &open_table());
        assert_eq!(chosen, card("4d"));
        assert_eq!(branch, PlayBranch::SloughLowestScore);
    }

    #[test]
    fn discard_scores_order_suits() {
        assert!(discard_score(card("Ks"), false) < discard_score(card("Kd"), false));
        assert!(discard_score(card("Kd"), false) < discard_score(card("Kc"), false));
        assert!(discard_score(card("Ac"), false) < discard_score(card("Ks"), false));
        assert!(discard_score(card("2c"), false) < discard_score(card("Ah"), false));
        assert_eq!(discard_score(Card::QUEEN_OF_SPADES, true), 0);
        assert_eq!(discard_score(Card::QUEEN_OF_SPADES, false), -12 * 4 - 19);
    }

    #[test]
    fn lead_counts_apply_overrides() {
        let held = hand("23cQs4s5h");
        assert_eq!(lead_count(&held, Suit::Clubs, false), 2);
        assert_eq!(lead_count(&held, Suit::Diamonds, false), 0);
        assert_eq!(lead_count(&held, Suit::Spades, false), 14);
        assert_eq!(lead_count(&held, Suit::Hearts, false), 15);
        assert_eq!(lead_count(&held, Suit::Hearts, true), 1);
    }
}
