//! Command-line contract shared with the console game.
//!
//! Every option is declared optional for clap; which ones are actually
//! required depends on the phase and is checked in [`Cli::into_request`], so
//! a missing value is reported by option name before any decision is made.

use std::ffi::OsString;

use clap::{CommandFactory, Parser};
use heartless_bot::PolicyContext;
use heartless_core::codec::{
    CodecError, decode_cards, decode_single_card, decode_suit_name, decode_suit_set,
};
use heartless_core::model::card::Card;
use heartless_core::model::hand::Hand;
use heartless_core::model::player::{Seat, SeatMap, SeatState};
use heartless_core::model::round::RoundState;
use thiserror::Error;

/// Seat index the console game sends when no seat holds a role yet.
pub const NO_SEAT: u8 = 4;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing required option --{option}")]
    MissingInput { option: String },
    #[error("invalid seat {value} for --{option}")]
    InvalidSeat { option: String, value: u8 },
    #[error("invalid value for --{option}")]
    Codec {
        option: String,
        #[source]
        source: CodecError,
    },
}

/// Stateless Hearts bot: prints the card to play, or three cards to pass.
#[derive(Debug, Default, Parser)]
#[command(name = "heartless-replica", version, about)]
pub struct Cli {
    /// Seat index of the deciding player (0-3).
    #[arg(long, value_name = "SEAT", value_parser = clap::value_parser!(u8).range(0..4))]
    pub who: Option<u8>,

    /// Cards held by the deciding player.
    #[arg(long, value_name = "CARDS")]
    pub hand: Option<String>,

    /// Every card played so far this hand.
    #[arg(long, value_name = "CARDS")]
    pub discarded: Option<String>,

    /// Suit led in the current trick, empty when leading.
    #[arg(long = "suit_to_follow", value_name = "SUIT")]
    pub suit_to_follow: Option<String>,

    /// 0 while passing, otherwise the trick number.
    #[arg(long, value_name = "ROUND")]
    pub round: Option<u8>,

    /// Seat leading the current trick, 4 while nobody leads yet.
    #[arg(long = "under_the_gun", value_name = "SEAT")]
    pub under_the_gun: Option<u8>,

    /// Seat holding the high card of the trick, 4 while nobody has played.
    #[arg(long = "round_winner", value_name = "SEAT")]
    pub round_winner: Option<u8>,

    /// Highest card played so far in the current trick, empty if none.
    #[arg(long = "high_card", value_name = "CARD")]
    pub high_card: Option<String>,

    #[arg(long = "my_discarding", value_name = "CARDS")]
    pub my_discarding: Option<String>,
    #[arg(long = "my_hand_score", value_name = "SCORE")]
    pub my_hand_score: Option<u32>,
    #[arg(long = "my_game_score", value_name = "SCORE")]
    pub my_game_score: Option<u32>,
    #[arg(long = "my_suit_chars", value_name = "SUITS")]
    pub my_suit_chars: Option<String>,

    #[arg(long = "left_discarding", value_name = "CARDS")]
    pub left_discarding: Option<String>,
    #[arg(long = "left_hand_score", value_name = "SCORE")]
    pub left_hand_score: Option<u32>,
    #[arg(long = "left_game_score", value_name = "SCORE")]
    pub left_game_score: Option<u32>,
    #[arg(long = "left_suit_chars", value_name = "SUITS")]
    pub left_suit_chars: Option<String>,

    #[arg(long = "opposite_discarding", value_name = "CARDS")]
    pub opposite_discarding: Option<String>,
    #[arg(long = "opposite_hand_score", value_name = "SCORE")]
    pub opposite_hand_score: Option<u32>,
    #[arg(long = "opposite_game_score", value_name = "SCORE")]
    pub opposite_game_score: Option<u32>,
    #[arg(long = "opposite_suit_chars", value_name = "SUITS")]
    pub opposite_suit_chars: Option<String>,

    #[arg(long = "right_discarding", value_name = "CARDS")]
    pub right_discarding: Option<String>,
    #[arg(long = "right_hand_score", value_name = "SCORE")]
    pub right_hand_score: Option<u32>,
    #[arg(long = "right_game_score", value_name = "SCORE")]
    pub right_game_score: Option<u32>,
    #[arg(long = "right_suit_chars", value_name = "SUITS")]
    pub right_suit_chars: Option<String>,

    /// Emit diagnostics on stderr as JSON lines.
    #[arg(long = "log-json")]
    pub log_json: bool,
}

/// Per-seat options as given on the command line.
struct SeatOptions<'a> {
    discarding: Option<&'a str>,
    hand_score: Option<u32>,
    game_score: Option<u32>,
    suit_chars: Option<&'a str>,
}

/// Fully decoded input for one decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub seat: Seat,
    pub hand: Hand,
    pub round: RoundState,
    pub seats: SeatMap<SeatState>,
}

impl Request {
    pub fn context(&self) -> PolicyContext<'_> {
        PolicyContext {
            seat: self.seat,
            hand: &self.hand,
            round: &self.round,
            seats: &self.seats,
        }
    }
}

impl Cli {
    /// Parses the process arguments after dropping unrecognized options.
    /// Returns the names of the options that were dropped.
    pub fn parse_lenient() -> (Self, Vec<String>) {
        Self::parse_lenient_from(std::env::args_os())
    }

    pub fn parse_lenient_from<I, T>(args: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let (kept, ignored) = retain_known_args(args);
        (Self::parse_from(kept), ignored)
    }

    /// Validates the options required for the current phase and decodes them.
    pub fn into_request(self) -> Result<Request, InputError> {
        let seat = seat_option(self.who, "who")?;
        let hand = Hand::with_cards(cards_option(self.hand.as_deref(), "hand")?);
        let round = required(self.round, "round")?;

        if round == 0 {
            return Ok(Request {
                seat,
                hand,
                round: RoundState::passing(),
                seats: SeatMap::from_fn(|_| SeatState::default()),
            });
        }

        let under_the_gun = seat_option(self.under_the_gun, "under_the_gun")?;
        let round_winner = optional_seat_option(self.round_winner, "round_winner")?;
        let suit_to_follow = {
            let raw = required(self.suit_to_follow.as_deref(), "suit_to_follow")?;
            decode_suit_name(raw).map_err(|source| codec_error("suit_to_follow", source))?
        };
        let discarded = cards_option(self.discarded.as_deref(), "discarded")?;
        let high_card = {
            let raw = required(self.high_card.as_deref(), "high_card")?;
            decode_single_card(raw).map_err(|source| codec_error("high_card", source))?
        };

        let mut seats = SeatMap::from_fn(|_| SeatState::default());
        for other in Seat::LOOP {
            seats[other] = self.seat_state(other, other != seat)?;
        }

        Ok(Request {
            seat,
            hand,
            round: RoundState::playing(
                round,
                under_the_gun,
                round_winner,
                suit_to_follow,
                high_card,
                discarded,
            ),
            seats,
        })
    }

    fn seat_options(&self, seat: Seat) -> SeatOptions<'_> {
        match seat {
            Seat::Me => SeatOptions {
                discarding: self.my_discarding.as_deref(),
                hand_score: self.my_hand_score,
                game_score: self.my_game_score,
                suit_chars: self.my_suit_chars.as_deref(),
            },
            Seat::Left => SeatOptions {
                discarding: self.left_discarding.as_deref(),
                hand_score: self.left_hand_score,
                game_score: self.left_game_score,
                suit_chars: self.left_suit_chars.as_deref(),
            },
            Seat::Opposite => SeatOptions {
                discarding: self.opposite_discarding.as_deref(),
                hand_score: self.opposite_hand_score,
                game_score: self.opposite_game_score,
                suit_chars: self.opposite_suit_chars.as_deref(),
            },
            Seat::Right => SeatOptions {
                discarding: self.right_discarding.as_deref(),
                hand_score: self.right_hand_score,
                game_score: self.right_game_score,
                suit_chars: self.right_suit_chars.as_deref(),
            },
        }
    }

    /// Builds one seat's state. Options of the deciding seat itself may be
    /// omitted and fall back to the defaults.
    fn seat_state(&self, seat: Seat, mandatory: bool) -> Result<SeatState, InputError> {
        let options = self.seat_options(seat);
        let prefix = seat.option_prefix();
        let name = |field: &str| format!("{prefix}_{field}");
        let defaults = SeatState::default();

        let pick = |value: Option<u32>, field: &str, fallback: u32| match value {
            Some(value) => Ok(value),
            None if mandatory => Err(InputError::MissingInput {
                option: name(field),
            }),
            None => Ok(fallback),
        };

        let discarding = match options.discarding {
            Some(raw) => decode_cards(raw).map_err(|source| codec_error(&name("discarding"), source))?,
            None if mandatory => {
                return Err(InputError::MissingInput {
                    option: name("discarding"),
                });
            }
            None => defaults.discarding,
        };
        let hand_score = pick(options.hand_score, "hand_score", defaults.hand_score)?;
        let game_score = pick(options.game_score, "game_score", defaults.game_score)?;
        let may_have = match options.suit_chars {
            Some(raw) => decode_suit_set(raw),
            None if mandatory => {
                return Err(InputError::MissingInput {
                    option: name("suit_chars"),
                });
            }
            None => defaults.may_have,
        };

        Ok(SeatState {
            discarding,
            hand_score,
            game_score,
            may_have,
        })
    }
}

fn required<T>(value: Option<T>, option: &str) -> Result<T, InputError> {
    value.ok_or_else(|| InputError::MissingInput {
        option: option.to_string(),
    })
}

fn seat_option(value: Option<u8>, option: &str) -> Result<Seat, InputError> {
    let index = required(value, option)?;
    Seat::from_index(usize::from(index)).ok_or_else(|| InputError::InvalidSeat {
        option: option.to_string(),
        value: index,
    })
}

/// Like [`seat_option`], but [`NO_SEAT`] decodes to `None`.
fn optional_seat_option(value: Option<u8>, option: &str) -> Result<Option<Seat>, InputError> {
    match required(value, option)? {
        NO_SEAT => Ok(None),
        index => seat_option(Some(index), option).map(Some),
    }
}

fn cards_option(value: Option<&str>, option: &str) -> Result<Vec<Card>, InputError> {
    decode_cards(required(value, option)?).map_err(|source| codec_error(option, source))
}

fn codec_error(option: &str, source: CodecError) -> InputError {
    InputError::Codec {
        option: option.to_string(),
        source,
    }
}

/// Drops long options clap does not know about, together with any bare value
/// that follows them. The program name and known options pass through
/// untouched.
pub fn retain_known_args<I, T>(args: I) -> (Vec<OsString>, Vec<String>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let mut kept = Vec::new();
    let mut ignored = Vec::new();
    let mut args = args.into_iter().map(Into::into);

    if let Some(program) = args.next() {
        kept.push(program);
    }

    let mut awaiting_value = false;
    for arg in args {
        if awaiting_value {
            awaiting_value = false;
            kept.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            kept.push(arg);
            continue;
        };

        let Some(option) = text.strip_prefix("--").filter(|option| !option.is_empty()) else {
            if matches!(text, "-h" | "-V") {
                kept.push(arg);
            } else {
                ignored.push(text.to_string());
            }
            continue;
        };

        let (name, inline_value) = match option.split_once('=') {
            Some((name, _)) => (name, true),
            None => (option, false),
        };

        if matches!(name, "help" | "version") {
            kept.push(arg);
            continue;
        }

        match command
            .get_arguments()
            .find(|argument| argument.get_long() == Some(name))
        {
            Some(argument) => {
                awaiting_value = !inline_value && argument.get_action().takes_values();
                kept.push(arg);
            }
            None => ignored.push(name.to_string()),
        }
    }

    (kept, ignored)
}
