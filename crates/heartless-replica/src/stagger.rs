use std::thread;
use std::time::Duration;

use heartless_core::model::player::Seat;
use tracing::{Level, event};

pub const STAGGER_VAR: &str = "HEARTLESS_STAGGERER";
pub const STAGGER_DELAY: Duration = Duration::from_secs(1);

/// Which seats sleep before answering, so a human watching the console
/// game can follow the bots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaggerConfig {
    #[default]
    Off,
    /// The sentinel `0` staggers every seat.
    AllSeats,
    Seat(Seat),
}

impl StaggerConfig {
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    pub fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let Some(raw) = read(STAGGER_VAR) else {
            return StaggerConfig::Off;
        };
        match raw.trim().parse::<usize>() {
            Ok(0) => StaggerConfig::AllSeats,
            Ok(index) => Seat::from_index(index)
                .map(StaggerConfig::Seat)
                .unwrap_or(StaggerConfig::Off),
            Err(_) => StaggerConfig::Off,
        }
    }

    pub fn should_delay(self, seat: Seat) -> bool {
        match self {
            StaggerConfig::Off => false,
            StaggerConfig::AllSeats => true,
            StaggerConfig::Seat(target) => target == seat,
        }
    }

    /// Sleeps for [`STAGGER_DELAY`] when `seat` is staggered.
    pub fn apply(self, seat: Seat) {
        if !self.should_delay(seat) {
            return;
        }
        event!(
            target: "heartless_replica::stagger",
            Level::DEBUG,
            seat = %seat,
            delay_ms = STAGGER_DELAY.as_millis() as u64,
        );
        thread::sleep(STAGGER_DELAY);
    }
}
