//! Player identity and turn handoff.

use core::fmt;

use crate::config::TurnPolicy;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player.
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player number as shown to users, `1` or `2`.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = u8;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(PlayerId::One),
            2 => Ok(PlayerId::Two),
            other => Err(other),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Next active player. A turn is consumed only by a shot that passed
/// validation.
pub fn advance(current: PlayerId, shot_was_valid: bool) -> PlayerId {
    advance_with(TurnPolicy::AdvanceOnValidShot, current, shot_was_valid)
}

/// Next active player under an explicit policy.
pub fn advance_with(policy: TurnPolicy, current: PlayerId, shot_was_valid: bool) -> PlayerId {
    match policy {
        TurnPolicy::AdvanceOnValidShot if !shot_was_valid => current,
        _ => current.opponent(),
    }
}
