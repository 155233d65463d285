//! Turn order and turn phase.
//!
//! ## Direction
//!
//! Rotation over the active-player list. No card in the Check rule set
//! reverses play, but every step honors the direction.
//!
//! ## TurnPhase
//!
//! What the next command must deal with:
//!
//! - `Idle`: ordinary turn
//! - `AttackChain { amount }`: answer with a wild card or draw `amount`
//! - `SuitLocked`: the player who dropped a Jack must declare a suit
//!
//! Chain and lock can never coexist since Jacks cannot answer an attack.

use serde::{Deserialize, Serialize};

/// Direction of play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Index of the seat after `index` among `len` seats.
    ///
    /// ```
    /// use check_engine::state::Direction;
    ///
    /// assert_eq!(Direction::Clockwise.next(2, 3), 0);
    /// assert_eq!(Direction::CounterClockwise.next(0, 3), 2);
    /// ```
    #[must_use]
    pub fn next(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0);
        match self {
            Direction::Clockwise => (index + 1) % len,
            Direction::CounterClockwise => (index + len - 1) % len,
        }
    }

    /// Index of the seat before `index`; inverse of [`Direction::next`].
    #[must_use]
    pub fn previous(self, index: usize, len: usize) -> usize {
        self.reversed().next(index, len)
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Pending obligation for the current player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    #[default]
    Idle,
    /// Unanswered wild cards; `amount` is the running draw penalty.
    AttackChain { amount: u32 },
    /// A Jack was played and its suit not yet declared.
    SuitLocked,
}

impl TurnPhase {
    #[must_use]
    pub fn in_attack_chain(self) -> bool {
        matches!(self, TurnPhase::AttackChain { .. })
    }

    /// Running penalty, `0` outside a chain.
    #[must_use]
    pub fn attack_amount(self) -> u32 {
        match self {
            TurnPhase::AttackChain { amount } => amount,
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, TurnPhase::SuitLocked)
    }

    /// Phase after a wild card carrying `penalty` lands: opens a chain or
    /// adds to the running one.
    #[must_use]
    pub fn escalate(self, penalty: u32) -> Self {
        TurnPhase::AttackChain {
            amount: self.attack_amount() + penalty,
        }
    }

    /// Rebuild a phase from the flat persisted flags.
    ///
    /// Returns `None` for combinations that cannot occur in play.
    #[must_use]
    pub fn from_flags(in_attack_chain: bool, attack_amount: u32, locked_turn: bool) -> Option<Self> {
        match (in_attack_chain, locked_turn) {
            (false, false) if attack_amount == 0 => Some(TurnPhase::Idle),
            (false, true) if attack_amount == 0 => Some(TurnPhase::SuitLocked),
            (true, false) if attack_amount > 0 => Some(TurnPhase::AttackChain { amount: attack_amount }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_wraps() {
        assert_eq!(Direction::Clockwise.next(0, 3), 1);
        assert_eq!(Direction::Clockwise.next(2, 3), 0);
        assert_eq!(Direction::CounterClockwise.next(1, 3), 0);
        assert_eq!(Direction::CounterClockwise.next(0, 3), 2);
        assert_eq!(Direction::Clockwise.next(0, 1), 0);
    }

    #[test]
    fn test_previous_inverts_next() {
        for dir in [Direction::Clockwise, Direction::CounterClockwise] {
            for len in 1..6 {
                for i in 0..len {
                    assert_eq!(dir.previous(dir.next(i, len), len), i);
                }
            }
        }
    }

    #[test]
    fn test_escalate() {
        let phase = TurnPhase::Idle.escalate(2);
        assert_eq!(phase, TurnPhase::AttackChain { amount: 2 });
        assert_eq!(phase.escalate(4).attack_amount(), 6);
        assert!(phase.in_attack_chain());
        assert!(!phase.is_locked());
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(TurnPhase::from_flags(false, 0, false), Some(TurnPhase::Idle));
        assert_eq!(TurnPhase::from_flags(false, 0, true), Some(TurnPhase::SuitLocked));
        assert_eq!(
            TurnPhase::from_flags(true, 6, false),
            Some(TurnPhase::AttackChain { amount: 6 })
        );
        assert_eq!(TurnPhase::from_flags(true, 2, true), None);
        assert_eq!(TurnPhase::from_flags(true, 0, false), None);
        assert_eq!(TurnPhase::from_flags(false, 4, false), None);
    }
}
