//! Players and their balance bookkeeping.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, RulesError};

/// Balance every player receives when a game starts.
pub const STARTING_BALANCE: u32 = 2000;

/// Unique identifier for players.
///
/// Ownership checks compare ids, never names, so two players sharing a name
/// are still distinct owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Create a new random player ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player participating in a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    balance: u32,
}

impl Player {
    /// Create a new player holding the standard starting balance.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_balance(name, STARTING_BALANCE)
    }

    /// Create a new player with an explicit starting balance.
    pub fn with_balance(name: impl Into<String>, balance: u32) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            balance,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Apply a signed delta to the balance and return the new balance.
    ///
    /// A delta that would take the balance below zero fails with
    /// [`RulesError::InsufficientFunds`] and leaves the balance untouched.
    pub fn modify_balance(&mut self, amount: i64) -> Result<u32> {
        let updated = i64::from(self.balance)
            .checked_add(amount)
            .ok_or_else(|| RulesError::BalanceOverflow {
                player: self.name.clone(),
            })?;

        if updated < 0 {
            return Err(RulesError::InsufficientFunds {
                player: self.name.clone(),
                balance: self.balance,
                amount: amount.unsigned_abs(),
            });
        }

        self.balance = u32::try_from(updated).map_err(|_| RulesError::BalanceOverflow {
            player: self.name.clone(),
        })?;
        Ok(self.balance)
    }

    /// Check whether the player could pay `amount` right now.
    pub fn can_afford(&self, amount: u32) -> bool {
        self.balance >= amount
    }
}
