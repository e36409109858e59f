//! Error types shared by every rule in the crate.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RulesError>;

/// Everything that can go wrong while applying a game rule.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("{player} has a balance of {balance} and cannot pay {amount}")]
    InsufficientFunds {
        player: String,
        balance: u32,
        amount: u64,
    },
    #[error("balance of {player} would overflow")]
    BalanceOverflow { player: String },
    #[error("owner of {property} may not be cleared")]
    InvalidOwner { property: String },
    #[error("rent table of {street} must have 6 entries (got {len})")]
    MalformedRentTable { street: String, len: usize },
    #[error("{property} has no owner, so no rent is due")]
    UnownedProperty { property: String },
    #[error("{street} cannot hold {houses} houses (maximum is 5)")]
    InvalidHouseCount { street: String, houses: u8 },
    #[error("rent of {factor}x a dice total of {dice_total} overflows")]
    RentOverflow { factor: u32, dice_total: u32 },
    #[error("{property} is not a street")]
    NotAStreet { property: String },
    #[error("{property} is already owned")]
    AlreadyOwned { property: String },
    #[error("no property named {name:?}")]
    UnknownProperty { name: String },
    #[error("no player with id {player}")]
    UnknownPlayer { player: String },
    #[error("{field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
