//! Configuration: rule constants and custom board layouts, loaded from TOML.
//!
//! Every table is optional. A file containing only `[rules]` plays on the
//! standard board, and an empty file reproduces the standard game.
//!
//! ```toml
//! [rules]
//! starting_balance = 1500
//! railroad_base_rent = 25
//!
//! [[board.properties]]
//! kind = "street"
//! name = "Mediterranean Avenue"
//! price = 60
//! group = "brown"
//! rents = [2, 10, 30, 90, 160, 250]
//!
//! [[board.properties]]
//! kind = "railroad"
//! name = "Reading Railroad"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::board::{standard_properties_priced, Board, RAILROAD_PRICE, UTILITY_PRICE};
use crate::error::{Result, RulesError};
use crate::player::STARTING_BALANCE;
use crate::property::{ColorGroup, Property};

/// Maximum number of players that can join a game.
pub const MAX_PLAYERS: usize = 4;

/// Constants the rent formulas scale from. Every board carries a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentRules {
    /// Rent for a railroad whose owner holds no other railroad.
    pub railroad_base_rent: u32,
    /// Dice multiplier when the owner holds a single utility.
    pub utility_single_factor: u32,
    /// Dice multiplier when the owner holds every utility.
    pub utility_monopoly_factor: u32,
}

impl Default for RentRules {
    fn default() -> Self {
        RulesConfig::default().rent_rules()
    }
}

/// Game rules, read from the `[rules]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub starting_balance: u32,
    pub max_players: usize,
    pub railroad_base_rent: u32,
    pub utility_single_factor: u32,
    pub utility_monopoly_factor: u32,
    /// Price of railroads that do not list their own.
    pub railroad_price: u32,
    /// Price of utilities that do not list their own.
    pub utility_price: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_balance: STARTING_BALANCE,
            max_players: MAX_PLAYERS,
            railroad_base_rent: 25,
            utility_single_factor: 4,
            utility_monopoly_factor: 10,
            railroad_price: RAILROAD_PRICE,
            utility_price: UTILITY_PRICE,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_players == 0 {
            return Err(RulesError::InvalidConfig {
                field: "max_players",
                reason: "must allow at least one player".to_string(),
            });
        }

        let rent_fields = [
            ("railroad_base_rent", self.railroad_base_rent),
            ("utility_single_factor", self.utility_single_factor),
            ("utility_monopoly_factor", self.utility_monopoly_factor),
        ];
        for (field, value) in rent_fields {
            if value == 0 {
                return Err(RulesError::InvalidConfig {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    /// The rent constants a board built from these rules uses.
    pub fn rent_rules(&self) -> RentRules {
        RentRules {
            railroad_base_rent: self.railroad_base_rent,
            utility_single_factor: self.utility_single_factor,
            utility_monopoly_factor: self.utility_monopoly_factor,
        }
    }
}

/// One entry of a custom board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum PropertyConfig {
    Street {
        name: String,
        price: u32,
        group: ColorGroup,
        rents: Vec<u32>,
    },
    /// Without a `price`, the rules' `railroad_price` applies.
    Railroad { name: String, price: Option<u32> },
    /// Without a `price`, the rules' `utility_price` applies.
    Utility { name: String, price: Option<u32> },
}

impl PropertyConfig {
    fn name(&self) -> &str {
        match self {
            PropertyConfig::Street { name, .. }
            | PropertyConfig::Railroad { name, .. }
            | PropertyConfig::Utility { name, .. } => name,
        }
    }

    fn build(&self, rules: &RulesConfig) -> Result<Property> {
        match self {
            PropertyConfig::Street {
                name,
                price,
                group,
                rents,
            } => Property::street(name.as_str(), *price, *group, rents),
            PropertyConfig::Railroad { name, price } => Ok(Property::railroad(
                name.as_str(),
                price.unwrap_or(rules.railroad_price),
            )),
            PropertyConfig::Utility { name, price } => Ok(Property::utility(
                name.as_str(),
                price.unwrap_or(rules.utility_price),
            )),
        }
    }
}

/// A custom board layout, listed in board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    pub properties: Vec<PropertyConfig>,
}

impl BoardConfig {
    /// Build the board, validating every entry.
    pub fn build(&self, rules: &RulesConfig) -> Result<Board> {
        if self.properties.is_empty() {
            return Err(RulesError::InvalidConfig {
                field: "board.properties",
                reason: "must list at least one property".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.properties {
            if !seen.insert(entry.name()) {
                return Err(RulesError::InvalidConfig {
                    field: "board.properties",
                    reason: format!("lists {:?} more than once", entry.name()),
                });
            }
        }

        let properties = self
            .properties
            .iter()
            .map(|entry| entry.build(rules))
            .collect::<Result<Vec<_>>>()?;
        Ok(Board::new(rules.rent_rules(), properties))
    }
}

/// A complete game configuration file: `[rules]` and an optional `[board]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub rules: RulesConfig,
    /// `None` plays on the standard board.
    pub board: Option<BoardConfig>,
}

impl GameConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let input = std::fs::read_to_string(path)?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()
    }

    /// Build the board this configuration describes.
    pub fn build_board(&self) -> Result<Board> {
        match &self.board {
            Some(board) => board.build(&self.rules),
            None => Ok(Board::new(
                self.rules.rent_rules(),
                standard_properties_priced(self.rules.railroad_price, self.rules.utility_price),
            )),
        }
    }
}
