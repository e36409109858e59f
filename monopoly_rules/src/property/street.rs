//! Streets, color groups, and the monopoly bonus.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::player::PlayerId;

/// Number of entries in a street's rent table: bare lot, 1-4 houses, hotel.
pub const RENT_TABLE_LEN: usize = 6;

/// House count that denotes a hotel.
pub const HOTEL: u8 = 5;

/// The color groups of streets, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

impl ColorGroup {
    pub const ALL: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::Blue,
    ];
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorGroup::Brown => "Brown",
            ColorGroup::LightBlue => "Light Blue",
            ColorGroup::Pink => "Pink",
            ColorGroup::Orange => "Orange",
            ColorGroup::Red => "Red",
            ColorGroup::Yellow => "Yellow",
            ColorGroup::Green => "Green",
            ColorGroup::Blue => "Blue",
        };
        f.write_str(name)
    }
}

/// Street-specific state: its group, rent table, and development.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    group: ColorGroup,
    /// Rent indexed by house count; index 5 is the hotel rent.
    rents: [u32; RENT_TABLE_LEN],
    houses: u8,
}

impl Street {
    pub fn new(group: ColorGroup, rents: [u32; RENT_TABLE_LEN]) -> Self {
        Self {
            group,
            rents,
            houses: 0,
        }
    }

    pub fn group(&self) -> ColorGroup {
        self.group
    }

    pub fn rents(&self) -> &[u32; RENT_TABLE_LEN] {
        &self.rents
    }

    pub fn houses(&self) -> u8 {
        self.houses
    }

    pub fn has_hotel(&self) -> bool {
        self.houses == HOTEL
    }

    pub(crate) fn set_houses(&mut self, street: &str, houses: u8) -> Result<()> {
        if houses > HOTEL {
            return Err(RulesError::InvalidHouseCount {
                street: street.to_string(),
                houses,
            });
        }
        self.houses = houses;
        Ok(())
    }

    /// Rent for the current development level.
    ///
    /// An undeveloped street pays double when `owner` holds every street of
    /// the group; a sibling the bank still holds breaks the monopoly.
    pub(crate) fn rent(&self, owner: PlayerId, board: &Board) -> u32 {
        let rent = self.rents[usize::from(self.houses)];
        if self.houses == 0 && board.owns_group(owner, self.group) {
            rent.saturating_mul(2)
        } else {
            rent
        }
    }
}
