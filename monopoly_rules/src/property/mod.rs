//! Properties a player can buy, and the rent rule of each archetype.

mod railroad;
mod street;
mod utility;

pub use street::*;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{Result, RulesError};
use crate::player::PlayerId;

/// Position of a property in the board's fixed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyId(pub usize);

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The rent owed by a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rent {
    /// A flat amount.
    Fixed(u32),
    /// A factor the visitor's dice total is multiplied by.
    DiceMultiplier(u32),
}

impl Rent {
    /// Resolve the rent to a payable amount for the given dice total.
    ///
    /// Fails with [`RulesError::RentOverflow`] rather than truncating.
    pub fn amount(&self, dice_total: u32) -> Result<u32> {
        match *self {
            Rent::Fixed(amount) => Ok(amount),
            Rent::DiceMultiplier(factor) => factor
                .checked_mul(dice_total)
                .ok_or(RulesError::RentOverflow { factor, dice_total }),
        }
    }
}

/// The archetype of a property along with its archetype-specific state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    Street(Street),
    Railroad,
    Utility,
}

/// A property which a player can buy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PropertyRecord")]
pub struct Property {
    name: String,
    price: u32,
    /// `None` while the bank still holds the property.
    owner: Option<PlayerId>,
    mortgaged: bool,
    kind: PropertyKind,
}

/// Serialized form of a [`Property`], checked before it is accepted.
#[derive(Deserialize)]
struct PropertyRecord {
    name: String,
    price: u32,
    owner: Option<PlayerId>,
    mortgaged: bool,
    kind: PropertyKind,
}

impl TryFrom<PropertyRecord> for Property {
    type Error = RulesError;

    fn try_from(record: PropertyRecord) -> Result<Self> {
        if let PropertyKind::Street(street) = &record.kind {
            if street.houses() > HOTEL {
                return Err(RulesError::InvalidHouseCount {
                    street: record.name,
                    houses: street.houses(),
                });
            }
        }

        Ok(Self {
            name: record.name,
            price: record.price,
            owner: record.owner,
            mortgaged: record.mortgaged,
            kind: record.kind,
        })
    }
}

impl Property {
    pub(crate) fn from_kind(name: impl Into<String>, price: u32, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            price,
            owner: None,
            mortgaged: false,
            kind,
        }
    }

    /// Create a street from a rent table indexed by house count.
    ///
    /// Fails with [`RulesError::MalformedRentTable`] unless `rents` has
    /// exactly six entries.
    pub fn street(
        name: impl Into<String>,
        price: u32,
        group: ColorGroup,
        rents: &[u32],
    ) -> Result<Self> {
        let name = name.into();
        let rents: [u32; RENT_TABLE_LEN] =
            rents.try_into().map_err(|_| RulesError::MalformedRentTable {
                street: name.clone(),
                len: rents.len(),
            })?;
        let street = Street::new(group, rents);
        Ok(Self::from_kind(name, price, PropertyKind::Street(street)))
    }

    pub fn railroad(name: impl Into<String>, price: u32) -> Self {
        Self::from_kind(name, price, PropertyKind::Railroad)
    }

    pub fn utility(name: impl Into<String>, price: u32) -> Self {
        Self::from_kind(name, price, PropertyKind::Utility)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Check whether `player` owns this property.
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Hand the property to a new owner.
    ///
    /// Properties are never sold back to the bank, so `None` fails with
    /// [`RulesError::InvalidOwner`].
    pub fn set_owner(&mut self, owner: Option<PlayerId>) -> Result<()> {
        let owner = owner.ok_or_else(|| RulesError::InvalidOwner {
            property: self.name.clone(),
        })?;
        debug!("{} now owned by {}", self.name, owner);
        self.owner = Some(owner);
        Ok(())
    }

    pub fn is_mortgaged(&self) -> bool {
        self.mortgaged
    }

    /// Set the mortgage flag. Rent ignores it.
    pub fn set_mortgaged(&mut self, mortgaged: bool) {
        self.mortgaged = mortgaged;
    }

    pub fn as_street(&self) -> Option<&Street> {
        match &self.kind {
            PropertyKind::Street(street) => Some(street),
            _ => None,
        }
    }

    /// Mutable access to the street state, failing for railroads and utilities.
    pub fn street_mut(&mut self) -> Result<&mut Street> {
        match &mut self.kind {
            PropertyKind::Street(street) => Ok(street),
            _ => Err(RulesError::NotAStreet {
                property: self.name.clone(),
            }),
        }
    }

    /// The color group, for streets.
    pub fn group(&self) -> Option<ColorGroup> {
        self.as_street().map(Street::group)
    }

    pub fn is_street(&self) -> bool {
        matches!(self.kind, PropertyKind::Street(_))
    }

    pub fn is_railroad(&self) -> bool {
        matches!(self.kind, PropertyKind::Railroad)
    }

    pub fn is_utility(&self) -> bool {
        matches!(self.kind, PropertyKind::Utility)
    }

    /// Set the number of houses on this street (5 means a hotel).
    pub fn set_houses(&mut self, houses: u8) -> Result<()> {
        let name = self.name.clone();
        self.street_mut()?.set_houses(&name, houses)
    }

    /// Add one house to this street, returning the new count.
    pub fn build_house(&mut self) -> Result<u8> {
        let name = self.name.clone();
        let street = self.street_mut()?;
        let houses = street.houses() + 1;
        street.set_houses(&name, houses)?;
        Ok(houses)
    }

    /// Compute the rent a visitor owes for landing here.
    ///
    /// Rent depends on how many sibling properties the owner holds, so the
    /// board this property belongs to must be supplied. Querying a property
    /// the bank still holds fails with [`RulesError::UnownedProperty`].
    pub fn rent(&self, board: &Board) -> Result<Rent> {
        let owner = self.owner.ok_or_else(|| RulesError::UnownedProperty {
            property: self.name.clone(),
        })?;

        let rent = match &self.kind {
            PropertyKind::Street(street) => Rent::Fixed(street.rent(owner, board)),
            PropertyKind::Railroad => Rent::Fixed(railroad::rent(owner, board)),
            PropertyKind::Utility => Rent::DiceMultiplier(utility::factor(owner, board)),
        };
        debug!("rent for {} is {:?}", self.name, rent);
        Ok(rent)
    }
}
