//! The property registry - every purchasable property, in board order.
//!
//! Membership is fixed when the board is built. Individual properties can
//! still change owner, mortgage flag, and houses through [`Board::get_mut`].
//! Rent formulas read the board to see how many siblings an owner holds.

mod standard;

pub use standard::*;

use serde::{Deserialize, Serialize};

use crate::config::RentRules;
use crate::error::{Result, RulesError};
use crate::player::PlayerId;
use crate::property::{ColorGroup, Property, PropertyId, Rent};

/// The fixed, ordered collection of properties in a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    rent_rules: RentRules,
    properties: Vec<Property>,
}

impl Board {
    /// Create a board from an explicit property list.
    pub fn new(rent_rules: RentRules, properties: Vec<Property>) -> Self {
        Self {
            rent_rules,
            properties,
        }
    }

    /// The standard 28-property board with the standard rent rules.
    pub fn standard() -> Self {
        Self::new(RentRules::default(), standard_properties())
    }

    pub fn rent_rules(&self) -> &RentRules {
        &self.rent_rules
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.properties.get(id.0)
    }

    pub fn get_mut(&mut self, id: PropertyId) -> Option<&mut Property> {
        self.properties.get_mut(id.0)
    }

    /// Look up a property, failing with [`RulesError::UnknownProperty`].
    pub fn property(&self, id: PropertyId) -> Result<&Property> {
        self.get(id).ok_or_else(|| RulesError::UnknownProperty {
            name: id.to_string(),
        })
    }

    pub fn property_mut(&mut self, id: PropertyId) -> Result<&mut Property> {
        self.get_mut(id).ok_or_else(|| RulesError::UnknownProperty {
            name: id.to_string(),
        })
    }

    /// All properties with their ids, in board order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Property)> {
        self.properties
            .iter()
            .enumerate()
            .map(|(index, property)| (PropertyId(index), property))
    }

    /// Find a property by its exact name.
    pub fn find(&self, name: &str) -> Option<(PropertyId, &Property)> {
        self.iter().find(|(_, property)| property.name() == name)
    }

    /// Resolve a property name to its id.
    pub fn id_of(&self, name: &str) -> Result<PropertyId> {
        self.find(name)
            .map(|(id, _)| id)
            .ok_or_else(|| RulesError::UnknownProperty {
                name: name.to_string(),
            })
    }

    /// Streets belonging to a color group.
    pub fn streets_in(&self, group: ColorGroup) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(move |property| property.group() == Some(group))
    }

    pub fn railroads(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|property| property.is_railroad())
    }

    pub fn utilities(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|property| property.is_utility())
    }

    /// Properties held by a player, in board order.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = (PropertyId, &Property)> {
        self.iter()
            .filter(move |(_, property)| property.is_owned_by(player))
    }

    /// Check whether `player` holds every street of a color group.
    ///
    /// A street the bank still holds breaks the monopoly.
    pub fn owns_group(&self, player: PlayerId, group: ColorGroup) -> bool {
        let mut streets = self.streets_in(group).peekable();
        streets.peek().is_some() && streets.all(|street| street.is_owned_by(player))
    }

    /// Rent owed for landing on a property.
    pub fn rent(&self, id: PropertyId) -> Result<Rent> {
        self.property(id)?.rent(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy(board: &mut Board, name: &str, owner: PlayerId) -> PropertyId {
        let id = board.id_of(name).unwrap();
        board.get_mut(id).unwrap().set_owner(Some(owner)).unwrap();
        id
    }

    #[test]
    fn test_standard_board_layout() {
        let board = Board::standard();
        assert_eq!(board.len(), 28);
        assert_eq!(board.iter().filter(|(_, p)| p.is_street()).count(), 22);
        assert_eq!(board.railroads().count(), 4);
        assert_eq!(board.utilities().count(), 2);

        for group in ColorGroup::ALL {
            let size = board.streets_in(group).count();
            let expected = match group {
                ColorGroup::Brown | ColorGroup::Blue => 2,
                _ => 3,
            };
            assert_eq!(size, expected, "{group}");
        }

        assert!(board.iter().all(|(_, p)| p.owner().is_none()));
        assert_eq!(board.find("Boardwalk").unwrap().1.price(), 400);
        assert_eq!(board.iter().next().unwrap().1.name(), "Mediterranean Avenue");
    }

    #[test]
    fn test_unknown_property() {
        let board = Board::standard();
        assert!(matches!(
            board.id_of("Free Parking"),
            Err(RulesError::UnknownProperty { .. })
        ));
        assert!(board.get(PropertyId(28)).is_none());
        assert!(board.rent(PropertyId(28)).is_err());
    }

    #[test]
    fn test_unowned_rent_fails_fast() {
        let board = Board::standard();
        for (id, _) in board.iter() {
            assert!(matches!(
                board.rent(id),
                Err(RulesError::UnownedProperty { .. })
            ));
        }
    }

    #[test]
    fn test_railroad_scenario() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        let reading = buy(&mut board, "Reading Railroad", owner);
        assert_eq!(board.rent(reading).unwrap(), Rent::Fixed(25));

        let pennsylvania = buy(&mut board, "Pennsylvania Railroad", owner);
        assert_eq!(board.rent(reading).unwrap(), Rent::Fixed(50));
        assert_eq!(board.rent(pennsylvania).unwrap(), Rent::Fixed(50));

        buy(&mut board, "B. & O. Railroad", owner);
        assert_eq!(board.rent(reading).unwrap(), Rent::Fixed(100));

        buy(&mut board, "Short Line", owner);
        assert_eq!(board.rent(reading).unwrap(), Rent::Fixed(200));
        assert_eq!(board.rent(pennsylvania).unwrap(), Rent::Fixed(200));
    }

    #[test]
    fn test_utility_scenario() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        let electric = buy(&mut board, "Electric Company", owner);
        assert_eq!(board.rent(electric).unwrap(), Rent::DiceMultiplier(4));

        let water = buy(&mut board, "Water Works", owner);
        assert_eq!(board.rent(electric).unwrap(), Rent::DiceMultiplier(10));
        assert_eq!(board.rent(water).unwrap(), Rent::DiceMultiplier(10));
        assert_eq!(board.rent(water).unwrap().amount(7).unwrap(), 70);
    }

    #[test]
    fn test_pink_monopoly_scenario() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        let st_charles = buy(&mut board, "St. Charles Place", owner);
        assert_eq!(board.rent(st_charles).unwrap(), Rent::Fixed(10));

        buy(&mut board, "States Avenue", owner);
        assert_eq!(board.rent(st_charles).unwrap(), Rent::Fixed(10));

        buy(&mut board, "Virginia Avenue", owner);
        assert!(board.owns_group(owner, ColorGroup::Pink));
        assert_eq!(board.rent(st_charles).unwrap(), Rent::Fixed(20));

        board.get_mut(st_charles).unwrap().build_house().unwrap();
        assert_eq!(board.rent(st_charles).unwrap(), Rent::Fixed(50));
    }

    #[test]
    fn test_monopoly_bonus_needs_every_sibling() {
        let mut board = Board::standard();
        let alice = PlayerId::new();
        let bob = PlayerId::new();

        let park_place = buy(&mut board, "Park Place", alice);
        buy(&mut board, "Boardwalk", bob);

        assert!(!board.owns_group(alice, ColorGroup::Blue));
        assert_eq!(board.rent(park_place).unwrap(), Rent::Fixed(35));
    }

    #[test]
    fn test_monopoly_uses_identity_not_name() {
        use crate::player::Player;

        let mut board = Board::standard();
        let first = Player::new("Alice");
        let second = Player::new("Alice");

        let baltic = buy(&mut board, "Baltic Avenue", first.id());
        buy(&mut board, "Mediterranean Avenue", second.id());

        assert_eq!(board.rent(baltic).unwrap(), Rent::Fixed(4));
    }

    #[test]
    fn test_developed_streets_ignore_bonus() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        buy(&mut board, "Park Place", owner);
        let boardwalk = buy(&mut board, "Boardwalk", owner);
        assert_eq!(board.rent(boardwalk).unwrap(), Rent::Fixed(100));

        let expected = [200, 600, 1400, 1700, 2000];
        for rent in expected {
            board.get_mut(boardwalk).unwrap().build_house().unwrap();
            assert_eq!(board.rent(boardwalk).unwrap(), Rent::Fixed(rent));
        }
    }

    #[test]
    fn test_mortgage_does_not_change_rent() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        let reading = buy(&mut board, "Reading Railroad", owner);
        board.get_mut(reading).unwrap().set_mortgaged(true);
        assert_eq!(board.rent(reading).unwrap(), Rent::Fixed(25));
    }

    #[test]
    fn test_owned_by() {
        let mut board = Board::standard();
        let owner = PlayerId::new();

        buy(&mut board, "Boardwalk", owner);
        buy(&mut board, "Reading Railroad", owner);

        let names: Vec<_> = board.owned_by(owner).map(|(_, p)| p.name()).collect();
        assert_eq!(names, vec!["Reading Railroad", "Boardwalk"]);
        assert_eq!(board.owned_by(PlayerId::new()).count(), 0);
    }

    #[test]
    fn test_synthetic_board_rent_rules() {
        let rules = RentRules {
            railroad_base_rent: 10,
            utility_single_factor: 2,
            utility_monopoly_factor: 5,
        };
        let mut board = Board::new(
            rules,
            vec![
                Property::railroad("North Line", 100),
                Property::railroad("South Line", 100),
                Property::utility("Gas Works", 120),
                Property::utility("Telegraph", 120),
            ],
        );
        let owner = PlayerId::new();

        buy(&mut board, "North Line", owner);
        let south = buy(&mut board, "South Line", owner);
        let gas = buy(&mut board, "Gas Works", owner);

        assert_eq!(board.rent(south).unwrap(), Rent::Fixed(20));
        assert_eq!(board.rent(gas).unwrap(), Rent::DiceMultiplier(2));

        buy(&mut board, "Telegraph", owner);
        assert_eq!(board.rent(gas).unwrap(), Rent::DiceMultiplier(5));
    }

    #[test]
    fn test_board_serializes_to_json() {
        let mut board = Board::standard();
        let owner = PlayerId::new();
        buy(&mut board, "Boardwalk", owner);

        let json = serde_json::to_value(&board).unwrap();
        let properties = json["properties"].as_array().unwrap();
        assert_eq!(properties.len(), 28);
        assert_eq!(properties[27]["name"], "Boardwalk");
        assert_eq!(properties[27]["kind"]["kind"], "street");
        assert_eq!(properties[27]["kind"]["group"], "blue");
        assert_eq!(properties[2]["kind"]["kind"], "railroad");

        let restored: Board = serde_json::from_value(json).unwrap();
        assert_eq!(restored.find("Boardwalk").unwrap().1.owner(), Some(owner));
    }

    #[test]
    fn test_restored_board_rejects_out_of_range_houses() {
        let mut json = serde_json::to_value(Board::standard()).unwrap();
        json["properties"][27]["kind"]["houses"] = serde_json::json!(9);

        let err = serde_json::from_value::<Board>(json).unwrap_err();
        assert!(err.to_string().contains("Boardwalk cannot hold 9 houses"));
    }
}
