//! The 28 purchasable properties of the standard board, in board order.

use crate::property::{ColorGroup, Property, PropertyKind, Street};

/// Price of every railroad on the standard board.
pub const RAILROAD_PRICE: u32 = 200;

/// Price of every utility on the standard board.
pub const UTILITY_PRICE: u32 = 150;

enum Entry {
    Street(&'static str, u32, ColorGroup, [u32; 6]),
    Railroad(&'static str),
    Utility(&'static str),
}

const STANDARD_BOARD: [Entry; 28] = {
    use ColorGroup::*;
    [
        Entry::Street("Mediterranean Avenue", 60, Brown, [2, 10, 30, 90, 160, 250]),
        Entry::Street("Baltic Avenue", 60, Brown, [4, 20, 60, 180, 320, 450]),
        Entry::Railroad("Reading Railroad"),
        Entry::Street("Oriental Avenue", 100, LightBlue, [6, 30, 90, 270, 400, 550]),
        Entry::Street("Vermont Avenue", 100, LightBlue, [6, 30, 90, 270, 400, 550]),
        Entry::Street("Connecticut Avenue", 120, LightBlue, [8, 40, 100, 300, 450, 600]),
        Entry::Street("St. Charles Place", 140, Pink, [10, 50, 150, 450, 625, 750]),
        Entry::Utility("Electric Company"),
        Entry::Street("States Avenue", 140, Pink, [10, 50, 150, 450, 625, 750]),
        Entry::Street("Virginia Avenue", 160, Pink, [12, 60, 180, 500, 700, 900]),
        Entry::Railroad("Pennsylvania Railroad"),
        Entry::Street("St. James Place", 180, Orange, [14, 70, 200, 550, 750, 950]),
        Entry::Street("Tennessee Avenue", 180, Orange, [14, 70, 200, 550, 750, 950]),
        Entry::Street("New York Avenue", 200, Orange, [16, 80, 220, 600, 800, 1000]),
        Entry::Street("Kentucky Avenue", 220, Red, [18, 90, 250, 700, 875, 1050]),
        Entry::Street("Indiana Avenue", 220, Red, [18, 90, 250, 700, 875, 1050]),
        Entry::Street("Illinois Avenue", 240, Red, [20, 100, 300, 750, 925, 1100]),
        Entry::Railroad("B. & O. Railroad"),
        Entry::Street("Atlantic Avenue", 260, Yellow, [22, 110, 330, 800, 975, 1150]),
        Entry::Street("Ventnor Avenue", 260, Yellow, [22, 110, 330, 800, 975, 1150]),
        Entry::Utility("Water Works"),
        Entry::Street("Marvin Gardens", 280, Yellow, [24, 120, 360, 850, 1025, 1200]),
        Entry::Street("Pacific Avenue", 300, Green, [26, 130, 390, 900, 1100, 1275]),
        Entry::Street("North Carolina Avenue", 300, Green, [26, 130, 390, 900, 1100, 1275]),
        Entry::Street("Pennsylvania Avenue", 320, Green, [28, 150, 450, 1000, 1200, 1400]),
        Entry::Railroad("Short Line"),
        Entry::Street("Park Place", 350, Blue, [35, 175, 500, 1100, 1300, 1500]),
        Entry::Street("Boardwalk", 400, Blue, [50, 200, 600, 1400, 1700, 2000]),
    ]
};

/// Build fresh, bank-owned instances of the standard properties.
pub fn standard_properties() -> Vec<Property> {
    standard_properties_priced(RAILROAD_PRICE, UTILITY_PRICE)
}

/// The standard properties with railroads and utilities repriced.
pub fn standard_properties_priced(railroad_price: u32, utility_price: u32) -> Vec<Property> {
    STANDARD_BOARD
        .iter()
        .map(|entry| match *entry {
            Entry::Street(name, price, group, rents) => {
                Property::from_kind(name, price, PropertyKind::Street(Street::new(group, rents)))
            }
            Entry::Railroad(name) => Property::railroad(name, railroad_price),
            Entry::Utility(name) => Property::utility(name, utility_price),
        })
        .collect()
}
