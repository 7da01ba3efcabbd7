//! Game constants for the classic ten-ship fleet.

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 10;

/// Deck counts of a legal fleet, sorted ascending.
pub const FLEET_SIZES: [usize; NUM_SHIPS] = [1, 1, 1, 1, 2, 2, 2, 3, 3, 4];

/// Class names indexed by deck count.
pub const SHIP_CLASSES: [(&str, usize); 4] = [
    ("Boat", 1),
    ("Destroyer", 2),
    ("Cruiser", 3),
    ("Battleship", 4),
];

/// Environment variable holding the log level for the binaries.
pub const LOG_ENV: &str = "BATTLESHIP_LOG";

/// Class name for a ship with `length` decks, `None` for lengths outside the fleet.
pub fn ship_class(length: usize) -> Option<&'static str> {
    SHIP_CLASSES
        .iter()
        .find(|(_, len)| *len == length)
        .map(|(name, _)| *name)
}
