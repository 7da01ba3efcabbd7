//! Common types for Battleship: board errors and shot results.

use core::fmt;

/// Outcome of a shot fired at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot damaged a ship that still has live decks.
    Hit,
    /// Shot destroyed the last live deck of a ship.
    Sunk,
}

impl ShotResult {
    /// Label reported to the player.
    pub fn label(&self) -> &'static str {
        match self {
            ShotResult::Miss => "Miss!",
            ShotResult::Hit => "Hit!",
            ShotResult::Sunk => "Sunk!",
        }
    }
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Fleet does not contain exactly ten ships.
    WrongShipCount { found: usize },
    /// Deck counts differ from one 4, two 3s, three 2s and four 1s.
    WrongShipSizes,
    /// An endpoint of one ship touches another ship.
    ShipsAdjacent { first: usize, second: usize },
    /// Two ships claim the same cell.
    ShipsOverlap { first: usize, second: usize },
    /// Ship endpoints share neither a row nor a column.
    ShipNotStraight { index: usize },
    /// Ship endpoint lies outside the grid.
    ShipOutOfBounds { index: usize },
    /// Shot coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Grid shows a ship where no ship accepted the shot.
    UnknownShipHit { row: usize, col: usize },
    /// Random fleet generation gave up.
    UnableToPlaceFleet,
}

impl BoardError {
    /// `true` for errors raised while validating a fleet at construction.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            BoardError::OutOfBounds { .. }
                | BoardError::UnknownShipHit { .. }
                | BoardError::UnableToPlaceFleet
        )
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::WrongShipCount { found } => {
                write!(f, "There must be 10 ships, found {}", found)
            }
            BoardError::WrongShipSizes => write!(f, "Wrong ship size configuration"),
            BoardError::ShipsAdjacent { first, second } => write!(
                f,
                "The ships must not be adjacent (ships {} and {})",
                first, second
            ),
            BoardError::ShipsOverlap { first, second } => {
                write!(f, "Ships {} and {} overlap", first, second)
            }
            BoardError::ShipNotStraight { index } => {
                write!(f, "Ship {} is not a straight line", index)
            }
            BoardError::ShipOutOfBounds { index } => {
                write!(f, "Ship {} is out of bounds", index)
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Shot at ({}, {}) is out of bounds", row, col)
            }
            BoardError::UnknownShipHit { row, col } => {
                write!(f, "No ship occupies ({}, {})", row, col)
            }
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
