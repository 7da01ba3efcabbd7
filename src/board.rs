//! Game board: fleet validation, shot resolution and text rendering.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info, warn};

use crate::common::{BoardError, ShotResult};
use crate::config::{ship_class, BOARD_SIZE, FLEET_SIZES, NUM_SHIPS};
use crate::fleet::{cells_of, spec_len, Coord, ShipSpec};
use crate::ship::Ship;

/// What a grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Untouched sea.
    Water,
    /// Untouched ship deck.
    Ship,
    Miss,
    Hit,
    /// Deck of a ship that has gone down.
    Sunk,
}

impl Cell {
    pub fn glyph(&self) -> char {
        match self {
            Cell::Water => '~',
            Cell::Ship => '\u{25A1}',
            Cell::Miss => '.',
            Cell::Hit => '*',
            Cell::Sunk => 'x',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// A player's board: the grid of markers and the ships stamped on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
}

impl Board {
    /// Build a board from ten ship endpoint pairs.
    pub fn new(specs: &[ShipSpec]) -> Result<Self, BoardError> {
        if let Err(e) = validate_fleet(specs) {
            warn!("rejected fleet: {}", e);
            return Err(e);
        }

        let mut grid = [[Cell::Water; BOARD_SIZE]; BOARD_SIZE];
        let mut ships = Vec::with_capacity(specs.len());
        for (index, &(start, end)) in specs.iter().enumerate() {
            let ship = Ship::new(start, end).ok_or(BoardError::ShipNotStraight { index })?;
            for (r, c) in ship.cells() {
                grid[r][c] = Cell::Ship;
            }
            ships.push(ship);
        }
        info!("board ready with {} ships", ships.len());
        Ok(Board { grid, ships })
    }

    /// Fire at (`row`, `col`) and report the outcome.
    ///
    /// Shooting a cell that was already shot changes nothing and reports what the
    /// cell shows now.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        let cell = self
            .cell(row, col)
            .ok_or(BoardError::OutOfBounds { row, col })?;
        let result = match cell {
            Cell::Water | Cell::Miss => {
                self.grid[row][col] = Cell::Miss;
                ShotResult::Miss
            }
            Cell::Hit => ShotResult::Hit,
            Cell::Sunk => ShotResult::Sunk,
            Cell::Ship => {
                let index = self
                    .ships
                    .iter_mut()
                    .position(|s| s.fire(row, col))
                    .ok_or(BoardError::UnknownShipHit { row, col })?;
                let ship = &self.ships[index];
                if ship.is_sunk() {
                    for (r, c) in ship.cells() {
                        self.grid[r][c] = Cell::Sunk;
                    }
                    info!(
                        "{} {} sunk",
                        ship_class(ship.len()).unwrap_or("ship"),
                        index
                    );
                    ShotResult::Sunk
                } else {
                    self.grid[row][col] = Cell::Hit;
                    ShotResult::Hit
                }
            }
        };
        debug!("shot at ({}, {}) on {:?}: {}", row, col, cell, result);
        Ok(result)
    }

    /// Marker at (`row`, `col`), `None` off the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row)?.get(col).copied()
    }

    pub fn grid(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Ships in the order they were given.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships still afloat.
    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Renderable view; with `reveal` off, untouched ships look like water.
    pub fn view(&self, reveal: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal,
        }
    }

    /// The full grid as text, one line per row.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Print the full grid to stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        std::print!("{}", self);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(true), f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{\n  ships: {:?},\n  grid:", self.ships)?;
        write!(f, "{}}}", self)
    }
}

/// Text rendering of a [`Board`], optionally hiding untouched ships.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.grid.iter() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                let shown = match cell {
                    Cell::Ship if !self.reveal => Cell::Water,
                    other => *other,
                };
                write!(f, "{}", shown)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Check a fleet description against the placement rules without building it.
///
/// Adjacency is judged on endpoints only: for ships of at most four decks every
/// non-overlapping pair that touches also has touching endpoints. Overlap, which
/// endpoints alone cannot see, is checked cell by cell.
pub fn validate_fleet(specs: &[ShipSpec]) -> Result<(), BoardError> {
    if specs.len() != NUM_SHIPS {
        return Err(BoardError::WrongShipCount { found: specs.len() });
    }

    for (index, &(start, end)) in specs.iter().enumerate() {
        if !in_bounds(start) || !in_bounds(end) {
            return Err(BoardError::ShipOutOfBounds { index });
        }
        if start.0 != end.0 && start.1 != end.1 {
            return Err(BoardError::ShipNotStraight { index });
        }
    }

    let mut sizes: Vec<usize> = specs.iter().map(spec_len).collect();
    sizes.sort_unstable();
    if sizes[..] != FLEET_SIZES[..] {
        return Err(BoardError::WrongShipSizes);
    }

    for (i, a) in specs.iter().enumerate() {
        for (j, b) in specs.iter().enumerate().skip(i + 1) {
            if cells_of(a).any(|p| cells_of(b).any(|q| p == q)) {
                return Err(BoardError::ShipsOverlap {
                    first: i,
                    second: j,
                });
            }
            let touching = endpoints(a)
                .iter()
                .any(|p| endpoints(b).iter().any(|q| chebyshev(*p, *q) == 1));
            if touching {
                return Err(BoardError::ShipsAdjacent {
                    first: i,
                    second: j,
                });
            }
        }
    }
    Ok(())
}

fn in_bounds((r, c): Coord) -> bool {
    r < BOARD_SIZE && c < BOARD_SIZE
}

fn endpoints(spec: &ShipSpec) -> [Coord; 2] {
    [spec.0, spec.1]
}

fn chebyshev(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}
