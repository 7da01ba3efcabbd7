//! Ships as straight runs of decks, with per-deck damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::fleet::Coord;

/// One grid cell occupied by a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    row: usize,
    col: usize,
    alive: bool,
}

impl Deck {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            alive: true,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// `false` once the deck has been hit.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// A ship occupying a horizontal or vertical segment of the board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    decks: Vec<Deck>,
    sunk: bool,
}

impl Ship {
    /// Build the decks spanning `start` to `end` inclusive, in either order.
    /// Returns `None` when the endpoints share neither a row nor a column.
    pub fn new(start: Coord, end: Coord) -> Option<Self> {
        let (sr, sc) = start;
        let (er, ec) = end;
        let decks: Vec<Deck> = if sr == er {
            (sc.min(ec)..=sc.max(ec)).map(|c| Deck::new(sr, c)).collect()
        } else if sc == ec {
            (sr.min(er)..=sr.max(er)).map(|r| Deck::new(r, sc)).collect()
        } else {
            return None;
        };
        Some(Ship { decks, sunk: false })
    }

    /// Deck at (`row`, `col`) if this ship occupies it.
    pub fn deck(&self, row: usize, col: usize) -> Option<&Deck> {
        self.decks.iter().find(|d| d.row == row && d.col == col)
    }

    /// Damage the deck at (`row`, `col`).
    /// Returns `true` only if a live deck was there; the sunk flag is refreshed on every hit.
    pub fn fire(&mut self, row: usize, col: usize) -> bool {
        let deck = match self
            .decks
            .iter_mut()
            .find(|d| d.row == row && d.col == col)
        {
            Some(deck) if deck.alive => deck,
            _ => return false,
        };
        deck.alive = false;
        self.sunk = self.decks.iter().all(|d| !d.alive);
        true
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Number of decks not yet hit.
    pub fn alive_decks(&self) -> usize {
        self.decks.iter().filter(|d| d.alive).count()
    }

    /// Coordinates of every deck, in segment order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.decks.iter().map(|d| (d.row, d.col))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.decks.first().map(|d| (d.row, d.col));
        let last = self.decks.last().map(|d| (d.row, d.col));
        write!(
            f,
            "Ship {{ from: {:?}, to: {:?}, alive: {}/{}, sunk: {} }}",
            first,
            last,
            self.alive_decks(),
            self.len(),
            self.sunk,
        )
    }
}
