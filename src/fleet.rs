//! Fleet descriptions: ship endpoint pairs, a fixed sample fleet and random fleets.

use alloc::vec::Vec;
use log::debug;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET_SIZES, NUM_SHIPS};

/// Grid coordinate as (row, col).
pub type Coord = (usize, usize);

/// A ship given by its two endpoints.
pub type ShipSpec = (Coord, Coord);

const MAX_ATTEMPTS: usize = 100;
const MAX_RESTARTS: usize = 100;

/// Number of decks spanned by `spec`, counting both endpoints.
pub fn spec_len(spec: &ShipSpec) -> usize {
    let ((sr, sc), (er, ec)) = *spec;
    sr.abs_diff(er) + sc.abs_diff(ec) + 1
}

/// A fixed legal fleet with a free cell between every pair of ships.
pub fn sample_fleet() -> [ShipSpec; NUM_SHIPS] {
    [
        ((0, 0), (0, 3)),
        ((2, 0), (2, 2)),
        ((4, 0), (4, 2)),
        ((6, 0), (6, 1)),
        ((8, 0), (8, 1)),
        ((0, 5), (0, 6)),
        ((0, 8), (0, 8)),
        ((2, 8), (2, 8)),
        ((4, 8), (4, 8)),
        ((6, 8), (6, 8)),
    ]
}

/// Generate a random legal fleet where no two ships touch, not even diagonally.
///
/// Ships are placed largest first; a fleet that paints itself into a corner is
/// discarded and started over.
pub fn random_fleet<R: Rng>(rng: &mut R) -> Result<Vec<ShipSpec>, BoardError> {
    for restart in 0..MAX_RESTARTS {
        if let Some(fleet) = try_random_fleet(rng) {
            debug!("random fleet placed after {} restarts", restart);
            return Ok(fleet);
        }
    }
    Err(BoardError::UnableToPlaceFleet)
}

fn try_random_fleet<R: Rng>(rng: &mut R) -> Option<Vec<ShipSpec>> {
    let mut blocked = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut fleet = Vec::with_capacity(NUM_SHIPS);
    for &len in FLEET_SIZES.iter().rev() {
        let spec = random_placement(rng, &blocked, len)?;
        block_around(&mut blocked, &spec);
        fleet.push(spec);
    }
    Some(fleet)
}

fn random_placement<R: Rng>(
    rng: &mut R,
    blocked: &[[bool; BOARD_SIZE]; BOARD_SIZE],
    len: usize,
) -> Option<ShipSpec> {
    for _ in 0..MAX_ATTEMPTS {
        let horizontal: bool = rng.random();
        let (max_r, max_c) = if horizontal {
            (BOARD_SIZE - 1, BOARD_SIZE - len)
        } else {
            (BOARD_SIZE - len, BOARD_SIZE - 1)
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let end = if horizontal {
            (r, c + len - 1)
        } else {
            (r + len - 1, c)
        };
        let spec = ((r, c), end);
        if cells_of(&spec).all(|(r, c)| !blocked[r][c]) {
            return Some(spec);
        }
    }
    None
}

/// Mark every cell of `spec` and its eight-neighbourhood as taken.
fn block_around(blocked: &mut [[bool; BOARD_SIZE]; BOARD_SIZE], spec: &ShipSpec) {
    for (r, c) in cells_of(spec) {
        for nr in r.saturating_sub(1)..=(r + 1).min(BOARD_SIZE - 1) {
            for nc in c.saturating_sub(1)..=(c + 1).min(BOARD_SIZE - 1) {
                blocked[nr][nc] = true;
            }
        }
    }
}

/// Cells covered by a straight `spec`; diagonal specs yield nothing.
pub(crate) fn cells_of(spec: &ShipSpec) -> impl Iterator<Item = Coord> {
    let ((sr, sc), (er, ec)) = *spec;
    let (rows, cols) = if sr == er {
        ((sr, sr), (sc.min(ec), sc.max(ec)))
    } else if sc == ec {
        ((sr.min(er), sr.max(er)), (sc, sc))
    } else {
        ((1, 0), (1, 0))
    };
    (rows.0..=rows.1).flat_map(move |r| (cols.0..=cols.1).map(move |c| (r, c)))
}
