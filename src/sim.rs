//! Unattended play: fire at every cell in random order until the fleet is gone.

use alloc::vec::Vec;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::config::BOARD_SIZE;

/// Tally of a simulated game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub shots: usize,
    pub misses: usize,
    pub hits: usize,
    pub sunk: usize,
    pub cleared: bool,
}

impl SimReport {
    pub(crate) fn record(&mut self, result: ShotResult) {
        self.shots += 1;
        match result {
            ShotResult::Miss => self.misses += 1,
            ShotResult::Hit => self.hits += 1,
            ShotResult::Sunk => self.sunk += 1,
        }
    }
}

/// Shoot every cell of `board` once, in shuffled order, stopping when all ships are sunk.
pub fn simulate<R: Rng>(board: &mut Board, rng: &mut R) -> Result<SimReport, BoardError> {
    let mut targets: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .collect();
    targets.shuffle(rng);

    let mut report = SimReport::default();
    for (row, col) in targets {
        if board.all_sunk() {
            break;
        }
        report.record(board.fire(row, col)?);
    }
    report.cleared = board.all_sunk();
    debug!("simulation finished: {:?}", report);
    Ok(report)
}
