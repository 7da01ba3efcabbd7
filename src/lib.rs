#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod fleet;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
mod ship;
mod sim;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::{random_fleet, sample_fleet, spec_len, Coord, ShipSpec};
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use sim::*;
