#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod model;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod presenter;
pub mod session;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use mask::{neighbors, MaskError, MineMask, SetBits};
pub use model::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use presenter::*;
pub use session::{run_game, GameReport};
#[cfg(feature = "std")]
pub use ui::*;
