//! Game controller: the phase state machine that owns the game state.

mod controller;
mod snapshot;
mod state;

pub use controller::GameController;
pub use snapshot::GameSnapshot;
pub use state::{GameState, Stage};
