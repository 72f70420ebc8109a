//! # escape_engine
//!
//! The core engine for a two-agent pursuit-evasion game on a small square grid.
//! A runner races toward a fixed goal cell using shortest-path greedy movement
//! while a blocker patrols a fixed column trying to cut it off.

pub mod game;
pub use game::FinishedReason;
pub use game::Game;
pub use game::GameState;
pub use game::TurnOrder;

pub mod grid;
pub use grid::Position;

mod agents;
mod render;
mod replay;
