//! Win-condition rules.
//!
//! `WinCondition` is the seam: the controller is generic over it and
//! `StandardWinCondition` is the usual table rule.

pub mod win;

pub use win::{AliveCounts, StandardWinCondition, WinCondition, Winner};
