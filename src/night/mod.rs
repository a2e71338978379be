//! Night phase: ordered role calls and their effects.
//!
//! ## Calling Order
//!
//! ```text
//! werewolf-confirm → werewolf-action → witch-confirm → witch-action
//!                  → seer-confirm   → seer-action   → (night end)
//! ```
//!
//! Declining a confirm step skips straight to the next role's confirm step.
//! Deaths are collected, not applied: `NightProgress::Ended` carries the set
//! and the controller marks the players dead.

mod phase;
mod resolution;

pub use phase::{NightSubPhase, WitchPotions};
pub use resolution::{NightContext, NightDeaths, NightProgress, NightResolution};
