//! The decode/output collaborator behind the player.
//!
//! `MediaEngine` turns a loaded item into a `MediaSound`; the player only ever
//! talks to those two traits. `RodioEngine` is the real implementation.

mod output;
mod sink;
mod types;

pub use output::{RodioEngine, RodioSound};
pub use types::{MediaEngine, MediaSound};

#[cfg(test)]
mod tests;
