//! Media item model: what is loaded and how the engine should address it.

mod item;

pub use item::*;

#[cfg(test)]
mod tests;
