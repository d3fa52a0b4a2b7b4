//! Settings for both front-ends.
//!
//! `schema` holds the serde types with their defaults; `load` layers the
//! TOML file and `REEL__*` environment variables over them.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
