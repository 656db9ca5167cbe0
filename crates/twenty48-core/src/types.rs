//! Common type aliases used throughout the engine.

/// Value held by a single cell. `0` is an empty cell, anything else is a
/// power of two no smaller than 2.
pub type Tile = u32;

/// Running score and per-move score gain.
pub type Score = u64;
