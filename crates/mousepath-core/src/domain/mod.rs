//! Domain entities for MousePath.
//!
//! This module contains pure value types with no infrastructure dependencies.
//!
//! # What belongs in the domain? (for beginners)
//!
//! The domain layer holds the vocabulary every other layer speaks: what a
//! screen coordinate is, what "inside the screen" means, how two coordinates
//! relate.  It has **no** imports from OS APIs or timers, so it can be unit
//! tested anywhere.  Outer layers (the executor, the OS cursor adapters, the
//! CLI) depend on the domain; the domain never depends on them.

/// Points, offsets, paths and the rectangular screen bound.
///
/// See [`geometry::ScreenBounds`] for the bound check used by the executor.
pub mod geometry;
