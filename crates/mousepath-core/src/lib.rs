//! # mousepath-core
//!
//! Shared library for MousePath containing the screen-space geometry types and
//! the cursor path generators.
//!
//! This crate has zero dependencies on OS APIs, cursor drivers, or timers.
//! Everything in it is a pure function of its inputs (plus an explicitly
//! supplied random source for the stochastic patterns), so it compiles and
//! tests on any platform without a display.
//!
//! # Architecture overview (for beginners)
//!
//! MousePath moves the mouse cursor along geometric figures: circles, stars,
//! spirals, hearts and so on.  The work is split in two halves:
//!
//! 1. **Generate** – turn a handful of shape parameters (a center, a radius, a
//!    step count) into an ordered list of pixel coordinates.  That is this
//!    crate.
//! 2. **Execute** – walk the real cursor through that list at a controlled
//!    speed, refusing to leave the screen.  That lives in the `mousepath`
//!    crate, which owns the OS adapters.
//!
//! The modules here are:
//!
//! - **`domain`** – value types shared by both halves: [`Point`], [`Offset`],
//!   [`Path`] and [`ScreenBounds`], plus a few geometry helpers.
//!
//! - **`patterns`** – the path generators and the [`Pattern`] selector that
//!   front ends use to name a shape together with its parameters.

pub mod domain;
pub mod patterns;

// Re-export the most-used types at the crate root so callers can write
// `mousepath_core::Point` instead of `mousepath_core::domain::geometry::Point`.
pub use domain::geometry::{normalize_duration, Offset, Path, Point, ScreenBounds};
pub use patterns::Pattern;
