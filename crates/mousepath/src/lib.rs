//! mousepath library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does mousepath do? (for beginners)
//!
//! mousepath moves the real mouse cursor along geometric paths: circles,
//! stars, spirals, random walks and so on.  The shapes themselves are plain
//! lists of points produced by `mousepath-core`; this crate is the part that
//! touches the operating system.
//!
//! A motion goes through three layers:
//!
//! 1. The **executor** checks every target against the screen bounds and
//!    decides what to do with points that fall outside (reject a single
//!    target, skip a point inside a path).
//! 2. The **driver** turns "go to (x, y) over 500 ms" into many small pointer
//!    warps.  Before each warp it looks at where the pointer is: if the user
//!    has shoved it into a screen corner, the motion aborts.  This failsafe is
//!    how a human takes back control of a runaway script.
//! 3. The **platform cursor** performs a single instant warp through the OS
//!    API (`SetCursorPos` on Windows, XTest on Linux, CoreGraphics on macOS).

/// Application layer: cursor driver, motion executor and worker.
pub mod application;

/// Infrastructure layer: OS cursor adapters and configuration storage.
pub mod infrastructure;
