//! Application layer use cases for mousepath.
//!
//! # What use cases are there?
//!
//! - **`drive_cursor`** – Defines the OS seam ([`drive_cursor::PlatformCursor`])
//!   and the timed movement contract ([`drive_cursor::CursorDriver`]).  The
//!   `TweeningDriver` implements the contract on top of any platform cursor and
//!   enforces the failsafe corners and the post-move pause.
//!
//! - **`execute_motion`** – Validates targets against the screen bounds and
//!   walks the cursor through single points, generated paths and shakes.
//!
//! - **`motion_worker`** – Runs executor jobs one at a time on the blocking
//!   thread pool and reports their status over a channel.

pub mod drive_cursor;
pub mod execute_motion;
pub mod motion_worker;
