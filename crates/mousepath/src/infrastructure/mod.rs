//! Infrastructure layer for mousepath.
//!
//! Contains OS-facing adapters and on-disk configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `mousepath_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`cursor`** – OS-specific implementations of `PlatformCursor`, selected
//!   at compile time with `#[cfg(target_os)]`, plus an always-available
//!   `MockCursor` for tests.
//!
//! - **`storage`** – TOML configuration file: load, save and defaults.

pub mod cursor;
pub mod storage;
