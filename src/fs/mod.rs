//! Filesystem utilities for the launcher.
//!
//! Provides atomic file writes so a crash mid-serialization never leaves a
//! credentials or settings document half-written on disk.

pub mod atomic;

pub use atomic::atomic_write;
