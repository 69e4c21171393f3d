//! Changelog delta selection
//!
//! - [`changelog`]: version ordering and "new since last seen" selection (pure, no I/O)
//! - [`loader`]: decoding a catalog document from disk
//! - [`render`]: formatting a delta for display
//! - [`config`]: crate constants and data/log path resolution
//! - [`logging`]: tracing subscriber setup for the binary

pub mod changelog;
pub mod config;
pub mod loader;
pub mod logging;
pub mod render;
