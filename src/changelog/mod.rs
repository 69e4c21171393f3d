//! Changelog core: decides which releases a user has not seen yet
//!
//! Everything in this module is synchronous and side-effect free. Callers own
//! the catalog; the core only hands back borrowed, reordered views of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────▶│   Sorter    │────▶│  Selector   │
//! │ (&[Release])│     │ (ascending) │     │(newest 1st) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────────────────────┐
//!                     │     Version comparator      │
//!                     └─────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: `Release` and `Change`
//! - [`version`]: dotted numeric version ordering
//! - [`sorter`]: stable ascending sort of a catalog
//! - [`selector`]: last-seen classification and delta selection

pub mod selector;
pub mod sorter;
pub mod types;
pub mod version;

pub use selector::{Delta, LastSeen, Resolution, select_delta, select_new};
pub use sorter::{latest_release, sort_ascending};
pub use types::{Change, Release};
pub use version::{compare_versions, is_less, parse_segments};
