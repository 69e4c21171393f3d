//! "New since last seen" selection over a catalog

use tracing::debug;

use crate::changelog::sorter::sort_ascending;
use crate::changelog::types::Release;
use crate::changelog::version::is_less;
use crate::config::NO_HISTORY_SENTINEL;

/// Caller-recorded marker of the newest version already shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastSeen<'a> {
    /// Nothing recorded yet (absent, empty, or the "0" sentinel)
    NoHistory,
    /// A previously recorded version string
    Version(&'a str),
}

impl<'a> LastSeen<'a> {
    /// Classify a raw marker. Absent, empty and the sentinel all mean no history.
    pub fn from_marker(marker: Option<&'a str>) -> Self {
        match marker {
            None | Some("") | Some(NO_HISTORY_SENTINEL) => LastSeen::NoHistory,
            Some(version) => LastSeen::Version(version),
        }
    }
}

/// Which branch of the selection produced a delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The catalog has no releases
    EmptyCatalog,
    /// No history was recorded; everything is new
    FirstRun,
    /// The recorded version is at or past the newest release
    CaughtUp,
    /// The recorded version is in the catalog; everything after it is new
    AfterKnownVersion,
    /// The recorded version is not in the catalog; everything newer by value is new
    NewerThanUnknownVersion,
}

/// Releases the user has not seen, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta<'a> {
    pub releases: Vec<&'a Release>,
    pub resolution: Resolution,
}

impl<'a> Delta<'a> {
    fn new(releases: Vec<&'a Release>, resolution: Resolution) -> Self {
        Self {
            releases,
            resolution,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

/// Select the releases newer than `last_seen`, newest first.
pub fn select_new<'a>(catalog: &'a [Release], last_seen: Option<&str>) -> Vec<&'a Release> {
    select_delta(catalog, last_seen).releases
}

/// Select the releases newer than `last_seen`, reporting which rule applied.
///
/// A last-seen version present in the catalog excludes itself by position;
/// one missing from the catalog falls back to a by-value cutoff. The two can
/// disagree when the catalog changed between recordings.
pub fn select_delta<'a>(catalog: &'a [Release], last_seen: Option<&str>) -> Delta<'a> {
    let sorted = sort_ascending(catalog);

    let Some(latest) = sorted.last() else {
        debug!("Catalog is empty, nothing to select");
        return Delta::new(Vec::new(), Resolution::EmptyCatalog);
    };

    let last_seen = match LastSeen::from_marker(last_seen) {
        LastSeen::NoHistory => {
            debug!("No last-seen version recorded, selecting all {} releases", sorted.len());
            return Delta::new(newest_first(sorted), Resolution::FirstRun);
        }
        LastSeen::Version(version) => version,
    };

    if !is_less(last_seen, &latest.version) {
        debug!(
            "Last seen '{}' is not older than latest '{}', nothing new",
            last_seen, latest.version
        );
        return Delta::new(Vec::new(), Resolution::CaughtUp);
    }

    match sorted.iter().position(|r| r.version == last_seen) {
        Some(index) => {
            let releases = newest_first(sorted[index + 1..].to_vec());
            debug!(
                "Last seen '{}' found at position {}, {} newer releases",
                last_seen,
                index,
                releases.len()
            );
            Delta::new(releases, Resolution::AfterKnownVersion)
        }
        None => {
            let releases = newest_first(
                sorted
                    .into_iter()
                    .filter(|r| is_less(last_seen, &r.version))
                    .collect(),
            );
            debug!(
                "Last seen '{}' not in catalog, {} releases newer by value",
                last_seen,
                releases.len()
            );
            Delta::new(releases, Resolution::NewerThanUnknownVersion)
        }
    }
}

fn newest_first(mut ascending: Vec<&Release>) -> Vec<&Release> {
    ascending.reverse();
    ascending
}
