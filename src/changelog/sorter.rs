//! Ascending ordering of a catalog

use crate::changelog::types::Release;
use crate::changelog::version::compare_versions;

/// Sort a catalog from oldest to newest version.
///
/// The sort is stable: releases with version-equal strings keep their input
/// order. The catalog itself is left untouched.
pub fn sort_ascending(catalog: &[Release]) -> Vec<&Release> {
    let mut sorted: Vec<&Release> = catalog.iter().collect();
    sorted.sort_by(|a, b| compare_versions(&a.version, &b.version));
    sorted
}

/// Returns the newest release in the catalog, if any.
///
/// This is the version a caller records as "last seen" after presenting a delta.
pub fn latest_release(catalog: &[Release]) -> Option<&Release> {
    catalog
        .iter()
        .max_by(|a, b| compare_versions(&a.version, &b.version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn catalog(versions: &[&str]) -> Vec<Release> {
        versions
            .iter()
            .map(|v| Release::new(*v, format!("Release {v}")))
            .collect()
    }

    fn versions<'a>(releases: &[&'a Release]) -> Vec<&'a str> {
        releases.iter().map(|r| r.version.as_str()).collect()
    }

    #[rstest]
    #[case(&["1.1.0", "1.0.0", "1.1.1"], &["1.0.0", "1.1.0", "1.1.1"])]
    #[case(&["1.2.10", "1.2.9", "1.2"], &["1.2", "1.2.9", "1.2.10"])]
    #[case(&["2", "10", "1.9.9"], &["1.9.9", "2", "10"])]
    #[case(&[], &[])]
    fn sort_ascending_returns_expected(#[case] input: &[&str], #[case] expected: &[&str]) {
        let catalog = catalog(input);
        assert_eq!(versions(&sort_ascending(&catalog)), expected);
    }

    #[test]
    fn sort_ascending_is_idempotent() {
        let catalog = catalog(&["3.0", "1.0.1", "2.5", "1.0.10", "0.1"]);
        let once: Vec<Release> = sort_ascending(&catalog).into_iter().cloned().collect();
        let twice: Vec<Release> = sort_ascending(&once).into_iter().cloned().collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn sort_ascending_keeps_input_order_for_equal_versions() {
        let catalog = vec![
            Release::new("1.1", "second"),
            Release::new("1.0", "first"),
            Release::new("1.1.0", "third"),
        ];

        let titles: Vec<&str> = sort_ascending(&catalog)
            .iter()
            .map(|r| r.title.as_str())
            .collect();

        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn sort_ascending_does_not_mutate_input() {
        let catalog = catalog(&["2.0", "1.0"]);
        let _ = sort_ascending(&catalog);

        assert_eq!(catalog[0].version, "2.0");
        assert_eq!(catalog[1].version, "1.0");
    }

    #[test]
    fn latest_release_returns_newest_version() {
        let catalog = catalog(&["1.2.9", "1.2.10", "1.0"]);

        assert_eq!(latest_release(&catalog).map(|r| r.version.as_str()), Some("1.2.10"));
    }

    #[test]
    fn latest_release_prefers_later_entry_for_equal_versions() {
        let catalog = vec![Release::new("1.0", "first"), Release::new("1.0.0", "second")];

        assert_eq!(latest_release(&catalog).map(|r| r.title.as_str()), Some("second"));
    }

    #[test]
    fn latest_release_returns_none_for_empty_catalog() {
        assert_eq!(latest_release(&[]), None);
    }
}
