use std::cmp::Ordering;

use tracing::trace;

/// Split a version string into numeric segments.
///
/// Segments that are not unsigned integers count as 0, so the result is never
/// empty and parsing never fails.
///
/// Examples:
/// - "1.2.10" -> [1, 2, 10]
/// - "" -> [0]
/// - "1.beta" -> [1, 0]
pub fn parse_segments(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|segment| {
            segment.parse::<u64>().unwrap_or_else(|_| {
                trace!("Non-numeric segment '{}' in version '{}'", segment, version);
                0
            })
        })
        .collect()
}

/// Compare two version strings segment by segment.
///
/// The shorter sequence is padded with zeros, so "1.2" and "1.2.0" are equal.
/// Segments compare numerically: "1.2.10" is greater than "1.2.9".
pub fn compare_versions(lhs: &str, rhs: &str) -> Ordering {
    let lhs = parse_segments(lhs);
    let rhs = parse_segments(rhs);
    let len = lhs.len().max(rhs.len());

    (0..len)
        .map(|idx| {
            let l = lhs.get(idx).copied().unwrap_or(0);
            let r = rhs.get(idx).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Returns true iff `lhs` is strictly older than `rhs`.
pub fn is_less(lhs: &str, rhs: &str) -> bool {
    compare_versions(lhs, rhs) == Ordering::Less
}
