use std::cmp::Ordering;

/// Split a version string into its numeric release parts
///
/// Removes a leading 'v' and any pre-release or build suffix, so
/// "v1.2.3-rc.1" becomes `[1, 2, 3]`. Non-numeric parts count as zero.
fn release_parts(version: &str) -> Vec<u32> {
    let version = version.trim_start_matches('v');
    let release = version
        .split(|c| c == '-' || c == '+')
        .next()
        .unwrap_or_default();

    release
        .split('.')
        .map(|p| p.parse::<u32>().unwrap_or(0))
        .collect()
}

/// Compare two semantic version strings by their release parts
///
/// Pads with zeros if lengths differ (e.g., "1.2" is treated as "1.2.0").
/// Pre-release suffixes are ignored.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut a_parts = release_parts(a);
    let mut b_parts = release_parts(b);

    let max_len = a_parts.len().max(b_parts.len());
    a_parts.resize(max_len, 0);
    b_parts.resize(max_len, 0);

    a_parts.cmp(&b_parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_versions_equal() {
        assert_eq!(compare_versions("1.2.3", "1.2.3"), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_numeric_not_lexical() {
        assert_eq!(compare_versions("0.11.0", "0.9.0"), Ordering::Greater);
    }

    #[test]
    fn test_compare_versions_padding() {
        assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.2", "1.2.1"), Ordering::Less);
    }

    #[test]
    fn test_compare_versions_ignores_prefix_and_suffix() {
        assert_eq!(compare_versions("v2.0.0", "2.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.0.0-rc.1", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_compare_versions_major_dominates() {
        assert_eq!(compare_versions("2.0.0", "1.99.99"), Ordering::Greater);
    }
}
