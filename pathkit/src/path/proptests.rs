//! Property-based tests for path handling.
//!
//! Note: the normalize and decompose modules carry their own small property
//! tests. This module runs heavier cases across module boundaries.

use super::absolute::make_absolute;
use super::decompose::{file_name, parent, split, subpath};
use super::normalize::{resolve, trim_path};
use crate::split::segments;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn canonical_absolute_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn messy_relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => segment_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
            1 => Just(String::new()),
        ],
        0..10,
    )
    .prop_map(|parts| parts.join("/"))
}

/// Count how deep a relative path ever climbs above its starting point.
fn underflows(path: &str) -> bool {
    let mut depth: i64 = 0;
    for segment in segments(path) {
        match segment {
            "." => {}
            ".." => {
                depth -= 1;
                if depth < 0 {
                    return true;
                }
            }
            _ => depth += 1,
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization fails exactly when a relative path climbs out of itself
    #[test]
    fn malformed_iff_underflow(path in messy_relative_strategy()) {
        prop_assert_eq!(trim_path(&path).is_err(), !path.is_empty() && underflows(&path));
    }

    // Normalization is idempotent
    #[test]
    fn normalization_idempotent(path in messy_relative_strategy()) {
        if let Ok(once) = trim_path(&path) {
            prop_assert_eq!(trim_path(&once).unwrap(), once);
        }
    }

    // Relative output keeps only real segments, so it is empty or clean
    #[test]
    fn relative_output_has_only_real_segments(path in messy_relative_strategy()) {
        if let Ok(normalized) = trim_path(&path) {
            prop_assert!(!normalized.starts_with('/'));
            if !normalized.is_empty() {
                prop_assert!(normalized
                    .split('/')
                    .all(|segment| !segment.is_empty() && segment != "." && segment != ".."));
            }
        }
    }

    // Resolving against a relative cwd is always rejected
    #[test]
    fn resolve_rejects_relative_cwd(cwd in messy_relative_strategy(), path in messy_relative_strategy()) {
        prop_assert!(resolve(&path, &cwd).is_err());
    }

    // Resolving against an absolute cwd always yields an absolute path
    #[test]
    fn resolve_is_absolute(cwd in canonical_absolute_strategy(), path in messy_relative_strategy()) {
        if let Ok(resolved) = resolve(&path, &cwd) {
            prop_assert!(resolved.starts_with('/'));
        }
    }

    // Resolved relative paths stay under cwd unless they contain ".."
    #[test]
    fn resolve_without_parent_refs_stays_under_cwd(cwd in canonical_absolute_strategy(), parts in prop::collection::vec(segment_strategy(), 1..5)) {
        let resolved = resolve(&parts.join("/"), &cwd).unwrap();
        prop_assert!(resolved.starts_with(&format!("{cwd}/")));
        prop_assert_eq!(resolved, format!("{cwd}/{}", parts.join("/")));
    }

    // parent + "/" + file_name normalizes back to the canonical path
    #[test]
    fn split_round_trip(path in canonical_absolute_strategy()) {
        let split = split(&path).unwrap();
        prop_assert_eq!(split.parent(), parent(&path));
        prop_assert_eq!(split.name(), file_name(&path));
        prop_assert_eq!(trim_path(&format!("{}/{}", split.parent(), split.name())).unwrap(), path);
    }

    // Repeated parent extraction terminates at the empty string
    #[test]
    fn parent_chain_terminates(path in canonical_absolute_strategy()) {
        let mut current = path.as_str();
        let mut steps = 0;
        while !current.is_empty() {
            let next = parent(current);
            prop_assert!(next.len() < current.len());
            current = next;
            steps += 1;
        }
        prop_assert_eq!(steps, segments(&path).len() + 1);
    }

    // Dropping the first segment loses exactly one segment
    #[test]
    fn subpath_drops_one_segment(path in canonical_absolute_strategy()) {
        let all = segments(&path);
        prop_assert_eq!(segments(subpath(&path)), all[1..].to_vec());
    }

    // make_absolute leaves absolute paths alone
    #[test]
    fn make_absolute_keeps_absolute(cwd in canonical_absolute_strategy(), path in canonical_absolute_strategy()) {
        prop_assert_eq!(make_absolute(&path, &cwd), path);
    }
}
