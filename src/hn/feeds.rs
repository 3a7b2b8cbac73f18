//! The fixed set of paginated upstream listings and their page counts.

use std::fmt;
use std::str::FromStr;

/// One of the five upstream feed listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    News,
    Newest,
    Ask,
    Show,
    Jobs,
}

impl FeedKind {
    pub const ALL: [FeedKind; 5] = [
        FeedKind::News,
        FeedKind::Newest,
        FeedKind::Ask,
        FeedKind::Show,
        FeedKind::Jobs,
    ];

    /// Path segment used in `/{kind}/{index}.json`.
    pub fn as_str(self) -> &'static str {
        match self {
            FeedKind::News => "news",
            FeedKind::Newest => "newest",
            FeedKind::Ask => "ask",
            FeedKind::Show => "show",
            FeedKind::Jobs => "jobs",
        }
    }

    /// Number of pages upstream serves for this feed. Pages are 1-indexed.
    pub fn page_count(self) -> i64 {
        match self {
            FeedKind::News => 10,
            FeedKind::Newest => 12,
            FeedKind::Ask => 2,
            FeedKind::Show => 2,
            FeedKind::Jobs => 1,
        }
    }

    pub fn contains_page(self, index: i64) -> bool {
        (1..=self.page_count()).contains(&index)
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a feed name is not one of [`FeedKind::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown feed type: {0}")]
pub struct UnknownFeedKind(pub String);

impl FromStr for FeedKind {
    type Err = UnknownFeedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownFeedKind(s.to_string()))
    }
}

/// Resolves `(kind, index)` to a feed when upstream actually serves that page.
///
/// Unknown feed names are never valid.
pub fn checked_page(kind: &str, index: i64) -> Option<FeedKind> {
    kind.parse::<FeedKind>()
        .ok()
        .filter(|feed| feed.contains_page(index))
}

pub fn is_valid_page(kind: &str, index: i64) -> bool {
    checked_page(kind, index).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_table() {
        let table = [
            ("news", 10),
            ("newest", 12),
            ("ask", 2),
            ("show", 2),
            ("jobs", 1),
        ];
        for (name, max) in table {
            assert!(is_valid_page(name, 1), "{name} page 1");
            assert!(is_valid_page(name, max), "{name} page {max}");
            assert!(!is_valid_page(name, max + 1), "{name} page {}", max + 1);
            assert!(!is_valid_page(name, 0), "{name} page 0");
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(!is_valid_page("bogus", 1));
        assert!(!is_valid_page("", 1));
        assert!(!is_valid_page("NEWS", 1));
        assert_eq!(
            "bogus".parse::<FeedKind>(),
            Err(UnknownFeedKind("bogus".to_string()))
        );
    }

    #[test]
    fn test_checked_page_returns_kind() {
        assert_eq!(checked_page("show", 2), Some(FeedKind::Show));
        assert_eq!(checked_page("show", 3), None);
        assert_eq!(checked_page("jobs", -1), None);
    }

    #[test]
    fn test_round_trip_names() {
        for kind in FeedKind::ALL {
            assert_eq!(kind.as_str().parse::<FeedKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    proptest! {
        #[test]
        fn prop_valid_iff_within_page_count(index in -1000i64..1000) {
            for kind in FeedKind::ALL {
                let expected = index >= 1 && index <= kind.page_count();
                prop_assert_eq!(is_valid_page(kind.as_str(), index), expected);
            }
        }

        #[test]
        fn prop_unknown_names_never_valid(name in "[a-z]{1,8}", index in 1i64..20) {
            prop_assume!(FeedKind::ALL.iter().all(|k| k.as_str() != name));
            prop_assert!(!is_valid_page(&name, index));
        }
    }
}
