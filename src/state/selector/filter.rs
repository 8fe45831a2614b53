//! Category filtering for selector items

/// An item a [`Selector`](super::Selector) can hold: a stable id plus category tags
#[allow(dead_code)]
pub trait SelectorItem {
    fn id(&self) -> &str;
    fn tags(&self) -> &[&'static str];
}

/// A filter category. `All` matches every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(&'static str),
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Named(label) => label,
        }
    }
}

impl From<&'static str> for Category {
    /// "all" in any case maps to [`Category::All`]
    fn from(label: &'static str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(label)
        }
    }
}

/// How a tag is compared against a category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Tag must equal the label
    #[default]
    Exact,
    /// Tag must contain the label, ignoring case
    Contains,
}

impl MatchMode {
    pub fn tag_matches(&self, tag: &str, label: &str) -> bool {
        match self {
            Self::Exact => tag == label,
            Self::Contains => tag.to_lowercase().contains(&label.to_lowercase()),
        }
    }
}

/// Check whether an item belongs to a category under the given match mode
pub fn matches<T: SelectorItem + ?Sized>(item: &T, category: Category, mode: MatchMode) -> bool {
    match category {
        Category::All => true,
        Category::Named(label) => item.tags().iter().any(|tag| mode.tag_matches(tag, label)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged {
        id: &'static str,
        tags: &'static [&'static str],
    }

    impl SelectorItem for Tagged {
        fn id(&self) -> &str {
            self.id
        }
        fn tags(&self) -> &[&'static str] {
            self.tags
        }
    }

    mod category {
        use super::*;

        #[test]
        fn test_default_is_all() {
            assert_eq!(Category::default(), Category::All);
        }

        #[test]
        fn test_from_all_label_any_case() {
            assert_eq!(Category::from("all"), Category::All);
            assert_eq!(Category::from("ALL"), Category::All);
            assert_eq!(Category::from("All"), Category::All);
        }

        #[test]
        fn test_from_named_label() {
            assert_eq!(Category::from("skin"), Category::Named("skin"));
            assert_eq!(Category::from("skin").label(), "skin");
        }

        #[test]
        fn test_all_label() {
            assert_eq!(Category::All.label(), "all");
        }
    }

    mod matching {
        use super::*;

        #[test]
        fn test_all_matches_untagged_item() {
            let item = Tagged { id: "a", tags: &[] };
            assert!(matches(&item, Category::All, MatchMode::Exact));
            assert!(matches(&item, Category::All, MatchMode::Contains));
        }

        #[test]
        fn test_untagged_item_never_matches_named() {
            let item = Tagged { id: "a", tags: &[] };
            assert!(!matches(&item, Category::Named("skin"), MatchMode::Exact));
            assert!(!matches(&item, Category::Named("skin"), MatchMode::Contains));
        }

        #[test]
        fn test_contains_is_case_insensitive_substring() {
            let item = Tagged {
                id: "a",
                tags: &["Energy Imbalance"],
            };
            assert!(matches(&item, Category::Named("energy"), MatchMode::Contains));
            assert!(matches(&item, Category::Named("IMBAL"), MatchMode::Contains));
            assert!(!matches(&item, Category::Named("stress"), MatchMode::Contains));
        }

        #[test]
        fn test_exact_requires_equal_tag() {
            let item = Tagged {
                id: "a",
                tags: &["articles"],
            };
            assert!(matches(&item, Category::Named("articles"), MatchMode::Exact));
            assert!(!matches(&item, Category::Named("article"), MatchMode::Exact));
            assert!(!matches(&item, Category::Named("Articles"), MatchMode::Exact));
        }

        #[test]
        fn test_any_tag_is_enough() {
            let item = Tagged {
                id: "a",
                tags: &["skin", "eczema"],
            };
            assert!(matches(&item, Category::Named("eczema"), MatchMode::Exact));
        }

        #[test]
        fn test_contains_cross_matches_shared_substring() {
            // Lenient mode: "digest" is inside "digestive"
            let item = Tagged {
                id: "a",
                tags: &["digestive"],
            };
            assert!(matches(&item, Category::Named("digest"), MatchMode::Contains));
            assert!(!matches(&item, Category::Named("digest"), MatchMode::Exact));
        }

        #[test]
        fn test_item_id_is_exposed() {
            let item = Tagged { id: "x-1", tags: &[] };
            assert_eq!(item.id(), "x-1");
        }
    }
}
