//! Free-text record filtering shared by the record-browser pages.
//!
//! Every browser page (orders, customers, jobs, ...) narrows its fetched
//! records with a single case-insensitive text box. The matching logic lives
//! here so pages only declare which fields participate.

/// A record that can be matched against a free-text filter.
pub trait TextFilter {
    /// Fields considered by the text filter.
    fn filter_fields(&self) -> Vec<&str>;

    /// Whether the record matches the query. An empty or whitespace-only
    /// query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.filter_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filters `items` down to those matching `query`, preserving order.
pub fn filter_by_text<T: TextFilter + Clone>(items: &[T], query: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Record {
        name: String,
        city: String,
    }

    impl TextFilter for Record {
        fn filter_fields(&self) -> Vec<&str> {
            vec![&self.name, &self.city]
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record {
                name: "Acme Fittings".into(),
                city: "Portland".into(),
            },
            Record {
                name: "Bolt & Sons".into(),
                city: "Spokane".into(),
            },
            Record {
                name: "Cascade Metal".into(),
                city: "portland".into(),
            },
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        let all = records();
        assert_eq!(filter_by_text(&all, ""), all);
        assert_eq!(filter_by_text(&all, "   "), all);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = records();
        let hits = filter_by_text(&all, "PORTLAND");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Acme Fittings");
        assert_eq!(hits[1].name, "Cascade Metal");
    }

    #[test]
    fn test_any_field_matches() {
        let all = records();
        let hits = filter_by_text(&all, "bolt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].city, "Spokane");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let all = records();
        assert!(filter_by_text(&all, "zzz").is_empty());
    }

    #[test]
    fn test_query_is_trimmed() {
        let all = records();
        assert_eq!(filter_by_text(&all, "  bolt  ").len(), 1);
    }
}
