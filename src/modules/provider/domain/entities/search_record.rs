use serde::{Deserialize, Serialize};

/// One title suggestion returned by a search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub title: Option<String>,
    pub original_release_year: Option<i32>,
    /// Concrete CDN URL, or empty when the upstream had no poster.
    pub poster_url: String,
    pub full_path: Option<String>,
}

impl SearchRecord {
    /// A record is navigable when it carries a non-empty detail path.
    pub fn is_navigable(&self) -> bool {
        self.full_path
            .as_deref()
            .map(|path| !path.trim().is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigable() {
        let mut record = SearchRecord {
            full_path: Some("/us/movie/dune".to_string()),
            ..Default::default()
        };
        assert!(record.is_navigable());

        record.full_path = Some("  ".to_string());
        assert!(!record.is_navigable());

        record.full_path = None;
        assert!(!record.is_navigable());
    }
}
