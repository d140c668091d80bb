//! Loads the reviewer pool JSON file referenced by the `request_reviewers` input.
//!
//! Two entry shapes are accepted and normalized into [`Reviewer`]:
//!
//! ```json
//! {
//!   "backend": [{ "name": "alice", "id": "U01" }, { "name": "bob" }],
//!   "frontend": ["carol", "dave"]
//! }
//! ```

use crate::errors::PoolError;
use crate::types::{Reviewer, ReviewerPool};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::{fs, path::Path};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawReviewer {
    Handle(String),
    Record {
        name: String,
        #[serde(default)]
        id: Option<String>,
    },
}

impl From<RawReviewer> for Reviewer {
    fn from(raw: RawReviewer) -> Self {
        match raw {
            RawReviewer::Handle(handle) => Reviewer::new(handle),
            RawReviewer::Record { name, id } => Reviewer {
                handle: name,
                chat_id: id.filter(|id| !id.is_empty()),
            },
        }
    }
}

pub fn load_pool(path: &Path) -> Result<ReviewerPool, PoolError> {
    let source = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|e| PoolError::FileRead(source.clone(), e))?;
    let pool = parse_pool(&raw, &source)?;
    tracing::debug!(path = %source, groups = pool.len(), "Reviewer pool loaded");
    Ok(pool)
}

/// `source` only names the input in error messages.
pub fn parse_pool(raw: &str, source: &str) -> Result<ReviewerPool, PoolError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| PoolError::InvalidJson(source.to_string(), e))?;
    let Value::Object(map) = value else {
        return Err(PoolError::NotAnObject(source.to_string()));
    };

    let mut entries = BTreeMap::new();
    for (key, value) in map {
        let raw_reviewers: Vec<RawReviewer> =
            serde_json::from_value(value).map_err(|e| PoolError::InvalidEntry {
                key: key.clone(),
                reason: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        let mut reviewers = Vec::with_capacity(raw_reviewers.len());
        for reviewer in raw_reviewers.into_iter().map(Reviewer::from) {
            if reviewer.handle.trim().is_empty() {
                return Err(PoolError::InvalidEntry {
                    key,
                    reason: "reviewer name must not be empty".to_string(),
                });
            }
            if !seen.insert(reviewer.handle.clone()) {
                tracing::warn!(group = %key, handle = %reviewer.handle, "Duplicate reviewer ignored");
                continue;
            }
            reviewers.push(reviewer);
        }
        entries.insert(key, reviewers);
    }

    Ok(ReviewerPool::new(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_record_entries() {
        let raw = r#"{
            "backend": [{ "name": "alice", "id": "U01" }, { "name": "bob" }]
        }"#;
        let pool = parse_pool(raw, "reviewers.json").unwrap();
        assert_eq!(
            pool.get("backend").unwrap(),
            &[Reviewer::new("alice").with_chat_id("U01"), Reviewer::new("bob")]
        );
    }

    #[test]
    fn test_parse_plain_handles_and_mixed() {
        let raw = r#"{ "frontend": ["carol", { "name": "dave", "id": "U04" }] }"#;
        let pool = parse_pool(raw, "reviewers.json").unwrap();
        assert_eq!(
            pool.get("frontend").unwrap(),
            &[Reviewer::new("carol"), Reviewer::new("dave").with_chat_id("U04")]
        );
    }

    #[test]
    fn test_entry_order_is_preserved_and_duplicates_dropped() {
        let raw = r#"{ "qa": ["zed", "amy", "zed", "kim"] }"#;
        let pool = parse_pool(raw, "reviewers.json").unwrap();
        let handles: Vec<&str> = pool
            .get("qa")
            .unwrap()
            .iter()
            .map(|r| r.handle.as_str())
            .collect();
        assert_eq!(handles, vec!["zed", "amy", "kim"]);
    }

    #[test]
    fn test_empty_chat_id_is_treated_as_missing() {
        let raw = r#"{ "qa": [{ "name": "amy", "id": "" }] }"#;
        let pool = parse_pool(raw, "reviewers.json").unwrap();
        assert_eq!(pool.get("qa").unwrap()[0].chat_id, None);
    }

    #[test]
    fn test_rejects_invalid_shapes() {
        assert!(matches!(
            parse_pool("{ not json", "p"),
            Err(PoolError::InvalidJson(_, _))
        ));
        assert!(matches!(
            parse_pool(r#"["alice"]"#, "p"),
            Err(PoolError::NotAnObject(_))
        ));
        assert!(matches!(
            parse_pool(r#"{ "backend": "alice" }"#, "p"),
            Err(PoolError::InvalidEntry { ref key, .. }) if key == "backend"
        ));
        assert!(matches!(
            parse_pool(r#"{ "backend": [{ "id": "U01" }] }"#, "p"),
            Err(PoolError::InvalidEntry { .. })
        ));
        assert!(matches!(
            parse_pool(r#"{ "backend": [""] }"#, "p"),
            Err(PoolError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_load_pool_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "backend": ["alice"] }"#).unwrap();
        let pool = load_pool(file.path()).unwrap();
        assert_eq!(pool.get("backend").unwrap(), &[Reviewer::new("alice")]);

        let missing = load_pool(Path::new("/nonexistent/reviewers.json"));
        assert!(matches!(missing, Err(PoolError::FileRead(_, _))));
    }
}
