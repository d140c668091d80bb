use std::collections::BTreeMap;

/// A selectable reviewer, normalized from either pool file shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reviewer {
    /// GitHub login
    pub handle: String,
    /// Slack member id, rendered as `<@id>` in notifications
    pub chat_id: Option<String>,
}

impl Reviewer {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            chat_id: None,
        }
    }

    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }
}

/// Pool key (label or team name) to ordered candidates. Never mutated after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewerPool {
    entries: BTreeMap<String, Vec<Reviewer>>,
}

impl ReviewerPool {
    pub fn new(entries: BTreeMap<String, Vec<Reviewer>>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&[Reviewer]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 在所有分组中查找某个 GitHub 用户的 Slack ID
    pub fn chat_id_of(&self, handle: &str) -> Option<&str> {
        self.entries
            .values()
            .flatten()
            .filter(|r| r.handle == handle)
            .find_map(|r| r.chat_id.as_deref())
    }
}

impl FromIterator<(String, Vec<Reviewer>)> for ReviewerPool {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Reviewer>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
