/// Case- and whitespace-insensitive predicate over resolved key text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelector {
    /// Key text contains the target.
    Contains(String),
    /// Key text equals the target.
    Equals(String),
    All,
}

impl KeySelector {
    pub fn contains(target: &str) -> Self {
        Self::Contains(normalize_key(target))
    }

    pub fn equals(target: &str) -> Self {
        Self::Equals(normalize_key(target))
    }

    /// Targets are normalized by [`KeySelector::contains`] and [`KeySelector::equals`];
    /// only `key` is normalized here.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Contains(target) => normalize_key(key).contains(target.as_str()),
            Self::Equals(target) => normalize_key(key) == *target,
            Self::All => true,
        }
    }
}

/// Lowercases and drops whitespace. Key text is assembled from word regions without
/// separators, so labels are compared with their spaces removed.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
