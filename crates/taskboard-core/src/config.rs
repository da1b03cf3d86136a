//! Board Configuration

/// Key the task list is stored under when nothing else is configured
pub const DEFAULT_STORAGE_KEY: &str = "taskboard.tasks";

/// Settings shared by the manager and its persistence adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key of the single persisted entry holding the task array
    pub storage_key: String,
}

impl BoardConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_key() {
        assert_eq!(BoardConfig::default().storage_key, "taskboard.tasks");
    }

    #[test]
    fn test_custom_key() {
        let config = BoardConfig::default().with_storage_key("other");
        assert_eq!(config.storage_key, "other");
    }
}
