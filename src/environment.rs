/// Read-only snapshot of the process environment, taken once at session
/// start and preserving the order the underlying storage yields. Lookups
/// are linear scans; the entry count is small enough that a map would buy
/// nothing, and the `env` built-in needs the original order anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    entries: Vec<(String, String)>,
}

impl Environment {
    /// Captures the environment inherited by this process.
    pub fn from_process() -> Self {
        Environment {
            entries: std::env::vars().collect(),
        }
    }

    /// Builds a view from explicit entries, so tests can inject `PATH` and
    /// friends without touching the real process environment.
    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Environment { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Entries in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_process_captures_inherited_vars() {
        let env = Environment::from_process();
        assert!(!env.is_empty());
        assert!(env.get("PATH").is_some());
    }

    #[test]
    fn test_snapshot_matches_process_order_and_count() {
        let env = Environment::from_process();
        let expected: Vec<(String, String)> = std::env::vars().collect();
        let actual: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_from_entries_preserves_order() {
        let env = Environment::from_entries(vec![
            ("B".to_string(), "2".to_string()),
            ("A".to_string(), "1".to_string()),
        ]);
        let keys: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn test_get_missing_key() {
        let env = Environment::from_entries(vec![("A".to_string(), "1".to_string())]);
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("NOPE"), None);
    }
}
