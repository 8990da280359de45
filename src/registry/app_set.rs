//! Resolution of the app set to launch.

use std::collections::HashSet;

use crate::registry::RegistryError;

/// Ordered, duplicate-free list of app ids to launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSet {
    ids: Vec<String>,
}

impl AppSet {
    /// Resolve the app set from command-line `args`, falling back to `defaults`.
    ///
    /// Entries may hold several ids separated by commas or whitespace
    /// (`"relayer,merger"`, `"relayer merger"`). Empty entries are dropped and
    /// repeated ids keep their first position.
    pub fn resolve<A, D>(args: &[A], defaults: &[D]) -> Result<Self, RegistryError>
    where
        A: AsRef<str>,
        D: AsRef<str>,
    {
        let from_args = Self::parse(args);
        let set = if from_args.ids.is_empty() {
            Self::parse(defaults)
        } else {
            from_args
        };

        if set.ids.is_empty() {
            return Err(RegistryError::EmptyAppSet);
        }
        Ok(set)
    }

    fn parse<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut seen = HashSet::new();
        let ids = raw
            .iter()
            .flat_map(|arg| arg.as_ref().split(|c: char| c == ',' || c.is_whitespace()))
            .filter(|id| !id.is_empty())
            .filter(|id| seen.insert(id.to_string()))
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|app| app == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }
}

impl std::fmt::Display for AppSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ids.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_args_win_over_defaults() {
        let set = AppSet::resolve(&["relayer", "merger"], &["dashboard"]).unwrap();
        assert_eq!(set.to_vec(), vec!["relayer", "merger"]);
    }

    #[test]
    fn test_defaults_when_no_args() {
        let set = AppSet::resolve(&NONE, &["dashboard", "apiproxy"]).unwrap();
        assert_eq!(set.to_string(), "dashboard,apiproxy");
    }

    #[test]
    fn test_comma_separated_and_duplicates() {
        let set = AppSet::resolve(&["relayer,merger", " relayer ", ","], &NONE).unwrap();
        assert_eq!(set.to_vec(), vec!["relayer", "merger"]);
    }

    #[test]
    fn test_whitespace_separated_entry() {
        let set = AppSet::resolve(&["relayer merger", "merger\tdashboard , apiproxy"], &NONE).unwrap();
        assert_eq!(set.to_vec(), vec!["relayer", "merger", "dashboard", "apiproxy"]);

        let set = AppSet::resolve(&NONE, &["mindreader  relayer"]).unwrap();
        assert_eq!(set.to_vec(), vec!["mindreader", "relayer"]);
    }

    #[test]
    fn test_blank_args_fall_back() {
        let set = AppSet::resolve(&[" "], &["mindreader"]).unwrap();
        assert_eq!(set.to_vec(), vec!["mindreader"]);
    }

    #[test]
    fn test_nothing_resolved() {
        assert_eq!(AppSet::resolve(&NONE, &NONE), Err(RegistryError::EmptyAppSet));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let set = AppSet::resolve(&["dashboard"], &NONE).unwrap();
        assert!(set.contains("dashboard"));
        assert!(!set.contains("Dashboard"));
        assert!(!set.contains("dash"));
    }
}
