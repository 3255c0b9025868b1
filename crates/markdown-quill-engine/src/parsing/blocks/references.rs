use std::collections::HashMap;

use super::kinds::ReferenceDeclaration;

/// Reference declarations collected during block segmentation.
///
/// Names match ASCII case-insensitively and the first declaration of a name
/// wins; later duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceMap {
    destinations: HashMap<String, String>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration. Returns `false` if the name was already taken.
    pub fn insert(&mut self, decl: ReferenceDeclaration<'_>) -> bool {
        let key = Self::key(decl.name);
        if self.destinations.contains_key(&key) {
            return false;
        }
        self.destinations.insert(key, decl.destination.to_string());
        true
    }

    /// Looks up the destination declared for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.destinations.get(&Self::key(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    fn key(name: &str) -> String {
        name.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl<'a>(name: &'a str, destination: &'a str) -> ReferenceDeclaration<'a> {
        ReferenceDeclaration { name, destination }
    }

    #[test]
    fn lookup_by_name() {
        let mut map = ReferenceMap::new();
        assert!(map.insert(decl("docs", "/docs")));
        assert_eq!(map.get("docs"), Some("/docs"));
        assert_eq!(map.get("other"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn first_declaration_wins() {
        let mut map = ReferenceMap::new();
        assert!(map.insert(decl("docs", "/first")));
        assert!(!map.insert(decl("docs", "/second")));
        assert_eq!(map.get("docs"), Some("/first"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn names_are_case_insensitive() {
        let mut map = ReferenceMap::new();
        map.insert(decl("Docs", "/docs"));
        assert_eq!(map.get("DOCS"), Some("/docs"));
        assert!(!map.insert(decl("dOcS", "/other")));
    }

    #[test]
    fn empty_map() {
        let map = ReferenceMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(""), None);
    }
}
