use std::{fmt::Display, sync::Arc};

/// Canonical form of a free-text place name: lower-cased, trimmed, and every
/// whitespace run replaced by a single `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceKey(Arc<str>);

impl PlaceKey {
    pub fn new(name: &str) -> Self {
        let words: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        Self(words.join("-").into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for PlaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structured table key. Kept as a pair so names holding `-` can not collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub from: PlaceKey,
    pub to: PlaceKey,
}

impl RouteKey {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: PlaceKey::new(from),
            to: PlaceKey::new(to),
        }
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_key_ignores_case_and_spacing() {
        assert_eq!(PlaceKey::new("  hyderabad  "), PlaceKey::new("Hyderabad"));
        assert_eq!(PlaceKey::new("KARIMNAGAR").as_str(), "karimnagar");
    }

    #[test]
    fn place_key_joins_words_with_single_hyphen() {
        assert_eq!(
            PlaceKey::new(" Kotha \t Rajanagaram ").as_str(),
            "kotha-rajanagaram"
        );
    }

    #[test]
    fn route_key_keeps_hyphenated_names_apart() {
        // Both render as "a-b-c" but must not be the same key
        let left = RouteKey::new("a-b", "c");
        let right = RouteKey::new("a", "b-c");
        assert_eq!(left.to_string(), right.to_string());
        assert_ne!(left, right);
    }

    #[test]
    fn route_key_reversed_swaps_places() {
        let key = RouteKey::new("Hyderabad", "Karimnagar");
        assert_eq!(key.reversed(), RouteKey::new("Karimnagar", "Hyderabad"));
        assert_eq!(key.reversed().reversed(), key);
    }
}
