//! DOMTokenList (classList)
//!
//! Space-separated token set backing an element's `class` attribute.

/// DOMTokenList for managing space-separated tokens (e.g., classList)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMTokenList {
    tokens: Vec<String>,
}

impl DOMTokenList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string, dropping duplicates
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(&[token]);
        }
        list
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add token(s); empty tokens and duplicates are ignored
    pub fn add(&mut self, tokens: &[&str]) {
        for token in tokens {
            if !token.is_empty() && !self.contains(token) {
                self.tokens.push((*token).to_string());
            }
        }
    }

    /// Remove token(s)
    pub fn remove(&mut self, tokens: &[&str]) {
        self.tokens.retain(|t| !tokens.contains(&t.as_str()));
    }

    /// Toggle token, returns whether it is present afterwards
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(&[token]);
            false
        } else {
            self.add(&[token]);
            self.contains(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let list = DOMTokenList::from_string("faq-item  active faq-item");
        assert!(list.contains("faq-item"));
        assert!(list.contains("active"));
        assert_eq!(list, DOMTokenList::from_string("faq-item active"));
    }

    #[test]
    fn test_toggle() {
        let mut list = DOMTokenList::new();

        assert!(list.toggle("dark-mode"));
        assert!(list.contains("dark-mode"));

        assert!(!list.toggle("dark-mode"));
        assert!(!list.contains("dark-mode"));
    }

    #[test]
    fn test_toggle_empty_token() {
        let mut list = DOMTokenList::new();
        assert!(!list.toggle(""));
        assert_eq!(list, DOMTokenList::new());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = DOMTokenList::from_string("a b c");
        list.remove(&["b"]);
        assert_eq!(list, DOMTokenList::from_string("a c"));
    }
}
