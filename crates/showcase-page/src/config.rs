//! Page Configuration
//!
//! Texts, colours and class names used by the showcase page. Every key
//! is optional in the JSON form; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::PageError;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";

/// Showcase page configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document URL
    pub url: String,
    /// Text shown after the primary button is clicked
    pub click_message: String,
    /// Hover box appearance when the pointer is outside
    pub hover_default: HoverStyle,
    /// Hover box appearance when the pointer is inside
    pub hover_active: HoverStyle,
    /// Class toggled on `<body>` by the theme button
    pub dark_mode_class: String,
    /// Class marking a collapsible FAQ item
    pub faq_item_class: String,
    /// Class marking the clickable header of a FAQ item
    pub faq_question_class: String,
    /// Class toggled on an expanded FAQ item
    pub faq_active_class: String,
    /// FAQ entries in display order
    pub faq: Vec<FaqEntry>,
    /// Text shown after a valid form submission
    pub success_message: String,
}

/// Hover box text and colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverStyle {
    pub background_color: String,
    pub color: String,
    pub text: String,
}

/// One FAQ question and its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: "about:showcase".to_string(),
            click_message: "Button was clicked! Great job!".to_string(),
            hover_default: HoverStyle {
                background_color: "#e9ecef".to_string(),
                color: "#333".to_string(),
                text: "Hover over me!".to_string(),
            },
            hover_active: HoverStyle {
                background_color: "#007bff".to_string(),
                color: "#ffffff".to_string(),
                text: "You hovered over me!".to_string(),
            },
            dark_mode_class: "dark-mode".to_string(),
            faq_item_class: "faq-item".to_string(),
            faq_question_class: "faq-question".to_string(),
            faq_active_class: "active".to_string(),
            faq: vec![
                FaqEntry::new(
                    "What is an event listener?",
                    "A handler that runs when a specific event fires on an element.",
                ),
                FaqEntry::new(
                    "How does the theme toggle work?",
                    "It flips a class on the page body, and the stylesheet does the rest.",
                ),
                FaqEntry::new(
                    "Is the form sent anywhere?",
                    "No. It is validated in the page and never leaves it.",
                ),
            ],
            success_message: "Form submitted successfully!".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON config
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the file named by `SHOWCASE_CONFIG`, or the defaults when unset
    pub fn from_env() -> Result<Self, PageError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!("Loading page config from {}", Path::new(&path).display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{"click_message": "Clicked!"}"#).unwrap();
        assert_eq!(config.click_message, "Clicked!");
        assert_eq!(config.dark_mode_class, "dark-mode");
        assert_eq!(config.faq.len(), 3);
    }

    #[test]
    fn test_empty_faq_allowed() {
        let config = PageConfig::from_json(r#"{"faq": []}"#).unwrap();
        assert!(config.faq.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let err = PageConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, PageError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PageConfig::from_file("/nonexistent/showcase.json").unwrap_err();
        assert!(matches!(err, PageError::Io { .. }));
    }
}
