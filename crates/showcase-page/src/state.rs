//! Page state snapshot

use serde::Serialize;
use showcase_forms::{Field, Submission};

use crate::{Page, PageError};

/// Visible state of the showcase page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub click_message: String,
    pub hover_text: String,
    /// Inline style of the hover box as CSS text
    pub hover_style: String,
    pub dark_mode: bool,
    /// Expanded flag per FAQ item, in document order
    pub faq_expanded: Vec<bool>,
    pub inputs: Submission,
    pub errors: ErrorTexts,
    pub success_message: String,
}

/// Rendered inline error text per field; empty when the field passed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorTexts {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl ErrorTexts {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }
}

impl Page {
    /// Snapshot the visible page state
    pub fn state(&self) -> Result<PageState, PageError> {
        let doc = &self.document;
        let els = &self.elements;
        let text = |field| doc.text_content(els.error(field));

        Ok(PageState {
            click_message: doc.text_content(els.click_message),
            hover_text: doc.text_content(els.hover_box),
            hover_style: doc.tree().element(els.hover_box)?.style.css_text(),
            dark_mode: doc.has_class(doc.body(), &self.config.dark_mode_class),
            faq_expanded: els
                .faq_items
                .iter()
                .map(|&item| doc.has_class(item, &self.config.faq_active_class))
                .collect(),
            inputs: self.submission()?,
            errors: ErrorTexts {
                username: text(Field::Username),
                email: text(Field::Email),
                password: text(Field::Password),
            },
            success_message: doc.text_content(els.success_message),
        })
    }
}
