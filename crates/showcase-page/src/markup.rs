//! Page Markup
//!
//! Builds the showcase document the handlers are attached to.

use showcase_dom::{DomResult, Document, NodeId};
use showcase_forms::Field;

use crate::PageConfig;

/// Element ids the page handlers look up
pub mod ids {
    use showcase_forms::Field;

    pub const CLICK_BUTTON: &str = "clickMeBtn";
    pub const CLICK_MESSAGE: &str = "clickMessage";
    pub const HOVER_BOX: &str = "hoverBox";
    pub const THEME_TOGGLE: &str = "themeToggleBtn";
    pub const FORM: &str = "contactForm";
    pub const SUCCESS_MESSAGE: &str = "formSuccessMessage";

    /// Id of the input for `field`
    pub fn input(field: Field) -> &'static str {
        match field {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Id of the inline error node for `field`
    pub fn error(field: Field) -> &'static str {
        match field {
            Field::Username => "usernameError",
            Field::Email => "emailError",
            Field::Password => "passwordError",
        }
    }
}

fn element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> DomResult<NodeId> {
    let id = doc.append_element(parent, tag)?;
    let elem = doc.tree_mut().element_mut(id)?;
    for (name, value) in attrs {
        elem.set_attr(name, value);
    }
    doc.set_text_content(id, text)?;
    Ok(id)
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Username => "text",
        Field::Email => "email",
        Field::Password => "password",
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::Username => "Username:",
        Field::Email => "Email:",
        Field::Password => "Password:",
    }
}

/// Build the showcase document for `config`
pub fn build_document(config: &PageConfig) -> DomResult<Document> {
    let mut doc = Document::new(&config.url)?;
    let body = doc.body();

    // Event handling
    let events = element(&mut doc, body, "section", &[("class", "card")], "")?;
    element(&mut doc, events, "h2", &[], "Event Handling")?;
    element(&mut doc, events, "button", &[("id", ids::CLICK_BUTTON)], "Click Me!")?;
    element(&mut doc, events, "p", &[("id", ids::CLICK_MESSAGE)], "")?;
    let hover = element(
        &mut doc,
        events,
        "div",
        &[("id", ids::HOVER_BOX), ("class", "hover-box")],
        &config.hover_default.text,
    )?;
    let style = &mut doc.tree_mut().element_mut(hover)?.style;
    style.set("background-color", &config.hover_default.background_color);
    style.set("color", &config.hover_default.color);

    // Theme
    let theme = element(&mut doc, body, "section", &[("class", "card")], "")?;
    element(&mut doc, theme, "h2", &[], "Theme")?;
    element(&mut doc, theme, "button", &[("id", ids::THEME_TOGGLE)], "Toggle Dark Mode")?;

    // FAQ
    let faq = element(&mut doc, body, "section", &[("class", "card faq")], "")?;
    element(&mut doc, faq, "h2", &[], "FAQ")?;
    for entry in &config.faq {
        let item = element(&mut doc, faq, "div", &[("class", config.faq_item_class.as_str())], "")?;
        element(
            &mut doc,
            item,
            "button",
            &[("class", config.faq_question_class.as_str())],
            &entry.question,
        )?;
        element(&mut doc, item, "div", &[("class", "faq-answer")], &entry.answer)?;
    }

    // Contact form
    let section = element(&mut doc, body, "section", &[("class", "card")], "")?;
    element(&mut doc, section, "h2", &[], "Contact")?;
    let form = element(&mut doc, section, "form", &[("id", ids::FORM), ("novalidate", "")], "")?;
    for field in Field::ALL {
        let group = element(&mut doc, form, "div", &[("class", "form-group")], "")?;
        element(&mut doc, group, "label", &[("for", ids::input(field))], label(field))?;
        element(
            &mut doc,
            group,
            "input",
            &[("id", ids::input(field)), ("name", field.name()), ("type", input_type(field))],
            "",
        )?;
        element(
            &mut doc,
            group,
            "span",
            &[("id", ids::error(field)), ("class", "error-message")],
            "",
        )?;
    }
    element(&mut doc, form, "button", &[("type", "submit")], "Submit")?;
    element(&mut doc, section, "p", &[("id", ids::SUCCESS_MESSAGE)], "")?;

    tracing::debug!("Built showcase document with {} nodes", doc.tree().len());

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ids_present() {
        let doc = build_document(&PageConfig::default()).unwrap();

        for id in [
            ids::CLICK_BUTTON,
            ids::CLICK_MESSAGE,
            ids::HOVER_BOX,
            ids::THEME_TOGGLE,
            ids::FORM,
            ids::SUCCESS_MESSAGE,
        ] {
            assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
        }
        for field in Field::ALL {
            assert!(doc.get_element_by_id(ids::input(field)).is_some());
            assert!(doc.get_element_by_id(ids::error(field)).is_some());
        }
    }

    #[test]
    fn test_faq_items_follow_config() {
        let config = PageConfig::default();
        let doc = build_document(&config).unwrap();

        let items = doc.get_elements_by_class_name(doc.body(), &config.faq_item_class);
        assert_eq!(items.len(), config.faq.len());

        let question = doc.query_class(items[0], &config.faq_question_class).unwrap();
        assert_eq!(doc.text_content(question), config.faq[0].question);
    }

    #[test]
    fn test_hover_box_starts_with_default_style() {
        let config = PageConfig::default();
        let doc = build_document(&config).unwrap();
        let hover = doc.get_element_by_id(ids::HOVER_BOX).unwrap();

        let elem = doc.tree().element(hover).unwrap();
        assert_eq!(elem.style.get("background-color"), Some("#e9ecef"));
        assert_eq!(doc.text_content(hover), "Hover over me!");
    }
}
