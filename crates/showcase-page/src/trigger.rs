//! Triggers
//!
//! Discrete user actions the page reacts to, and the serialisable
//! script steps that name them.

use serde::{Deserialize, Serialize};
use showcase_dom::{EventType, NodeId};
use showcase_forms::Field;

/// A user action aimed at the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Primary button clicked
    PrimaryButton,
    /// Pointer entered the hover box
    PointerEnter,
    /// Pointer left the hover box
    PointerLeave,
    /// Theme button clicked
    ThemeToggle,
    /// A collapsible header clicked
    CollapsibleHeader(NodeId),
    /// Text typed into a form field, replacing its value
    Input { field: Field, value: String },
    /// Contact form submitted
    Submit,
}

impl Trigger {
    /// DOM event type delivered for this trigger
    pub fn event_type(&self) -> EventType {
        match self {
            Trigger::PrimaryButton | Trigger::ThemeToggle | Trigger::CollapsibleHeader(_) => {
                EventType::Click
            }
            Trigger::PointerEnter => EventType::MouseOver,
            Trigger::PointerLeave => EventType::MouseOut,
            Trigger::Input { .. } => EventType::Input,
            Trigger::Submit => EventType::Submit,
        }
    }
}

/// One step of a scripted session.
///
/// FAQ items are addressed by position since node ids are not stable
/// across page builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptStep {
    Click,
    PointerEnter,
    PointerLeave,
    ToggleTheme,
    ToggleFaq { index: usize },
    Input { field: Field, value: String },
    Submit,
}

/// Session replayed by the `showcase` binary when no script is given
pub fn demo_script() -> Vec<ScriptStep> {
    let input = |field, value: &str| ScriptStep::Input {
        field,
        value: value.to_string(),
    };

    vec![
        ScriptStep::Click,
        ScriptStep::PointerEnter,
        ScriptStep::PointerLeave,
        ScriptStep::ToggleTheme,
        ScriptStep::ToggleFaq { index: 0 },
        ScriptStep::Submit,
        input(Field::Username, "alice"),
        input(Field::Email, "alice@example.com"),
        input(Field::Password, "correct horse"),
        ScriptStep::Submit,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_json() {
        let steps: Vec<ScriptStep> = serde_json::from_str(
            r#"[
                {"type": "click"},
                {"type": "toggle_faq", "index": 2},
                {"type": "input", "field": "email", "value": "a@b.com"},
                {"type": "submit"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::Click,
                ScriptStep::ToggleFaq { index: 2 },
                ScriptStep::Input {
                    field: Field::Email,
                    value: "a@b.com".to_string()
                },
                ScriptStep::Submit,
            ]
        );
    }

    #[test]
    fn test_event_types() {
        assert_eq!(Trigger::PointerEnter.event_type(), EventType::MouseOver);
        assert_eq!(Trigger::Submit.event_type(), EventType::Submit);
        assert_eq!(Trigger::ThemeToggle.event_type(), EventType::Click);
    }
}
