//! DOM Events
//!
//! User-interaction events delivered to page handlers.

use crate::NodeId;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    MouseOver,
    MouseOut,
    Input,
    Submit,
}

impl EventType {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::MouseOver => "mouseover",
            EventType::MouseOut => "mouseout",
            EventType::Input => "input",
            EventType::Submit => "submit",
        }
    }

    /// Check if this event type can be cancelled
    pub fn cancelable(&self) -> bool {
        !matches!(self, EventType::Input)
    }
}

/// DOM event
#[derive(Debug, Clone)]
pub struct DomEvent {
    pub event_type: EventType,
    pub target: NodeId,
    pub cancelable: bool,
    default_prevented: bool,
}

impl DomEvent {
    /// Create an event of `event_type` aimed at `target`
    pub fn new(event_type: EventType, target: NodeId) -> Self {
        Self {
            event_type,
            target,
            cancelable: event_type.cancelable(),
            default_prevented: false,
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_prevent_default() {
        let mut event = DomEvent::new(EventType::Submit, NodeId(3));
        assert!(event.cancelable);

        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_non_cancelable_ignores_prevent_default() {
        let mut event = DomEvent::new(EventType::Input, NodeId(4));
        event.prevent_default();
        assert!(!event.is_default_prevented());
    }

    #[test]
    fn test_event_names() {
        assert_eq!(EventType::MouseOver.name(), "mouseover");
        assert_eq!(EventType::Submit.name(), "submit");
    }
}
