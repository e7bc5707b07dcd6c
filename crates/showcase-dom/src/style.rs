//! Inline style (`element.style`)

/// Ordered list of inline CSS declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Set a property, replacing any previous value in place
    pub fn set(&mut self, property: &str, value: &str) {
        if let Some(decl) = self.declarations.iter_mut().find(|(name, _)| name == property) {
            decl.1 = value.to_string();
        } else {
            self.declarations.push((property.to_string(), value.to_string()));
        }
    }

    /// Serialize as a `style` attribute value
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
