//! Showcase Page
//!
//! Binds handlers to the document and applies each trigger as a direct
//! DOM mutation.

use showcase_dom::{DomEvent, Document, NodeId};
use showcase_forms::{Field, ValidationResult};

use crate::markup::{build_document, ids};
use crate::{PageConfig, PageError, ScriptStep, Trigger};

/// Elements the page handlers act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElements {
    pub click_button: NodeId,
    pub click_message: NodeId,
    pub hover_box: NodeId,
    pub theme_toggle: NodeId,
    pub form: NodeId,
    pub success_message: NodeId,
    /// Inputs in `Field::ALL` order
    pub inputs: [NodeId; 3],
    /// Inline error nodes in `Field::ALL` order
    pub errors: [NodeId; 3],
    /// FAQ items in document order
    pub faq_items: Vec<NodeId>,
}

fn slot(field: Field) -> usize {
    match field {
        Field::Username => 0,
        Field::Email => 1,
        Field::Password => 2,
    }
}

impl PageElements {
    /// Look up every handled element in `doc`
    pub fn resolve(doc: &Document, config: &PageConfig) -> Result<Self, PageError> {
        let by_id = |id: &'static str| {
            doc.get_element_by_id(id)
                .ok_or(PageError::MissingElement(id))
        };
        let per_field = |id_of: fn(Field) -> &'static str| -> Result<[NodeId; 3], PageError> {
            Ok([
                by_id(id_of(Field::Username))?,
                by_id(id_of(Field::Email))?,
                by_id(id_of(Field::Password))?,
            ])
        };

        Ok(Self {
            click_button: by_id(ids::CLICK_BUTTON)?,
            click_message: by_id(ids::CLICK_MESSAGE)?,
            hover_box: by_id(ids::HOVER_BOX)?,
            theme_toggle: by_id(ids::THEME_TOGGLE)?,
            form: by_id(ids::FORM)?,
            success_message: by_id(ids::SUCCESS_MESSAGE)?,
            inputs: per_field(ids::input)?,
            errors: per_field(ids::error)?,
            faq_items: doc.get_elements_by_class_name(doc.body(), &config.faq_item_class),
        })
    }

    /// Input element for `field`
    pub fn input(&self, field: Field) -> NodeId {
        self.inputs[slot(field)]
    }

    /// Inline error element for `field`
    pub fn error(&self, field: Field) -> NodeId {
        self.errors[slot(field)]
    }
}

/// The interactive showcase page
pub struct Page {
    pub(crate) document: Document,
    pub(crate) config: PageConfig,
    pub(crate) elements: PageElements,
}

impl Page {
    /// Build the showcase document for `config` and attach to it
    pub fn new(config: PageConfig) -> Result<Self, PageError> {
        let document = build_document(&config)?;
        Self::attach(document, config)
    }

    /// Attach handlers to an existing document
    pub fn attach(document: Document, config: PageConfig) -> Result<Self, PageError> {
        let elements = PageElements::resolve(&document, &config)?;
        tracing::debug!(
            "Attached to {} ({} FAQ items)",
            document.url(),
            elements.faq_items.len()
        );
        Ok(Self {
            document,
            config,
            elements,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    /// Header of the FAQ item at `index`
    pub fn faq_question(&self, index: usize) -> Result<NodeId, PageError> {
        let item = *self
            .elements
            .faq_items
            .get(index)
            .ok_or(PageError::NoSuchFaqItem(index))?;
        self.document
            .query_class(item, &self.config.faq_question_class)
            .ok_or(PageError::NoSuchFaqItem(index))
    }

    /// Trigger a script step stands for
    pub fn trigger_for(&self, step: &ScriptStep) -> Result<Trigger, PageError> {
        Ok(match step {
            ScriptStep::Click => Trigger::PrimaryButton,
            ScriptStep::PointerEnter => Trigger::PointerEnter,
            ScriptStep::PointerLeave => Trigger::PointerLeave,
            ScriptStep::ToggleTheme => Trigger::ThemeToggle,
            ScriptStep::ToggleFaq { index } => {
                Trigger::CollapsibleHeader(self.faq_question(*index)?)
            }
            ScriptStep::Input { field, value } => Trigger::Input {
                field: *field,
                value: value.clone(),
            },
            ScriptStep::Submit => Trigger::Submit,
        })
    }

    /// Resolve and dispatch a script step
    pub fn run_step(&mut self, step: &ScriptStep) -> Result<Option<ValidationResult>, PageError> {
        let trigger = self.trigger_for(step)?;
        self.dispatch(trigger)
    }

    fn target_of(&self, trigger: &Trigger) -> NodeId {
        match trigger {
            Trigger::PrimaryButton => self.elements.click_button,
            Trigger::PointerEnter | Trigger::PointerLeave => self.elements.hover_box,
            Trigger::ThemeToggle => self.elements.theme_toggle,
            Trigger::CollapsibleHeader(node) => *node,
            Trigger::Input { field, .. } => self.elements.input(*field),
            Trigger::Submit => self.elements.form,
        }
    }

    /// Run the handler for `trigger` to completion.
    ///
    /// Returns the validation result for `Trigger::Submit`, `None` otherwise.
    pub fn dispatch(&mut self, trigger: Trigger) -> Result<Option<ValidationResult>, PageError> {
        let mut event = DomEvent::new(trigger.event_type(), self.target_of(&trigger));
        tracing::debug!("Dispatching {} to {:?}", event.event_type.name(), event.target);

        match trigger {
            Trigger::PrimaryButton => self.on_primary_click()?,
            Trigger::PointerEnter => self.on_hover(true)?,
            Trigger::PointerLeave => self.on_hover(false)?,
            Trigger::ThemeToggle => self.on_theme_toggle()?,
            Trigger::CollapsibleHeader(node) => self.on_collapsible_click(node)?,
            Trigger::Input { field, value } => self.on_input(field, value)?,
            Trigger::Submit => return self.on_submit(&mut event).map(Some),
        }

        Ok(None)
    }

    fn on_primary_click(&mut self) -> Result<(), PageError> {
        self.document
            .set_text_content(self.elements.click_message, &self.config.click_message)?;
        Ok(())
    }

    fn on_hover(&mut self, active: bool) -> Result<(), PageError> {
        let look = if active {
            &self.config.hover_active
        } else {
            &self.config.hover_default
        };
        let hover_box = self.elements.hover_box;

        let style = &mut self.document.tree_mut().element_mut(hover_box)?.style;
        style.set("background-color", &look.background_color);
        style.set("color", &look.color);
        self.document.set_text_content(hover_box, &look.text)?;
        Ok(())
    }

    fn on_theme_toggle(&mut self) -> Result<(), PageError> {
        let body = self.document.body();
        let dark = self
            .document
            .tree_mut()
            .element_mut(body)?
            .classes
            .toggle(&self.config.dark_mode_class);
        tracing::debug!("Dark mode {}", if dark { "on" } else { "off" });
        Ok(())
    }

    fn on_collapsible_click(&mut self, node: NodeId) -> Result<(), PageError> {
        let item = self
            .document
            .closest_with_class(node, &self.config.faq_question_class)
            .and_then(|question| {
                self.document
                    .closest_with_class(question, &self.config.faq_item_class)
            })
            .ok_or(PageError::NotCollapsible(node))?;

        self.document
            .tree_mut()
            .element_mut(item)?
            .classes
            .toggle(&self.config.faq_active_class);
        Ok(())
    }

    fn on_input(&mut self, field: Field, value: String) -> Result<(), PageError> {
        let input = self.elements.input(field);
        self.document.tree_mut().element_mut(input)?.value = value;
        Ok(())
    }
}
