//! Contact form rendering
//!
//! Maps a [`ValidationResult`] onto the inline error nodes and the
//! success message. Validation itself lives in `showcase-forms`.

use showcase_dom::DomEvent;
use showcase_forms::{Field, Submission, ValidationResult, validate};

use crate::{Page, PageError};

impl Page {
    /// Current input values
    pub fn submission(&self) -> Result<Submission, PageError> {
        let mut submission = Submission::default();
        for field in Field::ALL {
            let input = self.document.tree().element(self.elements.input(field))?;
            submission.set(field, input.value.as_str());
        }
        Ok(submission)
    }

    pub(crate) fn on_submit(
        &mut self,
        event: &mut DomEvent,
    ) -> Result<ValidationResult, PageError> {
        event.prevent_default();

        self.clear_messages()?;

        let result = validate(&self.submission()?);
        self.render_result(&result)?;

        if result.is_valid() {
            self.document
                .set_text_content(self.elements.success_message, &self.config.success_message)?;
            self.reset_form()?;
        }

        Ok(result)
    }

    /// Blank all error texts and the success message
    fn clear_messages(&mut self) -> Result<(), PageError> {
        for field in Field::ALL {
            self.document.set_text_content(self.elements.error(field), "")?;
        }
        self.document.set_text_content(self.elements.success_message, "")?;
        Ok(())
    }

    /// Write each failed rule's message into its field's error node
    fn render_result(&mut self, result: &ValidationResult) -> Result<(), PageError> {
        for err in result.errors() {
            let node = self.elements.error(err.field());
            self.document.set_text_content(node, &err.to_string())?;
        }
        Ok(())
    }

    /// Restore every input to its empty initial value
    fn reset_form(&mut self) -> Result<(), PageError> {
        for field in Field::ALL {
            self.document
                .tree_mut()
                .element_mut(self.elements.input(field))?
                .value
                .clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageConfig, Trigger};

    fn type_into(page: &mut Page, field: Field, value: &str) {
        page.dispatch(Trigger::Input {
            field,
            value: value.to_string(),
        })
        .unwrap();
    }

    #[test]
    fn test_submission_reads_inputs() {
        let mut page = Page::new(PageConfig::default()).unwrap();
        type_into(&mut page, Field::Username, " alice ");
        type_into(&mut page, Field::Password, "pw");

        assert_eq!(page.submission().unwrap(), Submission::new(" alice ", "", "pw"));
    }

    #[test]
    fn test_submit_prevents_default() {
        let mut page = Page::new(PageConfig::default()).unwrap();
        let mut event = DomEvent::new(showcase_dom::EventType::Submit, page.elements().form);

        page.on_submit(&mut event).unwrap();
        assert!(event.is_default_prevented());
    }
}
