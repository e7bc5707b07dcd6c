//! fOS Showcase Page
//!
//! Interactive demo page: a click acknowledgment, a hover box, a theme
//! toggle, a collapsible FAQ and a validated contact form, all driven by
//! discrete [`Trigger`]s against a [`showcase_dom::Document`].

mod config;
mod form_view;
mod markup;
mod page;
mod state;
mod trigger;

pub use config::{CONFIG_ENV, FaqEntry, HoverStyle, PageConfig};
pub use markup::{build_document, ids};
pub use page::{Page, PageElements};
pub use state::{ErrorTexts, PageState};
pub use trigger::{ScriptStep, Trigger, demo_script};

use showcase_dom::{DomError, NodeId};

/// Page error
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error("Required element #{0} is missing")]
    MissingElement(&'static str),

    #[error("Node {0:?} is not inside a collapsible section")]
    NotCollapsible(NodeId),

    #[error("No FAQ item at index {0}")]
    NoSuchFaqItem(usize),

    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
