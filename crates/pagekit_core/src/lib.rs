//! Core output element model for pagekit.
//! Atoms, molecules and organisms compose HTML fragments for a host page.

pub mod atom;
pub mod config;
pub mod element;
pub mod logging;
pub mod organism;
pub mod page;
pub mod render;
pub mod sample;

pub use atom::action::{Action, ComponentAction, HttpMethod, UnsupportedMethodError};
pub use atom::icon::{Icon, DEFAULT_ICON_COMPONENT};
pub use atom::link::Link;
pub use atom::text::Text;
pub use atom::Atom;
pub use config::{ConfigError, ConfigResult, PageConfig};
pub use element::attributes::{escape_html, Attributes};
pub use element::id::{next_element_id, ELEMENT_ID_PREFIX};
pub use element::property::{Properties, PropertyValue};
pub use element::{Element, ElementBase, ElementError, ElementLevel, ElementResult, ParentRef};
pub use logging::{default_log_level, init_logging, logging_status};
pub use organism::{Molecule, Organism};
pub use page::{EventHandler, Page, RecordingPage};
pub use render::{HtmlRenderer, Renderable};
pub use sample::generator::{CoreSampleGenerator, SampleGenerator};
pub use sample::{RendererSample, SampleCategory, SampleError, SampleResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
