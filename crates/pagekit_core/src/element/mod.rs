//! Base element behavior shared by atoms, molecules and organisms.
//!
//! # Responsibility
//! - Hold the attribute map, declared properties and parent link of one element.
//! - Provide the prerender hook the host calls once before serialization.
//!
//! # Invariants
//! - Properties must be declared before `set` can change them.
//! - Property values are always scalar; `null`, arrays and objects are rejected.
//! - A child references its parent by kind and ID; parents never own children.
//! - An element ID, once assigned, is stable for the element lifetime.

use crate::page::Page;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod attributes;
pub mod id;
pub mod property;

use attributes::Attributes;
use property::{Properties, PropertyValue};

pub type ElementResult<T> = Result<T, ElementError>;

/// Usage errors raised at the call site that misused an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// `set` was called for a property that was never added.
    UndeclaredProperty(String),
    /// A dynamic value was not a bool, number or string.
    NonScalarValue {
        property: String,
        found: &'static str,
    },
}

impl Display for ElementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredProperty(name) => write!(
                f,
                "trying to set a non-existent property `{name}`; all properties must be added before they can be interacted with"
            ),
            Self::NonScalarValue { property, found } => write!(
                f,
                "only scalar values can be passed through dynamic element properties (`{property}` got {found})"
            ),
        }
    }
}

impl Error for ElementError {}

/// Composition level of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementLevel {
    Atom,
    Molecule,
    Organism,
}

impl ElementLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Molecule => "molecule",
            Self::Organism => "organism",
        }
    }
}

/// Non-owning link from a child element to the element it is used within.
///
/// `id` is the parent's ID at the time the link was made, if it had one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentRef {
    pub kind: &'static str,
    pub level: ElementLevel,
    pub id: Option<String>,
}

impl ParentRef {
    pub fn of(parent: &dyn Element) -> Self {
        Self {
            kind: parent.kind(),
            level: parent.level(),
            id: parent.id().map(str::to_string),
        }
    }
}

/// State every element carries regardless of its concrete kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementBase {
    pub attributes: Attributes,
    pub properties: Properties,
    pub parent: Option<ParentRef>,
}

impl ElementBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures an `id` attribute exists and returns it.
    ///
    /// An absent, empty or `"0"` id counts as missing and is replaced with the
    /// next process-wide `m-<n>` identifier.
    pub fn require_id(&mut self) -> String {
        let existing = self
            .attributes
            .value("id")
            .filter(|value| id::is_assigned_id(value))
            .map(str::to_string);
        match existing {
            Some(id) => id,
            None => {
                let id = id::next_element_id();
                self.attributes.set("id", id.clone());
                id
            }
        }
    }
}

/// Behavior shared by every output element.
///
/// Implementors only provide their kind, level and base state; everything
/// else is available through the provided methods. `prerender` may be
/// overridden to translate fields into attributes or to register page-level
/// JavaScript right before serialization.
pub trait Element {
    /// Stable lowercase kind name, e.g. `icon`.
    fn kind(&self) -> &'static str;
    fn level(&self) -> ElementLevel;
    fn base(&self) -> &ElementBase;
    fn base_mut(&mut self) -> &mut ElementBase;

    /// Called by the host once per render pass before markup is produced.
    fn prerender(&mut self, _page: &mut dyn Page) {}

    /// Sets one attribute. `class` is appended rather than replaced.
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.base_mut().attributes.set(name, value);
    }

    /// Sets a valueless attribute such as `disabled`.
    fn set_bare_attribute(&mut self, name: &str) {
        self.base_mut().attributes.set_bare(name);
    }

    fn add_class(&mut self, class: &str) {
        self.base_mut().attributes.add_class(class);
    }

    fn attributes(&self) -> &Attributes {
        &self.base().attributes
    }

    /// Attribute string ready to splice into an opening tag.
    fn attributes_html(&self) -> String {
        self.base().attributes.to_html()
    }

    fn add_property(&mut self, property: &str, value: PropertyValue) {
        self.base_mut().properties.add(property, value);
    }

    /// Changes a declared property.
    ///
    /// # Errors
    /// - `ElementError::UndeclaredProperty` when `property` was never added.
    fn set(&mut self, property: &str, value: PropertyValue) -> ElementResult<()> {
        self.base_mut().properties.set(property, value)
    }

    fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.base().properties.get(property)
    }

    /// Returns whether `property` is declared and not empty.
    fn is(&self, property: &str) -> bool {
        self.base().properties.is(property)
    }

    fn require_id(&mut self) -> String {
        self.base_mut().require_id()
    }

    /// Current ID; an empty or `"0"` placeholder counts as none.
    fn id(&self) -> Option<&str> {
        self.base()
            .attributes
            .value("id")
            .filter(|value| id::is_assigned_id(value))
    }

    fn parent(&self) -> Option<&ParentRef> {
        self.base().parent.as_ref()
    }

    /// Records the element this one is used within.
    fn set_parent(&mut self, parent: &dyn Element) {
        self.base_mut().parent = Some(ParentRef::of(parent));
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, ElementBase, ElementError, ElementLevel};
    use crate::element::property::PropertyValue;

    #[derive(Default)]
    struct Panel {
        base: ElementBase,
    }

    impl Element for Panel {
        fn kind(&self) -> &'static str {
            "panel"
        }

        fn level(&self) -> ElementLevel {
            ElementLevel::Molecule
        }

        fn base(&self) -> &ElementBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ElementBase {
            &mut self.base
        }
    }

    #[test]
    fn require_id_is_stable() {
        let mut panel = Panel::default();
        let first = panel.require_id();
        let second = panel.require_id();
        assert_eq!(first, second);
        assert!(first.starts_with("m-"));
        assert_eq!(panel.id(), Some(first.as_str()));
    }

    #[test]
    fn require_id_keeps_explicit_id() {
        let mut panel = Panel::default();
        panel.set_attribute("id", "main-nav");
        assert_eq!(panel.require_id(), "main-nav");
    }

    #[test]
    fn require_id_replaces_zero_id() {
        let mut panel = Panel::default();
        panel.set_attribute("id", "0");
        let id = panel.require_id();
        assert_ne!(id, "0");
        assert!(id.starts_with("m-"));
    }

    #[test]
    fn id_ignores_placeholder_values() {
        let mut panel = Panel::default();
        panel.set_attribute("id", "");
        assert_eq!(panel.id(), None);
        panel.set_attribute("id", "0");
        assert_eq!(panel.id(), None);

        let mut child = Panel::default();
        child.set_parent(&panel);
        assert_eq!(child.parent().expect("parent recorded").id, None);
    }

    #[test]
    fn set_rejects_undeclared_property() {
        let mut panel = Panel::default();
        let err = panel
            .set("collapsed", PropertyValue::Bool(true))
            .expect_err("undeclared property must fail");
        assert_eq!(err, ElementError::UndeclaredProperty("collapsed".to_string()));
        assert!(err.to_string().contains("must be added before"));
    }

    #[test]
    fn set_parent_records_parent_identity() {
        let mut parent = Panel::default();
        let mut child = Panel::default();
        child.set_parent(&parent);
        assert_eq!(child.parent().expect("parent recorded").id, None);

        let parent_id = parent.require_id();
        child.set_parent(&parent);
        let link = child.parent().expect("parent recorded");
        assert_eq!(link.kind, "panel");
        assert_eq!(link.level, ElementLevel::Molecule);
        assert_eq!(link.id.as_deref(), Some(parent_id.as_str()));
    }
}
