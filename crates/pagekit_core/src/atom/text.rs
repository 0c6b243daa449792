//! Plain text atom.

use super::Atom;
use crate::element::{Element, ElementBase, ElementLevel};
use std::fmt::Display;

/// Plain text inside a composite element.
///
/// Renderers may present it however they like, but it can carry attributes
/// and owner-assigned properties like any other atom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Text {
    base: ElementBase,
    pub content: String,
}

impl Text {
    pub fn new(content: impl Display) -> Self {
        Self {
            base: ElementBase::new(),
            content: content.to_string(),
        }
    }
}

impl Element for Text {
    fn kind(&self) -> &'static str {
        "text"
    }

    fn level(&self) -> ElementLevel {
        ElementLevel::Atom
    }

    fn base(&self) -> &ElementBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

impl Atom for Text {}

#[cfg(test)]
mod tests {
    use super::Text;
    use crate::element::Element;

    #[test]
    fn new_stringifies_content() {
        assert_eq!(Text::new(42).content, "42");
        assert_eq!(Text::new("Course name").content, "Course name");
    }

    #[test]
    fn starts_without_attributes() {
        let text = Text::new("x");
        assert!(text.attributes().is_empty());
        assert!(text.id().is_none());
    }
}
