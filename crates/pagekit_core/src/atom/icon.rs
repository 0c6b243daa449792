//! Icon atom.

use super::Atom;
use crate::element::{Element, ElementBase, ElementLevel};
use crate::page::Page;

/// Component that owns an icon when none is given.
pub const DEFAULT_ICON_COMPONENT: &str = "core";

const ICON_CLASS: &str = "icon";

/// A small image identified by name within a component's pix directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    base: ElementBase,
    /// Path inside the pix directory, without extension, e.g. `e/layers`.
    pub name: String,
    pub component: String,
    /// Always present; images must carry an `alt`, even an empty one.
    pub alt: String,
    pub title: Option<String>,
}

impl Icon {
    /// Icon from the core component with an empty `alt`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_details(name, DEFAULT_ICON_COMPONENT, "", None)
    }

    pub fn with_details(
        name: impl Into<String>,
        component: impl Into<String>,
        alt: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        let mut icon = Self {
            base: ElementBase::new(),
            name: name.into(),
            component: component.into(),
            alt: alt.into(),
            title,
        };
        let alt = icon.alt.clone();
        icon.set_attribute("alt", &alt);
        if let Some(title) = icon.title.clone() {
            icon.set_attribute("title", &title);
        }
        icon
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Element for Icon {
    fn kind(&self) -> &'static str {
        "icon"
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

    /// Resolves `src` and re-applies `alt`/`title` from the current fields.
    fn prerender(&mut self, page: &mut dyn Page) {
        let src = page.pix_url(&self.name, &self.component);
        let attributes = &mut self.base.attributes;
        attributes.set("src", src);
        attributes.set("alt", self.alt.as_str());
        if let Some(title) = &self.title {
            attributes.set("title", title.as_str());
        }
        if !attributes.has_class(ICON_CLASS) {
            attributes.add_class(ICON_CLASS);
        }
    }
}

impl Atom for Icon {}

#[cfg(test)]
mod tests {
    use super::{Icon, DEFAULT_ICON_COMPONENT};
    use crate::element::Element;
    use crate::page::RecordingPage;

    #[test]
    fn new_sets_empty_alt_and_core_component() {
        let icon = Icon::new("i/edit");
        assert_eq!(icon.component, DEFAULT_ICON_COMPONENT);
        assert_eq!(icon.attributes().value("alt"), Some(""));
        assert!(!icon.attributes().contains("title"));
    }

    #[test]
    fn with_details_sets_title_attribute() {
        let icon = Icon::with_details("i/edit", "mod_forum", "Edit", Some("Edit post".into()));
        assert_eq!(icon.attributes().value("alt"), Some("Edit"));
        assert_eq!(icon.attributes().value("title"), Some("Edit post"));
    }

    #[test]
    fn prerender_resolves_src_and_applies_field_edits() {
        let mut page = RecordingPage::default();
        let mut icon = Icon::new("e/layers").alt("Layers").title("Layers tool");

        icon.prerender(&mut page);
        icon.prerender(&mut page);

        let attrs = icon.attributes();
        assert_eq!(
            attrs.value("src"),
            Some("http://localhost/theme/image.php/boost/core/e/layers")
        );
        assert_eq!(attrs.value("alt"), Some("Layers"));
        assert_eq!(attrs.value("title"), Some("Layers tool"));
        assert_eq!(attrs.value("class"), Some("icon"));
    }
}
