//! Composite element levels.
//!
//! Molecules group a few atoms; organisms group molecules and atoms into a
//! self-contained page region. Neither adds behavior to `Element`; concrete
//! composites implement the marker and report the matching level.

use crate::element::Element;

/// Marker for small composites built from atoms.
pub trait Molecule: Element {}

/// Marker for page regions built from molecules and atoms.
pub trait Organism: Element {}

#[cfg(test)]
mod tests {
    use super::Organism;
    use crate::atom::text::Text;
    use crate::element::{Element, ElementBase, ElementLevel};
    use crate::page::RecordingPage;

    struct Banner {
        base: ElementBase,
        message: Text,
    }

    impl Element for Banner {
        fn kind(&self) -> &'static str {
            "banner"
        }

        fn level(&self) -> ElementLevel {
            ElementLevel::Organism
        }

        fn base(&self) -> &ElementBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut ElementBase {
            &mut self.base
        }
    }

    impl Organism for Banner {}

    fn level_of(organism: &dyn Organism) -> ElementLevel {
        organism.level()
    }

    #[test]
    fn organisms_link_their_atoms_as_children() {
        let mut banner = Banner {
            base: ElementBase::new(),
            message: Text::new("Maintenance tonight"),
        };
        banner.require_id();
        let mut message = std::mem::take(&mut banner.message);
        message.set_parent(&banner);
        banner.message = message;

        let parent = banner.message.parent().expect("parent linked");
        assert_eq!(parent.level, ElementLevel::Organism);
        assert_eq!(parent.id.as_deref(), banner.id());
        assert_eq!(level_of(&banner), ElementLevel::Organism);

        let mut page = RecordingPage::default();
        banner.prerender(&mut page);
        assert!(page.handlers().is_empty());
    }
}
