//! HTML serialization of prerendered elements.
//!
//! # Responsibility
//! - Run the prerender hook exactly as a host page would.
//! - Turn each atom into markup without further mutating it.
//!
//! # Invariants
//! - `HtmlRenderer::render` always prerenders before serializing.
//! - Text content and attribute values are HTML-escaped.

use crate::atom::action::{Action, HttpMethod};
use crate::atom::icon::Icon;
use crate::atom::link::Link;
use crate::atom::text::Text;
use crate::element::attributes::escape_html;
use crate::element::Element;
use crate::page::Page;
use log::debug;

/// Elements the HTML renderer knows how to serialize.
pub trait Renderable: Element {
    /// Markup for the element in its current state.
    fn to_html(&self) -> String;
}

/// Renders elements for one page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Prerenders `item` against `page`, then serializes it.
    pub fn render(&self, item: &mut dyn Renderable, page: &mut dyn Page) -> String {
        item.prerender(page);
        let html = item.to_html();
        debug!(
            "event=element_rendered module=render kind={} level={} bytes={}",
            item.kind(),
            item.level().as_str(),
            html.len()
        );
        html
    }
}

impl Renderable for Text {
    /// Bare escaped text, wrapped in a `span` only when attributes exist.
    fn to_html(&self) -> String {
        let content = escape_html(&self.content);
        if self.attributes().is_empty() {
            content
        } else {
            format!("<span{}>{content}</span>", self.attributes_html())
        }
    }
}

impl Renderable for Icon {
    fn to_html(&self) -> String {
        format!("<img{} />", self.attributes_html())
    }
}

impl Renderable for Action {
    fn to_html(&self) -> String {
        action_markup(self, false)
    }
}

impl Renderable for Link {
    fn to_html(&self) -> String {
        action_markup(self.as_action(), true)
    }
}

fn action_markup(action: &Action, force_link: bool) -> String {
    let mut inner = String::new();
    if let Some(icon) = &action.icon {
        inner.push_str(&icon.to_html());
    }
    if let Some(content) = &action.content {
        inner.push_str(&escape_html(content));
    }

    let attrs = action.attributes_html();
    let mut out = match (&action.url, action.method) {
        (Some(url), Some(HttpMethod::Post)) if !force_link => format!(
            "<form method=\"post\" action=\"{}\"><button type=\"submit\"{attrs}>{inner}</button></form>",
            escape_html(url)
        ),
        (Some(url), _) => format!(
            "<a href=\"{}\"{attrs}{}>{inner}</a>",
            escape_html(url),
            anchor_disabled(action)
        ),
        (None, _) if force_link => {
            format!("<a href=\"#\"{attrs}{}>{inner}</a>", anchor_disabled(action))
        }
        (None, _) => format!("<button type=\"button\"{attrs}>{inner}</button>"),
    };

    if let Some(help) = &action.help_icon {
        out.push_str(&help.to_html());
    }
    out
}

/// Anchors ignore `disabled`, so it is mirrored as `aria-disabled`.
fn anchor_disabled(action: &Action) -> &'static str {
    let attributes = action.attributes();
    if attributes.contains("disabled") && !attributes.contains("aria-disabled") {
        " aria-disabled=\"true\""
    } else {
        ""
    }
}
