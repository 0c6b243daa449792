//! Host page contract used during prerender.
//!
//! # Responsibility
//! - Resolve icon names to image URLs.
//! - Collect per-element JavaScript event handlers for the page footer.
//!
//! # See also
//! - `render::HtmlRenderer`, which drives prerender against a page.

use crate::config::PageConfig;
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// What elements may ask of the page they are rendered into.
pub trait Page {
    /// URL of the page being rendered.
    fn url(&self) -> &str;

    /// Resolves an icon to the URL of its image.
    fn pix_url(&self, name: &str, component: &str) -> String;

    /// Registers a JS handler for `event` on the nodes matching `selector`.
    fn event_handler(&mut self, selector: &str, event: &str, function: &str, args: &[Value]);
}

/// One handler registration captured by `RecordingPage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventHandler {
    pub selector: String,
    pub event: String,
    pub function: String,
    pub args: Vec<Value>,
}

impl EventHandler {
    /// JS init line equivalent to this registration.
    pub fn to_script(&self) -> String {
        let mut line = format!(
            "Y.on({}, {}, {}, null",
            js_string(&self.event),
            self.function,
            js_string(&self.selector)
        );
        if !self.args.is_empty() {
            line.push_str(", ");
            line.push_str(&Value::Array(self.args.clone()).to_string());
        }
        line.push_str(");");
        line
    }
}

/// In-process page that records handler registrations.
#[derive(Debug, Clone, Default)]
pub struct RecordingPage {
    config: PageConfig,
    handlers: Vec<EventHandler>,
}

impl RecordingPage {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            handlers: Vec::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Handlers in registration order.
    pub fn handlers(&self) -> &[EventHandler] {
        &self.handlers
    }

    /// All registrations as newline-separated JS init code.
    pub fn handlers_script(&self) -> String {
        self.handlers
            .iter()
            .map(EventHandler::to_script)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Page for RecordingPage {
    fn url(&self) -> &str {
        &self.config.page_url
    }

    fn pix_url(&self, name: &str, component: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.pix_base_url.trim_end_matches('/'),
            self.config.theme,
            component,
            name
        )
    }

    fn event_handler(&mut self, selector: &str, event: &str, function: &str, args: &[Value]) {
        debug!(
            "event=js_handler_registered module=page selector={} event={} function={}",
            selector, event, function
        );
        self.handlers.push(EventHandler {
            selector: selector.to_string(),
            event: event.to_string(),
            function: function.to_string(),
            args: args.to_vec(),
        });
    }
}

fn js_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}
