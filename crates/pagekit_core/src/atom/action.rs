//! Action atom.
//!
//! # Responsibility
//! - Represent something the user can do; the renderer picks link or button.
//! - Queue JS event bindings until the action is prerendered.
//!
//! # Invariants
//! - Queued bindings are registered exactly once, in the order they were added.
//! - Registration targets `#<id>`; an ID is assigned on demand.
//! - A later `add_js_action` re-arms registration for the new bindings only.

use super::icon::Icon;
use super::Atom;
use crate::element::property::{PROPERTY_ACTIVE, PROPERTY_DIMMED, PROPERTY_ENABLED};
use crate::element::{Element, ElementBase, ElementLevel, ParentRef};
use crate::page::Page;
use log::debug;
use serde_json::Value;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Preferred HTTP method for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = UnsupportedMethodError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            _ => Err(UnsupportedMethodError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedMethodError(pub String);

impl Display for UnsupportedMethodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported action method `{}`; expected GET|POST", self.0)
    }
}

impl Error for UnsupportedMethodError {}

/// A JS handler to bind to an element once it has an ID.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentAction {
    pub event: String,
    pub js_function: String,
    pub js_function_args: Vec<Value>,
}

impl ComponentAction {
    pub fn new(event: impl Into<String>, js_function: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            js_function: js_function.into(),
            js_function_args: Vec::new(),
        }
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.js_function_args = args;
        self
    }
}

/// Something the user can do, rendered as a link or a button.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    base: ElementBase,
    /// Link text or button label.
    pub content: Option<String>,
    pub url: Option<String>,
    /// Human description, used as the `title` attribute.
    pub description: Option<String>,
    pub icon: Option<Icon>,
    pub help_icon: Option<Icon>,
    /// `None` when the action does not care how it is submitted.
    pub method: Option<HttpMethod>,
    js_actions: VecDeque<ComponentAction>,
    js_actions_ready: bool,
    applied_state: AppliedState,
}

/// Attributes the last prerender derived from description and properties.
#[derive(Debug, Clone, Default, PartialEq)]
struct AppliedState {
    title: Option<String>,
    disabled: bool,
    active: bool,
    dimmed: bool,
}

impl Default for Action {
    fn default() -> Self {
        Self {
            base: ElementBase::new(),
            content: None,
            url: None,
            description: None,
            icon: None,
            help_icon: None,
            method: None,
            js_actions: VecDeque::new(),
            js_actions_ready: true,
            applied_state: AppliedState::default(),
        }
    }
}

impl Action {
    pub fn new(
        content: Option<String>,
        url: Option<String>,
        description: Option<String>,
        icon: Option<Icon>,
    ) -> Self {
        Self {
            content,
            url,
            description,
            icon,
            ..Self::default()
        }
    }

    /// Action with visible content pointing at `url`.
    pub fn to(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(Some(content.into()), Some(url.into()), None, None)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn help_icon(mut self, icon: Icon) -> Self {
        self.help_icon = Some(icon);
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Queues a JS binding for the next prerender.
    pub fn add_js_action(&mut self, action: ComponentAction) {
        self.js_actions.push_back(action);
        self.js_actions_ready = false;
    }

    /// Bindings that have not been registered with a page yet.
    pub fn pending_js_actions(&self) -> impl Iterator<Item = &ComponentAction> {
        self.js_actions.iter()
    }

    /// Returns whether every queued binding has been registered.
    pub fn js_actions_ready(&self) -> bool {
        self.js_actions_ready
    }

    fn register_js_actions(&mut self, page: &mut dyn Page) {
        if self.js_actions_ready {
            return;
        }
        let selector = format!("#{}", self.require_id());
        let mut registered = 0usize;
        while let Some(action) = self.js_actions.pop_front() {
            page.event_handler(
                &selector,
                &action.event,
                &action.js_function,
                &action.js_function_args,
            );
            registered += 1;
        }
        self.js_actions_ready = true;
        debug!(
            "event=js_actions_registered module=action selector={} count={}",
            selector, registered
        );
    }

    /// Keeps property-driven attributes in step with the current state.
    ///
    /// Only attributes this step put there are taken away again; a `title`
    /// the caller set to something else is left alone.
    fn apply_state_attributes(&mut self) {
        let enabled = self.is(PROPERTY_ENABLED);
        let active = self.is(PROPERTY_ACTIVE);
        let dimmed = self.is(PROPERTY_DIMMED);
        let applied = &mut self.applied_state;
        let attributes = &mut self.base.attributes;

        let title_is_derived = match attributes.value("title") {
            None => !attributes.contains("title"),
            Some(current) => applied.title.as_deref() == Some(current),
        };
        if title_is_derived {
            match &self.description {
                Some(description) => attributes.set("title", description.as_str()),
                None => {
                    attributes.remove("title");
                }
            }
            applied.title = self.description.clone();
        } else {
            applied.title = None;
        }

        if !enabled {
            if !attributes.contains("disabled") {
                attributes.set_bare("disabled");
                applied.disabled = true;
            }
        } else if applied.disabled {
            attributes.remove("disabled");
            applied.disabled = false;
        }

        for (flag, class, was_applied) in [
            (active, "active", &mut applied.active),
            (dimmed, "dimmed", &mut applied.dimmed),
        ] {
            if flag {
                if !attributes.has_class(class) {
                    attributes.add_class(class);
                    *was_applied = true;
                }
            } else if *was_applied {
                attributes.remove_class(class);
                *was_applied = false;
            }
        }
    }

    fn prerender_icons(&mut self, kind: &'static str, page: &mut dyn Page) {
        let parent = ParentRef {
            kind,
            level: ElementLevel::Atom,
            id: self.id().map(str::to_string),
        };
        for icon in [self.icon.as_mut(), self.help_icon.as_mut()]
            .into_iter()
            .flatten()
        {
            icon.base_mut().parent = Some(parent.clone());
            icon.prerender(page);
        }
    }

    /// Shared prerender for actions and the atoms built on them; `kind` is
    /// what attached icons record as their parent.
    pub(crate) fn prerender_as(&mut self, kind: &'static str, page: &mut dyn Page) {
        self.register_js_actions(page);
        self.apply_state_attributes();
        self.prerender_icons(kind, page);
    }
}

impl Element for Action {
    fn kind(&self) -> &'static str {
        "action"
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

    /// Registers queued JS bindings, maps state properties onto attributes
    /// and prepares the attached icons.
    fn prerender(&mut self, page: &mut dyn Page) {
        let kind = self.kind();
        self.prerender_as(kind, page);
    }
}

impl Atom for Action {}
