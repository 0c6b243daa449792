//! Link atom.

use super::action::{Action, ComponentAction};
use super::Atom;
use crate::element::{Element, ElementBase, ElementLevel};
use crate::page::Page;

/// An action that must render as an anchor.
///
/// Prefer `Action` unless a real link is required; that leaves the renderer
/// free to choose between link and button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    action: Action,
}

impl Link {
    pub fn new(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            action: Action::to(content, url),
        }
    }

    pub fn from_action(action: Action) -> Self {
        Self { action }
    }

    pub fn as_action(&self) -> &Action {
        &self.action
    }

    pub fn as_action_mut(&mut self) -> &mut Action {
        &mut self.action
    }

    pub fn into_action(self) -> Action {
        self.action
    }

    pub fn add_js_action(&mut self, action: ComponentAction) {
        self.action.add_js_action(action);
    }
}

impl From<Action> for Link {
    fn from(action: Action) -> Self {
        Self::from_action(action)
    }
}

impl Element for Link {
    fn kind(&self) -> &'static str {
        "link"
    }

    fn level(&self) -> ElementLevel {
        ElementLevel::Atom
    }

    fn base(&self) -> &ElementBase {
        self.action.base()
    }

    fn base_mut(&mut self) -> &mut ElementBase {
        self.action.base_mut()
    }

    fn prerender(&mut self, page: &mut dyn Page) {
        let kind = self.kind();
        self.action.prerender_as(kind, page);
    }
}

impl Atom for Link {}
