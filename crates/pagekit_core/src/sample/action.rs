//! Sample showing the ways an action atom can be rendered.

use super::{RendererSample, SampleCategory};
use crate::atom::action::{Action, HttpMethod};
use crate::atom::icon::Icon;
use crate::page::Page;
use crate::render::HtmlRenderer;

const SAMPLE_ICON: &str = "e/layers";
const SAMPLE_DESCRIPTION: &str = "Action atom";

pub struct ActionSample {
    actions: Vec<Action>,
}

impl ActionSample {
    /// Builds the four action variants, all pointing at `page_url`.
    pub fn new(page_url: &str) -> Self {
        let variant = |content: &str, icon: bool, method: Option<HttpMethod>| {
            let mut action = Action::new(
                Some(content.to_string()),
                Some(page_url.to_string()),
                Some(SAMPLE_DESCRIPTION.to_string()),
                icon.then(|| Icon::new(SAMPLE_ICON)),
            );
            action.method = method;
            action
        };

        Self {
            actions: vec![
                variant("Default action with icon", true, None),
                variant("Action as POST with icon", true, Some(HttpMethod::Post)),
                variant("Default action with no icon", false, None),
                variant("Action as POST with no icon", false, Some(HttpMethod::Post)),
            ],
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

impl RendererSample for ActionSample {
    fn name(&self) -> &str {
        "Action"
    }

    fn docs(&self) -> &str {
        "Shows the different ways an action atom can be rendered."
    }

    fn category(&self) -> SampleCategory {
        SampleCategory::Atom
    }

    fn execute(&mut self, renderer: &HtmlRenderer, page: &mut dyn Page) -> String {
        self.actions
            .iter_mut()
            .map(|action| renderer.render(action, page))
            .collect()
    }
}
