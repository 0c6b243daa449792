//! Heading sample.

use super::{RendererSample, SampleCategory, SampleError, SampleResult};
use crate::element::attributes::escape_html;
use crate::page::Page;
use crate::render::HtmlRenderer;
use log::debug;

/// A single `h1`..`h6` heading with documentation.
pub struct HeadingSample {
    name: String,
    docs: String,
    text: String,
    level: u8,
}

impl HeadingSample {
    /// # Errors
    /// - `SampleError::InvalidHeadingLevel` when `level` is outside `1..=6`.
    pub fn new(
        name: impl Into<String>,
        docs: impl Into<String>,
        text: impl Into<String>,
        level: u8,
    ) -> SampleResult<Self> {
        if !(1..=6).contains(&level) {
            return Err(SampleError::InvalidHeadingLevel(level));
        }
        Ok(Self {
            name: name.into(),
            docs: docs.into(),
            text: text.into(),
            level,
        })
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl RendererSample for HeadingSample {
    fn name(&self) -> &str {
        &self.name
    }

    fn docs(&self) -> &str {
        &self.docs
    }

    fn category(&self) -> SampleCategory {
        SampleCategory::Atom
    }

    fn execute(&mut self, _renderer: &HtmlRenderer, _page: &mut dyn Page) -> String {
        debug!(
            "event=sample_heading module=sample level={}",
            self.level
        );
        format!(
            "<h{level}>{}</h{level}>",
            escape_html(&self.text),
            level = self.level
        )
    }
}
