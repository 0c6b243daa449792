//! Renderer samples for the element library tool.
//!
//! # Responsibility
//! - Describe each sample (name, docs, category) for the library index.
//! - Produce the sample's markup through the shared renderer.
//!
//! # See also
//! - `generator::CoreSampleGenerator` for the built-in sample list.

use crate::page::Page;
use crate::render::HtmlRenderer;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod action;
pub mod generator;
pub mod heading;

pub type SampleResult<T> = Result<T, SampleError>;

/// Library section a sample is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SampleCategory {
    Atom,
    Molecule,
    Organism,
}

impl SampleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Molecule => "molecule",
            Self::Organism => "organism",
        }
    }
}

/// One entry of the element library.
pub trait RendererSample {
    fn name(&self) -> &str;
    /// Markdown documentation shown next to the rendered output.
    fn docs(&self) -> &str;
    fn category(&self) -> SampleCategory;
    /// Renders every element of the sample, concatenated.
    fn execute(&mut self, renderer: &HtmlRenderer, page: &mut dyn Page) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    InvalidHeadingLevel(u8),
    UnknownSample(String),
}

impl Display for SampleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeadingLevel(level) => {
                write!(f, "heading level must be between 1 and 6, got {level}")
            }
            Self::UnknownSample(name) => write!(f, "no sample named `{name}`"),
        }
    }
}

impl Error for SampleError {}
