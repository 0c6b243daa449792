//! Built-in sample list.

use super::action::ActionSample;
use super::heading::HeadingSample;
use super::{RendererSample, SampleError, SampleResult};
use crate::page::Page;
use log::info;

const HEADING_ONE_DOCS: &str = "# An example of a level 1 heading in a page.

*There should only ever be 1 instance of level 1 heading on any page.*";

/// Source of samples for the element library.
pub trait SampleGenerator {
    fn create_samples(&self, page: &dyn Page) -> SampleResult<Vec<Box<dyn RendererSample>>>;

    /// Creates all samples and keeps the one called `name`.
    fn find_sample(&self, page: &dyn Page, name: &str) -> SampleResult<Box<dyn RendererSample>> {
        self.create_samples(page)?
            .into_iter()
            .find(|sample| sample.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SampleError::UnknownSample(name.to_string()))
    }
}

/// Samples for the core atoms.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreSampleGenerator;

impl SampleGenerator for CoreSampleGenerator {
    fn create_samples(&self, page: &dyn Page) -> SampleResult<Vec<Box<dyn RendererSample>>> {
        let samples: Vec<Box<dyn RendererSample>> = vec![
            Box::new(HeadingSample::new(
                "Heading 1",
                HEADING_ONE_DOCS,
                "Heading 1",
                1,
            )?),
            Box::new(ActionSample::new(page.url())),
        ];
        info!(
            "event=samples_created module=sample status=ok count={}",
            samples.len()
        );
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreSampleGenerator, SampleGenerator};
    use crate::page::RecordingPage;
    use crate::sample::{SampleCategory, SampleError};

    #[test]
    fn creates_heading_then_action() {
        let page = RecordingPage::default();
        let samples = CoreSampleGenerator
            .create_samples(&page)
            .expect("core samples");
        let names: Vec<&str> = samples.iter().map(|sample| sample.name()).collect();
        assert_eq!(names, vec!["Heading 1", "Action"]);
        assert!(samples
            .iter()
            .all(|sample| sample.category() == SampleCategory::Atom));
        assert!(samples[0].docs().starts_with("# An example"));
    }

    #[test]
    fn find_sample_is_case_insensitive() {
        let page = RecordingPage::default();
        let sample = CoreSampleGenerator
            .find_sample(&page, "action")
            .expect("action sample");
        assert_eq!(sample.name(), "Action");

        let err = CoreSampleGenerator
            .find_sample(&page, "carousel")
            .err()
            .expect("unknown sample");
        assert_eq!(err, SampleError::UnknownSample("carousel".to_string()));
    }
}
