//! Element library CLI.
//!
//! # Responsibility
//! - Render the built-in samples to stdout for quick visual checks.
//! - Print the JS init code the rendered samples registered.

use log::info;
use pagekit_core::{
    core_version, default_log_level, init_logging, CoreSampleGenerator, HtmlRenderer, PageConfig,
    RecordingPage, RendererSample, SampleGenerator,
};
use std::process::ExitCode;

const USAGE: &str = "usage: pagekit_cli [--config <file.json>] [--log-dir <abs dir>] [--list | --sample <name>]";

#[derive(Debug, Default)]
struct Args {
    config: Option<String>,
    log_dir: Option<String>,
    sample: Option<String>,
    list: bool,
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut args = Args::default();
    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--config" => args.config = Some(value_for(&flag, raw.next())?),
            "--log-dir" => args.log_dir = Some(value_for(&flag, raw.next())?),
            "--sample" => args.sample = Some(value_for(&flag, raw.next())?),
            "--list" => args.list = true,
            other => return Err(format!("unknown argument `{other}`")),
        }
    }
    Ok(args)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("`{flag}` needs a value"))
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => PageConfig::load(path).map_err(|err| err.to_string())?,
        None => PageConfig::default(),
    };
    if let Some(log_dir) = &args.log_dir {
        let level = config.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }
    info!(
        "event=cli_start module=cli status=ok version={} page_url={}",
        core_version(),
        config.page_url
    );

    let mut page = RecordingPage::new(config);
    let generator = CoreSampleGenerator;
    let mut samples: Vec<Box<dyn RendererSample>> = match &args.sample {
        Some(name) => vec![generator
            .find_sample(&page, name)
            .map_err(|err| err.to_string())?],
        None => generator
            .create_samples(&page)
            .map_err(|err| err.to_string())?,
    };

    if args.list {
        for sample in &samples {
            println!("{}\t{}", sample.category().as_str(), sample.name());
        }
        return Ok(());
    }

    let renderer = HtmlRenderer::new();
    for sample in &mut samples {
        println!("<!-- {} ({}) -->", sample.name(), sample.category().as_str());
        println!("{}", sample.execute(&renderer, &mut page));
    }
    let script = page.handlers_script();
    if !script.is_empty() {
        println!("<script>\n{script}\n</script>");
    }
    Ok(())
}

fn main() -> ExitCode {
    let outcome = parse_args(std::env::args().skip(1)).and_then(run);
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("pagekit_cli: {message}");
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_known_flags() {
        let parsed = parse_args(args(&["--config", "page.json", "--sample", "Action"]))
            .expect("valid arguments");
        assert_eq!(parsed.config.as_deref(), Some("page.json"));
        assert_eq!(parsed.sample.as_deref(), Some("Action"));
        assert!(!parsed.list);
    }

    #[test]
    fn rejects_missing_values_and_unknown_flags() {
        assert!(parse_args(args(&["--sample"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}
