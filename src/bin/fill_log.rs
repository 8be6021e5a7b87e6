//! Fill a weekly job-search log PDF form from a YAML data file.
//!
//! Usage:
//!   fill_log <blank.pdf> <week.yaml> <filled.pdf> [--enrich-endpoint URL]
//!
//! Contact enrichment is off unless an endpoint is given via the flag or
//! the `ESD_ENRICH_ENDPOINT` environment variable.
//!
//! Exit codes: 0 on success, 2 when the input PDF cannot be parsed,
//! 1 on any other failure.

use std::process::ExitCode;

use esd_log_fill::document::load_document;
use esd_log_fill::enrich::{ContactLookup, HttpContactLookup};
use esd_log_fill::input::load_weekly_log;
use esd_log_fill::{Error, FillRun, Result, RunReport};

struct Config {
    pdf_in: String,
    yaml_in: String,
    pdf_out: String,
    enrich_endpoint: Option<String>,
}

impl Config {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut positional = Vec::new();
        let mut enrich_endpoint = std::env::var("ESD_ENRICH_ENDPOINT").ok();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--enrich-endpoint" => {
                    i += 1;
                    enrich_endpoint = args.get(i).cloned();
                },
                other => positional.push(other.to_string()),
            }
            i += 1;
        }

        if positional.len() != 3 {
            return None;
        }
        let mut it = positional.into_iter();
        Some(Self {
            pdf_in: it.next().unwrap(),
            yaml_in: it.next().unwrap(),
            pdf_out: it.next().unwrap(),
            enrich_endpoint,
        })
    }
}

fn run(config: &Config, lookup: Option<&dyn ContactLookup>) -> Result<RunReport> {
    let source = load_document(&config.pdf_in)?;
    let data = load_weekly_log(&config.yaml_in)?;
    let mut fill = FillRun::new();
    if let Some(lookup) = lookup {
        fill = fill.with_lookup(lookup);
    }
    fill.run(&source, &data, &config.pdf_out)
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(config) = Config::from_args() else {
        eprintln!("Usage: fill_log <blank.pdf> <week.yaml> <filled.pdf> [--enrich-endpoint URL]");
        return ExitCode::FAILURE;
    };

    let lookup = match config.enrich_endpoint.as_deref() {
        Some(endpoint) => match HttpContactLookup::new(endpoint) {
            Ok(client) => Some(client),
            Err(e) => {
                eprintln!("Error: failed to build enrichment client: {}", e);
                return ExitCode::FAILURE;
            },
        },
        None => None,
    };

    match run(&config, lookup.as_ref().map(|l| l as &dyn ContactLookup)) {
        Ok(report) => {
            for failure in &report.enrichment_failures {
                eprintln!(
                    "Warning: enrichment failed for '{}' (block {}): {}",
                    failure.business_name, failure.block, failure.reason
                );
            }
            println!("Wrote {}", config.pdf_out);
            ExitCode::SUCCESS
        },
        Err(e @ Error::DocumentRead(_)) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
