//! List the form field names of a PDF, one per line, sorted.
//!
//! Handy for checking which revision of the log form a document is and
//! which schema names it actually carries.
//!
//! Usage:
//!   list_fields <form.pdf>

use std::process::ExitCode;

use esd_log_fill::catalog::read_catalog;
use esd_log_fill::document::load_document;
use esd_log_fill::Error;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: list_fields <form.pdf>");
        return ExitCode::FAILURE;
    }

    let doc = match load_document(&args[1]) {
        Ok(doc) => doc,
        Err(e @ Error::DocumentRead(_)) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    let catalog = read_catalog(&doc);
    let mut names: Vec<&str> = catalog.keys().map(|k| k.as_str()).collect();
    names.sort_unstable();
    for name in names {
        println!("{}", name);
    }
    ExitCode::SUCCESS
}
