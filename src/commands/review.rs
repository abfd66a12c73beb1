//! `lexa review` - local analysis plus the remote AI review.
//!
//! The remote call is advisory: when it fails, the locally computed
//! diagnostics and correction are still printed and the failure becomes a
//! warning, never an error exit.

use crate::commands::common::{read_source, resolve_language};
use crate::review::{request_review, resolve_endpoint};
use crate::{detect, report, scanner};
use anyhow::Result;
use colored::Colorize;

pub fn execute(input: String, language: Option<String>, endpoint: Option<String>) -> Result<()> {
    let source = read_source(&input)?;
    let lang = resolve_language(language.as_deref(), &input);

    let tokens = scanner::scan(&source, lang);
    let diagnostics = detect::detect(&source, &tokens, lang);
    report::print_summary(lang, &diagnostics);
    println!();

    let endpoint = resolve_endpoint(endpoint);
    println!("{} Requesting AI review...", "→".dimmed());
    match request_review(&endpoint, &source, lang) {
        Ok(review) => {
            println!();
            println!("{}", "AI Analysis".bold());
            println!("{}", "─".repeat(64));
            println!("{}", review.analysis);
            if let Some(corrections) = review.corrections {
                println!();
                println!("{}", "Suggested corrections".bold());
                println!("{}", "─".repeat(64));
                println!("{corrections}");
            }
        }
        Err(err) => report::print_review_unavailable(&err),
    }
    Ok(())
}
