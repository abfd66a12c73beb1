//! `lexa scan` - tokenize source and print the token stream.

use crate::commands::common::{read_source, resolve_language};
use crate::report;
use crate::scanner;
use anyhow::Result;
use colored::Colorize;

pub fn execute(input: String, language: Option<String>, json: bool) -> Result<()> {
    let source = read_source(&input)?;
    let lang = resolve_language(language.as_deref(), &input);
    let tokens = scanner::scan(&source, lang);

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        println!("{} Scanning as {}", "→".dimmed(), lang.tag().bold());
        println!();
        report::print_tokens(&tokens);
    }
    Ok(())
}
