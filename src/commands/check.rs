//! `lexa check` - run the issue detector and report findings.

use crate::commands::common::{read_source, resolve_language};
use crate::{detect, report, scanner};
use anyhow::Result;

pub fn execute(input: String, language: Option<String>, json: bool) -> Result<()> {
    let source = read_source(&input)?;
    let lang = resolve_language(language.as_deref(), &input);
    let tokens = scanner::scan(&source, lang);
    let diagnostics = detect::detect(&source, &tokens, lang);

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        report::print_summary(lang, &diagnostics);
    }

    if !diagnostics.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}
