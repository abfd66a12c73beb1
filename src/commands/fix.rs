//! `lexa fix` - apply heuristic repairs and emit the corrected source.

use crate::commands::common::{read_source, resolve_language};
use crate::correct;
use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

pub fn execute(
    input: String,
    language: Option<String>,
    output: Option<PathBuf>,
    write: bool,
) -> Result<()> {
    let source = read_source(&input)?;
    let lang = resolve_language(language.as_deref(), &input);
    let corrected = correct::correct(&source, lang);

    match (output, write) {
        (Some(path), _) => {
            fs::write(&path, &corrected)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("{} Wrote corrected source to {}", "✓".green(), path.display());
        }
        (None, true) => {
            if input == "-" {
                bail!("--write requires a file path, not stdin");
            }
            fs::write(&input, &corrected)
                .with_context(|| format!("Failed to write '{input}'"))?;
            if corrected == source {
                eprintln!("{} No changes needed for {input}", "✓".green());
            } else {
                eprintln!("{} Rewrote {input}", "✓".green());
            }
        }
        (None, false) => {
            print!("{corrected}");
        }
    }
    Ok(())
}
