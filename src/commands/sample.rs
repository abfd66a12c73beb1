//! `lexa sample` - print a built-in example snippet for a language.

use crate::language::Language;
use anyhow::Result;

pub fn execute(language: String) -> Result<()> {
    let lang = Language::from_tag(&language);
    println!("{}", lang.sample());
    Ok(())
}
