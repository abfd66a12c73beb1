//! Shared helpers for command implementations.

use crate::language::Language;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read source text from a file path, or from stdin when `input` is `-`.
pub fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read source from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read '{input}'"))
    }
}

/// Pick the language: an explicit `--language` tag wins, then the input
/// file's extension, then the default profile.
pub fn resolve_language(flag: Option<&str>, input: &str) -> Language {
    if let Some(tag) = flag {
        return Language::from_tag(tag);
    }
    if input != "-" {
        if let Some(lang) = Language::from_path(Path::new(input)) {
            return lang;
        }
    }
    Language::from_tag("")
}
