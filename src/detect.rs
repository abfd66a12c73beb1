//! Structural issue detection over the token stream and raw source.

use crate::language::Language;
use crate::scanner::{Token, TokenKind};
use serde::Serialize;
use std::fmt;

/// Bracket pairs checked for balance, in report order.
const BRACKET_PAIRS: [(char, char); 3] = [('{', '}'), ('(', ')'), ('[', ']')];

/// Control and declaration keywords whose lines are exempt from the
/// statement-terminator heuristic. Matched as literal line prefixes.
const STATEMENT_PREFIXES: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default",
    "public", "private", "protected", "class", "import", "package",
];

/// One detected lexical-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnclosedString { line: usize, column: usize },
    UnterminatedBlockComment { line: usize, column: usize },
    MissingClosing { count: usize, delimiter: char },
    ExtraClosing { count: usize, delimiter: char },
    PossiblyMissingSemicolon { line: usize },
    InconsistentIndentation { line: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnclosedString { line, column } => {
                write!(f, "Unclosed string starting at line {line}, column {column}")
            }
            Diagnostic::UnterminatedBlockComment { line, column } => {
                write!(f, "Unterminated block comment at line {line}, column {column}")
            }
            Diagnostic::MissingClosing { count, delimiter } => {
                write!(f, "Missing {count} closing '{delimiter}'")
            }
            Diagnostic::ExtraClosing { count, delimiter } => {
                write!(f, "Extra {count} closing '{delimiter}'")
            }
            Diagnostic::PossiblyMissingSemicolon { line } => {
                write!(f, "Line {line}: possibly missing semicolon")
            }
            Diagnostic::InconsistentIndentation { line } => {
                write!(f, "Line {line}: inconsistent indentation")
            }
        }
    }
}

/// Count raw occurrences of `ch` across the whole source.
///
/// Deliberately counts characters inside strings and comments too; the
/// balance check is a documented heuristic, not a parser.
pub(crate) fn count_char(source: &str, ch: char) -> usize {
    source.chars().filter(|&c| c == ch).count()
}

/// True when a trimmed C/Java line looks like a statement that should end
/// with a terminator but does not. Shared with the corrector so detection
/// and repair always agree.
pub(crate) fn lacks_statement_terminator(trimmed: &str) -> bool {
    if trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with('#')
    {
        return false;
    }
    if trimmed.ends_with(';') || trimmed.ends_with('{') || trimmed.ends_with('}') {
        return false;
    }
    if STATEMENT_PREFIXES.iter().any(|kw| trimmed.starts_with(kw)) {
        return false;
    }
    !trimmed.contains('{') && !trimmed.contains('}')
}

/// Leading-whitespace run length in characters, or 0 for unindented lines.
fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Run all structural checks over `source` and its scanned `tokens`.
///
/// Diagnostics come out in a fixed category order (string/comment
/// termination, delimiter balance, statement terminators, indentation), and
/// in source order within each category, so output is stable across runs.
pub fn detect(source: &str, tokens: &[Token], language: Language) -> Vec<Diagnostic> {
    let profile = language.profile();
    let mut diagnostics = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::String => {
                let first = token.text.chars().next();
                let last = token.text.chars().last();
                let opens_with_quote =
                    matches!(first, Some('"') | Some('\'') | Some('`'));
                if opens_with_quote && first != last {
                    diagnostics.push(Diagnostic::UnclosedString {
                        line: token.line,
                        column: token.column,
                    });
                }
            }
            TokenKind::CommentBlock => {
                if !token.text.ends_with("*/") {
                    diagnostics.push(Diagnostic::UnterminatedBlockComment {
                        line: token.line,
                        column: token.column,
                    });
                }
            }
            _ => {}
        }
    }

    // Indentation-delimited languages get no bracket-balance check.
    if !profile.indent_blocks {
        for (open, close) in BRACKET_PAIRS {
            let opens = count_char(source, open);
            let closes = count_char(source, close);
            if opens > closes {
                diagnostics.push(Diagnostic::MissingClosing {
                    count: opens - closes,
                    delimiter: close,
                });
            } else if closes > opens {
                diagnostics.push(Diagnostic::ExtraClosing {
                    count: closes - opens,
                    delimiter: close,
                });
            }
        }
    }

    if language == Language::C || language == Language::Java {
        for (idx, line) in source.lines().enumerate() {
            if lacks_statement_terminator(line.trim()) {
                diagnostics.push(Diagnostic::PossiblyMissingSemicolon { line: idx + 1 });
            }
        }
    }

    if profile.indent_blocks {
        for (idx, line) in source.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let indent = leading_whitespace_len(line);
            if indent > 0 && indent % 4 != 0 && indent % 2 != 0 {
                diagnostics.push(Diagnostic::InconsistentIndentation { line: idx + 1 });
            }
        }
    }

    diagnostics
}
