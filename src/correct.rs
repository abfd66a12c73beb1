//! Best-effort heuristic repair of common lexical issues.
//!
//! Repairs are textual and intentionally modest: the output is not
//! guaranteed to be syntactically valid, only closer to balanced.

use crate::detect::{count_char, lacks_statement_terminator};
use crate::language::Language;

/// Closing-bracket padding order.
const BRACKET_PAIRS: [(char, char); 3] = [('{', '}'), ('(', ')'), ('[', ']')];

/// Produce a repaired copy of `source`.
///
/// Three passes over a fresh line vector: close a lone unbalanced quote on
/// each line, append missing statement terminators (C/Java), then pad
/// missing closing brackets as trailing lines. Bracket counts come from the
/// original source, before any line edits. When both quote kinds are
/// unbalanced on one line the repair is ambiguous and the line is left
/// alone.
pub fn correct(source: &str, language: Language) -> String {
    let profile = language.profile();
    let mut lines: Vec<String> = source.split('\n').map(str::to_string).collect();

    for line in &mut lines {
        let singles = count_char(line, '\'');
        let doubles = count_char(line, '"');
        if singles % 2 == 1 && doubles % 2 == 0 {
            line.push('\'');
        } else if doubles % 2 == 1 && singles % 2 == 0 {
            line.push('"');
        }
    }

    if language == Language::C || language == Language::Java {
        for line in &mut lines {
            if lacks_statement_terminator(line.trim()) {
                let trimmed_len = line.trim_end().len();
                line.truncate(trimmed_len);
                line.push(';');
            }
        }
    }

    if !profile.indent_blocks {
        for (open, close) in BRACKET_PAIRS {
            let opens = count_char(source, open);
            let closes = count_char(source, close);
            for _ in closes..opens {
                lines.push(close.to_string());
            }
        }
    }

    lines.join("\n")
}
