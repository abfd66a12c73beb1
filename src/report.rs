//! Terminal rendering for tokens, diagnostics, and review output.

use crate::detect::Diagnostic;
use crate::language::Language;
use crate::scanner::{Token, TokenKind};
use colored::{ColoredString, Colorize};

fn kind_badge(kind: TokenKind) -> ColoredString {
    let label = kind.to_string();
    match kind {
        TokenKind::Keyword => label.blue().bold(),
        TokenKind::String => label.yellow(),
        TokenKind::Number => label.green(),
        TokenKind::CommentLine | TokenKind::CommentBlock => label.bright_black(),
        TokenKind::Preprocessor => label.magenta(),
        TokenKind::Operator => label.normal(),
        TokenKind::Punctuation => label.normal(),
        TokenKind::Identifier => label.cyan(),
        TokenKind::Unknown => label.red(),
    }
}

/// Print the token table: kind badge, escaped text, dimmed position.
pub fn print_tokens(tokens: &[Token]) {
    if tokens.is_empty() {
        println!("{} No tokens (input is empty or whitespace)", "ℹ".blue());
        return;
    }

    println!(
        "{:14} {:40} {}",
        "KIND".bold(),
        "TEXT".bold(),
        "POSITION".bold()
    );
    println!("{}", "─".repeat(64));

    for token in tokens {
        let escaped = token.text.replace('\n', "\\n");
        println!(
            "{:14} {:40} {}",
            kind_badge(token.kind),
            escaped,
            format!("{}:{}", token.line, token.column).dimmed()
        );
    }
    println!();
    println!("{} tokens", tokens.len());
}

/// Print the detection summary: a clean bill of health or a bulleted list.
pub fn print_summary(language: Language, diagnostics: &[Diagnostic]) {
    let lang = language.tag().to_uppercase();
    if diagnostics.is_empty() {
        println!(
            "{} No lexical issues detected in your {} code.",
            "✓".green(),
            lang
        );
        println!();
        println!("The code appears to be syntactically correct at the lexical level.");
    } else {
        println!(
            "{} Detected lexical issues in your {} code:",
            "⚠".yellow(),
            lang
        );
        println!();
        for diagnostic in diagnostics {
            println!("  {} {}", "•".yellow(), diagnostic);
        }
    }
}

/// Print a non-fatal notice that the remote review was unavailable.
/// Local results stand on their own; the review is advisory only.
pub fn print_review_unavailable(error: &crate::review::ReviewError) {
    eprintln!("{} AI review unavailable: {}", "⚠".yellow(), error);
    eprintln!("  Local analysis above is unaffected.");
}
