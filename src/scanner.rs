//! Character-class scanner producing positioned tokens.
//!
//! A single left-to-right pass with one cursor and fixed-offset lookahead.
//! Scanning is total: every non-whitespace character lands in exactly one
//! token, and anything unrecognized becomes a one-character `unknown` token
//! instead of an error.

use crate::language::Language;
use serde::Serialize;
use std::fmt;

/// Classification of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    CommentLine,
    CommentBlock,
    Preprocessor,
    Operator,
    Punctuation,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::CommentLine => "comment_line",
            TokenKind::CommentBlock => "comment_block",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One lexical unit: the exact consumed text plus its 1-based start position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

/// Multi-character operators, longest match first (3 chars, then 2).
const MULTI_OPS: &[&str] = &[
    "===", "!==", "==", "!=", "<=", ">=", "&&", "||", "=>", "++", "--", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "->", "::",
];

const SINGLE_OPS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '<', '>', '!', '&', '|', '^', '~', '?',
    ':', '.', ',', ';',
];

const BRACKETS: &[char] = &['(', ')', '{', '}', '[', ']'];

/// Cursor over the source with line/column bookkeeping.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Consume one character, updating line/column. A newline bumps the line
    /// and resets the column to 1.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
        Some(ch)
    }

    /// Consume and collect characters through end of line (exclusive) into
    /// `text`.
    fn take_rest_of_line(&mut self, text: &mut String) {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.bump();
        }
    }
}

/// Scan `source` into an ordered token sequence for `language`.
pub fn scan(source: &str, language: Language) -> Vec<Token> {
    let profile = language.profile();
    let mut cur = Cursor::new(source);
    let mut tokens = Vec::new();

    while let Some(ch) = cur.peek(0) {
        if ch.is_whitespace() {
            cur.bump();
            continue;
        }

        let line = cur.line;
        let column = cur.column;

        // Hash rules are mutually exclusive per profile: a comment in
        // Python, a preprocessor directive in C.
        if ch == '#' && (profile.hash_comments || profile.hash_directives) {
            let mut text = String::new();
            text.push(ch);
            cur.bump();
            cur.take_rest_of_line(&mut text);
            let kind = if profile.hash_comments {
                TokenKind::CommentLine
            } else {
                TokenKind::Preprocessor
            };
            tokens.push(Token { kind, text, line, column });
            continue;
        }

        if ch.is_ascii_alphabetic() || ch == '_' || (profile.decorators && ch == '@') {
            let mut text = String::new();
            text.push(ch);
            cur.bump();
            while let Some(c) = cur.peek(0) {
                if c.is_ascii_alphanumeric() || c == '_' {
                    text.push(c);
                    cur.bump();
                } else {
                    break;
                }
            }
            let kind = if profile.keywords.contains(&text.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token { kind, text, line, column });
            continue;
        }

        if ch.is_ascii_digit() {
            let text = scan_number(&mut cur);
            tokens.push(Token {
                kind: TokenKind::Number,
                text,
                line,
                column,
            });
            continue;
        }

        if ch == '"' || ch == '\'' || (profile.backtick_strings && ch == '`') {
            let text = scan_string(&mut cur, ch);
            tokens.push(Token {
                kind: TokenKind::String,
                text,
                line,
                column,
            });
            continue;
        }

        if profile.slash_line_comments && ch == '/' && cur.peek(1) == Some('/') {
            let mut text = String::from("//");
            cur.bump();
            cur.bump();
            cur.take_rest_of_line(&mut text);
            tokens.push(Token {
                kind: TokenKind::CommentLine,
                text,
                line,
                column,
            });
            continue;
        }

        if profile.slash_block_comments && ch == '/' && cur.peek(1) == Some('*') {
            let text = scan_block_comment(&mut cur);
            tokens.push(Token {
                kind: TokenKind::CommentBlock,
                text,
                line,
                column,
            });
            continue;
        }

        if let Some(op) = scan_multi_op(&mut cur) {
            tokens.push(Token {
                kind: TokenKind::Operator,
                text: op,
                line,
                column,
            });
            continue;
        }

        let kind = if SINGLE_OPS.contains(&ch) {
            TokenKind::Operator
        } else if BRACKETS.contains(&ch) {
            TokenKind::Punctuation
        } else {
            TokenKind::Unknown
        };
        cur.bump();
        tokens.push(Token {
            kind,
            text: ch.to_string(),
            line,
            column,
        });
    }

    tokens
}

/// Integer, optional decimal part (only when a digit immediately follows the
/// dot), optional exponent. The exponent marker is consumed whenever a digit
/// or sign follows it, even if no digits follow the sign.
fn scan_number(cur: &mut Cursor) -> String {
    let mut text = String::new();
    while let Some(c) = cur.peek(0) {
        if c.is_ascii_digit() {
            text.push(c);
            cur.bump();
        } else {
            break;
        }
    }

    if cur.peek(0) == Some('.') && cur.peek(1).is_some_and(|c| c.is_ascii_digit()) {
        text.push('.');
        cur.bump();
        while let Some(c) = cur.peek(0) {
            if c.is_ascii_digit() {
                text.push(c);
                cur.bump();
            } else {
                break;
            }
        }
    }

    if let Some(marker @ ('e' | 'E')) = cur.peek(0) {
        let next = cur.peek(1);
        if next.is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-') {
            text.push(marker);
            cur.bump();
            if let Some(sign @ ('+' | '-')) = cur.peek(0) {
                text.push(sign);
                cur.bump();
            }
            while let Some(c) = cur.peek(0) {
                if c.is_ascii_digit() {
                    text.push(c);
                    cur.bump();
                } else {
                    break;
                }
            }
        }
    }

    text
}

/// Quoted literal with backslash escapes. If the input ends before an
/// unescaped closing quote, the token ends there; its text then does not end
/// with the opening quote, which is the unterminated signal used downstream.
fn scan_string(cur: &mut Cursor, quote: char) -> String {
    let mut text = String::new();
    text.push(quote);
    cur.bump();

    let mut escaped = false;
    while let Some(c) = cur.peek(0) {
        text.push(c);
        cur.bump();
        if !escaped && c == quote {
            break;
        }
        escaped = c == '\\' && !escaped;
    }
    text
}

/// `/* ... */`, or through end of input when no close marker exists. An
/// unterminated comment's text does not end with `*/`.
fn scan_block_comment(cur: &mut Cursor) -> String {
    let mut text = String::from("/*");
    cur.bump();
    cur.bump();

    while let Some(c) = cur.peek(0) {
        if c == '*' && cur.peek(1) == Some('/') {
            break;
        }
        text.push(c);
        cur.bump();
    }
    if cur.peek(0) == Some('*') && cur.peek(1) == Some('/') {
        text.push_str("*/");
        cur.bump();
        cur.bump();
    }
    text
}

/// Longest-match lookup in the multi-character operator table: 3-character
/// lookahead first, then 2.
fn scan_multi_op(cur: &mut Cursor) -> Option<String> {
    for len in [3, 2] {
        if cur.peek(len - 1).is_none() {
            continue;
        }
        let candidate: String = (0..len).filter_map(|i| cur.peek(i)).collect();
        if MULTI_OPS.contains(&candidate.as_str()) {
            for _ in 0..len {
                cur.bump();
            }
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = scan("int count = 0", Language::C);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Number,
            ]
        );
        assert_eq!(texts(&tokens), vec!["int", "count", "=", "0"]);
    }

    #[test]
    fn test_keyword_match_is_exact() {
        // Prefix of a keyword is an identifier, not a keyword.
        let tokens = scan("interface inter", Language::Java);
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_positions_are_one_based() {
        let tokens = scan("a\n  b", Language::JavaScript);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
    }

    #[test]
    fn test_positions_monotonic() {
        let src = "int main() {\n  return 0; /* done */\n}\n";
        let tokens = scan(src, Language::C);
        let mut prev = (0usize, 0usize);
        for t in &tokens {
            assert!((t.line, t.column) > prev, "token {:?} out of order", t);
            prev = (t.line, t.column);
        }
    }

    #[test]
    fn test_scientific_notation_single_token() {
        let tokens = scan("1.5e-10", Language::C);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "1.5e-10");
    }

    #[test]
    fn test_exponent_positive_sign() {
        let tokens = scan("2E+8", Language::Java);
        assert_eq!(texts(&tokens), vec!["2E+8"]);
    }

    #[test]
    fn test_dot_without_digit_not_part_of_number() {
        let tokens = scan("1.", Language::C);
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Number, TokenKind::Operator]
        );
        assert_eq!(texts(&tokens), vec!["1", "."]);
    }

    #[test]
    fn test_bare_e_not_consumed() {
        // No digit or sign after 'e': the 'e' starts an identifier instead.
        let tokens = scan("10e)", Language::C);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Number,
                TokenKind::Identifier,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let tokens = scan(r#""say \"hi\"" x"#, Language::JavaScript);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, r#""say \"hi\"""#);
        assert_eq!(tokens[1].text, "x");
    }

    #[test]
    fn test_unterminated_string_runs_to_eof() {
        let tokens = scan("\"hello", Language::JavaScript);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "\"hello");
    }

    #[test]
    fn test_backtick_string_javascript_only() {
        let js = scan("`tpl`", Language::JavaScript);
        assert_eq!(js[0].kind, TokenKind::String);
        assert_eq!(js[0].text, "`tpl`");

        let c = scan("`tpl`", Language::C);
        assert_eq!(c[0].kind, TokenKind::Unknown);
        assert_eq!(c[0].text, "`");
    }

    #[test]
    fn test_hash_comment_python() {
        let tokens = scan("# note\nx", Language::Python);
        assert_eq!(tokens[0].kind, TokenKind::CommentLine);
        assert_eq!(tokens[0].text, "# note");
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_hash_directive_c() {
        let tokens = scan("#include <stdio.h>\n", Language::C);
        assert_eq!(tokens[0].kind, TokenKind::Preprocessor);
        assert_eq!(tokens[0].text, "#include <stdio.h>");
    }

    #[test]
    fn test_hash_is_unknown_for_java() {
        let tokens = scan("#x", Language::Java);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
        assert_eq!(tokens[0].text, "#");
    }

    #[test]
    fn test_decorator_identifier_python() {
        let tokens = scan("@staticmethod", Language::Python);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "@staticmethod");

        // Outside Python, '@' is an unknown character.
        let tokens = scan("@x", Language::Java);
        assert_eq!(tokens[0].kind, TokenKind::Unknown);
    }

    #[test]
    fn test_line_comment() {
        let tokens = scan("x // trailing\ny", Language::C);
        assert_eq!(tokens[1].kind, TokenKind::CommentLine);
        assert_eq!(tokens[1].text, "// trailing");
        assert_eq!(tokens[2].text, "y");
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let tokens = scan("/* a\nb */ x", Language::Java);
        assert_eq!(tokens[0].kind, TokenKind::CommentBlock);
        assert_eq!(tokens[0].text, "/* a\nb */");
        assert_eq!(tokens[1].text, "x");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_block_comment() {
        let tokens = scan("/* open", Language::C);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "/* open");
        assert!(!tokens[0].text.ends_with("*/"));
    }

    #[test]
    fn test_no_slash_comments_in_python() {
        let tokens = scan("// x", Language::Python);
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].text, "/");
        assert_eq!(tokens[1].text, "/");
    }

    #[test]
    fn test_operator_longest_match() {
        let tokens = scan("a===b", Language::JavaScript);
        assert_eq!(texts(&tokens), vec!["a", "===", "b"]);

        let tokens = scan("x<=y", Language::C);
        assert_eq!(texts(&tokens), vec!["x", "<=", "y"]);

        let tokens = scan("p->q::r", Language::C);
        assert_eq!(texts(&tokens), vec!["p", "->", "q", "::", "r"]);
    }

    #[test]
    fn test_punctuation_vs_operator() {
        let tokens = scan("f(x);", Language::C);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Operator,
            ]
        );
    }

    #[test]
    fn test_unknown_single_char() {
        let tokens = scan("x $ y", Language::C);
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].text, "$");
    }

    #[test]
    fn test_empty_input() {
        assert!(scan("", Language::C).is_empty());
        assert!(scan("   \n\t ", Language::Python).is_empty());
    }

    #[test]
    fn test_full_coverage_no_characters_lost() {
        // Concatenating token texts recovers the input minus whitespace.
        for lang in Language::ALL {
            let src = lang.sample();
            let tokens = scan(src, lang);
            let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
            let stripped: String = strip_untokenized_whitespace(src, &tokens);
            assert_eq!(joined, stripped, "coverage failed for {lang}");
        }
    }

    // Remove exactly the whitespace the scanner skipped between tokens,
    // keeping whitespace inside string/comment tokens.
    fn strip_untokenized_whitespace(src: &str, tokens: &[Token]) -> String {
        let chars: Vec<char> = src.chars().collect();
        let mut covered = vec![false; chars.len()];
        let mut pos = 0usize;
        for t in tokens {
            let tchars: Vec<char> = t.text.chars().collect();
            // Tokens appear in source order; find the next match.
            while pos < chars.len() {
                if chars[pos..].starts_with(&tchars[..]) {
                    for c in covered.iter_mut().skip(pos).take(tchars.len()) {
                        *c = true;
                    }
                    pos += tchars.len();
                    break;
                }
                pos += 1;
            }
        }
        chars
            .iter()
            .zip(covered.iter())
            .filter(|(_, &c)| c)
            .map(|(ch, _)| ch)
            .collect()
    }
}
