//! Supported source languages and their lexical profiles.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A source language the analyzer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    C,
    Java,
    Python,
    JavaScript,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Lexical feature set for one language.
///
/// Profiles are fixed `'static` data; every scan/detect/correct decision that
/// varies by language goes through these flags rather than re-comparing tags.
pub struct Profile {
    /// Exact-match keyword set (case-sensitive).
    pub keywords: &'static [&'static str],
    /// `//` comments run to end of line.
    pub slash_line_comments: bool,
    /// `/* */` block comments.
    pub slash_block_comments: bool,
    /// `#` starts a comment running to end of line.
    pub hash_comments: bool,
    /// `#` starts a preprocessor directive running to end of line.
    pub hash_directives: bool,
    /// Blocks are delimited by indentation, not braces.
    pub indent_blocks: bool,
    /// Backtick-quoted string literals.
    pub backtick_strings: bool,
    /// `@` may start an identifier (decorators).
    pub decorators: bool,
}

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if", "int",
    "long", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile",
    "while",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break",
    "class", "continue", "def", "del", "elif", "else", "except", "finally",
    "for", "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
    "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
];

const JAVASCRIPT_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "return", "function", "const", "let", "var",
    "import", "from", "export", "class", "extends", "new", "try", "catch",
    "finally", "switch", "case", "break", "continue", "default", "throw",
    "await", "async",
];

const C_PROFILE: Profile = Profile {
    keywords: C_KEYWORDS,
    slash_line_comments: true,
    slash_block_comments: true,
    hash_comments: false,
    hash_directives: true,
    indent_blocks: false,
    backtick_strings: false,
    decorators: false,
};

const JAVA_PROFILE: Profile = Profile {
    keywords: JAVA_KEYWORDS,
    slash_line_comments: true,
    slash_block_comments: true,
    hash_comments: false,
    hash_directives: false,
    indent_blocks: false,
    backtick_strings: false,
    decorators: false,
};

const PYTHON_PROFILE: Profile = Profile {
    keywords: PYTHON_KEYWORDS,
    slash_line_comments: false,
    slash_block_comments: false,
    hash_comments: true,
    hash_directives: false,
    indent_blocks: true,
    backtick_strings: false,
    decorators: true,
};

const JAVASCRIPT_PROFILE: Profile = Profile {
    keywords: JAVASCRIPT_KEYWORDS,
    slash_line_comments: true,
    slash_block_comments: true,
    hash_comments: false,
    hash_directives: false,
    indent_blocks: false,
    backtick_strings: true,
    decorators: false,
};

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 4] = [
        Language::C,
        Language::Java,
        Language::Python,
        Language::JavaScript,
    ];

    /// The lowercase tag used on the wire and in reports.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Java => "java",
            Language::Python => "python",
            Language::JavaScript => "javascript",
        }
    }

    /// Parse a language tag. Unknown tags fall back to the most permissive
    /// profile (JavaScript) rather than failing, so analysis is always
    /// available.
    pub fn from_tag(tag: &str) -> Language {
        match tag.to_lowercase().as_str() {
            "c" => Language::C,
            "java" => Language::Java,
            "python" | "py" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            _ => Language::JavaScript,
        }
    }

    /// Guess a language from a file extension.
    ///
    /// Returns `None` for unrecognized extensions; callers fall back to the
    /// default profile via [`Language::from_tag`].
    pub fn from_path(path: &Path) -> Option<Language> {
        match path.extension()?.to_str()? {
            "c" | "h" => Some(Language::C),
            "java" => Some(Language::Java),
            "py" => Some(Language::Python),
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// The immutable lexical profile for this language.
    pub fn profile(&self) -> &'static Profile {
        match self {
            Language::C => &C_PROFILE,
            Language::Java => &JAVA_PROFILE,
            Language::Python => &PYTHON_PROFILE,
            Language::JavaScript => &JAVASCRIPT_PROFILE,
        }
    }

    /// A small built-in example snippet for this language.
    pub fn sample(&self) -> &'static str {
        match self {
            Language::C => {
                "// C example\n#include <stdio.h>\n\nint main() {\n    int x = 10;\n    printf(\"Hello, World! %d\\n\", x);\n    return 0;\n}"
            }
            Language::Java => {
                "// Java example\npublic class HelloWorld {\n    public static void main(String[] args) {\n        int x = 10;\n        System.out.println(\"Hello, World! \" + x);\n    }\n}"
            }
            Language::Python => {
                "# Python example\ndef hello(name):\n    x = 10\n    print(f\"Hello, {name}! {x}\")\n\nhello(\"World\")"
            }
            Language::JavaScript => {
                "// JavaScript example\nfunction hello(name) {\n    const x = 10;\n    console.log(\"Hello, \" + name + \"! \" + x);\n}\nhello(\"World\");"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_tag_known() {
        assert_eq!(Language::from_tag("c"), Language::C);
        assert_eq!(Language::from_tag("Java"), Language::Java);
        assert_eq!(Language::from_tag("PYTHON"), Language::Python);
        assert_eq!(Language::from_tag("javascript"), Language::JavaScript);
    }

    #[test]
    fn test_from_tag_aliases() {
        assert_eq!(Language::from_tag("py"), Language::Python);
        assert_eq!(Language::from_tag("js"), Language::JavaScript);
    }

    #[test]
    fn test_from_tag_unknown_falls_back() {
        assert_eq!(Language::from_tag("cobol"), Language::JavaScript);
        assert_eq!(Language::from_tag(""), Language::JavaScript);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            Language::from_path(&PathBuf::from("main.c")),
            Some(Language::C)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("util.h")),
            Some(Language::C)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("App.java")),
            Some(Language::Java)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("tool.py")),
            Some(Language::Python)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("index.mjs")),
            Some(Language::JavaScript)
        );
        assert_eq!(Language::from_path(&PathBuf::from("notes.txt")), None);
        assert_eq!(Language::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_display_tag() {
        assert_eq!(format!("{}", Language::C), "c");
        assert_eq!(format!("{}", Language::JavaScript), "javascript");
    }

    #[test]
    fn test_profile_flags() {
        assert!(Language::C.profile().hash_directives);
        assert!(!Language::C.profile().hash_comments);
        assert!(Language::Python.profile().hash_comments);
        assert!(Language::Python.profile().indent_blocks);
        assert!(Language::JavaScript.profile().backtick_strings);
        assert!(!Language::Java.profile().hash_directives);
    }

    #[test]
    fn test_keyword_membership() {
        assert!(Language::C.profile().keywords.contains(&"sizeof"));
        assert!(Language::Java.profile().keywords.contains(&"synchronized"));
        assert!(Language::Python.profile().keywords.contains(&"elif"));
        assert!(Language::JavaScript.profile().keywords.contains(&"function"));
        // Case-sensitive, exact match only.
        assert!(!Language::Python.profile().keywords.contains(&"true"));
        assert!(Language::Python.profile().keywords.contains(&"True"));
    }

    #[test]
    fn test_samples_nonempty() {
        for lang in Language::ALL {
            assert!(!lang.sample().is_empty());
        }
    }
}
