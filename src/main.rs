use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use lexa::commands::{check, fix, review, sample, scan};
use lexa::completions::{generate_completions, Shell};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "lexa")]
#[command(about = "Multi-language lexical analysis CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize source and print the token stream
    Scan {
        /// Source file path, or '-' for stdin
        input: String,

        /// Source language (c, java, python, javascript); detected from the
        /// file extension when omitted, unknown tags fall back to javascript
        #[arg(short, long)]
        language: Option<String>,

        /// Emit tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Detect lexical issues (unbalanced delimiters, unterminated literals,
    /// heuristic statement and indentation checks)
    ///
    /// Delimiter balance counts raw characters across the whole source, so
    /// brackets inside strings and comments are counted too. This is a
    /// deliberate heuristic, not a parse.
    Check {
        /// Source file path, or '-' for stdin
        input: String,

        /// Source language (c, java, python, javascript)
        #[arg(short, long)]
        language: Option<String>,

        /// Emit diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply best-effort repairs and emit the corrected source
    Fix {
        /// Source file path, or '-' for stdin
        input: String,

        /// Source language (c, java, python, javascript)
        #[arg(short, long)]
        language: Option<String>,

        /// Write the corrected source to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rewrite the input file in place
        #[arg(long)]
        write: bool,
    },

    /// Run local checks plus a remote AI review (review failure is non-fatal)
    Review {
        /// Source file path, or '-' for stdin
        input: String,

        /// Source language (c, java, python, javascript)
        #[arg(short, long)]
        language: Option<String>,

        /// Review service URL (overrides LEXA_REVIEW_URL and the default)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Print a built-in example snippet for a language
    Sample {
        /// Language tag (c, java, python, javascript)
        language: String,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            language,
            json,
        } => scan::execute(input, language, json),
        Commands::Check {
            input,
            language,
            json,
        } => check::execute(input, language, json),
        Commands::Fix {
            input,
            language,
            output,
            write,
        } => fix::execute(input, language, output, write),
        Commands::Review {
            input,
            language,
            endpoint,
        } => review::execute(input, language, endpoint),
        Commands::Sample { language } => sample::execute(language),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
