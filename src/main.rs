use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordwright::config::{NounConfig, QuantityOptions};
use wordwright::nouns::NounRegistry;
use wordwright::transform::{self, DEFAULT_MARKER};
use wordwright::{DigitSequence, Fraction};

#[derive(Parser, Debug)]
#[command(name = "wordwright")]
#[command(about = "Case conversion, pluralization, ordinals, number wording and truncation")]
#[command(version)]
struct Args {
    /// JSON file with extra irregular/defective nouns
    #[arg(long, global = true)]
    nouns: Option<PathBuf>,

    /// Print {"input", "output"} JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Integer to English words (accepts up to 96-bit magnitudes)
    Words {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Ordinal form of an integer
    Ordinal {
        #[arg(allow_hyphen_values = true)]
        number: i128,
        /// Spell the ordinal out ("twenty-first" instead of "21st")
        #[arg(long)]
        words: bool,
    },
    /// Closest smallest-denominator fraction for a value in [0, 1)
    Fraction {
        value: f64,
        #[arg(long)]
        accuracy: Option<f64>,
    },
    /// Quantity with a fractional part, in words or as a mixed number
    Quantity {
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[arg(long)]
        accuracy: Option<f64>,
        /// Print "2 1/2" instead of "two and one half"
        #[arg(long)]
        mixed: bool,
    },
    /// Pluralize the last word
    Plural { text: String },
    /// Singularize the last word
    Singular { text: String },
    /// Change letter casing
    Case { mode: CaseMode, text: String },
    /// Shorten text to a length or a word count
    Truncate {
        text: String,
        #[arg(long)]
        length: usize,
        /// Count words instead of characters
        #[arg(long)]
        words: bool,
        #[arg(long, default_value = DEFAULT_MARKER)]
        marker: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CaseMode {
    Title,
    Sentence,
    Upper,
    Lower,
    Capitalize,
}

#[derive(Serialize)]
struct Output<'a> {
    input: &'a str,
    output: &'a str,
}

fn run(
    command: &Command,
    registry: &NounRegistry,
    options: QuantityOptions,
) -> Result<(String, String)> {
    let result = match command {
        Command::Words { number } => {
            let digits: DigitSequence = number.parse()?;
            (number.clone(), wordwright::to_words(&digits))
        }
        Command::Ordinal { number, words } => {
            let output = if *words {
                transform::ordinal_words(*number)?
            } else {
                transform::ordinalize(*number)
            };
            (number.to_string(), output)
        }
        Command::Fraction { value, accuracy } => {
            let accuracy = accuracy.unwrap_or(options.accuracy);
            (value.to_string(), Fraction::from_real(*value, accuracy)?.to_string())
        }
        Command::Quantity { value, accuracy, mixed } => {
            let accuracy = accuracy.unwrap_or(options.accuracy);
            let output = if *mixed {
                transform::quantity_to_mixed(*value, accuracy)?
            } else {
                transform::quantity_to_words(registry, *value, accuracy)?
            };
            (value.to_string(), output)
        }
        Command::Plural { text } => (text.clone(), transform::pluralize(registry, text)),
        Command::Singular { text } => (text.clone(), transform::singularize(registry, text)),
        Command::Case { mode, text } => {
            let output = match mode {
                CaseMode::Title => transform::to_title_case(text),
                CaseMode::Sentence => transform::to_sentence_case(text),
                CaseMode::Upper => transform::to_upper_case(text),
                CaseMode::Lower => transform::to_lower_case(text),
                CaseMode::Capitalize => transform::capitalize(text),
            };
            (text.clone(), output)
        }
        Command::Truncate { text, length, words, marker } => {
            let output = if *words {
                transform::truncate_words(text, *length, marker)
            } else {
                transform::truncate(text, *length, marker)?
            };
            (text.clone(), output)
        }
    };
    Ok(result)
}

fn main() -> Result<()> {
    // WHY: structured JSON logs on stderr keep stdout for transform output
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let registry = NounRegistry::english();
    if let Some(path) = &args.nouns {
        let report = NounConfig::load(path)?.apply(&registry);
        info!(added = report.added, rejected = ?report.rejected, "Applied noun config");
        if !report.rejected.is_empty() {
            eprintln!(
                "Ignored {} noun entries: {}",
                report.rejected.len(),
                report.rejected.join(", ")
            );
        }
    }

    let (input, output) = run(&args.command, &registry, QuantityOptions::default())?;

    if args.json {
        println!("{}", serde_json::to_string(&Output { input: &input, output: &output })?);
    } else {
        println!("{output}");
    }
    Ok(())
}
