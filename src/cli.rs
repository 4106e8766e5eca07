//! Command-line arguments and the diff driver behind `main`

use crate::config::{DiffMode, OutputFormat, Settings};
use crate::diff::{
    DiffToken, LineRow, calculate_stats, compute_line_diff, compute_word_diff, group_into_rows,
};
use crate::input::{InputError, InputPair};
use crate::render;
use clap::Parser;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Compare two instruction texts word by word
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "word-diff", version)]
pub struct DiffArgs {
    /// Original text, or a path to it
    pub original: String,

    /// Updated text, or a path to it
    pub updated: String,

    /// Treat ORIGINAL and UPDATED as literal text instead of file paths
    #[arg(long = "text")]
    pub literal: bool,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Diff granularity (overrides the config file)
    #[arg(long, value_enum)]
    pub mode: Option<DiffMode>,

    /// Append a summary of added and removed words
    #[arg(long)]
    pub stats: bool,
}

/// Run one diff and return the text to print
pub fn run(args: &DiffArgs, settings: &Settings) -> Result<String, CliError> {
    let input = InputPair::from_args(&args.original, &args.updated, args.literal)?;
    let format = args.format.unwrap_or(settings.output_format);
    let mode = args.mode.unwrap_or(settings.mode);
    debug!("Running {:?} diff with {:?} output", mode, format);

    let (mut output, tokens) = match mode {
        DiffMode::Words => {
            let tokens = compute_word_diff(&input.original, &input.updated);
            let output = match format {
                OutputFormat::Plain => render::render_plain(&tokens, &settings.markers),
                OutputFormat::Json => render::render_json(&tokens)?,
            };
            (output, tokens)
        }
        DiffMode::Lines => {
            let rows = group_into_rows(&compute_line_diff(&input.original, &input.updated));
            let output = match format {
                OutputFormat::Plain => render::render_rows_plain(&rows, &settings.markers),
                OutputFormat::Json => render::render_rows_json(&rows)?,
            };
            (output, row_tokens(&rows))
        }
    };

    if args.stats || settings.show_stats {
        let stats = calculate_stats(&tokens);
        output.push('\n');
        output.push_str(&render::render_stats(&stats));
    }

    Ok(output)
}

// Unchanged lines contribute their words as same tokens.
fn row_tokens(rows: &[LineRow]) -> Vec<DiffToken> {
    rows.iter()
        .flat_map(|row| match row {
            LineRow::Unchanged { line } => compute_word_diff(line, line),
            LineRow::Changed { words, .. } => words.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(list: &[&str]) -> DiffArgs {
        DiffArgs::try_parse_from(std::iter::once("word-diff").chain(list.iter().copied()))
            .unwrap()
    }

    fn parse_err(list: &[&str]) -> clap::Error {
        DiffArgs::try_parse_from(std::iter::once("word-diff").chain(list.iter().copied()))
            .unwrap_err()
    }

    #[test]
    fn parses_flags_and_positionals() {
        let args = parse(&[
            "--text", "a b", "--format", "json", "a c", "--mode", "lines", "--stats",
        ]);
        assert_eq!(args.original, "a b");
        assert_eq!(args.updated, "a c");
        assert!(args.literal);
        assert!(args.stats);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.mode, Some(DiffMode::Lines));
    }

    #[test]
    fn defaults_leave_settings_in_charge() {
        let args = parse(&["old.txt", "new.txt"]);
        assert!(!args.literal);
        assert!(!args.stats);
        assert_eq!(args.format, None);
        assert_eq!(args.mode, None);
    }

    #[test]
    fn double_dash_allows_flag_like_text() {
        let args = parse(&["--text", "--", "--format is the flag", "use json"]);
        assert_eq!(args.original, "--format is the flag");
        assert_eq!(args.updated, "use json");
        assert!(args.literal);
    }

    #[test]
    fn help_is_reported_by_clap() {
        assert_eq!(parse_err(&["--help"]).kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn usage_errors() {
        let cases: [&[&str]; 5] = [
            &["only-one"],
            &["a", "b", "c"],
            &["--bogus", "a", "b"],
            &["--format", "xml", "a", "b"],
            &[],
        ];
        for bad in cases {
            let err = parse_err(bad);
            assert_eq!(err.exit_code(), 2, "{:?}", bad);
        }
    }

    #[test]
    fn run_words_plain_with_settings_default() {
        let args = parse(&["--text", "a b c", "a c"]);
        let out = run(&args, &Settings::default()).unwrap();
        assert_eq!(out, "a [-b-] c");
    }

    #[test]
    fn run_words_json() {
        let args = parse(&["--text", "--format", "json", "", "hello world"]);
        let out = run(&args, &Settings::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "text": "hello", "kind": "add" },
                { "text": "world", "kind": "add" }
            ])
        );
    }

    #[test]
    fn settings_pick_mode_and_stats() {
        let settings = Settings {
            mode: DiffMode::Lines,
            show_stats: true,
            ..Settings::default()
        };
        let args = parse(&["--text", "keep\nsay hi", "keep\nsay hello"]);
        let out = run(&args, &settings).unwrap();
        assert_eq!(
            out,
            "  keep\n- say hi\n+ say hello\n~ say [-hi-] {+hello+}\n\
             2 unchanged, 1 added (5 chars), 1 removed (2 chars)"
        );
    }

    #[test]
    fn flag_overrides_settings() {
        let settings = Settings {
            output_format: OutputFormat::Json,
            ..Settings::default()
        };
        let args = parse(&["--text", "--format", "plain", "x", "y"]);
        assert_eq!(run(&args, &settings).unwrap(), "[-x-] {+y+}");
    }

    #[test]
    fn missing_file_is_input_error() {
        let args = parse(&["/definitely/not/here.txt", "/nor/here.txt"]);
        let err = run(&args, &Settings::default()).unwrap_err();
        assert!(matches!(err, CliError::Input(_)));
    }
}
