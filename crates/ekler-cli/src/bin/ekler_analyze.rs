// ekler-analyze: morphological analysis of words from stdin or arguments.
//
// Reads words (one per line from stdin, or from the argument list) and
// prints every analysis of each word.
//
// Usage:
//   ekler-analyze [-d LEXICON_PATH] [-f FORMAT] [WORD...]
//
// Options:
//   -d, --lexicon PATH   Lexicon file or directory containing lexicon.txt
//   -f, --format FORMAT  Output format: tests (default), simple, parseset
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use ekler_parser::formatter;
use ekler_parser::parser::ContextFreeMorphologicalParser;

#[derive(Clone, Copy)]
enum OutputFormat {
    Tests,
    Simple,
    Parseset,
}

fn main() {
    ekler_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = ekler_cli::parse_lexicon_path(&args);
    let (format, args) = parse_format(&args);

    if ekler_cli::wants_help(&args) {
        println!("ekler-analyze: morphological analysis of Turkish words.");
        println!();
        println!("Usage: ekler-analyze [-d LEXICON_PATH] [-f FORMAT] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --lexicon PATH   Lexicon file or directory containing lexicon.txt");
        println!("  -f, --format FORMAT  Output format: tests (default), simple, parseset");
        println!("  -h, --help           Print this help");
        return;
    }

    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let parser = ekler_cli::load_parser(lexicon_path.as_deref())
        .unwrap_or_else(|e| ekler_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            analyze_word(word, &parser, format, &mut out);
        }
    } else {
        for word in &words {
            analyze_word(word, &parser, format, &mut out);
        }
    }
}

fn analyze_word(
    word: &str,
    parser: &ContextFreeMorphologicalParser,
    format: OutputFormat,
    out: &mut io::BufWriter<io::StdoutLock<'_>>,
) {
    let analyses = parser.parse(word);
    if analyses.is_empty() {
        let _ = writeln!(out, "{word}: (no analysis)");
        return;
    }
    let _ = writeln!(out, "{word}:");
    for analysis in &analyses {
        let rendered = match format {
            OutputFormat::Tests => formatter::format_for_tests(analysis),
            OutputFormat::Simple => formatter::format_simple_parseset(analysis),
            OutputFormat::Parseset => formatter::format_parseset(analysis),
        };
        let _ = writeln!(out, "  {rendered}");
    }
}

/// Parse a `-f FORMAT` / `--format=FORMAT` argument.
fn parse_format(args: &[String]) -> (OutputFormat, Vec<String>) {
    let mut format = OutputFormat::Tests;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let value = if let Some(v) = arg.strip_prefix("--format=") {
            Some(v.to_string())
        } else if arg == "--format" || arg == "-f" {
            if i + 1 < args.len() {
                skip_next = true;
                Some(args[i + 1].clone())
            } else {
                eprintln!("error: {arg} requires a value");
                std::process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
            None
        };

        if let Some(value) = value {
            format = match value.as_str() {
                "tests" => OutputFormat::Tests,
                "simple" => OutputFormat::Simple,
                "parseset" => OutputFormat::Parseset,
                other => {
                    eprintln!("error: unknown format '{other}' (tests, simple, parseset)");
                    std::process::exit(1);
                }
            };
        }
    }

    (format, remaining)
}
