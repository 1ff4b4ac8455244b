// ekler-roots: dump the root variants generated from a lexicon.
//
// A debugging tool: shows, for each lexeme, every surface variant the root
// generator produces, with its attributes and phonetic expectations.
//
// Usage:
//   ekler-roots [-d LEXICON_PATH]
//
// Options:
//   -d, --lexicon PATH   Lexicon file or directory containing lexicon.txt
//   -h, --help           Print help

use std::io::{self, Write};

use ekler_parser::lexicon::root_generator;

fn main() {
    ekler_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = ekler_cli::parse_lexicon_path(&args);

    if ekler_cli::wants_help(&args) {
        println!("ekler-roots: dump root variants generated from a lexicon.");
        println!();
        println!("Usage: ekler-roots [-d LEXICON_PATH]");
        println!();
        println!("Options:");
        println!("  -d, --lexicon PATH   Lexicon file or directory containing lexicon.txt");
        println!("  -h, --help           Print this help");
        return;
    }

    let lexemes = ekler_cli::load_lexemes(lexicon_path.as_deref())
        .unwrap_or_else(|e| ekler_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for lexeme in &lexemes {
        let attrs: Vec<&str> = lexeme.attributes.iter().map(|a| a.as_str()).collect();
        let _ = writeln!(
            out,
            "{} [{}{}] ({})",
            lexeme.lemma,
            lexeme.primary_pos,
            lexeme
                .secondary_pos
                .map(|s| format!(", {s}"))
                .unwrap_or_default(),
            attrs.join(", ")
        );
        for root in root_generator::generate(lexeme) {
            let expectations: Vec<String> =
                root.expectations.iter().map(|e| format!("{e:?}")).collect();
            let _ = writeln!(
                out,
                "  {} {}",
                root.text,
                if expectations.is_empty() {
                    String::new()
                } else {
                    format!("(expects {})", expectations.join(", "))
                }
            );
        }
    }
}
