// ekler-cli: shared utilities for the command-line tools.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use ekler_core::lexeme::Lexeme;
use ekler_graph::basic::basic_suffix_graph;
use ekler_parser::lexicon::loader;
use ekler_parser::lexicon::root_generator::{self, RootMap};
use ekler_parser::parser::ContextFreeMorphologicalParser;
use ekler_parser::root_finder::{
    ProperNounFromApostropheRootFinder, ProperNounWithoutApostropheRootFinder, RootFinder,
    WordRootFinder,
};

/// Default lexicon file name.
const LEXICON_FILE: &str = "lexicon.txt";

/// Initialize logging from the environment (RUST_LOG), defaulting to
/// warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Locate a lexicon file and build a ready-to-use parser.
///
/// Search order:
/// 1. `lexicon_path` argument (a file, or a directory containing lexicon.txt)
/// 2. `EKLER_LEXICON_PATH` environment variable
/// 3. `~/.ekler/lexicon.txt`
/// 4. `/usr/share/ekler/lexicon.txt`
/// 5. Current working directory
pub fn load_parser(lexicon_path: Option<&str>) -> Result<ContextFreeMorphologicalParser, String> {
    let lexemes = load_lexemes(lexicon_path)?;

    let mut roots = Vec::new();
    for lexeme in &lexemes {
        roots.extend(root_generator::generate(lexeme));
    }
    let root_map = Arc::new(RootMap::build(roots));

    let graph = basic_suffix_graph().map_err(|e| format!("invalid grammar: {e}"))?;

    let finders: Vec<Box<dyn RootFinder>> = vec![
        Box::new(WordRootFinder::new(root_map)),
        Box::new(ProperNounFromApostropheRootFinder),
        Box::new(ProperNounWithoutApostropheRootFinder),
    ];
    Ok(ContextFreeMorphologicalParser::new(Arc::new(graph), finders))
}

/// Locate and load the lexicon file from the search paths.
pub fn load_lexemes(lexicon_path: Option<&str>) -> Result<Vec<Arc<Lexeme>>, String> {
    let search_paths = build_search_paths(lexicon_path);

    for candidate in &search_paths {
        let file = if candidate.is_dir() {
            candidate.join(LEXICON_FILE)
        } else {
            candidate.clone()
        };
        if file.is_file() {
            return loader::load_from_path(&file)
                .map_err(|e| format!("{}: {}", file.display(), e));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        LEXICON_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

fn build_search_paths(lexicon_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = lexicon_path {
        paths.push(PathBuf::from(p));
    }

    // 2. EKLER_LEXICON_PATH environment variable
    if let Ok(env_path) = std::env::var("EKLER_LEXICON_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".ekler"));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/ekler"));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--lexicon=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(lexicon_path, remaining_args)`.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lexicon_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lexicon=") {
            lexicon_path = Some(val.to_string());
        } else if arg == "--lexicon" || arg == "-d" {
            if i + 1 < args.len() {
                lexicon_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lexicon_path, remaining)
}

/// Check whether the arguments ask for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_equals_form() {
        let (path, rest) = parse_lexicon_path(&strings(&["--lexicon=/tmp/lex.txt", "kitaba"]));
        assert_eq!(path.as_deref(), Some("/tmp/lex.txt"));
        assert_eq!(rest, strings(&["kitaba"]));
    }

    #[test]
    fn parses_short_form_with_value() {
        let (path, rest) = parse_lexicon_path(&strings(&["-d", "/tmp", "kitaba"]));
        assert_eq!(path.as_deref(), Some("/tmp"));
        assert_eq!(rest, strings(&["kitaba"]));
    }

    #[test]
    fn no_flag_means_no_path() {
        let (path, rest) = parse_lexicon_path(&strings(&["kitaba", "evler"]));
        assert_eq!(path, None);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn help_detection() {
        assert!(wants_help(&strings(&["-h"])));
        assert!(wants_help(&strings(&["kitaba", "--help"])));
        assert!(!wants_help(&strings(&["kitaba"])));
    }

    #[test]
    fn missing_lexicon_reports_search_paths() {
        let err = load_lexemes(Some("/nonexistent/path/hopefully")).unwrap_err();
        assert!(err.contains("lexicon.txt"));
        assert!(err.contains("/nonexistent/path/hopefully"));
    }
}
