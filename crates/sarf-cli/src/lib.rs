// sarf-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use sarf::{ArabicAnalyzer, DictionaryStore};
use sarf_dict::store::STEMS_FILE;

/// Default dictionary directory name within installed packages.
const DICT_SUBDIR: &str = "dictionaries";

/// Search for the dictionary files and build an analyzer.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SARF_DICT_PATH` environment variable
/// 3. `~/.sarf/dictionaries`
/// 4. `/usr/share/sarf/dictionaries`
/// 5. Current working directory (looks for `dictStems` directly)
pub fn load_analyzer(dict_path: Option<&str>) -> Result<ArabicAnalyzer, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        if dir.join(STEMS_FILE).is_file() {
            return DictionaryStore::load_dir(dir)
                .map(ArabicAnalyzer::new)
                .map_err(|e| format!("failed to load dictionary from {}: {e}", dir.display()));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        STEMS_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. SARF_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("SARF_DICT_PATH") {
        paths.push(PathBuf::from(&env_path));
        paths.push(PathBuf::from(&env_path).join(DICT_SUBDIR));
    }

    // 3. Home directory path
    if let Some(home) = home_dir() {
        paths.push(home.join(".sarf").join(DICT_SUBDIR));
    }

    // 4. System path
    paths.push(PathBuf::from("/usr/share/sarf").join(DICT_SUBDIR));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
