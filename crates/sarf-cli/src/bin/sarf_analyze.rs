// sarf-analyze: Morphological analysis of Arabic words from stdin.
//
// Reads lines from stdin (or takes words as arguments) and prints
// every analysis of each Arabic word: lemma, vocalization, morphology,
// grammatical category and glosses. Input may be Arabic script or
// Buckwalter transliteration.
//
// Usage:
//   sarf-analyze [-d DICT_PATH] [--arabic] [--stats] [-v] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing dictStems
//   -A, --arabic           Print vocalizations in Arabic script
//       --stats            Print run counters on exit
//   -v, --verbose          Print the romanization of each word
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use sarf::ArabicAnalyzer;
use sarf::tokenizer::{ScriptClass, script_runs};

struct Options {
    arabic_output: bool,
    verbose: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = sarf_cli::parse_dict_path(&args);

    if sarf_cli::wants_help(&args) {
        println!("sarf-analyze: Morphological analysis of Arabic words.");
        println!();
        println!("Usage: sarf-analyze [-d DICT_PATH] [--arabic] [--stats] [-v] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads lines from stdin and analyzes every Arabic token.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing dictStems");
        println!("  -A, --arabic           Print vocalizations in Arabic script");
        println!("      --stats            Print run counters on exit");
        println!("  -v, --verbose          Print the romanization of each word");
        println!("  -h, --help             Print this help");
        return;
    }

    let opts = Options {
        arabic_output: args.iter().any(|a| a == "--arabic" || a == "-A"),
        verbose: args.iter().any(|a| a == "--verbose" || a == "-v"),
    };
    let print_stats = args.iter().any(|a| a == "--stats");
    let words: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let analyzer =
        sarf_cli::load_analyzer(dict_path.as_deref()).unwrap_or_else(|e| sarf_cli::fatal(&e));

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
            analyzer.analyze_line(&line);
            for (class, run) in script_runs(&line) {
                if class == ScriptClass::Arabic {
                    print_word(run, &analyzer, &opts, &mut out);
                }
            }
        }
    } else {
        for word in &words {
            print_word(word, &analyzer, &opts, &mut out);
        }
    }

    if print_stats {
        let _ = out.flush();
        let stats = analyzer.stats();
        let classified = stats.found_words + stats.not_found_words;
        let percent = |n: usize| {
            if classified == 0 {
                0.0
            } else {
                100.0 * n as f64 / classified as f64
            }
        };
        eprintln!("Lines processed   : {}", stats.lines_processed);
        eprintln!("Arabic tokens     : {}", stats.arabic_tokens);
        eprintln!("Non-Arabic tokens : {}", stats.non_arabic_tokens);
        eprintln!(
            "Words found       : {} ({:.1}%)",
            stats.found_words,
            percent(stats.found_words)
        );
        eprintln!(
            "Words not found   : {} ({:.1}%)",
            stats.not_found_words,
            percent(stats.not_found_words)
        );
    }
}

fn print_word(
    word: &str,
    analyzer: &ArabicAnalyzer,
    opts: &Options,
    out: &mut io::BufWriter<io::StdoutLock<'_>>,
) {
    if opts.verbose {
        let _ = writeln!(out, "Processing : \t{word} -> {}", analyzer.romanize(word));
    }
    let solutions = analyzer.solutions(word);
    if solutions.is_empty() {
        let _ = writeln!(out, "{word}: no solution");
        return;
    }
    let mut solutions: Vec<_> = solutions.into_iter().collect();
    solutions.sort_by_key(|s| s.seq());
    let _ = writeln!(out, "{word}:");
    for solution in &solutions {
        if opts.arabic_output {
            let _ = writeln!(out, "{}", solution.to_arabized_string());
        } else {
            let _ = writeln!(out, "{solution}");
        }
    }
}
