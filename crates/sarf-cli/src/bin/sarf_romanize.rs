// sarf-romanize: Buckwalter transliteration of text from stdin.
//
// Romanizes Arabic text into the Buckwalter alphabet, or with
// --reverse converts Buckwalter text back to Arabic script. Needs no
// dictionary.
//
// Usage:
//   sarf-romanize [--reverse] [TEXT...]
//
// Options:
//   -r, --reverse   Convert Buckwalter text to Arabic script
//   -h, --help      Print help

use std::io::{self, BufRead, Write};

use sarf_core::buckwalter;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if sarf_cli::wants_help(&args) {
        println!("sarf-romanize: Buckwalter transliteration of Arabic text.");
        println!();
        println!("Usage: sarf-romanize [--reverse] [TEXT...]");
        println!();
        println!("If TEXT arguments are given, converts each argument.");
        println!("Otherwise reads lines from stdin.");
        println!();
        println!("Note: romanization deletes vowel marks; it is not reversible");
        println!("for vocalized input.");
        println!();
        println!("Options:");
        println!("  -r, --reverse   Convert Buckwalter text to Arabic script");
        println!("  -h, --help      Print this help");
        return;
    }

    let reverse = args.iter().any(|a| a == "--reverse" || a == "-r");
    let texts: Vec<String> = args.iter().filter(|a| !a.starts_with('-')).cloned().collect();

    let convert = |text: &str| {
        if reverse {
            buckwalter::arabize(text)
        } else {
            buckwalter::romanize(text)
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if texts.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let _ = writeln!(out, "{}", convert(&line));
        }
    } else {
        for text in &texts {
            let _ = writeln!(out, "{}", convert(text));
        }
    }
}
