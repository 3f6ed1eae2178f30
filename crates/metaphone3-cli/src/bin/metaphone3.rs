// metaphone3: Print Metaphone 3 keys for words.
//
// Encodes the words given as arguments, or reads stdin one word per line
// when none are given. Output is one line per word:
//   word<TAB>primary<TAB>alternate
//
// Usage:
//   metaphone3 [OPTIONS] [WORD...]
//
// Options:
//   -V, --vowels          Encode non-initial vowels
//   -e, --exact           Keep voiced and unvoiced consonants apart
//   -l, --length N        Maximum key length (1-32, default 8)
//   --json                Print one JSON object per word
//   -v                    More logging (repeat for more)
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

use metaphone3_cli::{CliOptions, format_keys};
use metaphone3_en::Metaphone3;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if metaphone3_cli::wants_help(&args) {
        println!("metaphone3: Print Metaphone 3 keys for words.");
        println!();
        println!("Usage: metaphone3 [OPTIONS] [WORD...]");
        println!();
        println!("Encodes each WORD, or each line of stdin when no words are given. Prints:");
        println!("  word<TAB>primary<TAB>alternate");
        println!();
        println!("Options:");
        println!("  -V, --vowels          Encode non-initial vowels");
        println!("  -e, --exact           Keep voiced and unvoiced consonants apart");
        println!("  -l, --length N        Maximum key length (1-32, default 8)");
        println!("  --json                Print one JSON object per word");
        println!("  -v                    More logging (repeat for more)");
        println!("  -h, --help            Print this help");
        return;
    }

    let options = metaphone3_cli::parse_args(&args).unwrap_or_else(|e| metaphone3_cli::fatal(&e));
    metaphone3_cli::init_logging(options.verbose);
    log::debug!("options: {options:?}");

    let mut encoder = Metaphone3::with_options(options.encoder_options());
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !options.words.is_empty() {
        for word in &options.words {
            emit(&mut encoder, &options, word, &mut out);
        }
        return;
    }

    let stdin = io::stdin();
    let mut count = 0usize;
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
        emit(&mut encoder, &options, word, &mut out);
        count += 1;
    }
    log::info!("encoded {count} words");
}

fn emit(encoder: &mut Metaphone3, options: &CliOptions, word: &str, out: &mut impl Write) {
    encoder.set_word(word);
    encoder.encode();
    let _ = writeln!(out, "{}", format_keys(word, encoder.keys(), options.format));
}
