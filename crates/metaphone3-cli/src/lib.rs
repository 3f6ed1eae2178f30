// metaphone3-cli: argument parsing and output formatting for the
// `metaphone3` tool.

use std::process;

use metaphone3_en::{EncoderOptions, MetaphKeys};
use serde::Serialize;

/// How each encoded word is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `word<TAB>primary<TAB>alternate`
    #[default]
    Tsv,
    /// One JSON object per line.
    Json,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub encode_vowels: bool,
    pub encode_exact: bool,
    pub max_key_length: Option<usize>,
    pub format: OutputFormat,
    /// Number of `-v` flags.
    pub verbose: u8,
    /// Words given on the command line. Empty means read stdin.
    pub words: Vec<String>,
}

impl CliOptions {
    /// Encoder options for this invocation. An out-of-range key length is
    /// clamped, with a warning logged by the encoder.
    pub fn encoder_options(&self) -> EncoderOptions {
        let mut options = EncoderOptions::default()
            .with_encode_vowels(self.encode_vowels)
            .with_encode_exact(self.encode_exact);
        if let Some(length) = self.max_key_length {
            if let Err(e) = options.try_set_max_key_length(length) {
                log::warn!("{e}; using {}", e.clamped());
            }
        }
        options
    }
}

/// Parse arguments (without the program name).
///
/// Accepts `-V/--vowels`, `-e/--exact`, `-l N`, `--length=N`, `--json`,
/// repeated `-v`, and `--` to end option parsing. Everything else is a word.
pub fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    let mut only_words = false;

    while let Some(arg) = iter.next() {
        if only_words {
            options.words.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--" => only_words = true,
            "-V" | "--vowels" => options.encode_vowels = true,
            "-e" | "--exact" => options.encode_exact = true,
            "--json" => options.format = OutputFormat::Json,
            "-l" | "--length" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                options.max_key_length = Some(parse_length(value)?);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--length=") {
                    options.max_key_length = Some(parse_length(value)?);
                } else if arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v')
                {
                    let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                    options.verbose = options.verbose.saturating_add(count);
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option: {arg}"));
                } else {
                    options.words.push(arg.clone());
                }
            }
        }
    }
    Ok(options)
}

fn parse_length(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|e| format!("invalid key length {value:?}: {e}"))
}

#[derive(Serialize)]
struct KeyRecord<'a> {
    word: &'a str,
    primary: &'a str,
    alternate: &'a str,
}

/// Render one result line (without the trailing newline).
pub fn format_keys(word: &str, keys: &MetaphKeys, format: OutputFormat) -> String {
    match format {
        OutputFormat::Tsv => format!("{word}\t{}\t{}", keys.primary, keys.alternate),
        OutputFormat::Json => {
            let record = KeyRecord {
                word,
                primary: &keys.primary,
                alternate: &keys.alternate,
            };
            // serializing plain strings cannot fail
            serde_json::to_string(&record).unwrap_or_default()
        }
    }
}

/// Install the logger; `-v` raises the default level from `warn`.
/// `RUST_LOG` still takes precedence.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.encoder_options(), EncoderOptions::default());
    }

    #[test]
    fn flags_and_words() {
        let options = parse_args(&args(&["-V", "--exact", "-l", "6", "smith", "-vv"])).unwrap();
        assert!(options.encode_vowels);
        assert!(options.encode_exact);
        assert_eq!(options.max_key_length, Some(6));
        assert_eq!(options.verbose, 2);
        assert_eq!(options.words, vec!["smith".to_string()]);
        assert_eq!(options.encoder_options().max_key_length(), 6);
    }

    #[test]
    fn length_forms() {
        let options = parse_args(&args(&["--length=12", "--json"])).unwrap();
        assert_eq!(options.max_key_length, Some(12));
        assert_eq!(options.format, OutputFormat::Json);
        assert!(parse_args(&args(&["-l"])).is_err());
        assert!(parse_args(&args(&["--length=abc"])).is_err());
    }

    #[test]
    fn out_of_range_length_is_clamped() {
        let options = parse_args(&args(&["-l", "99"])).unwrap();
        assert_eq!(options.encoder_options().max_key_length(), 32);
    }

    #[test]
    fn double_dash_ends_options() {
        let options = parse_args(&args(&["--", "-x", "--json"])).unwrap();
        assert_eq!(options.words, args(&["-x", "--json"]));
        assert_eq!(options.format, OutputFormat::Tsv);
    }

    #[test]
    fn verbose_count_saturates() {
        let long = format!("-{}", "v".repeat(300));
        let options = parse_args(&args(&[long.as_str(), "-v"])).unwrap();
        assert_eq!(options.verbose, u8::MAX);
        let options = parse_args(&args(&["-vvv", "-v"])).unwrap();
        assert_eq!(options.verbose, 4);
    }

    #[test]
    fn unknown_option_is_an_error() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn formats() {
        let keys = MetaphKeys {
            primary: "SM0".into(),
            alternate: "XMT".into(),
        };
        assert_eq!(format_keys("smith", &keys, OutputFormat::Tsv), "smith\tSM0\tXMT");
        let json: serde_json::Value =
            serde_json::from_str(&format_keys("smith", &keys, OutputFormat::Json)).unwrap();
        assert_eq!(json["primary"], "SM0");
        assert_eq!(json["alternate"], "XMT");
        assert_eq!(json["word"], "smith");
    }
}
