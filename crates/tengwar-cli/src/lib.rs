// tengwar-cli: shared utilities for CLI tools.

use std::process;

use tengwar_core::Word;
use tengwar_general::{Language, Options, TranscribeError, transcribe};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `TENGWAR_LOG=debug`).
pub const LOG_ENV: &str = "TENGWAR_LOG";

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct Cli {
    pub options: Options,
    /// Print words as JSON instead of column descriptors.
    pub json: bool,
    /// Positional arguments; empty means read stdin.
    pub words: Vec<String>,
}

/// Parse transcription flags from command line args.
///
/// Unknown `-` arguments are errors; everything else is a word to
/// transcribe.
pub fn parse_args(args: &[String]) -> Result<Cli, String> {
    let mut options = Options::default();
    let mut json = false;
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--language=") {
            options.language = parse_language(val)?;
            continue;
        }
        match arg.as_str() {
            "--language" | "-l" => {
                let val = iter
                    .next()
                    .ok_or_else(|| format!("{arg} requires a value"))?;
                options.language = parse_language(val)?;
            }
            "--reverse-curls" => options.reverse_curls = true,
            "--swap-dot-slash" => options.swap_dot_slash = true,
            "--medial-ore" => options.medial_ore = true,
            "--no-ach-laut" => options.no_ach_laut = true,
            "--s-hook" => options.s_hook = true,
            "--tsdz" => options.tsdz = true,
            "--double-nasals-below" => options.double_nasals_with_tilde_below = true,
            "--duodecimal" => options.duodecimal = true,
            "--strict" => options.strict = true,
            "--json" => json = true,
            "-h" | "--help" => {}
            "--" => words.extend(iter.by_ref().cloned()),
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}"));
            }
            _ => words.push(arg.clone()),
        }
    }

    Ok(Cli {
        options,
        json,
        words,
    })
}

fn parse_language(val: &str) -> Result<Language, String> {
    val.parse().map_err(|e| format!("{e}"))
}

/// Transcribe one line of text into its printed form.
///
/// Descriptor output separates words with a space; JSON output is one array
/// of words per line.
pub fn render_line(text: &str, options: &Options, json: bool) -> Result<String, String> {
    let words = transcribe(text, options).map_err(|e: TranscribeError| e.to_string())?;
    if json {
        return serde_json::to_string(&words).map_err(|e| format!("failed to encode JSON: {e}"));
    }
    Ok(words
        .iter()
        .map(Word::to_string)
        .collect::<Vec<_>>()
        .join(" "))
}

/// Install a stderr log subscriber filtered by `TENGWAR_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
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
