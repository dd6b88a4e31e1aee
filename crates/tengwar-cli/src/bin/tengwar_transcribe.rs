// tengwar-transcribe: General Use mode transcription of text.
//
// Transcribes each argument, or each line of stdin when no arguments are
// given, and prints one line of column descriptors per input.
//
// Usage:
//   tengwar-transcribe [OPTIONS] [TEXT...]
//
// Logging goes to stderr and is controlled by TENGWAR_LOG (default: warn).

use std::io::{self, BufRead, Write};

fn print_help() {
    println!("tengwar-transcribe: Transcribe Latin text into Tengwar (General Use mode).");
    println!();
    println!("Usage: tengwar-transcribe [OPTIONS] [TEXT...]");
    println!();
    println!("If TEXT arguments are given, transcribes each one.");
    println!("Otherwise reads text from stdin (one line at a time).");
    println!();
    println!("Each word prints as `;`-separated columns: tengwa:marks, with a");
    println!("trailing `?` where the glyph has equally valid alternatives.");
    println!();
    println!("Options:");
    println!("  -l, --language LANG     general (default), english or black-speech");
    println!("      --reverse-curls     Swap the o and u curls");
    println!("      --swap-dot-slash    Swap the i and e tehtar");
    println!("      --medial-ore        Use ore for r before any consonant");
    println!("      --no-ach-laut       Read ch as calma (ch' for hwesta)");
    println!("      --s-hook            Write s after a vowel as a hook");
    println!("      --tsdz              Read ts as calma and dz as anga");
    println!("      --double-nasals-below  Mark doubled nasals with a bar below");
    println!("      --duodecimal        Mark numerals as duodecimal");
    println!("      --strict            Fail on the first untranscribable word");
    println!("      --json              Print JSON instead of descriptors");
    println!("  -h, --help              Print this help");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if tengwar_cli::wants_help(&args) {
        print_help();
        return;
    }

    tengwar_cli::init_tracing();

    let cli = tengwar_cli::parse_args(&args).unwrap_or_else(|e| tengwar_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut emit = |text: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        match tengwar_cli::render_line(text, &cli.options, cli.json) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(e) => {
                let _ = out.flush();
                tengwar_cli::fatal(&e);
            }
        }
    };

    if cli.words.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            emit(text, &mut out);
        }
    } else {
        for text in &cli.words {
            emit(text, &mut out);
        }
    }

    let _ = out.flush();
}
