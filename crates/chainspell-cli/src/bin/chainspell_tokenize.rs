// chainspell-tokenize: Print the words extracted from stdin.
//
// Shows exactly what the spell checker would look up: one word per line,
// in text order.
//
// Usage:
//   chainspell-tokenize [OPTIONS]
//
// Options:
//   --count      Print only the number of words
//   -h, --help   Print help

use std::io::{self, Read, Write};

use chainspell_en::tokenizer;

fn main() {
    chainspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if chainspell_cli::wants_help(&args) {
        println!("chainspell-tokenize: Print the words extracted from stdin.");
        println!();
        println!("Usage: chainspell-tokenize [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --count      Print only the number of words");
        println!("  -h, --help   Print this help");
        return;
    }

    let (flags, positional) = chainspell_cli::split_flags(&args, &["--count"])
        .unwrap_or_else(|e| chainspell_cli::fatal(&e));
    if let Some(arg) = positional.first() {
        chainspell_cli::fatal(&format!("unexpected argument: {arg}"));
    }
    let count_only = !flags.is_empty();

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .unwrap_or_else(|e| chainspell_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if count_only {
        let _ = writeln!(out, "{}", tokenizer::words(&input).count());
        return;
    }
    for word in tokenizer::words(&input) {
        let _ = writeln!(out, "{word}");
    }
}
