// chainspell-hash: Show where words land in the hash table.
//
// Reads words from stdin (one per line) and prints the hash value and slot
// of each. With a dictionary, also prints the length of the slot's chain
// and the word's position in it.
//
// Output format:
//   word<TAB>hash<TAB>slot
//   word<TAB>hash<TAB>slot<TAB>chain=N<TAB>pos=K   (pos=- when absent)
//
// Usage:
//   chainspell-hash [-d DICT_PATH]
//
// Options:
//   -d, --dict-path PATH   Dictionary file to place the words against
//   -h, --help             Print help

use std::io::{self, BufRead, Write};
use std::path::Path;

use chainspell_en::handle::CheckerOptions;
use chainspell_table::hash::{compress, hash_word};

fn main() {
    chainspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = chainspell_cli::parse_dict_path(&args);

    if chainspell_cli::wants_help(&args) {
        println!("chainspell-hash: Show hash values and slots of words from stdin.");
        println!();
        println!("Usage: chainspell-hash [-d DICT_PATH]");
        println!();
        println!("Prints: word<TAB>hash<TAB>slot");
        println!("With a dictionary also: <TAB>chain=N<TAB>pos=K");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file to place the words against");
        println!("  -h, --help             Print this help");
        return;
    }
    if let Some(arg) = args.first() {
        chainspell_cli::fatal(&format!("unexpected argument: {arg}"));
    }

    let checker = dict_path.map(|path| {
        chainspell_cli::load_checker(Path::new(&path), CheckerOptions::default())
            .unwrap_or_else(|e| chainspell_cli::fatal(&e.to_string()))
    });

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

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

        let hash = hash_word(word);
        let slot = compress(hash);
        match &checker {
            Some(checker) => {
                let table = checker.table();
                let pos = table
                    .chain(slot)
                    .position(|key| key == word)
                    .map_or_else(|| "-".to_string(), |p| p.to_string());
                let _ = writeln!(
                    out,
                    "{word}\t{hash}\t{slot}\tchain={}\tpos={pos}",
                    table.chain_len(slot)
                );
            }
            None => {
                let _ = writeln!(out, "{word}\t{hash}\t{slot}");
            }
        }
    }
}
