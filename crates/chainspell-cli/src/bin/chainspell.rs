// chainspell: Report the words of a text file missing from a dictionary.
//
// Loads the dictionary (whitespace-separated words) into the chained hash
// table, checks every word of the text with the suffix rules, prints each
// unmatched word and finishes with probe statistics.
//
// Usage:
//   chainspell [OPTIONS] <dictionary-file> <text-file>
//
// Options:
//   -d, --dict-path PATH   Dictionary file (overrides the positional argument)
//   -u, --unique           Print each misspelled word once, with its count
//   -q, --quiet            Do not print misspelled words
//   --json                 Print the statistics as JSON
//   --table-stats          Also print hash table occupancy
//   -h, --help             Print help

use std::io::{self, Write};

use chainspell_en::handle::CheckerOptions;

const FLAGS: &[&str] = &["-u", "--unique", "-q", "--quiet", "--json", "--table-stats"];

fn print_usage() {
    println!("usage: chainspell [OPTIONS] <dictionary-file> <text-file>");
}

fn main() {
    chainspell_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = chainspell_cli::parse_dict_path(&args);

    if chainspell_cli::wants_help(&args) {
        println!("chainspell: Report words of a text missing from a dictionary.");
        println!();
        print_usage();
        println!();
        println!("The text file may be `-` to read standard input. The dictionary may");
        println!("also come from {}.", chainspell_cli::DICT_ENV);
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file");
        println!("  -u, --unique           Print each misspelled word once, with its count");
        println!("  -q, --quiet            Do not print misspelled words");
        println!("  --json                 Print the statistics as JSON");
        println!("  --table-stats          Also print hash table occupancy");
        println!("  -h, --help             Print this help");
        println!();
        println!("Set {}=debug for timing logs on stderr.", chainspell_cli::LOG_ENV);
        return;
    }

    let (flags, positional) =
        chainspell_cli::split_flags(&args, FLAGS).unwrap_or_else(|e| chainspell_cli::fatal(&e));
    let has = |names: &[&str]| flags.iter().any(|f| names.contains(&f.as_str()));
    let unique = has(&["-u", "--unique"]);
    let quiet = has(&["-q", "--quiet"]);
    let json = has(&["--json"]);
    let table_stats = has(&["--table-stats"]);

    let env_dict = std::env::var(chainspell_cli::DICT_ENV).ok();
    let inputs = match chainspell_cli::resolve_inputs(dict_path, &positional, env_dict) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("error: {e}");
            print_usage();
            std::process::exit(1);
        }
    };

    // JSON lists misspellings with counts, so it needs the tally too
    let options = CheckerOptions {
        tally_misspellings: !quiet && (unique || json),
    };
    let mut checker = chainspell_cli::load_checker(&inputs.dictionary, options)
        .unwrap_or_else(|e| chainspell_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    // Misspelled words stream out in text order unless they are collected
    let stream = !quiet && !unique && !json;
    let on_misspelled = |word: &str| {
        if stream {
            let _ = writeln!(out, "{word}");
        }
    };
    let result = if inputs.text == "-" {
        checker.check_reader(io::stdin().lock(), on_misspelled)
    } else {
        checker.check_file(&inputs.text, on_misspelled)
    };
    if let Err(e) = result {
        chainspell_cli::fatal(&e.to_string());
    }

    let stats = checker.stats();
    let occupancy = table_stats.then(|| checker.table().occupancy());
    let tally = options.tally_misspellings.then(|| checker.misspelled_tally());

    if json {
        match chainspell_cli::json_report(&stats, occupancy.as_ref(), tally.as_deref()) {
            Ok(report) => {
                let _ = writeln!(out, "{report}");
            }
            Err(e) => chainspell_cli::fatal(&format!("failed to serialize report: {e}")),
        }
    } else {
        if let Some(tally) = &tally {
            for (word, count) in tally {
                let _ = writeln!(out, "{word}\t{count}");
            }
        }
        let _ = chainspell_cli::write_report(&mut out, &stats);
        if let Some(occupancy) = &occupancy {
            let _ = chainspell_cli::write_occupancy(&mut out, occupancy);
        }
    }

    if let Err(e) = out.flush() {
        chainspell_cli::fatal(&format!("failed to write output: {e}"));
    }
}
