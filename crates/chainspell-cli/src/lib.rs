// chainspell-cli: shared utilities for CLI tools.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use chainspell_core::stats::{RunStats, StatsReport};
use chainspell_en::handle::{CheckError, CheckerOptions, SpellChecker};
use chainspell_table::Occupancy;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a default dictionary file.
pub const DICT_ENV: &str = "CHAINSPELL_DICT";

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "CHAINSPELL_LOG";

/// Log filter used when `CHAINSPELL_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber.
///
/// Stdout carries the report, so log lines never go there.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
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
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Split arguments into known flags and positional arguments.
///
/// A lone `-` is positional (standard input). Any other argument starting
/// with `-` must be in `known`, otherwise an error naming it is returned.
pub fn split_flags(args: &[String], known: &[&str]) -> Result<(Vec<String>, Vec<String>), String> {
    let mut flags = Vec::new();
    let mut positional = Vec::new();
    for arg in args {
        if arg.starts_with('-') && arg != "-" {
            if !known.contains(&arg.as_str()) {
                return Err(format!("unknown option: {arg}"));
            }
            flags.push(arg.clone());
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((flags, positional))
}

/// Where the dictionary and the text come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub dictionary: PathBuf,
    /// Text file path, or `-` for standard input.
    pub text: String,
}

/// Decide the dictionary and text inputs.
///
/// Resolution order for the dictionary: the `-d` flag, then the first of two
/// positional arguments, then `env_dict` when only the text is given.
pub fn resolve_inputs(
    dict_flag: Option<String>,
    positional: &[String],
    env_dict: Option<String>,
) -> Result<Inputs, String> {
    match (dict_flag, positional) {
        (Some(dict), [text]) => Ok(Inputs {
            dictionary: PathBuf::from(dict),
            text: text.clone(),
        }),
        (None, [dict, text]) => Ok(Inputs {
            dictionary: PathBuf::from(dict),
            text: text.clone(),
        }),
        (None, [text]) => match env_dict {
            Some(dict) if !dict.is_empty() => Ok(Inputs {
                dictionary: PathBuf::from(dict),
                text: text.clone(),
            }),
            _ => Err(format!(
                "no dictionary given (pass it as the first argument, with -d, or set {DICT_ENV})"
            )),
        },
        _ => Err("expected a dictionary file and a text file".to_string()),
    }
}

/// Create a checker and fill it from the dictionary file.
pub fn load_checker(dictionary: &Path, options: CheckerOptions) -> Result<SpellChecker, CheckError> {
    let mut checker = SpellChecker::new(options);
    let entries = checker.load_dictionary_file(dictionary)?;
    tracing::info!(path = %dictionary.display(), entries, "dictionary ready");
    Ok(checker)
}

/// Format an average with three decimals, or `n/a` when undefined.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.3}"),
        None => "n/a".to_string(),
    }
}

/// Write the end-of-run statistics in the plain text layout.
pub fn write_report<W: Write>(out: &mut W, stats: &RunStats) -> io::Result<()> {
    writeln!(out, "Words in Dictionary: {}", stats.dict_length)?;
    writeln!(out, "Words in Text File: {}", stats.words_checked)?;
    writeln!(out, "Misspelled words: {}", stats.misspelled)?;
    writeln!(out, "Total probes: {}", stats.total_probes)?;
    writeln!(
        out,
        "Average probes per word: {}",
        format_average(stats.probes_per_word())
    )?;
    writeln!(
        out,
        "Average probes per lookup: {}",
        format_average(stats.probes_per_lookup())
    )
}

/// Write the table occupancy summary in the plain text layout.
pub fn write_occupancy<W: Write>(out: &mut W, occupancy: &Occupancy) -> io::Result<()> {
    writeln!(out, "Occupied slots: {}", occupancy.occupied_slots)?;
    writeln!(out, "Empty slots: {}", occupancy.empty_slots)?;
    writeln!(out, "Longest chain: {}", occupancy.longest_chain)?;
    writeln!(out, "Load factor: {:.3}", occupancy.load_factor)
}

/// Occupancy fields as emitted by `--json`.
#[derive(Debug, Serialize)]
struct OccupancyJson {
    occupied_slots: usize,
    empty_slots: usize,
    longest_chain: usize,
    load_factor: f64,
}

impl From<&Occupancy> for OccupancyJson {
    fn from(o: &Occupancy) -> Self {
        Self {
            occupied_slots: o.occupied_slots,
            empty_slots: o.empty_slots,
            longest_chain: o.longest_chain,
            load_factor: o.load_factor,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    stats: StatsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    occupancy: Option<OccupancyJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    misspelled_words: Option<Vec<MisspelledJson<'a>>>,
}

#[derive(Debug, Serialize)]
struct MisspelledJson<'a> {
    word: &'a str,
    count: u64,
}

/// Serialize the run as one pretty-printed JSON object.
///
/// `tally` is included as a `misspelled_words` array when given.
pub fn json_report(
    stats: &RunStats,
    occupancy: Option<&Occupancy>,
    tally: Option<&[(String, u64)]>,
) -> serde_json::Result<String> {
    let report = JsonReport {
        stats: stats.report(),
        occupancy: occupancy.map(OccupancyJson::from),
        misspelled_words: tally.map(|t| {
            t.iter()
                .map(|(word, count)| MisspelledJson {
                    word,
                    count: *count,
                })
                .collect()
        }),
    };
    serde_json::to_string_pretty(&report)
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
