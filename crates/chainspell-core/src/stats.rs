// End-of-run statistics

use serde::Serialize;

/// Snapshot of the counters collected during one checking run.
///
/// The counters only ever grow; a snapshot is taken after the last lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Number of entries inserted into the dictionary table.
    pub dict_length: u64,
    /// Number of words extracted from the text and checked.
    pub words_checked: u64,
    /// Number of checked words no rule accepted.
    pub misspelled: u64,
    /// Slot checks plus chain comparisons over all lookups.
    pub total_probes: u64,
    /// Number of table lookups, including the ones made by suffix rules.
    pub total_lookups: u64,
}

impl RunStats {
    /// Average number of probes per checked word.
    ///
    /// `None` when no word was checked.
    pub fn probes_per_word(&self) -> Option<f64> {
        ratio(self.total_probes, self.words_checked)
    }

    /// Average number of probes per lookup call.
    ///
    /// `None` when no lookup was made.
    pub fn probes_per_lookup(&self) -> Option<f64> {
        ratio(self.total_probes, self.total_lookups)
    }

    /// The statistics together with both averages, ready for serialization.
    pub fn report(&self) -> StatsReport {
        StatsReport {
            stats: *self,
            probes_per_word: self.probes_per_word(),
            probes_per_lookup: self.probes_per_lookup(),
        }
    }
}

/// [`RunStats`] with the derived averages, as emitted by `--json`.
///
/// Undefined averages serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsReport {
    #[serde(flatten)]
    pub stats: RunStats,
    pub probes_per_word: Option<f64>,
    pub probes_per_lookup: Option<f64>,
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
