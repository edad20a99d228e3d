use crate::analyzers::types::{Observation, TokenStats, WordRecord};
use crate::analyzers::utility::average;
use crate::regions::{Region, in_region};
use crate::tokenizer::extract_words;
use std::collections::HashMap;
use tracing::info;

/// Tokens seen fewer times than this are left out of the word cloud.
pub const MIN_FREQUENCY: usize = 3;

/// Per-token totals, kept in the order tokens were first seen.
#[derive(Debug, Default)]
pub struct WordTally {
    index: HashMap<String, usize>,
    stats: Vec<TokenStats>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `token` from a row scored `score`.
    pub fn add(&mut self, token: &str, score: Option<f64>) {
        let slot = match self.index.get(token) {
            Some(&slot) => slot,
            None => {
                self.stats.push(TokenStats::new(token));
                self.index.insert(token.to_string(), self.stats.len() - 1);
                self.stats.len() - 1
            }
        };
        self.stats[slot].record(score);
    }

    pub fn get(&self, token: &str) -> Option<&TokenStats> {
        self.index.get(token).map(|&slot| &self.stats[slot])
    }

    /// Iterates in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenStats> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Tallies the tokens of every row located in `region`.
///
/// Rows outside the region, or with an unmapped state, are skipped. A token
/// repeated within one row counts once per occurrence.
pub fn tally_words(rows: &[Observation], region: Region) -> WordTally {
    let mut tally = WordTally::new();
    let mut kept = 0usize;

    for row in rows {
        if !in_region(row.state_abbrev.as_deref(), region) {
            continue;
        }
        kept += 1;

        for word in extract_words(row.detected_objects.as_deref()) {
            tally.add(&word, row.haunted_score);
        }
    }

    info!(
        region = %region,
        rows = rows.len(),
        kept,
        distinct_tokens = tally.len(),
        "Rows filtered and tokenized"
    );

    tally
}

/// Turns a tally into output records.
///
/// Drops tokens below `min_frequency`, averages the scored occurrences, and
/// sorts by frequency descending. The sort is stable so equal frequencies keep
/// first-appearance order.
pub fn word_records(tally: &WordTally, min_frequency: usize) -> Vec<WordRecord> {
    let mut records: Vec<WordRecord> = tally
        .iter()
        .filter(|stats| stats.frequency() >= min_frequency)
        .map(|stats| WordRecord {
            text: stats.token().to_string(),
            frequency: stats.frequency(),
            score: average(stats.score_sum(), stats.scored()),
        })
        .collect();

    records.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    records
}

/// Runs the whole aggregation for one region with the default threshold.
pub fn build_wordcloud(rows: &[Observation], region: Region) -> Vec<WordRecord> {
    let tally = tally_words(rows, region);
    let records = word_records(&tally, MIN_FREQUENCY);

    info!(
        retained = records.len(),
        dropped = tally.len() - records.len(),
        min_frequency = MIN_FREQUENCY,
        "Rare tokens dropped"
    );

    records
}
