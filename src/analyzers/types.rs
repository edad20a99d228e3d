//! Data types used by the word-cloud pipeline.

use serde::{Deserialize, Serialize};

/// A single row deserialized from the observation CSV.
///
/// Empty and NA cells deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(rename = "state_abbrev", deserialize_with = "crate::loader::na_string")]
    pub state_abbrev: Option<String>,
    #[serde(rename = "detected_objects", deserialize_with = "crate::loader::na_string")]
    pub detected_objects: Option<String>,
    #[serde(rename = "Haunted Score", deserialize_with = "crate::loader::na_f64")]
    pub haunted_score: Option<f64>,
}

/// Running totals for one token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStats {
    pub(crate) token: String,
    pub(crate) frequency: usize,
    pub(crate) score_sum: f64,
    pub(crate) scored: usize,
}

impl TokenStats {
    pub fn new(token: &str) -> Self {
        TokenStats {
            token: token.to_string(),
            frequency: 0,
            score_sum: 0.0,
            scored: 0,
        }
    }

    /// Counts one occurrence of the token in a row with the given score.
    pub fn record(&mut self, score: Option<f64>) {
        self.frequency += 1;
        if let Some(score) = score {
            self.score_sum += score;
            self.scored += 1;
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn score_sum(&self) -> f64 {
        self.score_sum
    }

    pub fn scored(&self) -> usize {
        self.scored
    }
}

/// One entry of the exported word cloud, in the shape the D3 layout reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordRecord {
    pub text: String,
    pub frequency: usize,
    pub score: f64,
}
