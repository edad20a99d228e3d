//! Word aggregation for the word cloud.
//!
//! This module counts tokens across the rows of one census region,
//! averages the haunted score per token, and shapes the retained tokens
//! into output records sorted by frequency.

pub mod aggregate;
pub mod types;
pub mod utility;
