//! Delimited payload field decoding
//!
//! The search index stores weighted associations (entity or topic ids and
//! their weights) as a space-separated list of `id|weight` pairs.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// An id with its association weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntity {
    /// Entity or topic id
    pub id: String,
    /// Association weight
    pub weight: f64,
}

/// Decodes a DPF string such as `"tm-fr-3fc6_1|0.042 tm-fr-3fc6_7|0.31"`.
///
/// Empty or blank input decodes to an empty list.
pub fn parse_dpf(encoded: &str) -> Result<Vec<WeightedEntity>> {
    encoded.split_whitespace().map(parse_pair).collect()
}

fn parse_pair(pair: &str) -> Result<WeightedEntity> {
    let (id, weight) = pair
        .rsplit_once('|')
        .ok_or_else(|| ApiError::InvalidInput(format!("DPF pair without weight: {pair:?}")))?;
    if id.is_empty() {
        return Err(ApiError::InvalidInput(format!("DPF pair without id: {pair:?}")));
    }
    let weight = weight
        .parse::<f64>()
        .map_err(|e| ApiError::InvalidInput(format!("DPF weight in {pair:?}: {e}")))?;

    Ok(WeightedEntity {
        id: id.to_string(),
        weight,
    })
}
