//! Recovers flat search results from Leta's `__data.json` payload.
//!
//! The payload is a serialized render tree: `nodes[2].data` is a flat
//! "arena" array whose entries are either literal values or integer
//! references to other positions in the same array. `arena[3]` lists the
//! start position of every result card, and each card stores its link,
//! title and snippet at fixed offsets +1, +2 and +3 from that position.
//!
//! Layout drift upstream never raises here; it degrades to fewer (or zero)
//! results.

use serde_json::Value;
use std::fmt;

use crate::data_models::SearchResult;

const RESULT_NODE: usize = 2;
const INDEX_LIST_POS: usize = 3;

const LINK_OFFSET: usize = 1;
const TITLE_OFFSET: usize = 2;
const SNIPPET_OFFSET: usize = 3;

/// Why a candidate entry did not produce a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    NotAnIndex(Value),
    OutOfBounds { idx: usize, arena_len: usize },
    NotAString { field: &'static str, idx: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotAnIndex(v) => write!(f, "entry {v} is not a non-negative integer"),
            Rejection::OutOfBounds { idx, arena_len } => {
                write!(f, "index {idx} + 3 is outside arena of length {arena_len}")
            }
            Rejection::NotAString { field, idx } => {
                write!(f, "{field} at index {idx} is not a string")
            }
        }
    }
}

/// Locate the arena inside the payload, if the payload has the expected shape.
pub fn arena(payload: &Value) -> Option<&Vec<Value>> {
    if payload.get("type").and_then(Value::as_str) != Some("data") {
        return None;
    }
    let nodes = payload.get("nodes")?.as_array()?;
    if nodes.len() <= RESULT_NODE {
        return None;
    }
    nodes[RESULT_NODE].get("data")?.as_array()
}

/// Decode a single candidate starting at arena position `entry`.
pub fn read_candidate(arena: &[Value], entry: &Value) -> Result<SearchResult, Rejection> {
    let idx = entry
        .as_u64()
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| Rejection::NotAnIndex(entry.clone()))?;

    // idx is unsigned, so bounding the last offset bounds all of them.
    match idx.checked_add(SNIPPET_OFFSET) {
        Some(last) if last < arena.len() => {}
        _ => {
            return Err(Rejection::OutOfBounds {
                idx,
                arena_len: arena.len(),
            });
        }
    }

    let field = |offset: usize, name: &'static str| -> Result<String, Rejection> {
        arena[idx + offset]
            .as_str()
            .map(str::to_owned)
            .ok_or(Rejection::NotAString { field: name, idx })
    };

    Ok(SearchResult::new(
        field(LINK_OFFSET, "link")?,
        field(TITLE_OFFSET, "title")?,
        field(SNIPPET_OFFSET, "snippet")?,
    ))
}

/// Extract at most `max_count` results, in candidate list order.
pub fn extract_results(payload: &Value, max_count: usize) -> Vec<SearchResult> {
    let Some(arena) = arena(payload) else {
        tracing::debug!("payload does not carry a result arena");
        return Vec::new();
    };
    tracing::debug!(arena_len = arena.len(), "found result arena");

    if arena.len() <= INDEX_LIST_POS {
        return Vec::new();
    }
    let Some(candidates) = arena[INDEX_LIST_POS].as_array() else {
        tracing::debug!(entry = %arena[INDEX_LIST_POS], "candidate index list is not an array");
        return Vec::new();
    };
    tracing::debug!(candidates = ?candidates, "candidate index list");

    let mut results = Vec::new();
    for entry in candidates.iter().take(max_count) {
        match read_candidate(arena, entry) {
            Ok(result) => {
                tracing::debug!(link = %result.link, "accepted candidate");
                results.push(result);
            }
            Err(reason) => {
                tracing::debug!(%reason, "rejected candidate");
            }
        }
    }
    results
}
