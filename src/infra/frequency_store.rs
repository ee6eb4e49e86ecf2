// ============================================================
// Layer 6 — Frequency Table Store
// ============================================================
// Saves and loads n-gram frequency tables as JSON.
//
// JSON object keys must be strings, so an n-gram is stored
// with its tokens joined by "||":
//
//   { "the||cat": 2, "cat||sat": 1 }
//
// Unigrams are stored as the bare word.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::BTreeMap, collections::HashMap, fs, path::Path};

use crate::data::frequency::NGram;

/// Separator between the tokens of an n-gram key
pub const KEY_SEPARATOR: &str = "||";

/// Write a frequency (or probability) table to `path`.
pub fn save<V: Serialize>(table: &HashMap<NGram, V>, path: &Path) -> Result<()> {
    // BTreeMap gives a stable key order in the file
    let keyed: BTreeMap<String, &V> = table
        .iter()
        .map(|(gram, value)| (gram.join(KEY_SEPARATOR), value))
        .collect();

    let json = serde_json::to_string_pretty(&keyed)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write frequencies to '{}'", path.display()))?;

    tracing::debug!("Saved {} n-grams to '{}'", table.len(), path.display());
    Ok(())
}

/// Read a table written by `save`.
pub fn load<V: DeserializeOwned>(path: &Path) -> Result<HashMap<NGram, V>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read frequencies from '{}'", path.display()))?;

    let keyed: HashMap<String, V> = serde_json::from_str(&json)
        .with_context(|| format!("Invalid frequency table in '{}'", path.display()))?;

    Ok(keyed
        .into_iter()
        .map(|(key, value)| {
            let gram = key.split(KEY_SEPARATOR).map(String::from).collect();
            (gram, value)
        })
        .collect())
}
