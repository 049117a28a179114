//! Profile records parsed from `warp agent profile list` output.

use crate::table::{TableGlyphs, decode_rows};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A warp agent profile.
///
/// Both fields are required: a table row missing either is discarded, not
/// defaulted. The parser enforces no uniqueness; duplicate ids from
/// malformed output simply yield duplicate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Parse the rendered profile-list table into records, in row order.
///
/// Only rows with exactly two cells (id, name) become profiles; anything
/// else is a malformed or decorative line and is skipped.
pub fn parse_profiles(output: &str) -> Vec<Profile> {
    let glyphs = TableGlyphs::warp();

    decode_rows(output, &glyphs)
        .into_iter()
        .filter_map(|row| match <[String; 2]>::try_from(row) {
            Ok([id, name]) => Some(Profile { id, name }),
            Err(row) => {
                debug!(cells = row.len(), "skipping table row with unexpected column count");
                None
            }
        })
        .collect()
}
