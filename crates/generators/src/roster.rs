//! Roster types and deterministic name resolution.
//!
//! The model returns free-text student names; this module maps them back
//! onto concrete roster identifiers. Matching is case-insensitive,
//! substring-based, and first-match-wins in roster order, so results are
//! reproducible for a given roster and candidate list.

use serde::{Deserialize, Serialize};

/// Sentinel candidate meaning "every student on the roster".
pub const ALL_SENTINEL: &str = "all";

/// One student on a class roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Stable identifier for the student.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl RosterEntry {
    /// Create a roster entry.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Render a roster as "First Last" pairs joined by commas, for prompts.
pub fn render_roster(roster: &[RosterEntry]) -> String {
    roster
        .iter()
        .map(RosterEntry::full_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve free-text candidate names to roster identifiers.
///
/// Candidates are lower-cased first. If any candidate equals "all", every
/// roster identifier is returned in roster order. Otherwise each candidate
/// (in the order given) selects the first roster entry whose lower-cased
/// "first last", "last first", first name, or last name contains it as a
/// substring. Matches are de-duplicated preserving first-seen order;
/// unmatched candidates are dropped silently. Empty candidates are
/// skipped outright: an empty string is a substring of every name and
/// would otherwise always select the first roster entry.
pub fn resolve_names(roster: &[RosterEntry], candidates: &[String]) -> Vec<String> {
    let lowered: Vec<String> = candidates.iter().map(|c| c.to_lowercase()).collect();

    if lowered.iter().any(|c| c == ALL_SENTINEL) {
        return roster.iter().map(|entry| entry.id.clone()).collect();
    }

    let mut ids: Vec<String> = Vec::new();
    for candidate in &lowered {
        if candidate.is_empty() {
            continue;
        }

        let matched = roster.iter().find(|entry| {
            let first = entry.first_name.to_lowercase();
            let last = entry.last_name.to_lowercase();
            format!("{} {}", first, last).contains(candidate.as_str())
                || format!("{} {}", last, first).contains(candidate.as_str())
                || first.contains(candidate.as_str())
                || last.contains(candidate.as_str())
        });

        if let Some(entry) = matched {
            if !ids.contains(&entry.id) {
                ids.push(entry.id.clone());
            }
        }
    }

    ids
}
