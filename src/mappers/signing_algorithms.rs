// ABOUTME: Codec for the CSV-flattened client signing-algorithm column
// ABOUTME: Split-trim-dedupe on read, distinct comma-join on write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Keystone Identity

//! The client's allowed identity token signing algorithms are stored as a
//! single comma-delimited column. The pair below is lossless for set
//! semantics: duplicates never survive a read, and a read→write round trip
//! never reintroduces them.

use std::collections::HashSet;

/// Expand a stored CSV column into a deduplicated algorithm set.
///
/// `None`, empty, or separator/whitespace-only input yields the empty set —
/// a malformed column never errors.
#[must_use]
pub fn decode(raw: Option<&str>) -> HashSet<String> {
    raw.map_or_else(HashSet::new, |value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
}

/// Collapse an algorithm set into the stored CSV column.
///
/// Each distinct value appears exactly once, in no particular order; the
/// empty set serializes to the empty string.
#[must_use]
pub fn encode(algorithms: &HashSet<String>) -> String {
    algorithms
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
