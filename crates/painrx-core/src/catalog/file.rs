//! Tab-delimited catalog file format.
//!
//! One header line, then one record per line:
//!
//! ```text
//! Name\tEfficacy\tMinAge\tMaxAge\tPregnancySafe\tAlcoholSafe\tInteractions
//! ```
//!
//! `Efficacy` and `Interactions` are semicolon-joined lists; the safety
//! flags are `0`/`1`. Serialization preserves field and list order, so a
//! well-formed file round-trips byte for byte.

use crate::models::DrugRecord;

use super::MAX_RECORDS;

/// Header line written at the top of every catalog file.
pub const FILE_HEADER: &str = "Name\tEfficacy\tMinAge\tMaxAge\tPregnancySafe\tAlcoholSafe\tInteractions";

const FIELD_COUNT: usize = 7;

/// Parse catalog file text into records.
///
/// The first line is the header and is not parsed. Lines that do not parse
/// as a record are skipped with a warning; lines past [`MAX_RECORDS`] are
/// ignored with a warning.
pub fn parse_catalog(text: &str) -> Vec<DrugRecord> {
    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        if records.len() >= MAX_RECORDS {
            tracing::warn!(line = line_no + 1, "catalog full, ignoring remaining lines");
            break;
        }
        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                tracing::warn!(line = line_no + 1, "skipping malformed catalog line");
            }
        }
    }
    records
}

/// Parse one record line. Returns `None` for malformed lines.
fn parse_line(line: &str) -> Option<DrugRecord> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIELD_COUNT || fields[0].is_empty() {
        return None;
    }

    Some(DrugRecord {
        name: fields[0].to_string(),
        efficacy: split_list(fields[1]),
        min_age: fields[2].parse().ok()?,
        max_age: fields[3].parse().ok()?,
        pregnancy_safe: fields[4].parse::<u32>().ok()? != 0,
        alcohol_safe: fields[5].parse::<u32>().ok()? != 0,
        interactions: split_list(fields[6]),
    })
}

/// Render records back into file text, header included.
pub fn serialize_catalog(records: &[DrugRecord]) -> String {
    let mut out = String::from(FILE_HEADER);
    out.push('\n');
    for record in records {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            record.name,
            record.efficacy.join(";"),
            record.min_age,
            record.max_age,
            record.pregnancy_safe as u32,
            record.alcohol_safe as u32,
            record.interactions.join(";"),
        ));
    }
    out
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(';')
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
