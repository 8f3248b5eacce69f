//! Raw record splitting and field extraction.
//!
//! Scenario data arrives as comma-separated records. A field may be wrapped
//! in double quotes to contain literal commas; the quotes themselves are
//! stripped and are not otherwise escapable (there is no support for an
//! embedded literal quote).

/// Number of fields a data record must have.
pub const FIELD_COUNT: usize = 8;

/// Split one record line into fields.
///
/// A `"` toggles quoted mode and is dropped from the output; a `,` outside
/// quoted mode ends the current field. Every input yields at least one field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// One parsed data record: a single (scenario, question, character) row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Scenario identifier (field 1).
    pub scenario_id: String,
    /// Difficulty tier, still a raw string at this stage (field 2).
    pub difficulty: String,
    /// Scenario description (field 3).
    pub description: String,
    /// Question identifier, unique within the scenario (field 4).
    pub question_id: String,
    /// Question text (field 5).
    pub question_text: String,
    /// Character the responses belong to (field 6).
    pub character: String,
    /// Line spoken when innocent (field 7).
    pub innocent_response: String,
    /// Line spoken when guilty (field 8).
    pub guilty_response: String,
}

impl RawRecord {
    /// Parse a record line into its eight ordered fields.
    ///
    /// Returns `None` when the line has fewer than eight fields; such records
    /// are skipped by the loader rather than aborting the whole load. Extra
    /// trailing fields are ignored. Free-text fields are whitespace-trimmed.
    pub fn parse(line: &str) -> Option<Self> {
        let fields = split_fields(line);
        if fields.len() < FIELD_COUNT {
            return None;
        }
        Some(Self {
            scenario_id: fields[0].clone(),
            difficulty: fields[1].clone(),
            description: fields[2].trim().to_string(),
            question_id: fields[3].clone(),
            question_text: fields[4].trim().to_string(),
            character: fields[5].clone(),
            innocent_response: fields[6].trim().to_string(),
            guilty_response: fields[7].trim().to_string(),
        })
    }
}
