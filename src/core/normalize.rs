use crate::core::schema::ColumnSchema;
use crate::domain::model::{Candidate, ElectionRecord, RawRow};
use crate::utils::error::{BoardError, Result};

/// Decode the fetched document as headerless, variable-width CSV. Blank lines
/// are skipped by the reader; header handling happens in [`normalize`].
pub fn decode_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

/// Strip every non-digit character and parse what remains. Empty or
/// unparseable input degrades to 0; vote cells never fail a row.
pub fn clean_number(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

fn cell(row: &RawRow, index: usize) -> &str {
    row.get(index).map(|value| value.trim()).unwrap_or("")
}

/// Turn raw sheet rows into normalized records.
///
/// The first row is discarded as the header; the rest are walked in order
/// because the division column is forward-filled from the last non-blank
/// value. Rows without a constituency are dropped (it is the record key).
/// Fewer than 2 rows yields an empty list, never an error.
pub fn normalize(schema: &ColumnSchema, rows: &[RawRow]) -> Result<Vec<ElectionRecord>> {
    if rows.len() < 2 {
        return Ok(Vec::new());
    }

    let header = &rows[0];
    if header.len() < schema.min_columns() {
        return Err(BoardError::schema(format!(
            "sheet has {} columns, schema expects at least {}",
            header.len(),
            schema.min_columns()
        )));
    }

    let mut records = Vec::new();
    let mut last_division = String::new();

    for row in &rows[1..] {
        let division = cell(row, schema.division);
        if !division.is_empty() {
            last_division = division.to_string();
        }

        let constituency = cell(row, schema.constituency);
        if constituency.is_empty() {
            continue;
        }

        let candidates = schema.candidates.map(|cols| Candidate {
            name: cell(row, cols.name).to_string(),
            votes: clean_number(cell(row, cols.votes)),
        });

        records.push(ElectionRecord {
            division: last_division.clone(),
            constituency: constituency.to_string(),
            candidates,
        });
    }

    Ok(records)
}
