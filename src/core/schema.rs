use crate::domain::model::CANDIDATE_SLOTS;
use crate::utils::error::{BoardError, Result};

/// Column positions for one candidate group. The sheet repeats grouped
/// sub-columns per candidate with inconsistent header text, so extraction is
/// position-based rather than header-name based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateColumns {
    pub name: usize,
    pub votes: usize,
}

/// Declared cell mapping for the results sheet. Validated once at pipeline
/// construction so a malformed layout fails fast instead of silently
/// misreading columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub division: usize,
    pub constituency: usize,
    pub candidates: [CandidateColumns; CANDIDATE_SLOTS],
}

impl ColumnSchema {
    /// Layout of the published sheet: division in column A, constituency in
    /// column C, candidate/vote pairs at F/G, J/K and N/O.
    pub fn standard() -> Self {
        ColumnSchema {
            division: 0,
            constituency: 2,
            candidates: [
                CandidateColumns { name: 5, votes: 6 },
                CandidateColumns { name: 9, votes: 10 },
                CandidateColumns { name: 13, votes: 14 },
            ],
        }
    }

    /// Ordered (field, column index) bindings, in sheet order.
    pub fn bindings(&self) -> Vec<(&'static str, usize)> {
        let mut bindings = vec![
            ("division", self.division),
            ("constituency", self.constituency),
        ];
        let labels = [
            ("candidate_1", "votes_1"),
            ("candidate_2", "votes_2"),
            ("candidate_3", "votes_3"),
        ];
        for (cols, (name_label, votes_label)) in self.candidates.iter().zip(labels) {
            bindings.push((name_label, cols.name));
            bindings.push((votes_label, cols.votes));
        }
        bindings
    }

    /// Minimum width a conforming sheet row can have.
    pub fn min_columns(&self) -> usize {
        self.bindings()
            .iter()
            .map(|(_, index)| index + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn validate(&self) -> Result<()> {
        let bindings = self.bindings();
        for pair in bindings.windows(2) {
            let (prev_field, prev_index) = pair[0];
            let (field, index) = pair[1];
            if index <= prev_index {
                return Err(BoardError::schema(format!(
                    "column index for {} ({}) must come after {} ({})",
                    field, index, prev_field, prev_index
                )));
            }
        }
        for (slot, cols) in self.candidates.iter().enumerate() {
            if cols.votes != cols.name + 1 {
                return Err(BoardError::schema(format!(
                    "votes column for candidate {} ({}) must immediately follow its name column ({})",
                    slot + 1,
                    cols.votes,
                    cols.name
                )));
            }
        }
        Ok(())
    }
}
