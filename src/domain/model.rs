use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One spreadsheet row exactly as decoded. Positions are significant and not named.
pub type RawRow = Vec<String>;

pub const CANDIDATE_SLOTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub votes: u64,
}

/// Normalized result row for one constituency. Built once per fetch cycle,
/// immutable afterward; a new fetch supersedes the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionRecord {
    pub division: String,
    pub constituency: String,
    pub candidates: [Candidate; CANDIDATE_SLOTS],
}

impl ElectionRecord {
    pub fn total_votes(&self) -> u64 {
        self.candidates.iter().map(|c| c.votes).sum()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Party {
    #[serde(rename = "BNP")]
    Bnp,
    #[serde(rename = "Jamaat")]
    Jamaat,
    #[serde(rename = "NCP")]
    Ncp,
    #[serde(rename = "Others")]
    Others,
}

impl Party {
    pub const ALL: [Party; 4] = [Party::Bnp, Party::Jamaat, Party::Ncp, Party::Others];

    pub fn label(&self) -> &'static str {
        match self {
            Party::Bnp => "BNP",
            Party::Jamaat => "Jamaat",
            Party::Ncp => "NCP",
            Party::Others => "Others",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Winning candidate of one record. `slot` is the original candidate slot
/// (0-based); exact vote ties resolve to the lower slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub slot: usize,
    pub name: String,
    pub votes: u64,
}

/// Whole-dataset statistics, recomputed wholesale from the current record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub total_constituencies: usize,
    pub total_votes: u64,
    pub declared_seats: usize,
    pub undeclared_seats: usize,
    /// All four parties are always present, zeros included.
    pub wins_by_party: BTreeMap<Party, u64>,
    /// Tracked-party wins per division; every division seen is listed, even at 0.
    pub wins_by_division: BTreeMap<String, u64>,
}

impl Aggregate {
    /// Ordered chart feed: the four parties followed by the undeclared bucket.
    pub fn seat_distribution(&self) -> Vec<(String, u64)> {
        let mut slices: Vec<(String, u64)> = Party::ALL
            .iter()
            .map(|p| {
                (
                    p.label().to_string(),
                    self.wins_by_party.get(p).copied().unwrap_or(0),
                )
            })
            .collect();
        slices.push(("Undeclared".to_string(), self.undeclared_seats as u64));
        slices
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Aggregate {
            total_constituencies: 0,
            total_votes: 0,
            declared_seats: 0,
            undeclared_seats: 0,
            wins_by_party: Party::ALL.iter().map(|p| (*p, 0)).collect(),
            wins_by_division: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SourceStatus {
    /// The snapshot reflects a successful fetch.
    Fresh { fetched_at: DateTime<Utc> },
    /// The fetch or decode failed; records are empty and the aggregate zeroed.
    Failed { reason: String },
}

/// The one value the presentation layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub records: Vec<ElectionRecord>,
    pub aggregate: Aggregate,
    pub status: SourceStatus,
}

impl DashboardData {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        DashboardData {
            records: Vec::new(),
            aggregate: Aggregate::default(),
            status: SourceStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_fresh(&self) -> bool {
        matches!(self.status, SourceStatus::Fresh { .. })
    }
}
