use crate::domain::model::{Aggregate, Candidate, ElectionRecord, Party, Winner};
use std::collections::BTreeMap;

/// Party attribution rules, checked in order; first substring match wins. A
/// coalition label like "BNP-Jamaat" therefore classifies as BNP.
const PARTY_RULES: &[(&str, Party)] = &[
    ("bnp", Party::Bnp),
    ("jamaat", Party::Jamaat),
    ("ncp", Party::Ncp),
];

/// The party whose wins are broken down per division.
pub const TRACKED_PARTY: Party = Party::Bnp;

pub fn classify_party(name: &str) -> Party {
    let lowered = name.to_lowercase();
    PARTY_RULES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, party)| *party)
        .unwrap_or(Party::Others)
}

/// Candidate slots ordered by votes descending. The sort is stable, so exact
/// vote ties keep the original slot order.
pub fn ranked_candidates(record: &ElectionRecord) -> Vec<(usize, &Candidate)> {
    let mut order: Vec<_> = record.candidates.iter().enumerate().collect();
    order.sort_by(|a, b| b.1.votes.cmp(&a.1.votes));
    order
}

/// Winner of one record, or `None` while the seat is undeclared (zero total
/// votes) or the leading cell carries no usable name or count.
pub fn pick_winner(record: &ElectionRecord) -> Option<Winner> {
    if record.total_votes() == 0 {
        return None;
    }
    let (slot, top) = ranked_candidates(record).into_iter().next()?;
    if top.votes == 0 || top.name.is_empty() {
        return None;
    }
    Some(Winner {
        slot,
        name: top.name.clone(),
        votes: top.votes,
    })
}

/// Single pass over the record set. Stateless and deterministic; recomputed
/// wholesale for every snapshot.
pub fn aggregate(records: &[ElectionRecord]) -> Aggregate {
    let mut wins_by_party: BTreeMap<Party, u64> = Party::ALL.iter().map(|p| (*p, 0)).collect();
    let mut wins_by_division: BTreeMap<String, u64> = BTreeMap::new();
    let mut declared_seats = 0usize;
    let mut total_votes = 0u64;

    for record in records {
        if !record.division.is_empty() {
            wins_by_division.entry(record.division.clone()).or_insert(0);
        }

        total_votes += record.total_votes();

        // A seat is declared once any candidate has nonzero votes, even when
        // the leading cell has no usable name to attribute a party win to.
        if record.total_votes() > 0 {
            declared_seats += 1;
        }

        if let Some(winner) = pick_winner(record) {
            let party = classify_party(&winner.name);
            *wins_by_party.entry(party).or_insert(0) += 1;
            if party == TRACKED_PARTY && !record.division.is_empty() {
                *wins_by_division.entry(record.division.clone()).or_insert(0) += 1;
            }
        }
    }

    Aggregate {
        total_constituencies: records.len(),
        total_votes,
        declared_seats,
        undeclared_seats: records.len() - declared_seats,
        wins_by_party,
        wins_by_division,
    }
}
