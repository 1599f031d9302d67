use crate::domain::model::ElectionRecord;

/// Unique non-empty divisions, sorted alphabetically. Feeds the dashboard's
/// division filter list.
pub fn divisions(records: &[ElectionRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| !r.division.is_empty())
        .map(|r| r.division.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Constituency search plus optional division filter, as the dashboard table
/// applies them: case-insensitive substring match on the constituency name,
/// exact match on the division.
pub fn filter_records<'a>(
    records: &'a [ElectionRecord],
    search: &str,
    division: Option<&str>,
) -> Vec<&'a ElectionRecord> {
    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|r| r.constituency.to_lowercase().contains(&needle))
        .filter(|r| division.map_or(true, |d| r.division == d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Candidate;

    fn record(division: &str, constituency: &str) -> ElectionRecord {
        ElectionRecord {
            division: division.to_string(),
            constituency: constituency.to_string(),
            candidates: std::array::from_fn(|_| Candidate {
                name: String::new(),
                votes: 0,
            }),
        }
    }

    #[test]
    fn test_divisions_sorted_and_deduped() {
        let records = vec![
            record("Dhaka", "Dhaka-1"),
            record("Barishal", "Barishal-1"),
            record("Dhaka", "Dhaka-2"),
            record("", "Orphan-1"),
        ];
        assert_eq!(divisions(&records), vec!["Barishal", "Dhaka"]);
    }

    #[test]
    fn test_filter_records_search_is_case_insensitive() {
        let records = vec![record("Dhaka", "Dhaka-1"), record("Barishal", "Barishal-1")];
        let hits = filter_records(&records, "dhaka", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].constituency, "Dhaka-1");
    }

    #[test]
    fn test_filter_records_by_division() {
        let records = vec![
            record("Dhaka", "Dhaka-1"),
            record("Dhaka", "Dhaka-2"),
            record("Barishal", "Barishal-1"),
        ];
        assert_eq!(filter_records(&records, "", Some("Dhaka")).len(), 2);
        assert_eq!(filter_records(&records, "2", Some("Dhaka")).len(), 1);
        assert!(filter_records(&records, "x", Some("Dhaka")).is_empty());
    }
}
