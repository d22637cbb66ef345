use std::collections::{HashMap, HashSet};

use super::model::{EventRecord, EventRow, OlympicsDataset, RegionRecord};

// ---------------------------------------------------------------------------
// Enrichment transform, run once at startup
// ---------------------------------------------------------------------------

/// Build the enriched table from the two raw inputs:
///
/// 1. keep Summer-season rows only;
/// 2. left-join the region mapping on NOC (unmatched rows keep `region = None`);
/// 3. drop exact duplicate rows (full-tuple equality);
/// 4. medal indicators are derived on [`EventRow`] from the medal field.
pub fn preprocess(events: Vec<EventRecord>, regions: &[RegionRecord]) -> OlympicsDataset {
    let region_by_noc: HashMap<&str, &str> = regions
        .iter()
        .filter_map(|r| r.region.as_deref().map(|name| (r.noc.as_str(), name)))
        .collect();

    let mut seen: HashSet<EventRow> = HashSet::new();
    let mut rows: Vec<EventRow> = Vec::with_capacity(events.len());

    for ev in events {
        if ev.season != "Summer" {
            continue;
        }
        let region = region_by_noc.get(ev.noc.as_str()).map(|s| s.to_string());
        let row = EventRow {
            name: ev.name,
            sex: ev.sex,
            age: ev.age,
            height: ev.height,
            weight: ev.weight,
            team: ev.team,
            noc: ev.noc,
            games: ev.games,
            year: ev.year,
            city: ev.city,
            sport: ev.sport,
            event: ev.event,
            medal: ev.medal,
            region,
        };
        // First occurrence wins; later exact duplicates are dropped.
        if seen.insert(row.clone()) {
            rows.push(row);
        }
    }

    OlympicsDataset::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Medal, Sex};

    fn record(
        name: &str,
        noc: &str,
        season: &str,
        year: i32,
        medal: Option<Medal>,
    ) -> EventRecord {
        EventRecord {
            name: name.to_string(),
            sex: Sex::M,
            age: Some(25.0),
            height: Some(180.0),
            weight: Some(72.0),
            team: noc.to_string(),
            noc: noc.to_string(),
            games: format!("{year} {season}"),
            year,
            season: season.to_string(),
            city: "Paris".to_string(),
            sport: "Athletics".to_string(),
            event: "Athletics Men's 100m".to_string(),
            medal,
        }
    }

    fn regions() -> Vec<RegionRecord> {
        vec![
            RegionRecord {
                noc: "FRA".to_string(),
                region: Some("France".to_string()),
                notes: None,
            },
            RegionRecord {
                noc: "GBR".to_string(),
                region: Some("UK".to_string()),
                notes: None,
            },
        ]
    }

    #[test]
    fn winter_rows_are_filtered_out() {
        let events = vec![
            record("Jean", "FRA", "Summer", 1900, None),
            record("Pierre", "FRA", "Winter", 1924, None),
        ];
        let ds = preprocess(events, &regions());
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows[0].name, "Jean");
    }

    #[test]
    fn left_join_keeps_unmapped_noc_with_null_region() {
        let events = vec![
            record("Jean", "FRA", "Summer", 1900, None),
            record("Ivan", "URS", "Summer", 1956, None),
        ];
        let ds = preprocess(events, &regions());
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0].region.as_deref(), Some("France"));
        assert_eq!(ds.rows[1].region, None);
    }

    #[test]
    fn exact_duplicates_are_dropped() {
        let events = vec![
            record("Jean", "FRA", "Summer", 1900, Some(Medal::Gold)),
            record("Jean", "FRA", "Summer", 1900, Some(Medal::Gold)),
            // Same athlete, different medal: not a duplicate.
            record("Jean", "FRA", "Summer", 1900, Some(Medal::Silver)),
        ];
        let ds = preprocess(events, &regions());
        assert_eq!(ds.len(), 2);
    }
}
