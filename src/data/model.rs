use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Medal – outcome of one event appearance
// ---------------------------------------------------------------------------

/// Medal outcome. Rows without a medal carry `None` at the row level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn label(self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Sex
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Sex {
    M,
    F,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::M => f.write_str("M"),
            Sex::F => f.write_str("F"),
        }
    }
}

// ---------------------------------------------------------------------------
// EventRecord – one raw row of the athlete-event table
// ---------------------------------------------------------------------------

/// One (athlete, event, games) appearance as read from the input file.
/// Numeric demographics use "NA" for missing values in the source data.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Age", deserialize_with = "na_f32")]
    pub age: Option<f32>,
    #[serde(rename = "Height", deserialize_with = "na_f32")]
    pub height: Option<f32>,
    #[serde(rename = "Weight", deserialize_with = "na_f32")]
    pub weight: Option<f32>,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    #[serde(rename = "Games")]
    pub games: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Sport")]
    pub sport: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Medal", deserialize_with = "na_medal")]
    pub medal: Option<Medal>,
}

// ---------------------------------------------------------------------------
// RegionRecord – NOC → country/region mapping
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    #[serde(rename = "NOC")]
    pub noc: String,
    #[serde(rename = "region", deserialize_with = "na_string")]
    pub region: Option<String>,
    #[serde(rename = "notes", default, deserialize_with = "na_string")]
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// EventRow – one enriched row (Summer-only, region resolved)
// ---------------------------------------------------------------------------

/// One row of the enriched table: the event record joined with its region.
/// `region` stays `None` when the NOC code has no mapping (kept, not dropped).
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub name: String,
    pub sex: Sex,
    pub age: Option<f32>,
    pub height: Option<f32>,
    pub weight: Option<f32>,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: i32,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    pub region: Option<String>,
}

// -- Manual Eq/Hash so full rows can sit in a HashSet for dedup --
// Float fields never hold NaN (missing values are None), so the derived
// PartialEq is consistent with hashing on to_bits.

impl Eq for EventRow {}

impl std::hash::Hash for EventRow {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        fn bits(v: &Option<f32>) -> Option<u32> {
            v.map(f32::to_bits)
        }
        self.name.hash(state);
        self.sex.hash(state);
        bits(&self.age).hash(state);
        bits(&self.height).hash(state);
        bits(&self.weight).hash(state);
        self.team.hash(state);
        self.noc.hash(state);
        self.games.hash(state);
        self.year.hash(state);
        self.city.hash(state);
        self.sport.hash(state);
        self.event.hash(state);
        self.medal.hash(state);
        self.region.hash(state);
    }
}

impl EventRow {
    /// Medal indicator accessors – the one-hot medal columns of the
    /// enriched table. At most one of these is true per row.
    pub fn is_gold(&self) -> bool {
        self.medal == Some(Medal::Gold)
    }

    pub fn is_silver(&self) -> bool {
        self.medal == Some(Medal::Silver)
    }

    pub fn is_bronze(&self) -> bool {
        self.medal == Some(Medal::Bronze)
    }
}

// ---------------------------------------------------------------------------
// OlympicsDataset – the complete enriched table
// ---------------------------------------------------------------------------

/// The enriched, deduplicated table with pre-computed distinct-value lists.
/// Built once at startup and treated as immutable thereafter.
#[derive(Debug, Clone)]
pub struct OlympicsDataset {
    /// All enriched rows, in first-occurrence order.
    pub rows: Vec<EventRow>,
    /// Sorted distinct years (editions).
    pub years: Vec<i32>,
    /// Sorted distinct resolved region names (nulls excluded).
    pub regions: Vec<String>,
    /// Sorted distinct sports.
    pub sports: Vec<String>,
}

impl OlympicsDataset {
    /// Build the distinct-value indices from the enriched rows.
    pub fn from_rows(rows: Vec<EventRow>) -> Self {
        use std::collections::BTreeSet;

        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut regions: BTreeSet<&str> = BTreeSet::new();
        let mut sports: BTreeSet<&str> = BTreeSet::new();

        for row in &rows {
            years.insert(row.year);
            if let Some(region) = row.region.as_deref() {
                regions.insert(region);
            }
            sports.insert(&row.sport);
        }

        let years: Vec<i32> = years.into_iter().collect();
        let regions: Vec<String> = regions.iter().map(|s| s.to_string()).collect();
        let sports: Vec<String> = sports.iter().map(|s| s.to_string()).collect();

        OlympicsDataset {
            rows,
            years,
            regions,
            sports,
        }
    }

    /// Number of enriched rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// "NA"-aware deserializers
// ---------------------------------------------------------------------------
// The CSV deserializer hands fields over as inferred scalars or strings; the
// JSON loader yields numbers and nulls directly. These visitors accept both.

fn na_f32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
    struct V;

    impl<'de> Visitor<'de> for V {
        type Value = Option<f32>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"NA\", or null")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            match s.trim() {
                "" | "NA" => Ok(None),
                t => t
                    .parse::<f32>()
                    .map(Some)
                    .map_err(|_| E::custom(format!("'{t}' is not a number"))),
            }
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v as f32))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f32))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f32))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    d.deserialize_any(V)
}

fn na_medal<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Medal>, D::Error> {
    struct V;

    impl<'de> Visitor<'de> for V {
        type Value = Option<Medal>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("\"Gold\", \"Silver\", \"Bronze\", \"NA\", or null")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            match s.trim() {
                "" | "NA" => Ok(None),
                "Gold" => Ok(Some(Medal::Gold)),
                "Silver" => Ok(Some(Medal::Silver)),
                "Bronze" => Ok(Some(Medal::Bronze)),
                other => Err(E::custom(format!("unknown medal '{other}'"))),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    d.deserialize_any(V)
}

fn na_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    struct V;

    impl<'de> Visitor<'de> for V {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, \"NA\", or null")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
            match s.trim() {
                "" | "NA" => Ok(None),
                t => Ok(Some(t.to_string())),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    d.deserialize_any(V)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn row(name: &str, year: i32, medal: Option<Medal>) -> EventRow {
        EventRow {
            name: name.to_string(),
            sex: Sex::M,
            age: Some(24.0),
            height: Some(180.0),
            weight: Some(75.0),
            team: "France".to_string(),
            noc: "FRA".to_string(),
            games: format!("{year} Summer"),
            year,
            city: "Paris".to_string(),
            sport: "Fencing".to_string(),
            event: "Fencing Men's Foil".to_string(),
            medal,
            region: Some("France".to_string()),
        }
    }

    #[test]
    fn duplicate_rows_hash_and_compare_equal() {
        let a = row("Jean", 1900, Some(Medal::Gold));
        let b = row("Jean", 1900, Some(Medal::Gold));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        assert!(set.insert(a));
        assert!(!set.insert(b));
    }

    #[test]
    fn at_most_one_medal_indicator() {
        for medal in [None, Some(Medal::Gold), Some(Medal::Silver), Some(Medal::Bronze)] {
            let r = row("Jean", 1900, medal);
            let set = [r.is_gold(), r.is_silver(), r.is_bronze()]
                .iter()
                .filter(|&&b| b)
                .count();
            assert!(set <= 1);
        }
    }

    #[test]
    fn dataset_indices_are_sorted_and_distinct() {
        let ds = OlympicsDataset::from_rows(vec![
            row("Jean", 1904, None),
            row("Jean", 1900, Some(Medal::Gold)),
            row("Marie", 1900, None),
        ]);
        assert_eq!(ds.years, vec![1900, 1904]);
        assert_eq!(ds.regions, vec!["France".to_string()]);
        assert_eq!(ds.sports, vec!["Fencing".to_string()]);
    }
}
