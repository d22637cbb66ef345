//! The query library: pure, stateless aggregations over the enriched table.
//!
//! Every function takes `&OlympicsDataset` plus plain scalar filters and
//! returns a freshly built result table for display. "Overall" dropdown
//! selections arrive here as `None`; the UI owns the sentinel label.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::model::{EventRow, Medal, OlympicsDataset, Sex};

// ---------------------------------------------------------------------------
// Result row types
// ---------------------------------------------------------------------------

/// Gold/silver/bronze counts for one tally row. `total` is maintained as
/// medals are added so it always equals the sum of the three columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalCount {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl MedalCount {
    fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
        }
        self.total += 1;
    }
}

/// Medal tally grouped by region (the default) or by year (when a single
/// country is viewed across all editions).
#[derive(Debug, Clone, PartialEq)]
pub enum MedalTally {
    /// Sorted by gold descending, region name ascending on ties.
    ByRegion(Vec<(String, MedalCount)>),
    /// Sorted by year ascending.
    ByYear(Vec<(i32, MedalCount)>),
}

impl MedalTally {
    pub fn len(&self) -> usize {
        match self {
            MedalTally::ByRegion(rows) => rows.len(),
            MedalTally::ByYear(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One point of a participation-over-time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditionCount {
    pub edition: i32,
    pub count: u32,
}

/// Which distinct-count series to chart over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverTimeMetric {
    Nations,
    Events,
    Athletes,
}

impl OverTimeMetric {
    pub fn label(self) -> &'static str {
        match self {
            OverTimeMetric::Nations => "Nations",
            OverTimeMetric::Events => "Events",
            OverTimeMetric::Athletes => "Athletes",
        }
    }

    fn value(self, row: &EventRow) -> Option<&str> {
        match self {
            OverTimeMetric::Nations => row.region.as_deref(),
            OverTimeMetric::Events => Some(&row.event),
            OverTimeMetric::Athletes => Some(&row.name),
        }
    }
}

/// One athlete in a top-athletes ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteMedals {
    pub name: String,
    pub medals: u32,
    pub sport: String,
    pub region: Option<String>,
}

/// Medal count for one year of a single country's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub medals: u32,
}

/// A dense sport × year pivot. `cells[i][j]` is the count for
/// `row_labels[i]` in `years[j]`; missing combinations are 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub row_labels: Vec<String>,
    pub years: Vec<i32>,
    pub cells: Vec<Vec<u32>>,
    pub max: u32,
}

impl Heatmap {
    pub fn cell(&self, sport: &str, year: i32) -> Option<u32> {
        let i = self.row_labels.iter().position(|s| s == sport)?;
        let j = self.years.iter().position(|&y| y == year)?;
        Some(self.cells[i][j])
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }
}

/// One athlete point for the height-vs-weight scatter. Built as an owned
/// copy so the missing-medal fill never touches the shared dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BiometricPoint {
    pub name: String,
    pub sex: Sex,
    pub weight: f32,
    pub height: f32,
    pub medal: Option<Medal>,
}

impl BiometricPoint {
    /// Medal label with the explicit no-medal sentinel filled in.
    pub fn medal_label(&self) -> &'static str {
        self.medal.map(Medal::label).unwrap_or("No Medal")
    }
}

/// Distinct male/female athlete counts for one year; the absent sex is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderSplit {
    pub year: i32,
    pub male: u32,
    pub female: u32,
}

/// Headline distinct counts for the Overall Analysis section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopStats {
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub athletes: usize,
    pub nations: usize,
}

// ---------------------------------------------------------------------------
// Shared dedup views
// ---------------------------------------------------------------------------

/// Rows deduplicated on the tally identifying key
/// (team, NOC, games, year, city, sport, event, medal), so a team medal
/// counts once rather than once per squad member.
fn tally_rows(df: &OlympicsDataset) -> Vec<&EventRow> {
    let mut seen = HashSet::new();
    df.rows
        .iter()
        .filter(move |r| {
            seen.insert((
                r.team.as_str(),
                r.noc.as_str(),
                r.games.as_str(),
                r.year,
                r.city.as_str(),
                r.sport.as_str(),
                r.event.as_str(),
                r.medal,
            ))
        })
        .collect()
}

/// Tally-deduplicated rows that carry a medal.
fn medal_rows(df: &OlympicsDataset) -> Vec<&EventRow> {
    tally_rows(df)
        .into_iter()
        .filter(|r| r.medal.is_some())
        .collect()
}

/// One row per (name, region) pair, first occurrence kept – the athlete
/// view used by the demographic queries.
fn athlete_rows(df: &OlympicsDataset) -> Vec<&EventRow> {
    let mut seen = HashSet::new();
    df.rows
        .iter()
        .filter(move |r| seen.insert((r.name.as_str(), r.region.as_deref())))
        .collect()
}

// ---------------------------------------------------------------------------
// Medal tally
// ---------------------------------------------------------------------------

/// The main tally. `year`/`country` are `None` for "Overall". Grouped by
/// year when a single country is viewed across all editions, otherwise by
/// region. Regionless rows (unmapped NOC) cannot be attributed and are
/// skipped by the region grouping.
pub fn fetch_medal_tally(
    df: &OlympicsDataset,
    year: Option<i32>,
    country: Option<&str>,
) -> MedalTally {
    let rows = tally_rows(df).into_iter().filter(|r| {
        year.is_none_or(|y| r.year == y)
            && country.is_none_or(|c| r.region.as_deref() == Some(c))
    });

    if country.is_some() && year.is_none() {
        let mut by_year: BTreeMap<i32, MedalCount> = BTreeMap::new();
        for r in rows {
            let entry = by_year.entry(r.year).or_default();
            if let Some(m) = r.medal {
                entry.add(m);
            }
        }
        MedalTally::ByYear(by_year.into_iter().collect())
    } else {
        let mut by_region: BTreeMap<&str, MedalCount> = BTreeMap::new();
        for r in rows {
            let Some(region) = r.region.as_deref() else {
                continue;
            };
            let entry = by_region.entry(region).or_default();
            if let Some(m) = r.medal {
                entry.add(m);
            }
        }
        let mut out: Vec<(String, MedalCount)> = by_region
            .into_iter()
            .map(|(region, count)| (region.to_string(), count))
            .collect();
        // Gold descending; region name breaks ties so the order is stable.
        out.sort_by(|a, b| b.1.gold.cmp(&a.1.gold).then_with(|| a.0.cmp(&b.0)));
        MedalTally::ByRegion(out)
    }
}

/// Distinct years and distinct resolved regions for the tally dropdowns.
/// The UI prepends the "Overall" sentinel to both.
pub fn country_year_list(df: &OlympicsDataset) -> (Vec<i32>, Vec<String>) {
    (df.years.clone(), df.regions.clone())
}

// ---------------------------------------------------------------------------
// Participation over time
// ---------------------------------------------------------------------------

/// Count of distinct `metric` values per edition. Output has exactly one
/// row per distinct year in the dataset.
pub fn data_over_time(df: &OlympicsDataset, metric: OverTimeMetric) -> Vec<EditionCount> {
    let mut per_year: BTreeMap<i32, BTreeSet<&str>> = BTreeMap::new();
    for r in &df.rows {
        let values = per_year.entry(r.year).or_default();
        if let Some(v) = metric.value(r) {
            values.insert(v);
        }
    }
    per_year
        .into_iter()
        .map(|(edition, values)| EditionCount {
            edition,
            count: values.len() as u32,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Top athletes
// ---------------------------------------------------------------------------

/// Top 15 medal winners, optionally restricted to one sport.
pub fn most_successful(df: &OlympicsDataset, sport: Option<&str>) -> Vec<AthleteMedals> {
    top_athletes(df, sport, None, 15)
}

/// Top 10 medal winners of one country.
pub fn most_successful_countrywise(df: &OlympicsDataset, country: &str) -> Vec<AthleteMedals> {
    top_athletes(df, None, Some(country), 10)
}

fn top_athletes(
    df: &OlympicsDataset,
    sport: Option<&str>,
    country: Option<&str>,
    limit: usize,
) -> Vec<AthleteMedals> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for r in &df.rows {
        if r.medal.is_none() {
            continue;
        }
        if !sport.is_none_or(|s| r.sport == s) {
            continue;
        }
        if !country.is_none_or(|c| r.region.as_deref() == Some(c)) {
            continue;
        }
        *counts.entry(r.name.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
    // Count descending, name ascending on ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(name, medals)| {
            // Join back to the full table for sport/region (first occurrence).
            let first = df.rows.iter().find(|r| r.name == name);
            AthleteMedals {
                name: name.to_string(),
                medals,
                sport: first.map(|r| r.sport.clone()).unwrap_or_default(),
                region: first.and_then(|r| r.region.clone()),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Country views
// ---------------------------------------------------------------------------

/// Medal count per year for one country, year ascending.
pub fn yearwise_medal_tally(df: &OlympicsDataset, country: &str) -> Vec<YearCount> {
    let mut per_year: BTreeMap<i32, u32> = BTreeMap::new();
    for r in medal_rows(df) {
        if r.region.as_deref() == Some(country) {
            *per_year.entry(r.year).or_default() += 1;
        }
    }
    per_year
        .into_iter()
        .map(|(year, medals)| YearCount { year, medals })
        .collect()
}

/// Sport × year medal counts for one country.
pub fn country_event_heatmap(df: &OlympicsDataset, country: &str) -> Heatmap {
    build_heatmap(
        medal_rows(df)
            .into_iter()
            .filter(|r| r.region.as_deref() == Some(country)),
    )
}

/// Sport × year count of distinct events held, across the whole dataset.
pub fn events_per_sport_heatmap(df: &OlympicsDataset) -> Heatmap {
    let mut seen = HashSet::new();
    let rows = df
        .rows
        .iter()
        .filter(move |r| seen.insert((r.year, r.sport.as_str(), r.event.as_str())));
    build_heatmap(rows)
}

fn build_heatmap<'a>(rows: impl Iterator<Item = &'a EventRow>) -> Heatmap {
    let mut counts: BTreeMap<&str, BTreeMap<i32, u32>> = BTreeMap::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    for r in rows {
        years.insert(r.year);
        *counts
            .entry(r.sport.as_str())
            .or_default()
            .entry(r.year)
            .or_default() += 1;
    }

    let years: Vec<i32> = years.into_iter().collect();
    let mut row_labels = Vec::with_capacity(counts.len());
    let mut cells = Vec::with_capacity(counts.len());
    let mut max = 0;
    for (sport, per_year) in counts {
        let row: Vec<u32> = years
            .iter()
            .map(|y| per_year.get(y).copied().unwrap_or(0))
            .collect();
        max = max.max(row.iter().copied().max().unwrap_or(0));
        row_labels.push(sport.to_string());
        cells.push(row);
    }

    Heatmap {
        row_labels,
        years,
        cells,
        max,
    }
}

// ---------------------------------------------------------------------------
// Athlete demographics
// ---------------------------------------------------------------------------

/// Athletes with both weight and height on record, optionally restricted to
/// one sport. One point per (name, region) pair.
pub fn weight_v_height(df: &OlympicsDataset, sport: Option<&str>) -> Vec<BiometricPoint> {
    athlete_rows(df)
        .into_iter()
        .filter(|r| sport.is_none_or(|s| r.sport == s))
        .filter_map(|r| {
            let weight = r.weight?;
            let height = r.height?;
            Some(BiometricPoint {
                name: r.name.clone(),
                sex: r.sex,
                weight,
                height,
                medal: r.medal,
            })
        })
        .collect()
}

/// Distinct male/female athletes per year. Years where one sex is absent
/// keep a 0 on that side.
pub fn men_vs_women(df: &OlympicsDataset) -> Vec<GenderSplit> {
    let mut per_year: BTreeMap<i32, (u32, u32)> = BTreeMap::new();
    for r in athlete_rows(df) {
        let entry = per_year.entry(r.year).or_default();
        match r.sex {
            Sex::M => entry.0 += 1,
            Sex::F => entry.1 += 1,
        }
    }
    per_year
        .into_iter()
        .map(|(year, (male, female))| GenderSplit { year, male, female })
        .collect()
}

/// Ages of all distinct athletes, or of the medalists of one color.
pub fn age_distribution(df: &OlympicsDataset, medal: Option<Medal>) -> Vec<f32> {
    athlete_rows(df)
        .into_iter()
        .filter(|r| medal.is_none_or(|m| r.medal == Some(m)))
        .filter_map(|r| r.age)
        .collect()
}

/// Gold-medalist age samples per sport, skipping sports with no data.
pub fn gold_age_by_sport(df: &OlympicsDataset, sports: &[&str]) -> Vec<(String, Vec<f32>)> {
    let athletes = athlete_rows(df);
    sports
        .iter()
        .filter_map(|&sport| {
            let ages: Vec<f32> = athletes
                .iter()
                .filter(|r| r.sport == sport && r.is_gold())
                .filter_map(|r| r.age)
                .collect();
            if ages.is_empty() {
                None
            } else {
                Some((sport.to_string(), ages))
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Headline statistics
// ---------------------------------------------------------------------------

/// Distinct counts for the Overall Analysis header. The edition count is
/// distinct years minus one: the 1906 Intercalated Games are in the data
/// but are not an official edition.
pub fn top_stats(df: &OlympicsDataset) -> TopStats {
    let mut hosts: HashSet<&str> = HashSet::new();
    let mut events: HashSet<&str> = HashSet::new();
    let mut athletes: HashSet<&str> = HashSet::new();
    for r in &df.rows {
        hosts.insert(&r.city);
        events.insert(&r.event);
        athletes.insert(&r.name);
    }
    TopStats {
        editions: df.years.len().saturating_sub(1),
        hosts: hosts.len(),
        sports: df.sports.len(),
        events: events.len(),
        athletes: athletes.len(),
        nations: df.regions.len(),
    }
}

/// Sorted distinct sports for the sport dropdowns.
pub fn sport_list(df: &OlympicsDataset) -> Vec<String> {
    df.sports.clone()
}
