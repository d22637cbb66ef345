//! End-to-end tests: CSV fixtures → loader → preprocess → query library.
//!
//! The fixture mirrors the shape of the real athlete_events/noc_regions
//! tables: an extra ID column, "NA" markers, a Winter row that must be
//! filtered, an exact duplicate row, a team medal, and an unmapped NOC.

use std::io::Write;

use podium::data::loader::{load_events, load_regions};
use podium::data::model::Medal;
use podium::data::preprocess::preprocess;
use podium::data::query::{
    self, GenderSplit, MedalTally, OverTimeMetric, YearCount,
};
use tempfile::Builder;

const EVENTS_CSV: &str = "\
ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal
1,Jean Dupont,M,24,180,75,France,FRA,1900 Summer,1900,Summer,Paris,Fencing,Fencing Men's Foil,Gold
1,Jean Dupont,M,24,180,75,France,FRA,1900 Summer,1900,Summer,Paris,Fencing,Fencing Men's Foil,Gold
2,Marie Laurent,F,22,168,58,France,FRA,1904 Summer,1904,Summer,St. Louis,Tennis,Tennis Women's Singles,Silver
3,Tom Brown,M,27,185,80,Great Britain,GBR,1904 Summer,1904,Summer,St. Louis,Rowing,Rowing Men's Coxed Pairs,Gold
4,Sam Jones,M,NA,183,NA,Great Britain,GBR,1904 Summer,1904,Summer,St. Louis,Rowing,Rowing Men's Coxed Pairs,Gold
5,Ivan Petrov,M,25,178,74,Mixed Team,ZZX,1904 Summer,1904,Summer,St. Louis,Athletics,Athletics Men's 100m,Bronze
6,Erik Nilsson,M,25,178,74,Sweden,SWE,1924 Winter,1924,Winter,Chamonix,Ice Hockey,Ice Hockey Men's Ice Hockey,Gold
7,Grace Field,F,21,170,60,Great Britain,GBR,2000 Summer,2000,Summer,Sydney,Athletics,Athletics Women's Marathon,NA
8,Tom Brown,M,23,185,80,Great Britain,GBR,1900 Summer,1900,Summer,Paris,Rowing,Rowing Men's Coxed Pairs,NA
";

const REGIONS_CSV: &str = "\
NOC,region,notes
FRA,France,
GBR,UK,
SWE,Sweden,
";

fn build_dataset() -> podium::data::model::OlympicsDataset {
    let mut events_file = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(events_file, "{EVENTS_CSV}").unwrap();
    let mut regions_file = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(regions_file, "{REGIONS_CSV}").unwrap();

    let events = load_events(events_file.path()).expect("load events");
    let regions = load_regions(regions_file.path()).expect("load regions");
    preprocess(events, &regions)
}

#[test]
fn preprocess_filters_joins_and_dedups() {
    let df = build_dataset();

    // 9 input rows − 1 duplicate − 1 Winter row.
    assert_eq!(df.len(), 7);
    assert!(df.rows.iter().all(|r| r.games.contains("Summer")));

    // Left join kept the unmapped NOC with a null region.
    let ivan = df.rows.iter().find(|r| r.name == "Ivan Petrov").unwrap();
    assert_eq!(ivan.region, None);

    // Distinct-value indices.
    assert_eq!(df.years, vec![1900, 1904, 2000]);
    assert_eq!(df.regions, vec!["France".to_string(), "UK".to_string()]);
}

#[test]
fn overall_tally_counts_each_medal_once() {
    let df = build_dataset();
    let MedalTally::ByRegion(rows) = query::fetch_medal_tally(&df, None, None) else {
        panic!("expected region grouping");
    };

    // The two rowers share one team gold; the unmapped NOC's bronze has no
    // region row to land in.
    let uk = rows.iter().find(|(r, _)| r == "UK").unwrap();
    assert_eq!(uk.1.gold, 1);
    assert_eq!(uk.1.total, 1);

    let france = rows.iter().find(|(r, _)| r == "France").unwrap();
    assert_eq!(france.1.gold, 1);
    assert_eq!(france.1.silver, 1);
    assert_eq!(france.1.total, 2);

    for (_, count) in &rows {
        assert_eq!(count.gold + count.silver + count.bronze, count.total);
    }
}

#[test]
fn tally_filters_by_year_and_country() {
    let df = build_dataset();

    let MedalTally::ByRegion(rows) = query::fetch_medal_tally(&df, Some(1904), None) else {
        panic!("expected region grouping");
    };
    let france = rows.iter().find(|(r, _)| r == "France").unwrap();
    assert_eq!(france.1.silver, 1);
    assert_eq!(france.1.gold, 0);

    let MedalTally::ByYear(rows) = query::fetch_medal_tally(&df, None, Some("France")) else {
        panic!("expected year grouping");
    };
    assert_eq!(rows[0].0, 1900);
    assert_eq!(rows[0].1.gold, 1);
    assert_eq!(rows[1].0, 1904);
    assert_eq!(rows[1].1.silver, 1);
}

#[test]
fn series_over_time_covers_every_edition() {
    let df = build_dataset();
    let nations = query::data_over_time(&df, OverTimeMetric::Nations);
    assert_eq!(nations.len(), df.years.len());

    // 1900: France + UK. 1904: France + UK (the unmapped NOC has no region).
    assert_eq!(nations[0].count, 2);
    assert_eq!(nations[1].count, 2);
    assert_eq!(nations[2].count, 1);
}

#[test]
fn top_athletes_exclude_non_medalists() {
    let df = build_dataset();
    let top = query::most_successful(&df, None);
    assert!(top.len() <= 15);
    assert!(top.iter().all(|a| a.medals > 0));
    assert!(top.iter().all(|a| a.name != "Grace Field"));

    let uk_top = query::most_successful_countrywise(&df, "UK");
    assert!(uk_top.len() <= 10);
    let tom = uk_top.iter().find(|a| a.name == "Tom Brown").unwrap();
    assert_eq!(tom.medals, 1);
    assert_eq!(tom.sport, "Rowing");
}

#[test]
fn yearwise_tally_reference_example() {
    let df = build_dataset();
    assert_eq!(
        query::yearwise_medal_tally(&df, "France"),
        vec![
            YearCount { year: 1900, medals: 1 },
            YearCount { year: 1904, medals: 1 },
        ]
    );
}

#[test]
fn country_heatmap_matches_deduplicated_medal_rows() {
    let df = build_dataset();
    let hm = query::country_event_heatmap(&df, "UK");
    // The shared rowing gold collapses to one cell count.
    assert_eq!(hm.cell("Rowing", 1904), Some(1));
    // 1900 has no UK medal rows, so the pivot has no 1900 column at all.
    assert_eq!(hm.cell("Rowing", 1900), None);
}

#[test]
fn men_vs_women_reference_example() {
    let df = build_dataset();
    let split = query::men_vs_women(&df);
    assert!(split.contains(&GenderSplit { year: 2000, male: 0, female: 1 }));
    // Tom Brown's 1900 row dedupes away to his first appearance (1904), so
    // 1900 only counts Jean.
    assert!(split.contains(&GenderSplit { year: 1900, male: 1, female: 0 }));
    assert!(split.contains(&GenderSplit { year: 1904, male: 3, female: 1 }));
}

#[test]
fn scatter_skips_missing_measurements_and_labels_no_medal() {
    let df = build_dataset();
    let points = query::weight_v_height(&df, None);
    // Sam Jones has no weight on record.
    assert!(points.iter().all(|p| p.name != "Sam Jones"));
    let grace = points.iter().find(|p| p.name == "Grace Field").unwrap();
    assert_eq!(grace.medal_label(), "No Medal");
}

#[test]
fn age_distribution_honours_medal_filter() {
    let df = build_dataset();
    // Gold first-appearance rows with an age on record: Jean (24) and
    // Tom Brown (27); Sam Jones has no age.
    let gold = query::age_distribution(&df, Some(Medal::Gold));
    assert_eq!(gold.len(), 2);
    assert!(gold.contains(&24.0));
    assert!(gold.contains(&27.0));

    let overall = query::age_distribution(&df, None);
    assert!(overall.len() >= gold.len());
}

#[test]
fn top_stats_distinct_counts() {
    let df = build_dataset();
    let stats = query::top_stats(&df);
    assert_eq!(stats.editions, 2); // 3 distinct years − 1
    assert_eq!(stats.nations, 2);
    assert_eq!(stats.hosts, 3); // Paris, St. Louis, Sydney
    assert_eq!(stats.athletes, 6);
}
