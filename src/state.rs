use std::path::Path;

use anyhow::Result;

use crate::data::loader;
use crate::data::model::{EventRecord, Medal, OlympicsDataset, RegionRecord};
use crate::data::preprocess::preprocess;
use crate::data::query::{
    self, AthleteMedals, BiometricPoint, EditionCount, GenderSplit, Heatmap, MedalTally,
    OverTimeMetric, TopStats, YearCount,
};

// ---------------------------------------------------------------------------
// Menu sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    MedalTally,
    Overall,
    Country,
    Athlete,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::MedalTally, Menu::Overall, Menu::Country, Menu::Athlete];

    pub fn label(self) -> &'static str {
        match self {
            Menu::MedalTally => "Medal Tally",
            Menu::Overall => "Overall Analysis",
            Menu::Country => "Country-wise Analysis",
            Menu::Athlete => "Athlete-wise Analysis",
        }
    }
}

/// Sports shown in the gold-medalist age breakdown of the athlete section.
pub const FEATURED_SPORTS: &[&str] = &[
    "Basketball",
    "Judo",
    "Football",
    "Tug-Of-War",
    "Athletics",
    "Swimming",
    "Badminton",
    "Sailing",
    "Gymnastics",
    "Art Competitions",
    "Handball",
    "Weightlifting",
    "Wrestling",
    "Water Polo",
    "Hockey",
    "Rowing",
    "Fencing",
    "Shooting",
    "Boxing",
    "Taekwondo",
    "Cycling",
    "Diving",
    "Canoeing",
    "Tennis",
    "Golf",
    "Softball",
    "Archery",
    "Volleyball",
    "Synchronized Swimming",
    "Table Tennis",
    "Baseball",
    "Rhythmic Gymnastics",
    "Rugby Sevens",
    "Beach Volleyball",
    "Triathlon",
    "Rugby",
    "Polo",
    "Ice Hockey",
];

// ---------------------------------------------------------------------------
// Derived view data for the active section
// ---------------------------------------------------------------------------

/// Query results backing the central panel. Rebuilt when the menu or a
/// dropdown selection changes, never per frame.
pub enum View {
    Tally {
        title: String,
        tally: MedalTally,
    },
    Overall {
        stats: TopStats,
        nations: Vec<EditionCount>,
        events: Vec<EditionCount>,
        athletes: Vec<EditionCount>,
        events_heatmap: Heatmap,
        top: Vec<AthleteMedals>,
    },
    Country {
        country: String,
        tally: Vec<YearCount>,
        heatmap: Heatmap,
        top: Vec<AthleteMedals>,
    },
    Athlete {
        ages: Vec<(&'static str, Vec<f32>)>,
        gold_ages_by_sport: Vec<(String, Vec<f32>)>,
        scatter: Vec<BiometricPoint>,
        split: Vec<GenderSplit>,
    },
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Enriched dataset (None until both input tables are loaded).
    pub dataset: Option<OlympicsDataset>,

    /// Raw tables staged until their counterpart arrives.
    events: Option<Vec<EventRecord>>,
    regions: Option<Vec<RegionRecord>>,

    /// Active menu section.
    pub menu: Menu,

    /// Medal-tally dropdowns (None = "Overall").
    pub selected_year: Option<i32>,
    pub selected_country: Option<String>,

    /// Sport filter for the overall top-athletes table (None = "Overall").
    pub selected_sport: Option<String>,

    /// Country under inspection in the country-wise section.
    pub country_focus: Option<String>,

    /// Sport filter for the height-vs-weight scatter (None = "Overall").
    pub athlete_sport: Option<String>,

    /// Derived tables for the active section (rebuilt lazily).
    pub view: Option<View>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            events: None,
            regions: None,
            menu: Menu::MedalTally,
            selected_year: None,
            selected_country: None,
            selected_sport: None,
            country_focus: None,
            athlete_sport: None,
            view: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load and stage the athlete-event table; builds the dataset once the
    /// region table is present too.
    pub fn load_events(&mut self, path: &Path) -> Result<()> {
        let events = loader::load_events(path)?;
        log::info!("Loaded {} event rows from {}", events.len(), path.display());
        self.events = Some(events);
        self.try_build();
        Ok(())
    }

    /// Load and stage the NOC → region table.
    pub fn load_regions(&mut self, path: &Path) -> Result<()> {
        let regions = loader::load_regions(path)?;
        log::info!(
            "Loaded {} region mappings from {}",
            regions.len(),
            path.display()
        );
        self.regions = Some(regions);
        self.try_build();
        Ok(())
    }

    fn try_build(&mut self) {
        if self.events.is_none() || self.regions.is_none() {
            return;
        }
        // The region table stays staged so re-opening just the events file
        // rebuilds without asking for the mapping again.
        let events = self.events.take().unwrap_or_default();
        let regions = self.regions.clone().unwrap_or_default();
        let dataset = preprocess(events, &regions);
        log::info!(
            "Enriched table: {} rows, {} editions, {} nations",
            dataset.len(),
            dataset.years.len(),
            dataset.regions.len()
        );
        self.set_dataset(dataset);
    }

    /// Ingest the enriched dataset and reset the selections to defaults.
    pub fn set_dataset(&mut self, dataset: OlympicsDataset) {
        self.selected_year = None;
        self.selected_country = None;
        self.selected_sport = None;
        self.athlete_sport = None;
        self.country_focus = dataset.regions.first().cloned();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.invalidate();
    }

    pub fn set_menu(&mut self, menu: Menu) {
        if self.menu != menu {
            self.menu = menu;
            self.invalidate();
        }
    }

    /// Drop the cached view; it is rebuilt on the next frame.
    pub fn invalidate(&mut self) {
        self.view = None;
    }

    /// Make sure the derived view matches the current menu and selections.
    pub fn ensure_view(&mut self) {
        if self.view.is_some() {
            return;
        }
        let Some(df) = &self.dataset else {
            return;
        };
        self.view = Some(match self.menu {
            Menu::MedalTally => self.build_tally_view(df),
            Menu::Overall => Self::build_overall_view(df, self.selected_sport.as_deref()),
            Menu::Country => self.build_country_view(df),
            Menu::Athlete => Self::build_athlete_view(df, self.athlete_sport.as_deref()),
        });
    }

    fn build_tally_view(&self, df: &OlympicsDataset) -> View {
        let year = self.selected_year;
        let country = self.selected_country.as_deref();
        let title = match (year, country) {
            (None, None) => "Overall Tally".to_string(),
            (Some(y), None) => format!("Medal Tally in {y} Olympics"),
            (None, Some(c)) => format!("{c} overall performance"),
            (Some(y), Some(c)) => format!("{c} performance in {y} Olympics"),
        };
        View::Tally {
            title,
            tally: query::fetch_medal_tally(df, year, country),
        }
    }

    fn build_overall_view(df: &OlympicsDataset, sport: Option<&str>) -> View {
        View::Overall {
            stats: query::top_stats(df),
            nations: query::data_over_time(df, OverTimeMetric::Nations),
            events: query::data_over_time(df, OverTimeMetric::Events),
            athletes: query::data_over_time(df, OverTimeMetric::Athletes),
            events_heatmap: query::events_per_sport_heatmap(df),
            top: query::most_successful(df, sport),
        }
    }

    fn build_country_view(&self, df: &OlympicsDataset) -> View {
        let country = self
            .country_focus
            .clone()
            .or_else(|| df.regions.first().cloned())
            .unwrap_or_default();
        View::Country {
            tally: query::yearwise_medal_tally(df, &country),
            heatmap: query::country_event_heatmap(df, &country),
            top: query::most_successful_countrywise(df, &country),
            country,
        }
    }

    fn build_athlete_view(df: &OlympicsDataset, sport: Option<&str>) -> View {
        let ages = vec![
            ("Overall Age", query::age_distribution(df, None)),
            ("Gold Medalist", query::age_distribution(df, Some(Medal::Gold))),
            (
                "Silver Medalist",
                query::age_distribution(df, Some(Medal::Silver)),
            ),
            (
                "Bronze Medalist",
                query::age_distribution(df, Some(Medal::Bronze)),
            ),
        ];
        View::Athlete {
            ages,
            gold_ages_by_sport: query::gold_age_by_sport(df, FEATURED_SPORTS),
            scatter: query::weight_v_height(df, sport),
            split: query::men_vs_women(df),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{EventRow, Sex};

    fn dataset() -> OlympicsDataset {
        let row = EventRow {
            name: "Jean Dupont".to_string(),
            sex: Sex::M,
            age: Some(24.0),
            height: Some(180.0),
            weight: Some(75.0),
            team: "France".to_string(),
            noc: "FRA".to_string(),
            games: "1900 Summer".to_string(),
            year: 1900,
            city: "Paris".to_string(),
            sport: "Fencing".to_string(),
            event: "Fencing Men's Foil".to_string(),
            medal: Some(Medal::Gold),
            region: Some("France".to_string()),
        };
        OlympicsDataset::from_rows(vec![row])
    }

    #[test]
    fn set_dataset_defaults_country_focus_to_first_region() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.country_focus.as_deref(), Some("France"));
        assert_eq!(state.selected_year, None);
    }

    #[test]
    fn ensure_view_builds_once_and_invalidate_clears() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.ensure_view();
        assert!(state.view.is_some());

        state.set_menu(Menu::Country);
        assert!(state.view.is_none());
        state.ensure_view();
        let Some(View::Country { country, tally, .. }) = &state.view else {
            panic!("expected country view");
        };
        assert_eq!(country, "France");
        assert_eq!(tally.len(), 1);
    }

    #[test]
    fn tally_title_tracks_selections() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.selected_year = Some(1900);
        state.selected_country = Some("France".to_string());
        state.ensure_view();
        let Some(View::Tally { title, .. }) = &state.view else {
            panic!("expected tally view");
        };
        assert_eq!(title, "France performance in 1900 Olympics");
    }
}
