use eframe::egui::{self, ScrollArea, Ui};

use crate::state::{AppState, View};
use crate::ui::{heatmap, panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PodiumApp {
    pub state: AppState,
}

impl PodiumApp {
    /// Start up and try the conventional file names in the working
    /// directory; missing files just leave the dataset unloaded.
    pub fn startup() -> Self {
        let mut app = Self::default();
        for (path, load) in [
            (
                "athlete_events.csv",
                AppState::load_events as fn(&mut AppState, &std::path::Path) -> anyhow::Result<()>,
            ),
            ("noc_regions.csv", AppState::load_regions),
        ] {
            let path = std::path::Path::new(path);
            if path.exists() {
                if let Err(e) = load(&mut app.state, path) {
                    log::error!("Failed to load {}: {e:#}", path.display());
                    app.state.status_message = Some(format!("Error: {e:#}"));
                }
            }
        }
        app
    }
}

impl eframe::App for PodiumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ensure_view();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: section menu + filters ----
        egui::SidePanel::left("menu_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the active analysis section ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Central panel – renders the derived view of the active section
// ---------------------------------------------------------------------------

fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open athlete_events and noc_regions files  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match view {
            View::Tally { title, tally } => {
                ui.heading(title);
                ui.add_space(8.0);
                tables::medal_tally_table(ui, tally);
            }
            View::Overall {
                stats,
                nations,
                events,
                athletes,
                events_heatmap,
                top,
            } => {
                ui.heading("Top Statistics");
                tables::top_stats_grid(ui, stats);
                ui.add_space(12.0);

                ui.heading("Participating Nations over the years");
                plot::edition_chart(ui, "nations_over_time", "Nations", nations);
                ui.add_space(12.0);

                ui.heading("Events over the years");
                plot::edition_chart(ui, "events_over_time", "Events", events);
                ui.add_space(12.0);

                ui.heading("Athletes over the years");
                plot::edition_chart(ui, "athletes_over_time", "Athletes", athletes);
                ui.add_space(12.0);

                ui.heading("No. of Events over time (Every Sport)");
                heatmap::heatmap(ui, "events_heatmap", events_heatmap);
                ui.add_space(12.0);

                ui.heading("Most Successful Athletes");
                tables::top_athletes_table(ui, "overall_top", top, true);
            }
            View::Country {
                country,
                tally,
                heatmap: country_heatmap,
                top,
            } => {
                ui.heading(format!("{country} Medal Tally over the years"));
                plot::yearwise_chart(ui, tally);
                ui.add_space(12.0);

                ui.heading(format!("{country} excels in the following sports"));
                heatmap::heatmap(ui, "country_heatmap", country_heatmap);
                ui.add_space(12.0);

                ui.heading(format!("Top 10 athletes of {country}"));
                tables::top_athletes_table(ui, "country_top", top, false);
            }
            View::Athlete {
                ages,
                gold_ages_by_sport,
                scatter,
                split,
            } => {
                ui.heading("Distribution of Age");
                plot::age_chart(ui, "age_dist", ages);
                ui.add_space(12.0);

                ui.heading("Age Distribution by Sport (Gold Medalists)");
                plot::gold_age_chart(ui, "age_by_sport", gold_ages_by_sport);
                ui.add_space(12.0);

                ui.heading("Height vs Weight");
                plot::biometric_scatter(ui, scatter);
                ui.add_space(12.0);

                ui.heading("Men vs Women Participation Over the Years");
                plot::men_vs_women_chart(ui, split);
            }
        });
}
