use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::query;
use crate::state::{AppState, Menu};

// ---------------------------------------------------------------------------
// Left side panel – section menu + per-section dropdowns
// ---------------------------------------------------------------------------

/// Render the sidebar: the analysis-section menu plus the dropdown filters
/// the active section needs.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Olympics Analysis");
    ui.separator();

    for menu in Menu::ALL {
        if ui
            .selectable_label(state.menu == menu, menu.label())
            .clicked()
        {
            state.set_menu(menu);
        }
    }
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the option lists so we can mutate state inside the combos.
    let (years, countries) = query::country_year_list(dataset);
    let sports = query::sport_list(dataset);

    let mut changed = false;
    match state.menu {
        Menu::MedalTally => {
            ui.strong("Select Year");
            changed |= year_combo(ui, "tally_year", &mut state.selected_year, &years);
            ui.add_space(4.0);
            ui.strong("Select Country");
            changed |= option_combo(
                ui,
                "tally_country",
                &mut state.selected_country,
                &countries,
                "Overall",
            );
        }
        Menu::Overall => {
            ui.strong("Select a Sport");
            changed |= option_combo(
                ui,
                "overall_sport",
                &mut state.selected_sport,
                &sports,
                "Overall",
            );
        }
        Menu::Country => {
            ui.strong("Select a Country");
            changed |= country_combo(ui, "country_focus", &mut state.country_focus, &countries);
        }
        Menu::Athlete => {
            ui.strong("Select a Sport");
            changed |= option_combo(
                ui,
                "athlete_sport",
                &mut state.athlete_sport,
                &sports,
                "Overall",
            );
        }
    }

    if changed {
        state.invalidate();
    }
}

/// Year dropdown with the leading "Overall" sentinel.
fn year_combo(ui: &mut Ui, id: &str, current: &mut Option<i32>, years: &[i32]) -> bool {
    let mut changed = false;
    let selected_text = current
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Overall".to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "Overall").clicked() {
                *current = None;
                changed = true;
            }
            for &year in years {
                if ui
                    .selectable_label(*current == Some(year), year.to_string())
                    .clicked()
                {
                    *current = Some(year);
                    changed = true;
                }
            }
        });
    changed
}

/// String dropdown with a leading sentinel mapping to `None`.
fn option_combo(
    ui: &mut Ui,
    id: &str,
    current: &mut Option<String>,
    options: &[String],
    sentinel: &str,
) -> bool {
    let mut changed = false;
    let selected_text = current.clone().unwrap_or_else(|| sentinel.to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), sentinel).clicked() {
                *current = None;
                changed = true;
            }
            for option in options {
                if ui
                    .selectable_label(current.as_deref() == Some(option), option)
                    .clicked()
                {
                    *current = Some(option.clone());
                    changed = true;
                }
            }
        });
    changed
}

/// Country dropdown without a sentinel – the country section always has a
/// concrete country in focus.
fn country_combo(
    ui: &mut Ui,
    id: &str,
    current: &mut Option<String>,
    countries: &[String],
) -> bool {
    let mut changed = false;
    let selected_text = current.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            for country in countries {
                if ui
                    .selectable_label(current.as_deref() == Some(country), country)
                    .clicked()
                {
                    *current = Some(country.clone());
                    changed = true;
                }
            }
        });
    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open athlete events…").clicked() {
                open_events_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open region mapping…").clicked() {
                open_regions_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows · {} editions · {} nations",
                ds.len(),
                ds.years.len(),
                ds.regions.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_events_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open athlete events table")
        .add_filter("Tables", &["csv", "json"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_events(&path) {
            log::error!("Failed to load events: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

pub fn open_regions_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open NOC region mapping")
        .add_filter("Tables", &["csv", "json"])
        .pick_file();

    if let Some(path) = file {
        if let Err(e) = state.load_regions(&path) {
            log::error!("Failed to load regions: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
