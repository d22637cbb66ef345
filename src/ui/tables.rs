use eframe::egui::{Grid, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::query::{AthleteMedals, MedalCount, MedalTally, TopStats};

// ---------------------------------------------------------------------------
// Medal tally table
// ---------------------------------------------------------------------------

pub fn medal_tally_table(ui: &mut Ui, tally: &MedalTally) {
    if tally.is_empty() {
        ui.label("No medals for this selection.");
        return;
    }

    let key_header = match tally {
        MedalTally::ByRegion(_) => "Region",
        MedalTally::ByYear(_) => "Year",
    };

    ui.push_id("medal_tally", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(140.0))
            .columns(Column::auto().at_least(60.0), 4)
            .header(22.0, |mut header| {
                for title in [key_header, "Gold", "Silver", "Bronze", "Total"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                let mut add_row = |key: String, count: &MedalCount| {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(key.clone());
                        });
                        for value in [count.gold, count.silver, count.bronze, count.total] {
                            row.col(|ui| {
                                ui.label(value.to_string());
                            });
                        }
                    });
                };
                match tally {
                    MedalTally::ByRegion(rows) => {
                        for (region, count) in rows {
                            add_row(region.clone(), count);
                        }
                    }
                    MedalTally::ByYear(rows) => {
                        for (year, count) in rows {
                            add_row(year.to_string(), count);
                        }
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top athletes table
// ---------------------------------------------------------------------------

pub fn top_athletes_table(ui: &mut Ui, id: &str, rows: &[AthleteMedals], show_region: bool) {
    if rows.is_empty() {
        ui.label("No medal winners for this selection.");
        return;
    }

    let n_cols = if show_region { 4 } else { 3 };

    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder().at_least(180.0))
            .columns(Column::auto().at_least(70.0), n_cols - 1)
            .header(22.0, |mut header| {
                let mut titles = vec!["Name", "Medals", "Sport"];
                if show_region {
                    titles.push("Region");
                }
                for title in titles {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for athlete in rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(&athlete.name);
                        });
                        row.col(|ui| {
                            ui.label(athlete.medals.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&athlete.sport);
                        });
                        if show_region {
                            row.col(|ui| {
                                ui.label(athlete.region.as_deref().unwrap_or("—"));
                            });
                        }
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Top statistics grid
// ---------------------------------------------------------------------------

pub fn top_stats_grid(ui: &mut Ui, stats: &TopStats) {
    let cells = [
        ("Editions", stats.editions),
        ("Hosts", stats.hosts),
        ("Sports", stats.sports),
        ("Events", stats.events),
        ("Nations", stats.nations),
        ("Athletes", stats.athletes),
    ];

    Grid::new("top_stats")
        .num_columns(3)
        .spacing([48.0, 12.0])
        .show(ui, |ui: &mut Ui| {
            for (i, (label, value)) in cells.iter().enumerate() {
                ui.vertical(|ui: &mut Ui| {
                    ui.strong(*label);
                    ui.heading(value.to_string());
                });
                if i % 3 == 2 {
                    ui.end_row();
                }
            }
        });
}
