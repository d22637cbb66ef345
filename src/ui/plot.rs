use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::{generate_palette, medal_color};
use crate::data::model::{Medal, Sex};
use crate::data::query::{BiometricPoint, EditionCount, GenderSplit, YearCount};

const CHART_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Participation-over-time line charts
// ---------------------------------------------------------------------------

/// One distinct-count series against the edition (year) axis.
pub fn edition_chart(ui: &mut Ui, id: &str, metric_label: &str, series: &[EditionCount]) {
    let points: PlotPoints = series
        .iter()
        .map(|p| [p.edition as f64, p.count as f64])
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .x_axis_label("Edition")
        .y_axis_label(metric_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name(metric_label)
                    .color(Color32::LIGHT_BLUE)
                    .width(1.5),
            );
        });
}

/// Medal count per year for one country.
pub fn yearwise_chart(ui: &mut Ui, series: &[YearCount]) {
    let points: PlotPoints = series
        .iter()
        .map(|p| [p.year as f64, p.medals as f64])
        .collect();

    Plot::new("yearwise_tally")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Medals")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Medals")
                    .color(medal_color(Some(Medal::Gold)))
                    .width(1.5),
            );
        });
}

/// Distinct male and female athletes per year.
pub fn men_vs_women_chart(ui: &mut Ui, series: &[GenderSplit]) {
    let male: PlotPoints = series
        .iter()
        .map(|p| [p.year as f64, p.male as f64])
        .collect();
    let female: PlotPoints = series
        .iter()
        .map(|p| [p.year as f64, p.female as f64])
        .collect();

    Plot::new("men_vs_women")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Athletes")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(male).name("Male").color(Color32::LIGHT_BLUE).width(1.5));
            plot_ui.line(
                Line::new(female)
                    .name("Female")
                    .color(Color32::from_rgb(240, 120, 170))
                    .width(1.5),
            );
        });
}

// ---------------------------------------------------------------------------
// Age distributions
// ---------------------------------------------------------------------------

/// Overall + per-medal age distributions as count-per-age lines.
pub fn age_chart(ui: &mut Ui, id: &str, series: &[(&'static str, Vec<f32>)]) {
    let colors = [
        Color32::LIGHT_BLUE,
        medal_color(Some(Medal::Gold)),
        medal_color(Some(Medal::Silver)),
        medal_color(Some(Medal::Bronze)),
    ];

    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Age")
        .y_axis_label("Athletes")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (i, (label, ages)) in series.iter().enumerate() {
                let color = colors.get(i).copied().unwrap_or(Color32::GRAY);
                plot_ui.line(
                    Line::new(binned_counts(ages))
                        .name(*label)
                        .color(color)
                        .width(1.5),
                );
            }
        });
}

/// Gold-medalist age distribution per sport; one line per sport.
pub fn gold_age_chart(ui: &mut Ui, id: &str, series: &[(String, Vec<f32>)]) {
    let palette = generate_palette(series.len());

    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Age")
        .y_axis_label("Gold medalists")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for ((label, ages), color) in series.iter().zip(palette) {
                plot_ui.line(
                    Line::new(binned_counts(ages))
                        .name(label)
                        .color(color)
                        .width(1.0),
                );
            }
        });
}

/// Count of samples per whole year of age, in age order.
fn binned_counts(ages: &[f32]) -> PlotPoints<'_> {
    let mut bins: BTreeMap<i32, u32> = BTreeMap::new();
    for &age in ages {
        *bins.entry(age.round() as i32).or_default() += 1;
    }
    bins.into_iter()
        .map(|(age, count)| [age as f64, count as f64])
        .collect()
}

// ---------------------------------------------------------------------------
// Height vs weight scatter
// ---------------------------------------------------------------------------

/// One marker per athlete, coloured by medal outcome; circles for men,
/// diamonds for women.
pub fn biometric_scatter(ui: &mut Ui, points: &[BiometricPoint]) {
    let medal_groups = [
        Some(Medal::Gold),
        Some(Medal::Silver),
        Some(Medal::Bronze),
        None,
    ];

    Plot::new("weight_v_height")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Weight (kg)")
        .y_axis_label("Height (cm)")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for medal in medal_groups {
                for sex in [Sex::M, Sex::F] {
                    let group: PlotPoints = points
                        .iter()
                        .filter(|p| p.medal == medal && p.sex == sex)
                        .map(|p| [p.weight as f64, p.height as f64])
                        .collect();

                    let label = medal.map(Medal::label).unwrap_or("No Medal");
                    let shape = match sex {
                        Sex::M => MarkerShape::Circle,
                        Sex::F => MarkerShape::Diamond,
                    };

                    plot_ui.points(
                        Points::new(group)
                            .name(format!("{label} ({sex})"))
                            .color(medal_color(medal))
                            .shape(shape)
                            .radius(2.0),
                    );
                }
            }
        });
}
