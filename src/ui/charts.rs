use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::filter::{filter_by_entities, filter_by_year, mean_by_entity};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Evolution tab – access percent over time, one line per selected entity
// ---------------------------------------------------------------------------

pub fn evolution_chart(ui: &mut Ui, state: &AppState) {
    ui.label("Evolution of electricity access for the selected entities.");

    Plot::new("evolution_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Year")
        .y_axis_label("% of population with access")
        .show(ui, |plot_ui| {
            for entity in &state.selected_entities {
                let mut series: Vec<(i32, f64)> = state
                    .visible
                    .iter()
                    .filter(|r| r.entity == *entity)
                    .map(|r| (r.year, r.access_percent))
                    .collect();
                series.sort_by_key(|&(year, _)| year);

                let color = state.colors.color_for(entity);

                let points: PlotPoints = series
                    .iter()
                    .map(|&(year, value)| [year as f64, value])
                    .collect();
                plot_ui.line(Line::new(points).name(entity).color(color).width(1.5));

                // Mark each observation on top of the line.
                let markers: PlotPoints = series
                    .iter()
                    .map(|&(year, value)| [year as f64, value])
                    .collect();
                plot_ui.points(Points::new(markers).name(entity).color(color).radius(3.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Mean tab – horizontal bars, ascending by mean
// ---------------------------------------------------------------------------

pub fn mean_chart(ui: &mut Ui, state: &AppState) {
    ui.label("Mean access percentage per entity over all loaded years.");

    let means = mean_by_entity(&state.visible);

    let bars: Vec<Bar> = means
        .iter()
        .enumerate()
        .map(|(i, m)| {
            Bar::new(i as f64, m.mean_access)
                .name(&m.entity)
                .fill(state.colors.color_for(&m.entity))
        })
        .collect();

    let labels: Vec<String> = means.iter().map(|m| m.entity.clone()).collect();

    Plot::new("mean_plot")
        .x_axis_label("Mean % of population with access")
        .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Focus tab – strip plot for a single year
// ---------------------------------------------------------------------------

pub fn focus_chart(ui: &mut Ui, state: &mut AppState) {
    ui.label("Point-in-time comparison for the focus year.");

    let years: Vec<i32> = match &state.dataset {
        Some(ds) => ds.years().to_vec(),
        None => Vec::new(),
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Focus year:");
        let selected_text = state
            .focus_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "none".to_string());
        egui::ComboBox::from_id_salt("focus_year")
            .selected_text(selected_text)
            .show_ui(ui, |ui: &mut Ui| {
                for &year in &years {
                    if ui
                        .selectable_label(state.focus_year == Some(year), year.to_string())
                        .clicked()
                    {
                        state.focus_year = Some(year);
                    }
                }
            });
    });

    // An absent or unknown focus year is a valid state: the plot stays empty.
    let rows = match (&state.dataset, state.focus_year) {
        (Some(ds), Some(year)) => {
            filter_by_entities(&filter_by_year(&ds.records, year), &state.selected_entities)
        }
        _ => Vec::new(),
    };

    let labels: Vec<String> = rows.iter().map(|r| r.entity.clone()).collect();

    Plot::new("focus_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("% of population with access")
        .y_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for (i, r) in rows.iter().enumerate() {
                let name = format!("{}  {:.1}%", r.entity, r.access_percent);
                plot_ui.points(
                    Points::new(vec![[r.access_percent, i as f64]])
                        .name(name)
                        .color(state.colors.color_for(&r.entity))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(7.0),
                );
            }
        });
}

/// Axis formatter for categorical y axes: integer grid marks get the
/// category name, everything else stays blank.
fn category_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 || (value - rounded).abs() > 1e-6 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Filtered-data table (bottom panel)
// ---------------------------------------------------------------------------

pub fn data_table(ui: &mut Ui, state: &AppState) {
    egui::CollapsingHeader::new("Filtered data")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            use egui_extras::{Column, TableBuilder};

            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(240.0)
                .column(Column::auto().at_least(160.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Entity");
                    });
                    header.col(|ui| {
                        ui.strong("Year");
                    });
                    header.col(|ui| {
                        ui.strong("% access");
                    });
                })
                .body(|body| {
                    body.rows(18.0, state.visible.len(), |mut row| {
                        let r = &state.visible[row.index()];
                        row.col(|ui| {
                            ui.label(r.entity.as_str());
                        });
                        row.col(|ui| {
                            ui.label(r.year.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", r.access_percent));
                        });
                    });
                });
        });
}
