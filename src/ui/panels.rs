use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – branding and filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Branding (optional asset, centered) ----
    match &state.branding {
        Some(uri) => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.add(
                    egui::Image::from_uri(uri.clone())
                        .max_width(ui.available_width() * 0.8)
                        .max_height(120.0)
                        .corner_radius(egui::CornerRadius::same(4)),
                );
            });
        }
        None => {
            ui.label(RichText::new("Branding image not found.").weak().italics());
        }
    }
    ui.add_space(4.0);

    ui.heading("Filters");
    ui.separator();

    let entities = match &state.dataset {
        Some(ds) => ds.entities().to_vec(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.strong(format!(
        "Entities  ({}/{})",
        state.selected_entities.len(),
        entities.len()
    ));

    // Select all / none buttons
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for entity in &entities {
                let mut checked = state.selected_entities.contains(entity);
                let text = RichText::new(entity).color(state.colors.color_for(entity));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_entity(entity);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Electricity Access");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} entities, {} selected",
                ds.len(),
                ds.entities().len(),
                state.selected_entities.len()
            ));
        }
    });
}
