use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GridlightApp {
    pub state: AppState,
}

impl GridlightApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for GridlightApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The dashboard cannot operate without its dataset: on a failed
        // startup load, render only the failure.
        if let Some(err) = self.state.load_error.clone() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.vertical(|ui: &mut egui::Ui| {
                        ui.heading("Could not load the dataset");
                        ui.add_space(8.0);
                        ui.label(err);
                    });
                });
            });
            return;
        }

        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Bottom panel: filtered-data table ----
        egui::TopBottomPanel::bottom("data_panel").show(ctx, |ui| {
            charts::data_table(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: tabbed charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui: &mut egui::Ui| {
                ui.selectable_value(&mut self.state.tab, Tab::Evolution, "Evolution");
                ui.selectable_value(&mut self.state.tab, Tab::MeanByEntity, "Mean by entity");
                ui.selectable_value(&mut self.state.tab, Tab::FocusYear, "Focus year");
            });
            ui.separator();

            match self.state.tab {
                Tab::Evolution => charts::evolution_chart(ui, &self.state),
                Tab::MeanByEntity => charts::mean_chart(ui, &self.state),
                Tab::FocusYear => charts::focus_chart(ui, &mut self.state),
            }
        });
    }
}
