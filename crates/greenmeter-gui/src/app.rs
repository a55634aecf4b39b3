//! Main application structure: input sidebar, dashboard, assumptions footer

use eframe::egui::{self, RichText};
use greenmeter_app::config::Config;
use greenmeter_domain::model::{ActivityInputs, AdjustmentParameters, Evaluation};
use greenmeter_domain::service::{evaluate, ASSUMPTIONS};

use crate::dashboard_panel;
use crate::input_panel::InputPanel;

/// Main application state
pub struct GreenMeterApp {
    /// Current activity values
    inputs: ActivityInputs,
    /// Current slider positions
    adjustments: AdjustmentParameters,
    /// Result of the last recompute
    evaluation: Evaluation,
    /// Sidebar state
    input_panel: InputPanel,
    /// Application configuration
    config: Config,
}

impl GreenMeterApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            eprintln!("Failed to load configuration, using defaults: {}", e);
            Config::default()
        });

        let inputs = config.activity;
        let adjustments = config.adjustments;

        Self {
            evaluation: evaluate(&inputs, &adjustments),
            inputs,
            adjustments,
            input_panel: InputPanel::new(),
            config,
        }
    }

    /// Re-run the calculator from the current inputs
    fn recompute(&mut self) {
        self.evaluation = evaluate(&self.inputs, &self.adjustments);
    }
}

impl eframe::App for GreenMeterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed = false;

        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                changed = self.input_panel.ui(
                    ui,
                    &mut self.inputs,
                    &mut self.adjustments,
                    &mut self.config,
                );
            });

        if changed {
            self.recompute();
        }

        egui::TopBottomPanel::bottom("assumptions").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(RichText::new("Assumptions:").strong());
            for assumption in ASSUMPTIONS {
                ui.label(format!("- {}", assumption));
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard_panel::ui(ui, &self.evaluation);
        });
    }
}
