//! Sidebar with activity inputs and adjustment sliders

use eframe::egui::{self, Color32, RichText, Ui};
use greenmeter_app::config::Config;
use greenmeter_domain::model::{ActivityInputs, AdjustmentParameters, Category, Lever};
use greenmeter_infra::Scenario;

/// Input sidebar state
pub struct InputPanel {
    /// Status message
    status_message: Option<(String, bool)>, // (message, is_error)
}

impl InputPanel {
    pub fn new() -> Self {
        Self {
            status_message: None,
        }
    }

    /// Draw the sidebar. Returns true when any input value changed.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        inputs: &mut ActivityInputs,
        adjustments: &mut AdjustmentParameters,
        config: &mut Config,
    ) -> bool {
        let mut changed = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("INPUTS - ACTIVITY DATA");
            ui.add_space(6.0);

            for category in Category::ALL {
                ui.label(category.input_label());
                let response = ui.add(
                    egui::DragValue::new(inputs.get_mut(category))
                        .speed(drag_speed(category))
                        .max_decimals(2),
                );
                changed |= response.changed();
                ui.add_space(4.0);
            }

            ui.separator();
            ui.heading("ADJUSTMENTS - SLIDERS");
            ui.add_space(6.0);

            for lever in Lever::ALL {
                ui.label(lever.label());
                let response = ui.add(
                    egui::Slider::new(adjustments.get_mut(lever), 0.0..=100.0).integer(),
                );
                changed |= response.changed();
                ui.add_space(4.0);
            }

            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.button("Open scenario...").clicked() {
                    changed |= self.open_scenario(inputs, adjustments);
                }

                if ui.button("Reset").clicked() {
                    *inputs = ActivityInputs::default();
                    *adjustments = AdjustmentParameters::default();
                    self.status_message = Some(("Inputs reset to defaults".to_string(), false));
                    changed = true;
                }
            });

            if ui.button("Save as defaults").clicked() {
                config.activity = *inputs;
                config.adjustments = *adjustments;
                self.status_message = Some(match config.save() {
                    Ok(()) => ("Defaults saved".to_string(), false),
                    Err(e) => {
                        eprintln!("Failed to save configuration: {}", e);
                        (format!("Save failed: {}", e), true)
                    }
                });
            }

            if let Some((ref message, is_error)) = self.status_message {
                ui.add_space(6.0);
                let color = if is_error {
                    Color32::LIGHT_RED
                } else {
                    Color32::LIGHT_GREEN
                };
                ui.label(RichText::new(message).color(color));
            }
        });

        changed
    }

    /// Pick a TOML scenario and apply it. Returns true if inputs changed.
    fn open_scenario(
        &mut self,
        inputs: &mut ActivityInputs,
        adjustments: &mut AdjustmentParameters,
    ) -> bool {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Scenario", &["toml"])
            .pick_file()
        else {
            return false;
        };

        match Scenario::load_from_file(&path) {
            Ok(scenario) => {
                scenario.apply(inputs, adjustments);
                self.status_message = Some((
                    format!(
                        "Loaded {} ({} fields)",
                        path.display(),
                        scenario.field_count()
                    ),
                    false,
                ));
                true
            }
            Err(e) => {
                eprintln!("Failed to load scenario {}: {}", path.display(), e);
                self.status_message = Some((e.to_string(), true));
                false
            }
        }
    }
}

/// Drag speed scaled to the typical magnitude of each input
fn drag_speed(category: Category) -> f64 {
    match category {
        Category::Planes | Category::Subcontractors => 1.0,
        Category::Forklifts => 10.0,
        _ => 100.0,
    }
}
