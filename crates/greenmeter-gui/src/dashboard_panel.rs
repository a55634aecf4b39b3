//! Central dashboard: metrics, optimized share pie, totals bar chart, category grid

use eframe::egui::{self, Color32, RichText, Ui};
use greenmeter_app::display::{metrics, pie_slices, total_bars};
use greenmeter_domain::model::Evaluation;
use greenmeter_types::format_grouped;

use crate::charts::{draw_bar_chart, draw_pie_chart, draw_pie_legend};

pub fn ui(ui: &mut Ui, evaluation: &Evaluation) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.columns(2, |columns| {
            render_summary(&mut columns[0], evaluation);
            render_comparison(&mut columns[1], evaluation);
        });
    });
}

fn render_summary(ui: &mut Ui, evaluation: &Evaluation) {
    ui.heading("Green Meter");
    ui.label(RichText::new("Carbon-Aware Logistics Dashboard").size(16.0));
    ui.add_space(10.0);

    for metric in metrics(evaluation) {
        ui.label(RichText::new(metric.label).weak());
        ui.label(
            RichText::new(metric.value)
                .size(26.0)
                .strong()
                .color(Color32::LIGHT_GREEN),
        );
        ui.add_space(6.0);
    }

    ui.add_space(10.0);
    ui.label(RichText::new("Emission Share by Category (Pie - Optimized)").strong().size(14.0));
    ui.add_space(5.0);

    let slices = pie_slices(evaluation.optimized());
    let radius = (ui.available_width() / 2.0 - 10.0).clamp(60.0, 150.0);
    draw_pie_chart(ui, &slices, radius);
    ui.add_space(6.0);
    draw_pie_legend(ui, &slices);
}

fn render_comparison(ui: &mut Ui, evaluation: &Evaluation) {
    ui.label(
        RichText::new("Total Emissions (tons CO2e) - Baseline vs Optimized")
            .strong()
            .size(14.0),
    );
    ui.add_space(5.0);

    let width = ui.available_width().max(200.0);
    draw_bar_chart(ui, &total_bars(evaluation), width, 280.0);

    ui.add_space(12.0);
    ui.label(RichText::new("Emissions by Category (tons CO2e)").strong());
    ui.add_space(4.0);

    egui::Grid::new("category_comparison_grid")
        .num_columns(4)
        .spacing([15.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Category").underline());
            ui.label(RichText::new("Baseline").underline());
            ui.label(RichText::new("Optimized").underline());
            ui.label(RichText::new("Change").underline());
            ui.end_row();

            for row in evaluation.comparisons() {
                ui.label(row.category.name());
                ui.label(format_grouped(row.baseline, 2));
                ui.label(format_grouped(row.optimized, 2));
                let change = RichText::new(format_grouped(row.change, 2));
                ui.label(if row.change < 0.0 {
                    change.color(Color32::LIGHT_GREEN)
                } else {
                    change
                });
                ui.end_row();
            }
        });
}
