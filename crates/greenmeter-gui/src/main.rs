//! GUI entry point for Green Meter

mod app;
mod charts;
mod dashboard_panel;
mod input_panel;

use app::GreenMeterApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 780.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Green Meter",
        options,
        Box::new(|cc| Ok(Box::new(GreenMeterApp::new(cc)))),
    )
}
