//! Painter-drawn charts: category pie with legend, totals bar chart

use eframe::egui::{self, Color32, RichText};
use greenmeter_app::display::{category_color, BarEntry, PieSlice};
use greenmeter_types::{format_grouped, format_percent, format_total};
use std::f64::consts::TAU;

/// Arc segments for a full circle
const CIRCLE_SEGMENTS: f64 = 128.0;

/// Slices narrower than this get no percentage label
const MIN_LABELED_FRACTION: f64 = 0.04;

pub(crate) fn color(rgb: [u8; 3]) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

pub(crate) fn draw_pie_chart(ui: &mut egui::Ui, slices: &[PieSlice], radius: f32) {
    let size = egui::vec2(radius * 2.0 + 8.0, radius * 2.0 + 8.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();

    if slices.is_empty() {
        painter.circle_stroke(center, radius, egui::Stroke::new(1.0, Color32::from_gray(90)));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "No emissions",
            egui::FontId::proportional(13.0),
            Color32::from_gray(160),
        );
        return;
    }

    let point_at = |angle: f64, r: f32| {
        center + egui::vec2(angle.cos() as f32 * r, angle.sin() as f32 * r)
    };

    // Triangle fan per slice; each triangle is convex even when the slice is not
    for slice in slices {
        let fill = color(category_color(slice.category));
        let segments = ((slice.sweep_angle / TAU) * CIRCLE_SEGMENTS).ceil().max(1.0) as usize;
        for i in 0..segments {
            let a0 = slice.start_angle + slice.sweep_angle * i as f64 / segments as f64;
            let a1 = slice.start_angle + slice.sweep_angle * (i + 1) as f64 / segments as f64;
            painter.add(egui::Shape::convex_polygon(
                vec![center, point_at(a0, radius), point_at(a1, radius)],
                fill,
                egui::Stroke::NONE,
            ));
        }
    }

    // Slice borders
    if slices.len() > 1 {
        for slice in slices {
            painter.line_segment(
                [center, point_at(slice.start_angle, radius)],
                egui::Stroke::new(1.0, Color32::from_gray(25)),
            );
        }
    }

    for slice in slices.iter().filter(|s| s.fraction >= MIN_LABELED_FRACTION) {
        let mid = slice.start_angle + slice.sweep_angle / 2.0;
        painter.text(
            point_at(mid, radius * 0.68),
            egui::Align2::CENTER_CENTER,
            format_percent(slice.fraction * 100.0),
            egui::FontId::proportional(11.0),
            Color32::WHITE,
        );
    }
}

pub(crate) fn draw_pie_legend(ui: &mut egui::Ui, slices: &[PieSlice]) {
    egui::Grid::new("pie_legend")
        .num_columns(3)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            for slice in slices {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, color(category_color(slice.category)));
                ui.label(slice.category.name());
                ui.label(
                    RichText::new(format!(
                        "{} t ({})",
                        format_grouped(slice.value, 1),
                        format_percent(slice.fraction * 100.0)
                    ))
                    .weak(),
                );
                ui.end_row();
            }
        });
}

pub(crate) fn draw_bar_chart(ui: &mut egui::Ui, bars: &[BarEntry], width: f32, height: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, Color32::from_gray(30));

    if bars.is_empty() {
        return;
    }

    let label_height = 20.0;
    let value_height = 18.0;
    let plot_bottom = rect.max.y - label_height;
    let plot_height = (rect.height() - label_height - value_height).max(0.0);
    let slot = rect.width() / bars.len() as f32;

    // Grid lines
    for i in 0..=4 {
        let y = plot_bottom - (i as f32 / 4.0) * plot_height;
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.3, Color32::from_gray(60)),
        );
    }

    for (i, bar) in bars.iter().enumerate() {
        let center_x = rect.min.x + slot * (i as f32 + 0.5);
        let bar_width = slot * 0.5;
        let bar_height = bar.fraction as f32 * plot_height;
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(center_x - bar_width / 2.0, plot_bottom - bar_height),
            egui::pos2(center_x + bar_width / 2.0, plot_bottom),
        );
        painter.rect_filled(bar_rect, 2.0, color(bar.color));

        painter.text(
            egui::pos2(center_x, bar_rect.min.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format_total(bar.value),
            egui::FontId::proportional(12.0),
            Color32::WHITE,
        );
        painter.text(
            egui::pos2(center_x, rect.max.y - 2.0),
            egui::Align2::CENTER_BOTTOM,
            bar.label,
            egui::FontId::proportional(12.0),
            Color32::from_gray(200),
        );
    }
}
