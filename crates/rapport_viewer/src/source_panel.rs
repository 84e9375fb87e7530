use eframe::egui;
use rapport::SourceRef;

use crate::theme;

pub fn draw(ui: &mut egui::Ui, sources: &[SourceRef]) {
    if sources.is_empty() {
        ui.label(egui::RichText::new("Aucune source référencée.").color(theme::MUTED));
        return;
    }
    for source in sources {
        draw_source_row(ui, source);
        ui.add_space(6.0);
    }
}

fn draw_source_row(ui: &mut egui::Ui, source: &SourceRef) {
    egui::Frame::group(ui.style())
        .fill(theme::CARD_FILL)
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                if !source.media.is_empty() {
                    ui.label(
                        egui::RichText::new(source.media.to_uppercase())
                            .color(theme::MUTED)
                            .small(),
                    );
                }
                ui.strong(egui::RichText::new(source.titre.as_str()).color(theme::INK));
                if !source.date.is_empty() {
                    ui.label(egui::RichText::new(source.date.as_str()).color(theme::MUTED).small());
                }
                if let Some(url) = source.url.as_deref() {
                    ui.hyperlink_to("Consulter", url);
                }
            });
        });
}
