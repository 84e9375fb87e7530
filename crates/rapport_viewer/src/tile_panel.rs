use eframe::egui;
use rapport::ResolvedTile;

use crate::theme;

const TILE_WIDTH: f32 = 280.0;
const FRONT_HINT: &str = "Voir la solution";
const BACK_HINT: &str = "Revenir au constat";

pub fn draw(ui: &mut egui::Ui, tiles: &[ResolvedTile], flipped: &mut Vec<bool>) {
    sync_flip_state(flipped, tiles.len());

    if tiles.is_empty() {
        ui.label(egui::RichText::new("Ce rapport ne propose aucune solution.").color(theme::MUTED));
        return;
    }
    ui.horizontal_wrapped(|ui| {
        for (index, tile) in tiles.iter().enumerate() {
            let response = draw_tile(ui, index, tile, flipped[index]);
            if response.clicked() {
                toggle(flipped, index);
            }
        }
    });
}

fn draw_tile(ui: &mut egui::Ui, index: usize, tile: &ResolvedTile, flipped: bool) -> egui::Response {
    let allocated = ui.allocate_ui(egui::vec2(TILE_WIDTH, 0.0), |ui| {
        ui.push_id(index, |ui| {
            egui::Frame::group(ui.style())
                .fill(theme::CARD_FILL)
                .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
                .corner_radius(egui::CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_width(TILE_WIDTH - 18.0);
                    if flipped {
                        draw_back(ui, tile);
                    } else {
                        draw_front(ui, tile);
                    }
                    ui.add_space(4.0);
                    let hint = if flipped { BACK_HINT } else { FRONT_HINT };
                    ui.label(egui::RichText::new(hint).color(theme::LINK).small());
                })
                .response
        })
        .inner
    });
    allocated.inner.interact(egui::Sense::click())
}

fn draw_front(ui: &mut egui::Ui, tile: &ResolvedTile) {
    ui.strong(egui::RichText::new(tile.titre.as_str()).color(theme::INK).size(14.0));
    if !tile.consequence.is_empty() {
        ui.add_space(2.0);
        ui.add(egui::Label::new(egui::RichText::new(tile.consequence.as_str()).color(theme::INK)).wrap());
    }
}

fn draw_back(ui: &mut egui::Ui, tile: &ResolvedTile) {
    ui.strong(egui::RichText::new("Solution").color(theme::INK).size(14.0));
    if !tile.solution.is_empty() {
        ui.add_space(2.0);
        ui.add(egui::Label::new(egui::RichText::new(tile.solution.as_str()).color(theme::INK)).wrap());
    }
    ui.add_space(4.0);
    detail_row(ui, "KPI", tile.kpi_label.as_str());
    detail_row(ui, "Délai", tile.delai.as_str());
    detail_row(ui, "Impact", tile.impact.as_str());
}

fn detail_row(ui: &mut egui::Ui, tag: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(tag).color(theme::MUTED).small());
        ui.label(egui::RichText::new(value).color(theme::INK).small());
    });
}

fn sync_flip_state(flipped: &mut Vec<bool>, count: usize) {
    flipped.resize(count, false);
}

fn toggle(flipped: &mut [bool], index: usize) {
    if let Some(slot) = flipped.get_mut(index) {
        *slot = !*slot;
    }
}
