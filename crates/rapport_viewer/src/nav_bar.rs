use eframe::egui;
use rapport::{Meta, SectionId, SectionState};

use crate::theme;

/// Report header plus the section switcher. Returns true when the active
/// section should jump back to its top (title click or nav click).
pub fn draw(ui: &mut egui::Ui, meta: &Meta, sections: &mut SectionState) -> bool {
    let mut scroll_top = false;
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        let title = ui
            .heading(egui::RichText::new(meta.titre.as_str()).color(theme::INK))
            .interact(egui::Sense::click());
        if title.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if title.clicked() {
            scroll_top = true;
        }
        if let Some(sous_titre) = meta.sous_titre.as_deref() {
            ui.label(egui::RichText::new(sous_titre).color(theme::MUTED).italics());
        }
        if let Some(date) = meta.date.as_deref() {
            ui.label(egui::RichText::new(date).color(theme::MUTED).small());
        }
    });
    ui.add_space(2.0);
    ui.horizontal(|ui| {
        for section in SectionId::ORDERED {
            let selected = sections.is_active(section);
            if ui.selectable_label(selected, section.label()).clicked() {
                sections.activate(section);
                scroll_top = true;
            }
        }
    });
    ui.add_space(4.0);
    scroll_top
}
