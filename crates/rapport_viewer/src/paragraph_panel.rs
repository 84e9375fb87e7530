use eframe::egui;
use rapport::{LinkAnchor, ResolvedParagraph};

use crate::theme;

const LINKS_CAPTION: &str = "Séries liées :";

/// What the pointer did to the paragraph links this frame. At most one
/// link can be hovered at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkInteraction {
    pub hovered: Option<LinkAnchor>,
    pub clicked: Option<LinkAnchor>,
}

pub fn draw(ui: &mut egui::Ui, paragraphs: &[ResolvedParagraph]) -> LinkInteraction {
    let mut interaction = LinkInteraction::default();

    if paragraphs.is_empty() {
        ui.label(egui::RichText::new("Ce rapport ne contient aucun constat.").color(theme::MUTED));
        return interaction;
    }
    for (paragraph_index, paragraph) in paragraphs.iter().enumerate() {
        draw_paragraph_card(ui, paragraph_index, paragraph, &mut interaction);
        ui.add_space(10.0);
    }

    interaction
}

fn draw_paragraph_card(
    ui: &mut egui::Ui,
    paragraph_index: usize,
    paragraph: &ResolvedParagraph,
    interaction: &mut LinkInteraction,
) {
    egui::Frame::group(ui.style())
        .fill(theme::CARD_FILL)
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            if !paragraph.titre.is_empty() {
                ui.strong(egui::RichText::new(paragraph.titre.as_str()).color(theme::INK).size(15.0));
                ui.add_space(2.0);
            }
            ui.add(egui::Label::new(egui::RichText::new(paragraph.texte.as_str()).color(theme::INK)).wrap());

            if paragraph.links.is_empty() {
                return;
            }
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(LINKS_CAPTION).color(theme::MUTED).small());
                for (link_index, link) in paragraph.links.iter().enumerate() {
                    let anchor = LinkAnchor {
                        paragraphe: paragraph_index,
                        lien: link_index,
                    };
                    let response = ui
                        .link(link.label.as_str())
                        .on_hover_text(format!("de {} à {}", link.range.start, link.range.end));
                    if response.hovered() {
                        interaction.hovered = Some(anchor);
                    }
                    if response.clicked() {
                        interaction.clicked = Some(anchor);
                    }
                }
            });
        });
}
