use eframe::egui;
use rapport::{
    IndicateurId, LinkAnchor, LinkHoverState, Presentation, ResolvedLink, ResolvedParagraph,
    SectionId,
};

use crate::{chart_panel, paragraph_panel, source_panel, tile_panel};

/// Window-side state that is not part of the report itself: the link hover
/// edge detector, the one-shot scroll commands and the tile faces.
#[derive(Default)]
pub struct ViewState {
    pub hover: LinkHoverState,
    pub scroll_target: Option<IndicateurId>,
    pub flipped_tiles: Vec<bool>,
    pub scroll_top: bool,
}

/// Renders exactly the active section inside its own scroll container.
/// Each section keeps its own scroll offset across switches.
pub fn draw(ui: &mut egui::Ui, presentation: &mut Presentation, view: &mut ViewState) {
    // Leaving the text section ends any link hover.
    if !presentation.sections.is_active(SectionId::Constat) {
        view.hover.clear(&mut presentation.controller);
    }

    let active = presentation.sections.active();
    let mut area = egui::ScrollArea::vertical()
        .id_salt(active.id())
        .auto_shrink([false, false]);
    if view.scroll_top {
        view.scroll_top = false;
        area = area.vertical_scroll_offset(0.0);
    }

    area.show(ui, |ui| match active {
        SectionId::Constat => {
            let interaction = paragraph_panel::draw(ui, &presentation.paragraphs);
            let hovered = interaction.hovered.and_then(|anchor| {
                link_at(&presentation.paragraphs, anchor).map(|link| (anchor, link))
            });
            view.hover.observe(hovered, &mut presentation.controller);

            if let Some(anchor) = interaction.clicked {
                if let Some(link) = link_at(&presentation.paragraphs, anchor) {
                    let target = link.target.clone();
                    if let Some(id) = presentation
                        .controller
                        .focus(&target, &mut presentation.sections)
                    {
                        view.scroll_target = Some(id);
                    }
                }
            }
        }
        SectionId::Indicateurs => {
            chart_panel::draw(
                ui,
                presentation.controller.registry(),
                view.scroll_target.take(),
            );
        }
        SectionId::Solutions => {
            tile_panel::draw(ui, &presentation.tiles, &mut view.flipped_tiles);
        }
        SectionId::Sources => source_panel::draw(ui, &presentation.sources),
    });
}

fn link_at(paragraphs: &[ResolvedParagraph], anchor: LinkAnchor) -> Option<&ResolvedLink> {
    paragraphs.get(anchor.paragraphe)?.links.get(anchor.lien)
}
