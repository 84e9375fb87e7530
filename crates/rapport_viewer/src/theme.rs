use eframe::egui;

pub const PAGE_FILL: egui::Color32 = egui::Color32::from_rgb(250, 250, 247);
pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(224, 222, 214);
pub const INK: egui::Color32 = egui::Color32::from_rgb(33, 37, 41);
pub const MUTED: egui::Color32 = egui::Color32::from_rgb(110, 117, 126);
pub const LINK: egui::Color32 = egui::Color32::from_rgb(13, 110, 253);
pub const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(233, 231, 224);

const ANNOTATION_BASE: egui::Color32 = egui::Color32::from_rgb(255, 193, 7);

/// Light, paper-like look for the whole window.
pub fn apply(context: &egui::Context) {
    let mut style = (*context.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = PAGE_FILL;
    style.visuals.window_fill = CARD_FILL;
    style.visuals.hyperlink_color = LINK;
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    context.set_style(style);
}

pub fn series_color(rgb: (u8, u8, u8)) -> egui::Color32 {
    let (r, g, b) = rgb;
    egui::Color32::from_rgb(r, g, b)
}

pub fn series_fill(rgb: (u8, u8, u8)) -> egui::Color32 {
    series_color(rgb).gamma_multiply(0.35)
}

pub fn annotation_fill() -> egui::Color32 {
    ANNOTATION_BASE.gamma_multiply(0.16)
}

pub fn annotation_edge() -> egui::Color32 {
    ANNOTATION_BASE.gamma_multiply(0.75)
}

#[cfg(test)]
mod tests {
    use super::{apply, series_color, series_fill, LINK, PAGE_FILL};
    use eframe::egui;

    #[test]
    fn apply_sets_a_light_paper_style() {
        let context = egui::Context::default();
        apply(&context);

        let style = context.style();
        assert!(!style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, PAGE_FILL);
        assert_eq!(style.visuals.hyperlink_color, LINK);
    }

    #[test]
    fn series_fill_is_translucent() {
        let fill = series_fill((54, 162, 235));
        assert!(fill.a() < series_color((54, 162, 235)).a());
    }
}
