use egui_kittest::{kittest::Queryable as _, Harness};
use rapport::{IndicateurId, Presentation, SectionId, NORMAL_SERIES_WEIGHT};

use crate::{RapportApp, DEMO_DOCUMENT_JSON};

fn demo_app() -> RapportApp {
    let document =
        rapport::load_document_from_str(DEMO_DOCUMENT_JSON).expect("demo report should parse");
    RapportApp::from_presentation(Presentation::from_document(document))
}

fn app_harness(app: RapportApp) -> Harness<'static, RapportApp> {
    Harness::new_state(|ctx, app: &mut RapportApp| app.render(ctx), app)
}

#[test]
fn egui_kittest_nav_switches_sections() {
    let mut harness = app_harness(demo_app());

    harness.get_by_label("Solutions").click();
    harness.run();

    let presentation = harness.state().presentation.as_ref().expect("presentation");
    assert!(presentation.sections.is_active(SectionId::Solutions));
}

#[test]
fn egui_kittest_link_click_opens_the_charts_section() {
    let mut harness = app_harness(demo_app());

    harness.get_by_label("Dette publique").click();
    harness.run();

    let presentation = harness.state().presentation.as_ref().expect("presentation");
    assert!(presentation.sections.is_active(SectionId::Indicateurs));
    harness.get_by_label_contains("Solde public");
}

#[test]
fn egui_kittest_leaving_the_text_section_clears_link_emphasis() {
    let mut harness = app_harness(demo_app());

    harness.get_by_label("Dette publique").click();
    harness.run();
    harness.run();

    let presentation = harness.state().presentation.as_ref().expect("presentation");
    let entry = presentation
        .controller
        .registry()
        .entry(&IndicateurId::from("dette"))
        .expect("dette chart should be registered");
    assert_eq!(entry.series_weight(0), NORMAL_SERIES_WEIGHT);
    assert_eq!(entry.annotation_count(), 0);
}

#[test]
fn egui_kittest_fallback_message_replaces_the_page() {
    let harness = app_harness(RapportApp::load_failed("fichier introuvable".to_string()));

    harness.get_by_label_contains("Impossible de charger le rapport");
    harness.get_by_label_contains("fichier introuvable");
}

#[test]
fn egui_kittest_charts_section_lists_indicators() {
    let mut app = demo_app();
    if let Some(presentation) = app.presentation.as_mut() {
        presentation.sections.activate(SectionId::Indicateurs);
    }
    let harness = app_harness(app);

    harness.get_by_label_contains("Dette publique");
    harness.get_by_label_contains("Solde public");
}

#[test]
fn egui_kittest_tile_click_flips_to_the_solution_face() {
    let mut app = demo_app();
    if let Some(presentation) = app.presentation.as_mut() {
        presentation.sections.activate(SectionId::Solutions);
    }
    let mut harness = app_harness(app);

    harness.get_by_label("Maîtriser la dépense publique").click();
    harness.run();

    assert!(harness.state().view.flipped_tiles[0]);
    harness.get_by_label_contains("revue annuelle des dépenses");
}
