mod chart_panel;
mod headless;
mod nav_bar;
mod paragraph_panel;
mod section_view;
mod source_panel;
mod theme;
mod tile_panel;
mod viewer_config;

#[cfg(test)]
mod ui_tests;

use std::env;

use eframe::egui;
use log::error;
use rapport::{Presentation, FALLBACK_MESSAGE};

use crate::section_view::ViewState;

const APP_TITLE: &str = "Rapport interactif";
const DEMO_DOCUMENT_JSON: &str = include_str!("../assets/rapport_demo.json");

fn main() -> eframe::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = viewer_config::resolve_viewer_config(&args);
    let _logger = init_logging(config.log_spec.as_str());

    if config.headless {
        match headless::run_check(config.document_location.as_deref(), DEMO_DOCUMENT_JSON) {
            Ok(summary) => {
                println!("{summary}");
                return Ok(());
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(2);
            }
        }
    }

    let app = RapportApp::boot(&config);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::vec2(config.window_width, config.window_height))
            .with_title(app.window_title()),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

fn init_logging(spec: &str) -> Option<flexi_logger::LoggerHandle> {
    match flexi_logger::Logger::try_with_env_or_str(spec).and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging init failed: {err}");
            None
        }
    }
}

fn load_presentation(location: Option<&str>) -> Result<Presentation, String> {
    let document = match location {
        Some(location) => {
            rapport::load_document(location).map_err(|err| format!("{location}: {err}"))?
        }
        None => rapport::load_document_from_str(DEMO_DOCUMENT_JSON)
            .map_err(|err| format!("rapport embarque: {err}"))?,
    };
    Ok(Presentation::from_document(document))
}

struct RapportApp {
    presentation: Option<Presentation>,
    load_error: Option<String>,
    view: ViewState,
}

impl RapportApp {
    fn boot(config: &viewer_config::ViewerConfig) -> Self {
        match load_presentation(config.document_location.as_deref()) {
            Ok(presentation) => Self::from_presentation(presentation),
            Err(err) => {
                error!("loading the report failed: {err}");
                Self::load_failed(err)
            }
        }
    }

    fn from_presentation(presentation: Presentation) -> Self {
        Self {
            presentation: Some(presentation),
            load_error: None,
            view: ViewState::default(),
        }
    }

    fn load_failed(detail: String) -> Self {
        Self {
            presentation: None,
            load_error: Some(detail),
            view: ViewState::default(),
        }
    }

    fn window_title(&self) -> String {
        self.presentation
            .as_ref()
            .map(|presentation| presentation.meta.titre.clone())
            .unwrap_or_else(|| APP_TITLE.to_string())
    }

    fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| match self.presentation.as_mut() {
            Some(presentation) => {
                if nav_bar::draw(ui, &presentation.meta, &mut presentation.sections) {
                    self.view.scroll_top = true;
                }
            }
            None => {
                ui.add_space(6.0);
                ui.heading(APP_TITLE);
                ui.add_space(6.0);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.presentation.as_mut() {
            Some(presentation) => section_view::draw(ui, presentation, &mut self.view),
            None => draw_load_failure(ui, self.load_error.as_deref()),
        });
    }
}

impl eframe::App for RapportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

fn draw_load_failure(ui: &mut egui::Ui, detail: Option<&str>) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.heading(egui::RichText::new(FALLBACK_MESSAGE).color(theme::MUTED));
        if let Some(detail) = detail {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(detail).color(theme::MUTED).small());
        }
    });
}
