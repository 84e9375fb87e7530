pub mod charts;
pub mod content;
pub mod dates;
pub mod document;
pub mod highlight;
pub mod loader;
pub mod registry;
pub mod sections;

pub use charts::{build_charts, chart_kind_for, palette_color, ChartKind, ChartModel, SeriesPoint, PALETTE};
pub use content::{
    collect_sources, resolve_paragraphes, resolve_tuiles, PeriodRange, Presentation,
    ResolvedLink, ResolvedParagraph, ResolvedTile,
};
pub use dates::{normalize_period, normalize_range};
pub use document::{
    Indicateur, IndicateurId, Lien, Meta, Paragraphe, PointSerie, ReportDocument, SourceRef,
    Tuile,
};
pub use highlight::{HighlightController, HighlightOutcome, LinkAnchor, LinkHoverState};
pub use loader::{load_document_from_path, load_document_from_str, DocumentError, FALLBACK_MESSAGE};
#[cfg(not(target_arch = "wasm32"))]
pub use loader::{load_document, load_document_from_url};
pub use registry::{
    ChartEntry, ChartRegistry, RangeAnnotation, EMPHASIS_SERIES_WEIGHT, NORMAL_SERIES_WEIGHT,
};
pub use sections::{SectionId, SectionState};
