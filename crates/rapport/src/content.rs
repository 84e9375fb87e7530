use log::warn;

use crate::charts::build_charts;
use crate::document::{IndicateurId, Meta, ReportDocument, SourceRef};
use crate::highlight::HighlightController;
use crate::registry::ChartRegistry;
use crate::sections::SectionState;

/// Link kinds other than this one (or an absent kind) are not renderable
/// and the link is dropped.
const SERIES_LINK_KIND: &str = "serie";

/// Raw period strings carried by a link, normalized only at highlight time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: String,
    pub end: String,
}

/// A paragraph link whose target indicator is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub target: IndicateurId,
    pub label: String,
    pub range: PeriodRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParagraph {
    pub titre: String,
    pub texte: String,
    pub links: Vec<ResolvedLink>,
}

/// Solution card content. The KPI label is resolved against the
/// indicators when possible and otherwise falls back to the raw id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTile {
    pub titre: String,
    pub consequence: String,
    pub solution: String,
    pub kpi_label: String,
    pub delai: String,
    pub impact: String,
}

pub fn resolve_paragraphes(document: &ReportDocument) -> Vec<ResolvedParagraph> {
    document
        .paragraphes
        .iter()
        .map(|paragraphe| {
            let links = paragraphe
                .liens
                .iter()
                .filter_map(|lien| {
                    if let Some(kind) = lien.kind.as_deref() {
                        if kind != SERIES_LINK_KIND {
                            warn!("link kind {kind:?} is not renderable, dropping link");
                            return None;
                        }
                    }
                    if lien.plage.len() < 2 {
                        warn!(
                            "link to {} carries {} period(s) instead of 2, dropping link",
                            lien.cible,
                            lien.plage.len()
                        );
                        return None;
                    }
                    let Some(indicateur) = document.indicateur(&lien.cible) else {
                        warn!("link targets unknown indicateur {}, dropping link", lien.cible);
                        return None;
                    };
                    Some(ResolvedLink {
                        target: lien.cible.clone(),
                        label: indicateur.label.clone(),
                        range: PeriodRange {
                            start: lien.plage[0].clone(),
                            end: lien.plage[1].clone(),
                        },
                    })
                })
                .collect();
            ResolvedParagraph {
                titre: paragraphe.titre.clone(),
                texte: paragraphe.texte.clone(),
                links,
            }
        })
        .collect()
}

pub fn resolve_tuiles(document: &ReportDocument) -> Vec<ResolvedTile> {
    document
        .tuiles
        .iter()
        .map(|tuile| {
            let kpi_label = if tuile.kpi.is_empty() {
                String::new()
            } else {
                match document.indicateur(&tuile.kpi) {
                    Some(indicateur) => indicateur.label.clone(),
                    None => tuile.kpi.to_string(),
                }
            };
            ResolvedTile {
                titre: tuile.titre.clone(),
                consequence: tuile.consequence.clone(),
                solution: tuile.solution.clone(),
                kpi_label,
                delai: tuile.delai.clone(),
                impact: tuile.impact.clone(),
            }
        })
        .collect()
}

/// Merges per-indicator sources with the supplementary list, first
/// occurrence of a (titre, date) pair wins, encounter order preserved.
pub fn collect_sources(document: &ReportDocument) -> Vec<SourceRef> {
    let mut seen: Vec<(String, String)> = Vec::new();
    let mut merged = Vec::new();
    let per_indicator = document
        .indicateurs
        .iter()
        .filter_map(|indicateur| indicateur.source.as_ref());
    for source in per_indicator.chain(document.sources.iter()) {
        let key = (source.titre.clone(), source.date.clone());
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        merged.push(source.clone());
    }
    merged
}

/// Everything a view needs to render one report, derived once from the
/// parsed document.
pub struct Presentation {
    pub meta: Meta,
    pub paragraphs: Vec<ResolvedParagraph>,
    pub tiles: Vec<ResolvedTile>,
    pub sources: Vec<SourceRef>,
    pub controller: HighlightController,
    pub sections: SectionState,
}

impl Presentation {
    pub fn from_document(document: ReportDocument) -> Self {
        let registry = ChartRegistry::from_charts(build_charts(&document));
        let paragraphs = resolve_paragraphes(&document);
        let tiles = resolve_tuiles(&document);
        let sources = collect_sources(&document);
        Self {
            meta: document.meta,
            paragraphs,
            tiles,
            sources,
            controller: HighlightController::new(registry),
            sections: SectionState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{collect_sources, resolve_paragraphes, resolve_tuiles, Presentation};
    use crate::document::ReportDocument;
    use crate::sections::SectionId;

    fn document() -> ReportDocument {
        serde_json::from_str(
            r#"{
                "meta": { "titre": "Finances publiques" },
                "indicateurs": [
                    {
                        "id": "dette",
                        "label": "Dette publique",
                        "unite": "% du PIB",
                        "serie": [
                            { "date": "2019", "val": 97.4 },
                            { "date": "2020", "val": 114.6 }
                        ],
                        "source": { "media": "rapport", "titre": "INSEE", "date": "2024" }
                    },
                    {
                        "id": "deficit",
                        "label": "Deficit public",
                        "unite": "% du PIB",
                        "serie": [ { "date": "2020", "val": -8.9 } ],
                        "source": { "media": "rapport", "titre": "INSEE", "date": "2024" }
                    }
                ],
                "paragraphes": [
                    {
                        "titre": "Constat",
                        "texte": "La dette a bondi pendant la crise.",
                        "liens": [
                            { "ref": "dette", "plage": ["2019", "2020"] },
                            { "type": "serie", "ref": "deficit", "plage": ["2020", "2020"] },
                            { "type": "carte", "ref": "dette", "plage": ["2019", "2020"] },
                            { "ref": "croissance", "plage": ["2019", "2020"] },
                            { "ref": "dette", "plage": ["2019"] }
                        ]
                    }
                ],
                "tuiles": [
                    {
                        "titre": "Reduire le deficit",
                        "consequence": "Charge d'interets croissante",
                        "solution": "Revue des depenses",
                        "kpi": "deficit",
                        "delai": "2027",
                        "impact": "eleve"
                    },
                    {
                        "titre": "Indexation",
                        "solution": "Geler les baremes",
                        "kpi": "ipc_hors_tabac"
                    }
                ],
                "sources": [
                    { "media": "web", "titre": "INSEE", "date": "2024" },
                    { "media": "web", "titre": "Eurostat", "date": "2023" }
                ]
            }"#,
        )
        .expect("document should parse")
    }

    #[test]
    fn resolve_keeps_only_renderable_links() {
        let paragraphs = resolve_paragraphes(&document());
        assert_eq!(paragraphs.len(), 1);

        let links = &paragraphs[0].links;
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target.as_str(), "dette");
        assert_eq!(links[0].label, "Dette publique");
        assert_eq!(links[0].range.start, "2019");
        assert_eq!(links[1].target.as_str(), "deficit");
    }

    #[test]
    fn tile_kpi_resolves_to_indicator_label() {
        let tiles = resolve_tuiles(&document());
        assert_eq!(tiles[0].kpi_label, "Deficit public");
    }

    #[test]
    fn tile_kpi_falls_back_to_raw_id() {
        let tiles = resolve_tuiles(&document());
        assert_eq!(tiles[1].kpi_label, "ipc_hors_tabac");
    }

    #[test]
    fn sources_dedupe_on_titre_and_date() {
        let sources = collect_sources(&document());
        let labels: Vec<(&str, &str)> = sources
            .iter()
            .map(|source| (source.titre.as_str(), source.date.as_str()))
            .collect();
        assert_eq!(labels, [("INSEE", "2024"), ("Eurostat", "2023")]);
        assert_eq!(sources[0].media, "rapport");
    }

    #[test]
    fn presentation_wires_charts_and_sections() {
        let presentation = Presentation::from_document(document());
        assert_eq!(presentation.controller.registry().len(), 2);
        assert_eq!(presentation.sections.active(), SectionId::Constat);
        assert_eq!(presentation.meta.titre, "Finances publiques");
        assert_eq!(presentation.paragraphs.len(), 1);
        assert_eq!(presentation.tiles.len(), 2);
    }
}
