use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_REPORT_TITLE: &str = "Rapport";

/// Join key between paragraphs, tiles and charts. Wire format is the raw
/// string; resolution always goes through [`ReportDocument::indicateur`].
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicateurId(String);

impl IndicateurId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IndicateurId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IndicateurId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "default_report_title")]
    pub titre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sous_titre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            titre: default_report_title(),
            sous_titre: None,
            date: None,
        }
    }
}

fn default_report_title() -> String {
    DEFAULT_REPORT_TITLE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSerie {
    pub date: String,
    pub val: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(default)]
    pub media: String,
    #[serde(default)]
    pub titre: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicateur {
    pub id: IndicateurId,
    pub label: String,
    #[serde(default)]
    pub unite: String,
    #[serde(default)]
    pub serie: Vec<PointSerie>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lien {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, rename = "ref")]
    pub cible: IndicateurId,
    #[serde(default)]
    pub plage: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraphe {
    #[serde(default)]
    pub titre: String,
    #[serde(default)]
    pub texte: String,
    #[serde(default)]
    pub liens: Vec<Lien>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuile {
    #[serde(default)]
    pub titre: String,
    #[serde(default)]
    pub consequence: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub kpi: IndicateurId,
    #[serde(default)]
    pub delai: String,
    #[serde(default)]
    pub impact: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub indicateurs: Vec<Indicateur>,
    #[serde(default)]
    pub paragraphes: Vec<Paragraphe>,
    #[serde(default)]
    pub tuiles: Vec<Tuile>,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

impl ReportDocument {
    pub fn indicateur(&self, id: &IndicateurId) -> Option<&Indicateur> {
        self.indicateurs.iter().find(|indicateur| &indicateur.id == id)
    }
}
