use chrono::NaiveDate;
use log::warn;

use crate::dates::normalize_period;
use crate::document::{Indicateur, IndicateurId, PointSerie, ReportDocument, SourceRef};

pub const PALETTE: [(u8, u8, u8); 6] = [
    (54, 162, 235),
    (255, 99, 132),
    (75, 192, 192),
    (255, 159, 64),
    (153, 102, 255),
    (255, 205, 86),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// One plotted observation. `label` keeps the document's own period
/// string for axis and tooltip display.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub id: IndicateurId,
    pub label: String,
    pub unite: String,
    pub kind: ChartKind,
    pub color: (u8, u8, u8),
    pub points: Vec<SeriesPoint>,
    pub skipped_points: usize,
    pub source: Option<SourceRef>,
}

impl ChartModel {
    pub fn from_indicateur(indicateur: &Indicateur, position: usize) -> Self {
        let mut points = Vec::with_capacity(indicateur.serie.len());
        let mut skipped_points = 0;
        for point in &indicateur.serie {
            match normalize_period(&point.date) {
                Some(date) => points.push(SeriesPoint {
                    date,
                    value: point.val,
                    label: point.date.trim().to_string(),
                }),
                None => skipped_points += 1,
            }
        }
        if skipped_points > 0 {
            warn!(
                "indicateur {}: skipped {skipped_points} point(s) with unreadable periods",
                indicateur.id
            );
        }

        Self {
            id: indicateur.id.clone(),
            label: indicateur.label.clone(),
            unite: indicateur.unite.clone(),
            kind: chart_kind_for(&indicateur.serie),
            color: palette_color(position),
            points,
            skipped_points,
            source: indicateur.source.clone(),
        }
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.points.first()?.date;
        let mut min = first;
        let mut max = first;
        for point in &self.points {
            min = min.min(point.date);
            max = max.max(point.date);
        }
        Some((min, max))
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.value;
        let mut min = first;
        let mut max = first;
        for point in &self.points {
            min = min.min(point.value);
            max = max.max(point.value);
        }
        Some((min, max))
    }
}

/// Any negative value in the series reads better as discrete bars
/// (deficits); an all-positive series stays a continuous line.
pub fn chart_kind_for(serie: &[PointSerie]) -> ChartKind {
    if serie.iter().any(|point| point.val < 0.0) {
        ChartKind::Bar
    } else {
        ChartKind::Line
    }
}

pub fn palette_color(position: usize) -> (u8, u8, u8) {
    PALETTE[position % PALETTE.len()]
}

pub fn build_charts(document: &ReportDocument) -> Vec<ChartModel> {
    document
        .indicateurs
        .iter()
        .enumerate()
        .map(|(position, indicateur)| ChartModel::from_indicateur(indicateur, position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_charts, chart_kind_for, palette_color, ChartKind, ChartModel, PALETTE};
    use crate::document::{Indicateur, IndicateurId, PointSerie, ReportDocument};
    use chrono::NaiveDate;

    fn point(date: &str, val: f64) -> PointSerie {
        PointSerie {
            date: date.to_string(),
            val,
        }
    }

    fn indicateur(id: &str, serie: Vec<PointSerie>) -> Indicateur {
        Indicateur {
            id: IndicateurId::from(id),
            label: id.to_string(),
            unite: "%".to_string(),
            serie,
            source: None,
        }
    }

    #[test]
    fn negative_value_selects_bar_chart() {
        let serie = vec![point("2020", 5.0), point("2021", -3.0)];
        assert_eq!(chart_kind_for(&serie), ChartKind::Bar);
    }

    #[test]
    fn all_positive_series_selects_line_chart() {
        let serie = vec![point("2020", 5.0), point("2021", 3.0)];
        assert_eq!(chart_kind_for(&serie), ChartKind::Line);
    }

    #[test]
    fn palette_wraps_around_by_position() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len()), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len() + 2), PALETTE[2]);
    }

    #[test]
    fn unreadable_periods_are_skipped_and_counted() {
        let model = ChartModel::from_indicateur(
            &indicateur("chomage", vec![point("2020", 8.0), point("n/a", 9.0), point("2022", 7.2)]),
            0,
        );
        assert_eq!(model.points.len(), 2);
        assert_eq!(model.skipped_points, 1);
        assert_eq!(
            model.points[1].date,
            NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid date")
        );
        assert_eq!(model.points[1].label, "2022");
    }

    #[test]
    fn build_charts_preserves_document_order_and_colors() {
        let document = ReportDocument {
            indicateurs: vec![
                indicateur("a", vec![point("2020", 1.0)]),
                indicateur("b", vec![point("2020", -1.0)]),
                indicateur("c", vec![point("2020", 2.0)]),
            ],
            ..ReportDocument::default()
        };

        let charts = build_charts(&document);
        assert_eq!(charts.len(), 3);
        assert_eq!(charts[0].id.as_str(), "a");
        assert_eq!(charts[1].kind, ChartKind::Bar);
        assert_eq!(charts[2].color, PALETTE[2]);
    }

    #[test]
    fn ranges_cover_all_points() {
        let model = ChartModel::from_indicateur(
            &indicateur(
                "deficit",
                vec![point("2021", -6.5), point("2019", -2.3), point("2020", -8.9)],
            ),
            1,
        );
        let (start, end) = model.date_range().expect("series should have dates");
        assert_eq!(start, NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid date"));
        assert_eq!(end, NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date"));

        let (min, max) = model.value_range().expect("series should have values");
        assert_eq!(min, -8.9);
        assert_eq!(max, -2.3);
    }
}
