use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use log::warn;

use crate::charts::ChartModel;
use crate::document::IndicateurId;

pub const NORMAL_SERIES_WEIGHT: f32 = 2.0;
pub const EMPHASIS_SERIES_WEIGHT: f32 = 3.5;

/// Shaded time span overlaid on one chart. Endpoints are already
/// normalized; the painter decides how to order them on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeAnnotation {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Live render state for one chart. The chart model is immutable after
/// registration; only emphasis and annotations mutate, and every mutation
/// bumps `revision` so views and tests can observe refreshes.
#[derive(Debug, Clone)]
pub struct ChartEntry {
    chart: ChartModel,
    emphasized_series: Option<usize>,
    annotations: BTreeMap<IndicateurId, RangeAnnotation>,
    revision: u64,
}

impl ChartEntry {
    fn new(chart: ChartModel) -> Self {
        Self {
            chart,
            emphasized_series: None,
            annotations: BTreeMap::new(),
            revision: 0,
        }
    }

    pub fn chart(&self) -> &ChartModel {
        &self.chart
    }

    /// Each chart hosts a single series today; the index form keeps the
    /// emphasis contract open for multi-series charts.
    pub fn series_weight(&self, series: usize) -> f32 {
        if self.emphasized_series == Some(series) {
            EMPHASIS_SERIES_WEIGHT
        } else {
            NORMAL_SERIES_WEIGHT
        }
    }

    pub fn emphasized_series(&self) -> Option<usize> {
        self.emphasized_series
    }

    pub fn annotation(&self, key: &IndicateurId) -> Option<&RangeAnnotation> {
        self.annotations.get(key)
    }

    pub fn annotations(&self) -> impl Iterator<Item = (&IndicateurId, &RangeAnnotation)> {
        self.annotations.iter()
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn set_emphasis(&mut self, series: Option<usize>) {
        self.emphasized_series = series;
    }

    pub(crate) fn set_annotation(&mut self, key: IndicateurId, annotation: RangeAnnotation) {
        self.annotations.insert(key, annotation);
    }

    pub(crate) fn remove_annotation(&mut self, key: &IndicateurId) -> bool {
        self.annotations.remove(key).is_some()
    }

    pub(crate) fn mark_refreshed(&mut self) {
        self.revision += 1;
    }
}

/// Session-lived map from indicator id to rendered chart state, in
/// registration order. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct ChartRegistry {
    entries: HashMap<IndicateurId, ChartEntry>,
    order: Vec<IndicateurId>,
}

impl ChartRegistry {
    pub fn from_charts(charts: Vec<ChartModel>) -> Self {
        let mut registry = Self::default();
        for chart in charts {
            registry.register(chart);
        }
        registry
    }

    /// First registration wins; a duplicate id is dropped.
    pub fn register(&mut self, chart: ChartModel) -> bool {
        if self.entries.contains_key(&chart.id) {
            warn!("indicateur {} already registered, dropping duplicate chart", chart.id);
            return false;
        }
        let id = chart.id.clone();
        self.entries.insert(id.clone(), ChartEntry::new(chart));
        self.order.push(id);
        true
    }

    pub fn contains(&self, id: &IndicateurId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn entry(&self, id: &IndicateurId) -> Option<&ChartEntry> {
        self.entries.get(id)
    }

    pub(crate) fn entry_mut(&mut self, id: &IndicateurId) -> Option<&mut ChartEntry> {
        self.entries.get_mut(id)
    }

    pub fn ordered_ids(&self) -> &[IndicateurId] {
        &self.order
    }

    pub fn ordered_entries(&self) -> impl Iterator<Item = &ChartEntry> {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartRegistry, RangeAnnotation, EMPHASIS_SERIES_WEIGHT, NORMAL_SERIES_WEIGHT};
    use crate::charts::{ChartKind, ChartModel};
    use crate::document::IndicateurId;
    use chrono::NaiveDate;

    fn chart(id: &str) -> ChartModel {
        ChartModel {
            id: IndicateurId::from(id),
            label: id.to_string(),
            unite: "%".to_string(),
            kind: ChartKind::Line,
            color: (54, 162, 235),
            points: Vec::new(),
            skipped_points: 0,
            source: None,
        }
    }

    fn annotation(year: i32) -> RangeAnnotation {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date");
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).expect("valid date");
        RangeAnnotation { start, end }
    }

    #[test]
    fn register_keeps_first_entry_for_duplicate_ids() {
        let mut registry = ChartRegistry::default();
        assert!(registry.register(chart("dette")));
        assert!(!registry.register(chart("dette")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ordered_entries_follow_registration_order() {
        let registry =
            ChartRegistry::from_charts(vec![chart("dette"), chart("chomage"), chart("inflation")]);
        let ids: Vec<&str> = registry
            .ordered_entries()
            .map(|entry| entry.chart().id.as_str())
            .collect();
        assert_eq!(ids, ["dette", "chomage", "inflation"]);
    }

    #[test]
    fn series_weight_follows_emphasis() {
        let mut registry = ChartRegistry::from_charts(vec![chart("dette")]);
        let id = IndicateurId::from("dette");

        let entry = registry.entry_mut(&id).expect("entry should exist");
        assert_eq!(entry.series_weight(0), NORMAL_SERIES_WEIGHT);

        entry.set_emphasis(Some(0));
        assert_eq!(entry.series_weight(0), EMPHASIS_SERIES_WEIGHT);
        assert_eq!(entry.series_weight(1), NORMAL_SERIES_WEIGHT);

        entry.set_emphasis(None);
        assert_eq!(entry.series_weight(0), NORMAL_SERIES_WEIGHT);
    }

    #[test]
    fn annotations_replace_under_same_key() {
        let mut registry = ChartRegistry::from_charts(vec![chart("dette")]);
        let id = IndicateurId::from("dette");

        let entry = registry.entry_mut(&id).expect("entry should exist");
        entry.set_annotation(id.clone(), annotation(2008));
        entry.set_annotation(id.clone(), annotation(2020));

        assert_eq!(entry.annotation_count(), 1);
        let kept = entry.annotation(&id).expect("annotation should exist");
        assert_eq!(kept.start, NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"));
    }

    #[test]
    fn removing_absent_annotation_is_a_no_op() {
        let mut registry = ChartRegistry::from_charts(vec![chart("dette")]);
        let id = IndicateurId::from("dette");

        let entry = registry.entry_mut(&id).expect("entry should exist");
        assert!(!entry.remove_annotation(&id));
    }
}
