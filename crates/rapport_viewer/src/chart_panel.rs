use chrono::Datelike;
use eframe::egui;
use rapport::{
    ChartEntry, ChartKind, ChartModel, ChartRegistry, IndicateurId, RangeAnnotation, SeriesPoint,
};

use crate::theme;

const CHART_HEIGHT: f32 = 230.0;
const LEFT_GUTTER: f32 = 46.0;
const RIGHT_PAD: f32 = 10.0;
const TOP_PAD: f32 = 8.0;
const BOTTOM_GUTTER: f32 = 20.0;
const GRID_ROWS: usize = 3;

pub fn draw(ui: &mut egui::Ui, registry: &ChartRegistry, scroll_target: Option<IndicateurId>) {
    if registry.is_empty() {
        ui.label(egui::RichText::new("Aucun indicateur dans ce rapport.").color(theme::MUTED));
        return;
    }
    for entry in registry.ordered_entries() {
        let rect = draw_chart_card(ui, entry);
        if scroll_target.as_ref() == Some(&entry.chart().id) {
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
        }
        ui.add_space(10.0);
    }
}

fn draw_chart_card(ui: &mut egui::Ui, entry: &ChartEntry) -> egui::Rect {
    let chart = entry.chart();
    let frame = egui::Frame::group(ui.style())
        .fill(theme::CARD_FILL)
        .stroke(egui::Stroke::new(1.0, theme::CARD_STROKE))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new("●").color(theme::series_color(chart.color)));
                ui.strong(egui::RichText::new(chart.label.as_str()).color(theme::INK).size(14.0));
                if !chart.unite.is_empty() {
                    ui.label(
                        egui::RichText::new(format!("({})", chart.unite))
                            .color(theme::MUTED)
                            .small(),
                    );
                }
            });
            draw_plot(ui, entry);
            if chart.skipped_points > 0 {
                ui.label(
                    egui::RichText::new(format!(
                        "{} point(s) sans période lisible non affiché(s)",
                        chart.skipped_points
                    ))
                    .color(theme::MUTED)
                    .small(),
                );
            }
            if let Some(source) = chart.source.as_ref() {
                ui.label(
                    egui::RichText::new(format!("Source : {} ({})", source.titre, source.date))
                        .color(theme::MUTED)
                        .small(),
                );
            }
        });
    frame.response.rect
}

fn draw_plot(ui: &mut egui::Ui, entry: &ChartEntry) {
    let chart = entry.chart();
    let width = ui.available_width().max(240.0);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, CHART_HEIGHT), egui::Sense::hover());
    let outer = response.rect;
    let plot = egui::Rect::from_min_max(
        egui::pos2(outer.left() + LEFT_GUTTER, outer.top() + TOP_PAD),
        egui::pos2(outer.right() - RIGHT_PAD, outer.bottom() - BOTTOM_GUTTER),
    );

    let Some(scale) = plot_scale(chart) else {
        painter.text(
            outer.center(),
            egui::Align2::CENTER_CENTER,
            "Série vide",
            egui::FontId::proportional(12.0),
            theme::MUTED,
        );
        return;
    };

    draw_grid(&painter, plot, &scale);
    for (_, annotation) in entry.annotations() {
        draw_annotation(&painter, plot, &scale, annotation);
    }
    let weight = entry.series_weight(0);
    match chart.kind {
        ChartKind::Line => draw_line_series(&painter, plot, &scale, chart, weight),
        ChartKind::Bar => draw_bar_series(&painter, plot, &scale, chart, weight),
    }
    draw_x_labels(&painter, plot, &scale, chart);

    if let Some(pointer) = response.hover_pos() {
        if plot.contains(pointer) {
            if let Some(index) = nearest_point_index(&scale, &chart.points, plot, pointer.x) {
                let point = &chart.points[index];
                let center = point_position(plot, &scale, point);
                painter.circle_stroke(center, 4.5, egui::Stroke::new(1.5, theme::INK));
                response.on_hover_text(tooltip_text(chart, point));
            }
        }
    }
}

fn draw_grid(painter: &egui::Painter, plot: egui::Rect, scale: &PlotScale) {
    let font = egui::FontId::proportional(10.0);
    for row in 0..=GRID_ROWS {
        let fraction = row as f32 / GRID_ROWS as f32;
        let y = egui::lerp(plot.bottom()..=plot.top(), fraction);
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            egui::Stroke::new(1.0, theme::GRID_LINE),
        );
        let value = scale.y_min + f64::from(fraction) * scale.y_span;
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format_value(value),
            font.clone(),
            theme::MUTED,
        );
    }
}

fn draw_annotation(
    painter: &egui::Painter,
    plot: egui::Rect,
    scale: &PlotScale,
    annotation: &RangeAnnotation,
) {
    let start = x_fraction(scale, annotation.start);
    let end = x_fraction(scale, annotation.end);
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    let left = egui::lerp(plot.left()..=plot.right(), low);
    let right = egui::lerp(plot.left()..=plot.right(), high);

    if right - left < 1.5 {
        let x = (left + right) * 0.5;
        painter.line_segment(
            [egui::pos2(x, plot.top()), egui::pos2(x, plot.bottom())],
            egui::Stroke::new(2.0, theme::annotation_edge()),
        );
        return;
    }

    let band = egui::Rect::from_min_max(egui::pos2(left, plot.top()), egui::pos2(right, plot.bottom()));
    painter.rect_filled(band, egui::CornerRadius::ZERO, theme::annotation_fill());
    painter.line_segment(
        [band.left_top(), band.left_bottom()],
        egui::Stroke::new(1.0, theme::annotation_edge()),
    );
    painter.line_segment(
        [band.right_top(), band.right_bottom()],
        egui::Stroke::new(1.0, theme::annotation_edge()),
    );
}

fn draw_line_series(
    painter: &egui::Painter,
    plot: egui::Rect,
    scale: &PlotScale,
    chart: &ChartModel,
    weight: f32,
) {
    let color = theme::series_color(chart.color);
    let positions: Vec<egui::Pos2> = chart
        .points
        .iter()
        .map(|point| point_position(plot, scale, point))
        .collect();
    if positions.len() > 1 {
        painter.add(egui::Shape::line(
            positions.clone(),
            egui::Stroke::new(weight, color),
        ));
    }
    let marker_radius = if weight > rapport::NORMAL_SERIES_WEIGHT {
        3.5
    } else {
        2.5
    };
    for position in positions {
        painter.circle_filled(position, marker_radius, color);
    }
}

fn draw_bar_series(
    painter: &egui::Painter,
    plot: egui::Rect,
    scale: &PlotScale,
    chart: &ChartModel,
    weight: f32,
) {
    let color = theme::series_color(chart.color);
    let fill = theme::series_fill(chart.color);
    let half = bar_half_width(plot.width(), chart.points.len());
    let zero_y = position_at(plot, 0.0, y_fraction(scale, 0.0)).y;
    for point in &chart.points {
        let center = point_position(plot, scale, point);
        let (top, bottom) = if center.y <= zero_y {
            (center.y, zero_y)
        } else {
            (zero_y, center.y)
        };
        let bar = egui::Rect::from_min_max(
            egui::pos2(center.x - half, top),
            egui::pos2(center.x + half, bottom),
        );
        painter.rect_filled(bar, egui::CornerRadius::same(2), fill);
        painter.rect_stroke(
            bar,
            egui::CornerRadius::same(2),
            egui::Stroke::new(weight, color),
            egui::StrokeKind::Inside,
        );
    }
}

fn draw_x_labels(painter: &egui::Painter, plot: egui::Rect, scale: &PlotScale, chart: &ChartModel) {
    let font = egui::FontId::proportional(10.0);
    let y = plot.bottom() + 4.0;

    let Some(first) = chart.points.iter().min_by_key(|point| point.date) else {
        return;
    };
    painter.text(
        egui::pos2(plot.left(), y),
        egui::Align2::LEFT_TOP,
        first.label.as_str(),
        font.clone(),
        theme::MUTED,
    );

    if chart.points.len() < 2 {
        return;
    }
    let last = chart
        .points
        .iter()
        .max_by_key(|point| point.date)
        .unwrap_or(first);
    painter.text(
        egui::pos2(plot.right(), y),
        egui::Align2::RIGHT_TOP,
        last.label.as_str(),
        font.clone(),
        theme::MUTED,
    );

    if chart.points.len() >= 5 {
        if let Some(middle) = middle_point(scale, &chart.points) {
            let fraction = x_fraction(scale, middle.date);
            if (0.2..=0.8).contains(&fraction) {
                painter.text(
                    egui::pos2(egui::lerp(plot.left()..=plot.right(), fraction), y),
                    egui::Align2::CENTER_TOP,
                    middle.label.as_str(),
                    font,
                    theme::MUTED,
                );
            }
        }
    }
}

fn middle_point<'a>(scale: &PlotScale, points: &'a [SeriesPoint]) -> Option<&'a SeriesPoint> {
    let midpoint = scale.x_min + scale.x_span * 0.5;
    points.iter().min_by_key(|point| {
        let days = f64::from(point.date.num_days_from_ce());
        (days - midpoint).abs() as i64
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotScale {
    x_min: f64,
    x_span: f64,
    y_min: f64,
    y_span: f64,
    single_column: bool,
}

fn plot_scale(chart: &ChartModel) -> Option<PlotScale> {
    let (start, end) = chart.date_range()?;
    let (raw_min, raw_max) = chart.value_range()?;
    let (y_min, y_max) = padded_value_range(chart.kind, raw_min, raw_max);
    let span_days = f64::from(end.num_days_from_ce() - start.num_days_from_ce());
    Some(PlotScale {
        x_min: f64::from(start.num_days_from_ce()),
        x_span: span_days.max(1.0),
        y_min,
        y_span: (y_max - y_min).max(f64::EPSILON),
        single_column: span_days <= 0.0,
    })
}

/// Bar charts anchor their bars at zero, so the axis always shows it.
fn padded_value_range(kind: ChartKind, min: f64, max: f64) -> (f64, f64) {
    let (mut min, mut max) = (min, max);
    if kind == ChartKind::Bar {
        min = min.min(0.0);
        max = max.max(0.0);
    }
    if (max - min).abs() < f64::EPSILON {
        min -= 1.0;
        max += 1.0;
    }
    let pad = (max - min) * 0.08;
    (min - pad, max + pad)
}

fn x_fraction(scale: &PlotScale, date: chrono::NaiveDate) -> f32 {
    if scale.single_column {
        return 0.5;
    }
    let days = f64::from(date.num_days_from_ce());
    ((days - scale.x_min) / scale.x_span).clamp(0.0, 1.0) as f32
}

fn y_fraction(scale: &PlotScale, value: f64) -> f32 {
    ((value - scale.y_min) / scale.y_span).clamp(0.0, 1.0) as f32
}

fn point_position(plot: egui::Rect, scale: &PlotScale, point: &SeriesPoint) -> egui::Pos2 {
    position_at(plot, x_fraction(scale, point.date), y_fraction(scale, point.value))
}

fn position_at(plot: egui::Rect, fx: f32, fy: f32) -> egui::Pos2 {
    egui::pos2(
        egui::lerp(plot.left()..=plot.right(), fx),
        egui::lerp(plot.bottom()..=plot.top(), fy),
    )
}

fn nearest_point_index(
    scale: &PlotScale,
    points: &[SeriesPoint],
    plot: egui::Rect,
    pointer_x: f32,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.iter().enumerate() {
        let x = egui::lerp(plot.left()..=plot.right(), x_fraction(scale, point.date));
        let distance = (x - pointer_x).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Period on the first line, labeled value on the second, origin on the
/// third when the indicator cites one.
fn tooltip_text(chart: &ChartModel, point: &SeriesPoint) -> String {
    let mut text = format!(
        "{}\n{} : {}",
        point.label,
        chart.label,
        format_value(point.value)
    );
    if !chart.unite.is_empty() {
        text.push(' ');
        text.push_str(chart.unite.as_str());
    }
    if let Some(source) = chart.source.as_ref() {
        let origin = if source.media.is_empty() {
            source.titre.as_str()
        } else {
            source.media.as_str()
        };
        if !origin.is_empty() {
            text.push_str(&format!("\nSource : {} ({})", origin, source.date));
        }
    }
    text
}

fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

fn bar_half_width(plot_width: f32, count: usize) -> f32 {
    (plot_width / count.max(1) as f32 * 0.3).clamp(3.0, 26.0)
}
