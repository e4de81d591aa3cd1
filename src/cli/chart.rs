//! Text line chart for the projected portfolio value

use super::ui;
use crate::core::ProjectionPoint;

const POINT: char = '●';
const RISE: char = '│';

/// Renders `points` as a line chart at most `width` columns wide and exactly
/// `height` rows tall, plus the date axis underneath.
///
/// Longer series are downsampled by keeping the last point of each column.
pub fn render(points: &[ProjectionPoint], width: usize, height: usize) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return ui::style_text("No data to chart", ui::StyleType::Subtle);
    };

    let height = height.max(2);
    let values = downsample(points, width.max(1));
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });

    let levels: Vec<usize> = values
        .iter()
        .map(|v| level(*v, min, max, height))
        .collect();
    let grid = plot(&levels, height);

    let max_label = ui::format_currency(max);
    let min_label = ui::format_currency(min);
    let label_width = max_label.chars().count().max(min_label.chars().count());

    let mut out = String::new();
    for (i, row) in grid.iter().rev().enumerate() {
        let line: String = row.iter().collect();
        let label = match i {
            0 => max_label.as_str(),
            i if i == height - 1 => min_label.as_str(),
            _ => "",
        };
        let tick = if label.is_empty() { '│' } else { '┤' };
        out.push_str(&format!("{label:>label_width$} {tick}{line}\n"));
    }

    let cols = levels.len();
    out.push_str(&format!("{:label_width$} └{}\n", "", "─".repeat(cols)));

    let start = first.date.format("%Y-%m-%d").to_string();
    let end = last.date.format("%Y-%m-%d").to_string();
    if cols > start.len() + end.len() {
        let gap = cols - start.len();
        out.push_str(&format!("{:label_width$}  {start}{end:>gap$}", ""));
    } else {
        out.push_str(&format!("{:label_width$}  {start} → {end}", ""));
    }
    out
}

/// At most `width` values, taking the last point that falls in each column.
fn downsample(points: &[ProjectionPoint], width: usize) -> Vec<f64> {
    let n = points.len();
    let cols = width.min(n);
    (0..cols)
        .map(|c| points[(c + 1) * n / cols - 1].portfolio_value)
        .collect()
}

fn level(value: f64, min: f64, max: f64, height: usize) -> usize {
    let span = max - min;
    if span <= 0.0 {
        return 0;
    }
    (((value - min) / span) * (height - 1) as f64).round() as usize
}

/// Rows bottom-up; each column marks its level and fills the rise or fall
/// from the previous column.
fn plot(levels: &[usize], height: usize) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; levels.len()]; height];
    let mut prev: Option<usize> = None;
    for (col, &lvl) in levels.iter().enumerate() {
        if let Some(p) = prev {
            let (lo, hi) = if p < lvl { (p, lvl) } else { (lvl, p) };
            for row in grid.iter_mut().take(hi).skip(lo + 1) {
                row[col] = RISE;
            }
        }
        grid[lvl][col] = POINT;
        prev = Some(lvl);
    }
    grid
}
