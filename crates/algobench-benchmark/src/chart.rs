//! SVG comparison chart.
//!
//! One panel per family, side by side. Each panel plots the iterative and
//! recursive mean times against the input size.

use std::fmt::{self, Display};
use std::fs;
use std::path::Path;

use tracing::info;

use algobench_core::Variant;

use crate::error::ReportError;
use crate::result::BenchmarkSeries;

const PANEL_WIDTH: f64 = 700.0;
const PANEL_HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 25.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TICKS: usize = 5;

const ITERATIVE_COLOR: &str = "blue";
const RECURSIVE_COLOR: &str = "green";

/// Line chart of one or more benchmark series.
///
/// # Example
///
/// ```
/// use algobench_benchmark::{BenchmarkResult, BenchmarkSeries, Family, SvgChart};
///
/// let mut series = BenchmarkSeries::new("Test", Family::BubbleSort, 5, 42);
/// series.add_result(BenchmarkResult::new(10, 0.02, 0.01));
/// series.add_result(BenchmarkResult::new(20, 0.08, 0.03));
///
/// let svg = SvgChart::new(&[series]).render().unwrap();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains("Bubble Sort: Iterative vs Recursive"));
/// ```
pub struct SvgChart<'a> {
    panels: Vec<&'a BenchmarkSeries>,
}

impl<'a> SvgChart<'a> {
    /// Creates a chart with a panel for every non-empty series.
    pub fn new(series: &'a [BenchmarkSeries]) -> Self {
        Self {
            panels: series.iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Renders the chart as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyChart`] if no series has results.
    pub fn render(&self) -> Result<String, ReportError> {
        if self.panels.is_empty() {
            return Err(ReportError::EmptyChart);
        }
        Ok(self.to_string())
    }

    /// Renders the chart and writes it to `path`.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let svg = self.render()?;
        fs::write(path, svg)?;
        info!(
            event = "chart_written",
            path = %path.display(),
            panels = self.panels.len() as u64,
        );
        Ok(())
    }
}

impl Display for SvgChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = PANEL_WIDTH * self.panels.len().max(1) as f64;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{PANEL_HEIGHT}" viewBox="0 0 {width} {PANEL_HEIGHT}" font-family="sans-serif">"#
        )?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;
        for (i, series) in self.panels.iter().enumerate() {
            writeln!(
                f,
                r#"<g transform="translate({},0)">"#,
                PANEL_WIDTH * i as f64
            )?;
            Panel::new(series).render(f)?;
            writeln!(f, "</g>")?;
        }
        writeln!(f, "</svg>")
    }
}

/// Linear mapping from data range to pixel range.
struct Axis {
    min: f64,
    max: f64,
    from: f64,
    to: f64,
}

impl Axis {
    fn map(&self, value: f64) -> f64 {
        self.from + (value - self.min) / (self.max - self.min) * (self.to - self.from)
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        let step = (self.max - self.min) / TICKS as f64;
        (0..=TICKS).map(move |i| self.min + step * i as f64)
    }

    fn label(&self, value: f64) -> String {
        let step = (self.max - self.min) / TICKS as f64;
        let decimals = if step >= 1.0 {
            0
        } else {
            ((-step.log10()).ceil() as usize + 1).min(9)
        };
        format!("{value:.decimals$}")
    }
}

struct Panel<'a> {
    series: &'a BenchmarkSeries,
    x: Axis,
    y: Axis,
}

impl<'a> Panel<'a> {
    fn new(series: &'a BenchmarkSeries) -> Self {
        let sizes = series.sizes();
        let mut min_n = sizes.iter().copied().min().unwrap_or(0) as f64;
        let mut max_n = sizes.iter().copied().max().unwrap_or(0) as f64;
        if min_n == max_n {
            min_n = (min_n - 1.0).max(0.0);
            max_n += 1.0;
        }

        let max_ms = series.max_ms();
        let max_ms = if max_ms > 0.0 { max_ms * 1.1 } else { 1.0 };

        Self {
            series,
            x: Axis {
                min: min_n,
                max: max_n,
                from: MARGIN_LEFT,
                to: PANEL_WIDTH - MARGIN_RIGHT,
            },
            y: Axis {
                min: 0.0,
                max: max_ms,
                from: PANEL_HEIGHT - MARGIN_BOTTOM,
                to: MARGIN_TOP,
            },
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = (self.x.from, self.x.to);
        let (bottom, top) = (self.y.from, self.y.to);
        let center_x = (left + right) / 2.0;

        writeln!(
            f,
            r#"<text x="{center_x:.1}" y="30" text-anchor="middle" font-size="16">{}</text>"#,
            escape_xml(&self.series.family.chart_title())
        )?;

        for tick in self.x.ticks() {
            let px = self.x.map(tick);
            writeln!(
                f,
                r##"<line x1="{px:.1}" y1="{top:.1}" x2="{px:.1}" y2="{bottom:.1}" stroke="#dddddd"/>"##
            )?;
            writeln!(
                f,
                r#"<text x="{px:.1}" y="{:.1}" text-anchor="middle" font-size="11">{}</text>"#,
                bottom + 18.0,
                self.x.label(tick)
            )?;
        }
        for tick in self.y.ticks() {
            let py = self.y.map(tick);
            writeln!(
                f,
                r##"<line x1="{left:.1}" y1="{py:.1}" x2="{right:.1}" y2="{py:.1}" stroke="#dddddd"/>"##
            )?;
            writeln!(
                f,
                r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11">{}</text>"#,
                left - 6.0,
                py + 4.0,
                self.y.label(tick)
            )?;
        }

        writeln!(
            f,
            r#"<rect x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="black"/>"#,
            right - left,
            bottom - top
        )?;
        writeln!(
            f,
            r#"<text x="{center_x:.1}" y="{:.1}" text-anchor="middle" font-size="13">Data Size (n)</text>"#,
            PANEL_HEIGHT - 15.0
        )?;
        let center_y = (top + bottom) / 2.0;
        writeln!(
            f,
            r#"<text x="20" y="{center_y:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 20 {center_y:.1})">Execution Time (ms)</text>"#
        )?;

        self.fmt_line(f, Variant::Iterative)?;
        self.fmt_line(f, Variant::Recursive)?;
        self.fmt_legend(f)
    }

    fn fmt_line(&self, f: &mut fmt::Formatter<'_>, variant: Variant) -> fmt::Result {
        let (color, dash) = line_style(variant);
        let points: Vec<(f64, f64)> = self
            .series
            .results
            .iter()
            .map(|r| (self.x.map(r.n as f64), self.y.map(r.time_ms(variant))))
            .collect();

        let path = points
            .iter()
            .map(|(px, py)| format!("{px:.1},{py:.1}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            f,
            r#"<polyline points="{path}" fill="none" stroke="{color}" stroke-width="2"{dash}/>"#
        )?;

        for &(px, py) in &points {
            fmt_marker(f, variant, px, py)?;
        }
        Ok(())
    }

    fn fmt_legend(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.x.from + 15.0;
        let mut y = self.y.to + 20.0;
        writeln!(
            f,
            r##"<rect x="{:.1}" y="{:.1}" width="130" height="50" fill="white" stroke="#999999"/>"##,
            x - 8.0,
            y - 14.0
        )?;
        for variant in [Variant::Iterative, Variant::Recursive] {
            let (color, dash) = line_style(variant);
            writeln!(
                f,
                r#"<line x1="{x:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2"{dash}/>"#,
                x + 30.0
            )?;
            fmt_marker(f, variant, x + 15.0, y)?;
            writeln!(
                f,
                r#"<text x="{:.1}" y="{:.1}" font-size="12">{}</text>"#,
                x + 40.0,
                y + 4.0,
                variant.label()
            )?;
            y += 22.0;
        }
        Ok(())
    }
}

fn line_style(variant: Variant) -> (&'static str, &'static str) {
    match variant {
        Variant::Iterative => (ITERATIVE_COLOR, ""),
        Variant::Recursive => (RECURSIVE_COLOR, r#" stroke-dasharray="6,4""#),
    }
}

fn fmt_marker(f: &mut fmt::Formatter<'_>, variant: Variant, px: f64, py: f64) -> fmt::Result {
    match variant {
        Variant::Iterative => writeln!(
            f,
            r#"<circle cx="{px:.1}" cy="{py:.1}" r="4" fill="{ITERATIVE_COLOR}"/>"#
        ),
        Variant::Recursive => writeln!(
            f,
            r#"<rect x="{:.1}" y="{:.1}" width="8" height="8" fill="{RECURSIVE_COLOR}"/>"#,
            px - 4.0,
            py - 4.0
        ),
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
