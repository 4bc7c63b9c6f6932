//! Single-value charts drawn onto named card surfaces.
//!
//! Charts are decoration: [`ChartAdapter::draw`] logs and swallows every
//! failure so a broken chart never takes the card down with it.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::error::ChartError;
use crate::styles::ChartStyles;

const MARGIN_LEFT: f64 = 34.0;
const MARGIN_RIGHT: f64 = 8.0;
const MARGIN_TOP: f64 = 14.0;
const MARGIN_BOTTOM: f64 = 22.0;
const TICKS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
}

/// What to draw: one labeled data point, no legend, value axis from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Category label under the data point.
    pub category: &'static str,
    /// Series name, used as the accessible title.
    pub series: &'static str,
    pub value: f64,
}

impl ChartSpec {
    pub fn tumor_size(value: f64) -> Self {
        Self {
            kind: ChartKind::Bar,
            category: "Size",
            series: "Tumor Size (cm)",
            value,
        }
    }

    pub fn growth_rate(value: f64) -> Self {
        Self {
            kind: ChartKind::Line,
            category: "Rate",
            series: "Growth Rate",
            value,
        }
    }
}

/// Rendering capability behind the adapter.
pub trait ChartBackend {
    fn draw(&self, spec: &ChartSpec) -> Result<String, ChartError>;
}

pub fn tumor_surface(index: usize) -> String {
    format!("tumorChart_{index}")
}

pub fn growth_surface(index: usize) -> String {
    format!("growthChart_{index}")
}

/// Drawing surfaces declared by a card, keyed by id.
#[derive(Debug, Default)]
pub struct Surfaces {
    slots: BTreeMap<String, Option<String>>,
}

impl Surfaces {
    /// The two chart surfaces of the card at `index`.
    pub fn for_card(index: usize) -> Self {
        let mut surfaces = Self::default();
        surfaces.declare(tumor_surface(index));
        surfaces.declare(growth_surface(index));
        surfaces
    }

    pub fn declare(&mut self, id: impl Into<String>) {
        self.slots.entry(id.into()).or_default();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn paint(&mut self, id: &str, drawing: String) -> Result<(), ChartError> {
        let slot = self
            .slots
            .get_mut(id)
            .ok_or_else(|| ChartError::MissingSurface(id.to_string()))?;
        *slot = Some(drawing);
        Ok(())
    }

    pub fn take(&mut self, id: &str) -> Option<String> {
        self.slots.get_mut(id).and_then(Option::take)
    }
}

pub struct ChartAdapter<B = SvgBackend> {
    backend: B,
}

impl Default for ChartAdapter<SvgBackend> {
    fn default() -> Self {
        Self::new(SvgBackend::default())
    }
}

impl<B: ChartBackend> ChartAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Draw `spec` onto `target`. Returns whether anything was drawn.
    pub fn draw(&self, surfaces: &mut Surfaces, target: &str, spec: &ChartSpec) -> bool {
        match self.try_draw(surfaces, target, spec) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(surface = target, series = spec.series, error = %e, "chart error");
                false
            }
        }
    }

    fn try_draw(
        &self,
        surfaces: &mut Surfaces,
        target: &str,
        spec: &ChartSpec,
    ) -> Result<(), ChartError> {
        if !surfaces.contains(target) {
            return Err(ChartError::MissingSurface(target.to_string()));
        }
        let drawing = self.backend.draw(spec)?;
        surfaces.paint(target, drawing)
    }
}

/// Draws charts as standalone SVG documents.
#[derive(Debug, Clone, Default)]
pub struct SvgBackend {
    pub styles: ChartStyles,
}

impl ChartBackend for SvgBackend {
    fn draw(&self, spec: &ChartSpec) -> Result<String, ChartError> {
        if !spec.value.is_finite() {
            return Err(ChartError::NonFinite(spec.value));
        }

        let s = &self.styles;
        let (lo, hi) = axis_range(spec.value);
        let plot_w = s.width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = s.height - MARGIN_TOP - MARGIN_BOTTOM;
        let y_of = |v: f64| MARGIN_TOP + (hi - v) / (hi - lo) * plot_h;
        let center_x = MARGIN_LEFT + plot_w / 2.0;
        let baseline = y_of(0.0);

        let mut svg = String::new();
        let _ = write!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{series}: {value}"><title>{series}</title>"##,
            w = s.width,
            h = s.height,
            series = spec.series,
            value = format_number(spec.value),
        );

        // Value axis with evenly spaced ticks.
        for i in 0..=TICKS {
            let v = lo + (hi - lo) * i as f64 / TICKS as f64;
            let y = y_of(v);
            let _ = write!(
                svg,
                r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{axis}" stroke-opacity="0.25"/><text x="{tx:.1}" y="{ty:.1}" font-size="9" text-anchor="end" fill="{axis}">{label}</text>"##,
                x1 = MARGIN_LEFT,
                x2 = s.width - MARGIN_RIGHT,
                tx = MARGIN_LEFT - 4.0,
                ty = y + 3.0,
                axis = s.axis,
                label = format_number(v),
            );
        }

        let value_y = y_of(spec.value);
        match spec.kind {
            ChartKind::Bar => {
                let bar_w = plot_w * 0.4;
                let top = value_y.min(baseline);
                let _ = write!(
                    svg,
                    r##"<rect x="{x:.1}" y="{y:.1}" width="{bw:.1}" height="{bh:.1}" fill="{fill}" stroke="{stroke}" stroke-width="{sw}"/>"##,
                    x = center_x - bar_w / 2.0,
                    y = top,
                    bw = bar_w,
                    bh = (baseline - value_y).abs(),
                    fill = s.bar_fill,
                    stroke = s.bar_stroke,
                    sw = s.stroke_width,
                );
            }
            ChartKind::Line => {
                let _ = write!(
                    svg,
                    r##"<line x1="{cx:.1}" y1="{b:.1}" x2="{cx:.1}" y2="{y:.1}" stroke="{fill}" stroke-width="{aw:.1}"/><circle cx="{cx:.1}" cy="{y:.1}" r="4" fill="{fill}" stroke="{stroke}" stroke-width="{sw}"/>"##,
                    cx = center_x,
                    b = baseline,
                    y = value_y,
                    aw = plot_w * 0.1,
                    fill = s.line_fill,
                    stroke = s.line_stroke,
                    sw = s.stroke_width,
                );
            }
        }

        let _ = write!(
            svg,
            r##"<text x="{cx:.1}" y="{vy:.1}" font-size="10" text-anchor="middle" fill="{axis}">{value}</text><text x="{cx:.1}" y="{ly:.1}" font-size="10" text-anchor="middle" fill="{axis}">{category}</text></svg>"##,
            cx = center_x,
            vy = (value_y.min(baseline) - 4.0).max(10.0),
            ly = s.height - 6.0,
            axis = s.axis,
            value = format_number(spec.value),
            category = spec.category,
        );

        Ok(svg)
    }
}

/// Value axis range that always includes zero.
pub fn axis_range(value: f64) -> (f64, f64) {
    let lo = value.min(0.0);
    let hi = value.max(0.0);
    if lo == hi {
        return (0.0, 1.0);
    }
    let lo = if lo < 0.0 { -nice_ceiling(-lo) } else { 0.0 };
    let hi = if hi > 0.0 { nice_ceiling(hi) } else { 0.0 };
    (lo, hi)
}

/// Smallest 1, 2, 5 x 10^n that is at least `x`.
fn nice_ceiling(x: f64) -> f64 {
    let base = 10f64.powf(x.log10().floor());
    let mantissa = x / base;
    let step = if mantissa <= 1.0 {
        1.0
    } else if mantissa <= 2.0 {
        2.0
    } else if mantissa <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * base
}

fn format_number(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{v:.0}")
    } else {
        let s = format!("{v:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
