//! Report cards for a batch of patient results.
//!
//! [`ResultRenderer::render`] is a pure transform from results to a
//! [`ResultsView`]; [`ResultRenderer::to_html`] turns any view into the
//! markup that replaces the results area.

use serde::Serialize;
use tera::{Context, Tera};

use medifusion_core::models::response::PatientResult;
use medifusion_core::models::view::PatientView;

use crate::area::Rendered;
use crate::chart::{ChartAdapter, ChartBackend, ChartSpec, Surfaces, SvgBackend, growth_surface, tumor_surface};
use crate::error::ExportError;
use crate::preview::PreviewPane;
use crate::report::{DownloadLink, download_link};
use crate::styles::STYLESHEET;

const TEMPLATES: [(&str, &str); 5] = [
    ("cards.html", include_str!("templates/cards.html")),
    ("placeholder.html", include_str!("templates/placeholder.html")),
    ("no_results.html", include_str!("templates/no_results.html")),
    ("error.html", include_str!("templates/error.html")),
    ("page.html", include_str!("templates/page.html")),
];

#[derive(Debug, Clone, Serialize)]
pub struct ChartSlot {
    pub surface: String,
    /// `None` when the chart failed to draw.
    pub svg: Option<String>,
}

/// One patient's card.
#[derive(Debug, Clone, Serialize)]
pub struct ReportCard {
    #[serde(flatten)]
    pub patient: PatientView,
    /// Set when at least one anomaly was flagged.
    pub emphasized: bool,
    pub tumor_chart: ChartSlot,
    pub growth_chart: ChartSlot,
    pub download: Option<DownloadLink>,
}

/// Everything the results area can show.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultsView {
    Placeholder,
    NoResults,
    Cards { cards: Vec<ReportCard> },
    Error { message: String, hint: String },
}

impl ResultsView {
    /// Number of cards this view puts in the results area.
    pub fn card_count(&self) -> usize {
        match self {
            ResultsView::Cards { cards } => cards.len(),
            _ => 1,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultsView::Error { .. })
    }

    pub fn cards(&self) -> &[ReportCard] {
        match self {
            ResultsView::Cards { cards } => cards,
            _ => &[],
        }
    }

    fn template(&self) -> &'static str {
        match self {
            ResultsView::Placeholder => "placeholder.html",
            ResultsView::NoResults => "no_results.html",
            ResultsView::Cards { .. } => "cards.html",
            ResultsView::Error { .. } => "error.html",
        }
    }
}

pub struct ResultRenderer<B = SvgBackend> {
    tera: Tera,
    charts: ChartAdapter<B>,
}

impl ResultRenderer<SvgBackend> {
    pub fn new() -> Result<Self, ExportError> {
        Self::with_backend(SvgBackend::default())
    }
}

impl<B: ChartBackend> ResultRenderer<B> {
    pub fn with_backend(backend: B) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self {
            tera,
            charts: ChartAdapter::new(backend),
        })
    }

    /// One card per result in order, or the "no results" card when there
    /// are none.
    pub fn render(&self, results: &[PatientResult]) -> ResultsView {
        if results.is_empty() {
            return ResultsView::NoResults;
        }
        let cards = results
            .iter()
            .enumerate()
            .map(|(index, result)| self.card(index, result))
            .collect();
        ResultsView::Cards { cards }
    }

    pub fn card(&self, index: usize, result: &PatientResult) -> ReportCard {
        let patient = PatientView::from_result(index, result);

        let mut surfaces = Surfaces::for_card(index);
        let tumor = tumor_surface(index);
        let growth = growth_surface(index);
        self.charts
            .draw(&mut surfaces, &tumor, &ChartSpec::tumor_size(patient.tumor_size_cm));
        self.charts
            .draw(&mut surfaces, &growth, &ChartSpec::growth_rate(patient.growth_rate));

        let download = match download_link(&patient.patient_id, result) {
            Ok(link) => Some(link),
            Err(e) => {
                tracing::warn!(patient_id = %patient.patient_id, error = %e, "report link not built");
                None
            }
        };

        ReportCard {
            emphasized: patient.has_anomalies(),
            tumor_chart: ChartSlot {
                svg: surfaces.take(&tumor),
                surface: tumor,
            },
            growth_chart: ChartSlot {
                svg: surfaces.take(&growth),
                surface: growth,
            },
            download,
            patient,
        }
    }

    pub fn to_html(&self, view: &ResultsView) -> Result<String, ExportError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(view.template(), &context)?)
    }

    /// Pair a view with its HTML, ready for [`crate::area::ResultsArea::replace`].
    pub fn present(&self, view: ResultsView) -> Result<Rendered, ExportError> {
        let html = self.to_html(&view)?;
        Ok(Rendered { view, html })
    }

    /// A complete standalone page around the results markup.
    pub fn page(&self, results_html: &str, previews: &PreviewPane) -> Result<String, ExportError> {
        let mut context = Context::new();
        context.insert("stylesheet", STYLESHEET);
        context.insert("results", results_html);
        context.insert("previews", previews.previews());
        context.insert("generated_at", &jiff::Timestamp::now().to_string());
        Ok(self.tera.render("page.html", &context)?)
    }
}
