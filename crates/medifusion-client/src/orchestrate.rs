//! Submission flow: payload, placeholder, request, then results or error.
//!
//! [`interpret`] and [`dispatch_view`] are pure; the only effect is
//! [`ResultsArea::replace`], which always swaps the whole area.

use std::sync::Arc;

use tokio::sync::Mutex;

use medifusion_core::models::response::{AnalysisResponse, PatientResult};
use medifusion_export::area::ResultsArea;
use medifusion_export::chart::{ChartBackend, SvgBackend};
use medifusion_export::presenter::{error_view, placeholder_view};
use medifusion_export::render::{ResultRenderer, ResultsView};

use crate::client::{AnalysisClient, into_results};
use crate::error::{ClientError, SubmitError};
use crate::form::{UploadForm, read_payload};

/// Where a finished submission goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Results(Vec<PatientResult>),
    Error(String),
}

impl Dispatch {
    pub fn is_error(&self) -> bool {
        matches!(self, Dispatch::Error(_))
    }
}

/// Route a request outcome: success statuses go to rendering, everything
/// else becomes an error message.
pub fn interpret(outcome: Result<AnalysisResponse, ClientError>) -> Dispatch {
    match outcome.and_then(into_results) {
        Ok(results) => Dispatch::Results(results),
        Err(e) => {
            tracing::error!(error = %e, "analysis failed");
            Dispatch::Error(e.to_string())
        }
    }
}

pub fn dispatch_view<B: ChartBackend>(renderer: &ResultRenderer<B>, dispatch: &Dispatch) -> ResultsView {
    match dispatch {
        Dispatch::Results(results) => renderer.render(results),
        Dispatch::Error(message) => error_view(message.as_str()),
    }
}

/// Handles form submissions, one at a time.
pub struct UploadOrchestrator<A, B = SvgBackend> {
    client: AnalysisClient,
    renderer: Arc<ResultRenderer<B>>,
    area: A,
    in_flight: Mutex<()>,
}

impl<A: ResultsArea, B: ChartBackend> UploadOrchestrator<A, B> {
    /// `renderer` may be shared with the area, e.g. one that wraps the
    /// results in a page.
    pub fn new(client: AnalysisClient, renderer: Arc<ResultRenderer<B>>, area: A) -> Self {
        Self {
            client,
            renderer,
            area,
            in_flight: Mutex::new(()),
        }
    }

    pub fn area(&self) -> &A {
        &self.area
    }

    pub fn renderer(&self) -> &ResultRenderer<B> {
        &self.renderer
    }

    /// Submit `form`.
    ///
    /// A submission made while another is outstanding is rejected with
    /// [`SubmitError::InFlight`] and leaves the results area alone.
    pub async fn submit(&self, form: &UploadForm) -> Result<Dispatch, SubmitError> {
        let _guard = self
            .in_flight
            .try_lock()
            .map_err(|_| SubmitError::InFlight)?;

        tracing::info!(files = form.file_count(), "starting analysis");

        let dispatch = match read_payload(form).await {
            Ok(payload) => {
                self.show(placeholder_view())?;
                interpret(self.client.analyze(payload).await)
            }
            Err(e) => interpret(Err(e)),
        };

        self.show(dispatch_view(&self.renderer, &dispatch))?;

        if let Dispatch::Results(results) = &dispatch {
            tracing::info!(patients = results.len(), "analysis complete");
        }
        Ok(dispatch)
    }

    fn show(&self, view: ResultsView) -> Result<(), SubmitError> {
        self.area.replace(self.renderer.present(view)?)?;
        Ok(())
    }
}
