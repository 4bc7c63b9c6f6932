use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::ExportError;
use crate::render::ResultsView;

/// A view together with its HTML.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub view: ResultsView,
    pub html: String,
}

/// The region results are shown in.
///
/// Every `replace` discards the previous content entirely; the last writer
/// wins and nothing is ever merged.
pub trait ResultsArea: Send + Sync {
    fn replace(&self, rendered: Rendered) -> Result<(), ExportError>;
}

/// Keeps the current content in memory and records each replacement.
///
/// A recording area for tests and dry runs. [`MemoryArea::new`] keeps every
/// state; use [`MemoryArea::with_limit`] when only the most recent ones
/// matter.
#[derive(Debug, Default)]
pub struct MemoryArea {
    history: Mutex<VecDeque<Rendered>>,
    limit: Option<usize>,
}

impl MemoryArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` states, dropping the oldest first. The current
    /// state is always kept.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            history: Mutex::default(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn current(&self) -> Option<Rendered> {
        self.lock().back().cloned()
    }

    /// The recorded states, oldest first.
    pub fn history(&self) -> Vec<Rendered> {
        self.lock().iter().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Rendered>> {
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ResultsArea for MemoryArea {
    fn replace(&self, rendered: Rendered) -> Result<(), ExportError> {
        let mut history = self.lock();
        history.push_back(rendered);
        if let Some(limit) = self.limit {
            while history.len() > limit {
                history.pop_front();
            }
        }
        Ok(())
    }
}
