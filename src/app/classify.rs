// LogClassify - app/classify.rs
//
// Classification lifecycle management. Runs the split → build → transport
// pipeline as a task on a small Tokio runtime and delivers the outcome to
// the UI thread over an mpsc channel.
//
// Architecture:
//   - `ClassifyManager` lives on the UI thread and owns the runtime.
//   - `run_pipeline` is the async pipeline; its only await is the HTTP call.
//   - Every invocation carries the generation it was triggered with. The
//     manager does not judge staleness; `AppState::apply_outcome` does.
//   - Triggering again while a request is in flight is allowed. Nothing is
//     cancelled; the older outcome is simply discarded on arrival.

use crate::app::transport::ClassifierClient;
use crate::core::lines::split_lines;
use crate::core::model::{ClassifyProgress, PipelineOutcome};
use crate::core::payload::build_payload;
use crate::util::constants::{CLASSIFY_WORKER_THREADS, MAX_CLASSIFY_MESSAGES_PER_FRAME};
use crate::util::error::{AppError, Result};
use crate::util::logging::preview;
use std::sync::{mpsc, Arc};
use std::time::Instant;

/// What one pipeline invocation submitted and how it ended.
#[derive(Debug)]
pub struct PipelineRun {
    /// Number of request items in the submitted batch.
    pub items: usize,
    pub outcome: PipelineOutcome,
}

/// Run the full pipeline over `raw_text` once.
///
/// Stages run strictly in order. An empty batch is still submitted.
/// Transport and decode failures are caught here and returned as
/// `PipelineOutcome::Failed`.
pub async fn run_pipeline(client: &ClassifierClient, raw_text: &str, source: &str) -> PipelineRun {
    let lines = split_lines(raw_text);
    let batch = build_payload(&lines, source);
    let items = batch.len();

    if batch.is_empty() {
        tracing::info!("Input has no non-empty lines; submitting an empty batch");
    } else if let Some(first) = lines.first() {
        tracing::debug!(items, first = preview(first), "Submitting batch");
    }

    let outcome = match client.classify(&batch).await {
        Ok(result) => PipelineOutcome::Succeeded(result),
        Err(e) => {
            tracing::warn!(error = %e, kind = e.kind().label(), "Classification failed");
            PipelineOutcome::Failed(e)
        }
    };

    PipelineRun { items, outcome }
}

// =============================================================================
// ClassifyManager
// =============================================================================

/// Runs classification requests off the UI thread.
pub struct ClassifyManager {
    runtime: tokio::runtime::Runtime,
    client: Arc<ClassifierClient>,
    source: String,
    progress_tx: mpsc::Sender<ClassifyProgress>,
    progress_rx: mpsc::Receiver<ClassifyProgress>,
}

impl ClassifyManager {
    /// Create a manager that submits with `client`, tagging items with `source`.
    pub fn new(client: ClassifierClient, source: impl Into<String>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(CLASSIFY_WORKER_THREADS)
            .thread_name("classify")
            .enable_all()
            .build()
            .map_err(|e| AppError::Runtime { source: e })?;

        let (progress_tx, progress_rx) = mpsc::channel();

        Ok(Self {
            runtime,
            client: Arc::new(client),
            source: source.into(),
            progress_tx,
            progress_rx,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Start one pipeline invocation over a snapshot of the buffer.
    ///
    /// Returns immediately; the outcome arrives via `poll_progress`.
    pub fn start(&self, generation: u64, raw_text: String) {
        let client = Arc::clone(&self.client);
        let source = self.source.clone();
        let tx = self.progress_tx.clone();

        self.runtime.spawn(async move {
            let started = Instant::now();
            let run = run_pipeline(&client, &raw_text, &source).await;
            let msg = ClassifyProgress::Completed {
                generation,
                items: run.items,
                elapsed: started.elapsed(),
                outcome: run.outcome,
            };
            // Receiver gone means the UI closed; nothing left to do.
            let _ = tx.send(msg);
        });

        tracing::info!(generation, "Classification started");
    }

    /// Query the service's health endpoint in the background.
    pub fn start_health_check(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.progress_tx.clone();

        self.runtime.spawn(async move {
            let result = client.check_health().await.map_err(|e| e.to_string());
            let _ = tx.send(ClassifyProgress::HealthChecked { result });
        });
    }

    /// Run the pipeline to completion on the calling thread.
    ///
    /// For the headless CLI; must not be called from inside the runtime.
    pub fn run_blocking(&self, raw_text: &str) -> PipelineRun {
        self.runtime
            .block_on(run_pipeline(&self.client, raw_text, &self.source))
    }

    /// Poll for finished work without blocking.
    /// Returns at most `MAX_CLASSIFY_MESSAGES_PER_FRAME` messages.
    pub fn poll_progress(&self) -> Vec<ClassifyProgress> {
        let mut messages = Vec::new();
        while messages.len() < MAX_CLASSIFY_MESSAGES_PER_FRAME {
            match self.progress_rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(_) => break,
            }
        }
        messages
    }
}
