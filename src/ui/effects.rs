//! Executes workflow effects against the outside world.
//!
//! View effects are applied to the [`App`] directly. Storage writes happen
//! inline. Network and clipboard work runs on the tokio runtime and reports
//! back through the event queue as a [`WorkflowIntent`].

use crate::clipboard::SharedClipboard;
use crate::persistence::{PersistenceStore, SlotStorage};
use crate::service::ScoringClient;
use crate::ui::app::App;
use crate::ui::events::AppEvent;
use crate::ui::workflow::{WorkflowEffect, WorkflowIntent};
use std::sync::mpsc::Sender;
use std::time::Instant;
use tokio::runtime::Handle;

pub struct EffectRunner<S: SlotStorage> {
    handle: Handle,
    client: ScoringClient,
    store: PersistenceStore<S>,
    events: Sender<AppEvent>,
    clipboard: SharedClipboard,
}

impl<S: SlotStorage> EffectRunner<S> {
    pub fn new(
        handle: Handle,
        client: ScoringClient,
        store: PersistenceStore<S>,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            handle,
            client,
            store,
            events,
            clipboard: SharedClipboard::system(),
        }
    }

    /// Replace the system clipboard.
    pub fn with_clipboard(mut self, clipboard: SharedClipboard) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn store(&self) -> &PersistenceStore<S> {
        &self.store
    }

    /// Drain and execute every effect the app has queued, in order.
    pub fn run_pending(&self, app: &mut App, now: Instant) {
        for effect in app.take_effects() {
            if app.apply_view_effect(&effect, now) {
                continue;
            }
            self.execute(effect);
        }
    }

    fn execute(&self, effect: WorkflowEffect) {
        match effect {
            WorkflowEffect::SaveSnapshot(snapshot) => {
                if let Err(err) = self.store.save(&snapshot) {
                    tracing::warn!(error = %err, "Failed to save form data");
                }
            }
            WorkflowEffect::ClearSnapshot => {
                if let Err(err) = self.store.clear() {
                    tracing::warn!(error = %err, "Failed to clear saved form data");
                }
            }
            WorkflowEffect::SendProfile {
                request_id,
                profile,
            } => {
                let client = self.client.clone();
                let events = self.events.clone();
                self.handle.spawn(async move {
                    let outcome = client
                        .generate_question(&request_id, &profile)
                        .await
                        .map_err(|err| {
                            tracing::error!(
                                request_id = %request_id,
                                error_type = err.error_type(),
                                error = %err,
                                "Error generating question"
                            );
                            err.to_string()
                        });
                    let _ = events.send(AppEvent::Workflow(WorkflowIntent::ResponseReceived {
                        request_id,
                        outcome,
                    }));
                });
            }
            WorkflowEffect::CopyText(text) => {
                let clipboard = self.clipboard.clone();
                let events = self.events.clone();
                self.handle.spawn(async move {
                    let copy = tokio::task::spawn_blocking(move || clipboard.set_text(&text));
                    let outcome = match copy.await {
                        Ok(result) => result.map_err(|err| err.to_string()),
                        Err(err) => Err(err.to_string()),
                    };
                    if let Err(err) = &outcome {
                        tracing::warn!(error = %err, "Failed to copy question");
                    }
                    let _ = events.send(AppEvent::Workflow(WorkflowIntent::CopyFinished {
                        outcome,
                    }));
                });
            }
            WorkflowEffect::ShowLoading
            | WorkflowEffect::HideLoading
            | WorkflowEffect::ScrollToLoading
            | WorkflowEffect::ScrollToResults
            | WorkflowEffect::Notify { .. } => {}
        }
    }

    /// Check the service once and report the result as a workflow intent.
    pub fn spawn_health_check(&self) {
        let client = self.client.clone();
        let events = self.events.clone();
        self.handle.spawn(async move {
            let status = client.health().await;
            let _ = events.send(AppEvent::Workflow(WorkflowIntent::HealthChecked { status }));
        });
    }
}
