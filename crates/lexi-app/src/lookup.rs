use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_core::{
    Classified, Connectivity, DefinitionService, ImageService, TransportFailure, classify,
    normalize, validate,
};
use lexi_types::{ImageResult, LookupResult, LookupState, Snapshot};
use tokio::sync::watch;

/// Collaborators the controller dispatches to
#[derive(Clone)]
pub struct Services {
    pub definitions: Arc<dyn DefinitionService>,
    /// `None` disables image lookups
    pub images: Option<Arc<dyn ImageService>>,
    pub connectivity: Arc<dyn Connectivity>,
}

/// A finished network call, tagged with the submit that issued it
pub enum Resolution {
    /// Already normalized, or classified with the connectivity seen by the task
    Definition {
        generation: u64,
        outcome: Result<LookupResult, Classified>,
    },
    Images {
        generation: u64,
        outcome: Result<Vec<ImageResult>, TransportFailure>,
    },
}

impl Resolution {
    fn generation(&self) -> u64 {
        match self {
            Resolution::Definition { generation, .. } | Resolution::Images { generation, .. } => {
                *generation
            }
        }
    }
}

/// Owns the lookup lifecycle and is the only writer of `LookupState`.
///
/// Every `submit` and `clear` starts a new generation. Network calls run as
/// separate tasks and report back through a channel; a result is applied only
/// if its generation is still the current one.
pub struct LookupController {
    services: Services,
    request_timeout: Duration,
    generation: u64,
    state: LookupState,
    definition_pending: bool,
    images_pending: bool,
    /// Images that landed while the definition was still loading
    early_images: Option<Vec<ImageResult>>,
    snapshot_tx: watch::Sender<Snapshot>,
    resolved_tx: AsyncSender<Resolution>,
    resolved_rx: AsyncReceiver<Resolution>,
}

impl LookupController {
    pub fn new(services: Services, request_timeout: Duration) -> Self {
        let (snapshot_tx, _) = watch::channel(Snapshot {
            generation: 0,
            state: LookupState::Idle,
            settled: true,
        });
        let (resolved_tx, resolved_rx) = kanal::unbounded_async();

        Self {
            services,
            request_timeout,
            generation: 0,
            state: LookupState::Idle,
            definition_pending: false,
            images_pending: false,
            early_images: None,
            snapshot_tx,
            resolved_tx,
            resolved_rx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot_tx.subscribe()
    }

    #[cfg(test)]
    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_settled(&self) -> bool {
        !self.definition_pending
            && (!self.images_pending || matches!(self.state, LookupState::Failure { .. }))
    }

    /// Start a lookup for `raw`, superseding anything in flight
    pub fn submit(&mut self, raw: &str) {
        self.begin_generation();
        self.transition(LookupState::Validating);

        let keyword = match validate(raw) {
            Ok(keyword) => keyword,
            Err(err) => {
                tracing::info!("Input rejected: {}", err);
                // Nothing was sent, so connectivity is irrelevant here
                let classified = classify(&err.into(), true);
                self.transition(LookupState::Failure {
                    kind: classified.kind,
                    message: classified.message,
                });
                return;
            }
        };

        tracing::info!(generation = self.generation, "Looking up '{}'", keyword);

        let generation = self.generation;
        let timeout = self.request_timeout;

        self.definition_pending = true;
        let definitions = Arc::clone(&self.services.definitions);
        let connectivity = Arc::clone(&self.services.connectivity);
        let word = keyword.clone();
        self.dispatch(async move {
            let outcome =
                fetch_definition(definitions.as_ref(), connectivity.as_ref(), &word, timeout).await;
            Resolution::Definition {
                generation,
                outcome,
            }
        });

        if let Some(images) = self.services.images.clone() {
            self.images_pending = true;
            let query = keyword.clone();
            self.dispatch(async move {
                let outcome = bounded(timeout, images.search(&query)).await;
                Resolution::Images {
                    generation,
                    outcome,
                }
            });
        }

        self.transition(LookupState::Loading { keyword });
    }

    /// Return to `Idle`; results of in-flight calls will be ignored
    pub fn clear(&mut self) {
        self.begin_generation();
        self.transition(LookupState::Idle);
    }

    /// Wait for the next finished call and apply it
    #[cfg(test)]
    pub async fn next_resolution(&mut self) {
        // The controller holds a sender, so the channel cannot close under us
        let received = self.resolved_rx.recv().await;
        if let Ok(resolution) = received {
            self.resolve(resolution);
        }
    }

    pub(crate) fn resolutions(&self) -> AsyncReceiver<Resolution> {
        self.resolved_rx.clone()
    }

    /// Apply a finished call unless a newer submit or clear superseded it
    pub fn resolve(&mut self, resolution: Resolution) {
        if resolution.generation() != self.generation {
            tracing::debug!(
                stale = resolution.generation(),
                current = self.generation,
                "Discarding superseded result"
            );
            return;
        }

        match resolution {
            Resolution::Definition { outcome, .. } => self.resolve_definition(outcome),
            Resolution::Images { outcome, .. } => self.resolve_images(outcome),
        }
    }

    fn resolve_definition(&mut self, outcome: Result<LookupResult, Classified>) {
        self.definition_pending = false;

        match outcome {
            Ok(result) => {
                tracing::info!(
                    "Found '{}' with {} meaning(s)",
                    result.word,
                    result.meanings.len()
                );
                let images = self.early_images.take();
                self.transition(LookupState::Success { result, images });
            }
            Err(Classified { kind, message }) => {
                self.early_images = None;
                self.transition(LookupState::Failure { kind, message });
            }
        }
    }

    fn resolve_images(&mut self, outcome: Result<Vec<ImageResult>, TransportFailure>) {
        self.images_pending = false;

        match outcome {
            Ok(images) => {
                tracing::debug!("Received {} image(s)", images.len());
                match &self.state {
                    LookupState::Success { result, .. } => {
                        let result = result.clone();
                        self.transition(LookupState::Success {
                            result,
                            images: Some(images),
                        });
                    }
                    LookupState::Loading { .. } => self.early_images = Some(images),
                    _ => {}
                }
            }
            Err(failure) => {
                tracing::warn!("Image lookup failed, continuing without images: {}", failure);
                if matches!(self.state, LookupState::Success { .. }) {
                    // Same state, but now settled
                    self.publish();
                }
            }
        }
    }

    fn begin_generation(&mut self) {
        self.generation += 1;
        self.definition_pending = false;
        self.images_pending = false;
        self.early_images = None;
    }

    /// Run `work` on its own task and feed its result back to the controller
    fn dispatch<F>(&self, work: F)
    where
        F: Future<Output = Resolution> + Send + 'static,
    {
        let resolved_tx = self.resolved_tx.clone();

        tokio::spawn(async move {
            if let Err(e) = resolved_tx.send(work.await).await {
                tracing::debug!("Controller gone, dropping result: {}", e);
            }
        });
    }

    fn transition(&mut self, state: LookupState) {
        self.state = state;
        self.publish();
    }

    fn publish(&self) {
        self.snapshot_tx.send_replace(Snapshot {
            generation: self.generation,
            state: self.state.clone(),
            settled: self.is_settled(),
        });
    }
}

/// Fetch and normalize a definition. Failures are classified here, off the
/// controller, because classification may wait on a connectivity probe.
async fn fetch_definition(
    definitions: &dyn DefinitionService,
    connectivity: &dyn Connectivity,
    word: &str,
    timeout: Duration,
) -> Result<LookupResult, Classified> {
    let failure = match bounded(timeout, definitions.define(word))
        .await
        .and_then(|raw| normalize(&raw).map_err(TransportFailure::from))
    {
        Ok(result) => return Ok(result),
        Err(failure) => failure,
    };

    let online = connectivity.is_online().await;
    let classified = classify(&failure, online);
    tracing::warn!(kind = ?classified.kind, online, "Lookup for '{}' failed: {}", word, failure);
    Err(classified)
}

/// Bound a service call by `timeout`, reporting expiry as `Timeout`
async fn bounded<T>(
    timeout: Duration,
    call: impl Future<Output = Result<T, TransportFailure>>,
) -> Result<T, TransportFailure> {
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(TransportFailure::Timeout))
}
