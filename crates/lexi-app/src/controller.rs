use std::sync::Arc;

use anyhow::Context;
use kanal::{AsyncReceiver, AsyncSender};
use lexi_client::{HttpDictionary, HttpImageSearch, TcpProbe};
use lexi_config::Config;
use lexi_core::ImageService;
use lexi_types::{Command, Snapshot};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::lookup::{LookupController, Services};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub commands: (AsyncSender<Command>, AsyncReceiver<Command>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            commands: kanal::bounded_async(16),
        }
    }
}

/// The presentation layer's view of the controller: read the state, send
/// `submit` or `clear`
#[derive(Clone)]
pub struct LookupHandle {
    commands: AsyncSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
}

impl LookupHandle {
    pub fn new(commands: AsyncSender<Command>, snapshots: watch::Receiver<Snapshot>) -> Self {
        Self {
            commands,
            snapshots,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    pub async fn submit(&self, raw: impl Into<String>) -> anyhow::Result<()> {
        self.send(Command::Submit(raw.into())).await
    }

    pub async fn clear(&self) -> anyhow::Result<()> {
        self.send(Command::Clear).await
    }

    pub async fn shutdown(&self) {
        // The loop may already be gone
        let _ = self.commands.send(Command::Shutdown).await;
    }

    /// Submit and wait until that lookup has nothing left in flight
    pub async fn lookup(&self, raw: impl Into<String>) -> anyhow::Result<Snapshot> {
        let mut snapshots = self.subscribe();
        let before = snapshots.borrow_and_update().generation;

        self.submit(raw).await?;

        let snapshot = snapshots
            .wait_for(|s| s.generation > before && s.settled)
            .await
            .context("Lookup controller stopped")?;
        Ok(snapshot.clone())
    }

    async fn send(&self, command: Command) -> anyhow::Result<()> {
        self.commands
            .send(command)
            .await
            .context("Lookup controller is not running")
    }
}

/// Build the HTTP-backed services described by `config`
pub fn services_from_config(config: &Config) -> Services {
    if config.dictionary.api_key.is_empty() {
        tracing::warn!("No dictionary API key configured, set LEXI_DICTIONARY_KEY");
    }

    let images = if config.images.is_active() {
        let search: Arc<dyn ImageService> =
            Arc::new(HttpImageSearch::new(&config.images, &config.network));
        Some(search)
    } else {
        if config.images.enabled {
            tracing::warn!("Image lookup enabled but no API key configured, skipping images");
        }
        None
    };

    Services {
        definitions: Arc::new(HttpDictionary::new(&config.dictionary, &config.network)),
        images,
        connectivity: Arc::new(TcpProbe::from_config(config)),
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Spawn the lookup loop against the configured HTTP services
    pub async fn spawn_tasks(&self) -> (JoinSet<anyhow::Result<()>>, LookupHandle) {
        let (services, request_timeout) = {
            let config = self.state.config.read().await;
            (
                services_from_config(&config),
                config.network.request_timeout(),
            )
        };

        self.spawn_with(LookupController::new(services, request_timeout))
    }

    pub fn spawn_with(
        &self,
        controller: LookupController,
    ) -> (JoinSet<anyhow::Result<()>>, LookupHandle) {
        let handle = LookupHandle::new(self.channels.commands.0.clone(), controller.subscribe());

        let mut tasks = JoinSet::new();
        tasks.spawn(event_loop(
            controller,
            self.channels.commands.1.clone(),
            self.cancel_token.child_token(),
        ));

        (tasks, handle)
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
