use kanal::AsyncReceiver;
use lexi_types::Command;
use tokio_util::sync::CancellationToken;

use crate::lookup::LookupController;

/// Controller's main loop: applies commands and finished calls one at a time
pub async fn event_loop(
    mut controller: LookupController,
    commands_rx: AsyncReceiver<Command>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let resolved_rx = controller.resolutions();

    tracing::debug!("[EVENT_LOOP] Waiting for commands");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("[EVENT_LOOP] Cancelled");
                break;
            }
            command = commands_rx.recv() => match command {
                Ok(Command::Submit(raw)) => controller.submit(&raw),
                Ok(Command::Clear) => {
                    controller.clear();
                    tracing::debug!(generation = controller.generation(), "[EVENT_LOOP] Cleared");
                }
                Ok(Command::Shutdown) => {
                    tracing::debug!("[EVENT_LOOP] Shutdown requested");
                    break;
                }
                Err(_) => {
                    tracing::debug!("[EVENT_LOOP] Command channel closed");
                    break;
                }
            },
            resolution = resolved_rx.recv() => {
                if let Ok(resolution) = resolution {
                    controller.resolve(resolution);
                }
            }
        }
    }

    Ok(())
}
