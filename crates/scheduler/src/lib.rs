//! Frame scheduling: ties a sampler, an encoder and a transport together.

pub mod scheduler;

pub use scheduler::Scheduler;

use ledbar_config::LedConfig;
use ledbar_core::{encoder, LedError, Result};
use ledbar_system::CpuSampler;
use ledbar_transport::{CliTransport, DisplayTarget};
use tracing::error;

/// Drive the configured display with CPU load until Ctrl-C.
pub async fn run(config: LedConfig) -> Result<()> {
    let display = &config.display;
    let device = display
        .device
        .clone()
        .ok_or_else(|| LedError::Config("no display device configured".into()))?;

    let encoder = encoder::for_display(display.kind, config.thresholds.for_kind(display.kind))?;
    let target = DisplayTarget::new(display.kind, device, display.address());
    let transport = CliTransport::new(display.program(), target)
        .with_control_timeout(config.timing.write_timeout());

    let mut scheduler = Scheduler::new(
        encoder,
        CpuSampler::new(),
        transport,
        config.timing.clone(),
        display.brightness(),
    );

    scheduler.run(interrupted()).await
}

/// Resolves on SIGINT.  If the handler cannot be installed the run continues
/// until killed.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
