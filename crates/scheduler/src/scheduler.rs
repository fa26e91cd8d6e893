use ledbar_config::{TimeoutPolicy, TimingConfig};
use ledbar_core::{Frame, History, PanelEncoder, Power, Result, Sampler, Transport};
use std::future::Future;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Pause before the power-off write so the bus settles after an interrupt.
const SHUTDOWN_SETTLE: Duration = Duration::from_millis(500);

/// Owns the history and runs one sample → encode → write cycle per tick.
pub struct Scheduler<S, T> {
    history: History,
    encoder: Box<dyn PanelEncoder>,
    sampler: S,
    transport: T,
    timing: TimingConfig,
    brightness: u8,
}

impl<S: Sampler, T: Transport> Scheduler<S, T> {
    pub fn new(
        encoder: Box<dyn PanelEncoder>,
        sampler: S,
        transport: T,
        timing: TimingConfig,
        brightness: u8,
    ) -> Self {
        Self {
            history: History::new(encoder.columns()),
            encoder,
            sampler,
            transport,
            timing,
            brightness,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Reset the bus, switch the display on and set its brightness.
    pub async fn start(&mut self) -> Result<()> {
        self.transport.reset().await?;
        self.transport.set_power(Power::On).await?;
        self.transport.set_brightness(self.brightness).await
    }

    /// Sample, encode and write one frame.
    ///
    /// The sample stays in the history even when the write fails.
    pub async fn tick(&mut self) -> Result<Frame> {
        let sample = self.sampler.read();
        self.history.append(sample);
        let frame = self.encoder.encode(&self.history);
        debug!(%sample, ?frame, "Tick");

        self.write(&frame).await?;
        Ok(frame)
    }

    async fn write(&mut self, frame: &Frame) -> Result<()> {
        let timeout = self.timing.write_timeout();
        let mut delay = self.timing.backoff();
        let mut attempt = 0;

        loop {
            match self.transport.write_frame(frame, timeout).await {
                Err(e)
                    if e.is_timeout()
                        && self.timing.on_timeout == TimeoutPolicy::Retry
                        && attempt < self.timing.retries =>
                {
                    attempt += 1;
                    warn!("{e}; retry {attempt}/{} in {delay:?}", self.timing.retries);
                    time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                }
                result => return result,
            }
        }
    }

    /// Switch the display off after a short settle delay.
    pub async fn shutdown(&mut self) -> Result<()> {
        time::sleep(SHUTDOWN_SETTLE).await;
        self.transport.set_power(Power::Off).await
    }

    /// Tick until `stop` resolves, then power the display off.
    ///
    /// A tick that is already writing when `stop` fires runs to completion
    /// (bounded by the write timeout).  Under [`TimeoutPolicy::Exit`] a timed
    /// out write ends the run with the error and leaves the display as is.
    pub async fn run(&mut self, stop: impl Future<Output = ()>) -> Result<()> {
        self.start().await?;

        let period = self.timing.interval(self.encoder.kind());
        info!("Driving {} display every {period:?}", self.encoder.kind());

        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(stop);

        loop {
            tokio::select! {
                _ = &mut stop => {
                    info!("Shutdown requested");
                    break;
                }
                _ = ticker.tick() => match self.tick().await {
                    Ok(_) => {}
                    Err(e) if e.is_timeout() && self.timing.on_timeout == TimeoutPolicy::Exit => {
                        error!("Attempt to write data timed out: {e}");
                        return Err(e);
                    }
                    Err(e) => warn!("Frame dropped: {e}"),
                },
            }
        }

        self.shutdown().await?;
        info!("Done");
        Ok(())
    }
}
