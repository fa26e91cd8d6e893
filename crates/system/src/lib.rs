pub mod cpu;

use ledbar_core::{Sample, Sampler};
use sysinfo::System;
use tracing::debug;

/// Reads whole-machine CPU usage through `sysinfo`.
///
/// Usage is a delta between two refreshes, so the constructor takes a priming
/// refresh; the first [`Sampler::read`] then covers the time since creation.
pub struct CpuSampler {
    sys: System,
}

impl CpuSampler {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        Self { sys }
    }
}

impl Default for CpuSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for CpuSampler {
    fn read(&mut self) -> Sample {
        self.sys.refresh_cpu_usage();
        let per_core: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        let sample = cpu::to_sample(&per_core);
        debug!(cores = per_core.len(), %sample, "CPU sample");
        sample
    }
}
