use ledbar_core::Sample;

/// Mean of per-core usage figures (0.0 – 100.0 each); 0 when no cores are
/// reported.
pub fn average(per_core: &[f32]) -> f32 {
    if per_core.is_empty() {
        return 0.0;
    }
    per_core.iter().sum::<f32>() / per_core.len() as f32
}

/// Whole-machine load as a [`Sample`], truncated like an integer percentage.
pub fn to_sample(per_core: &[f32]) -> Sample {
    Sample::from_percent(average(per_core))
}
