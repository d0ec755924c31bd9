//! Tuning knobs for layout generation.

use serde::{Deserialize, Serialize};

/// Generation parameters. `Default` gives the standard behavior; tests and
/// callers wanting reproducible or constrained behavior override fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Chance of taking the template path instead of dynamic placement.
    pub template_probability: f64,
    /// ± fraction applied to catalog dimensions in the dynamic path.
    pub dimension_variation: f32,
    /// Whole-layout position jitter in meters (template path).
    pub layout_jitter: f32,
    /// Chance of mirroring the finished template layout along each axis.
    pub mirror_probability: f64,
    /// Push-apart iterations before residual overlap is accepted.
    pub repair_iterations: u32,
    /// Retry budget for bounded generation.
    pub max_attempts: u32,
    /// Catalog dimensions are never scaled below this fraction.
    pub min_scale_factor: f32,
    /// Safety factor applied to each recomputed retry scale.
    pub scale_safety: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_probability: 0.30,
            dimension_variation: 0.15,
            layout_jitter: 0.3,
            mirror_probability: 0.30,
            repair_iterations: 50,
            max_attempts: 10,
            min_scale_factor: 0.5,
            scale_safety: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_limits() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.max_attempts, 10);
        assert_eq!(cfg.repair_iterations, 50);
        assert_eq!(cfg.min_scale_factor, 0.5);
    }
}
