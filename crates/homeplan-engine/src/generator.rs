//! Bounded layout generator.
//!
//! Wraps the single-attempt pipeline in a retry loop that shrinks the
//! catalog scale until the layout's bounding box fits the requested plot,
//! or the attempt budget runs out. Unbounded generation is a single
//! attempt at full scale.

use crate::config::GeneratorConfig;
use crate::optimizer::{generate_layout, LayoutAttempt};
use homeplan_logic::catalog::RoomKind;
use homeplan_logic::geometry::Rect;
use homeplan_logic::graph::FloorPlanGraph;
use homeplan_logic::spec::{AreaBounds, RoomSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Scale shrink schedule across bounded attempts.
struct RetryState {
    attempt: u32,
    scale: f32,
    max_attempts: u32,
    min_scale: f32,
    safety: f32,
}

impl RetryState {
    fn new(config: &GeneratorConfig) -> Self {
        Self {
            attempt: 0,
            scale: 1.0,
            max_attempts: config.max_attempts,
            min_scale: config.min_scale_factor,
            safety: config.scale_safety,
        }
    }

    /// Next (attempt number, scale), or `None` when the budget is spent.
    fn next_attempt(&mut self) -> Option<(u32, f32)> {
        if self.attempt >= self.max_attempts {
            return None;
        }
        self.attempt += 1;
        Some((self.attempt, self.scale))
    }

    /// Update the scale from the achieved bounding box of a failed fit.
    fn record(&mut self, achieved_w: f32, achieved_h: f32, target: &AreaBounds) {
        if achieved_w <= 0.0 || achieved_h <= 0.0 {
            return;
        }
        let width_ratio = target.width / achieved_w;
        let height_ratio = target.height / achieved_h;
        self.scale = (width_ratio.min(height_ratio).min(self.scale) * self.safety)
            .max(self.min_scale);
    }
}

/// Outcome of a generation run.
pub struct GenerationResult {
    pub success: bool,
    pub graph: FloorPlanGraph,
    pub placed: Vec<String>,
    pub bounds_used: Option<AreaBounds>,
    pub achieved_bounds: Option<Rect>,
    pub achieved_area: f32,
    pub scale_factor: f32,
    pub attempts: u32,
    pub archetype: Option<&'static str>,
    pub message: String,
}

/// Entry point for floor plan generation.
pub struct LayoutGenerator {
    config: GeneratorConfig,
}

impl Default for LayoutGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutGenerator {
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generate a layout with a caller-supplied RNG (seedable for tests).
    pub fn generate(
        &self,
        spec: &RoomSpec,
        bounds: Option<&AreaBounds>,
        rng: &mut impl Rng,
    ) -> GenerationResult {
        match bounds {
            Some(b) => self.generate_bounded(spec, b, rng),
            None => self.generate_unconstrained(spec, rng),
        }
    }

    /// Generate with a fresh entropy-seeded RNG.
    pub fn generate_from_entropy(
        &self,
        spec: &RoomSpec,
        bounds: Option<&AreaBounds>,
    ) -> GenerationResult {
        let mut rng = StdRng::from_entropy();
        self.generate(spec, bounds, &mut rng)
    }

    fn generate_unconstrained(&self, spec: &RoomSpec, rng: &mut impl Rng) -> GenerationResult {
        let attempt = generate_layout(spec, None, 1.0, None, &self.config, rng);
        let achieved = attempt.graph.bounding_box();
        let achieved_area = attempt.graph.total_area();
        log::info!(
            "generated unconstrained layout with {} room(s)",
            attempt.placed.len()
        );
        GenerationResult {
            success: true,
            achieved_area,
            achieved_bounds: achieved,
            bounds_used: None,
            scale_factor: 1.0,
            attempts: 1,
            archetype: attempt.archetype,
            placed: attempt.placed,
            graph: attempt.graph,
            message: "generated unconstrained layout".to_string(),
        }
    }

    fn generate_bounded(
        &self,
        spec: &RoomSpec,
        bounds: &AreaBounds,
        rng: &mut impl Rng,
    ) -> GenerationResult {
        let mut retry = RetryState::new(&self.config);
        let mut best: Option<(f32, LayoutAttempt, f32, u32)> = None;

        while let Some((attempt_no, scale)) = retry.next_attempt() {
            let attempt = generate_layout(spec, Some(bounds), scale, None, &self.config, rng);
            let bb = attempt.graph.bounding_box().unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));

            if bb.width <= bounds.width && bb.height <= bounds.height {
                log::debug!(
                    "attempt {}: {:.1}m x {:.1}m fits at scale {:.2}",
                    attempt_no,
                    bb.width,
                    bb.height,
                    scale
                );
                let achieved_area = attempt.graph.total_area();
                return GenerationResult {
                    success: true,
                    achieved_area,
                    achieved_bounds: Some(bb),
                    bounds_used: Some(bounds.clone()),
                    scale_factor: scale,
                    attempts: attempt_no,
                    archetype: attempt.archetype,
                    placed: attempt.placed,
                    graph: attempt.graph,
                    message: format!(
                        "generated layout fitting in {:.1}m x {:.1}m (scale: {:.2}, attempts: {})",
                        bounds.width, bounds.height, scale, attempt_no
                    ),
                };
            }

            let overflow_x = (bb.width - bounds.width).max(0.0);
            let overflow_y = (bb.height - bounds.height).max(0.0);
            let fit_score = overflow_x + overflow_y;
            log::debug!(
                "attempt {}: {:.1}m x {:.1}m overflows target by {:.1}m + {:.1}m at scale {:.2}",
                attempt_no,
                bb.width,
                bb.height,
                overflow_x,
                overflow_y,
                scale
            );

            retry.record(bb.width, bb.height, bounds);

            let better = match &best {
                Some((best_score, ..)) => fit_score < *best_score,
                None => true,
            };
            if better {
                best = Some((fit_score, attempt, scale, attempt_no));
            }
        }

        // Budget exhausted: return the closest attempt as a best effort.
        let (_, attempt, scale, attempt_no) =
            best.unwrap_or_else(|| (f32::MAX, generate_layout(spec, Some(bounds), retry.scale, None, &self.config, rng), retry.scale, self.config.max_attempts));
        let bb = attempt.graph.bounding_box().unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0));
        let overflow_x = (bb.width - bounds.width).max(0.0);
        let overflow_y = (bb.height - bounds.height).max(0.0);
        log::warn!(
            "no layout fit {:.1}m x {:.1}m after {} attempts; best overflows by {:.1}m x {:.1}m",
            bounds.width,
            bounds.height,
            self.config.max_attempts,
            overflow_x,
            overflow_y
        );
        let achieved_area = attempt.graph.total_area();
        GenerationResult {
            success: false,
            achieved_area,
            achieved_bounds: Some(bb),
            bounds_used: Some(bounds.clone()),
            scale_factor: scale,
            attempts: attempt_no.max(self.config.max_attempts),
            archetype: attempt.archetype,
            placed: attempt.placed,
            graph: attempt.graph,
            message: format!(
                "best effort: {:.1}m x {:.1}m (target: {:.1}m x {:.1}m, overflow: {:.1}m x {:.1}m)",
                bb.width, bb.height, bounds.width, bounds.height, overflow_x, overflow_y
            ),
        }
    }
}

/// Rough floor area a specification needs, from catalog dimensions plus
/// a 20% circulation allowance. Useful for sizing a plot up front.
pub fn estimate_required_area(spec: &RoomSpec) -> f32 {
    let mut area = 0.0f32;
    if spec.living_room {
        area += RoomKind::LivingRoom.standard_area();
    }
    if spec.kitchen {
        area += RoomKind::Kitchen.standard_area();
    }
    if spec.dining_room {
        area += RoomKind::DiningRoom.standard_area();
    }
    if spec.bedrooms > 0 {
        area += RoomKind::MasterBedroom.standard_area();
        area += (spec.bedrooms - 1) as f32 * RoomKind::Bedroom.standard_area();
        area += RoomKind::Hallway.standard_area();
    }
    if spec.bathrooms > 0 {
        if spec.bedrooms > 0 {
            area += RoomKind::EnSuite.standard_area();
        }
        // Without a master bedroom the first bathroom never materializes
        // (no en-suite), so only bathrooms - 1 rooms are built either way.
        area += (spec.bathrooms - 1) as f32 * RoomKind::Bathroom.standard_area();
    }
    if spec.study {
        area += RoomKind::Study.standard_area();
    }
    if spec.garage {
        area += RoomKind::Garage.standard_area();
    }
    area * 1.2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spec_2bed() -> RoomSpec {
        RoomSpec {
            bedrooms: 2,
            bathrooms: 1,
            kitchen: true,
            living_room: true,
            ..Default::default()
        }
    }

    #[test]
    fn retry_state_shrinks_monotonically() {
        let config = GeneratorConfig::default();
        let mut retry = RetryState::new(&config);
        let bounds = AreaBounds::from_dimensions(10.0, 10.0);
        let (_, s1) = retry.next_attempt().unwrap();
        assert_eq!(s1, 1.0);
        retry.record(14.0, 12.0, &bounds);
        let (_, s2) = retry.next_attempt().unwrap();
        assert!(s2 < s1);
        retry.record(13.0, 11.0, &bounds);
        let (_, s3) = retry.next_attempt().unwrap();
        assert!(s3 <= s2);
    }

    #[test]
    fn retry_state_respects_the_scale_floor() {
        let config = GeneratorConfig::default();
        let mut retry = RetryState::new(&config);
        let bounds = AreaBounds::from_dimensions(1.0, 1.0);
        retry.record(100.0, 100.0, &bounds);
        assert_eq!(retry.scale, config.min_scale_factor);
    }

    #[test]
    fn retry_state_exhausts_after_max_attempts() {
        let config = GeneratorConfig::default();
        let mut retry = RetryState::new(&config);
        for _ in 0..config.max_attempts {
            assert!(retry.next_attempt().is_some());
        }
        assert!(retry.next_attempt().is_none());
    }

    #[test]
    fn unconstrained_generation_always_succeeds() {
        let generator = LayoutGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let result = generator.generate(&spec_2bed(), None, &mut rng);
        assert!(result.success);
        assert_eq!(result.attempts, 1);
        assert!(result.bounds_used.is_none());
        assert_eq!(result.placed.len(), spec_2bed().room_count());
    }

    #[test]
    fn generous_bounds_fit_on_an_early_attempt() {
        let generator = LayoutGenerator::new();
        let mut rng = StdRng::seed_from_u64(8);
        let bounds = AreaBounds::from_dimensions(40.0, 40.0);
        let result = generator.generate(&spec_2bed(), Some(&bounds), &mut rng);
        assert!(result.success);
        let bb = result.achieved_bounds.expect("bounding box");
        assert!(bb.width <= bounds.width);
        assert!(bb.height <= bounds.height);
    }

    #[test]
    fn impossible_bounds_return_a_best_effort() {
        let generator = LayoutGenerator::new();
        let mut rng = StdRng::seed_from_u64(15);
        let bounds = AreaBounds::from_dimensions(3.0, 3.0);
        let result = generator.generate(&spec_2bed(), Some(&bounds), &mut rng);
        assert!(!result.success);
        assert!(!result.graph.is_empty());
        assert!(result.message.starts_with("best effort"));
        assert_eq!(result.attempts, GeneratorConfig::default().max_attempts);
    }

    #[test]
    fn area_estimate_grows_with_room_count() {
        let small = estimate_required_area(&spec_2bed());
        let large = estimate_required_area(&RoomSpec {
            bedrooms: 4,
            bathrooms: 2,
            kitchen: true,
            living_room: true,
            dining_room: true,
            garage: true,
            ..Default::default()
        });
        assert!(large > small);
        // 2-bed spec: living + kitchen + master + bedroom + hallway + en-suite.
        let expected = (5.5 * 4.5 + 4.0 * 3.5 + 4.5 * 4.0 + 3.5 * 3.5 + 4.0 * 1.5 + 2.5 * 2.5) * 1.2;
        assert!((small - expected).abs() < 1e-3);
    }

    #[test]
    fn area_estimate_matches_the_bedroom_free_roster() {
        // Two requested bathrooms without bedrooms build one bathroom
        // room; the estimate counts the same single room.
        let spec = RoomSpec {
            bathrooms: 2,
            kitchen: true,
            ..Default::default()
        };
        assert_eq!(spec.room_count(), 2);
        let expected = (4.0 * 3.5 + 2.5 * 2.5) * 1.2;
        assert!((estimate_required_area(&spec) - expected).abs() < 1e-3);
    }
}
