//! Field configuration
//!
//! Every tunable of the field lives here. Hosts either take the defaults or
//! hand over a JSON object; missing keys fall back to the defaults below.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::FieldError;

pub const DEFAULT_PARTICLE_COUNT: usize = 5000;
/// Largest cloud a config may ask for (36 MiB of columns)
pub const PARTICLE_COUNT_LIMIT: usize = 1 << 20;
/// Largest well registry a config may ask for
pub const WELL_SLOT_LIMIT: usize = 256;
pub const SPRING_K: f32 = 0.3;
pub const DAMPING: f32 = 0.92;
/// Longest step the integrator will take (seconds)
pub const MAX_DELTA: f32 = 0.05;
/// Velocity L1 norm below which a particle is considered settled
pub const SETTLE_EPSILON: f32 = 1e-4;
pub const MAX_WELLS: usize = 5;
pub const WELL_RAMP: f32 = 8.0;
pub const WELL_LIFE: f32 = 15.0;
/// Click-to-collapse radius (squared threshold = 4)
pub const CAPTURE_RADIUS: f32 = 2.0;
pub const BURST_RADIUS: f32 = 12.0;
pub const BURST_STRENGTH: f32 = 60.0;
pub const BURST_MIN_DIST_SQ: f32 = 0.001;
/// Peak continuous pull when `well_pull` is switched on
pub const PULL_MAX: f32 = 40.0;
pub const HOME_SPREAD: Vec3 = Vec3::new(18.0, 5.0, 10.0);
pub const BRIGHTNESS_MIN: f32 = 0.15;
pub const BRIGHTNESS_MAX: f32 = 0.55;

/// What happens to a well's age between ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellAging {
    /// Age advances every tick; the well fades out at `well_life`.
    #[default]
    Advance,
    /// Age stays at zero and wells live until collapsed.
    Frozen,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub spring_k: f32,
    pub damping: f32,
    pub max_delta: f32,
    pub settle_epsilon: f32,
    pub max_wells: usize,
    pub well_ramp: f32,
    pub well_life: f32,
    pub capture_radius: f32,
    pub burst_radius: f32,
    pub burst_strength: f32,
    pub burst_min_dist_sq: f32,
    pub home_spread: Vec3,
    pub world_offset: Vec3,
    pub brightness_min: f32,
    pub brightness_max: f32,
    pub seed: u32,
    pub well_aging: WellAging,
    /// Continuous attraction toward live wells; 0 disables it.
    pub well_pull: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            spring_k: SPRING_K,
            damping: DAMPING,
            max_delta: MAX_DELTA,
            settle_epsilon: SETTLE_EPSILON,
            max_wells: MAX_WELLS,
            well_ramp: WELL_RAMP,
            well_life: WELL_LIFE,
            capture_radius: CAPTURE_RADIUS,
            burst_radius: BURST_RADIUS,
            burst_strength: BURST_STRENGTH,
            burst_min_dist_sq: BURST_MIN_DIST_SQ,
            home_spread: HOME_SPREAD,
            world_offset: Vec3::ZERO,
            brightness_min: BRIGHTNESS_MIN,
            brightness_max: BRIGHTNESS_MAX,
            seed: crate::core::utils::random::DEFAULT_SEED,
            well_aging: WellAging::Advance,
            well_pull: 0.0,
        }
    }
}

impl FieldConfig {
    pub fn with_particle_count(particle_count: usize) -> Self {
        Self {
            particle_count,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    #[inline]
    pub fn capture_radius_sq(&self) -> f32 {
        self.capture_radius * self.capture_radius
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.particle_count == 0 {
            return Err(FieldError::EmptyPopulation);
        }
        if self.particle_count > PARTICLE_COUNT_LIMIT {
            return Err(invalid(&format!(
                "particle_count must not exceed {} (got {})",
                PARTICLE_COUNT_LIMIT, self.particle_count
            )));
        }
        if self.max_wells == 0 {
            return Err(invalid("max_wells must be at least 1"));
        }
        if self.max_wells > WELL_SLOT_LIMIT {
            return Err(invalid(&format!(
                "max_wells must not exceed {} (got {})",
                WELL_SLOT_LIMIT, self.max_wells
            )));
        }

        let scalars = [
            ("spring_k", self.spring_k),
            ("damping", self.damping),
            ("max_delta", self.max_delta),
            ("settle_epsilon", self.settle_epsilon),
            ("well_ramp", self.well_ramp),
            ("well_life", self.well_life),
            ("capture_radius", self.capture_radius),
            ("burst_radius", self.burst_radius),
            ("burst_strength", self.burst_strength),
            ("burst_min_dist_sq", self.burst_min_dist_sq),
            ("brightness_min", self.brightness_min),
            ("brightness_max", self.brightness_max),
            ("well_pull", self.well_pull),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(&format!("{} must be finite (got {})", name, value)));
            }
            if value < 0.0 {
                return Err(invalid(&format!("{} must not be negative (got {})", name, value)));
            }
        }
        if !self.home_spread.is_finite() || self.home_spread.min_element() < 0.0 {
            return Err(invalid("home_spread must be finite and non-negative"));
        }
        if !self.world_offset.is_finite() {
            return Err(invalid("world_offset must be finite"));
        }

        if self.damping > 1.0 {
            return Err(invalid(&format!("damping must be within [0, 1] (got {})", self.damping)));
        }
        for (name, value) in [
            ("max_delta", self.max_delta),
            ("well_ramp", self.well_ramp),
            ("well_life", self.well_life),
            ("capture_radius", self.capture_radius),
            ("burst_radius", self.burst_radius),
        ] {
            if value <= 0.0 {
                return Err(invalid(&format!("{} must be positive", name)));
            }
        }
        if self.brightness_min > self.brightness_max {
            return Err(invalid("brightness_min must not exceed brightness_max"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> FieldError {
    FieldError::InvalidConfig(msg.to_string())
}
