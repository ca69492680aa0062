use glam::Vec3;

use crate::domain::palette::well_color;
use crate::domain::{FieldConfig, WellAging};
use crate::spatial::ParticleStore;

use super::burst::burst;
use super::Well;

/// Manages the live wells
pub struct WellRegistry {
    wells: Vec<Well>,
    next_id: u32,
    capacity: usize,
    /// Particles kicked by collapses since the last `take_burst_kicks`
    burst_kicks: u64,
}

/// A collapsed well and how many particles its burst kicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collapse {
    pub well: Well,
    pub kicked: u32,
}

impl WellRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            wells: Vec::with_capacity(capacity),
            next_id: 0,
            capacity,
            burst_kicks: 0,
        }
    }

    /// Add a well at `position`.
    ///
    /// Returns `None` (and changes nothing) when the registry is full. The
    /// color is `WELL_PALETTE[live count mod palette size]`.
    pub fn create(&mut self, position: Vec3) -> Option<u32> {
        if self.is_full() {
            return None;
        }

        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.wells.push(Well {
            id,
            position,
            age: 0.0,
            color: well_color(self.wells.len()),
        });
        Some(id)
    }

    /// Index of the first well (creation order) whose center is strictly
    /// within `radius_sq` of `point`.
    pub fn find_at(&self, point: Vec3, radius_sq: f32) -> Option<usize> {
        self.wells.iter().position(|w| w.captures(point, radius_sq))
    }

    /// Collapse the well under `point`, if any, and burst the particles
    /// around it.
    pub fn try_collapse_at(
        &mut self,
        point: Vec3,
        store: &mut ParticleStore,
        config: &FieldConfig,
    ) -> Option<Collapse> {
        let idx = self.find_at(point, config.capture_radius_sq())?;
        // Order-preserving removal keeps the creation-order scan intact.
        let well = self.wells.remove(idx);
        let collapse = Collapse {
            well,
            kicked: burst(store, well.position, config),
        };
        self.burst_kicks += u64::from(collapse.kicked);
        Some(collapse)
    }

    /// Kicks landed since the previous call; resets the count.
    pub fn take_burst_kicks(&mut self) -> u64 {
        std::mem::take(&mut self.burst_kicks)
    }

    /// Age every well by `delta` and drop the ones that reached `well_life`.
    /// Expiry is a quiet fade-out: no burst. Returns the number expired.
    pub fn advance(&mut self, delta: f32, config: &FieldConfig) -> u32 {
        match config.well_aging {
            WellAging::Frozen => 0,
            WellAging::Advance => {
                let dt = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
                for well in self.wells.iter_mut() {
                    well.age += dt;
                }
                let before = self.wells.len();
                let life = config.well_life;
                self.wells.retain(|w| w.age < life);
                (before - self.wells.len()) as u32
            }
        }
    }

    /// Remove every well without bursting. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.wells.clear();
    }

    /// Change the capacity; existing wells beyond it are dropped (newest first).
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.wells.truncate(capacity);
    }

    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.wells.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Id the next created well will get
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
