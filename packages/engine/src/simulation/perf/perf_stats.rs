use wasm_bindgen::prelude::*;

/// Snapshot of the last tick. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) pull_ms: f64,
    pub(super) wells_ms: f64,
    pub(super) publish_ms: f64,
    pub(super) particles_moved: u32,
    pub(super) particle_count: u32,
    pub(super) wells_active: u32,
    pub(super) wells_expired: u32,
    /// Particles kicked by bursts since the previous tick
    pub(super) burst_kicks: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn pull_ms(&self) -> f64 { self.pull_ms }
    #[wasm_bindgen(getter)]
    pub fn wells_ms(&self) -> f64 { self.wells_ms }
    #[wasm_bindgen(getter)]
    pub fn publish_ms(&self) -> f64 { self.publish_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn wells_active(&self) -> u32 { self.wells_active }
    #[wasm_bindgen(getter)]
    pub fn wells_expired(&self) -> u32 { self.wells_expired }
    #[wasm_bindgen(getter)]
    pub fn burst_kicks(&self) -> u32 { self.burst_kicks }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
