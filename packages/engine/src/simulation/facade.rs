use glam::{Quat, Vec2, Vec3};
use wasm_bindgen::prelude::*;

use crate::domain::{FieldConfig, FieldError};
use crate::spatial::CameraSample;
use crate::systems::interaction::Interaction;

use super::perf_stats::PerfStats;
use super::{FieldCore, WELL_RECORD_STRIDE};

fn to_js(err: FieldError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct AbiLayout {
    positions_ptr: u32,
    colors_ptr: u32,
    home_ptr: u32,
    column_len_elements: u32,
    column_len_bytes: u32,
    wells_ptr: u32,
    wells_len_elements: u32,
    wells_len_bytes: u32,
    well_stride: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn home_ptr(&self) -> u32 { self.home_ptr }
    #[wasm_bindgen(getter)]
    pub fn column_len_elements(&self) -> u32 { self.column_len_elements }
    #[wasm_bindgen(getter)]
    pub fn column_len_bytes(&self) -> u32 { self.column_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn wells_ptr(&self) -> u32 { self.wells_ptr }
    #[wasm_bindgen(getter)]
    pub fn wells_len_elements(&self) -> u32 { self.wells_len_elements }
    #[wasm_bindgen(getter)]
    pub fn wells_len_bytes(&self) -> u32 { self.wells_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn well_stride(&self) -> u32 { self.well_stride }
}

/// Outcome of a click for JS: `kind` is 0 missed, 1 created, 2 collapsed,
/// 3 at capacity. `well_id` is -1 when no well was involved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct ClickResult {
    kind: u8,
    well_id: i32,
}

impl From<Interaction> for ClickResult {
    fn from(outcome: Interaction) -> Self {
        Self {
            kind: outcome.kind_code(),
            well_id: outcome
                .well_id()
                .and_then(|id| i32::try_from(id).ok())
                .unwrap_or(-1),
        }
    }
}

#[wasm_bindgen]
impl ClickResult {
    #[wasm_bindgen(getter)]
    pub fn kind(&self) -> u8 { self.kind }
    #[wasm_bindgen(getter)]
    pub fn well_id(&self) -> i32 { self.well_id }
}

#[wasm_bindgen]
pub struct Field {
    core: FieldCore,
}

#[wasm_bindgen]
impl Field {
    /// Create a field of `particle_count` particles with default settings
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: u32) -> Result<Field, JsValue> {
        let core = FieldCore::new(particle_count as usize).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a field from a JSON config; missing keys take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Field, JsValue> {
        let core = FieldCore::from_config_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Rebuild with a new JSON config. On error the field is untouched.
    pub fn reconfigure(&mut self, json: String) -> Result<(), JsValue> {
        let config = FieldConfig::from_json(&json).map_err(to_js)?;
        self.core.reconfigure(config).map_err(to_js)
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn clear_wells(&mut self) {
        self.core.clear_wells();
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn well_count(&self) -> u32 { self.core.well_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Advance by one host frame of `delta` seconds
    pub fn step(&mut self, delta: f32) {
        self.core.step(delta);
    }

    /// Collapse-or-create at a field-local point (skips picking)
    pub fn press(&mut self, x: f32, y: f32, z: f32) -> ClickResult {
        self.core.press_at(Vec3::new(x, y, z)).into()
    }

    /// Pointer click. Camera pose in world space, rotation as a quaternion,
    /// pointer in NDC (+y up).
    #[allow(clippy::too_many_arguments)]
    pub fn click(
        &mut self,
        cam_x: f32,
        cam_y: f32,
        cam_z: f32,
        rot_x: f32,
        rot_y: f32,
        rot_z: f32,
        rot_w: f32,
        fov_y: f32,
        aspect: f32,
        ndc_x: f32,
        ndc_y: f32,
    ) -> ClickResult {
        let camera = CameraSample::new(
            Vec3::new(cam_x, cam_y, cam_z),
            Quat::from_xyzw(rot_x, rot_y, rot_z, rot_w).normalize(),
            fov_y,
            aspect,
        );
        self.core.click(&camera, Vec2::new(ndc_x, ndc_y)).into()
    }

    // === RENDER API ===

    /// True when positions changed since the last call; clears the flag
    pub fn take_positions_dirty(&mut self) -> bool {
        self.core.take_positions_dirty()
    }

    /// Pointer to positions (x, y, z per particle, field-local)
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn colors_ptr(&self) -> *const f32 {
        self.core.colors_ptr()
    }

    pub fn home_ptr(&self) -> *const f32 {
        self.core.home_ptr()
    }

    pub fn column_len(&self) -> usize {
        self.core.column_len()
    }

    pub fn column_len_bytes(&self) -> usize {
        self.core.column_len_bytes()
    }

    /// Pointer to the well records; re-read after every step or click
    pub fn wells_ptr(&self) -> *const f32 {
        self.core.wells_ptr()
    }

    pub fn wells_len(&self) -> usize {
        self.core.wells_len()
    }

    pub fn well_stride(&self) -> usize {
        WELL_RECORD_STRIDE
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            positions_ptr: data.positions_ptr as u32,
            colors_ptr: data.colors_ptr as u32,
            home_ptr: data.home_ptr as u32,
            column_len_elements: data.column_len_elements as u32,
            column_len_bytes: data.column_len_bytes as u32,
            wells_ptr: data.wells_ptr as u32,
            wells_len_elements: data.wells_len_elements as u32,
            wells_len_bytes: data.wells_len_bytes as u32,
            well_stride: WELL_RECORD_STRIDE as u32,
        }
    }
}
