use super::{FieldCore, WellView, WELL_RECORD_STRIDE};

/// Rewrite the well transfer buffer from the registry.
///
/// Record layout (f32 each): id, x, y, z, r, g, b, normalized_age, ramp.
/// Positions are field-local; the host adds `world_offset` when drawing.
pub(super) fn publish_wells(field: &mut FieldCore) {
    let buf = &mut field.render.well_transfer;
    buf.clear();
    let life = field.config.well_life;
    let ramp = field.config.well_ramp;
    for well in field.wells.wells() {
        buf.extend_from_slice(&[
            well.id as f32,
            well.position.x,
            well.position.y,
            well.position.z,
            well.color.x,
            well.color.y,
            well.color.z,
            well.normalized_age(life),
            well.ramp(ramp),
        ]);
    }
    debug_assert_eq!(buf.len(), field.wells.len() * WELL_RECORD_STRIDE);
}

pub(super) fn take_positions_dirty(field: &mut FieldCore) -> bool {
    std::mem::replace(&mut field.render.positions_dirty, false)
}

pub(super) fn well_views(field: &FieldCore) -> Vec<WellView> {
    let life = field.config.well_life;
    let ramp = field.config.well_ramp;
    field
        .wells
        .wells()
        .iter()
        .map(|w| WellView {
            id: w.id,
            position: w.position,
            color: w.color,
            normalized_age: w.normalized_age(life),
            ramp: w.ramp(ramp),
        })
        .collect()
}
