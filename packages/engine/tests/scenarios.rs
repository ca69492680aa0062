use glam::{Vec2, Vec3};
use gravwell_engine::{CameraSample, FieldConfig, FieldCore, Interaction, WellAging};

fn speeds(field: &FieldCore) -> Vec<f32> {
    (0..field.particle_count())
        .map(|i| field.particles().velocity_at(i).length())
        .collect()
}

#[test]
fn create_then_collapse_bursts_outward() {
    let mut field = FieldCore::new(5000).expect("field");
    let w = Vec3::new(1.0, 0.0, 0.0);

    assert_eq!(field.press_at(w), Interaction::Created { id: 0 });
    assert_eq!(field.well_count(), 1);

    assert_eq!(field.press_at(Vec3::new(1.0, 0.1, 0.05)), Interaction::Collapsed { id: 0 });
    assert_eq!(field.well_count(), 0);

    let config = field.config().clone();
    let mut inside = 0;
    for i in 0..field.particle_count() {
        let offset = field.particles().position_at(i) - w;
        let dist_sq = offset.length_squared();
        let v = field.particles().velocity_at(i);
        if dist_sq > config.burst_min_dist_sq && dist_sq < config.burst_radius * config.burst_radius {
            assert!(v.dot(offset) > 0.0, "particle {} not pushed outward", i);
            inside += 1;
        } else {
            assert_eq!(v, Vec3::ZERO, "particle {} outside the burst moved", i);
        }
    }
    assert!(inside > 500, "only {} particles inside the burst", inside);
}

#[test]
fn sixth_well_is_a_no_op() {
    let mut field = FieldCore::new(1000).expect("field");
    for i in 0..5 {
        let outcome = field.press_at(Vec3::new(-20.0 + i as f32 * 10.0, 0.0, 0.0));
        assert_eq!(outcome, Interaction::Created { id: i });
    }
    let before = field.well_buffer().to_vec();
    assert_eq!(field.press_at(Vec3::new(0.0, 30.0, 0.0)), Interaction::AtCapacity);
    assert_eq!(field.well_count(), 5);
    assert_eq!(field.well_buffer(), &before[..]);
}

#[test]
fn collapse_leaves_other_wells_untouched() {
    let mut field = FieldCore::new(500).expect("field");
    let spots = [
        Vec3::new(-15.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(15.0, 0.0, 0.0),
    ];
    for p in spots {
        field.press_at(p);
    }
    let others: Vec<_> = field.wells().iter().filter(|w| w.id != 1).copied().collect();

    assert_eq!(field.press_at(Vec3::new(0.3, -1.2, 0.8)), Interaction::Collapsed { id: 1 });
    assert_eq!(field.wells(), &others[..]);
}

#[test]
fn burst_impulse_fades_with_distance() {
    let mut field = FieldCore::new(5000).expect("field");
    let w = Vec3::ZERO;
    field.press_at(w);
    let before = speeds(&field);
    field.press_at(w);
    let after = speeds(&field);

    let mut samples: Vec<(f32, f32)> = Vec::new();
    for i in 0..field.particle_count() {
        let d = field.particles().position_at(i).distance(w);
        if d * d > field.config().burst_min_dist_sq && d < field.config().burst_radius {
            assert!(after[i] > before[i], "particle {} did not speed up", i);
            samples.push((d, after[i] - before[i]));
        }
    }
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));
    for pair in samples.windows(2) {
        // Ties in distance may differ by float noise only.
        assert!(pair[1].1 <= pair[0].1 + 1e-3, "impulse grew with distance: {:?}", pair);
    }
}

#[test]
fn field_settles_after_a_burst() {
    let mut field = FieldCore::new(3000).expect("field");
    field.press_at(Vec3::ZERO);
    field.press_at(Vec3::ZERO);

    let max_offset = |field: &FieldCore| {
        (0..field.particle_count())
            .map(|i| field.particles().position_at(i).distance(field.particles().home_at(i)))
            .fold(0.0f32, f32::max)
    };

    for _ in 0..30 {
        field.step(1.0 / 60.0);
    }
    let disturbed = max_offset(&field);
    assert!(disturbed > 0.5);

    for _ in 0..6000 {
        field.step(1.0 / 60.0);
    }
    assert!(max_offset(&field) < disturbed * 0.05);
}

#[test]
fn ids_increase_across_cycles() {
    let mut field = FieldCore::new(200).expect("field");
    let mut last = None;
    for _ in 0..25 {
        let id = match field.press_at(Vec3::new(5.0, 5.0, 0.0)) {
            Interaction::Created { id } => id,
            other => panic!("expected a new well, got {:?}", other),
        };
        if let Some(prev) = last {
            assert!(id > prev);
        }
        last = Some(id);
        assert!(matches!(field.press_at(Vec3::new(5.0, 5.0, 0.0)), Interaction::Collapsed { .. }));
    }
    field.reset();
    assert_eq!(field.press_at(Vec3::ZERO), Interaction::Created { id: 25 });
}

#[test]
fn click_through_an_orbiting_camera() {
    let mut config = FieldConfig::with_particle_count(800);
    config.world_offset = Vec3::new(0.0, 2.0, 0.0);
    let mut field = FieldCore::with_config(config).expect("field");

    let camera = CameraSample::looking_at(
        Vec3::new(35.0, 20.0, 40.0),
        Vec3::new(0.0, 2.0, 0.0),
        50f32.to_radians(),
        16.0 / 9.0,
    );
    let outcome = field.click(&camera, Vec2::ZERO);
    assert_eq!(outcome, Interaction::Created { id: 0 });
    // Center of the screen lands on the field origin in local coordinates.
    assert!(field.wells()[0].position.length() < 0.1);

    assert_eq!(field.click(&camera, Vec2::new(0.01, 0.0)), Interaction::Collapsed { id: 0 });
    assert_eq!(field.click(&camera, Vec2::new(2.0, 2.0)).kind_code(), 1);
}

#[test]
fn frozen_aging_matches_the_reference_lifecycle() {
    let mut config = FieldConfig::with_particle_count(100);
    config.well_aging = WellAging::Frozen;
    let mut frozen = FieldCore::with_config(config).expect("field");
    let mut aging = FieldCore::new(100).expect("field");
    for field in [&mut frozen, &mut aging] {
        field.press_at(Vec3::ZERO);
        for _ in 0..400 {
            field.step(0.05);
        }
    }
    assert_eq!(frozen.well_count(), 1);
    assert_eq!(frozen.wells()[0].age, 0.0);
    assert_eq!(aging.well_count(), 0);
}
