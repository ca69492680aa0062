use gravwell_engine::Field;

#[test]
fn perf_smoke_step() {
    let mut field = Field::new(5000).expect("field");
    field.enable_perf_metrics(true);
    field.press(0.0, 0.0, 0.0);
    field.press(0.5, 0.0, 0.0);
    for _ in 0..10 {
        field.step(1.0 / 60.0);
    }
    let stats = field.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particle_count(), 5000);
    assert_eq!(stats.memory_bytes(), 5000 * 48);
}
