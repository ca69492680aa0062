use super::perf_stats::PerfStats;
use super::FieldCore;

pub(super) fn enable_perf_metrics(field: &mut FieldCore, enabled: bool) {
    field.perf_enabled = enabled;
    if !enabled {
        field.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(field: &FieldCore) -> PerfStats {
    field.perf_stats.clone()
}
