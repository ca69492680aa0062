//! Millisecond clock for perf stats: `Date.now()` in the browser, a
//! process-local monotonic epoch everywhere else.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Timestamp taken at `start`; `elapsed_ms` never goes negative.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { start_ms: now_ms() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }
}

/// Run `f`, timing it only when `enabled`. Returns the result and the
/// elapsed milliseconds (0 when disabled).
#[inline]
pub(crate) fn timed<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let t0 = PerfTimer::start();
    let out = f();
    (out, t0.elapsed_ms())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timing_reports_zero() {
        let (out, ms) = timed(false, || std::thread::sleep(std::time::Duration::from_millis(2)));
        assert_eq!(out, ());
        assert_eq!(ms, 0.0);
    }

    #[test]
    fn enabled_timing_measures_the_closure() {
        let (out, ms) = timed(true, || {
            std::thread::sleep(std::time::Duration::from_millis(5));
            7
        });
        assert_eq!(out, 7);
        assert!(ms >= 4.0, "measured {} ms", ms);
    }
}
