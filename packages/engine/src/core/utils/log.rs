//! Console logging for the JS host.
//!
//! On wasm32 the macros forward to `console.log` / `console.warn` through
//! web-sys. Native builds (unit tests, integration tests) have no JS console:
//! the arguments are still type-checked but never formatted or evaluated.

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_log_str(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_warn_str(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// `format!`-style logging to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::core::utils::log::console_log_str(&format!($($arg)*));
        #[cfg(not(target_arch = "wasm32"))]
        if false {
            let _ = format!($($arg)*);
        }
    }};
}

/// `format!`-style warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        $crate::core::utils::log::console_warn_str(&format!($($arg)*));
        #[cfg(not(target_arch = "wasm32"))]
        if false {
            let _ = format!($($arg)*);
        }
    }};
}
