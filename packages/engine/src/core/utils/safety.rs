//! Zero-Cost Safety Macros
//!
//! Column access inside the hot particle loops goes through `fast!`:
//! bounds-checked in debug builds, `get_unchecked` in release builds.
//!
//! Usage:
//! ```rust
//! use gravwell_engine::fast;
//!
//! let i = 1;
//! let positions = vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
//! // Read: fast!(slice, [index])
//! let y = *fast!(positions, [i * 3 + 1]);
//! assert_eq!(y, 4.0);
//!
//! let mut velocities = vec![0.0f32; 6];
//! // Write: fast!(slice, [index] = value)
//! fast!(velocities, [i * 3] = 2.5);
//! assert_eq!(velocities[3], 2.5);
//! ```

/// Zero-cost bounds checking macro
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
///
/// Callers must guarantee the index is in range; every call site derives it
/// from `0..store.len()` of the same column set.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_fast_read() {
        let column = vec![0.5f32, 1.5, 2.5];
        let val = *fast!(column, [2]);
        assert_eq!(val, 2.5);
    }

    #[test]
    fn test_fast_write() {
        let mut column = vec![0.0f32; 3];
        fast!(column, [1] = 7.0);
        assert_eq!(column, vec![0.0, 7.0, 0.0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_fast_bounds_check_debug() {
        let column = vec![1.0f32, 2.0, 3.0];
        let _ = *fast!(column, [10]); // Should panic in debug
    }
}
