// Thin wrappers over the `log` macros that compile to nothing unless the
// `logging` feature is enabled.

#[allow(unused_macros)]
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($tt)*);
        }
    };
}

#[allow(unused_macros)]
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($tt)*);
        }
    };
}
