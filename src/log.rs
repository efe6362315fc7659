//! Console logging for the browser build. Compiles to nothing on native
//! targets so the simulation tests never reach into JS.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(_msg: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(_msg: &str) {}

/// `format!`-style wrapper around [`clog`].
#[macro_export]
macro_rules! clog {
    ($($arg:tt)*) => {
        $crate::log::clog(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! cwarn {
    ($($arg:tt)*) => {
        $crate::log::cwarn(&format!($($arg)*))
    };
}
