// console output for the panel, mirrors what the page sees in devtools
// native builds have no console import so these turn into no-ops there

const PREFIX: &str = "[panel]";

#[cfg(target_arch = "wasm32")]
pub fn info(msg: &str) {
    web_sys::console::log_2(&PREFIX.into(), &msg.into());
}

#[cfg(target_arch = "wasm32")]
pub fn debug(msg: &str) {
    web_sys::console::debug_2(&PREFIX.into(), &msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn debug(_msg: &str) {}
