const PRODUCTION_FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzm4-dpVIjzf6U94MA-uxJfFKamQCL5OERjMg-dReX039y1TAt2iHVCqLA_Ne69Cnl72Q/exec";

#[cfg(debug_assertions)]
pub fn get_form_endpoint() -> &'static str {
    // Point local builds at a test sheet with CONTACT_FORM_ENDPOINT=... trunk serve
    option_env!("CONTACT_FORM_ENDPOINT").unwrap_or(PRODUCTION_FORM_ENDPOINT)
}

#[cfg(not(debug_assertions))]
pub fn get_form_endpoint() -> &'static str {
    PRODUCTION_FORM_ENDPOINT
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Nominal frame length for timer driven animations (60 fps).
pub const FRAME_MS: f64 = 1000.0 / 60.0;
/// `FRAME_MS` rounded for `gloo_timers`, which only takes whole milliseconds.
pub const FRAME_INTERVAL_MS: u32 = 16;

pub const COUNT_UP_DURATION_MS: u32 = 2000;
pub const SMOOTH_SCROLL_DURATION_MS: f64 = 1200.0;
pub const HERO_WORD_INTERVAL_MS: u32 = 2000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HERO_PARTICLES: usize = 50;
pub const PAGE_PARTICLES: usize = 30;
