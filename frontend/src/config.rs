/// Period between automatic testimonial advances. Override at build time
/// with `PRINTMASTER_AUTOPLAY_MS`.
pub fn autoplay_interval_ms() -> u32 {
    option_env!("PRINTMASTER_AUTOPLAY_MS")
        .and_then(|v| v.parse().ok())
        .unwrap_or(6_000)
}

/// Simulated delivery time for the contact form.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Vertical scroll, in pixels, after which the navbar turns solid.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 60.0;

pub const VIEW_THRESHOLD: f64 = 0.1;
pub const VIEW_ROOT_MARGIN: &str = "0px";

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
