use log::Level;

/// How long each testimonial pair stays on screen before the carousel advances.
pub const ROTATION_PERIOD_MS: u32 = 3000;

/// Vertical scroll offset (px) past which the header switches to its compact form.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Counter animation frame interval, roughly 60fps.
pub const COUNTER_FRAME_MS: u32 = 16;

/// Inset applied to the viewport before an element counts as scrolled into view.
pub const VIEW_MARGIN: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
