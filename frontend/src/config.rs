use log::Level;

use crate::controllers::visibility::TriggerConfig;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Timer and observer lifecycle while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

// Slideshow timing. The first advance waits longer than the steady period.
pub const SLIDESHOW_FIRST_DELAY_MS: u32 = 1_000;
pub const SLIDESHOW_TICK_MS: u32 = 3_000;

// Fractions of the viewport height.
pub const SCROLL_TAB_FRACTION: f64 = 0.8;
pub const REVEAL_ALL_FRACTION: f64 = 0.2;

/// One-shot entrance animation for whole sections.
pub const SECTION_TRIGGER: TriggerConfig = TriggerConfig {
    threshold: 0.2,
    root_margin_px: -50,
    once: true,
};

/// Card groups that should start animating a little earlier than sections.
pub const CONTENT_TRIGGER: TriggerConfig = TriggerConfig {
    threshold: 0.1,
    root_margin_px: -50,
    once: true,
};

pub const CONCERNS_TRIGGER: TriggerConfig = TriggerConfig {
    threshold: 0.05,
    root_margin_px: -10,
    once: true,
};

/// Arms and disarms the slideshow every time it enters or leaves the viewport.
pub const SLIDESHOW_TRIGGER: TriggerConfig = TriggerConfig {
    threshold: 0.2,
    root_margin_px: 0,
    once: false,
};

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/eye_nail_lokahi/?igsh=am9jZGR3eGltdm80#";
pub const LINE_APPLY_URL: &str = "https://lin.ee/3u7E6NY";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3254.2010480828612!2d139.529089975893!3d35.35065654806253!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x60184560e1b54ae7%3A0x322baae6ff278a26!2z44CSMjQ3LTAwNTYg56We5aWI5bed55yM6Y6M5YCJ5biC5aSn6Ii577yR5LiB55uu77yR77yT4oiS77yR77yVIFNreeODk-ODqyAyMDM!5e0!3m2!1sja!2sjp!4v1760576900999!5m2!1sja!2sjp";
