//! Delays used by the page controllers, in milliseconds.

pub const SKILL_BAR_FILL_DELAY_MS: u32 = 100;

pub const TYPEWRITER_START_DELAY_MS: u32 = 350;
pub const TYPEWRITER_CHAR_INTERVAL_MS: u32 = 45;
pub const TYPEWRITER_BLINK_INTERVAL_MS: u32 = 1000;

/// Length of the simulated contact-form submission.
pub const CONTACT_SEND_DELAY_MS: u32 = 1500;
