//! Ids, selectors and class names the page controllers bind to.

pub const BACKGROUND_CONTAINER_ID: &str = "threejs-background";
pub const BACKGROUND_CANVAS_ID: &str = "particle-field-canvas";
/// Optional JSON overrides for the particle field, read from the container.
pub const BACKGROUND_SETTINGS_ATTRIBUTE: &str = "data-particle-field";

pub const PRIMARY_COLOR_PROPERTY: &str = "--primary";
pub const ACCENT_COLOR_PROPERTY: &str = "--accent";

pub const SMOOTH_SCROLL_LINKS: &str = ".nav-links a, .footer-links a, .hero-cta a";
/// Height of the fixed header, subtracted from every scroll destination.
pub const HEADER_OFFSET_PX: f64 = 100.0;

pub const THEME_TOGGLE: &str = ".theme-toggle";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const LIGHT_THEME_CLASS: &str = "light-theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const MOON_ICON_HTML: &str = r#"<i class="fas fa-moon"></i>"#;
pub const SUN_ICON_HTML: &str = r#"<i class="fas fa-sun"></i>"#;

pub const REVEAL_TARGETS: &str = ".glass-card, .section-header, .skill-bar, .project-card";
pub const REVEALED_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

pub const SECTIONS: &str = "section";
pub const NAV_LINKS: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "active";
/// Distance below the top of the viewport used as the "reading line".
pub const NAV_SCROLL_OFFSET_PX: f64 = 150.0;

pub const SKILL_BARS: &str = ".skill-bar";
pub const SKILL_BAR_FILL: &str = ".progress-fill";
pub const SKILL_BAR_PERCENT_PROPERTY: &str = "--percent";
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;

pub const TYPEWRITER_TARGET: &str = ".typewriter h2";
pub const TYPEWRITER_CURSOR_BORDER: &str = "0.15em solid var(--primary)";
pub const TYPEWRITER_CURSOR_COLOR: &str = "var(--primary)";

pub const CONTACT_FORM: &str = ".contact-form form";
pub const CONTACT_FIELDS: &str = "input, textarea";
pub const CONTACT_SUBMIT: &str = r#"button[type="submit"]"#;
pub const INVALID_BORDER_COLOR: &str = "var(--secondary)";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully! (This is a demo)";

pub const FOOTER_YEAR_ID: &str = "year";
