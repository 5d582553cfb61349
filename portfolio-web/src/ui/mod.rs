//! Page behaviours as plain state machines. The `dom` module wires them to
//! real elements; everything here runs without a browser.

pub mod contact_form;
pub mod footer_year;
pub mod nav_highlight;
pub mod reveal;
pub mod skill_bars;
pub mod smooth_scroll;
pub mod theme;
pub mod typewriter;
