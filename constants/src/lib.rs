pub mod page;
pub mod particle_field;
pub mod render_settings;
pub mod timing;
