//! Particle field background renderer.

pub mod animation;
pub mod app_setup;
pub mod camera;
pub mod palette;
pub mod particle_field;
pub mod point_cloud;
pub mod pointer;
pub mod settings;
pub mod shaders;
pub mod viewport;
