//! egui front end: retained state, controllers and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
