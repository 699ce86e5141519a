//! Color temperature: Kelvin to RGB mapping and temperature categories.

pub mod category;
pub mod interpolate;
pub mod kelvin;
