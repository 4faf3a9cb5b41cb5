pub mod properties;
pub mod throat_area;

pub use properties::{ThroatAreaModel, ThroatField, ThroatProperties};
