// Engine module - pure response processing (filtering, display rendering)
// This layer sits between decoded responses (types) and CLI presentation

pub mod filter;
pub mod render;

pub use filter::apply_filters;
pub use render::{DisplayRepresentation, NO_DATA_MESSAGE, capitalize, render};
