// Adapters layer: concrete implementations for external systems (pricing service over HTTP,
// terminal rendering).

pub mod http;
pub mod render;
