// Domain layer: offer and cart models plus the ports the core talks through.

pub mod model;
pub mod ports;
