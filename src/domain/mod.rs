// Domain layer: core models and ports. No transport or config dependencies.

pub mod model;
pub mod ports;
