// Domain layer: content models and the range-source port. No I/O here.

pub mod model;
pub mod ports;
