// Domain layer: contracts (ports) and plain data models. No I/O here.

pub mod model;
pub mod ports;
