// Domain layer: the report data shape and the read-only view consumed by the core operations.

pub mod model;
pub mod ports;
