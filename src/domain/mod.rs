// Domain layer: record model, statistics and the ports the pipeline is built on.

pub mod model;
pub mod ports;
