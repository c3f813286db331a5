// Domain layer: storage model and ports (interfaces).

pub mod model;
pub mod ports;
