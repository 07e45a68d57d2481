// Domain layer: book models and the ports the fetcher depends on.

pub mod model;
pub mod ports;
