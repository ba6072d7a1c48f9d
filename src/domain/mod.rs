// Domain layer: the runtime context handle and the ports the guard depends on.

pub mod model;
pub mod ports;
