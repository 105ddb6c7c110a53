// Domain layer: park value types and the ports the service and browser are written against.

pub mod model;
pub mod ports;
