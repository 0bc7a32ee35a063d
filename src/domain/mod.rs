// Domain layer: showcase and contact models, static page content, and the ports the core depends on.

pub mod content;
pub mod model;
pub mod ports;
