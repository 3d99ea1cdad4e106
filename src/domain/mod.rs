// Domain layer: plain data model and ports. No knowledge of config files or storage.

pub mod model;
pub mod ports;
