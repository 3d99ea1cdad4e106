// Adapters layer: concrete cart sinks. The file-backed sink lives in config::cli next to the CLI settings.

pub mod memory;
