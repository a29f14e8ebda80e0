// Infrastructure layer: adapters, file I/O, serde, logging
pub mod chrome_layout;
pub mod logging;
pub mod serde_json_adapter;
