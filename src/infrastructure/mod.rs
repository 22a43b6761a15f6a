// Infrastructure module - External dependencies and adapters
pub mod artifact;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod serial;
