// Widgets - One renderer per panel plus the status bar
pub mod configure;
pub mod help;
pub mod status;
pub mod version;
