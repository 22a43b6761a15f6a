// Domain module - Core types shared by every layer
pub mod about;
pub mod catalog;
pub mod config;
pub mod error;
