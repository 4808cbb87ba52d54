pub mod config;
pub mod controls;
