#![warn(clippy::pedantic)]

pub mod app;
pub mod config;
pub mod fetch;
pub mod page;
pub mod route;
pub mod telemetry;
