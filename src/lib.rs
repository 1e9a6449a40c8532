pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod scanners;
pub mod triage;
