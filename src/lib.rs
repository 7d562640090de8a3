pub mod cli;
pub mod client;
pub mod config;
pub mod data_models;
pub mod envelope;
pub mod error;
pub mod runner;
pub mod search_type;
