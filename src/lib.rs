//! booklist - a terminal client for a per-user books API
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod repository;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
