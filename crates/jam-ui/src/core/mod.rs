//! Core, DOM-free primitives and helpers for the console.
pub mod actions;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod logic;
pub mod store;
pub mod task;
