//! `colearn-demo` library crate.
//!
//! Builds a pod workflow from [`config::DemoConfig`] and collects the
//! marketplace views a learner would see. The binary entrypoint lives in
//! `main.rs`.

pub mod config;
pub mod report;
