//! Core library components.
//!
//! The provisioning engine: template parsing, value resolution, encoding,
//! and delivery to a plaintext or encrypted destination.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod document;
pub mod encode;
pub mod exec;
pub mod fs;
pub mod prompt;
pub mod provision;
pub mod report;
pub mod resolve;
pub mod strategy;
pub mod template;
