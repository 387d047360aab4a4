//! quest-core - Core library for gen-quest
//!
//! This crate provides the worksheet logic for the arithmetic worksheet
//! generator: question generation, row batching, and the plain-text and
//! document exporters.

pub mod error;
pub mod config;
pub mod question;
pub mod export;
pub mod worksheet;

pub use error::{QuestError, Result};
