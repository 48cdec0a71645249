//! # stack-core
//!
//! Core crate for design-stack. Contains the unified error system,
//! configuration schemas, the page range windower and pagination state,
//! typed status enums, and the component-scoped hover channel.
//!
//! This crate has **no** internal dependencies on other design-stack crates.

pub mod config;
pub mod error;
pub mod hover;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
