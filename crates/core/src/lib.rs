//! Core library for textkit
//!
//! This crate implements the **Functional Core** of the textkit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`textkit_core`** (this crate): the tool catalog, configuration
//!   resolution and every text transform, with zero I/O
//! - **`textkit`**: the CLI and MCP server (the Imperative Shell)
//!
//! Functions in this crate are pure: same input, same output, no side effects.
//! The only exception is randomness, which is always passed in as a
//! [`rand::RngCore`] so callers decide whether it is seeded.
//!
//! # Module Organization
//!
//! - [`registry`]: static catalog of tools and their configuration fields
//! - [`config`]: caller configuration and its resolution into typed settings
//! - [`dispatch`]: routes a request to the transform for its tool
//! - [`error`]: transform error taxonomy
//! - [`transforms`]: the transforms themselves, grouped by domain
//!
//! # Example Usage
//!
//! ```rust
//! use textkit_core::dispatch::{dispatch, TransformRequest};
//!
//! let request = TransformRequest::new("titlecase", "hello there world");
//! assert_eq!(dispatch(&request).output_text(), "Hello There World");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod registry;
pub mod transforms;

pub use config::{Configuration, Settings};
pub use dispatch::{dispatch, dispatch_known, dispatch_with_rng, TransformRequest, TransformResult};
pub use error::{ErrorKind, TransformError};
pub use registry::{list_tools, lookup, FieldValue, ToolDescriptor, ToolId};
