//! Model loading functionality
//!
//! Provides loading of model documents from YAML and JSON.

pub mod loader;

pub use loader::{LoadError, ModelFormat, ModelLoader};
