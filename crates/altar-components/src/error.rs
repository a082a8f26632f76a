//! Error types for altar-components

use thiserror::Error;

/// Error type for component operations
#[derive(Debug, Error)]
pub enum ComponentError {
	/// A child of the wrong kind was passed to a component that constrains its children
	#[error("Invalid child for `{component}`: expected {expected}, found {found}")]
	InvalidChild {
		component: &'static str,
		expected: &'static str,
		found: String,
	},

	/// A component that takes a fixed number of children got a different number
	#[error("`{component}` must have exactly {expected} child(ren), but got {found}")]
	ChildCount {
		component: &'static str,
		expected: usize,
		found: usize,
	},

	/// Invalid component property
	#[error("Invalid component property: {0}")]
	InvalidProperty(String),

	/// Component data could not be serialized for the client
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
