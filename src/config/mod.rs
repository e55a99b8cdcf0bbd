//! Configuration modules for the Markbook API.
//!
//! Configuration is loaded from environment variables at startup; see each
//! submodule for variable names and defaults.
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration

pub mod cors;
