pub mod logging;
/// # Basic objects
///
pub mod primitives;
/// # Utility functions
///
pub mod utils;

use pyo3::prelude::*;

/// Returns the version of the package set in Cargo.toml
///
/// Returns
/// -------
/// str
///   The version of the package.
///
#[pyfunction]
pub fn version() -> String {
    beem_core::version()
}
