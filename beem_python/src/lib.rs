use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3::wrap_pymodule;

use beem_core_py::err_to_pyo3;
use beem_core_py::logging::*;
use beem_core_py::primitives::Point;
use beem_core_py::version;

pub use beem_core_py::logging::LogLevel;

const LOG_ENV_VAR_NAME: &str = "LOGLEVEL";

#[pymodule(gil_used = false)]
pub fn geometry(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Point>()?;
    Ok(())
}

#[pymodule(gil_used = false)]
pub(crate) fn logging(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<LogLevel>()?;
    m.add_function(wrap_pyfunction!(set_log_level, m)?)?;
    m.add_function(wrap_pyfunction!(get_log_level, m)?)?;
    m.add_function(wrap_pyfunction!(log_level_enabled, m)?)?;
    m.add_function(wrap_pyfunction!(log_message_gil, m)?)?;
    Ok(())
}

#[pymodule(gil_used = false)]
fn beem(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    init_logs(LogLevel::Info)?;
    init_all(py, m)
}

/// Installs the process-wide logger.
///
/// ``LOGLEVEL`` is honored when set, otherwise it is populated from `log_level`.
/// Fails if a logger is already installed.
///
pub fn init_logs(log_level: LogLevel) -> PyResult<()> {
    if std::env::var(LOG_ENV_VAR_NAME).is_err() {
        std::env::set_var(
            LOG_ENV_VAR_NAME,
            log::LevelFilter::from(log_level).to_string(),
        );
    }
    err_to_pyo3!(
        pretty_env_logger::try_init_timed_custom_env(LOG_ENV_VAR_NAME),
        PyRuntimeError
    )?;
    Ok(())
}

pub fn init_all(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_class::<Point>()?;

    m.add_wrapped(wrap_pymodule!(self::geometry))?;
    m.add_wrapped(wrap_pymodule!(self::logging))?;

    let sys = PyModule::import(py, "sys")?;
    let sys_modules_bind = sys.getattr("modules")?;
    let sys_modules = sys_modules_bind.downcast::<PyDict>()?;

    sys_modules.set_item("beem.geometry", m.getattr("geometry")?)?;
    sys_modules.set_item("beem.logging", m.getattr("logging")?)?;

    log::debug!(target: "beem::init", "Module beem {} registered", version());
    Ok(())
}
