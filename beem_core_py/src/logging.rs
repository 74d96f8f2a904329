use crate::release_gil;
use colored::Colorize;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Allows defining a log level for a logging subsystem
///
/// Returns
/// -------
/// :py:class:`LogLevel`
///   The log level. By default, the log level is set to Info.
///
#[pyclass(eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Off,
}

#[pymethods]
impl LogLevel {
    #[new]
    fn new() -> Self {
        LogLevel::Info
    }

    pub fn __str__(&self) -> String {
        format!("{self:?}")
    }

    fn __repr__(&self) -> String {
        format!("{self:?}")
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

impl From<log::LevelFilter> for LogLevel {
    fn from(level: log::LevelFilter) -> Self {
        match level {
            log::LevelFilter::Trace => LogLevel::Trace,
            log::LevelFilter::Debug => LogLevel::Debug,
            log::LevelFilter::Info => LogLevel::Info,
            log::LevelFilter::Warn => LogLevel::Warning,
            log::LevelFilter::Error => LogLevel::Error,
            log::LevelFilter::Off => LogLevel::Off,
        }
    }
}

/// Set the log level for the logger.
///
/// Parameters
/// ----------
/// level: :py:class:`LogLevel`
///   The log level to set.
///
/// Returns
/// -------
/// :py:class:`LogLevel`
///   The previous log level.
///
#[pyfunction]
pub fn set_log_level(level: LogLevel) -> LogLevel {
    let last_level = get_log_level();
    log::set_max_level(level.into());
    last_level
}

/// Get the current log level for the logger.
///
/// Returns
/// -------
/// :py:class:`LogLevel`
///   The current log level.
///
#[pyfunction]
pub fn get_log_level() -> LogLevel {
    log::max_level().into()
}

/// Check if the given log level is enabled.
///
/// Parameters
/// ----------
/// level: :py:class:`LogLevel`
///   The log level to check.
///
/// Returns
/// -------
/// bool
///   True if the log level is enabled, False otherwise.
///
#[pyfunction]
pub fn log_level_enabled(level: LogLevel) -> bool {
    level != LogLevel::Off && log::max_level().ge(&log::LevelFilter::from(level))
}

/// Logs a message.
///
/// GIL Management: This function releases the GIL optionally.
///
/// Parameters
/// ----------
/// level: :py:class:`LogLevel`
///   The log level to use.
/// target: str
///   The code initiated the log message. The target is defined as ``a.b.c``
/// message: str
///   The log message.
/// params: dict
///   The log message parameters.
/// no_gil: bool
///   If True, the GIL is released when the function is executed.
///
#[pyfunction]
#[pyo3(name = "log")]
#[pyo3(signature = (level, target, message, params=None, no_gil=true))]
pub fn log_message_gil(
    level: LogLevel,
    target: &str,
    message: &str,
    params: Option<&Bound<'_, PyDict>>,
    no_gil: bool,
) {
    let params: Option<_> = params.map(|params| {
        params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
    });

    let target = target.replace('.', "::");
    release_gil!(no_gil, || {
        log_message(level, &target, message, params.as_deref());
    });
}

pub fn format_params(params: Option<&[(String, String)]>) -> String {
    let params_display = params
        .unwrap_or_default()
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(", ");
    if params_display.is_empty() {
        params_display
    } else {
        format!("[{params_display}] ")
    }
}

pub fn log_message(
    level: LogLevel,
    target: &str,
    message: &str,
    params: Option<&[(String, String)]>,
) {
    if !log_level_enabled(level) {
        return;
    }
    let params_str = format_params(params).purple();
    match level {
        LogLevel::Trace => {
            log::trace!(target: target, "{}{}", params_str, message)
        }
        LogLevel::Debug => {
            log::debug!(target: target, "{}{}", params_str, message)
        }
        LogLevel::Info => {
            log::info!(target: target, "{}{}", params_str, message)
        }
        LogLevel::Warning => {
            log::warn!(target: target, "{}{}", params_str, message)
        }
        LogLevel::Error => {
            log::error!(target: target, "{}{}", params_str, message)
        }
        LogLevel::Off => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_level_conversions() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
            LogLevel::Off,
        ] {
            assert_eq!(LogLevel::from(log::LevelFilter::from(level)), level);
        }
        assert_eq!(LogLevel::Warning.__str__(), "Warning");
    }

    #[test]
    #[serial]
    fn test_set_get_level() {
        let initial = set_log_level(LogLevel::Warning);
        assert_eq!(get_log_level(), LogLevel::Warning);
        assert!(log_level_enabled(LogLevel::Error));
        assert!(log_level_enabled(LogLevel::Warning));
        assert!(!log_level_enabled(LogLevel::Info));

        let prev = set_log_level(LogLevel::Off);
        assert_eq!(prev, LogLevel::Warning);
        assert!(!log_level_enabled(LogLevel::Error));
        assert!(!log_level_enabled(LogLevel::Off));

        set_log_level(initial);
    }

    #[test]
    fn test_format_params() {
        assert_eq!(format_params(None), "");
        assert_eq!(format_params(Some(&[])), "");
        let params = vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "x".to_string()),
        ];
        assert_eq!(format_params(Some(&params)), "[a=1, b=x] ");
    }

    #[test]
    #[serial]
    fn test_log_from_python() -> PyResult<()> {
        pyo3::prepare_freethreaded_python();
        let initial = set_log_level(LogLevel::Trace);
        let res = Python::with_gil(|py| {
            let params = PyDict::new(py);
            params.set_item("x", 1.5)?;
            log_message_gil(LogLevel::Info, "beem.tests", "hello", Some(&params), true);
            log_message_gil(LogLevel::Debug, "beem.tests", "no params", None, false);
            Ok(())
        });
        set_log_level(initial);
        res
    }
}
