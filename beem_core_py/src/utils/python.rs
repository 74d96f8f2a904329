#[macro_export]
macro_rules! function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(f);

        // Find and cut the rest of the path
        match &name[..name.len() - 3].rfind(':') {
            Some(pos) => &name[pos + 1..name.len() - 3],
            None => &name[..name.len() - 3],
        }
    }};
}

#[macro_export]
macro_rules! release_gil {
    ($predicate:expr, $expression:expr) => {{
        if $predicate {
            let (res, elapsed_nogil) = pyo3::marker::Python::with_gil(|py| {
                py.allow_threads(|| {
                    let start_nogil = std::time::Instant::now();
                    #[allow(clippy::redundant_closure_call)]
                    let res = $expression();
                    (res, start_nogil.elapsed())
                })
            });
            log::trace!(
                target: "beem::gil_management::with_released_gil",
                "GIL-free operation ({}, {}, {}) took {:?}",
                $crate::function!(),
                file!(),
                line!(),
                elapsed_nogil
            );
            res
        } else {
            #[allow(clippy::redundant_closure_call)]
            let res = $expression();
            res
        }
    }};
}

#[macro_export]
macro_rules! err_to_pyo3 {
    ($expr:expr, $py_err:ty) => {
        $expr.map_err(|e| <$py_err>::new_err(e.to_string()))
    };
}

#[cfg(test)]
mod tests {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    fn failing() -> anyhow::Result<i32> {
        anyhow::bail!("boom")
    }

    #[test]
    fn test_function_name() {
        assert_eq!(crate::function!(), "test_function_name");
    }

    #[test]
    fn test_err_to_pyo3() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let res: PyResult<i32> = crate::err_to_pyo3!(failing(), PyValueError);
            let err = res.unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
            assert_eq!(err.value(py).to_string(), "boom");
        });
    }

    #[test]
    fn test_release_gil() {
        pyo3::prepare_freethreaded_python();
        assert_eq!(crate::release_gil!(true, || 2 + 2), 4);
        assert_eq!(crate::release_gil!(false, || 3 + 3), 6);
    }
}
