use crate::err_to_pyo3;
use beem_core::primitives::rust;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

/// A point in 2D Euclidean space.
///
/// Parameters
/// ----------
/// x : float
///   The X coordinate, defaults to ``0.0``.
/// y : float
///   The Y coordinate, defaults to ``0.0``.
///
/// Either both coordinates or none of them must be passed.
///
#[pyclass(eq)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Point(pub(crate) rust::Point);

impl Point {
    pub fn inner(&self) -> &rust::Point {
        &self.0
    }
}

impl From<rust::Point> for Point {
    fn from(p: rust::Point) -> Self {
        Self(p)
    }
}

impl From<Point> for rust::Point {
    fn from(p: Point) -> Self {
        p.0
    }
}

#[pymethods]
impl Point {
    #[classattr]
    const __hash__: Option<Py<PyAny>> = None;

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }

    #[new]
    #[pyo3(signature = (x=None, y=None))]
    pub fn new(x: Option<f64>, y: Option<f64>) -> PyResult<Self> {
        match (x, y) {
            (None, None) => Ok(Self(rust::Point::default())),
            (Some(x), Some(y)) => Ok(Self(rust::Point::new(x, y))),
            _ => Err(PyTypeError::new_err(
                "Point() takes either no coordinates or both x and y",
            )),
        }
    }

    #[getter]
    pub fn get_x(&self) -> f64 {
        self.0.get_x()
    }

    #[setter]
    pub fn set_x(&mut self, x: f64) {
        self.0.set_x(x);
    }

    #[getter]
    pub fn get_y(&self) -> f64 {
        self.0.get_y()
    }

    #[setter]
    pub fn set_y(&mut self, y: f64) {
        self.0.set_y(y);
    }

    /// Computes the Euclidean distance to another point.
    ///
    /// Parameters
    /// ----------
    /// other : :py:class:`Point`
    ///   The point to measure the distance to.
    ///
    /// Returns
    /// -------
    /// float
    ///   The distance, NaN if any coordinate is NaN.
    ///
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.0.distance_to(&other.0)
    }

    pub fn copy(&self) -> Self {
        *self
    }

    fn __copy__(&self) -> Self {
        *self
    }

    fn __deepcopy__(&self, _memo: &Bound<'_, PyAny>) -> Self {
        *self
    }

    #[getter]
    pub fn json(&self) -> PyResult<String> {
        err_to_pyo3!(self.0.to_json(), PyValueError)
    }

    #[staticmethod]
    pub fn from_json(json: &str) -> PyResult<Self> {
        let res = err_to_pyo3!(rust::Point::from_json(json), PyValueError)?;
        Ok(Self(res))
    }
}
