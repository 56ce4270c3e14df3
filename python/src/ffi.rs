//! ffi.rs
//! `lexpack.Codec` and friends.
//!
//! Argument types are enforced by PyO3 extraction: a non-`str` passed to
//! `compress` or a non-`bytes` passed to `decompress` raises `TypeError`
//! before any Rust code runs.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyOSError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use lexpack_core::dictionary::STANDARD;
use lexpack_core::telemetry::CodecSnapshot;
use lexpack_core::{Codec, CodecOptions, ConfigError, MalformedInputError};

create_exception!(lexpack, DecompressError, PyException);

fn config_err(err: ConfigError) -> PyErr {
    match err {
        ConfigError::TooManyEntries { .. } => PyTypeError::new_err(err.to_string()),
        ConfigError::Parse(_) => PyValueError::new_err(err.to_string()),
        ConfigError::Io(_) => PyOSError::new_err(err.to_string()),
    }
}

fn decompress_err(err: MalformedInputError) -> PyErr {
    DecompressError::new_err(err.to_string())
}

#[pyclass(name = "Codec", module = "lexpack", frozen)]
pub struct PyCodec {
    inner: Codec,
}

#[pymethods]
impl PyCodec {
    /// `Codec(dictionary=None)`; `None` selects the standard dictionary.
    #[new]
    #[pyo3(signature = (dictionary = None))]
    fn new(dictionary: Option<Vec<String>>) -> PyResult<Self> {
        let options = CodecOptions { dictionary };
        let inner = Codec::from_options(&options).map_err(config_err)?;
        Ok(Self { inner })
    }

    /// Build a codec from a JSON options file.
    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        let options = CodecOptions::from_path(path).map_err(config_err)?;
        let inner = Codec::from_options(&options).map_err(config_err)?;
        Ok(Self { inner })
    }

    /// Derive a new codec; unset options are inherited from this one.
    #[pyo3(signature = (dictionary = None))]
    fn create(&self, dictionary: Option<Vec<String>>) -> PyResult<Self> {
        let inner = self
            .inner
            .derive(CodecOptions { dictionary })
            .map_err(config_err)?;
        Ok(Self { inner })
    }

    fn compress<'py>(&self, py: Python<'py>, text: &str) -> Bound<'py, PyBytes> {
        let encoded = py.allow_threads(|| self.inner.compress(text));
        PyBytes::new_bound(py, &encoded)
    }

    fn decompress(&self, py: Python<'_>, data: &[u8]) -> PyResult<String> {
        py.allow_threads(|| self.inner.decompress(data))
            .map_err(decompress_err)
    }

    /// Compress and return `(bytes, stats_json)`.
    fn compress_with_stats<'py>(
        &self,
        py: Python<'py>,
        text: &str,
    ) -> PyResult<(Bound<'py, PyBytes>, String)> {
        let (encoded, counters) = self.inner.compress_with_stats(text);
        let stats = CodecSnapshot::from(&counters)
            .to_json()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((PyBytes::new_bound(py, &encoded), stats))
    }

    #[getter]
    fn dictionary(&self) -> Vec<String> {
        self.inner.dictionary().entries().to_vec()
    }

    #[getter]
    fn fingerprint(&self) -> u32 {
        self.inner.dictionary().fingerprint()
    }

    fn __repr__(&self) -> String {
        format!(
            "Codec(entries={}, fingerprint=0x{:08x})",
            self.inner.dictionary().len(),
            self.inner.dictionary().fingerprint()
        )
    }
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCodec>()?;
    m.add("DecompressError", py.get_type_bound::<DecompressError>())?;
    m.add("STANDARD_DICTIONARY", STANDARD.to_vec())?;
    Ok(())
}
