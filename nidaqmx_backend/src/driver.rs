//! Handle to the loaded driver and the status-checking path every call takes.
//!
//! All wrappers call through [`daqmx_call!`], which resolves the function
//! pointer from the table (or fails with [`DaqmxError::MissingFunction`]),
//! performs the call and hands the status to [`Daqmx::check`]:
//!
//! - `0`: success.
//! - `> 0`: warning. Logged with `tracing::warn!` along with the driver's text;
//!   the call still succeeds.
//! - `< 0`: error. The driver's extended error info is fetched (falling back to
//!   `DAQmxGetErrorString`), appended to the error log if one is configured,
//!   logged with `tracing::error!` and returned as [`DaqmxError::Driver`].

use std::fs::OpenOptions;
use std::io::Write;
use std::ptr;
use std::sync::Arc;

use libc::c_char;
use nidaqmx_sys::{self as sys, float64, int32, uInt32, DaqmxFns, Library};
use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::DriverConfig;
use crate::error::{DaqmxError, Result, Status};
use crate::utils::buf_to_string;
use crate::values::Timeout;

/// Calls a driver function by its C name and checks the returned status.
///
/// Evaluates to `Result<int32>`; `Ok` carries the status, which is `0` or a
/// warning code.
macro_rules! daqmx_call {
    ($daqmx:expr, $func:ident ( $($arg:expr),* $(,)? )) => {{
        let daqmx: &$crate::driver::Daqmx = $daqmx;
        match daqmx.fns().$func {
            #[allow(unused_unsafe)]
            Some(func) => {
                let code = unsafe { func($($arg),*) };
                daqmx.check(code, stringify!($func))
            }
            None => Err($crate::error::DaqmxError::MissingFunction(stringify!($func))),
        }
    }};
}

/// Like [`daqmx_call!`] but returns the raw status unchecked. Used for size
/// queries, where a positive status is a length rather than a warning.
macro_rules! daqmx_raw {
    ($daqmx:expr, $func:ident ( $($arg:expr),* $(,)? )) => {{
        let daqmx: &$crate::driver::Daqmx = $daqmx;
        match daqmx.fns().$func {
            #[allow(unused_unsafe)]
            Some(func) => Ok::<_, $crate::error::DaqmxError>(unsafe { func($($arg),*) }),
            None => Err($crate::error::DaqmxError::MissingFunction(stringify!($func))),
        }
    }};
}

pub(crate) use daqmx_call;
pub(crate) use daqmx_raw;

/// Cheaply cloneable handle to the driver. Tasks keep a clone, so the
/// runtime stays loaded while any task is alive.
#[derive(Clone)]
pub struct Daqmx {
    inner: Arc<Inner>,
}

struct Inner {
    library: Library,
    config: DriverConfig,
    error_log_lock: Mutex<()>,
}

impl Daqmx {
    /// Loads the runtime from `config.library_path`, or from the default
    /// locations when unset.
    pub fn load(config: DriverConfig) -> Result<Self> {
        let library = match &config.library_path {
            Some(path) => Library::open(path)?,
            None => Library::open_default()?,
        };
        let missing = library.fns().missing();
        info!(
            resolved = sys::FUNCTION_NAMES.len() - missing.len(),
            missing = missing.len(),
            "Loaded NI-DAQmx runtime"
        );
        if !missing.is_empty() {
            debug!(?missing, "Functions not exported by this runtime");
        }
        Ok(Self::with_library(library, config))
    }

    pub fn with_library(library: Library, config: DriverConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                library,
                config,
                error_log_lock: Mutex::new(()),
            }),
        }
    }

    pub fn fns(&self) -> &DaqmxFns {
        self.inner.library.fns()
    }

    pub fn library(&self) -> &Library {
        &self.inner.library
    }

    pub fn config(&self) -> &DriverConfig {
        &self.inner.config
    }

    pub fn default_timeout(&self) -> Timeout {
        self.inner.config.timeout()
    }

    /// Turns a status code into a `Result`. `function` names the C function
    /// that returned it.
    pub fn check(&self, code: int32, function: &'static str) -> Result<int32> {
        match Status::classify(code) {
            Status::Success => Ok(code),
            Status::Warning(code) => {
                let message = self.error_string(code).unwrap_or_default();
                warn!(
                    function,
                    code,
                    name = sys::code_name(code).unwrap_or("unnamed"),
                    "DAQmx warning: {message}"
                );
                Ok(code)
            }
            Status::Error(code) => {
                let message = self
                    .extended_error_info()
                    .or_else(|| self.error_string(code))
                    .unwrap_or_else(|| format!("status code {code}"));
                let err = DaqmxError::driver(code, function, message);
                error!(function, code, "{err}");
                self.log_error(&err);
                Err(err)
            }
        }
    }

    /// Driver description of a status code.
    pub fn error_string(&self, code: int32) -> Option<String> {
        let func = self.fns().DAQmxGetErrorString?;
        self.unchecked_string(|buf, size| unsafe { func(code, buf, size) })
    }

    /// Detailed description of the most recent error on this thread,
    /// including the offending task and channel names.
    pub fn extended_error_info(&self) -> Option<String> {
        let func = self.fns().DAQmxGetExtendedErrorInfo?;
        self.unchecked_string(|buf, size| unsafe { func(buf, size) })
            .filter(|info| !info.is_empty())
    }

    // Never routes through `check`: it is called from `check`.
    fn unchecked_string(&self, mut call: impl FnMut(*mut c_char, uInt32) -> int32) -> Option<String> {
        let required = call(ptr::null_mut(), 0);
        let size = if required > 0 {
            required as usize
        } else {
            self.config().string_buffer_size as usize
        };
        let mut buf = vec![0u8; size.max(1)];
        if call(buf.as_mut_ptr().cast(), buf.len() as uInt32) < 0 {
            return None;
        }
        Some(buf_to_string(&buf))
    }

    /// Reads a string property using the driver's size-query convention:
    /// a call with a null buffer and size `0` returns the required size,
    /// then a second call fills a buffer of that size. Falls back to
    /// `string_buffer_size` when the size query itself fails.
    pub(crate) fn query_string(
        &self,
        function: &'static str,
        mut call: impl FnMut(*mut c_char, uInt32) -> Result<int32>,
    ) -> Result<String> {
        let required = call(ptr::null_mut(), 0)?;
        let size = match required {
            0 => return Ok(String::new()),
            n if n > 0 => n as usize,
            _ => self.config().string_buffer_size as usize,
        };
        let mut buf = vec![0u8; size];
        let code = call(buf.as_mut_ptr().cast(), size as uInt32)?;
        self.check(code, function)?;
        Ok(buf_to_string(&buf))
    }

    /// Same convention as [`Daqmx::query_string`] for `float64` arrays.
    pub(crate) fn query_f64_array(
        &self,
        function: &'static str,
        mut call: impl FnMut(*mut float64, uInt32) -> Result<int32>,
    ) -> Result<Vec<f64>> {
        let required = call(ptr::null_mut(), 0)?;
        if required <= 0 {
            self.check(required, function)?;
            return Ok(Vec::new());
        }
        let mut values = vec![0.0; required as usize];
        let code = call(values.as_mut_ptr(), values.len() as uInt32)?;
        self.check(code, function)?;
        Ok(values)
    }

    fn log_error(&self, err: &DaqmxError) {
        let Some(path) = &self.inner.config.error_log else {
            return;
        };
        let _guard = self.inner.error_log_lock.lock();
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "DAQmx Error: {err}"));
        if let Err(io_err) = written {
            warn!(path = %path.display(), "Failed to append to DAQmx error log: {io_err}");
        }
    }
}

impl std::fmt::Debug for Daqmx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Daqmx")
            .field("library", &self.inner.library)
            .field("config", &self.inner.config)
            .finish()
    }
}
