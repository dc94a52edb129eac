//! Error type shared by every call into the driver.
//!
//! The driver reports status through an `int32` return value: negative codes
//! are errors, positive codes are warnings and zero is success. Errors become
//! [`DaqmxError::Driver`]; warnings are logged and the call still succeeds.

use std::ffi::NulError;

use nidaqmx_sys::{code_name, int32, libloading};
use thiserror::Error;

/// Result type alias for DAQmx operations.
pub type Result<T> = std::result::Result<T, DaqmxError>;

#[derive(Error, Debug)]
pub enum DaqmxError {
    /// The driver returned a negative status code.
    #[error("DAQmx error {code}{} in {function}: {message}", name_suffix(.name))]
    Driver {
        code: int32,
        name: Option<&'static str>,
        function: &'static str,
        message: String,
    },

    /// The loaded runtime does not export the function.
    #[error("{0} is not exported by the loaded NI-DAQmx runtime")]
    MissingFunction(&'static str),

    #[error("Failed to load the NI-DAQmx runtime: {0}")]
    LibraryLoad(#[from] libloading::Error),

    /// A string argument contained an interior NUL byte.
    #[error("Invalid string argument: {0}")]
    InvalidString(#[from] NulError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A sample buffer does not match the task's channel count or layout.
    #[error("Buffer shape {actual:?} does not match the task, expected {expected}")]
    BufferShape { expected: String, actual: Vec<usize> },

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A user callback panicked while the driver was calling it.
    #[error("Callback panicked: {0}")]
    CallbackPanicked(String),
}

fn name_suffix(name: &Option<&'static str>) -> String {
    name.map(|n| format!(" ({n})")).unwrap_or_default()
}

impl DaqmxError {
    pub fn driver(code: int32, function: &'static str, message: impl Into<String>) -> Self {
        DaqmxError::Driver {
            code,
            name: code_name(code),
            function,
            message: message.into(),
        }
    }

    /// Driver status code, if this error came from the driver.
    pub fn code(&self) -> Option<int32> {
        match self {
            DaqmxError::Driver { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether a read, write or wait ran out of time before the data or the task was ready.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self.code(),
            Some(nidaqmx_sys::DAQmxErrorSamplesNotYetAvailable)
                | Some(nidaqmx_sys::DAQmxErrorSamplesCanNotYetBeWritten)
                | Some(nidaqmx_sys::DAQmxErrorWaitUntilDoneDoesNotIndicateDone)
                | Some(nidaqmx_sys::DAQmxErrorOperationTimedOut)
        )
    }

    /// Whether a continuous task fell behind and lost samples or stopped regenerating.
    pub fn is_overrun(&self) -> bool {
        matches!(
            self.code(),
            Some(nidaqmx_sys::DAQmxErrorSamplesNoLongerAvailable)
                | Some(nidaqmx_sys::DAQmxErrorGenStoppedToPreventRegenOfOldSamples)
                | Some(nidaqmx_sys::DAQmxErrorADCOverrun)
                | Some(nidaqmx_sys::DAQmxErrorDACUnderflow)
        )
    }

    pub fn is_missing_function(&self) -> bool {
        matches!(self, DaqmxError::MissingFunction(_))
    }
}

/// Classification of a raw status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning(int32),
    Error(int32),
}

impl Status {
    pub fn classify(code: int32) -> Self {
        match code {
            0 => Status::Success,
            c if c > 0 => Status::Warning(c),
            c => Status::Error(c),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_by_sign() {
        assert_eq!(Status::classify(0), Status::Success);
        assert_eq!(Status::classify(200026), Status::Warning(200026));
        assert_eq!(Status::classify(-200279), Status::Error(-200279));
        assert!(Status::classify(-1).is_error());
        assert!(!Status::classify(1).is_error());
    }

    #[test]
    fn driver_error_carries_name() {
        let err = DaqmxError::driver(-200279, "DAQmxReadAnalogF64", "samples lost");
        assert_eq!(err.code(), Some(-200279));
        assert!(err.is_overrun());
        assert!(!err.is_timeout());
        let text = err.to_string();
        assert!(text.contains("DAQmxErrorSamplesNoLongerAvailable"), "{text}");
        assert!(text.contains("DAQmxReadAnalogF64"), "{text}");
    }

    #[test]
    fn unnamed_code_formats_without_name() {
        let err = DaqmxError::driver(-123456, "DAQmxStartTask", "odd");
        assert_eq!(err.to_string(), "DAQmx error -123456 in DAQmxStartTask: odd");
    }

    #[test]
    fn timeout_codes() {
        assert!(DaqmxError::driver(-200284, "DAQmxReadAnalogF64", "").is_timeout());
        assert!(DaqmxError::driver(-200560, "DAQmxWaitUntilTaskDone", "").is_timeout());
        assert!(DaqmxError::driver(-200474, "DAQmxWaitForValidTimestamp", "").is_timeout());
        assert!(DaqmxError::driver(-200292, "DAQmxWriteAnalogF64", "").is_timeout());
        assert!(!DaqmxError::driver(-200278, "DAQmxReadAnalogF64", "").is_timeout());
        assert!(!DaqmxError::MissingFunction("DAQmxStartTask").is_timeout());
        assert!(DaqmxError::MissingFunction("DAQmxStartTask").is_missing_function());
    }
}
