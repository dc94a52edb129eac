//! # nidaqmx_sys
//!
//! Raw transcription of `NIDAQmx.h`, the C interface of the National
//! Instruments DAQmx driver.
//!
//! - [`types`]: the header's scalar typedefs, task and calibration handles,
//!   and the event callback signatures.
//! - [`attributes`]: attribute identifiers (`DAQmx_<Group>_<Name>`).
//! - [`values`]: value sets (`DAQmx_Val_*`).
//! - [`errors`]: named error and warning codes and [`code_name`].
//! - [`functions`]: [`DaqmxFns`], the table of every C entry point.
//! - [`library`]: [`Library`], which loads the runtime (`nicaiu` on Windows,
//!   `libnidaqmx` on Linux) and resolves the table.
//!
//! Nothing here is safe to call directly. Every function returns an `int32`
//! status: negative values are errors, positive values are warnings and
//! zero is success. The `nidaqmx_backend` crate wraps the table in a safe API.
//!
//! The runtime is loaded at run time rather than linked, so binaries build
//! and test on machines without the driver installed.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

pub mod attributes;
pub mod errors;
pub mod functions;
pub mod library;
pub mod types;
pub mod values;

pub use attributes::*;
pub use errors::*;
pub use functions::{DaqmxFns, FUNCTION_NAMES};
pub use library::{Library, DEFAULT_LIBRARY_NAMES, LIBRARY_ENV};
pub use types::*;
pub use values::*;

pub use libloading;
