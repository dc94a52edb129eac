//! # nidaqmx_backend
//!
//! Safe Rust interface to the National Instruments DAQmx driver, built on the
//! raw function table of `nidaqmx_sys`.
//!
//! ## Overview
//!
//! - [`Daqmx`] loads the runtime and checks the status of every call:
//!   negative codes become [`DaqmxError::Driver`] with the driver's own
//!   description, positive codes are logged as warnings.
//! - [`Task`] owns a task handle and clears it on drop. Channel creation,
//!   timing, triggering, reads, writes, attributes and events are methods on
//!   [`TaskRef`], which `Task` derefs to.
//! - Reads and writes move [`ndarray`] arrays shaped `[channels, samples]`
//!   (or `[samples, channels]` for interleaved layouts).
//! - [`TaskConfig`] builds a complete task from a TOML description.
//!
//! ```no_run
//! use nidaqmx_backend::*;
//! use ndarray::Array2;
//!
//! # fn main() -> nidaqmx_backend::Result<()> {
//! let daqmx = Daqmx::load(DriverConfig::default())?;
//! let task = Task::new(&daqmx, "")?;
//! task.create_ai_voltage_chan("Dev1/ai0:1", None, TerminalConfig::Diff, -10.0, 10.0, VoltageUnits::Volts, None)?;
//! task.cfg_samp_clk_timing("", 1e3, Edge::Rising, SampleMode::Finite, 100)?;
//! task.start()?;
//! let mut data = Array2::<f64>::zeros((2, 100));
//! let read = task.read_analog_f64(Timeout::from_secs(5.0), DataLayout::GroupByChannel, &mut data)?;
//! assert_eq!(read, 100);
//! # Ok(())
//! # }
//! ```

pub mod attribute;
pub mod calibration;
pub mod channel;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod io;
pub mod physical;
pub mod scale;
pub mod stream;
pub mod switch;
pub mod system;
pub mod task;
pub mod timing;
pub mod trigger;
pub mod utils;
pub mod values;
pub mod watchdog;

pub use crate::attribute::{AttrValue, AttributeType, TaskAttr};
pub use crate::calibration::{CalDate, ExtCalSession};
pub use crate::channel::ZIndex;
pub use crate::config::{
    ChannelConfig, ChannelSummary, DriverConfig, IoKind, RefClockConfig, RunSummary, SampleClockConfig, StartTriggerConfig,
    TaskConfig,
};
pub use crate::driver::Daqmx;
pub use crate::error::{DaqmxError, Result, Status};
pub use crate::events::AnalogStream;
pub use crate::physical::{expand_channel_list, join_channel_list, terminal, ChannelKind, PhysicalChannel};
pub use crate::stream::StreamCounter;
pub use crate::system::{DeviceInfo, DriverVersion};
pub use crate::task::{Task, TaskRef};
pub use crate::values::*;
pub use crate::watchdog::WatchdogTask;

pub use nidaqmx_sys as sys;
