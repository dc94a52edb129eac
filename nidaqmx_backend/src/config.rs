//! Driver settings and declarative task files, both read from TOML.
//!
//! A task file describes the channels, sample clock, start trigger and
//! buffers of one task:
//!
//! ```toml
//! name = "scan"
//! input_buffer = 10000
//!
//! [[channel]]
//! type = "ai_voltage"
//! physical_channel = "Dev1/ai0:3"
//! terminal_config = "rse"
//! min = -5.0
//! max = 5.0
//!
//! [timing]
//! rate = 1000.0
//! sample_mode = "finite"
//! samples_per_chan = 1000
//!
//! [start_trigger]
//! source = "/Dev1/PFI0"
//! edge = "rising"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::driver::Daqmx;
use crate::error::{DaqmxError, Result};
use crate::physical::expand_channel_list;
use crate::task::Task;
use crate::values::{
    CountDirection, DataLayout, Edge, FrequencyUnits, Level, LineGrouping, RegenMode, SampleMode, TerminalConfig,
    Timeout, VoltageUnits,
};

/// Settings for loading and talking to the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Runtime to load. Unset means `$NIDAQMX_LIBRARY`, then the platform's install name.
    pub library_path: Option<PathBuf>,
    /// File every driver error is appended to, one `DAQmx Error: ...` line each.
    pub error_log: Option<PathBuf>,
    /// Seconds; negative waits forever.
    pub default_timeout: f64,
    /// Buffer size for string queries when the driver cannot report one.
    pub string_buffer_size: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            library_path: None,
            error_log: None,
            default_timeout: 10.0,
            string_buffer_size: 2048,
        }
    }
}

impl DriverConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn timeout(&self) -> Timeout {
        Timeout::from_secs(self.default_timeout)
    }
}

/// One channel of a [`TaskConfig`], tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelConfig {
    AiVoltage {
        physical_channel: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default = "default_terminal_config")]
        terminal_config: TerminalConfig,
        #[serde(default = "default_min_voltage")]
        min: f64,
        #[serde(default = "default_max_voltage")]
        max: f64,
    },
    AoVoltage {
        physical_channel: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default = "default_min_voltage")]
        min: f64,
        #[serde(default = "default_max_voltage")]
        max: f64,
    },
    Di {
        lines: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default = "default_line_grouping")]
        grouping: LineGrouping,
    },
    Do {
        lines: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default = "default_line_grouping")]
        grouping: LineGrouping,
    },
    CiCountEdges {
        counter: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default = "default_edge")]
        edge: Edge,
        #[serde(default)]
        initial_count: u32,
        #[serde(default = "default_count_direction")]
        direction: CountDirection,
    },
    CoPulseFreq {
        counter: String,
        #[serde(default)]
        name: Option<String>,
        freq: f64,
        #[serde(default = "default_duty_cycle")]
        duty_cycle: f64,
        #[serde(default = "default_idle_state")]
        idle_state: Level,
        #[serde(default)]
        initial_delay: f64,
    },
}

/// Signal type of a channel. A driver task holds channels of one type and
/// one direction only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IoKind {
    Analog,
    Digital,
    Counter,
}

/// Statistics of one channel's samples from [`TaskConfig::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelSummary {
    pub name: String,
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

impl ChannelSummary {
    fn of(name: &str, samples: ArrayView1<f64>) -> Self {
        Self {
            name: name.to_string(),
            min: samples.fold(f64::INFINITY, |a, &b| a.min(b)),
            mean: samples.mean().unwrap_or(f64::NAN),
            max: samples.fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
        }
    }
}

/// Outcome of [`TaskConfig::run`]. Output tasks read nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Samples per channel read.
    pub read: usize,
    pub channels: Vec<ChannelSummary>,
}

fn default_terminal_config() -> TerminalConfig {
    TerminalConfig::Default
}

fn default_min_voltage() -> f64 {
    -10.0
}

fn default_max_voltage() -> f64 {
    10.0
}

fn default_line_grouping() -> LineGrouping {
    LineGrouping::ChanForAllLines
}

fn default_edge() -> Edge {
    Edge::Rising
}

fn default_count_direction() -> CountDirection {
    CountDirection::Up
}

fn default_duty_cycle() -> f64 {
    0.5
}

fn default_idle_state() -> Level {
    Level::Low
}

fn default_sample_mode() -> SampleMode {
    SampleMode::Finite
}

impl ChannelConfig {
    /// Physical channel, line or counter list the channel is created on.
    pub fn physical(&self) -> &str {
        match self {
            ChannelConfig::AiVoltage { physical_channel, .. } | ChannelConfig::AoVoltage { physical_channel, .. } => {
                physical_channel
            }
            ChannelConfig::Di { lines, .. } | ChannelConfig::Do { lines, .. } => lines,
            ChannelConfig::CiCountEdges { counter, .. } | ChannelConfig::CoPulseFreq { counter, .. } => counter,
        }
    }

    pub fn io_kind(&self) -> IoKind {
        match self {
            ChannelConfig::AiVoltage { .. } | ChannelConfig::AoVoltage { .. } => IoKind::Analog,
            ChannelConfig::Di { .. } | ChannelConfig::Do { .. } => IoKind::Digital,
            ChannelConfig::CiCountEdges { .. } | ChannelConfig::CoPulseFreq { .. } => IoKind::Counter,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(
            self,
            ChannelConfig::AiVoltage { .. } | ChannelConfig::Di { .. } | ChannelConfig::CiCountEdges { .. }
        )
    }

    fn validate(&self) -> Result<()> {
        let physical = expand_channel_list(self.physical())?;
        if physical.is_empty() {
            return Err(DaqmxError::InvalidArgument("channel has no physical channels".into()));
        }
        match self {
            ChannelConfig::AiVoltage { min, max, .. } | ChannelConfig::AoVoltage { min, max, .. } if min >= max => {
                Err(DaqmxError::InvalidArgument(format!(
                    "{}: min ({min}) must be below max ({max})",
                    self.physical()
                )))
            }
            ChannelConfig::CoPulseFreq { freq, duty_cycle, .. } if *freq <= 0.0 || *duty_cycle <= 0.0 || *duty_cycle >= 1.0 => {
                Err(DaqmxError::InvalidArgument(format!(
                    "{}: pulse needs freq > 0 and 0 < duty_cycle < 1, got {freq} Hz at {duty_cycle}",
                    self.physical()
                )))
            }
            _ => Ok(()),
        }
    }

    fn create(&self, task: &Task) -> Result<()> {
        match self {
            ChannelConfig::AiVoltage {
                physical_channel,
                name,
                terminal_config,
                min,
                max,
            } => task.create_ai_voltage_chan(
                physical_channel,
                name.as_deref(),
                *terminal_config,
                *min,
                *max,
                VoltageUnits::Volts,
                None,
            ),
            ChannelConfig::AoVoltage {
                physical_channel,
                name,
                min,
                max,
            } => task.create_ao_voltage_chan(physical_channel, name.as_deref(), *min, *max, VoltageUnits::Volts, None),
            ChannelConfig::Di { lines, name, grouping } => task.create_di_chan(lines, name.as_deref(), *grouping),
            ChannelConfig::Do { lines, name, grouping } => task.create_do_chan(lines, name.as_deref(), *grouping),
            ChannelConfig::CiCountEdges {
                counter,
                name,
                edge,
                initial_count,
                direction,
            } => task.create_ci_count_edges_chan(counter, name.as_deref(), *edge, *initial_count, *direction),
            ChannelConfig::CoPulseFreq {
                counter,
                name,
                freq,
                duty_cycle,
                idle_state,
                initial_delay,
            } => task.create_co_pulse_chan_freq(
                counter,
                name.as_deref(),
                FrequencyUnits::Hz,
                *idle_state,
                *initial_delay,
                *freq,
                *duty_cycle,
            ),
        }
    }
}

/// Sample clock of a [`TaskConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleClockConfig {
    /// Clock terminal; empty uses the device's onboard clock.
    #[serde(default)]
    pub source: String,
    pub rate: f64,
    #[serde(default = "default_edge")]
    pub active_edge: Edge,
    #[serde(default = "default_sample_mode")]
    pub sample_mode: SampleMode,
    /// Samples per channel to acquire or generate, or the buffer size hint
    /// for continuous tasks.
    #[serde(default)]
    pub samples_per_chan: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartTriggerConfig {
    pub source: String,
    #[serde(default = "default_edge")]
    pub edge: Edge,
}

/// External reference clock to phase-lock the device timebase to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefClockConfig {
    pub source: String,
    pub rate: f64,
}

/// Declarative description of a task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "channel")]
    pub channels: Vec<ChannelConfig>,
    #[serde(default)]
    pub timing: Option<SampleClockConfig>,
    #[serde(default)]
    pub start_trigger: Option<StartTriggerConfig>,
    #[serde(default)]
    pub ref_clock: Option<RefClockConfig>,
    #[serde(default)]
    pub input_buffer: Option<u32>,
    #[serde(default)]
    pub output_buffer: Option<u32>,
    #[serde(default)]
    pub regen_mode: Option<RegenMode>,
}

impl TaskConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Checks what can be checked without the driver: channel lists parse,
    /// ranges are ordered, the clock rate is positive and finite tasks
    /// have a sample count.
    pub fn validate(&self) -> Result<()> {
        if self.channels.is_empty() {
            return Err(DaqmxError::InvalidArgument(format!(
                "task '{}' has no channels",
                self.name
            )));
        }
        for channel in &self.channels {
            channel.validate()?;
        }
        let first = &self.channels[0];
        if let Some(other) = self
            .channels
            .iter()
            .find(|c| c.io_kind() != first.io_kind() || c.is_input() != first.is_input())
        {
            return Err(DaqmxError::InvalidArgument(format!(
                "task '{}' mixes {} and {}; a task holds one channel type",
                self.name,
                first.physical(),
                other.physical()
            )));
        }
        if let Some(timing) = &self.timing {
            if timing.rate <= 0.0 || !timing.rate.is_finite() {
                return Err(DaqmxError::InvalidArgument(format!(
                    "sample clock rate must be positive, got {}",
                    timing.rate
                )));
            }
            if timing.sample_mode == SampleMode::Finite && timing.samples_per_chan == 0 {
                return Err(DaqmxError::InvalidArgument(
                    "finite timing needs samples_per_chan > 0".into(),
                ));
            }
        }
        if let Some(ref_clock) = &self.ref_clock {
            if ref_clock.rate <= 0.0 {
                return Err(DaqmxError::InvalidArgument(format!(
                    "reference clock rate must be positive, got {}",
                    ref_clock.rate
                )));
            }
        }
        Ok(())
    }

    /// Whether any channel reads data.
    pub fn has_inputs(&self) -> bool {
        self.channels.iter().any(ChannelConfig::is_input)
    }

    /// Type of the task's input channels, `None` for output tasks.
    pub fn input_kind(&self) -> Option<IoKind> {
        self.channels.iter().find(|c| c.is_input()).map(ChannelConfig::io_kind)
    }

    /// Builds the task and runs it once.
    ///
    /// Output tasks need finite timing and run until generation finishes.
    /// Input tasks read `samples` per channel, defaulting to the timing's
    /// sample count (1000 for continuous tasks, 1 for software-timed ones),
    /// with the read that matches their channel type.
    pub fn run(&self, daqmx: &Daqmx, samples: Option<usize>) -> Result<RunSummary> {
        let task = self.build(daqmx)?;
        let Some(kind) = self.input_kind() else {
            let finite = self.timing.as_ref().is_some_and(|t| t.sample_mode == SampleMode::Finite);
            if !finite {
                return Err(DaqmxError::InvalidArgument(format!(
                    "output task '{}' needs finite timing to run to completion",
                    self.name
                )));
            }
            task.start()?;
            task.wait_until_done(Timeout::FOREVER)?;
            task.stop()?;
            info!(task = %self.name, "Generation finished");
            return Ok(RunSummary::default());
        };

        let samples = samples.filter(|&n| n > 0).unwrap_or_else(|| match &self.timing {
            Some(timing) if timing.samples_per_chan > 0 => timing.samples_per_chan as usize,
            Some(_) => 1000,
            None => 1,
        });
        let timeout = daqmx.default_timeout();
        let channels = task.read_channels()?;
        task.start()?;
        let (read, data) = match kind {
            IoKind::Analog => {
                let mut data = Array2::<f64>::zeros((channels.len(), samples));
                let read = task.read_analog_f64(timeout, DataLayout::GroupByChannel, &mut data)?;
                (read, data)
            }
            IoKind::Digital => {
                let mut data = Array2::<u32>::zeros((channels.len(), samples));
                let read = task.read_digital_u32(timeout, DataLayout::GroupByChannel, &mut data)?;
                (read, data.mapv(f64::from))
            }
            IoKind::Counter => {
                let mut data = Array1::<f64>::zeros(samples);
                let read = task.read_counter_f64(timeout, &mut data)?;
                (read, data.insert_axis(Axis(0)))
            }
        };
        task.stop()?;
        info!(task = %self.name, ?kind, read, "Acquisition finished");

        let channels = channels
            .iter()
            .zip(data.axis_iter(Axis(0)))
            .map(|(name, row)| ChannelSummary::of(name, row.slice(ndarray::s![..read])))
            .collect();
        Ok(RunSummary { read, channels })
    }

    /// Creates the task and applies channels, timing, trigger, reference
    /// clock and buffers, in that order.
    pub fn build(&self, daqmx: &Daqmx) -> Result<Task> {
        self.validate()?;
        let task = Task::new(daqmx, &self.name)?;
        for channel in &self.channels {
            channel.create(&task)?;
        }
        if let Some(timing) = &self.timing {
            task.cfg_samp_clk_timing(
                &timing.source,
                timing.rate,
                timing.active_edge,
                timing.sample_mode,
                timing.samples_per_chan,
            )?;
        }
        if let Some(trigger) = &self.start_trigger {
            task.cfg_dig_edge_start_trig(&trigger.source, trigger.edge)?;
        }
        if let Some(ref_clock) = &self.ref_clock {
            task.set_ref_clk(&ref_clock.source, ref_clock.rate)?;
        }
        if let Some(size) = self.input_buffer {
            task.cfg_input_buffer(size)?;
        }
        if let Some(size) = self.output_buffer {
            task.cfg_output_buffer(size)?;
        }
        if let Some(mode) = self.regen_mode {
            task.set_regen_mode(mode)?;
        }
        debug!(task = %self.name, channels = self.channels.len(), "Built task from config");
        Ok(task)
    }
}
