//! In-process stand-in for the NI-DAQmx runtime.
//!
//! Each test thread gets its own [`FakeDriver`] state. Handles are task ids
//! cast to pointers. Callbacks registered on a task fire from `StartTask`
//! (every-N-samples and signal events) and `WaitUntilTaskDone` (done), after
//! the state borrow is released, because they call back into the driver.
//!
//! The variadic attribute functions are stood in for by fixed-arity fakes in
//! [`variadic`], which only match the caller's ABI where variadic arguments
//! travel like fixed ones.
#![allow(dead_code, non_snake_case)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CStr;
use std::ptr;

use libc::{c_char, c_void};
use nidaqmx_backend::sys::{
    self, bool32, float64, int32, uInt32, uInt64, uInt8, CalHandle, DAQmxDoneEventCallbackPtr,
    DAQmxEveryNSamplesEventCallbackPtr, DAQmxSignalEventCallbackPtr, DaqmxFns, Library, TaskHandle,
};
use nidaqmx_backend::{expand_channel_list, Daqmx, DriverConfig};

pub struct FakeDevice {
    pub name: String,
    pub product_type: String,
    pub serial: u32,
    pub simulated: bool,
    pub ai: Vec<String>,
    pub ao: Vec<String>,
    pub di: Vec<String>,
    pub do_: Vec<String>,
    pub ci: Vec<String>,
    pub co: Vec<String>,
}

impl FakeDevice {
    pub fn simulated_6363(name: &str) -> Self {
        let expand = |chans: &str| expand_channel_list(&format!("{name}/{chans}")).unwrap();
        Self {
            name: name.to_string(),
            product_type: "PCIe-6363".into(),
            serial: 0x1A2B3C,
            simulated: true,
            ai: expand("ai0:3"),
            ao: expand("ao0:1"),
            di: expand("port0/line0:7"),
            do_: expand("port0/line0:7"),
            ci: expand("ctr0:1"),
            co: expand("ctr0:1"),
        }
    }
}

#[derive(Default)]
pub struct FakeTask {
    pub name: String,
    pub ai: Vec<String>,
    pub ao: Vec<String>,
    /// Digital channels with the number of lines each spans.
    pub di: Vec<(String, u32)>,
    pub do_: Vec<(String, u32)>,
    pub ci: Vec<String>,
    pub co: Vec<String>,
    pub running: bool,
    pub starts: usize,
    pub stops: usize,
    pub rate: f64,
    pub sample_mode: int32,
    pub samples_per_chan: u64,
    pub input_buffer: Option<u32>,
    pub output_buffer: Option<u32>,
    pub regen_mode: Option<int32>,
    pub start_trigger: Option<String>,
    /// Written samples per AO channel, in write order.
    pub written: Vec<Vec<f64>>,
    /// Samples per channel of each write call.
    pub writes: Vec<usize>,
    pub read_pos: usize,
    /// `DAQmx_Write_RawDataWidth`, in bytes.
    pub raw_width: u32,
    /// Data of every digital, line, counter and raw write, as passed.
    pub digital_writes: Vec<u32>,
    pub line_writes: Vec<u8>,
    pub ctr_writes: Vec<(f64, f64)>,
    pub raw_writes: Vec<u8>,
    /// Analog and pattern triggers, e.g. `anlg_edge start APFI0 10171 1.5`.
    pub triggers: Vec<String>,
    pub exports: Vec<(int32, String)>,
    pub chan_attrs: HashMap<(String, int32), f64>,
    every_n: Option<(u32, DAQmxEveryNSamplesEventCallbackPtr, *mut c_void)>,
    done: Option<(DAQmxDoneEventCallbackPtr, *mut c_void)>,
    signals: Vec<(int32, DAQmxSignalEventCallbackPtr, *mut c_void)>,
}

impl FakeTask {
    fn read_chans(&self) -> Vec<String> {
        let di = self.di.iter().map(|(name, _)| name);
        self.ai.iter().chain(di).chain(&self.ci).cloned().collect()
    }

    fn write_chans(&self) -> Vec<String> {
        let do_ = self.do_.iter().map(|(name, _)| name);
        self.ao.iter().chain(do_).chain(&self.co).cloned().collect()
    }

    fn channels(&self) -> Vec<String> {
        let mut chans = self.read_chans();
        chans.extend(self.write_chans());
        chans
    }

    fn lines(&self, channel: &str) -> Option<u32> {
        self.di.iter().chain(&self.do_).find(|(name, _)| name == channel).map(|&(_, n)| n)
    }

    fn output_lines(&self) -> usize {
        self.do_.iter().map(|&(_, n)| n as usize).sum()
    }
}

#[derive(Default)]
pub struct FakeDriver {
    pub tasks: HashMap<usize, FakeTask>,
    next_id: usize,
    /// Names of cleared tasks, in clear order.
    pub cleared: Vec<String>,
    pub devices: Vec<FakeDevice>,
    /// Status `StartTask` returns instead of starting.
    pub start_status: int32,
    /// Status `ReadAnalogF64` returns instead of reading.
    pub read_status: int32,
    /// Status handed to done callbacks.
    pub done_status: int32,
    /// How many every-N-samples events `StartTask` raises.
    pub every_n_events: usize,
    /// Open external calibration sessions by handle, with their device.
    pub cal_sessions: HashMap<CalHandle, String>,
    /// `(handle, action)` of every `CloseExtCal`, in order.
    pub cal_closes: Vec<(CalHandle, int32)>,
    next_cal: CalHandle,
    /// Custom scales with their forward polynomial, `[intercept, slope, ...]`.
    pub scales: HashMap<String, Vec<f64>>,
    /// Relay name to switch count and position.
    pub relays: HashMap<String, (u32, int32)>,
    last_error: String,
}

impl FakeDriver {
    fn fail(&mut self, code: int32, message: impl Into<String>) -> int32 {
        self.last_error = message.into();
        code
    }
}

thread_local! {
    static DRIVER: RefCell<FakeDriver> = RefCell::new(FakeDriver::default());
}

pub fn with_driver<R>(f: impl FnOnce(&mut FakeDriver) -> R) -> R {
    DRIVER.with(|driver| f(&mut driver.borrow_mut()))
}

/// The single task of the fake driver, for tests that create one.
pub fn with_task<R>(handle: TaskHandle, f: impl FnOnce(&mut FakeTask) -> R) -> R {
    with_driver(|d| f(d.tasks.get_mut(&(handle as usize)).expect("live fake task")))
}

unsafe fn cstr(s: *const c_char) -> String {
    if s.is_null() {
        return String::new();
    }
    CStr::from_ptr(s).to_string_lossy().into_owned()
}

/// Size query with `size == 0`, otherwise copy as much as fits.
unsafe fn write_str(text: &str, buf: *mut c_char, size: uInt32) -> int32 {
    let required = text.len() + 1;
    if size == 0 || buf.is_null() {
        return required as int32;
    }
    let n = text.len().min(size as usize - 1);
    ptr::copy_nonoverlapping(text.as_ptr(), buf.cast::<u8>(), n);
    *buf.add(n) = 0;
    if n < text.len() {
        sys::DAQmxWarningCAPIStringTruncatedToFitBuffer
    } else {
        0
    }
}

fn task_op(handle: TaskHandle, f: impl FnOnce(&mut FakeTask) -> int32) -> int32 {
    with_driver(|d| match d.tasks.get_mut(&(handle as usize)) {
        Some(task) => f(task),
        None => d.fail(sys::DAQmxErrorInvalidTask, format!("Task handle {handle:?} is invalid.")),
    })
}

fn device_op(device: *const c_char, f: impl FnOnce(&FakeDevice) -> int32) -> int32 {
    let name = unsafe { cstr(device) };
    with_driver(|d| match d.devices.iter().find(|dev| dev.name == name) {
        Some(dev) => f(dev),
        None => d.fail(sys::DAQmxErrorInvalidDeviceID, format!("Device Identifier: {name}")),
    })
}

// Task lifecycle

unsafe extern "system" fn create_task(name: *const c_char, handle: *mut TaskHandle) -> int32 {
    let name = cstr(name);
    with_driver(|d| {
        if !name.is_empty() && d.tasks.values().any(|t| t.name == name) {
            return d.fail(sys::DAQmxErrorDuplicateTask, format!("Task Name: {name}"));
        }
        d.next_id += 1;
        let id = d.next_id;
        let name = if name.is_empty() {
            format!("_unnamedTask<{}>", id - 1)
        } else {
            name
        };
        d.tasks.insert(
            id,
            FakeTask {
                name,
                raw_width: 2,
                ..Default::default()
            },
        );
        *handle = id as TaskHandle;
        0
    })
}

unsafe extern "system" fn clear_task(handle: TaskHandle) -> int32 {
    with_driver(|d| match d.tasks.remove(&(handle as usize)) {
        Some(task) => {
            d.cleared.push(task.name);
            0
        }
        None => d.fail(sys::DAQmxErrorInvalidTask, "clear of an unknown task"),
    })
}

unsafe extern "system" fn start_task(handle: TaskHandle) -> int32 {
    let (status, every_n, events, signals) = with_driver(|d| {
        if d.start_status < 0 {
            let status = d.start_status;
            return (d.fail(status, "Start failed"), None, 0, Vec::new());
        }
        let status = d.start_status;
        let events = d.every_n_events;
        match d.tasks.get_mut(&(handle as usize)) {
            Some(task) => {
                task.running = true;
                task.starts += 1;
                (status, task.every_n, events, task.signals.clone())
            }
            None => (d.fail(sys::DAQmxErrorInvalidTask, "start of an unknown task"), None, 0, Vec::new()),
        }
    });
    if let Some((n, Some(callback), data)) = every_n {
        for _ in 0..events {
            callback(handle, sys::DAQmx_Val_Acquired_Into_Buffer, n, data);
        }
    }
    for (signal, callback, data) in signals {
        if let Some(callback) = callback {
            callback(handle, signal, data);
        }
    }
    status
}

unsafe extern "system" fn stop_task(handle: TaskHandle) -> int32 {
    task_op(handle, |task| {
        task.running = false;
        task.stops += 1;
        0
    })
}

unsafe extern "system" fn is_task_done(handle: TaskHandle, done: *mut bool32) -> int32 {
    task_op(handle, |task| {
        *done = (!task.running) as bool32;
        0
    })
}

unsafe extern "system" fn wait_until_task_done(handle: TaskHandle, _timeout: float64) -> int32 {
    let mut done = None;
    let status = with_driver(|d| {
        let done_status = d.done_status;
        match d.tasks.get_mut(&(handle as usize)) {
            Some(task) => {
                task.running = false;
                done = task.done.map(|(callback, data)| (callback, data, done_status));
                0
            }
            None => d.fail(sys::DAQmxErrorInvalidTask, "wait on an unknown task"),
        }
    });
    if let Some((Some(callback), data, done_status)) = done {
        callback(handle, done_status, data);
    }
    status
}

// Channels

unsafe extern "system" fn create_ai_voltage_chan(
    handle: TaskHandle,
    physical: *const c_char,
    name: *const c_char,
    _terminal_config: int32,
    min: float64,
    max: float64,
    _units: int32,
    _scale: *const c_char,
) -> int32 {
    let physical = cstr(physical);
    let name = cstr(name);
    if min >= max {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, "Minimum must be below maximum"));
    }
    let Ok(mut chans) = expand_channel_list(&physical) else {
        return with_driver(|d| d.fail(sys::DAQmxErrorPhysicalChanDoesNotExist, physical.clone()));
    };
    if !name.is_empty() && chans.len() == 1 {
        chans = vec![name];
    }
    task_op(handle, |task| {
        task.ai.extend(chans);
        0
    })
}

unsafe extern "system" fn create_ao_voltage_chan(
    handle: TaskHandle,
    physical: *const c_char,
    _name: *const c_char,
    _min: float64,
    _max: float64,
    _units: int32,
    _scale: *const c_char,
) -> int32 {
    let physical = cstr(physical);
    let Ok(chans) = expand_channel_list(&physical) else {
        return with_driver(|d| d.fail(sys::DAQmxErrorPhysicalChanDoesNotExist, physical.clone()));
    };
    task_op(handle, |task| {
        task.written.extend(chans.iter().map(|_| Vec::new()));
        task.ao.extend(chans);
        0
    })
}

unsafe fn create_lines(
    handle: TaskHandle,
    lines: *const c_char,
    name: *const c_char,
    grouping: int32,
    output: bool,
) -> int32 {
    let lines = cstr(lines);
    let name = cstr(name);
    let expanded = match expand_channel_list(&lines) {
        Ok(expanded) if !expanded.is_empty() => expanded,
        _ => return with_driver(|d| d.fail(sys::DAQmxErrorPhysicalChanDoesNotExist, lines.clone())),
    };
    let chans = if grouping == sys::DAQmx_Val_ChanForAllLines {
        let name = if name.is_empty() { lines } else { name };
        vec![(name, expanded.len() as u32)]
    } else {
        expanded.into_iter().map(|line| (line, 1)).collect()
    };
    task_op(handle, |task| {
        if output {
            task.do_.extend(chans);
        } else {
            task.di.extend(chans);
        }
        0
    })
}

unsafe extern "system" fn create_di_chan(
    handle: TaskHandle,
    lines: *const c_char,
    name: *const c_char,
    grouping: int32,
) -> int32 {
    create_lines(handle, lines, name, grouping, false)
}

unsafe extern "system" fn create_do_chan(
    handle: TaskHandle,
    lines: *const c_char,
    name: *const c_char,
    grouping: int32,
) -> int32 {
    create_lines(handle, lines, name, grouping, true)
}

unsafe fn counter_name(counter: *const c_char, name: *const c_char) -> String {
    let name = cstr(name);
    if name.is_empty() {
        cstr(counter)
    } else {
        name
    }
}

unsafe extern "system" fn create_ci_count_edges_chan(
    handle: TaskHandle,
    counter: *const c_char,
    name: *const c_char,
    _edge: int32,
    _initial_count: uInt32,
    _direction: int32,
) -> int32 {
    let name = counter_name(counter, name);
    task_op(handle, |task| {
        task.ci.push(name);
        0
    })
}

unsafe extern "system" fn create_co_pulse_chan_freq(
    handle: TaskHandle,
    counter: *const c_char,
    name: *const c_char,
    _units: int32,
    _idle_state: int32,
    _initial_delay: float64,
    freq: float64,
    duty_cycle: float64,
) -> int32 {
    let name = counter_name(counter, name);
    task_op(handle, |task| {
        task.chan_attrs.insert((name.clone(), sys::DAQmx_CO_Pulse_Freq), freq);
        task.chan_attrs.insert((name.clone(), sys::DAQmx_CO_Pulse_DutyCyc), duty_cycle);
        task.co.push(name);
        0
    })
}

unsafe extern "system" fn get_task_num_chans(handle: TaskHandle, n: *mut uInt32) -> int32 {
    task_op(handle, |task| {
        *n = task.channels().len() as uInt32;
        0
    })
}

unsafe extern "system" fn get_read_num_chans(handle: TaskHandle, n: *mut uInt32) -> int32 {
    task_op(handle, |task| {
        *n = task.read_chans().len() as uInt32;
        0
    })
}

unsafe extern "system" fn get_write_num_chans(handle: TaskHandle, n: *mut uInt32) -> int32 {
    task_op(handle, |task| {
        *n = task.write_chans().len() as uInt32;
        0
    })
}

unsafe extern "system" fn get_nth_task_channel(
    handle: TaskHandle,
    index: uInt32,
    buf: *mut c_char,
    size: int32,
) -> int32 {
    task_op(handle, |task| match task.channels().get(index as usize - 1) {
        Some(name) => write_str(name, buf, size as uInt32),
        None => sys::DAQmxErrorInvalidAttributeValue,
    })
}

unsafe extern "system" fn get_nth_task_read_channel(
    handle: TaskHandle,
    index: uInt32,
    buf: *mut c_char,
    size: int32,
) -> int32 {
    task_op(handle, |task| match task.read_chans().get(index as usize - 1) {
        Some(name) => write_str(name, buf, size as uInt32),
        None => sys::DAQmxErrorInvalidAttributeValue,
    })
}

unsafe extern "system" fn get_task_name(handle: TaskHandle, buf: *mut c_char, size: uInt32) -> int32 {
    task_op(handle, |task| write_str(&task.name, buf, size))
}

// Timing, triggering and buffers

unsafe extern "system" fn cfg_samp_clk_timing(
    handle: TaskHandle,
    _source: *const c_char,
    rate: float64,
    _edge: int32,
    mode: int32,
    samples: uInt64,
) -> int32 {
    task_op(handle, |task| {
        task.rate = rate;
        task.sample_mode = mode;
        task.samples_per_chan = samples;
        0
    })
}

unsafe extern "system" fn cfg_dig_edge_start_trig(handle: TaskHandle, source: *const c_char, _edge: int32) -> int32 {
    let source = cstr(source);
    task_op(handle, |task| {
        task.start_trigger = Some(source);
        0
    })
}

unsafe extern "system" fn cfg_anlg_edge_start_trig(
    handle: TaskHandle,
    source: *const c_char,
    slope: int32,
    level: float64,
) -> int32 {
    let source = cstr(source);
    task_op(handle, |task| {
        task.triggers.push(format!("anlg_edge start {source} {slope} {level}"));
        0
    })
}

unsafe extern "system" fn cfg_anlg_window_start_trig(
    handle: TaskHandle,
    source: *const c_char,
    when: int32,
    top: float64,
    bottom: float64,
) -> int32 {
    let source = cstr(source);
    if bottom >= top {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, "Window bottom must be below top"));
    }
    task_op(handle, |task| {
        task.triggers.push(format!("anlg_window start {source} {when} {bottom}..{top}"));
        0
    })
}

unsafe extern "system" fn cfg_dig_pattern_start_trig(
    handle: TaskHandle,
    source: *const c_char,
    pattern: *const c_char,
    when: int32,
) -> int32 {
    let source = cstr(source);
    let pattern = cstr(pattern);
    if pattern.is_empty() || !pattern.chars().all(|c| matches!(c, '0' | '1' | 'X' | 'x')) {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, format!("Pattern: {pattern}")));
    }
    task_op(handle, |task| {
        task.triggers.push(format!("dig_pattern start {source} {pattern} {when}"));
        0
    })
}

unsafe extern "system" fn export_signal(handle: TaskHandle, signal: int32, terminal: *const c_char) -> int32 {
    let terminal = cstr(terminal);
    task_op(handle, |task| {
        task.exports.push((signal, terminal));
        0
    })
}

unsafe extern "system" fn cfg_input_buffer(handle: TaskHandle, size: uInt32) -> int32 {
    task_op(handle, |task| {
        task.input_buffer = Some(size);
        0
    })
}

unsafe extern "system" fn cfg_output_buffer(handle: TaskHandle, size: uInt32) -> int32 {
    task_op(handle, |task| {
        task.output_buffer = Some(size);
        0
    })
}

unsafe extern "system" fn set_write_regen_mode(handle: TaskHandle, mode: int32) -> int32 {
    task_op(handle, |task| {
        task.regen_mode = Some(mode);
        0
    })
}

// Reads and writes. Sample `i` of channel `c` reads as `1000 * c + i`.

/// Fills `out` with the sample pattern for `chans` channels and advances
/// the task's read position.
unsafe fn fill_samples<T>(
    task: &mut FakeTask,
    chans: usize,
    samples: int32,
    fill_mode: bool32,
    out: *mut T,
    array_size: uInt32,
    read: *mut int32,
    value: impl Fn(usize) -> T,
) -> int32 {
    let n = if samples < 0 {
        array_size as usize / chans.max(1)
    } else {
        samples as usize
    };
    if n * chans > array_size as usize {
        return sys::DAQmxErrorInvalidAttributeValue;
    }
    let out = std::slice::from_raw_parts_mut(out, array_size as usize);
    for c in 0..chans {
        for i in 0..n {
            let idx = if fill_mode == sys::DAQmx_Val_GroupByChannel {
                c * n + i
            } else {
                i * chans + c
            };
            out[idx] = value(1000 * c + task.read_pos + i);
        }
    }
    task.read_pos += n;
    *read = n as int32;
    0
}

unsafe extern "system" fn read_analog_f64(
    handle: TaskHandle,
    samples: int32,
    _timeout: float64,
    fill_mode: bool32,
    out: *mut float64,
    array_size: uInt32,
    read: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    let status = with_driver(|d| d.read_status);
    if status < 0 {
        return with_driver(|d| d.fail(status, "Some or all of the samples requested have not yet been acquired."));
    }
    task_op(handle, |task| {
        let chans = task.ai.len();
        match fill_samples(task, chans, samples, fill_mode, out, array_size, read, |v| v as f64) {
            0 => status,
            code => code,
        }
    })
}

unsafe extern "system" fn read_digital_u32(
    handle: TaskHandle,
    samples: int32,
    _timeout: float64,
    fill_mode: bool32,
    out: *mut uInt32,
    array_size: uInt32,
    read: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let chans = task.di.len();
        fill_samples(task, chans, samples, fill_mode, out, array_size, read, |v| v as uInt32)
    })
}

unsafe extern "system" fn read_counter_f64(
    handle: TaskHandle,
    samples: int32,
    _timeout: float64,
    out: *mut float64,
    array_size: uInt32,
    read: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let chans = task.ci.len();
        if chans != 1 {
            return sys::DAQmxErrorInvalidAttributeValue;
        }
        fill_samples(task, 1, samples, sys::DAQmx_Val_GroupByChannel, out, array_size, read, |v| v as f64)
    })
}

unsafe extern "system" fn write_analog_f64(
    handle: TaskHandle,
    samples: int32,
    _auto_start: bool32,
    _timeout: float64,
    layout: bool32,
    data: *const float64,
    written: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let chans = task.ao.len();
        let n = samples as usize;
        if let Some(buffer) = task.output_buffer {
            if n > buffer as usize && task.regen_mode == Some(sys::DAQmx_Val_DoNotAllowRegen) {
                return sys::DAQmxErrorGenStoppedToPreventRegenOfOldSamples;
            }
        }
        let data = std::slice::from_raw_parts(data, n * chans);
        for c in 0..chans {
            for i in 0..n {
                let idx = if layout == sys::DAQmx_Val_GroupByChannel {
                    c * n + i
                } else {
                    i * chans + c
                };
                task.written[c].push(data[idx]);
            }
        }
        task.writes.push(n);
        *written = n as int32;
        0
    })
}

unsafe extern "system" fn write_digital_u32(
    handle: TaskHandle,
    samples: int32,
    _auto_start: bool32,
    _timeout: float64,
    _layout: bool32,
    data: *const uInt32,
    written: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let n = samples as usize;
        let data = std::slice::from_raw_parts(data, n * task.do_.len());
        task.digital_writes.extend_from_slice(data);
        task.writes.push(n);
        *written = samples;
        0
    })
}

unsafe extern "system" fn write_digital_lines(
    handle: TaskHandle,
    samples: int32,
    _auto_start: bool32,
    _timeout: float64,
    _layout: bool32,
    data: *const uInt8,
    written: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let n = samples as usize;
        let data = std::slice::from_raw_parts(data, n * task.output_lines());
        task.line_writes.extend_from_slice(data);
        task.writes.push(n);
        *written = samples;
        0
    })
}

unsafe extern "system" fn write_ctr_freq(
    handle: TaskHandle,
    samples: int32,
    _auto_start: bool32,
    _timeout: float64,
    _layout: bool32,
    frequency: *const float64,
    duty_cycle: *const float64,
    written: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let len = samples as usize * task.co.len();
        let frequency = std::slice::from_raw_parts(frequency, len);
        let duty_cycle = std::slice::from_raw_parts(duty_cycle, len);
        task.ctr_writes.extend(frequency.iter().copied().zip(duty_cycle.iter().copied()));
        task.writes.push(samples as usize);
        *written = samples;
        0
    })
}

unsafe extern "system" fn write_raw(
    handle: TaskHandle,
    samples: int32,
    _auto_start: bool32,
    _timeout: float64,
    data: *const c_void,
    written: *mut int32,
    _reserved: *mut bool32,
) -> int32 {
    task_op(handle, |task| {
        let len = samples as usize * task.raw_width as usize * task.write_chans().len();
        let data = std::slice::from_raw_parts(data.cast::<u8>(), len);
        task.raw_writes.extend_from_slice(data);
        task.writes.push(samples as usize);
        *written = samples;
        0
    })
}

// Events

unsafe extern "system" fn register_every_n(
    handle: TaskHandle,
    _event: int32,
    n: uInt32,
    _options: uInt32,
    callback: DAQmxEveryNSamplesEventCallbackPtr,
    data: *mut c_void,
) -> int32 {
    task_op(handle, |task| {
        task.every_n = callback.map(|_| (n, callback, data));
        0
    })
}

unsafe extern "system" fn register_done(
    handle: TaskHandle,
    _options: uInt32,
    callback: DAQmxDoneEventCallbackPtr,
    data: *mut c_void,
) -> int32 {
    task_op(handle, |task| {
        task.done = callback.map(|_| (callback, data));
        0
    })
}

unsafe extern "system" fn register_signal(
    handle: TaskHandle,
    signal: int32,
    _options: uInt32,
    callback: DAQmxSignalEventCallbackPtr,
    data: *mut c_void,
) -> int32 {
    task_op(handle, |task| {
        task.signals.retain(|&(registered, _, _)| registered != signal);
        if callback.is_some() {
            task.signals.push((signal, callback, data));
        }
        0
    })
}

// Errors

unsafe extern "system" fn get_error_string(code: int32, buf: *mut c_char, size: uInt32) -> int32 {
    let text = match sys::code_name(code) {
        Some(name) => format!("{name} ({code})"),
        None => format!("Status code {code}"),
    };
    write_str(&text, buf, size)
}

unsafe extern "system" fn get_extended_error_info(buf: *mut c_char, size: uInt32) -> int32 {
    let text = with_driver(|d| d.last_error.clone());
    write_str(&text, buf, size)
}

// System and devices

unsafe extern "system" fn get_sys_dev_names(buf: *mut c_char, size: uInt32) -> int32 {
    let names = with_driver(|d| d.devices.iter().map(|dev| dev.name.clone()).collect::<Vec<_>>().join(", "));
    write_str(&names, buf, size)
}

unsafe extern "system" fn get_major_version(value: *mut uInt32) -> int32 {
    *value = 23;
    0
}

unsafe extern "system" fn get_minor_version(value: *mut uInt32) -> int32 {
    *value = 5;
    0
}

unsafe extern "system" fn get_dev_product_type(device: *const c_char, buf: *mut c_char, size: uInt32) -> int32 {
    device_op(device, |dev| write_str(&dev.product_type, buf, size))
}

unsafe extern "system" fn get_dev_serial_num(device: *const c_char, value: *mut uInt32) -> int32 {
    device_op(device, |dev| {
        *value = dev.serial;
        0
    })
}

unsafe extern "system" fn get_dev_is_simulated(device: *const c_char, value: *mut bool32) -> int32 {
    device_op(device, |dev| {
        *value = dev.simulated as bool32;
        0
    })
}

unsafe extern "system" fn get_dev_product_category(device: *const c_char, value: *mut int32) -> int32 {
    device_op(device, |_| {
        *value = sys::DAQmx_Val_XSeriesDAQ;
        0
    })
}

unsafe extern "system" fn get_dev_bus_type(device: *const c_char, value: *mut int32) -> int32 {
    device_op(device, |_| {
        *value = sys::DAQmx_Val_PCIe;
        0
    })
}

macro_rules! device_list_fn {
    ($($name:ident => $field:ident;)+) => {
        $(
            unsafe extern "system" fn $name(device: *const c_char, buf: *mut c_char, size: uInt32) -> int32 {
                device_op(device, |dev| write_str(&dev.$field.join(", "), buf, size))
            }
        )+
    };
}

device_list_fn! {
    get_dev_ai_chans => ai;
    get_dev_ao_chans => ao;
    get_dev_di_lines => di;
    get_dev_do_lines => do_;
    get_dev_ci_chans => ci;
    get_dev_co_chans => co;
}

// Switches

unsafe extern "system" fn switch_find_path(
    channel1: *const c_char,
    channel2: *const c_char,
    path: *mut c_char,
    size: uInt32,
    status: *mut int32,
) -> int32 {
    let route = format!("{}->{}", cstr(channel1), cstr(channel2));
    *status = sys::DAQmx_Val_PathStatus_Available;
    write_str(&route, path, size)
}

unsafe extern "system" fn switch_set_relays(relays: *const c_char, position: int32) -> int32 {
    let list = cstr(relays);
    let Ok(relays) = expand_channel_list(&list) else {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, list.clone()));
    };
    with_driver(|d| {
        for relay in relays {
            let entry = d.relays.entry(relay).or_insert((0, sys::DAQmx_Val_Open));
            if entry.1 != position {
                *entry = (entry.0 + 1, position);
            }
        }
        0
    })
}

unsafe extern "system" fn switch_open_relays(relays: *const c_char, _wait: bool32) -> int32 {
    switch_set_relays(relays, sys::DAQmx_Val_Open)
}

unsafe extern "system" fn switch_close_relays(relays: *const c_char, _wait: bool32) -> int32 {
    switch_set_relays(relays, sys::DAQmx_Val_Closed)
}

unsafe fn relay_query(
    relays: *const c_char,
    out: *mut uInt32,
    size: uInt32,
    read: *mut uInt32,
    field: impl Fn((u32, int32)) -> uInt32,
) -> int32 {
    let list = cstr(relays);
    let Ok(relays) = expand_channel_list(&list) else {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, list.clone()));
    };
    if relays.len() > size as usize {
        return with_driver(|d| d.fail(sys::DAQmxErrorBufferTooSmallForString, list.clone()));
    }
    let out = std::slice::from_raw_parts_mut(out, size as usize);
    with_driver(|d| {
        for (slot, relay) in out.iter_mut().zip(&relays) {
            *slot = field(d.relays.get(relay).copied().unwrap_or((0, sys::DAQmx_Val_Open)));
        }
    });
    *read = relays.len() as uInt32;
    0
}

unsafe extern "system" fn switch_get_multi_relay_count(
    relays: *const c_char,
    counts: *mut uInt32,
    size: uInt32,
    read: *mut uInt32,
) -> int32 {
    relay_query(relays, counts, size, read, |(count, _)| count)
}

unsafe extern "system" fn switch_get_multi_relay_pos(
    relays: *const c_char,
    positions: *mut uInt32,
    size: uInt32,
    read: *mut uInt32,
) -> int32 {
    relay_query(relays, positions, size, read, |(_, position)| position as uInt32)
}

// Calibration

unsafe extern "system" fn init_ext_cal(device: *const c_char, _password: *const c_char, handle: *mut CalHandle) -> int32 {
    let name = cstr(device);
    with_driver(|d| {
        if !d.devices.iter().any(|dev| dev.name == name) {
            return d.fail(sys::DAQmxErrorInvalidDeviceID, format!("Device Identifier: {name}"));
        }
        d.next_cal += 1;
        d.cal_sessions.insert(d.next_cal, name);
        *handle = d.next_cal;
        0
    })
}

unsafe extern "system" fn close_ext_cal(handle: CalHandle, action: int32) -> int32 {
    with_driver(|d| {
        if d.cal_sessions.remove(&handle).is_none() {
            return d.fail(sys::DAQmxErrorInvalidAttributeValue, format!("Calibration handle {handle}"));
        }
        d.cal_closes.push((handle, action));
        0
    })
}

// Scales

unsafe extern "system" fn create_lin_scale(
    name: *const c_char,
    slope: float64,
    y_intercept: float64,
    _pre_scaled_units: int32,
    _scaled_units: *const c_char,
) -> int32 {
    let name = cstr(name);
    with_driver(|d| {
        d.scales.insert(name, vec![y_intercept, slope]);
        0
    })
}

unsafe extern "system" fn create_polynomial_scale(
    name: *const c_char,
    forward: *const float64,
    forward_len: uInt32,
    _reverse: *const float64,
    _reverse_len: uInt32,
    _pre_scaled_units: int32,
    _scaled_units: *const c_char,
) -> int32 {
    let name = cstr(name);
    if forward_len == 0 {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, "No forward coefficients"));
    }
    let forward = std::slice::from_raw_parts(forward, forward_len as usize).to_vec();
    with_driver(|d| {
        d.scales.insert(name, forward);
        0
    })
}

/// Exact inverse of a linear forward polynomial; higher orders are zero.
unsafe extern "system" fn calculate_reverse_poly_coeff(
    forward: *const float64,
    forward_len: uInt32,
    _min_x: float64,
    _max_x: float64,
    _points: int32,
    order: int32,
    reverse: *mut float64,
) -> int32 {
    let forward = std::slice::from_raw_parts(forward, forward_len as usize);
    let [intercept, slope] = forward else {
        return with_driver(|d| d.fail(sys::DAQmxErrorInvalidAttributeValue, "Only linear forward polynomials"));
    };
    let reverse = std::slice::from_raw_parts_mut(reverse, order as usize + 1);
    reverse.fill(0.0);
    reverse[0] = -intercept / slope;
    if order >= 1 {
        reverse[1] = 1.0 / slope;
    }
    0
}

/// Fixed-arity stand-ins for the variadic attribute functions. Getters read
/// their trailing buffer size as a fourth argument, setters their value.
#[cfg(not(all(target_arch = "aarch64", any(target_vendor = "apple", target_os = "windows"))))]
pub mod variadic {
    use super::*;

    type Getter = unsafe extern "C" fn(TaskHandle, int32, *mut c_void, uInt32) -> int32;
    type ChanGetter = unsafe extern "C" fn(TaskHandle, *const c_char, int32, *mut c_void, uInt32) -> int32;
    type F64Setter = unsafe extern "C" fn(TaskHandle, int32, float64) -> int32;
    type ChanF64Setter = unsafe extern "C" fn(TaskHandle, *const c_char, int32, float64) -> int32;

    unsafe extern "C" fn get_task_attribute(handle: TaskHandle, attribute: int32, value: *mut c_void, size: uInt32) -> int32 {
        task_op(handle, |task| match attribute {
            sys::DAQmx_Task_Name => write_str(&task.name, value.cast(), size),
            sys::DAQmx_Task_NumChans => {
                *value.cast::<uInt32>() = task.channels().len() as uInt32;
                0
            }
            _ => sys::DAQmxErrorAttrNotSupported,
        })
    }

    unsafe extern "C" fn get_timing_attribute(handle: TaskHandle, attribute: int32, value: *mut c_void, _size: uInt32) -> int32 {
        task_op(handle, |task| match attribute {
            sys::DAQmx_SampClk_Rate => {
                *value.cast::<float64>() = task.rate;
                0
            }
            sys::DAQmx_SampQuant_SampPerChan => {
                *value.cast::<uInt64>() = task.samples_per_chan;
                0
            }
            _ => sys::DAQmxErrorAttrNotSupported,
        })
    }

    unsafe extern "C" fn set_timing_attribute(handle: TaskHandle, attribute: int32, value: float64) -> int32 {
        task_op(handle, |task| match attribute {
            sys::DAQmx_SampClk_Rate if value > 0.0 => {
                task.rate = value;
                0
            }
            sys::DAQmx_SampClk_Rate => sys::DAQmxErrorInvalidAttributeValue,
            _ => sys::DAQmxErrorAttrNotSupported,
        })
    }

    unsafe extern "C" fn get_write_attribute(handle: TaskHandle, attribute: int32, value: *mut c_void, _size: uInt32) -> int32 {
        task_op(handle, |task| match attribute {
            sys::DAQmx_Write_RawDataWidth => {
                *value.cast::<uInt32>() = task.raw_width;
                0
            }
            sys::DAQmx_Write_NumChans => {
                *value.cast::<uInt32>() = task.write_chans().len() as uInt32;
                0
            }
            _ => sys::DAQmxErrorAttrNotSupported,
        })
    }

    unsafe extern "C" fn get_chan_attribute(
        handle: TaskHandle,
        channel: *const c_char,
        attribute: int32,
        value: *mut c_void,
        _size: uInt32,
    ) -> int32 {
        let channel = cstr(channel);
        task_op(handle, |task| match attribute {
            sys::DAQmx_DI_NumLines | sys::DAQmx_DO_NumLines => match task.lines(&channel) {
                Some(lines) => {
                    *value.cast::<uInt32>() = lines;
                    0
                }
                None => sys::DAQmxErrorPhysicalChanDoesNotExist,
            },
            _ => match task.chan_attrs.get(&(channel, attribute)) {
                Some(&stored) => {
                    *value.cast::<float64>() = stored;
                    0
                }
                None => sys::DAQmxErrorAttrNotSupported,
            },
        })
    }

    unsafe extern "C" fn set_chan_attribute(
        handle: TaskHandle,
        channel: *const c_char,
        attribute: int32,
        value: float64,
    ) -> int32 {
        let channel = cstr(channel);
        task_op(handle, |task| {
            if !task.channels().contains(&channel) {
                return sys::DAQmxErrorPhysicalChanDoesNotExist;
            }
            task.chan_attrs.insert((channel, attribute), value);
            0
        })
    }

    /// Adds the attribute fakes to `fns`.
    pub fn install(fns: &mut DaqmxFns) {
        // SAFETY: the callers pass exactly these arguments for the attribute
        // IDs the fakes answer to.
        unsafe {
            fns.DAQmxGetTaskAttribute = Some(std::mem::transmute(get_task_attribute as Getter));
            fns.DAQmxGetTimingAttribute = Some(std::mem::transmute(get_timing_attribute as Getter));
            fns.DAQmxSetTimingAttribute = Some(std::mem::transmute(set_timing_attribute as F64Setter));
            fns.DAQmxGetWriteAttribute = Some(std::mem::transmute(get_write_attribute as Getter));
            fns.DAQmxGetChanAttribute = Some(std::mem::transmute(get_chan_attribute as ChanGetter));
            fns.DAQmxSetChanAttribute = Some(std::mem::transmute(set_chan_attribute as ChanF64Setter));
        }
    }
}

/// Function table backed by the fake driver.
pub fn fake_fns() -> DaqmxFns {
    #[allow(unused_mut)]
    let mut fns = DaqmxFns {
        DAQmxCreateTask: Some(create_task),
        DAQmxClearTask: Some(clear_task),
        DAQmxStartTask: Some(start_task),
        DAQmxStopTask: Some(stop_task),
        DAQmxIsTaskDone: Some(is_task_done),
        DAQmxWaitUntilTaskDone: Some(wait_until_task_done),
        DAQmxCreateAIVoltageChan: Some(create_ai_voltage_chan),
        DAQmxCreateAOVoltageChan: Some(create_ao_voltage_chan),
        DAQmxCreateDIChan: Some(create_di_chan),
        DAQmxCreateDOChan: Some(create_do_chan),
        DAQmxCreateCICountEdgesChan: Some(create_ci_count_edges_chan),
        DAQmxCreateCOPulseChanFreq: Some(create_co_pulse_chan_freq),
        DAQmxGetTaskNumChans: Some(get_task_num_chans),
        DAQmxGetReadNumChans: Some(get_read_num_chans),
        DAQmxGetWriteNumChans: Some(get_write_num_chans),
        DAQmxGetNthTaskChannel: Some(get_nth_task_channel),
        DAQmxGetNthTaskReadChannel: Some(get_nth_task_read_channel),
        DAQmxGetTaskName: Some(get_task_name),
        DAQmxCfgSampClkTiming: Some(cfg_samp_clk_timing),
        DAQmxCfgDigEdgeStartTrig: Some(cfg_dig_edge_start_trig),
        DAQmxCfgAnlgEdgeStartTrig: Some(cfg_anlg_edge_start_trig),
        DAQmxCfgAnlgWindowStartTrig: Some(cfg_anlg_window_start_trig),
        DAQmxCfgDigPatternStartTrig: Some(cfg_dig_pattern_start_trig),
        DAQmxExportSignal: Some(export_signal),
        DAQmxCfgInputBuffer: Some(cfg_input_buffer),
        DAQmxCfgOutputBuffer: Some(cfg_output_buffer),
        DAQmxSetWriteRegenMode: Some(set_write_regen_mode),
        DAQmxReadAnalogF64: Some(read_analog_f64),
        DAQmxReadDigitalU32: Some(read_digital_u32),
        DAQmxReadCounterF64: Some(read_counter_f64),
        DAQmxWriteAnalogF64: Some(write_analog_f64),
        DAQmxWriteDigitalU32: Some(write_digital_u32),
        DAQmxWriteDigitalLines: Some(write_digital_lines),
        DAQmxWriteCtrFreq: Some(write_ctr_freq),
        DAQmxWriteRaw: Some(write_raw),
        DAQmxRegisterEveryNSamplesEvent: Some(register_every_n),
        DAQmxRegisterDoneEvent: Some(register_done),
        DAQmxRegisterSignalEvent: Some(register_signal),
        DAQmxGetErrorString: Some(get_error_string),
        DAQmxGetExtendedErrorInfo: Some(get_extended_error_info),
        DAQmxGetSysDevNames: Some(get_sys_dev_names),
        DAQmxGetSysNIDAQMajorVersion: Some(get_major_version),
        DAQmxGetSysNIDAQMinorVersion: Some(get_minor_version),
        DAQmxGetDevProductType: Some(get_dev_product_type),
        DAQmxGetDevSerialNum: Some(get_dev_serial_num),
        DAQmxGetDevIsSimulated: Some(get_dev_is_simulated),
        DAQmxGetDevProductCategory: Some(get_dev_product_category),
        DAQmxGetDevBusType: Some(get_dev_bus_type),
        DAQmxGetDevAIPhysicalChans: Some(get_dev_ai_chans),
        DAQmxGetDevAOPhysicalChans: Some(get_dev_ao_chans),
        DAQmxGetDevDILines: Some(get_dev_di_lines),
        DAQmxGetDevDOLines: Some(get_dev_do_lines),
        DAQmxGetDevCIPhysicalChans: Some(get_dev_ci_chans),
        DAQmxGetDevCOPhysicalChans: Some(get_dev_co_chans),
        DAQmxSwitchFindPath: Some(switch_find_path),
        DAQmxSwitchOpenRelays: Some(switch_open_relays),
        DAQmxSwitchCloseRelays: Some(switch_close_relays),
        DAQmxSwitchGetMultiRelayCount: Some(switch_get_multi_relay_count),
        DAQmxSwitchGetMultiRelayPos: Some(switch_get_multi_relay_pos),
        DAQmxInitExtCal: Some(init_ext_cal),
        DAQmxCloseExtCal: Some(close_ext_cal),
        DAQmxCreateLinScale: Some(create_lin_scale),
        DAQmxCreatePolynomialScale: Some(create_polynomial_scale),
        DAQmxCalculateReversePolyCoeff: Some(calculate_reverse_poly_coeff),
        ..Default::default()
    };
    #[cfg(not(all(target_arch = "aarch64", any(target_vendor = "apple", target_os = "windows"))))]
    variadic::install(&mut fns);
    fns
}

/// A driver handle over a fresh fake with one simulated device, `Dev1`.
pub fn fake_daqmx() -> Daqmx {
    fake_daqmx_with(DriverConfig::default())
}

pub fn fake_daqmx_with(config: DriverConfig) -> Daqmx {
    with_driver(|d| {
        *d = FakeDriver::default();
        d.devices.push(FakeDevice::simulated_6363("Dev1"));
    });
    Daqmx::with_library(Library::from_fns(fake_fns()), config)
}
