//! Attribute access.
//!
//! Most driver properties are read through the variadic
//! `DAQmxGet<Family>Attribute(handle, attribute, value, ...)` functions and
//! written through `DAQmxSet<Family>Attribute(handle, attribute, ...)`. The
//! generic [`TaskRef::get_attr`] / [`TaskRef::set_attr`] family and their
//! [`Daqmx`] counterparts cover those with an [`AttributeType`] per Rust
//! type. The `DAQmx_*` attribute IDs in `nidaqmx_sys` document which type
//! each attribute has.
//!
//! The frequently used properties also have named accessors built on the
//! fixed-arity typed functions (`DAQmxGetReadAvailSampPerChan`, ...).

use libc::c_void;
use nidaqmx_sys::{bool32, float64, int32, uInt32, uInt64, FALSE};

use crate::driver::{daqmx_call, daqmx_raw, Daqmx};
use crate::error::{DaqmxError, Result};
use crate::task::TaskRef;
use crate::utils::{split_list, to_bool32, to_cstring};
use crate::values::{BusType, ProductCategory};

/// Attribute families scoped to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAttr {
    /// Read-only task properties (`DAQmx_Task_*`).
    Task,
    Timing,
    Trigger,
    Read,
    Write,
    Buffer,
    ExportedSignal,
}

/// Value passed to an attribute setter.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    I32(i32),
    U32(u32),
    U64(u64),
    F64(f64),
    Bool(bool),
    String(String),
}

macro_rules! attr_value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::$variant(value.into())
                }
            }
        )+
    };
}

attr_value_from! {
    i32 => I32,
    u32 => U32,
    u64 => U64,
    f64 => F64,
    bool => Bool,
    String => String,
    &str => String,
}

/// Rust types an attribute can be read as.
pub trait AttributeType: Sized {
    /// Reads the value through `getter`, which calls the variadic getter
    /// with a value pointer and a buffer size and returns the raw status.
    fn get_with(
        daqmx: &Daqmx,
        function: &'static str,
        getter: &mut dyn FnMut(*mut c_void, uInt32) -> Result<int32>,
    ) -> Result<Self>;
}

macro_rules! scalar_attribute {
    ($($ty:ty),+) => {
        $(
            impl AttributeType for $ty {
                fn get_with(
                    daqmx: &Daqmx,
                    function: &'static str,
                    getter: &mut dyn FnMut(*mut c_void, uInt32) -> Result<int32>,
                ) -> Result<Self> {
                    let mut value = <$ty>::default();
                    let code = getter((&mut value as *mut $ty).cast(), 0)?;
                    daqmx.check(code, function)?;
                    Ok(value)
                }
            }
        )+
    };
}

scalar_attribute!(int32, uInt32, uInt64, float64);

impl AttributeType for bool {
    fn get_with(
        daqmx: &Daqmx,
        function: &'static str,
        getter: &mut dyn FnMut(*mut c_void, uInt32) -> Result<int32>,
    ) -> Result<Self> {
        let value = bool32::get_with(daqmx, function, getter)?;
        Ok(value != FALSE)
    }
}

impl AttributeType for String {
    fn get_with(
        daqmx: &Daqmx,
        function: &'static str,
        getter: &mut dyn FnMut(*mut c_void, uInt32) -> Result<int32>,
    ) -> Result<Self> {
        daqmx.query_string(function, |buf, size| getter(buf.cast(), size))
    }
}

/// Calls a variadic setter with the C type matching the value.
macro_rules! set_variadic {
    ($daqmx:expr, $func:ident($($arg:expr),*), $value:expr) => {{
        let daqmx: &Daqmx = $daqmx;
        match daqmx.fns().$func {
            None => Err(DaqmxError::MissingFunction(stringify!($func))),
            Some(func) => {
                let code = match $value {
                    AttrValue::I32(v) => unsafe { func($($arg),*, *v) },
                    AttrValue::U32(v) => unsafe { func($($arg),*, *v) },
                    AttrValue::U64(v) => unsafe { func($($arg),*, *v) },
                    AttrValue::F64(v) => unsafe { func($($arg),*, *v) },
                    AttrValue::Bool(v) => unsafe { func($($arg),*, to_bool32(*v)) },
                    AttrValue::String(s) => {
                        let s = to_cstring(s)?;
                        unsafe { func($($arg),*, s.as_ptr()) }
                    }
                };
                daqmx.check(code, stringify!($func)).map(|_| ())
            }
        }
    }};
}

fn getter_name(family: TaskAttr) -> &'static str {
    match family {
        TaskAttr::Task => "DAQmxGetTaskAttribute",
        TaskAttr::Timing => "DAQmxGetTimingAttribute",
        TaskAttr::Trigger => "DAQmxGetTrigAttribute",
        TaskAttr::Read => "DAQmxGetReadAttribute",
        TaskAttr::Write => "DAQmxGetWriteAttribute",
        TaskAttr::Buffer => "DAQmxGetBufferAttribute",
        TaskAttr::ExportedSignal => "DAQmxGetExportedSignalAttribute",
    }
}

fn read_only(family: TaskAttr) -> DaqmxError {
    DaqmxError::InvalidArgument(format!("{family:?} attributes are read-only"))
}

impl TaskRef {
    pub fn get_attr<T: AttributeType>(&self, family: TaskAttr, attribute: int32) -> Result<T> {
        let (daqmx, handle) = (&self.daqmx, self.handle);
        let mut getter = |value: *mut c_void, size: uInt32| match family {
            TaskAttr::Task => daqmx_raw!(daqmx, DAQmxGetTaskAttribute(handle, attribute, value, size)),
            TaskAttr::Timing => daqmx_raw!(daqmx, DAQmxGetTimingAttribute(handle, attribute, value, size)),
            TaskAttr::Trigger => daqmx_raw!(daqmx, DAQmxGetTrigAttribute(handle, attribute, value, size)),
            TaskAttr::Read => daqmx_raw!(daqmx, DAQmxGetReadAttribute(handle, attribute, value, size)),
            TaskAttr::Write => daqmx_raw!(daqmx, DAQmxGetWriteAttribute(handle, attribute, value, size)),
            TaskAttr::Buffer => daqmx_raw!(daqmx, DAQmxGetBufferAttribute(handle, attribute, value, size)),
            TaskAttr::ExportedSignal => {
                daqmx_raw!(daqmx, DAQmxGetExportedSignalAttribute(handle, attribute, value, size))
            }
        };
        T::get_with(daqmx, getter_name(family), &mut getter)
    }

    pub fn set_attr(&self, family: TaskAttr, attribute: int32, value: impl Into<AttrValue>) -> Result<()> {
        let value = value.into();
        let (daqmx, handle) = (&self.daqmx, self.handle);
        match family {
            TaskAttr::Task => Err(read_only(family)),
            TaskAttr::Timing => set_variadic!(daqmx, DAQmxSetTimingAttribute(handle, attribute), &value),
            TaskAttr::Trigger => set_variadic!(daqmx, DAQmxSetTrigAttribute(handle, attribute), &value),
            TaskAttr::Read => set_variadic!(daqmx, DAQmxSetReadAttribute(handle, attribute), &value),
            TaskAttr::Write => set_variadic!(daqmx, DAQmxSetWriteAttribute(handle, attribute), &value),
            TaskAttr::Buffer => set_variadic!(daqmx, DAQmxSetBufferAttribute(handle, attribute), &value),
            TaskAttr::ExportedSignal => {
                set_variadic!(daqmx, DAQmxSetExportedSignalAttribute(handle, attribute), &value)
            }
        }
    }

    /// Restores an attribute to its default.
    pub fn reset_attr(&self, family: TaskAttr, attribute: int32) -> Result<()> {
        let (daqmx, handle) = (&self.daqmx, self.handle);
        match family {
            TaskAttr::Task => return Err(read_only(family)),
            TaskAttr::Timing => daqmx_call!(daqmx, DAQmxResetTimingAttribute(handle, attribute)),
            TaskAttr::Trigger => daqmx_call!(daqmx, DAQmxResetTrigAttribute(handle, attribute)),
            TaskAttr::Read => daqmx_call!(daqmx, DAQmxResetReadAttribute(handle, attribute)),
            TaskAttr::Write => daqmx_call!(daqmx, DAQmxResetWriteAttribute(handle, attribute)),
            TaskAttr::Buffer => daqmx_call!(daqmx, DAQmxResetBufferAttribute(handle, attribute)),
            TaskAttr::ExportedSignal => daqmx_call!(daqmx, DAQmxResetExportedSignalAttribute(handle, attribute)),
        }?;
        Ok(())
    }

    /// Channel attribute of one virtual channel, or of all channels when
    /// `channel` is empty.
    pub fn get_chan_attr<T: AttributeType>(&self, channel: &str, attribute: int32) -> Result<T> {
        let channel = to_cstring(channel)?;
        let (daqmx, handle) = (&self.daqmx, self.handle);
        T::get_with(daqmx, "DAQmxGetChanAttribute", &mut |value: *mut c_void, size: uInt32| {
            daqmx_raw!(daqmx, DAQmxGetChanAttribute(handle, channel.as_ptr(), attribute, value, size))
        })
    }

    pub fn set_chan_attr(&self, channel: &str, attribute: int32, value: impl Into<AttrValue>) -> Result<()> {
        let channel = to_cstring(channel)?;
        set_variadic!(
            &self.daqmx,
            DAQmxSetChanAttribute(self.handle, channel.as_ptr(), attribute),
            &value.into()
        )
    }

    pub fn reset_chan_attr(&self, channel: &str, attribute: int32) -> Result<()> {
        let channel = to_cstring(channel)?;
        daqmx_call!(&self.daqmx, DAQmxResetChanAttribute(self.handle, channel.as_ptr(), attribute))?;
        Ok(())
    }

    /// Watchdog attribute of `lines` on a watchdog task.
    pub fn get_watchdog_attr<T: AttributeType>(&self, lines: &str, attribute: int32) -> Result<T> {
        let lines = to_cstring(lines)?;
        let (daqmx, handle) = (&self.daqmx, self.handle);
        T::get_with(daqmx, "DAQmxGetWatchdogAttribute", &mut |value: *mut c_void, size: uInt32| {
            daqmx_raw!(daqmx, DAQmxGetWatchdogAttribute(handle, lines.as_ptr(), attribute, value, size))
        })
    }

    pub fn set_watchdog_attr(&self, lines: &str, attribute: int32, value: impl Into<AttrValue>) -> Result<()> {
        let lines = to_cstring(lines)?;
        set_variadic!(
            &self.daqmx,
            DAQmxSetWatchdogAttribute(self.handle, lines.as_ptr(), attribute),
            &value.into()
        )
    }

    pub fn reset_watchdog_attr(&self, lines: &str, attribute: int32) -> Result<()> {
        let lines = to_cstring(lines)?;
        daqmx_call!(&self.daqmx, DAQmxResetWatchdogAttribute(self.handle, lines.as_ptr(), attribute))?;
        Ok(())
    }
}

/// Named getter over a fixed-arity `DAQmxGet*(taskHandle, *data)` function.
macro_rules! task_getter {
    ($($(#[$meta:meta])* $name:ident => $func:ident($ty:ty);)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&self) -> Result<$ty> {
                let mut value = <$ty>::default();
                daqmx_call!(&self.daqmx, $func(self.handle, &mut value))?;
                Ok(value)
            }
        )+
    };
}

impl TaskRef {
    task_getter! {
        /// Samples per channel waiting in the input buffer.
        avail_samp_per_chan => DAQmxGetReadAvailSampPerChan(uInt32);
        total_samp_per_chan_acquired => DAQmxGetReadTotalSampPerChanAcquired(uInt64);
        /// Channels a read returns, which sizes the channel axis of read arrays.
        read_num_chans => DAQmxGetReadNumChans(uInt32);
        write_num_chans => DAQmxGetWriteNumChans(uInt32);
        /// Position in the output buffer the next write goes to.
        curr_write_pos => DAQmxGetWriteCurrWritePos(uInt64);
        total_samp_per_chan_generated => DAQmxGetWriteTotalSampPerChanGenerated(uInt64);
        /// Free space in the output buffer, in samples per channel.
        write_space_avail => DAQmxGetWriteSpaceAvail(uInt32);
        samp_clk_rate => DAQmxGetSampClkRate(float64);
        input_buf_size => DAQmxGetBufInputBufSize(uInt32);
        output_buf_size => DAQmxGetBufOutputBufSize(uInt32);
    }

    /// Whether the task has finished, without `DAQmxIsTaskDone`'s error on
    /// tasks that were never started.
    pub fn task_complete(&self) -> Result<bool> {
        let mut value: bool32 = FALSE;
        daqmx_call!(&self.daqmx, DAQmxGetTaskComplete(self.handle, &mut value))?;
        Ok(value != FALSE)
    }

    /// Sets the sample clock rate after timing is configured. The driver may
    /// coerce it; read [`TaskRef::samp_clk_rate`] for the actual rate.
    pub fn set_samp_clk_rate(&self, rate: f64) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxSetSampClkRate(self.handle, rate))?;
        Ok(())
    }
}

/// Getter for a variadic `DAQmxGet<Family>Attribute(name, attribute, value, ...)`.
macro_rules! named_getter {
    ($(#[$meta:meta])* $name:ident, $func:ident) => {
        $(#[$meta])*
        pub fn $name<T: AttributeType>(&self, name: &str, attribute: int32) -> Result<T> {
            let name = to_cstring(name)?;
            T::get_with(self, stringify!($func), &mut |value: *mut c_void, size: uInt32| {
                daqmx_raw!(self, $func(name.as_ptr(), attribute, value, size))
            })
        }
    };
}

/// Setter for a variadic `DAQmxSet<Family>Attribute(name, attribute, ...)`.
macro_rules! named_setter {
    ($(#[$meta:meta])* $name:ident, $func:ident) => {
        $(#[$meta])*
        pub fn $name(&self, name: &str, attribute: int32, value: impl Into<AttrValue>) -> Result<()> {
            let name = to_cstring(name)?;
            set_variadic!(self, $func(name.as_ptr(), attribute), &value.into())
        }
    };
}

impl Daqmx {
    named_getter!(get_device_attr, DAQmxGetDeviceAttribute);
    named_getter!(get_physical_chan_attr, DAQmxGetPhysicalChanAttribute);
    named_getter!(get_scale_attr, DAQmxGetScaleAttribute);
    named_setter!(set_scale_attr, DAQmxSetScaleAttribute);
    named_getter!(
        /// Calibration info of a device, e.g. `DAQmx_Cal_DevTemp`.
        get_cal_info_attr,
        DAQmxGetCalInfoAttribute
    );
    named_setter!(set_cal_info_attr, DAQmxSetCalInfoAttribute);
    named_getter!(get_persisted_task_attr, DAQmxGetPersistedTaskAttribute);
    named_getter!(get_persisted_chan_attr, DAQmxGetPersistedChanAttribute);
    named_getter!(get_persisted_scale_attr, DAQmxGetPersistedScaleAttribute);
    named_getter!(get_switch_device_attr, DAQmxGetSwitchDeviceAttribute);
    named_setter!(set_switch_device_attr, DAQmxSetSwitchDeviceAttribute);

    pub fn get_system_attr<T: AttributeType>(&self, attribute: int32) -> Result<T> {
        T::get_with(self, "DAQmxGetSystemInfoAttribute", &mut |value: *mut c_void, size: uInt32| {
            daqmx_raw!(self, DAQmxGetSystemInfoAttribute(attribute, value, size))
        })
    }

    /// `float64` array device attribute, such as `DAQmx_Dev_AO_VoltageRngs`.
    pub fn get_device_f64_array(&self, device: &str, attribute: int32) -> Result<Vec<f64>> {
        let device = to_cstring(device)?;
        self.query_f64_array("DAQmxGetDeviceAttribute", |data, size| {
            daqmx_raw!(
                self,
                DAQmxGetDeviceAttribute(device.as_ptr(), attribute, data.cast::<c_void>(), size)
            )
        })
    }
}

/// Named getter over a fixed-arity `DAQmxGetDev*(device, *data)` function.
macro_rules! device_getter {
    ($($(#[$meta:meta])* $name:ident => $func:ident($ty:ty);)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, device: &str) -> Result<$ty> {
                let device = to_cstring(device)?;
                let mut value = <$ty>::default();
                daqmx_call!(self, $func(device.as_ptr(), &mut value))?;
                Ok(value)
            }
        )+
    };
}

/// Named getter for a comma-separated list property of a device.
macro_rules! device_list {
    ($($(#[$meta:meta])* $name:ident => $func:ident;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(&self, device: &str) -> Result<Vec<String>> {
                let device = to_cstring(device)?;
                let list = self.query_string(stringify!($func), |buf, size| {
                    daqmx_raw!(self, $func(device.as_ptr(), buf, size))
                })?;
                Ok(split_list(&list))
            }
        )+
    };
}

impl Daqmx {
    device_getter! {
        dev_product_num => DAQmxGetDevProductNum(uInt32);
        dev_serial_num => DAQmxGetDevSerialNum(uInt32);
        /// Fastest single-channel AI sample rate, in samples per second.
        dev_ai_max_single_chan_rate => DAQmxGetDevAIMaxSingleChanRate(float64);
        dev_ao_max_rate => DAQmxGetDevAOMaxRate(float64);
    }

    device_list! {
        dev_ai_physical_chans => DAQmxGetDevAIPhysicalChans;
        dev_ao_physical_chans => DAQmxGetDevAOPhysicalChans;
        dev_ci_physical_chans => DAQmxGetDevCIPhysicalChans;
        dev_co_physical_chans => DAQmxGetDevCOPhysicalChans;
        dev_di_lines => DAQmxGetDevDILines;
        dev_do_lines => DAQmxGetDevDOLines;
        /// Every terminal of the device, as `/Dev1/PFI0`.
        dev_terminals => DAQmxGetDevTerminals;
    }

    pub fn dev_product_type(&self, device: &str) -> Result<String> {
        let device = to_cstring(device)?;
        self.query_string("DAQmxGetDevProductType", |buf, size| {
            daqmx_raw!(self, DAQmxGetDevProductType(device.as_ptr(), buf, size))
        })
    }

    pub fn dev_is_simulated(&self, device: &str) -> Result<bool> {
        let device = to_cstring(device)?;
        let mut value: bool32 = FALSE;
        daqmx_call!(self, DAQmxGetDevIsSimulated(device.as_ptr(), &mut value))?;
        Ok(value != FALSE)
    }

    /// `None` for categories this crate has no variant for.
    pub fn dev_product_category(&self, device: &str) -> Result<Option<ProductCategory>> {
        let device = to_cstring(device)?;
        let mut value: int32 = 0;
        daqmx_call!(self, DAQmxGetDevProductCategory(device.as_ptr(), &mut value))?;
        Ok(ProductCategory::from_raw(value))
    }

    pub fn dev_bus_type(&self, device: &str) -> Result<Option<BusType>> {
        let device = to_cstring(device)?;
        let mut value: int32 = 0;
        daqmx_call!(self, DAQmxGetDevBusType(device.as_ptr(), &mut value))?;
        Ok(BusType::from_raw(value))
    }

    /// AI input ranges as `[min0, max0, min1, max1, ...]` pairs.
    pub fn dev_ai_voltage_rngs(&self, device: &str) -> Result<Vec<(f64, f64)>> {
        let device = to_cstring(device)?;
        let flat = self.query_f64_array("DAQmxGetDevAIVoltageRngs", |data, size| {
            daqmx_raw!(self, DAQmxGetDevAIVoltageRngs(device.as_ptr(), data, size))
        })?;
        Ok(flat.chunks_exact(2).map(|pair| (pair[0], pair[1])).collect())
    }
}
