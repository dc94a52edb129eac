//! Reading and writing samples.
//!
//! Multi-channel data lives in 2-D `ndarray` arrays whose axes follow the
//! [`DataLayout`]:
//!
//! - [`DataLayout::GroupByChannel`]: `[channels, samples]`
//! - [`DataLayout::GroupByScanNumber`]: `[samples, channels]`
//!
//! The channel axis must match the task's read or write channel count, which
//! is checked before the driver is called. Reads request as many samples per
//! channel as the array holds and return how many were actually read; writes
//! return how many samples per channel the driver accepted. Every count the
//! driver reads from a caller's buffer is derived from that buffer's length.

use std::ptr;

use libc::c_void;
use ndarray::{ArrayBase, Data, DataMut, Ix1, Ix2};
use nidaqmx_sys::{int32, uInt32, DAQmx_DO_NumLines, DAQmx_Write_RawDataWidth};

use crate::attribute::TaskAttr;
use crate::driver::daqmx_call;
use crate::error::{DaqmxError, Result};
use crate::task::TaskRef;
use crate::utils::to_bool32;
use crate::values::{DataLayout, Timeout};

/// Samples per channel an array of `shape` holds, or a `BufferShape` error
/// when its channel axis is not `channels` long.
pub(crate) fn samples_per_chan(shape: &[usize], layout: DataLayout, channels: usize) -> Result<usize> {
    let (chan_len, samp_len) = match layout {
        DataLayout::GroupByChannel => (shape[0], shape[1]),
        DataLayout::GroupByScanNumber => (shape[1], shape[0]),
    };
    if chan_len != channels {
        let expected = match layout {
            DataLayout::GroupByChannel => format!("[{channels}, samples]"),
            DataLayout::GroupByScanNumber => format!("[samples, {channels}]"),
        };
        return Err(DaqmxError::BufferShape {
            expected,
            actual: shape.to_vec(),
        });
    }
    samples_arg(samp_len)?;
    Ok(samp_len)
}

/// A sample count as the driver's `int32`.
pub(crate) fn samples_arg(samples: usize) -> Result<int32> {
    int32::try_from(samples).map_err(|_| {
        DaqmxError::InvalidArgument(format!("{samples} samples per channel exceeds the driver's limit"))
    })
}

/// Buffer capacity as the driver's `uInt32`. Larger buffers are reported as
/// `uInt32::MAX`, which only understates the room available.
fn array_size(len: usize) -> uInt32 {
    uInt32::try_from(len).unwrap_or(uInt32::MAX)
}

fn not_contiguous(shape: &[usize]) -> DaqmxError {
    DaqmxError::BufferShape {
        expected: "a contiguous array in standard layout".into(),
        actual: shape.to_vec(),
    }
}

macro_rules! array_read {
    ($(#[$meta:meta])* $name:ident => $func:ident($ty:ty)) => {
        $(#[$meta])*
        pub fn $name<S: DataMut<Elem = $ty>>(
            &self,
            timeout: Timeout,
            layout: DataLayout,
            out: &mut ArrayBase<S, Ix2>,
        ) -> Result<usize> {
            let shape = out.shape().to_vec();
            let samples = samples_per_chan(&shape, layout, self.read_num_chans()? as usize)?;
            let buf = out.as_slice_mut().ok_or_else(|| not_contiguous(&shape))?;
            let mut read: int32 = 0;
            daqmx_call!(
                &self.daqmx,
                $func(
                    self.handle,
                    samples as int32,
                    timeout.secs(),
                    layout.raw(),
                    buf.as_mut_ptr(),
                    array_size(buf.len()),
                    &mut read,
                    ptr::null_mut(),
                )
            )?;
            Ok(read as usize)
        }
    };
}

macro_rules! counter_read {
    ($(#[$meta:meta])* $name:ident => $func:ident($ty:ty)) => {
        $(#[$meta])*
        pub fn $name<S: DataMut<Elem = $ty>>(&self, timeout: Timeout, out: &mut ArrayBase<S, Ix1>) -> Result<usize> {
            let len = out.len();
            let samples = samples_arg(len)?;
            let buf = out.as_slice_mut().ok_or_else(|| not_contiguous(&[len]))?;
            let mut read: int32 = 0;
            daqmx_call!(
                &self.daqmx,
                $func(
                    self.handle,
                    samples,
                    timeout.secs(),
                    buf.as_mut_ptr(),
                    array_size(len),
                    &mut read,
                    ptr::null_mut(),
                )
            )?;
            Ok(read as usize)
        }
    };
}

macro_rules! scalar_read {
    ($(#[$meta:meta])* $name:ident => $func:ident($ty:ty)) => {
        $(#[$meta])*
        pub fn $name(&self, timeout: Timeout) -> Result<$ty> {
            let mut value = <$ty>::default();
            daqmx_call!(&self.daqmx, $func(self.handle, timeout.secs(), &mut value, ptr::null_mut()))?;
            Ok(value)
        }
    };
}

macro_rules! array_write {
    ($(#[$meta:meta])* $name:ident => $func:ident($ty:ty)) => {
        array_write!($(#[$meta])* $name => $func($ty), write_num_chans);
    };
    ($(#[$meta:meta])* $name:ident => $func:ident($ty:ty), $chans:ident) => {
        $(#[$meta])*
        pub fn $name<S: Data<Elem = $ty>>(
            &self,
            data: &ArrayBase<S, Ix2>,
            auto_start: bool,
            timeout: Timeout,
            layout: DataLayout,
        ) -> Result<usize> {
            let samples = samples_per_chan(data.shape(), layout, self.$chans()? as usize)?;
            let data = data.as_standard_layout();
            let mut written: int32 = 0;
            daqmx_call!(
                &self.daqmx,
                $func(
                    self.handle,
                    samples as int32,
                    to_bool32(auto_start),
                    timeout.secs(),
                    layout.raw(),
                    data.as_ptr(),
                    &mut written,
                    ptr::null_mut(),
                )
            )?;
            Ok(written as usize)
        }
    };
}

macro_rules! counter_write {
    ($(#[$meta:meta])* $name:ident => $func:ident($ty:ty, $first:ident, $second:ident)) => {
        $(#[$meta])*
        pub fn $name<S: Data<Elem = $ty>, T: Data<Elem = $ty>>(
            &self,
            $first: &ArrayBase<S, Ix2>,
            $second: &ArrayBase<T, Ix2>,
            auto_start: bool,
            timeout: Timeout,
            layout: DataLayout,
        ) -> Result<usize> {
            if $first.shape() != $second.shape() {
                return Err(DaqmxError::BufferShape {
                    expected: format!("{:?}", $first.shape()),
                    actual: $second.shape().to_vec(),
                });
            }
            let samples = samples_per_chan($first.shape(), layout, self.write_num_chans()? as usize)?;
            let $first = $first.as_standard_layout();
            let $second = $second.as_standard_layout();
            let mut written: int32 = 0;
            daqmx_call!(
                &self.daqmx,
                $func(
                    self.handle,
                    samples as int32,
                    to_bool32(auto_start),
                    timeout.secs(),
                    layout.raw(),
                    $first.as_ptr(),
                    $second.as_ptr(),
                    &mut written,
                    ptr::null_mut(),
                )
            )?;
            Ok(written as usize)
        }
    };
}

impl TaskRef {
    array_read!(read_analog_f64 => DAQmxReadAnalogF64(f64));
    array_read!(
        /// Unscaled ADC codes.
        read_binary_i16 => DAQmxReadBinaryI16(i16)
    );
    array_read!(read_binary_u16 => DAQmxReadBinaryU16(u16));
    array_read!(read_binary_i32 => DAQmxReadBinaryI32(i32));
    array_read!(read_binary_u32 => DAQmxReadBinaryU32(u32));
    array_read!(
        /// One value per port channel, lines packed into bits.
        read_digital_u8 => DAQmxReadDigitalU8(u8)
    );
    array_read!(read_digital_u16 => DAQmxReadDigitalU16(u16));
    array_read!(read_digital_u32 => DAQmxReadDigitalU32(u32));

    counter_read!(read_counter_f64 => DAQmxReadCounterF64(f64));
    counter_read!(read_counter_u32 => DAQmxReadCounterU32(u32));

    scalar_read!(read_analog_scalar_f64 => DAQmxReadAnalogScalarF64(f64));
    scalar_read!(read_digital_scalar_u32 => DAQmxReadDigitalScalarU32(u32));
    scalar_read!(read_counter_scalar_f64 => DAQmxReadCounterScalarF64(f64));
    scalar_read!(read_counter_scalar_u32 => DAQmxReadCounterScalarU32(u32));

    /// Reads one byte per line. Returns the samples per channel read and the
    /// number of bytes each sample occupies in `out`.
    pub fn read_digital_lines(
        &self,
        samples_per_chan: u32,
        timeout: Timeout,
        layout: DataLayout,
        out: &mut [u8],
    ) -> Result<(usize, usize)> {
        let mut read: int32 = 0;
        let mut bytes_per_samp: int32 = 0;
        daqmx_call!(
            &self.daqmx,
            DAQmxReadDigitalLines(
                self.handle,
                samples_arg(samples_per_chan as usize)?,
                timeout.secs(),
                layout.raw(),
                out.as_mut_ptr(),
                array_size(out.len()),
                &mut read,
                &mut bytes_per_samp,
                ptr::null_mut(),
            )
        )?;
        Ok((read as usize, bytes_per_samp as usize))
    }

    /// Reads samples in the device's native format. Returns the samples read
    /// and the bytes per sample.
    pub fn read_raw(&self, samples_per_chan: u32, timeout: Timeout, out: &mut [u8]) -> Result<(usize, usize)> {
        let mut read: int32 = 0;
        let mut bytes_per_samp: int32 = 0;
        daqmx_call!(
            &self.daqmx,
            DAQmxReadRaw(
                self.handle,
                samples_arg(samples_per_chan as usize)?,
                timeout.secs(),
                out.as_mut_ptr().cast::<c_void>(),
                array_size(out.len()),
                &mut read,
                &mut bytes_per_samp,
                ptr::null_mut(),
            )
        )?;
        Ok((read as usize, bytes_per_samp as usize))
    }

    array_write!(write_analog_f64 => DAQmxWriteAnalogF64(f64));
    array_write!(write_binary_i16 => DAQmxWriteBinaryI16(i16));
    array_write!(write_binary_u16 => DAQmxWriteBinaryU16(u16));
    array_write!(write_digital_u8 => DAQmxWriteDigitalU8(u8));
    array_write!(write_digital_u16 => DAQmxWriteDigitalU16(u16));
    array_write!(write_digital_u32 => DAQmxWriteDigitalU32(u32));
    array_write!(
        /// One byte per line. The channel axis counts every line of every
        /// channel (see [`TaskRef::write_lines_per_scan`]), so a channel
        /// created with `ChanForAllLines` takes one row per line.
        write_digital_lines => DAQmxWriteDigitalLines(u8),
        write_lines_per_scan
    );

    /// Lines one scan of a digital output task drives: `DAQmx_DO_NumLines`
    /// summed over its channels.
    pub fn write_lines_per_scan(&self) -> Result<usize> {
        let mut lines = 0;
        for channel in self.channels()? {
            lines += self.get_chan_attr::<u32>(&channel, DAQmx_DO_NumLines)? as usize;
        }
        Ok(lines)
    }

    counter_write!(write_ctr_freq => DAQmxWriteCtrFreq(f64, frequency, duty_cycle));
    counter_write!(write_ctr_time => DAQmxWriteCtrTime(f64, high_time, low_time));
    counter_write!(write_ctr_ticks => DAQmxWriteCtrTicks(u32, high_ticks, low_ticks));

    pub fn write_analog_scalar_f64(&self, value: f64, auto_start: bool, timeout: Timeout) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxWriteAnalogScalarF64(self.handle, to_bool32(auto_start), timeout.secs(), value, ptr::null_mut())
        )?;
        Ok(())
    }

    pub fn write_digital_scalar_u32(&self, value: u32, auto_start: bool, timeout: Timeout) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxWriteDigitalScalarU32(self.handle, to_bool32(auto_start), timeout.secs(), value, ptr::null_mut())
        )?;
        Ok(())
    }

    pub fn write_ctr_freq_scalar(&self, frequency: f64, duty_cycle: f64, auto_start: bool, timeout: Timeout) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxWriteCtrFreqScalar(
                self.handle,
                to_bool32(auto_start),
                timeout.secs(),
                frequency,
                duty_cycle,
                ptr::null_mut(),
            )
        )?;
        Ok(())
    }

    pub fn write_ctr_time_scalar(&self, high_time: f64, low_time: f64, auto_start: bool, timeout: Timeout) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxWriteCtrTimeScalar(
                self.handle,
                to_bool32(auto_start),
                timeout.secs(),
                high_time,
                low_time,
                ptr::null_mut(),
            )
        )?;
        Ok(())
    }

    pub fn write_ctr_ticks_scalar(&self, high_ticks: u32, low_ticks: u32, auto_start: bool, timeout: Timeout) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxWriteCtrTicksScalar(
                self.handle,
                to_bool32(auto_start),
                timeout.secs(),
                high_ticks,
                low_ticks,
                ptr::null_mut(),
            )
        )?;
        Ok(())
    }

    /// Writes samples already in the device's native format, interleaved by
    /// channel. The sample count follows from the length of `data`, the
    /// task's channel count and `DAQmx_Write_RawDataWidth`.
    pub fn write_raw(&self, data: &[u8], auto_start: bool, timeout: Timeout) -> Result<usize> {
        let width = self.get_attr::<u32>(TaskAttr::Write, DAQmx_Write_RawDataWidth)? as usize;
        let samples = raw_samples(data.len(), width, self.write_num_chans()? as usize)?;
        let mut written: int32 = 0;
        daqmx_call!(
            &self.daqmx,
            DAQmxWriteRaw(
                self.handle,
                samples,
                to_bool32(auto_start),
                timeout.secs(),
                data.as_ptr().cast::<c_void>(),
                &mut written,
                ptr::null_mut(),
            )
        )?;
        Ok(written as usize)
    }
}

/// Whole scans of `width`-byte samples over `channels` in `len` bytes.
fn raw_samples(len: usize, width: usize, channels: usize) -> Result<int32> {
    let scan = width * channels;
    if scan == 0 || len % scan != 0 {
        return Err(DaqmxError::BufferShape {
            expected: format!("a whole number of {scan}-byte scans"),
            actual: vec![len],
        });
    }
    samples_arg(len / scan)
}
