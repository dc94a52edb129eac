//! Self and external calibration, bridge nulling and TEDS.

use std::fmt;
use std::path::Path;

use nidaqmx_sys::{self as sys, bool32, int32, uInt32, CalHandle};
use serde::Serialize;
use tracing::{info, warn};

use crate::driver::{daqmx_call, Daqmx};
use crate::error::{DaqmxError, Result};
use crate::task::TaskRef;
use crate::utils::{opt_cstring, to_cstring};
use crate::values::TedsWriteOption;

/// Timestamp the driver stores with a calibration, in the device's local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CalDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl fmt::Display for CalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| DaqmxError::InvalidArgument(format!("path {} is not UTF-8", path.display())))
}

impl Daqmx {
    /// Runs the device's internal self-calibration.
    pub fn self_cal(&self, device: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        daqmx_call!(self, DAQmxSelfCal(device_c.as_ptr()))?;
        info!(device, "Self-calibrated device");
        Ok(())
    }

    pub fn self_cal_last_date(&self, device: &str) -> Result<CalDate> {
        let device_c = to_cstring(device)?;
        let mut date = CalDate::default();
        daqmx_call!(
            self,
            DAQmxGetSelfCalLastDateAndTime(
                device_c.as_ptr(),
                &mut date.year,
                &mut date.month,
                &mut date.day,
                &mut date.hour,
                &mut date.minute,
            )
        )?;
        Ok(date)
    }

    pub fn ext_cal_last_date(&self, device: &str) -> Result<CalDate> {
        let device_c = to_cstring(device)?;
        let mut date = CalDate::default();
        daqmx_call!(
            self,
            DAQmxGetExtCalLastDateAndTime(
                device_c.as_ptr(),
                &mut date.year,
                &mut date.month,
                &mut date.day,
                &mut date.hour,
                &mut date.minute,
            )
        )?;
        Ok(date)
    }

    /// Discards self-calibration constants and restores the ones from the
    /// last external calibration.
    pub fn restore_last_ext_cal_const(&self, device: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        daqmx_call!(self, DAQmxRestoreLastExtCalConst(device_c.as_ptr()))?;
        Ok(())
    }

    pub fn device_supports_cal(&self, device: &str) -> Result<bool> {
        let device_c = to_cstring(device)?;
        let mut supported: bool32 = 0;
        daqmx_call!(self, DAQmxDeviceSupportsCal(device_c.as_ptr(), &mut supported))?;
        Ok(supported != 0)
    }

    pub fn change_ext_cal_password(&self, device: &str, password: &str, new_password: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        let password = to_cstring(password)?;
        let new_password = to_cstring(new_password)?;
        daqmx_call!(
            self,
            DAQmxChangeExtCalPassword(device_c.as_ptr(), password.as_ptr(), new_password.as_ptr())
        )?;
        info!(device, "Changed external calibration password");
        Ok(())
    }

    /// Associates TEDS data with a physical channel, from a virtual TEDS file
    /// or, with `None`, from the sensor's own TEDS memory.
    pub fn configure_teds(&self, physical_channel: &str, file: Option<&Path>) -> Result<()> {
        let channel = to_cstring(physical_channel)?;
        let file = opt_cstring(file.map(path_str).transpose()?)?;
        daqmx_call!(self, DAQmxConfigureTEDS(channel.as_ptr(), file.as_ptr()))?;
        Ok(())
    }

    pub fn clear_teds(&self, physical_channel: &str) -> Result<()> {
        let channel = to_cstring(physical_channel)?;
        daqmx_call!(self, DAQmxClearTEDS(channel.as_ptr()))?;
        Ok(())
    }

    pub fn write_teds_from_file(&self, physical_channel: &str, file: &Path, option: TedsWriteOption) -> Result<()> {
        let channel = to_cstring(physical_channel)?;
        let path = to_cstring(path_str(file)?)?;
        daqmx_call!(
            self,
            DAQmxWriteToTEDSFromFile(channel.as_ptr(), path.as_ptr(), option.raw())
        )?;
        info!(physical_channel, "Wrote TEDS from file");
        Ok(())
    }

    pub fn write_teds_from_array(&self, physical_channel: &str, bit_stream: &[u8], option: TedsWriteOption) -> Result<()> {
        let channel = to_cstring(physical_channel)?;
        let len = uInt32::try_from(bit_stream.len())
            .map_err(|_| DaqmxError::InvalidArgument(format!("TEDS bit stream of {} bytes", bit_stream.len())))?;
        daqmx_call!(
            self,
            DAQmxWriteToTEDSFromArray(channel.as_ptr(), bit_stream.as_ptr(), len, option.raw())
        )?;
        info!(physical_channel, bytes = bit_stream.len(), "Wrote TEDS");
        Ok(())
    }
}

/// An open external calibration session.
///
/// New constants only take effect on [`ExtCalSession::commit`]; dropping the
/// session without committing cancels it.
#[derive(Debug)]
pub struct ExtCalSession {
    daqmx: Daqmx,
    handle: CalHandle,
    device: String,
}

impl ExtCalSession {
    pub fn open(daqmx: &Daqmx, device: &str, password: &str) -> Result<Self> {
        let device_c = to_cstring(device)?;
        let password = to_cstring(password)?;
        let mut handle: CalHandle = 0;
        daqmx_call!(daqmx, DAQmxInitExtCal(device_c.as_ptr(), password.as_ptr(), &mut handle))?;
        info!(device, "Opened external calibration session");
        Ok(Self {
            daqmx: daqmx.clone(),
            handle,
            device: device.to_string(),
        })
    }

    pub fn handle(&self) -> CalHandle {
        self.handle
    }

    pub fn commit(mut self) -> Result<()> {
        self.close(sys::DAQmx_Val_Action_Commit)
    }

    pub fn cancel(mut self) -> Result<()> {
        self.close(sys::DAQmx_Val_Action_Cancel)
    }

    fn close(&mut self, action: int32) -> Result<()> {
        let handle = std::mem::take(&mut self.handle);
        daqmx_call!(&self.daqmx, DAQmxCloseExtCal(handle, action))?;
        info!(device = %self.device, committed = action == sys::DAQmx_Val_Action_Commit, "Closed external calibration session");
        Ok(())
    }
}

impl Drop for ExtCalSession {
    fn drop(&mut self) {
        if self.handle == 0 {
            return;
        }
        if let Err(err) = self.close(sys::DAQmx_Val_Action_Cancel) {
            warn!(device = %self.device, "Failed to cancel external calibration: {err}");
        }
    }
}

impl TaskRef {
    /// Nulls the offset of bridge channels; `None` nulls every channel.
    pub fn perform_bridge_offset_nulling_cal(&self, channel: Option<&str>) -> Result<()> {
        let channel_c = opt_cstring(channel)?;
        daqmx_call!(&self.daqmx, DAQmxPerformBridgeOffsetNullingCal(self.handle, channel_c.as_ptr()))?;
        Ok(())
    }
}
