//! System-wide queries and device control.

use std::fmt;

use indexmap::IndexMap;
use nidaqmx_sys::uInt32;
use serde::Serialize;
use tracing::{debug, info};

use crate::driver::{daqmx_call, daqmx_raw, Daqmx};
use crate::error::Result;
use crate::utils::{split_list, to_cstring};
use crate::values::{BusType, ProductCategory};

/// Installed driver version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct DriverVersion {
    pub major: u32,
    pub minor: u32,
    pub update: u32,
}

impl fmt::Display for DriverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)
    }
}

/// Snapshot of a device's identity and resources.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub name: String,
    pub product_type: String,
    pub serial_number: u32,
    pub is_simulated: bool,
    pub product_category: Option<ProductCategory>,
    pub bus_type: Option<BusType>,
    pub ai_physical_chans: Vec<String>,
    pub ao_physical_chans: Vec<String>,
    pub di_lines: Vec<String>,
    pub do_lines: Vec<String>,
    pub ci_physical_chans: Vec<String>,
    pub co_physical_chans: Vec<String>,
}

impl Daqmx {
    fn sys_list(&self, function: &'static str, list: Result<String>) -> Result<Vec<String>> {
        let names = split_list(&list?);
        debug!(function, count = names.len(), "Queried system list");
        Ok(names)
    }

    /// Names of the devices configured in NI MAX.
    pub fn device_names(&self) -> Result<Vec<String>> {
        let list = self.query_string("DAQmxGetSysDevNames", |buf, size| {
            daqmx_raw!(self, DAQmxGetSysDevNames(buf, size))
        });
        self.sys_list("DAQmxGetSysDevNames", list)
    }

    pub fn global_channels(&self) -> Result<Vec<String>> {
        let list = self.query_string("DAQmxGetSysGlobalChans", |buf, size| {
            daqmx_raw!(self, DAQmxGetSysGlobalChans(buf, size))
        });
        self.sys_list("DAQmxGetSysGlobalChans", list)
    }

    pub fn saved_tasks(&self) -> Result<Vec<String>> {
        let list = self.query_string("DAQmxGetSysTasks", |buf, size| {
            daqmx_raw!(self, DAQmxGetSysTasks(buf, size))
        });
        self.sys_list("DAQmxGetSysTasks", list)
    }

    pub fn saved_scales(&self) -> Result<Vec<String>> {
        let list = self.query_string("DAQmxGetSysScales", |buf, size| {
            daqmx_raw!(self, DAQmxGetSysScales(buf, size))
        });
        self.sys_list("DAQmxGetSysScales", list)
    }

    pub fn driver_version(&self) -> Result<DriverVersion> {
        let (mut major, mut minor, mut update): (uInt32, uInt32, uInt32) = (0, 0, 0);
        daqmx_call!(self, DAQmxGetSysNIDAQMajorVersion(&mut major))?;
        daqmx_call!(self, DAQmxGetSysNIDAQMinorVersion(&mut minor))?;
        // Runtimes before 9.0 have no update version.
        match daqmx_call!(self, DAQmxGetSysNIDAQUpdateVersion(&mut update)) {
            Ok(_) => {}
            Err(err) if err.is_missing_function() => update = 0,
            Err(err) => return Err(err),
        }
        Ok(DriverVersion { major, minor, update })
    }

    pub fn device_info(&self, device: &str) -> Result<DeviceInfo> {
        Ok(DeviceInfo {
            name: device.to_string(),
            product_type: self.dev_product_type(device)?,
            serial_number: self.dev_serial_num(device)?,
            is_simulated: self.dev_is_simulated(device)?,
            product_category: self.dev_product_category(device)?,
            bus_type: self.dev_bus_type(device)?,
            ai_physical_chans: self.dev_ai_physical_chans(device)?,
            ao_physical_chans: self.dev_ao_physical_chans(device)?,
            di_lines: self.dev_di_lines(device)?,
            do_lines: self.dev_do_lines(device)?,
            ci_physical_chans: self.dev_ci_physical_chans(device)?,
            co_physical_chans: self.dev_co_physical_chans(device)?,
        })
    }

    /// Every configured device, in the order NI MAX lists them.
    pub fn devices(&self) -> Result<IndexMap<String, DeviceInfo>> {
        self.device_names()?
            .into_iter()
            .map(|name| {
                let info = self.device_info(&name)?;
                Ok((name, info))
            })
            .collect()
    }

    /// Aborts the device's tasks and returns it to its power-on state.
    pub fn reset_device(&self, device: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        daqmx_call!(self, DAQmxResetDevice(device_c.as_ptr()))?;
        info!(device, "Reset device");
        Ok(())
    }

    pub fn self_test_device(&self, device: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        daqmx_call!(self, DAQmxSelfTestDevice(device_c.as_ptr()))?;
        info!(device, "Device passed self test");
        Ok(())
    }
}
