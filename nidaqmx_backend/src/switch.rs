//! Switch devices: connections, relays and scan lists.
//!
//! Switch channels are named `SwitchDevice/channel` (e.g. `SC1Mod1/ch0`), relays
//! `SwitchDevice/relay` (e.g. `SC1Mod1/k0`). Topology names are the
//! `DAQmx_Val_Switch_Topology_*` strings in `nidaqmx_sys`.

use std::ptr;

use nidaqmx_sys::{int32, uInt32, TaskHandle};
use tracing::{debug, info};

use crate::driver::{daqmx_call, Daqmx};
use crate::error::{DaqmxError, Result};
use crate::physical::expand_channel_list;
use crate::task::Task;
use crate::utils::{buf_to_string, to_bool32, to_cstring};
use crate::values::{PathStatus, RelayPosition};

impl Daqmx {
    /// Connects two switch channels. With `wait_for_settling` the call
    /// returns once the relays have settled.
    pub fn switch_connect(&self, channel1: &str, channel2: &str, wait_for_settling: bool) -> Result<()> {
        let c1 = to_cstring(channel1)?;
        let c2 = to_cstring(channel2)?;
        daqmx_call!(
            self,
            DAQmxSwitchConnect(c1.as_ptr(), c2.as_ptr(), to_bool32(wait_for_settling))
        )?;
        debug!(channel1, channel2, "Switch connected");
        Ok(())
    }

    /// Connects every `a->b` pair of a connection list such as
    /// `"SC1Mod1/ch0->SC1Mod1/com0; SC1Mod1/ch1->SC1Mod1/com1"`.
    pub fn switch_connect_multi(&self, connection_list: &str, wait_for_settling: bool) -> Result<()> {
        let list = to_cstring(connection_list)?;
        daqmx_call!(self, DAQmxSwitchConnectMulti(list.as_ptr(), to_bool32(wait_for_settling)))?;
        Ok(())
    }

    pub fn switch_disconnect(&self, channel1: &str, channel2: &str, wait_for_settling: bool) -> Result<()> {
        let c1 = to_cstring(channel1)?;
        let c2 = to_cstring(channel2)?;
        daqmx_call!(
            self,
            DAQmxSwitchDisconnect(c1.as_ptr(), c2.as_ptr(), to_bool32(wait_for_settling))
        )?;
        debug!(channel1, channel2, "Switch disconnected");
        Ok(())
    }

    pub fn switch_disconnect_multi(&self, connection_list: &str, wait_for_settling: bool) -> Result<()> {
        let list = to_cstring(connection_list)?;
        daqmx_call!(self, DAQmxSwitchDisconnectMulti(list.as_ptr(), to_bool32(wait_for_settling)))?;
        Ok(())
    }

    pub fn switch_disconnect_all(&self, device: &str, wait_for_settling: bool) -> Result<()> {
        let device_c = to_cstring(device)?;
        daqmx_call!(self, DAQmxSwitchDisconnectAll(device_c.as_ptr(), to_bool32(wait_for_settling)))?;
        Ok(())
    }

    pub fn switch_set_topology_and_reset(&self, device: &str, topology: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        let topology_c = to_cstring(topology)?;
        daqmx_call!(self, DAQmxSwitchSetTopologyAndReset(device_c.as_ptr(), topology_c.as_ptr()))?;
        info!(device, topology, "Set switch topology");
        Ok(())
    }

    /// Route between two channels and whether it can be connected.
    pub fn switch_find_path(&self, channel1: &str, channel2: &str) -> Result<(String, PathStatus)> {
        let c1 = to_cstring(channel1)?;
        let c2 = to_cstring(channel2)?;
        let mut path = vec![0u8; self.config().string_buffer_size as usize];
        let mut status: int32 = 0;
        daqmx_call!(
            self,
            DAQmxSwitchFindPath(
                c1.as_ptr(),
                c2.as_ptr(),
                path.as_mut_ptr().cast(),
                path.len() as uInt32,
                &mut status,
            )
        )?;
        let status = PathStatus::from_raw(status)
            .ok_or_else(|| DaqmxError::InvalidArgument(format!("unknown switch path status {status}")))?;
        Ok((buf_to_string(&path), status))
    }

    pub fn switch_open_relays(&self, relay_list: &str, wait_for_settling: bool) -> Result<()> {
        let list = to_cstring(relay_list)?;
        daqmx_call!(self, DAQmxSwitchOpenRelays(list.as_ptr(), to_bool32(wait_for_settling)))?;
        Ok(())
    }

    pub fn switch_close_relays(&self, relay_list: &str, wait_for_settling: bool) -> Result<()> {
        let list = to_cstring(relay_list)?;
        daqmx_call!(self, DAQmxSwitchCloseRelays(list.as_ptr(), to_bool32(wait_for_settling)))?;
        Ok(())
    }

    /// Number of times the relay has switched.
    pub fn switch_relay_count(&self, relay: &str) -> Result<u32> {
        let relay_c = to_cstring(relay)?;
        let mut count: uInt32 = 0;
        daqmx_call!(self, DAQmxSwitchGetSingleRelayCount(relay_c.as_ptr(), &mut count))?;
        Ok(count)
    }

    /// Switch counts of every relay in a relay list, in list order.
    pub fn switch_relay_counts(&self, relay_list: &str) -> Result<Vec<u32>> {
        let relays = expand_channel_list(relay_list)?;
        let list = to_cstring(relay_list)?;
        let mut counts: Vec<uInt32> = vec![0; relays.len()];
        let mut read: uInt32 = 0;
        daqmx_call!(
            self,
            DAQmxSwitchGetMultiRelayCount(list.as_ptr(), counts.as_mut_ptr(), counts.len() as uInt32, &mut read)
        )?;
        counts.truncate(read as usize);
        Ok(counts)
    }

    pub fn switch_relay_position(&self, relay: &str) -> Result<RelayPosition> {
        let relay_c = to_cstring(relay)?;
        let mut position: uInt32 = 0;
        daqmx_call!(self, DAQmxSwitchGetSingleRelayPos(relay_c.as_ptr(), &mut position))?;
        relay_position(position)
    }

    pub fn switch_relay_positions(&self, relay_list: &str) -> Result<Vec<RelayPosition>> {
        let relays = expand_channel_list(relay_list)?;
        let list = to_cstring(relay_list)?;
        let mut positions: Vec<uInt32> = vec![0; relays.len()];
        let mut read: uInt32 = 0;
        daqmx_call!(
            self,
            DAQmxSwitchGetMultiRelayPos(
                list.as_ptr(),
                positions.as_mut_ptr(),
                positions.len() as uInt32,
                &mut read,
            )
        )?;
        positions.iter().take(read as usize).map(|&p| relay_position(p)).collect()
    }

    /// Blocks until every relay of the device has settled.
    pub fn switch_wait_for_settling(&self, device: &str) -> Result<()> {
        let device_c = to_cstring(device)?;
        daqmx_call!(self, DAQmxSwitchWaitForSettling(device_c.as_ptr()))?;
        Ok(())
    }
}

fn relay_position(raw: uInt32) -> Result<RelayPosition> {
    RelayPosition::from_raw(raw as int32)
        .ok_or_else(|| DaqmxError::InvalidArgument(format!("unknown relay position {raw}")))
}

impl Task {
    /// Creates a task that steps through a scan list such as
    /// `"SC1Mod1/ch0->com0; SC1Mod1/ch1->com0 &"`, advancing on the
    /// switch's advance trigger.
    pub fn switch_scan_list(daqmx: &Daqmx, scan_list: &str) -> Result<Task> {
        let list = to_cstring(scan_list)?;
        let mut handle: TaskHandle = ptr::null_mut();
        daqmx_call!(daqmx, DAQmxSwitchCreateScanList(list.as_ptr(), &mut handle))?;
        debug!(task = ?handle, scan_list, "Created switch scan list task");
        Ok(Task::from_handle(daqmx, handle))
    }
}
