//! Watchdog timer tasks.
//!
//! A watchdog drives digital lines to their expiration states when the host
//! stops resetting its timer within `timeout`.

use std::ops::{Deref, DerefMut};
use std::ptr;

use libc::c_char;
use nidaqmx_sys::{bool32, int32, uInt32, TaskHandle, FALSE};
use tracing::{debug, warn};

use crate::driver::{daqmx_call, Daqmx};
use crate::error::{DaqmxError, Result};
use crate::task::Task;
use crate::utils::to_cstring;
use crate::values::{ExpirationState, Timeout, WatchdogAction};

#[derive(Debug)]
pub struct WatchdogTask {
    task: Task,
}

impl WatchdogTask {
    /// Creates a watchdog on `device` that, on expiration, drives each line
    /// list of `expirations` to its state.
    pub fn new(
        daqmx: &Daqmx,
        device: &str,
        name: &str,
        timeout: Timeout,
        expirations: &[(&str, ExpirationState)],
    ) -> Result<Self> {
        let Some(((first_lines, first_state), rest)) = expirations.split_first() else {
            return Err(DaqmxError::InvalidArgument(
                "a watchdog task needs at least one line and expiration state".into(),
            ));
        };
        let device_c = to_cstring(device)?;
        let name_c = to_cstring(name)?;
        let lines = to_cstring(first_lines)?;
        let mut handle: TaskHandle = ptr::null_mut();
        // The pair list is terminated by a null pointer in the variadic part.
        daqmx_call!(
            daqmx,
            DAQmxCreateWatchdogTimerTask(
                device_c.as_ptr(),
                name_c.as_ptr(),
                &mut handle,
                timeout.secs(),
                lines.as_ptr(),
                first_state.raw(),
                ptr::null::<c_char>(),
            )
        )?;
        debug!(task = ?handle, device, lines = *first_lines, "Created watchdog task");
        let watchdog = Self {
            task: Task::from_handle(daqmx, handle),
        };
        for (lines, state) in rest {
            watchdog.cfg_expiration_states(lines, &[*state])?;
        }
        Ok(watchdog)
    }

    /// Sets expiration states of a channel list. `states` holds one state per
    /// channel, or a single state applied to all of them.
    pub fn cfg_expiration_states(&self, channel_names: &str, states: &[ExpirationState]) -> Result<()> {
        let names = to_cstring(channel_names)?;
        let raw: Vec<int32> = states.iter().map(|s| s.raw()).collect();
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgWatchdogDOExpirStates(self.handle, names.as_ptr(), raw.as_ptr(), raw.len() as uInt32)
        )?;
        Ok(())
    }

    fn control(&self, action: WatchdogAction) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxControlWatchdogTask(self.handle, action.raw()))?;
        Ok(())
    }

    /// Restarts the countdown. Call more often than `timeout`.
    pub fn reset_timer(&self) -> Result<()> {
        self.control(WatchdogAction::ResetTimer)
    }

    /// Releases the lines after an expiration so they can be driven again.
    pub fn clear_expiration(&self) -> Result<()> {
        self.control(WatchdogAction::ClearExpiration)?;
        warn!(task = ?self.handle, "Cleared watchdog expiration");
        Ok(())
    }

    pub fn has_expired(&self) -> Result<bool> {
        let mut expired: bool32 = FALSE;
        daqmx_call!(&self.daqmx, DAQmxGetWatchdogHasExpired(self.handle, &mut expired))?;
        Ok(expired != FALSE)
    }

    pub fn into_task(self) -> Task {
        self.task
    }
}

impl Deref for WatchdogTask {
    type Target = Task;

    fn deref(&self) -> &Task {
        &self.task
    }
}

impl DerefMut for WatchdogTask {
    fn deref_mut(&mut self) -> &mut Task {
        &mut self.task
    }
}
