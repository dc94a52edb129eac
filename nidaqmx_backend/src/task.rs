//! Task lifecycle.
//!
//! [`Task`] owns a driver task handle: it creates (or loads) the task and
//! stops and clears it on drop. Everything that only needs the handle lives
//! on [`TaskRef`], which `Task` derefs to; callbacks receive a `TaskRef` so
//! they can read from the task that raised them.

use std::ops::Deref;
use std::ptr;

use nidaqmx_sys::{bool32, int32, uInt32, TaskHandle, FALSE};
use tracing::{debug, error};

use crate::driver::{daqmx_call, daqmx_raw, Daqmx};
use crate::error::Result;
use crate::events::Registrations;
use crate::utils::to_cstring;
use crate::values::{TaskAction, Timeout};

/// Non-owning view of a task handle.
#[derive(Clone)]
pub struct TaskRef {
    pub(crate) daqmx: Daqmx,
    pub(crate) handle: TaskHandle,
}

// The handle is an opaque token the driver owns; it is never dereferenced
// here and the driver's task functions are thread-safe.
unsafe impl Send for TaskRef {}
unsafe impl Sync for TaskRef {}

impl TaskRef {
    /// # Safety
    /// `handle` must be a live task handle of the runtime behind `daqmx`.
    pub unsafe fn from_raw(daqmx: &Daqmx, handle: TaskHandle) -> Self {
        Self {
            daqmx: daqmx.clone(),
            handle,
        }
    }

    pub fn handle(&self) -> TaskHandle {
        self.handle
    }

    pub fn daqmx(&self) -> &Daqmx {
        &self.daqmx
    }

    pub fn start(&self) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxStartTask(self.handle))?;
        debug!(task = ?self.handle, "Started task");
        Ok(())
    }

    pub fn stop(&self) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxStopTask(self.handle))?;
        debug!(task = ?self.handle, "Stopped task");
        Ok(())
    }

    /// Blocks until a finite task has acquired or generated all its samples.
    pub fn wait_until_done(&self, timeout: Timeout) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxWaitUntilTaskDone(self.handle, timeout.secs()))?;
        Ok(())
    }

    pub fn is_done(&self) -> Result<bool> {
        let mut done: bool32 = FALSE;
        daqmx_call!(&self.daqmx, DAQmxIsTaskDone(self.handle, &mut done))?;
        Ok(done != FALSE)
    }

    /// Moves the task through the driver's state model (verify, commit,
    /// reserve, ...) without starting it.
    pub fn control(&self, action: TaskAction) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxTaskControl(self.handle, action.raw()))?;
        debug!(task = ?self.handle, ?action, "Task control");
        Ok(())
    }

    /// Adds saved global channels (comma-separated) to the task.
    pub fn add_global_chans(&self, channel_names: &str) -> Result<()> {
        let names = to_cstring(channel_names)?;
        daqmx_call!(&self.daqmx, DAQmxAddGlobalChansToTask(self.handle, names.as_ptr()))?;
        Ok(())
    }

    pub fn name(&self) -> Result<String> {
        self.daqmx.query_string("DAQmxGetTaskName", |buf, size| {
            daqmx_raw!(&self.daqmx, DAQmxGetTaskName(self.handle, buf, size))
        })
    }

    pub fn num_chans(&self) -> Result<u32> {
        let mut n: uInt32 = 0;
        daqmx_call!(&self.daqmx, DAQmxGetTaskNumChans(self.handle, &mut n))?;
        Ok(n)
    }

    pub fn num_devices(&self) -> Result<u32> {
        let mut n: uInt32 = 0;
        daqmx_call!(&self.daqmx, DAQmxGetTaskNumDevices(self.handle, &mut n))?;
        Ok(n)
    }

    /// Virtual channel names, in creation order.
    pub fn channels(&self) -> Result<Vec<String>> {
        // Indices of the GetNth functions start at 1.
        (1..=self.num_chans()?)
            .map(|index| {
                self.daqmx.query_string("DAQmxGetNthTaskChannel", |buf, size| {
                    daqmx_raw!(&self.daqmx, DAQmxGetNthTaskChannel(self.handle, index, buf, size as int32))
                })
            })
            .collect()
    }

    /// Devices the task's channels live on.
    pub fn devices(&self) -> Result<Vec<String>> {
        (1..=self.num_devices()?)
            .map(|index| {
                self.daqmx.query_string("DAQmxGetNthTaskDevice", |buf, size| {
                    daqmx_raw!(&self.daqmx, DAQmxGetNthTaskDevice(self.handle, index, buf, size as int32))
                })
            })
            .collect()
    }

    /// Channels a read returns data for, which can be a subset of
    /// [`TaskRef::channels`] when `ChannelsToRead` is set.
    pub fn read_channels(&self) -> Result<Vec<String>> {
        let mut channels = Vec::new();
        for index in 1..=self.read_num_chans()? {
            channels.push(self.daqmx.query_string("DAQmxGetNthTaskReadChannel", |buf, size| {
                daqmx_raw!(&self.daqmx, DAQmxGetNthTaskReadChannel(self.handle, index, buf, size as int32))
            })?);
        }
        Ok(channels)
    }
}

impl std::fmt::Debug for TaskRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TaskRef").field(&self.handle).finish()
    }
}

/// An owned DAQmx task. Stopped and cleared on drop.
pub struct Task {
    raw: TaskRef,
    registrations: Registrations,
}

impl Task {
    /// Creates a task. An empty `name` lets the driver pick a unique one.
    pub fn new(daqmx: &Daqmx, name: &str) -> Result<Self> {
        let name_c = to_cstring(name)?;
        let mut handle: TaskHandle = ptr::null_mut();
        daqmx_call!(daqmx, DAQmxCreateTask(name_c.as_ptr(), &mut handle))?;
        debug!(task = ?handle, name, "Created task");
        Ok(Self::from_handle(daqmx, handle))
    }

    /// Loads a task saved in NI MAX (or with [`Task::save`]).
    pub fn load(daqmx: &Daqmx, saved_name: &str) -> Result<Self> {
        let name_c = to_cstring(saved_name)?;
        let mut handle: TaskHandle = ptr::null_mut();
        daqmx_call!(daqmx, DAQmxLoadTask(name_c.as_ptr(), &mut handle))?;
        debug!(task = ?handle, saved_name, "Loaded task");
        Ok(Self::from_handle(daqmx, handle))
    }

    pub(crate) fn from_handle(daqmx: &Daqmx, handle: TaskHandle) -> Self {
        Self {
            raw: TaskRef {
                daqmx: daqmx.clone(),
                handle,
            },
            registrations: Registrations::default(),
        }
    }

    /// Clears the task now and reports the driver's status, which `Drop`
    /// can only log.
    pub fn clear(mut self) -> Result<()> {
        let handle = std::mem::replace(&mut self.raw.handle, ptr::null_mut());
        daqmx_call!(&self.raw.daqmx, DAQmxClearTask(handle))?;
        debug!(task = ?handle, "Cleared task");
        Ok(())
    }

    /// A non-owning handle, e.g. to move into another thread while this
    /// `Task` keeps the task alive.
    pub fn task_ref(&self) -> TaskRef {
        self.raw.clone()
    }

    pub(crate) fn registrations_mut(&mut self) -> &mut Registrations {
        &mut self.registrations
    }
}

impl Deref for Task {
    type Target = TaskRef;

    fn deref(&self) -> &TaskRef {
        &self.raw
    }
}

impl std::fmt::Debug for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Task")
            .field("handle", &self.raw.handle)
            .field("registrations", &self.registrations)
            .finish()
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        if self.raw.handle.is_null() {
            return;
        }
        // Registrations drop after this body, once the driver can no longer
        // call into them.
        if let Err(err) = self.raw.stop() {
            error!(task = ?self.raw.handle, "Failed to stop task on drop: {err}");
        }
        match daqmx_call!(&self.raw.daqmx, DAQmxClearTask(self.raw.handle)) {
            Ok(_) => debug!(task = ?self.raw.handle, "Cleared task"),
            Err(err) => error!(task = ?self.raw.handle, "Failed to clear task on drop: {err}"),
        }
    }
}
