//! Driver event callbacks.
//!
//! Closures are boxed together with a [`TaskRef`] and handed to the driver
//! as `callbackData`; a generic `extern "C"` trampoline per event type
//! unpacks them. The boxes are owned by the [`Task`], so they stay alive
//! until the task is cleared, after which the driver no longer calls them.
//! Closures run on a driver thread and must not block for long: the driver
//! does not deliver further events for the task meanwhile.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use indexmap::IndexMap;
use libc::c_void;
use ndarray::{s, Array2};
use nidaqmx_sys::{int32, uInt32, TaskHandle};
use parking_lot::Mutex;
use tracing::{debug, error, warn};

use crate::driver::daqmx_call;
use crate::error::{DaqmxError, Result};
use crate::task::{Task, TaskRef};
use crate::values::{DataLayout, EveryNSamplesEvent, Signal, Timeout};

/// A user closure plus the task it is registered on.
struct Callback<F> {
    task: TaskRef,
    func: Mutex<F>,
}

impl<F> Callback<F> {
    fn boxed(task: &TaskRef, func: F) -> Box<Self> {
        Box::new(Self {
            task: task.clone(),
            func: Mutex::new(func),
        })
    }

    fn data_ptr(&self) -> *mut c_void {
        (self as *const Self).cast_mut().cast()
    }
}

type Boxed = Box<dyn Any + Send>;

/// Callback boxes the driver holds pointers to.
#[derive(Default)]
pub(crate) struct Registrations {
    every_n: Option<(EveryNSamplesEvent, u32, Boxed)>,
    done: Option<Boxed>,
    signals: IndexMap<Signal, Boxed>,
}

impl std::fmt::Debug for Registrations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registrations")
            .field("every_n", &self.every_n.as_ref().map(|(event, n, _)| (event, n)))
            .field("done", &self.done.is_some())
            .field("signals", &self.signals.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".into()
    }
}

// Unwinding across the FFI boundary is undefined, so panics stop here.
fn run_guarded(event: &'static str, body: impl FnOnce()) {
    if let Err(payload) = catch_unwind(AssertUnwindSafe(body)) {
        let err = DaqmxError::CallbackPanicked(panic_message(payload.as_ref()));
        error!(event, "{err}");
    }
}

unsafe extern "C" fn every_n_trampoline<F>(
    _task: TaskHandle,
    _event_type: int32,
    n_samples: uInt32,
    data: *mut c_void,
) -> int32
where
    F: FnMut(&TaskRef, u32) + Send + 'static,
{
    let callback = &*(data as *const Callback<F>);
    run_guarded("every_n_samples", || {
        let mut func = callback.func.lock();
        func(&callback.task, n_samples)
    });
    0
}

unsafe extern "C" fn done_trampoline<F>(_task: TaskHandle, status: int32, data: *mut c_void) -> int32
where
    F: FnMut(&TaskRef, Result<()>) + Send + 'static,
{
    let callback = &*(data as *const Callback<F>);
    run_guarded("done", || {
        let status = callback.task.daqmx.check(status, "DAQmxRegisterDoneEvent").map(|_| ());
        let mut func = callback.func.lock();
        func(&callback.task, status)
    });
    0
}

unsafe extern "C" fn signal_trampoline<F>(_task: TaskHandle, _signal: int32, data: *mut c_void) -> int32
where
    F: FnMut(&TaskRef) + Send + 'static,
{
    let callback = &*(data as *const Callback<F>);
    run_guarded("signal", || {
        let mut func = callback.func.lock();
        func(&callback.task)
    });
    0
}

impl Task {
    /// Calls `callback` with the sample count every time `n` samples per
    /// channel have been acquired into (or transferred from) the buffer.
    /// Register before starting the task. Replaces nothing: unregister an
    /// existing callback first.
    pub fn register_every_n_samples<F>(&mut self, event: EveryNSamplesEvent, n: u32, callback: F) -> Result<()>
    where
        F: FnMut(&TaskRef, u32) + Send + 'static,
    {
        let boxed = Callback::boxed(&**self, callback);
        daqmx_call!(
            &self.daqmx,
            DAQmxRegisterEveryNSamplesEvent(
                self.handle,
                event.raw(),
                n,
                0,
                Some(every_n_trampoline::<F>),
                boxed.data_ptr(),
            )
        )?;
        debug!(task = ?self.handle, ?event, n, "Registered every-N-samples callback");
        self.registrations_mut().every_n = Some((event, n, boxed as Boxed));
        Ok(())
    }

    pub fn unregister_every_n_samples(&mut self) -> Result<()> {
        let Some((event, n, _)) = &self.registrations_mut().every_n else {
            return Ok(());
        };
        let (event, n) = (*event, *n);
        daqmx_call!(
            &self.daqmx,
            DAQmxRegisterEveryNSamplesEvent(self.handle, event.raw(), n, 0, None, ptr::null_mut())
        )?;
        self.registrations_mut().every_n = None;
        Ok(())
    }

    /// Calls `callback` once when the task stops, with the error that stopped
    /// it if any.
    pub fn register_done<F>(&mut self, callback: F) -> Result<()>
    where
        F: FnMut(&TaskRef, Result<()>) + Send + 'static,
    {
        let boxed = Callback::boxed(&**self, callback);
        daqmx_call!(
            &self.daqmx,
            DAQmxRegisterDoneEvent(self.handle, 0, Some(done_trampoline::<F>), boxed.data_ptr())
        )?;
        debug!(task = ?self.handle, "Registered done callback");
        self.registrations_mut().done = Some(boxed as Boxed);
        Ok(())
    }

    pub fn unregister_done(&mut self) -> Result<()> {
        if self.registrations_mut().done.is_none() {
            return Ok(());
        }
        daqmx_call!(&self.daqmx, DAQmxRegisterDoneEvent(self.handle, 0, None, ptr::null_mut()))?;
        self.registrations_mut().done = None;
        Ok(())
    }

    /// Calls `callback` whenever `signal` fires, e.g. on every
    /// [`Signal::SampleClock`] of a hardware-timed task.
    pub fn register_signal<F>(&mut self, signal: Signal, callback: F) -> Result<()>
    where
        F: FnMut(&TaskRef) + Send + 'static,
    {
        let boxed = Callback::boxed(&**self, callback);
        daqmx_call!(
            &self.daqmx,
            DAQmxRegisterSignalEvent(
                self.handle,
                signal.raw(),
                0,
                Some(signal_trampoline::<F>),
                boxed.data_ptr(),
            )
        )?;
        debug!(task = ?self.handle, ?signal, "Registered signal callback");
        self.registrations_mut().signals.insert(signal, boxed as Boxed);
        Ok(())
    }

    pub fn unregister_signal(&mut self, signal: Signal) -> Result<()> {
        if !self.registrations_mut().signals.contains_key(&signal) {
            return Ok(());
        }
        daqmx_call!(
            &self.daqmx,
            DAQmxRegisterSignalEvent(self.handle, signal.raw(), 0, None, ptr::null_mut())
        )?;
        self.registrations_mut().signals.shift_remove(&signal);
        Ok(())
    }

    /// Turns an analog input task into a stream of `[channels, samples]`
    /// blocks of `block_size` samples per channel, read on the driver's
    /// callback thread. Register before starting the task.
    pub fn analog_stream(&mut self, block_size: u32, timeout: Timeout) -> Result<AnalogStream> {
        let channels = self.read_num_chans()? as usize;
        let (sender, receiver) = channel::unbounded();
        self.register_every_n_samples(
            EveryNSamplesEvent::AcquiredIntoBuffer,
            block_size,
            move |task: &TaskRef, n_samples: u32| read_block(task, channels, n_samples, timeout, &sender),
        )?;
        Ok(AnalogStream { receiver })
    }
}

fn read_block(task: &TaskRef, channels: usize, n_samples: u32, timeout: Timeout, sender: &Sender<Result<Array2<f64>>>) {
    let mut block = Array2::<f64>::zeros((channels, n_samples as usize));
    let result = task
        .read_analog_f64(timeout, DataLayout::GroupByChannel, &mut block)
        .map(|read| block.slice_move(s![.., ..read]));
    if let Err(err) = &result {
        warn!(task = ?task.handle, "Stream read failed: {err}");
    }
    // A dropped receiver just means nobody is listening any more.
    let _ = sender.send(result);
}

/// Consumer side of [`Task::analog_stream`]. Ends when the task is dropped.
#[derive(Debug)]
pub struct AnalogStream {
    receiver: Receiver<Result<Array2<f64>>>,
}

impl AnalogStream {
    pub fn recv_timeout(&self, timeout: Duration) -> std::result::Result<Result<Array2<f64>>, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Blocks already acquired, without waiting.
    pub fn try_iter(&self) -> impl Iterator<Item = Result<Array2<f64>>> + '_ {
        self.receiver.try_iter()
    }
}

impl Iterator for AnalogStream {
    type Item = Result<Array2<f64>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn panics_are_contained() {
        run_guarded("test", || panic!("boom"));
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }

    #[test]
    fn registrations_start_empty() {
        let regs = Registrations::default();
        let text = format!("{regs:?}");
        assert!(text.contains("done: false"), "{text}");
    }
}
