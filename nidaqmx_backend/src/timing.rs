//! Sample timing, buffers and the reference clock.

use nidaqmx_sys::{bool32, FALSE};
use tracing::debug;

use crate::driver::{daqmx_call, daqmx_raw};
use crate::error::Result;
use crate::task::TaskRef;
use crate::utils::to_cstring;
use crate::values::{Edge, RegenMode, SampleMode, Timeout};

impl TaskRef {
    /// Times the task with a sample clock. An empty `source` uses the
    /// device's onboard clock. For finite tasks `samples_per_chan` is the
    /// number of samples; for continuous tasks it sizes the buffer.
    pub fn cfg_samp_clk_timing(
        &self,
        source: &str,
        rate: f64,
        active_edge: Edge,
        sample_mode: SampleMode,
        samples_per_chan: u64,
    ) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgSampClkTiming(
                self.handle,
                source_c.as_ptr(),
                rate,
                active_edge.raw(),
                sample_mode.raw(),
                samples_per_chan,
            )
        )?;
        debug!(task = ?self.handle, source, rate, ?sample_mode, samples_per_chan, "Configured sample clock");
        Ok(())
    }

    /// Timing implied by the channel itself, e.g. counter pulse trains.
    pub fn cfg_implicit_timing(&self, sample_mode: SampleMode, samples_per_chan: u64) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgImplicitTiming(self.handle, sample_mode.raw(), samples_per_chan)
        )?;
        Ok(())
    }

    pub fn cfg_handshaking_timing(&self, sample_mode: SampleMode, samples_per_chan: u64) -> Result<()> {
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgHandshakingTiming(self.handle, sample_mode.raw(), samples_per_chan)
        )?;
        Ok(())
    }

    /// Samples digital lines whenever one of `rising_edge_chan` rises or one
    /// of `falling_edge_chan` falls.
    pub fn cfg_change_detection_timing(
        &self,
        rising_edge_chan: &str,
        falling_edge_chan: &str,
        sample_mode: SampleMode,
        samples_per_chan: u64,
    ) -> Result<()> {
        let rising = to_cstring(rising_edge_chan)?;
        let falling = to_cstring(falling_edge_chan)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgChangeDetectionTiming(
                self.handle,
                rising.as_ptr(),
                falling.as_ptr(),
                sample_mode.raw(),
                samples_per_chan,
            )
        )?;
        Ok(())
    }

    /// Overrides the automatically chosen input buffer size.
    pub fn cfg_input_buffer(&self, samples_per_chan: u32) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxCfgInputBuffer(self.handle, samples_per_chan))?;
        Ok(())
    }

    /// Overrides the output buffer size. `0` disables the buffer for
    /// unbuffered static writes.
    pub fn cfg_output_buffer(&self, samples_per_chan: u32) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxCfgOutputBuffer(self.handle, samples_per_chan))?;
        debug!(task = ?self.handle, samples_per_chan, "Configured output buffer");
        Ok(())
    }

    /// Phase-locks the device timebase to an external reference clock,
    /// e.g. `"PXI_Clk10"` at 10 MHz.
    pub fn set_ref_clk(&self, source: &str, rate: f64) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(&self.daqmx, DAQmxSetRefClkSrc(self.handle, source_c.as_ptr()))?;
        daqmx_call!(&self.daqmx, DAQmxSetRefClkRate(self.handle, rate))?;
        debug!(task = ?self.handle, source, rate, "Configured reference clock");
        Ok(())
    }

    pub fn ref_clk_src(&self) -> Result<String> {
        self.daqmx.query_string("DAQmxGetRefClkSrc", |buf, size| {
            daqmx_raw!(&self.daqmx, DAQmxGetRefClkSrc(self.handle, buf, size))
        })
    }

    pub fn ref_clk_rate(&self) -> Result<f64> {
        let mut rate: f64 = 0.0;
        daqmx_call!(&self.daqmx, DAQmxGetRefClkRate(self.handle, &mut rate))?;
        Ok(rate)
    }

    /// Whether the output buffer may be regenerated. Streaming writers
    /// disallow it so stale samples are never replayed.
    pub fn set_regen_mode(&self, mode: RegenMode) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxSetWriteRegenMode(self.handle, mode.raw()))?;
        Ok(())
    }

    pub fn regen_mode(&self) -> Result<Option<RegenMode>> {
        let mut raw: i32 = 0;
        daqmx_call!(&self.daqmx, DAQmxGetWriteRegenMode(self.handle, &mut raw))?;
        Ok(RegenMode::from_raw(raw))
    }

    /// Waits for the next sample clock of a hardware-timed single-point
    /// task. Returns whether the caller was late for it.
    pub fn wait_for_next_sample_clock(&self, timeout: Timeout) -> Result<bool> {
        let mut is_late: bool32 = FALSE;
        daqmx_call!(
            &self.daqmx,
            DAQmxWaitForNextSampleClock(self.handle, timeout.secs(), &mut is_late)
        )?;
        Ok(is_late != FALSE)
    }
}
