//! Streaming long output signals through a small driver buffer.

use std::cmp::min;
use std::ops::Range;

use ndarray::{s, Array2};
use tracing::debug;

use crate::error::{DaqmxError, Result};
use crate::task::TaskRef;
use crate::values::{DataLayout, RegenMode, Timeout};

/// Marches through `0..end_pos` in steps of `interval`, starting over from
/// the beginning after reaching the end.
#[derive(Debug, Clone)]
pub struct StreamCounter {
    pos: usize,
    end_pos: usize,
    interval: usize,
}

impl StreamCounter {
    pub fn new(end_pos: usize, interval: usize) -> Self {
        Self {
            pos: 0,
            end_pos,
            interval,
        }
    }

    pub fn next_pos(&self) -> usize {
        min(self.pos + self.interval, self.end_pos)
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The next chunk. The last chunk of a pass may be shorter than `interval`.
    pub fn tick_next(&mut self) -> Range<usize> {
        let chunk = self.pos..self.next_pos();
        self.pos = chunk.end;
        if self.pos == self.end_pos {
            self.pos = 0
        }
        chunk
    }
}

impl TaskRef {
    /// Generates `signal` (`[channels, samples]`) on an analog output task
    /// whose channels and sample clock are already configured.
    ///
    /// The output buffer holds `chunk` samples per channel and regeneration is
    /// disabled, so each write blocks until the device has room for the next
    /// chunk. Returns once the whole signal has been generated and the task
    /// stopped.
    pub fn stream_analog_output(&self, signal: &Array2<f64>, chunk: usize, timeout: Timeout) -> Result<usize> {
        let seq_len = signal.ncols();
        if seq_len == 0 || chunk == 0 {
            return Err(DaqmxError::InvalidArgument(format!(
                "cannot stream {seq_len} samples in chunks of {chunk}"
            )));
        }
        let buffer_size = min(seq_len, chunk);
        let mut counter = StreamCounter::new(seq_len, buffer_size);

        self.cfg_output_buffer(buffer_size as u32)?;
        self.set_regen_mode(RegenMode::DoNotAllowRegen)?;

        let mut range = counter.tick_next();
        let mut written = self.write_analog_f64(
            &signal.slice(s![.., range.clone()]),
            false,
            timeout,
            DataLayout::GroupByChannel,
        )?;
        self.start()?;
        debug!(task = ?self.handle, seq_len, buffer_size, "Streaming analog output");

        while range.end != seq_len {
            range = counter.tick_next();
            written += self.write_analog_f64(
                &signal.slice(s![.., range.clone()]),
                false,
                timeout,
                DataLayout::GroupByChannel,
            )?;
        }
        self.wait_until_done(timeout)?;
        self.stop()?;
        debug!(task = ?self.handle, written, "Stream finished");
        Ok(written)
    }
}
