//! Start, reference and advance triggers, signal export and terminal routing.

use tracing::debug;

use crate::driver::{daqmx_call, Daqmx};
use crate::error::Result;
use crate::task::TaskRef;
use crate::utils::to_cstring;
use crate::values::{Edge, PatternCondition, Polarity, Signal, WindowCondition};

impl TaskRef {
    //********** Start trigger **********

    pub fn disable_start_trig(&self) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxDisableStartTrig(self.handle))?;
        Ok(())
    }

    pub fn cfg_dig_edge_start_trig(&self, source: &str, edge: Edge) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgDigEdgeStartTrig(self.handle, source_c.as_ptr(), edge.raw())
        )?;
        debug!(task = ?self.handle, source, ?edge, "Configured digital start trigger");
        Ok(())
    }

    pub fn cfg_anlg_edge_start_trig(&self, source: &str, slope: Edge, level: f64) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgAnlgEdgeStartTrig(self.handle, source_c.as_ptr(), slope.raw(), level)
        )?;
        Ok(())
    }

    pub fn cfg_anlg_window_start_trig(
        &self,
        source: &str,
        when: WindowCondition,
        top: f64,
        bottom: f64,
    ) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgAnlgWindowStartTrig(self.handle, source_c.as_ptr(), when.raw(), top, bottom)
        )?;
        Ok(())
    }

    /// `pattern` is a string of `0`, `1` and `X` (don't care), most
    /// significant line first.
    pub fn cfg_dig_pattern_start_trig(&self, source: &str, pattern: &str, when: PatternCondition) -> Result<()> {
        let source_c = to_cstring(source)?;
        let pattern_c = to_cstring(pattern)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgDigPatternStartTrig(self.handle, source_c.as_ptr(), pattern_c.as_ptr(), when.raw())
        )?;
        Ok(())
    }

    //********** Reference trigger **********

    pub fn disable_ref_trig(&self) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxDisableRefTrig(self.handle))?;
        Ok(())
    }

    /// `pretrigger_samples` per channel are kept from before the trigger.
    pub fn cfg_dig_edge_ref_trig(&self, source: &str, edge: Edge, pretrigger_samples: u32) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgDigEdgeRefTrig(self.handle, source_c.as_ptr(), edge.raw(), pretrigger_samples)
        )?;
        Ok(())
    }

    pub fn cfg_anlg_edge_ref_trig(&self, source: &str, slope: Edge, level: f64, pretrigger_samples: u32) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgAnlgEdgeRefTrig(self.handle, source_c.as_ptr(), slope.raw(), level, pretrigger_samples)
        )?;
        Ok(())
    }

    pub fn cfg_anlg_window_ref_trig(
        &self,
        source: &str,
        when: WindowCondition,
        top: f64,
        bottom: f64,
        pretrigger_samples: u32,
    ) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgAnlgWindowRefTrig(
                self.handle,
                source_c.as_ptr(),
                when.raw(),
                top,
                bottom,
                pretrigger_samples,
            )
        )?;
        Ok(())
    }

    pub fn cfg_dig_pattern_ref_trig(
        &self,
        source: &str,
        pattern: &str,
        when: PatternCondition,
        pretrigger_samples: u32,
    ) -> Result<()> {
        let source_c = to_cstring(source)?;
        let pattern_c = to_cstring(pattern)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgDigPatternRefTrig(
                self.handle,
                source_c.as_ptr(),
                pattern_c.as_ptr(),
                when.raw(),
                pretrigger_samples,
            )
        )?;
        Ok(())
    }

    //********** Advance trigger **********

    pub fn disable_adv_trig(&self) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxDisableAdvTrig(self.handle))?;
        Ok(())
    }

    pub fn cfg_dig_edge_adv_trig(&self, source: &str, edge: Edge) -> Result<()> {
        let source_c = to_cstring(source)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCfgDigEdgeAdvTrig(self.handle, source_c.as_ptr(), edge.raw())
        )?;
        Ok(())
    }

    /// Fires a software trigger, e.g. [`Signal::AdvanceTrigger`] on a switch scan.
    pub fn send_software_trigger(&self, trigger: Signal) -> Result<()> {
        daqmx_call!(&self.daqmx, DAQmxSendSoftwareTrigger(self.handle, trigger.raw()))?;
        Ok(())
    }

    /// Routes one of the task's signals to an output terminal, such as the
    /// start trigger to `/Dev1/PFI0` so other devices can follow it.
    pub fn export_signal(&self, signal: Signal, output_terminal: &str) -> Result<()> {
        let terminal = to_cstring(output_terminal)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxExportSignal(self.handle, signal.raw(), terminal.as_ptr())
        )?;
        debug!(task = ?self.handle, ?signal, output_terminal, "Exported signal");
        Ok(())
    }
}

impl Daqmx {
    /// Creates a route between two terminals that stays until disconnected
    /// or the device is reset. Unlike [`TaskRef::export_signal`] it is not
    /// tied to a task.
    pub fn connect_terms(&self, source: &str, destination: &str, polarity: Polarity) -> Result<()> {
        let source_c = to_cstring(source)?;
        let destination_c = to_cstring(destination)?;
        daqmx_call!(
            self,
            DAQmxConnectTerms(source_c.as_ptr(), destination_c.as_ptr(), polarity.raw())
        )?;
        debug!(source, destination, ?polarity, "Connected terminals");
        Ok(())
    }

    pub fn disconnect_terms(&self, source: &str, destination: &str) -> Result<()> {
        let source_c = to_cstring(source)?;
        let destination_c = to_cstring(destination)?;
        daqmx_call!(self, DAQmxDisconnectTerms(source_c.as_ptr(), destination_c.as_ptr()))?;
        debug!(source, destination, "Disconnected terminals");
        Ok(())
    }

    /// Sets an output terminal to high impedance.
    pub fn tristate_output_term(&self, output_terminal: &str) -> Result<()> {
        let terminal = to_cstring(output_terminal)?;
        daqmx_call!(self, DAQmxTristateOutputTerm(terminal.as_ptr()))?;
        Ok(())
    }
}
