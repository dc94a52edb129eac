//! Virtual channel creation.
//!
//! Arguments follow the C functions in order. `name` is the name to give the
//! virtual channel (`None` uses the physical channel name), and
//! `custom_scale` is only read by the driver when the units are
//! `FromCustomScale`.

#![allow(clippy::too_many_arguments)]

use tracing::debug;

use crate::driver::daqmx_call;
use crate::error::Result;
use crate::task::TaskRef;
use crate::utils::{opt_cstring, to_bool32, to_cstring};
use crate::values::{
    AngleUnits, CjcSource, CountDirection, CurrentUnits, Edge, EncoderType, EncoderZIndexPhase, ExcitationSource,
    FrequencyUnits, LengthUnits, Level, LineGrouping, MeasurementMethod, ResistanceConfig, ResistanceUnits, RtdType,
    ShuntResistorLocation, TemperatureUnits, TerminalConfig, ThermocoupleType, TimeUnits, VoltageUnits,
};

/// Z-index reset of an encoder channel: the count is set to `value` when
/// the A, B and Z signals are in `phase`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZIndex {
    pub value: f64,
    pub phase: EncoderZIndexPhase,
}

impl TaskRef {
    //********** Analog input **********

    pub fn create_ai_voltage_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        terminal_config: TerminalConfig,
        min: f64,
        max: f64,
        units: VoltageUnits,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAIVoltageChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                terminal_config.raw(),
                min,
                max,
                units.raw(),
                scale.as_ptr(),
            )
        )?;
        debug!(task = ?self.handle, physical_channel, "Created AI voltage channel");
        Ok(())
    }

    /// Voltage channel scaled by the TEDS data configured on the physical channel.
    pub fn create_teds_ai_voltage_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        terminal_config: TerminalConfig,
        min: f64,
        max: f64,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateTEDSAIVoltageChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                terminal_config.raw(),
                min,
                max,
                VoltageUnits::FromTeds.raw(),
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    /// `ext_shunt_resistor` (ohms) is only used with [`ShuntResistorLocation::External`].
    pub fn create_ai_current_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        terminal_config: TerminalConfig,
        min: f64,
        max: f64,
        units: CurrentUnits,
        shunt_location: ShuntResistorLocation,
        ext_shunt_resistor: f64,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAICurrentChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                terminal_config.raw(),
                min,
                max,
                units.raw(),
                shunt_location.raw(),
                ext_shunt_resistor,
                scale.as_ptr(),
            )
        )?;
        debug!(task = ?self.handle, physical_channel, "Created AI current channel");
        Ok(())
    }

    /// `cjc_value` is used with [`CjcSource::ConstVal`], `cjc_channel` with
    /// [`CjcSource::Chan`].
    pub fn create_ai_thrmcpl_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: TemperatureUnits,
        thermocouple: ThermocoupleType,
        cjc_source: CjcSource,
        cjc_value: f64,
        cjc_channel: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let cjc_chan = opt_cstring(cjc_channel)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAIThrmcplChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                thermocouple.raw(),
                cjc_source.raw(),
                cjc_value,
                cjc_chan.as_ptr(),
            )
        )?;
        debug!(task = ?self.handle, physical_channel, ?thermocouple, "Created thermocouple channel");
        Ok(())
    }

    pub fn create_ai_rtd_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: TemperatureUnits,
        rtd_type: RtdType,
        resistance_config: ResistanceConfig,
        excitation_source: ExcitationSource,
        excitation_current: f64,
        r0: f64,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAIRTDChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                rtd_type.raw(),
                resistance_config.raw(),
                excitation_source.raw(),
                excitation_current,
                r0,
            )
        )?;
        Ok(())
    }

    pub fn create_ai_resistance_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: ResistanceUnits,
        resistance_config: ResistanceConfig,
        excitation_source: ExcitationSource,
        excitation_current: f64,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAIResistanceChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                resistance_config.raw(),
                excitation_source.raw(),
                excitation_current,
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    /// On-board temperature sensor, e.g. `Dev1/_boardTempSensor_vs_aignd`.
    pub fn create_ai_temp_built_in_sensor_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        units: TemperatureUnits,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAITempBuiltInSensorChan(self.handle, physical.as_ptr(), name_c.as_ptr(), units.raw())
        )?;
        Ok(())
    }

    //********** Analog output **********

    pub fn create_ao_voltage_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: VoltageUnits,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAOVoltageChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                scale.as_ptr(),
            )
        )?;
        debug!(task = ?self.handle, physical_channel, "Created AO voltage channel");
        Ok(())
    }

    pub fn create_ao_current_chan(
        &self,
        physical_channel: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: CurrentUnits,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let physical = to_cstring(physical_channel)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateAOCurrentChan(
                self.handle,
                physical.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    //********** Digital I/O **********

    /// `lines` takes ports (`Dev1/port0`) or lines (`Dev1/port0/line0:7`).
    pub fn create_di_chan(&self, lines: &str, name: Option<&str>, grouping: LineGrouping) -> Result<()> {
        let lines_c = to_cstring(lines)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateDIChan(self.handle, lines_c.as_ptr(), name_c.as_ptr(), grouping.raw())
        )?;
        debug!(task = ?self.handle, lines, ?grouping, "Created DI channel");
        Ok(())
    }

    pub fn create_do_chan(&self, lines: &str, name: Option<&str>, grouping: LineGrouping) -> Result<()> {
        let lines_c = to_cstring(lines)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateDOChan(self.handle, lines_c.as_ptr(), name_c.as_ptr(), grouping.raw())
        )?;
        debug!(task = ?self.handle, lines, ?grouping, "Created DO channel");
        Ok(())
    }

    //********** Counter input **********

    pub fn create_ci_count_edges_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        edge: Edge,
        initial_count: u32,
        direction: CountDirection,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCICountEdgesChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                edge.raw(),
                initial_count,
                direction.raw(),
            )
        )?;
        debug!(task = ?self.handle, counter, "Created CI count edges channel");
        Ok(())
    }

    /// `meas_time` is used by [`MeasurementMethod::HighFreq2Ctr`], `divisor`
    /// by [`MeasurementMethod::LargeRng2Ctr`].
    pub fn create_ci_freq_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: FrequencyUnits,
        edge: Edge,
        method: MeasurementMethod,
        meas_time: f64,
        divisor: u32,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCIFreqChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                edge.raw(),
                method.raw(),
                meas_time,
                divisor,
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    pub fn create_ci_period_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: TimeUnits,
        edge: Edge,
        method: MeasurementMethod,
        meas_time: f64,
        divisor: u32,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCIPeriodChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                edge.raw(),
                method.raw(),
                meas_time,
                divisor,
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    pub fn create_ci_pulse_width_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: TimeUnits,
        starting_edge: Edge,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCIPulseWidthChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                starting_edge.raw(),
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    pub fn create_ci_semi_period_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: TimeUnits,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCISemiPeriodChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    pub fn create_ci_two_edge_sep_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        min: f64,
        max: f64,
        units: TimeUnits,
        first_edge: Edge,
        second_edge: Edge,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCITwoEdgeSepChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                min,
                max,
                units.raw(),
                first_edge.raw(),
                second_edge.raw(),
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    pub fn create_ci_lin_encoder_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        decoding: EncoderType,
        z_index: Option<ZIndex>,
        units: LengthUnits,
        dist_per_pulse: f64,
        initial_pos: f64,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        let (z_enable, z_value, z_phase) = z_index_args(z_index);
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCILinEncoderChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                decoding.raw(),
                z_enable,
                z_value,
                z_phase,
                units.raw(),
                dist_per_pulse,
                initial_pos,
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    pub fn create_ci_ang_encoder_chan(
        &self,
        counter: &str,
        name: Option<&str>,
        decoding: EncoderType,
        z_index: Option<ZIndex>,
        units: AngleUnits,
        pulses_per_rev: u32,
        initial_angle: f64,
        custom_scale: Option<&str>,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let scale = opt_cstring(custom_scale)?;
        let (z_enable, z_value, z_phase) = z_index_args(z_index);
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCIAngEncoderChan(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                decoding.raw(),
                z_enable,
                z_value,
                z_phase,
                units.raw(),
                pulses_per_rev,
                initial_angle,
                scale.as_ptr(),
            )
        )?;
        Ok(())
    }

    //********** Counter output **********

    pub fn create_co_pulse_chan_freq(
        &self,
        counter: &str,
        name: Option<&str>,
        units: FrequencyUnits,
        idle_state: Level,
        initial_delay: f64,
        freq: f64,
        duty_cycle: f64,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCOPulseChanFreq(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                units.raw(),
                idle_state.raw(),
                initial_delay,
                freq,
                duty_cycle,
            )
        )?;
        debug!(task = ?self.handle, counter, freq, duty_cycle, "Created CO pulse channel");
        Ok(())
    }

    pub fn create_co_pulse_chan_time(
        &self,
        counter: &str,
        name: Option<&str>,
        units: TimeUnits,
        idle_state: Level,
        initial_delay: f64,
        low_time: f64,
        high_time: f64,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCOPulseChanTime(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                units.raw(),
                idle_state.raw(),
                initial_delay,
                low_time,
                high_time,
            )
        )?;
        Ok(())
    }

    /// Pulse train counted in ticks of `source_terminal`.
    pub fn create_co_pulse_chan_ticks(
        &self,
        counter: &str,
        name: Option<&str>,
        source_terminal: &str,
        idle_state: Level,
        initial_delay: i32,
        low_ticks: i32,
        high_ticks: i32,
    ) -> Result<()> {
        let counter_c = to_cstring(counter)?;
        let name_c = opt_cstring(name)?;
        let source = to_cstring(source_terminal)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxCreateCOPulseChanTicks(
                self.handle,
                counter_c.as_ptr(),
                name_c.as_ptr(),
                source.as_ptr(),
                idle_state.raw(),
                initial_delay,
                low_ticks,
                high_ticks,
            )
        )?;
        Ok(())
    }
}

fn z_index_args(z_index: Option<ZIndex>) -> (nidaqmx_sys::bool32, f64, i32) {
    match z_index {
        Some(z) => (to_bool32(true), z.value, z.phase.raw()),
        None => (to_bool32(false), 0.0, EncoderZIndexPhase::AHighBHigh.raw()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn z_index_disabled_by_default() {
        let (enable, value, phase) = z_index_args(None);
        assert_eq!(enable, 0);
        assert_eq!(value, 0.0);
        assert_eq!(phase, nidaqmx_sys::DAQmx_Val_AHighBHigh);

        let (enable, value, phase) = z_index_args(Some(ZIndex {
            value: 12.5,
            phase: EncoderZIndexPhase::ALowBLow,
        }));
        assert_eq!(enable, 1);
        assert_eq!(value, 12.5);
        assert_eq!(phase, nidaqmx_sys::DAQmx_Val_ALowBLow);
    }
}
