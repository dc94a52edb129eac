//! Custom scales and persistence of tasks, global channels and scales.
//!
//! Scales created here exist for the lifetime of the process unless saved;
//! channels refer to them by name through their `custom_scale` argument.

use nidaqmx_sys::uInt32;
use tracing::info;

use crate::driver::{daqmx_call, Daqmx};
use crate::error::{DaqmxError, Result};
use crate::task::TaskRef;
use crate::utils::{opt_cstring, to_cstring};
use crate::values::{PreScaledUnits, SaveOptions};

fn array_len(name: &str, values: &[f64]) -> Result<uInt32> {
    uInt32::try_from(values.len())
        .map_err(|_| DaqmxError::InvalidArgument(format!("{name} has {} values, too many", values.len())))
}

/// Highest reverse polynomial order accepted.
pub const MAX_REVERSE_ORDER: i32 = 1024;

/// Coefficients a reverse fit of `order` returns.
fn reverse_coeff_count(num_points: i32, order: i32) -> Result<usize> {
    if !(0..=MAX_REVERSE_ORDER).contains(&order) {
        return Err(DaqmxError::InvalidArgument(format!(
            "reverse polynomial order {order} is outside 0..={MAX_REVERSE_ORDER}"
        )));
    }
    if num_points <= order {
        return Err(DaqmxError::InvalidArgument(format!(
            "a reverse polynomial of order {order} needs more than {order} points, got {num_points}"
        )));
    }
    Ok(order as usize + 1)
}

impl Daqmx {
    /// `y = slope * x + y_intercept`.
    pub fn create_lin_scale(
        &self,
        name: &str,
        slope: f64,
        y_intercept: f64,
        pre_scaled_units: PreScaledUnits,
        scaled_units: &str,
    ) -> Result<()> {
        let name_c = to_cstring(name)?;
        let units = to_cstring(scaled_units)?;
        daqmx_call!(
            self,
            DAQmxCreateLinScale(name_c.as_ptr(), slope, y_intercept, pre_scaled_units.raw(), units.as_ptr())
        )?;
        info!(name, slope, y_intercept, "Created linear scale");
        Ok(())
    }

    /// Linear map of `[prescaled_min, prescaled_max]` onto `[scaled_min, scaled_max]`.
    pub fn create_map_scale(
        &self,
        name: &str,
        prescaled: (f64, f64),
        scaled: (f64, f64),
        pre_scaled_units: PreScaledUnits,
        scaled_units: &str,
    ) -> Result<()> {
        let name_c = to_cstring(name)?;
        let units = to_cstring(scaled_units)?;
        daqmx_call!(
            self,
            DAQmxCreateMapScale(
                name_c.as_ptr(),
                prescaled.0,
                prescaled.1,
                scaled.0,
                scaled.1,
                pre_scaled_units.raw(),
                units.as_ptr(),
            )
        )?;
        Ok(())
    }

    /// Polynomial scale. Coefficients are in ascending order of power; an
    /// empty `reverse_coeffs` lets the driver compute them.
    pub fn create_polynomial_scale(
        &self,
        name: &str,
        forward_coeffs: &[f64],
        reverse_coeffs: &[f64],
        pre_scaled_units: PreScaledUnits,
        scaled_units: &str,
    ) -> Result<()> {
        let name_c = to_cstring(name)?;
        let units = to_cstring(scaled_units)?;
        daqmx_call!(
            self,
            DAQmxCreatePolynomialScale(
                name_c.as_ptr(),
                forward_coeffs.as_ptr(),
                array_len("forward_coeffs", forward_coeffs)?,
                reverse_coeffs.as_ptr(),
                array_len("reverse_coeffs", reverse_coeffs)?,
                pre_scaled_units.raw(),
                units.as_ptr(),
            )
        )?;
        Ok(())
    }

    /// Piecewise-linear scale through `(prescaled[i], scaled[i])`.
    pub fn create_table_scale(
        &self,
        name: &str,
        prescaled: &[f64],
        scaled: &[f64],
        pre_scaled_units: PreScaledUnits,
        scaled_units: &str,
    ) -> Result<()> {
        if prescaled.len() != scaled.len() {
            return Err(DaqmxError::InvalidArgument(format!(
                "table scale needs as many scaled values ({}) as prescaled values ({})",
                scaled.len(),
                prescaled.len()
            )));
        }
        let name_c = to_cstring(name)?;
        let units = to_cstring(scaled_units)?;
        daqmx_call!(
            self,
            DAQmxCreateTableScale(
                name_c.as_ptr(),
                prescaled.as_ptr(),
                array_len("prescaled", prescaled)?,
                scaled.as_ptr(),
                array_len("scaled", scaled)?,
                pre_scaled_units.raw(),
                units.as_ptr(),
            )
        )?;
        Ok(())
    }

    /// Fits reverse coefficients of order `reverse_order` to the forward
    /// polynomial over `[min_x, max_x]`, sampled at `num_points` points.
    /// The fit needs more points than coefficients.
    pub fn calculate_reverse_poly_coeff(
        &self,
        forward_coeffs: &[f64],
        min_x: f64,
        max_x: f64,
        num_points: i32,
        reverse_order: i32,
    ) -> Result<Vec<f64>> {
        let coeffs = reverse_coeff_count(num_points, reverse_order)?;
        let mut reverse = vec![0.0; coeffs];
        daqmx_call!(
            self,
            DAQmxCalculateReversePolyCoeff(
                forward_coeffs.as_ptr(),
                array_len("forward_coeffs", forward_coeffs)?,
                min_x,
                max_x,
                num_points,
                reverse_order,
                reverse.as_mut_ptr(),
            )
        )?;
        Ok(reverse)
    }

    /// Saves a scale to NI MAX. `save_as` of `None` keeps its name.
    pub fn save_scale(&self, name: &str, save_as: Option<&str>, author: &str, options: SaveOptions) -> Result<()> {
        let name_c = to_cstring(name)?;
        let save_as = opt_cstring(save_as)?;
        let author = to_cstring(author)?;
        daqmx_call!(
            self,
            DAQmxSaveScale(name_c.as_ptr(), save_as.as_ptr(), author.as_ptr(), options.bits())
        )?;
        info!(name, "Saved scale");
        Ok(())
    }

    pub fn delete_saved_scale(&self, name: &str) -> Result<()> {
        let name_c = to_cstring(name)?;
        daqmx_call!(self, DAQmxDeleteSavedScale(name_c.as_ptr()))?;
        Ok(())
    }

    pub fn delete_saved_task(&self, name: &str) -> Result<()> {
        let name_c = to_cstring(name)?;
        daqmx_call!(self, DAQmxDeleteSavedTask(name_c.as_ptr()))?;
        Ok(())
    }

    pub fn delete_saved_global_chan(&self, name: &str) -> Result<()> {
        let name_c = to_cstring(name)?;
        daqmx_call!(self, DAQmxDeleteSavedGlobalChan(name_c.as_ptr()))?;
        Ok(())
    }
}

impl TaskRef {
    /// Saves the task to NI MAX so it can be reloaded with `Task::load`.
    pub fn save(&self, save_as: Option<&str>, author: &str, options: SaveOptions) -> Result<()> {
        let save_as = opt_cstring(save_as)?;
        let author = to_cstring(author)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxSaveTask(self.handle, save_as.as_ptr(), author.as_ptr(), options.bits())
        )?;
        info!(task = ?self.handle, "Saved task");
        Ok(())
    }

    /// Saves one of the task's channels as a global channel.
    pub fn save_global_chan(
        &self,
        channel: &str,
        save_as: Option<&str>,
        author: &str,
        options: SaveOptions,
    ) -> Result<()> {
        let channel_c = to_cstring(channel)?;
        let save_as = opt_cstring(save_as)?;
        let author = to_cstring(author)?;
        daqmx_call!(
            &self.daqmx,
            DAQmxSaveGlobalChan(
                self.handle,
                channel_c.as_ptr(),
                save_as.as_ptr(),
                author.as_ptr(),
                options.bits(),
            )
        )?;
        Ok(())
    }
}
