//! Scalar typedefs, handles and callback signatures declared by `NIDAQmx.h`.

use libc::c_void;

pub type int8 = i8;
pub type uInt8 = u8;
pub type int16 = i16;
pub type uInt16 = u16;
pub type int32 = i32;
pub type uInt32 = u32;
pub type float32 = f32;
pub type float64 = f64;
pub type int64 = i64;
pub type uInt64 = u64;

/// 32-bit boolean used by every DAQmx function taking or returning a flag.
pub type bool32 = uInt32;

pub const TRUE: bool32 = 1;
pub const FALSE: bool32 = 0;

/// Opaque handle to a task owned by the driver.
pub type TaskHandle = *mut c_void;
/// Handle to an external calibration session.
pub type CalHandle = uInt32;

// CVICALLBACK is __cdecl on every platform the driver ships for.
pub type DAQmxEveryNSamplesEventCallbackPtr = Option<
    unsafe extern "C" fn(
        taskHandle: TaskHandle,
        everyNsamplesEventType: int32,
        nSamples: uInt32,
        callbackData: *mut c_void,
    ) -> int32,
>;
pub type DAQmxDoneEventCallbackPtr =
    Option<unsafe extern "C" fn(taskHandle: TaskHandle, status: int32, callbackData: *mut c_void) -> int32>;
pub type DAQmxSignalEventCallbackPtr =
    Option<unsafe extern "C" fn(taskHandle: TaskHandle, signalID: int32, callbackData: *mut c_void) -> int32>;

/// Status code returned by a call that completed without error or warning.
pub const DAQmxSuccess: int32 = 0;

/// `true` when `error` is an error code. Positive codes are warnings and do not fail.
pub const fn DAQmxFailed(error: int32) -> bool {
    error < 0
}

/// `true` when `error` is a success or warning code.
pub const fn DAQmxSucceeded(error: int32) -> bool {
    error >= 0
}
