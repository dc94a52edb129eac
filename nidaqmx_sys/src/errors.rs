//! Named status codes. Negative codes are errors, positive codes are warnings.
//!
//! Codes without a name here are still valid: the driver describes any code
//! through `DAQmxGetErrorString`.

use crate::types::int32;

macro_rules! status_codes {
    ($($name:ident = $value:expr;)*) => {
        $(pub const $name: int32 = $value;)*

        /// Every named code, sorted by value.
        pub const ERROR_CODES: &[(int32, &str)] = &[$(($value, stringify!($name)),)*];
    };
}

// Keep in ascending order, `code_name` binary-searches this table.
status_codes! {
    DAQmxErrorWaitForNextSampClkDetected3OrMoreSampClks = -209803;
    DAQmxErrorWaitForNextSampClkDetectedMissedSampClk = -209802;
    DAQmxErrorWriteNotCompleteBeforeSampClk = -209801;
    DAQmxErrorReadNotCompleteBeforeSampClk = -209800;
    DAQmxErrorDevCannotBeAccessed = -201003;
    DAQmxErrorWaitUntilDoneDoesNotIndicateDone = -200560;
    DAQmxErrorCantSetPropertyTaskRunning = -200557;
    DAQmxErrorOperationTimedOut = -200474;
    DAQmxErrorAttrNotSupported = -200452;
    DAQmxErrorSamplesCanNotYetBeWritten = -200292;
    DAQmxErrorGenStoppedToPreventRegenOfOldSamples = -200290;
    DAQmxErrorSamplesNoLongerWriteable = -200289;
    DAQmxErrorSamplesWillNeverBeGenerated = -200288;
    DAQmxErrorSamplesNotYetAvailable = -200284;
    DAQmxErrorSamplesNoLongerAvailable = -200279;
    DAQmxErrorSamplesWillNeverBeAvailable = -200278;
    DAQmxErrorBufferTooSmallForString = -200229;
    DAQmxErrorInvalidDeviceID = -200220;
    DAQmxErrorPhysicalChanDoesNotExist = -200170;
    DAQmxErrorDuplicateTask = -200089;
    DAQmxErrorInvalidTask = -200088;
    DAQmxErrorInvalidAttributeValue = -200077;
    DAQmxErrorADCOverrun = -200019;
    DAQmxErrorDACUnderflow = -200018;
    DAQmxErrorPALResourceReserved = -50103;
    DAQmxWarningPALValueConflict = 50000;
    DAQmxWarningPALIrrelevantAttribute = 50001;
    DAQmxWarningPALUnsupportedAttribute = 50002;
    DAQmxWarningPALUnsupportedAttributeValue = 50003;
    DAQmxWarningPALReadOnlyAttribute = 50004;
    DAQmxWarningTimestampCounterRolledOver = 200003;
    DAQmxWarningInputTerminationOverloaded = 200004;
    DAQmxWarningADCOverloaded = 200005;
    DAQmxWarningPLLUnlocked = 200007;
    DAQmxWarningCounter0DMADuringAIConflict = 200008;
    DAQmxWarningCounter1DMADuringAOConflict = 200009;
    DAQmxWarningStoppedBeforeDone = 200010;
    DAQmxWarningRateViolatesSettlingTime = 200011;
    DAQmxWarningRateViolatesMaxADCRate = 200012;
    DAQmxWarningUserDefInfoStringTooLong = 200013;
    DAQmxWarningTooManyInterruptsPerSecond = 200014;
    DAQmxWarningPotentialGlitchDuringWrite = 200015;
    DAQmxWarningDevNotSelfCalibratedWithDAQmx = 200016;
    DAQmxWarningAISampRateTooLow = 200017;
    DAQmxWarningAIConvRateTooLow = 200018;
    DAQmxWarningReadOffsetCoercion = 200019;
    DAQmxWarningPretrigCoercion = 200020;
    DAQmxWarningSampValCoercedToMax = 200021;
    DAQmxWarningSampValCoercedToMin = 200022;
    DAQmxWarningPropertyVersionNew = 200024;
    DAQmxWarningUserDefinedInfoTooLong = 200025;
    DAQmxWarningCAPIStringTruncatedToFitBuffer = 200026;
    DAQmxWarningSampClkRateTooLow = 200027;
    DAQmxWarningPossiblyInvalidCTRSampsInFiniteDMAAcq = 200028;
    DAQmxWarningRISAcqCompletedSomeBinsNotFilled = 200029;
    DAQmxWarningPXIDevTempExceedsMaxOpTemp = 200030;
    DAQmxWarningOutputGainTooLowForRFFreq = 200031;
    DAQmxWarningOutputGainTooHighForRFFreq = 200032;
    DAQmxWarningMultipleWritesBetweenSampClks = 200033;
    DAQmxWarningDeviceMayShutDownDueToHighTemp = 200034;
    DAQmxWarningRateViolatesMinADCRate = 200035;
    DAQmxWarningSampClkRateAboveDevSpecs = 200036;
    DAQmxWarningCOPrevDAQmxWriteSettingsOverwrittenForHWTimedSinglePoint = 200037;
    DAQmxWarningLowpassFilterSettlingTimeExceedsUserTimeBetween2ADCConversions = 200038;
    DAQmxWarningLowpassFilterSettlingTimeExceedsDriverTimeBetween2ADCConversions = 200039;
    DAQmxWarningSampClkRateViolatesSettlingTimeForGen = 200040;
    DAQmxWarningInvalidCalConstValueForAI = 200041;
    DAQmxWarningInvalidCalConstValueForAO = 200042;
    DAQmxWarningChanCalExpired = 200043;
    DAQmxWarningUnrecognizedEnumValueEncounteredInStorage = 200044;
    DAQmxWarningTableCRCNotCorrect = 200045;
    DAQmxWarningExternalCRCNotCorrect = 200046;
    DAQmxWarningSelfCalCRCNotCorrect = 200047;
    DAQmxWarningDeviceSpecExceeded = 200048;
    DAQmxWarningOnlyGainCalibrated = 200049;
    DAQmxWarningReversePowerProtectionActivated = 200050;
    DAQmxWarningOverVoltageProtectionActivated = 200051;
    DAQmxWarningBufferSizeNotMultipleOfSectorSize = 200052;
    DAQmxWarningSampleRateMayCauseAcqToFail = 200053;
    DAQmxWarningUserAreaCRCNotCorrect = 200054;
    DAQmxWarningPowerUpInfoCRCNotCorrect = 200055;
    DAQmxWarningConnectionCountHasExceededRecommendedLimit = 200056;
    DAQmxWarningNetworkDeviceAlreadyAdded = 200057;
    DAQmxWarningAccessoryConnectionCountIsInvalid = 200058;
    DAQmxWarningUnableToDisconnectPorts = 200059;
    DAQmxWarningReadRepeatedData = 200060;
    DAQmxWarningUSBHotfixForDAQ = 200078;
    DAQmxWarningNoChangeSupersededByIdleBehavior = 200079;
    DAQmxWarningReadNotCompleteBeforeSampClk = 209800;
    DAQmxWarningWriteNotCompleteBeforeSampClk = 209801;
    DAQmxWarningWaitForNextSampClkDetectedMissedSampClk = 209802;
    DAQmxWarningOutputDataTransferConditionNotSupported = 209803;
    DAQmxWarningTimestampMayBeInvalid = 209804;
    DAQmxWarningFirstSampleTimestampInaccurate = 209805;
}

/// Symbolic name of a status code, if it is one of the named codes.
pub fn code_name(code: int32) -> Option<&'static str> {
    ERROR_CODES
        .binary_search_by_key(&code, |&(value, _)| value)
        .ok()
        .map(|idx| ERROR_CODES[idx].1)
}
