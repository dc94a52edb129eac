//! Function table of the NI-DAQmx C API.
//!
//! Every exported function is declared once in [`daqmx_functions!`], which
//! generates [`DaqmxFns`]: one optional function pointer per C function,
//! named exactly like the C symbol. [`DaqmxFns::load`] resolves each symbol
//! independently, so a runtime that lacks a newer function still loads and
//! only that field stays `None`.
//!
//! Fixed-arity functions are `__CFUNC` in the header, which is `__stdcall` on
//! 32-bit Windows and the C convention elsewhere; `extern "system"` matches
//! both. The variadic attribute accessors are `__CFUNC_C` and always use the
//! C convention.

use libc::{c_char, c_void};

use crate::types::*;

macro_rules! daqmx_functions {
    (
        fixed {
            $( fn $fname:ident( $($farg:ident : $fty:ty),* $(,)? ); )*
        }
        variadic {
            $( fn $vname:ident( $($varg:ident : $vty:ty),+ $(,)? ); )*
        }
    ) => {
        /// Resolved entry points of the vendor library. Fields are `None` when
        /// the symbol is absent.
        #[derive(Clone, Copy, Default)]
        pub struct DaqmxFns {
            $( pub $fname: Option<unsafe extern "system" fn($($farg: $fty),*) -> int32>, )*
            $( pub $vname: Option<unsafe extern "C" fn($($varg: $vty),+, ...) -> int32>, )*
        }

        /// C names of every function in [`DaqmxFns`], in declaration order.
        pub const FUNCTION_NAMES: &[&str] = &[
            $( stringify!($fname), )*
            $( stringify!($vname), )*
        ];

        impl DaqmxFns {
            /// Resolves every symbol of the table from `lib`.
            ///
            /// # Safety
            /// `lib` must be the NI-DAQmx runtime (or export functions with the
            /// exact signatures declared here), and the returned table must not
            /// outlive it.
            pub unsafe fn load(lib: &libloading::Library) -> Self {
                Self {
                    $( $fname: resolve(lib, stringify!($fname)), )*
                    $( $vname: resolve(lib, stringify!($vname)), )*
                }
            }

            /// Names of the functions that did not resolve.
            pub fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $( if self.$fname.is_none() { missing.push(stringify!($fname)); } )*
                $( if self.$vname.is_none() { missing.push(stringify!($vname)); } )*
                missing
            }
        }
    };
}

unsafe fn resolve<T: Copy>(lib: &libloading::Library, name: &str) -> Option<T> {
    let mut symbol = Vec::with_capacity(name.len() + 1);
    symbol.extend_from_slice(name.as_bytes());
    symbol.push(0);
    lib.get::<T>(&symbol).ok().map(|sym| *sym)
}

impl std::fmt::Debug for DaqmxFns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let missing = self.missing().len();
        f.debug_struct("DaqmxFns")
            .field("resolved", &(FUNCTION_NAMES.len() - missing))
            .field("missing", &missing)
            .finish()
    }
}

daqmx_functions! {
    fixed {
        //******************************************************
        //***               Task Configuration/Control       ***
        //******************************************************
        fn DAQmxLoadTask(taskName: *const c_char, taskHandle: *mut TaskHandle);
        fn DAQmxCreateTask(taskName: *const c_char, taskHandle: *mut TaskHandle);
        fn DAQmxAddGlobalChansToTask(taskHandle: TaskHandle, channelNames: *const c_char);
        fn DAQmxStartTask(taskHandle: TaskHandle);
        fn DAQmxStopTask(taskHandle: TaskHandle);
        fn DAQmxClearTask(taskHandle: TaskHandle);
        fn DAQmxWaitUntilTaskDone(taskHandle: TaskHandle, timeToWait: float64);
        fn DAQmxIsTaskDone(taskHandle: TaskHandle, isTaskDone: *mut bool32);
        fn DAQmxTaskControl(taskHandle: TaskHandle, action: int32);
        fn DAQmxGetNthTaskChannel(taskHandle: TaskHandle, index: uInt32, buffer: *mut c_char, bufferSize: int32);
        fn DAQmxGetNthTaskDevice(taskHandle: TaskHandle, index: uInt32, buffer: *mut c_char, bufferSize: int32);
        fn DAQmxGetNthTaskReadChannel(taskHandle: TaskHandle, index: uInt32, buffer: *mut c_char, bufferSize: int32);

        //******************************************************
        //***               Channel Configuration/Creation   ***
        //******************************************************
        fn DAQmxCreateAIVoltageChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            terminalConfig: int32, minVal: float64, maxVal: float64, units: int32, customScaleName: *const c_char,
        );
        fn DAQmxCreateAICurrentChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            terminalConfig: int32, minVal: float64, maxVal: float64, units: int32, shuntResistorLoc: int32,
            extShuntResistorVal: float64, customScaleName: *const c_char,
        );
        fn DAQmxCreateAIThrmcplChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, thermocoupleType: int32, cjcSource: int32,
            cjcVal: float64, cjcChannel: *const c_char,
        );
        fn DAQmxCreateAIRTDChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, rtdType: int32, resistanceConfig: int32,
            currentExcitSource: int32, currentExcitVal: float64, r0: float64,
        );
        fn DAQmxCreateAITempBuiltInSensorChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char, units: int32,
        );
        fn DAQmxCreateAIStrainGageChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, strainConfig: int32, voltageExcitSource: int32,
            voltageExcitVal: float64, gageFactor: float64, initialBridgeVoltage: float64,
            nominalGageResistance: float64, poissonRatio: float64, leadWireResistance: float64,
            customScaleName: *const c_char,
        );
        fn DAQmxCreateAIAccelChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            terminalConfig: int32, minVal: float64, maxVal: float64, units: int32, sensitivity: float64,
            sensitivityUnits: int32, currentExcitSource: int32, currentExcitVal: float64,
            customScaleName: *const c_char,
        );
        fn DAQmxCreateAIResistanceChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, resistanceConfig: int32, currentExcitSource: int32,
            currentExcitVal: float64, customScaleName: *const c_char,
        );
        fn DAQmxCreateTEDSAIVoltageChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            terminalConfig: int32, minVal: float64, maxVal: float64, units: int32, customScaleName: *const c_char,
        );
        fn DAQmxCreateAOVoltageChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, customScaleName: *const c_char,
        );
        fn DAQmxCreateAOCurrentChan(
            taskHandle: TaskHandle, physicalChannel: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, customScaleName: *const c_char,
        );
        fn DAQmxCreateDIChan(
            taskHandle: TaskHandle, lines: *const c_char, nameToAssignToLines: *const c_char, lineGrouping: int32,
        );
        fn DAQmxCreateDOChan(
            taskHandle: TaskHandle, lines: *const c_char, nameToAssignToLines: *const c_char, lineGrouping: int32,
        );
        fn DAQmxCreateCIFreqChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, edge: int32, measMethod: int32, measTime: float64,
            divisor: uInt32, customScaleName: *const c_char,
        );
        fn DAQmxCreateCIPeriodChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, edge: int32, measMethod: int32, measTime: float64,
            divisor: uInt32, customScaleName: *const c_char,
        );
        fn DAQmxCreateCICountEdgesChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            edge: int32, initialCount: uInt32, countDirection: int32,
        );
        fn DAQmxCreateCIPulseWidthChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, startingEdge: int32, customScaleName: *const c_char,
        );
        fn DAQmxCreateCISemiPeriodChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, customScaleName: *const c_char,
        );
        fn DAQmxCreateCITwoEdgeSepChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            minVal: float64, maxVal: float64, units: int32, firstEdge: int32, secondEdge: int32,
            customScaleName: *const c_char,
        );
        fn DAQmxCreateCILinEncoderChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            decodingType: int32, ZidxEnable: bool32, ZidxVal: float64, ZidxPhase: int32, units: int32,
            distPerPulse: float64, initialPos: float64, customScaleName: *const c_char,
        );
        fn DAQmxCreateCIAngEncoderChan(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            decodingType: int32, ZidxEnable: bool32, ZidxVal: float64, ZidxPhase: int32, units: int32,
            pulsesPerRev: uInt32, initialAngle: float64, customScaleName: *const c_char,
        );
        fn DAQmxCreateCOPulseChanFreq(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            units: int32, idleState: int32, initialDelay: float64, freq: float64, dutyCycle: float64,
        );
        fn DAQmxCreateCOPulseChanTime(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            units: int32, idleState: int32, initialDelay: float64, lowTime: float64, highTime: float64,
        );
        fn DAQmxCreateCOPulseChanTicks(
            taskHandle: TaskHandle, counter: *const c_char, nameToAssignToChannel: *const c_char,
            sourceTerminal: *const c_char, idleState: int32, initialDelay: int32, lowTicks: int32, highTicks: int32,
        );

        //******************************************************
        //***                    Timing                      ***
        //******************************************************
        fn DAQmxCfgSampClkTiming(
            taskHandle: TaskHandle, source: *const c_char, rate: float64, activeEdge: int32,
            sampleMode: int32, sampsPerChan: uInt64,
        );
        fn DAQmxCfgHandshakingTiming(taskHandle: TaskHandle, sampleMode: int32, sampsPerChan: uInt64);
        fn DAQmxCfgChangeDetectionTiming(
            taskHandle: TaskHandle, risingEdgeChan: *const c_char, fallingEdgeChan: *const c_char,
            sampleMode: int32, sampsPerChan: uInt64,
        );
        fn DAQmxCfgImplicitTiming(taskHandle: TaskHandle, sampleMode: int32, sampsPerChan: uInt64);
        fn DAQmxWaitForNextSampleClock(taskHandle: TaskHandle, timeout: float64, isLate: *mut bool32);

        //******************************************************
        //***                  Triggering                    ***
        //******************************************************
        fn DAQmxDisableStartTrig(taskHandle: TaskHandle);
        fn DAQmxCfgDigEdgeStartTrig(taskHandle: TaskHandle, triggerSource: *const c_char, triggerEdge: int32);
        fn DAQmxCfgAnlgEdgeStartTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerSlope: int32, triggerLevel: float64,
        );
        fn DAQmxCfgAnlgWindowStartTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerWhen: int32, windowTop: float64,
            windowBottom: float64,
        );
        fn DAQmxCfgDigPatternStartTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerPattern: *const c_char, triggerWhen: int32,
        );
        fn DAQmxDisableRefTrig(taskHandle: TaskHandle);
        fn DAQmxCfgDigEdgeRefTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerEdge: int32, pretriggerSamples: uInt32,
        );
        fn DAQmxCfgAnlgEdgeRefTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerSlope: int32, triggerLevel: float64,
            pretriggerSamples: uInt32,
        );
        fn DAQmxCfgAnlgWindowRefTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerWhen: int32, windowTop: float64,
            windowBottom: float64, pretriggerSamples: uInt32,
        );
        fn DAQmxCfgDigPatternRefTrig(
            taskHandle: TaskHandle, triggerSource: *const c_char, triggerPattern: *const c_char,
            triggerWhen: int32, pretriggerSamples: uInt32,
        );
        fn DAQmxDisableAdvTrig(taskHandle: TaskHandle);
        fn DAQmxCfgDigEdgeAdvTrig(taskHandle: TaskHandle, triggerSource: *const c_char, triggerEdge: int32);
        fn DAQmxSendSoftwareTrigger(taskHandle: TaskHandle, triggerID: int32);

        //******************************************************
        //***                 Read Data                      ***
        //******************************************************
        fn DAQmxReadAnalogF64(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut float64, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadAnalogScalarF64(taskHandle: TaskHandle, timeout: float64, value: *mut float64, reserved: *mut bool32);
        fn DAQmxReadBinaryI16(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut int16, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadBinaryU16(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut uInt16, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadBinaryI32(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut int32, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadBinaryU32(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut uInt32, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadDigitalU8(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut uInt8, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadDigitalU16(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut uInt16, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadDigitalU32(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut uInt32, arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadDigitalScalarU32(taskHandle: TaskHandle, timeout: float64, value: *mut uInt32, reserved: *mut bool32);
        fn DAQmxReadDigitalLines(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, fillMode: bool32,
            readArray: *mut uInt8, arraySizeInBytes: uInt32, sampsPerChanRead: *mut int32,
            numBytesPerSamp: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadCounterF64(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, readArray: *mut float64,
            arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadCounterU32(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, readArray: *mut uInt32,
            arraySizeInSamps: uInt32, sampsPerChanRead: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxReadCounterScalarF64(taskHandle: TaskHandle, timeout: float64, value: *mut float64, reserved: *mut bool32);
        fn DAQmxReadCounterScalarU32(taskHandle: TaskHandle, timeout: float64, value: *mut uInt32, reserved: *mut bool32);
        fn DAQmxReadRaw(
            taskHandle: TaskHandle, numSampsPerChan: int32, timeout: float64, readArray: *mut c_void,
            arraySizeInBytes: uInt32, sampsRead: *mut int32, numBytesPerSamp: *mut int32, reserved: *mut bool32,
        );

        //******************************************************
        //***                 Write Data                     ***
        //******************************************************
        fn DAQmxWriteAnalogF64(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const float64, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteAnalogScalarF64(
            taskHandle: TaskHandle, autoStart: bool32, timeout: float64, value: float64, reserved: *mut bool32,
        );
        fn DAQmxWriteBinaryI16(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const int16, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteBinaryU16(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const uInt16, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteDigitalU8(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const uInt8, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteDigitalU16(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const uInt16, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteDigitalU32(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const uInt32, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteDigitalScalarU32(
            taskHandle: TaskHandle, autoStart: bool32, timeout: float64, value: uInt32, reserved: *mut bool32,
        );
        fn DAQmxWriteDigitalLines(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, writeArray: *const uInt8, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteCtrFreq(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, frequency: *const float64, dutyCycle: *const float64,
            numSampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteCtrFreqScalar(
            taskHandle: TaskHandle, autoStart: bool32, timeout: float64, frequency: float64, dutyCycle: float64,
            reserved: *mut bool32,
        );
        fn DAQmxWriteCtrTime(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, highTime: *const float64, lowTime: *const float64,
            numSampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteCtrTimeScalar(
            taskHandle: TaskHandle, autoStart: bool32, timeout: float64, highTime: float64, lowTime: float64,
            reserved: *mut bool32,
        );
        fn DAQmxWriteCtrTicks(
            taskHandle: TaskHandle, numSampsPerChan: int32, autoStart: bool32, timeout: float64,
            dataLayout: bool32, highTicks: *const uInt32, lowTicks: *const uInt32,
            numSampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );
        fn DAQmxWriteCtrTicksScalar(
            taskHandle: TaskHandle, autoStart: bool32, timeout: float64, highTicks: uInt32, lowTicks: uInt32,
            reserved: *mut bool32,
        );
        fn DAQmxWriteRaw(
            taskHandle: TaskHandle, numSamps: int32, autoStart: bool32, timeout: float64,
            writeArray: *const c_void, sampsPerChanWritten: *mut int32, reserved: *mut bool32,
        );

        //******************************************************
        //***               Events & Signals                 ***
        //******************************************************
        fn DAQmxRegisterEveryNSamplesEvent(
            task: TaskHandle, everyNsamplesEventType: int32, nSamples: uInt32, options: uInt32,
            callbackFunction: DAQmxEveryNSamplesEventCallbackPtr, callbackData: *mut c_void,
        );
        fn DAQmxRegisterDoneEvent(
            task: TaskHandle, options: uInt32, callbackFunction: DAQmxDoneEventCallbackPtr, callbackData: *mut c_void,
        );
        fn DAQmxRegisterSignalEvent(
            task: TaskHandle, signalID: int32, options: uInt32, callbackFunction: DAQmxSignalEventCallbackPtr,
            callbackData: *mut c_void,
        );
        fn DAQmxExportSignal(taskHandle: TaskHandle, signalID: int32, outputTerminal: *const c_char);
        fn DAQmxConnectTerms(sourceTerminal: *const c_char, destinationTerminal: *const c_char, signalModifiers: int32);
        fn DAQmxDisconnectTerms(sourceTerminal: *const c_char, destinationTerminal: *const c_char);
        fn DAQmxTristateOutputTerm(outputTerminal: *const c_char);

        //******************************************************
        //***             Buffer Configurations              ***
        //******************************************************
        fn DAQmxCfgInputBuffer(taskHandle: TaskHandle, numSampsPerChan: uInt32);
        fn DAQmxCfgOutputBuffer(taskHandle: TaskHandle, numSampsPerChan: uInt32);

        //******************************************************
        //***                Switch Functions                ***
        //******************************************************
        fn DAQmxSwitchCreateScanList(scanList: *const c_char, taskHandle: *mut TaskHandle);
        fn DAQmxSwitchConnect(switchChannel1: *const c_char, switchChannel2: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchConnectMulti(connectionList: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchDisconnect(switchChannel1: *const c_char, switchChannel2: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchDisconnectMulti(connectionList: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchDisconnectAll(deviceName: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchSetTopologyAndReset(deviceName: *const c_char, newTopology: *const c_char);
        fn DAQmxSwitchFindPath(
            switchChannel1: *const c_char, switchChannel2: *const c_char, path: *mut c_char,
            pathBufferSize: uInt32, pathStatus: *mut int32,
        );
        fn DAQmxSwitchOpenRelays(relayList: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchCloseRelays(relayList: *const c_char, waitForSettling: bool32);
        fn DAQmxSwitchGetSingleRelayCount(relayName: *const c_char, count: *mut uInt32);
        fn DAQmxSwitchGetMultiRelayCount(
            relayList: *const c_char, count: *mut uInt32, countArraySize: uInt32, numRelayCountsRead: *mut uInt32,
        );
        fn DAQmxSwitchGetSingleRelayPos(relayName: *const c_char, relayPos: *mut uInt32);
        fn DAQmxSwitchGetMultiRelayPos(
            relayList: *const c_char, relayPos: *mut uInt32, relayPosArraySize: uInt32, numRelayPossRead: *mut uInt32,
        );
        fn DAQmxSwitchWaitForSettling(deviceName: *const c_char);

        //******************************************************
        //***                Scale Configurations            ***
        //******************************************************
        fn DAQmxCreateLinScale(
            name: *const c_char, slope: float64, yIntercept: float64, preScaledUnits: int32, scaledUnits: *const c_char,
        );
        fn DAQmxCreateMapScale(
            name: *const c_char, prescaledMin: float64, prescaledMax: float64, scaledMin: float64,
            scaledMax: float64, preScaledUnits: int32, scaledUnits: *const c_char,
        );
        fn DAQmxCreatePolynomialScale(
            name: *const c_char, forwardCoeffs: *const float64, numForwardCoeffsIn: uInt32,
            reverseCoeffs: *const float64, numReverseCoeffsIn: uInt32, preScaledUnits: int32,
            scaledUnits: *const c_char,
        );
        fn DAQmxCreateTableScale(
            name: *const c_char, prescaledVals: *const float64, numPrescaledValsIn: uInt32,
            scaledVals: *const float64, numScaledValsIn: uInt32, preScaledUnits: int32, scaledUnits: *const c_char,
        );
        fn DAQmxCalculateReversePolyCoeff(
            forwardCoeffs: *const float64, numForwardCoeffsIn: uInt32, minValX: float64, maxValX: float64,
            numPointsToCompute: int32, reversePolyOrder: int32, reverseCoeffs: *mut float64,
        );

        //******************************************************
        //***                 Storage                        ***
        //******************************************************
        fn DAQmxSaveTask(taskHandle: TaskHandle, saveAs: *const c_char, author: *const c_char, options: uInt32);
        fn DAQmxSaveGlobalChan(
            taskHandle: TaskHandle, channelName: *const c_char, saveAs: *const c_char, author: *const c_char,
            options: uInt32,
        );
        fn DAQmxSaveScale(scaleName: *const c_char, saveAs: *const c_char, author: *const c_char, options: uInt32);
        fn DAQmxDeleteSavedTask(taskName: *const c_char);
        fn DAQmxDeleteSavedGlobalChan(channelName: *const c_char);
        fn DAQmxDeleteSavedScale(scaleName: *const c_char);

        //******************************************************
        //***                Device Control                  ***
        //******************************************************
        fn DAQmxResetDevice(deviceName: *const c_char);
        fn DAQmxSelfTestDevice(deviceName: *const c_char);

        //******************************************************
        //***                 Watchdog Timer                 ***
        //******************************************************
        fn DAQmxControlWatchdogTask(taskHandle: TaskHandle, action: int32);
        fn DAQmxCfgWatchdogDOExpirStates(
            taskHandle: TaskHandle, channelNames: *const c_char, expirStateArray: *const int32, arraySize: uInt32,
        );

        //******************************************************
        //***                 Calibration                    ***
        //******************************************************
        fn DAQmxSelfCal(deviceName: *const c_char);
        fn DAQmxPerformBridgeOffsetNullingCal(taskHandle: TaskHandle, channel: *const c_char);
        fn DAQmxGetSelfCalLastDateAndTime(
            deviceName: *const c_char, year: *mut uInt32, month: *mut uInt32, day: *mut uInt32,
            hour: *mut uInt32, minute: *mut uInt32,
        );
        fn DAQmxGetExtCalLastDateAndTime(
            deviceName: *const c_char, year: *mut uInt32, month: *mut uInt32, day: *mut uInt32,
            hour: *mut uInt32, minute: *mut uInt32,
        );
        fn DAQmxRestoreLastExtCalConst(deviceName: *const c_char);
        fn DAQmxDeviceSupportsCal(deviceName: *const c_char, calSupported: *mut bool32);
        fn DAQmxInitExtCal(deviceName: *const c_char, password: *const c_char, calHandle: *mut CalHandle);
        fn DAQmxCloseExtCal(calHandle: CalHandle, action: int32);
        fn DAQmxChangeExtCalPassword(deviceName: *const c_char, password: *const c_char, newPassword: *const c_char);

        //******************************************************
        //***                      TEDS                      ***
        //******************************************************
        fn DAQmxConfigureTEDS(physicalChannel: *const c_char, filePath: *const c_char);
        fn DAQmxClearTEDS(physicalChannel: *const c_char);
        fn DAQmxWriteToTEDSFromArray(
            physicalChannel: *const c_char, bitStream: *const uInt8, arraySize: uInt32, basicTEDSOptions: int32,
        );
        fn DAQmxWriteToTEDSFromFile(physicalChannel: *const c_char, filePath: *const c_char, basicTEDSOptions: int32);

        //******************************************************
        //***                 Error Handling                 ***
        //******************************************************
        fn DAQmxGetErrorString(errorCode: int32, errorString: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetExtendedErrorInfo(errorString: *mut c_char, bufferSize: uInt32);

        //******************************************************
        //***        Attribute resets (fixed arity)          ***
        //******************************************************
        fn DAQmxResetTimingAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxResetTrigAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxResetReadAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxResetWriteAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxResetBufferAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxResetExportedSignalAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxResetChanAttribute(taskHandle: TaskHandle, channel: *const c_char, attribute: int32);
        fn DAQmxResetWatchdogAttribute(taskHandle: TaskHandle, lines: *const c_char, attribute: int32);

        //******************************************************
        //***            Typed attribute accessors           ***
        //******************************************************
        fn DAQmxGetTaskName(taskHandle: TaskHandle, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetTaskNumChans(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetTaskNumDevices(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetTaskComplete(taskHandle: TaskHandle, data: *mut bool32);
        fn DAQmxGetReadAvailSampPerChan(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetReadTotalSampPerChanAcquired(taskHandle: TaskHandle, data: *mut uInt64);
        fn DAQmxGetReadNumChans(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetWriteNumChans(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetWriteCurrWritePos(taskHandle: TaskHandle, data: *mut uInt64);
        fn DAQmxGetWriteTotalSampPerChanGenerated(taskHandle: TaskHandle, data: *mut uInt64);
        fn DAQmxGetWriteSpaceAvail(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetWriteRegenMode(taskHandle: TaskHandle, data: *mut int32);
        fn DAQmxSetWriteRegenMode(taskHandle: TaskHandle, data: int32);
        fn DAQmxGetSampClkRate(taskHandle: TaskHandle, data: *mut float64);
        fn DAQmxSetSampClkRate(taskHandle: TaskHandle, data: float64);
        fn DAQmxGetRefClkSrc(taskHandle: TaskHandle, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxSetRefClkSrc(taskHandle: TaskHandle, data: *const c_char);
        fn DAQmxGetRefClkRate(taskHandle: TaskHandle, data: *mut float64);
        fn DAQmxSetRefClkRate(taskHandle: TaskHandle, data: float64);
        fn DAQmxGetBufInputBufSize(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetBufOutputBufSize(taskHandle: TaskHandle, data: *mut uInt32);
        fn DAQmxGetWatchdogHasExpired(taskHandle: TaskHandle, data: *mut bool32);
        fn DAQmxGetSysDevNames(data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetSysGlobalChans(data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetSysScales(data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetSysTasks(data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetSysNIDAQMajorVersion(data: *mut uInt32);
        fn DAQmxGetSysNIDAQMinorVersion(data: *mut uInt32);
        fn DAQmxGetSysNIDAQUpdateVersion(data: *mut uInt32);
        fn DAQmxGetDevIsSimulated(device: *const c_char, data: *mut bool32);
        fn DAQmxGetDevProductCategory(device: *const c_char, data: *mut int32);
        fn DAQmxGetDevProductType(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevProductNum(device: *const c_char, data: *mut uInt32);
        fn DAQmxGetDevSerialNum(device: *const c_char, data: *mut uInt32);
        fn DAQmxGetDevBusType(device: *const c_char, data: *mut int32);
        fn DAQmxGetDevAIPhysicalChans(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevAOPhysicalChans(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevDILines(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevDOLines(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevCIPhysicalChans(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevCOPhysicalChans(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevTerminals(device: *const c_char, data: *mut c_char, bufferSize: uInt32);
        fn DAQmxGetDevAIVoltageRngs(device: *const c_char, data: *mut float64, arraySizeInElements: uInt32);
        fn DAQmxGetDevAIMaxSingleChanRate(device: *const c_char, data: *mut float64);
        fn DAQmxGetDevAOMaxRate(device: *const c_char, data: *mut float64);
    }
    variadic {
        // Attribute getters take a trailing buffer size for strings and arrays.
        fn DAQmxGetTaskAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxGetTimingAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxSetTimingAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxGetTrigAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxSetTrigAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxGetReadAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxSetReadAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxGetWriteAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxSetWriteAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxGetBufferAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxSetBufferAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxGetExportedSignalAttribute(taskHandle: TaskHandle, attribute: int32, value: *mut c_void);
        fn DAQmxSetExportedSignalAttribute(taskHandle: TaskHandle, attribute: int32);
        fn DAQmxGetChanAttribute(taskHandle: TaskHandle, channel: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxSetChanAttribute(taskHandle: TaskHandle, channel: *const c_char, attribute: int32);
        fn DAQmxGetDeviceAttribute(deviceName: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxGetPhysicalChanAttribute(physicalChannel: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxGetSystemInfoAttribute(attribute: int32, value: *mut c_void);
        fn DAQmxGetScaleAttribute(scaleName: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxSetScaleAttribute(scaleName: *const c_char, attribute: int32);
        fn DAQmxGetCalInfoAttribute(deviceName: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxSetCalInfoAttribute(deviceName: *const c_char, attribute: int32);
        fn DAQmxGetPersistedTaskAttribute(taskName: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxGetPersistedChanAttribute(channel: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxGetPersistedScaleAttribute(scaleName: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxGetSwitchDeviceAttribute(deviceName: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxSetSwitchDeviceAttribute(deviceName: *const c_char, attribute: int32);
        fn DAQmxGetWatchdogAttribute(taskHandle: TaskHandle, lines: *const c_char, attribute: int32, value: *mut c_void);
        fn DAQmxSetWatchdogAttribute(taskHandle: TaskHandle, lines: *const c_char, attribute: int32);

        // (lines, expState) pairs follow `expState`, terminated by a null pointer.
        fn DAQmxCreateWatchdogTimerTask(
            deviceName: *const c_char, taskName: *const c_char, taskHandle: *mut TaskHandle, timeout: float64,
            lines: *const c_char, expState: int32,
        );
        fn DAQmxSetDigitalPowerUpStates(deviceName: *const c_char, channelNames: *const c_char, state: int32);
        fn DAQmxGetDigitalPowerUpStates(deviceName: *const c_char, channelName: *const c_char, state: *mut int32);
    }
}
