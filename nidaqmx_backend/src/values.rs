//! Typed versions of the driver's value sets, plus [`Timeout`] and [`SaveOptions`].
//!
//! Every enum converts to the raw `int32` the C API expects with `raw()`
//! (or `From`), and back with `from_raw()`. They deserialize from
//! snake_case names so task files can use them directly.

use std::time::Duration;

use bitflags::bitflags;
use nidaqmx_sys as sys;
use nidaqmx_sys::{bool32, float64, int32, uInt32};
use serde::{Deserialize, Serialize};

macro_rules! daqmx_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $repr:ty {
            $( $(#[$vmeta:meta])* $variant:ident = $value:path ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub const fn raw(self) -> $repr {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            pub fn from_raw(raw: $repr) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.raw() == raw)
            }
        }

        impl From<$name> for $repr {
            fn from(value: $name) -> $repr {
                value.raw()
            }
        }
    };
}

daqmx_enum! {
    /// Input terminal configuration of an analog input channel.
    pub enum TerminalConfig: int32 {
        Default = sys::DAQmx_Val_Cfg_Default,
        Rse = sys::DAQmx_Val_RSE,
        Nrse = sys::DAQmx_Val_NRSE,
        Diff = sys::DAQmx_Val_Diff,
        PseudoDiff = sys::DAQmx_Val_PseudoDiff,
    }
}

daqmx_enum! {
    pub enum VoltageUnits: int32 {
        Volts = sys::DAQmx_Val_Volts,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
        FromTeds = sys::DAQmx_Val_FromTEDS,
    }
}

daqmx_enum! {
    pub enum CurrentUnits: int32 {
        Amps = sys::DAQmx_Val_Amps,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
    }
}

daqmx_enum! {
    pub enum TemperatureUnits: int32 {
        DegC = sys::DAQmx_Val_DegC,
        DegF = sys::DAQmx_Val_DegF,
        Kelvins = sys::DAQmx_Val_Kelvins,
        DegR = sys::DAQmx_Val_DegR,
    }
}

daqmx_enum! {
    pub enum ResistanceUnits: int32 {
        Ohms = sys::DAQmx_Val_Ohms,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
    }
}

daqmx_enum! {
    pub enum ShuntResistorLocation: int32 {
        Default = sys::DAQmx_Val_Default,
        Internal = sys::DAQmx_Val_Internal,
        External = sys::DAQmx_Val_External,
    }
}

daqmx_enum! {
    pub enum ThermocoupleType: int32 {
        J = sys::DAQmx_Val_J_Type_TC,
        K = sys::DAQmx_Val_K_Type_TC,
        N = sys::DAQmx_Val_N_Type_TC,
        R = sys::DAQmx_Val_R_Type_TC,
        S = sys::DAQmx_Val_S_Type_TC,
        T = sys::DAQmx_Val_T_Type_TC,
        B = sys::DAQmx_Val_B_Type_TC,
        E = sys::DAQmx_Val_E_Type_TC,
    }
}

daqmx_enum! {
    /// Cold-junction compensation source of a thermocouple channel.
    pub enum CjcSource: int32 {
        BuiltIn = sys::DAQmx_Val_BuiltIn,
        ConstVal = sys::DAQmx_Val_ConstVal,
        Chan = sys::DAQmx_Val_Chan,
    }
}

daqmx_enum! {
    pub enum RtdType: int32 {
        Pt3750 = sys::DAQmx_Val_Pt3750,
        Pt3851 = sys::DAQmx_Val_Pt3851,
        Pt3911 = sys::DAQmx_Val_Pt3911,
        Pt3916 = sys::DAQmx_Val_Pt3916,
        Pt3920 = sys::DAQmx_Val_Pt3920,
        Pt3928 = sys::DAQmx_Val_Pt3928,
        Custom = sys::DAQmx_Val_Custom,
    }
}

daqmx_enum! {
    pub enum ResistanceConfig: int32 {
        TwoWire = sys::DAQmx_Val_2Wire,
        ThreeWire = sys::DAQmx_Val_3Wire,
        FourWire = sys::DAQmx_Val_4Wire,
    }
}

daqmx_enum! {
    pub enum ExcitationSource: int32 {
        Internal = sys::DAQmx_Val_Internal,
        External = sys::DAQmx_Val_External,
        None = sys::DAQmx_Val_None,
    }
}

daqmx_enum! {
    pub enum LineGrouping: int32 {
        ChanPerLine = sys::DAQmx_Val_ChanPerLine,
        ChanForAllLines = sys::DAQmx_Val_ChanForAllLines,
    }
}

daqmx_enum! {
    /// Active edge of a clock or trigger. Also used for analog trigger slopes.
    pub enum Edge: int32 {
        Rising = sys::DAQmx_Val_Rising,
        Falling = sys::DAQmx_Val_Falling,
    }
}

daqmx_enum! {
    pub enum SampleMode: int32 {
        Finite = sys::DAQmx_Val_FiniteSamps,
        Continuous = sys::DAQmx_Val_ContSamps,
        HwTimedSinglePoint = sys::DAQmx_Val_HWTimedSinglePoint,
    }
}

daqmx_enum! {
    pub enum CountDirection: int32 {
        Up = sys::DAQmx_Val_CountUp,
        Down = sys::DAQmx_Val_CountDown,
        ExternallyControlled = sys::DAQmx_Val_ExtControlled,
    }
}

daqmx_enum! {
    pub enum FrequencyUnits: int32 {
        Hz = sys::DAQmx_Val_Hz,
        Ticks = sys::DAQmx_Val_Ticks,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
    }
}

daqmx_enum! {
    pub enum TimeUnits: int32 {
        Seconds = sys::DAQmx_Val_Seconds,
        Ticks = sys::DAQmx_Val_Ticks,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
    }
}

daqmx_enum! {
    pub enum AngleUnits: int32 {
        Degrees = sys::DAQmx_Val_Degrees,
        Radians = sys::DAQmx_Val_Radians,
        Ticks = sys::DAQmx_Val_Ticks,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
    }
}

daqmx_enum! {
    pub enum LengthUnits: int32 {
        Meters = sys::DAQmx_Val_Meters,
        Inches = sys::DAQmx_Val_Inches,
        Ticks = sys::DAQmx_Val_Ticks,
        FromCustomScale = sys::DAQmx_Val_FromCustomScale,
    }
}

daqmx_enum! {
    /// How a counter measures frequency or period.
    pub enum MeasurementMethod: int32 {
        LowFreq1Ctr = sys::DAQmx_Val_LowFreq1Ctr,
        HighFreq2Ctr = sys::DAQmx_Val_HighFreq2Ctr,
        LargeRng2Ctr = sys::DAQmx_Val_LargeRng2Ctr,
    }
}

daqmx_enum! {
    pub enum EncoderType: int32 {
        X1 = sys::DAQmx_Val_X1,
        X2 = sys::DAQmx_Val_X2,
        X4 = sys::DAQmx_Val_X4,
        TwoPulseCounting = sys::DAQmx_Val_TwoPulseCounting,
    }
}

daqmx_enum! {
    pub enum EncoderZIndexPhase: int32 {
        AHighBHigh = sys::DAQmx_Val_AHighBHigh,
        AHighBLow = sys::DAQmx_Val_AHighBLow,
        ALowBHigh = sys::DAQmx_Val_ALowBHigh,
        ALowBLow = sys::DAQmx_Val_ALowBLow,
    }
}

daqmx_enum! {
    pub enum Level: int32 {
        High = sys::DAQmx_Val_High,
        Low = sys::DAQmx_Val_Low,
    }
}

daqmx_enum! {
    /// State a watchdog drives its lines to on expiration.
    pub enum ExpirationState: int32 {
        High = sys::DAQmx_Val_High,
        Low = sys::DAQmx_Val_Low,
        Tristate = sys::DAQmx_Val_Tristate,
        NoChange = sys::DAQmx_Val_NoChange,
    }
}

daqmx_enum! {
    pub enum TaskAction: int32 {
        Start = sys::DAQmx_Val_Task_Start,
        Stop = sys::DAQmx_Val_Task_Stop,
        Verify = sys::DAQmx_Val_Task_Verify,
        Commit = sys::DAQmx_Val_Task_Commit,
        Reserve = sys::DAQmx_Val_Task_Reserve,
        Unreserve = sys::DAQmx_Val_Task_Unreserve,
        Abort = sys::DAQmx_Val_Task_Abort,
    }
}

daqmx_enum! {
    /// Signals a task can export, route or raise events for.
    pub enum Signal: int32 {
        AiConvertClock = sys::DAQmx_Val_AIConvertClock,
        RefClock10MHz = sys::DAQmx_Val_10MHzRefClock,
        Timebase20MHz = sys::DAQmx_Val_20MHzTimebaseClock,
        SampleClock = sys::DAQmx_Val_SampleClock,
        AdvanceTrigger = sys::DAQmx_Val_AdvanceTrigger,
        PauseTrigger = sys::DAQmx_Val_PauseTrigger,
        ReferenceTrigger = sys::DAQmx_Val_ReferenceTrigger,
        StartTrigger = sys::DAQmx_Val_StartTrigger,
        AdvCmpltEvent = sys::DAQmx_Val_AdvCmpltEvent,
        AiHoldCmpltEvent = sys::DAQmx_Val_AIHoldCmpltEvent,
        CounterOutputEvent = sys::DAQmx_Val_CounterOutputEvent,
        ChangeDetectionEvent = sys::DAQmx_Val_ChangeDetectionEvent,
        WatchdogExpiredEvent = sys::DAQmx_Val_WDTExpiredEvent,
        SampleCompleteEvent = sys::DAQmx_Val_SampleCompleteEvent,
    }
}

daqmx_enum! {
    pub enum RegenMode: int32 {
        AllowRegen = sys::DAQmx_Val_AllowRegen,
        DoNotAllowRegen = sys::DAQmx_Val_DoNotAllowRegen,
    }
}

daqmx_enum! {
    pub enum WindowCondition: int32 {
        EnteringWindow = sys::DAQmx_Val_EnteringWin,
        LeavingWindow = sys::DAQmx_Val_LeavingWin,
    }
}

daqmx_enum! {
    pub enum PatternCondition: int32 {
        Matches = sys::DAQmx_Val_PatternMatches,
        DoesNotMatch = sys::DAQmx_Val_PatternDoesNotMatch,
    }
}

daqmx_enum! {
    pub enum EveryNSamplesEvent: int32 {
        AcquiredIntoBuffer = sys::DAQmx_Val_Acquired_Into_Buffer,
        TransferredFromBuffer = sys::DAQmx_Val_Transferred_From_Buffer,
    }
}

daqmx_enum! {
    /// Sample ordering of multi-channel arrays.
    pub enum DataLayout: bool32 {
        /// Non-interleaved: all samples of channel 0, then channel 1, ...
        GroupByChannel = sys::DAQmx_Val_GroupByChannel,
        /// Interleaved: one sample of every channel, then the next scan.
        GroupByScanNumber = sys::DAQmx_Val_GroupByScanNumber,
    }
}

daqmx_enum! {
    pub enum Polarity: int32 {
        DoNotInvert = sys::DAQmx_Val_DoNotInvertPolarity,
        Invert = sys::DAQmx_Val_InvertPolarity,
    }
}

daqmx_enum! {
    pub enum PathStatus: int32 {
        Available = sys::DAQmx_Val_PathStatus_Available,
        AlreadyExists = sys::DAQmx_Val_PathStatus_AlreadyExists,
        Unsupported = sys::DAQmx_Val_PathStatus_Unsupported,
        ChannelInUse = sys::DAQmx_Val_PathStatus_ChannelInUse,
        SourceChannelConflict = sys::DAQmx_Val_PathStatus_SourceChannelConflict,
        ChannelReservedForRouting = sys::DAQmx_Val_PathStatus_ChannelReservedForRouting,
    }
}

daqmx_enum! {
    pub enum RelayPosition: int32 {
        Open = sys::DAQmx_Val_Open,
        Closed = sys::DAQmx_Val_Closed,
    }
}

daqmx_enum! {
    pub enum WatchdogAction: int32 {
        ResetTimer = sys::DAQmx_Val_ResetTimer,
        ClearExpiration = sys::DAQmx_Val_ClearExpiration,
    }
}

daqmx_enum! {
    pub enum TedsWriteOption: int32 {
        DoNotWrite = sys::DAQmx_Val_DoNotWrite,
        WriteToEeprom = sys::DAQmx_Val_WriteToEEPROM,
        WriteToProm = sys::DAQmx_Val_WriteToPROM,
    }
}

daqmx_enum! {
    /// Units of the raw values a custom scale converts from.
    pub enum PreScaledUnits: int32 {
        Volts = sys::DAQmx_Val_Volts,
        Amps = sys::DAQmx_Val_Amps,
        DegF = sys::DAQmx_Val_DegF,
        DegC = sys::DAQmx_Val_DegC,
        DegR = sys::DAQmx_Val_DegR,
        Kelvins = sys::DAQmx_Val_Kelvins,
        Strain = sys::DAQmx_Val_Strain,
        Ohms = sys::DAQmx_Val_Ohms,
        Hz = sys::DAQmx_Val_Hz,
        Seconds = sys::DAQmx_Val_Seconds,
        Meters = sys::DAQmx_Val_Meters,
        Inches = sys::DAQmx_Val_Inches,
        Degrees = sys::DAQmx_Val_Degrees,
        Radians = sys::DAQmx_Val_Radians,
        Ticks = sys::DAQmx_Val_Ticks,
        G = sys::DAQmx_Val_g,
    }
}

daqmx_enum! {
    pub enum ProductCategory: int32 {
        MSeriesDaq = sys::DAQmx_Val_MSeriesDAQ,
        XSeriesDaq = sys::DAQmx_Val_XSeriesDAQ,
        ESeriesDaq = sys::DAQmx_Val_ESeriesDAQ,
        SSeriesDaq = sys::DAQmx_Val_SSeriesDAQ,
        BSeriesDaq = sys::DAQmx_Val_BSeriesDAQ,
        ScSeriesDaq = sys::DAQmx_Val_SCSeriesDAQ,
        UsbDaq = sys::DAQmx_Val_USBDAQ,
        AoSeries = sys::DAQmx_Val_AOSeries,
        DigitalIo = sys::DAQmx_Val_DigitalIO,
        TioSeries = sys::DAQmx_Val_TIOSeries,
        DynamicSignalAcquisition = sys::DAQmx_Val_DynamicSignalAcquisition,
        Switches = sys::DAQmx_Val_Switches,
        CompactDaqChassis = sys::DAQmx_Val_CompactDAQChassis,
        CSeriesModule = sys::DAQmx_Val_CSeriesModule,
        ScxiModule = sys::DAQmx_Val_SCXIModule,
        SccConnectorBlock = sys::DAQmx_Val_SCCConnectorBlock,
        SccModule = sys::DAQmx_Val_SCCModule,
        NiElvis = sys::DAQmx_Val_NIELVIS,
        NetworkDaq = sys::DAQmx_Val_NetworkDAQ,
        Unknown = sys::DAQmx_Val_Unknown,
    }
}

daqmx_enum! {
    pub enum BusType: int32 {
        Pci = sys::DAQmx_Val_PCI,
        PciE = sys::DAQmx_Val_PCIe,
        Pxi = sys::DAQmx_Val_PXI,
        PxiE = sys::DAQmx_Val_PXIe,
        Scxi = sys::DAQmx_Val_SCXI,
        Scc = sys::DAQmx_Val_SCC,
        PcCard = sys::DAQmx_Val_PCCard,
        Usb = sys::DAQmx_Val_USB,
        CompactDaq = sys::DAQmx_Val_CompactDAQ,
        TcpIp = sys::DAQmx_Val_TCPIP,
        SwitchBlock = sys::DAQmx_Val_SwitchBlock,
        Unknown = sys::DAQmx_Val_Unknown,
    }
}

/// Timeout in seconds for reads, writes and waits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeout(float64);

impl Timeout {
    /// Block until the operation completes.
    pub const FOREVER: Timeout = Timeout(sys::DAQmx_Val_WaitInfinitely);
    /// Try once and return immediately.
    pub const NONE: Timeout = Timeout(0.0);

    /// Negative values mean wait forever, as they do for the driver.
    pub fn from_secs(secs: f64) -> Self {
        if secs < 0.0 {
            Self::FOREVER
        } else {
            Timeout(secs)
        }
    }

    pub fn secs(self) -> float64 {
        self.0
    }

    pub fn is_forever(self) -> bool {
        self.0 < 0.0
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        Timeout(duration.as_secs_f64())
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Timeout(10.0)
    }
}

bitflags! {
    /// Options for `DAQmxSaveTask`, `DAQmxSaveGlobalChan` and `DAQmxSaveScale`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SaveOptions: uInt32 {
        const OVERWRITE = sys::DAQmx_Val_Save_Overwrite;
        const ALLOW_INTERACTIVE_EDITING = sys::DAQmx_Val_Save_AllowInteractiveEditing;
        const ALLOW_INTERACTIVE_DELETION = sys::DAQmx_Val_Save_AllowInteractiveDeletion;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_round_trip() {
        for &cfg in TerminalConfig::ALL {
            assert_eq!(TerminalConfig::from_raw(cfg.raw()), Some(cfg));
        }
        assert_eq!(Edge::Rising.raw(), 10280);
        assert_eq!(i32::from(SampleMode::Finite), 10178);
        assert_eq!(DataLayout::GroupByScanNumber.raw(), 1);
        assert_eq!(SampleMode::from_raw(42), None);
    }

    #[test]
    fn deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Holder {
            cfg: TerminalConfig,
            mode: SampleMode,
            units: VoltageUnits,
        }
        let h: Holder =
            toml::from_str("cfg = \"pseudo_diff\"\nmode = \"hw_timed_single_point\"\nunits = \"from_custom_scale\"")
                .unwrap();
        assert_eq!(h.cfg, TerminalConfig::PseudoDiff);
        assert_eq!(h.mode, SampleMode::HwTimedSinglePoint);
        assert_eq!(h.units, VoltageUnits::FromCustomScale);
    }

    #[test]
    fn timeout_conversions() {
        assert!(Timeout::FOREVER.is_forever());
        assert_eq!(Timeout::from_secs(-5.0), Timeout::FOREVER);
        assert_eq!(Timeout::from(Duration::from_millis(1500)).secs(), 1.5);
        assert_eq!(Timeout::NONE.secs(), 0.0);
    }

    #[test]
    fn save_options_bits() {
        let opts = SaveOptions::OVERWRITE | SaveOptions::ALLOW_INTERACTIVE_DELETION;
        assert_eq!(opts.bits(), 0b101);
        assert_eq!(SaveOptions::default().bits(), 0);
    }
}
