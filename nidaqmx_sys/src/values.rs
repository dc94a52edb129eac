//! Value sets (`DAQmx_Val_*`) accepted by function arguments and attributes.
//!
//! Most sets are plain `int32` enumerations. A handful of values are typed
//! after the parameter they feed: the data layout flag is a `bool32`, the
//! infinite timeout is a `float64`, and the save and callback options are
//! `uInt32` bit masks.

use crate::types::{bool32, float64, int32, uInt32};

//********** Defaults **********
pub const DAQmx_Val_Cfg_Default: int32 = -1;
pub const DAQmx_Val_Default: int32 = -1;
pub const DAQmx_Val_Auto: int32 = -1;
pub const DAQmx_Val_WaitInfinitely: float64 = -1.0;

//********** Data layout (fillMode / dataLayout) **********
pub const DAQmx_Val_GroupByChannel: bool32 = 0;
pub const DAQmx_Val_GroupByScanNumber: bool32 = 1;

//********** Line grouping **********
pub const DAQmx_Val_ChanPerLine: int32 = 0;
pub const DAQmx_Val_ChanForAllLines: int32 = 1;

//********** Edges and slopes **********
pub const DAQmx_Val_Rising: int32 = 10280;
pub const DAQmx_Val_Falling: int32 = 10171;
pub const DAQmx_Val_RisingSlope: int32 = 10280;
pub const DAQmx_Val_FallingSlope: int32 = 10171;

//********** Sample modes **********
pub const DAQmx_Val_FiniteSamps: int32 = 10178;
pub const DAQmx_Val_ContSamps: int32 = 10123;
pub const DAQmx_Val_HWTimedSinglePoint: int32 = 12522;

//********** Terminal configurations **********
pub const DAQmx_Val_RSE: int32 = 10083;
pub const DAQmx_Val_NRSE: int32 = 10078;
pub const DAQmx_Val_Diff: int32 = 10106;
pub const DAQmx_Val_PseudoDiff: int32 = 12529;

//********** Units **********
pub const DAQmx_Val_Volts: int32 = 10348;
pub const DAQmx_Val_Amps: int32 = 10342;
pub const DAQmx_Val_DegF: int32 = 10144;
pub const DAQmx_Val_DegC: int32 = 10143;
pub const DAQmx_Val_DegR: int32 = 10145;
pub const DAQmx_Val_Kelvins: int32 = 10325;
pub const DAQmx_Val_Strain: int32 = 10299;
pub const DAQmx_Val_Ohms: int32 = 10384;
pub const DAQmx_Val_Hz: int32 = 10373;
pub const DAQmx_Val_Seconds: int32 = 10364;
pub const DAQmx_Val_Meters: int32 = 10219;
pub const DAQmx_Val_Inches: int32 = 10379;
pub const DAQmx_Val_Degrees: int32 = 10146;
pub const DAQmx_Val_Radians: int32 = 10273;
pub const DAQmx_Val_Ticks: int32 = 10304;
pub const DAQmx_Val_g: int32 = 10186;
pub const DAQmx_Val_FromCustomScale: int32 = 10065;
pub const DAQmx_Val_FromTEDS: int32 = 12516;

//********** Thermocouple types **********
pub const DAQmx_Val_J_Type_TC: int32 = 10072;
pub const DAQmx_Val_K_Type_TC: int32 = 10073;
pub const DAQmx_Val_N_Type_TC: int32 = 10077;
pub const DAQmx_Val_R_Type_TC: int32 = 10082;
pub const DAQmx_Val_S_Type_TC: int32 = 10085;
pub const DAQmx_Val_T_Type_TC: int32 = 10086;
pub const DAQmx_Val_B_Type_TC: int32 = 10047;
pub const DAQmx_Val_E_Type_TC: int32 = 10055;

//********** Cold-junction compensation sources **********
pub const DAQmx_Val_BuiltIn: int32 = 10200;
pub const DAQmx_Val_ConstVal: int32 = 10116;
pub const DAQmx_Val_Chan: int32 = 10113;

//********** RTD types **********
pub const DAQmx_Val_Pt3750: int32 = 12481;
pub const DAQmx_Val_Pt3851: int32 = 10071;
pub const DAQmx_Val_Pt3911: int32 = 12482;
pub const DAQmx_Val_Pt3916: int32 = 10069;
pub const DAQmx_Val_Pt3920: int32 = 10053;
pub const DAQmx_Val_Pt3928: int32 = 12483;
pub const DAQmx_Val_Custom: int32 = 10137;

//********** Resistance configurations **********
pub const DAQmx_Val_2Wire: int32 = 2;
pub const DAQmx_Val_3Wire: int32 = 3;
pub const DAQmx_Val_4Wire: int32 = 4;

//********** Excitation sources / shunt locations **********
pub const DAQmx_Val_Internal: int32 = 10200;
pub const DAQmx_Val_External: int32 = 10167;
pub const DAQmx_Val_None: int32 = 10230;

//********** Bridge configurations **********
pub const DAQmx_Val_FullBridge: int32 = 10182;
pub const DAQmx_Val_HalfBridge: int32 = 10187;
pub const DAQmx_Val_QuarterBridge: int32 = 10270;
pub const DAQmx_Val_NoBridge: int32 = 10228;

//********** Strain gage configurations **********
pub const DAQmx_Val_FullBridgeI: int32 = 10183;
pub const DAQmx_Val_FullBridgeII: int32 = 10184;
pub const DAQmx_Val_FullBridgeIII: int32 = 10185;
pub const DAQmx_Val_HalfBridgeI: int32 = 10188;
pub const DAQmx_Val_HalfBridgeII: int32 = 10189;
pub const DAQmx_Val_QuarterBridgeI: int32 = 10271;
pub const DAQmx_Val_QuarterBridgeII: int32 = 10272;

//********** Accelerometer sensitivity units **********
pub const DAQmx_Val_mVoltsPerG: int32 = 12509;
pub const DAQmx_Val_VoltsPerG: int32 = 12510;

//********** Coupling **********
pub const DAQmx_Val_AC: int32 = 10045;
pub const DAQmx_Val_DC: int32 = 10050;
pub const DAQmx_Val_GND: int32 = 10066;

//********** Auto zero modes **********
pub const DAQmx_Val_Once: int32 = 10244;
pub const DAQmx_Val_EverySample: int32 = 10164;

//********** Counter directions **********
pub const DAQmx_Val_CountUp: int32 = 10128;
pub const DAQmx_Val_CountDown: int32 = 10124;
pub const DAQmx_Val_ExtControlled: int32 = 10326;

//********** Counter frequency measurement methods **********
pub const DAQmx_Val_LowFreq1Ctr: int32 = 10105;
pub const DAQmx_Val_HighFreq2Ctr: int32 = 10157;
pub const DAQmx_Val_LargeRng2Ctr: int32 = 10205;

//********** Encoder decoding types **********
pub const DAQmx_Val_X1: int32 = 10090;
pub const DAQmx_Val_X2: int32 = 10091;
pub const DAQmx_Val_X4: int32 = 10092;
pub const DAQmx_Val_TwoPulseCounting: int32 = 10313;

//********** Encoder Z index phases **********
pub const DAQmx_Val_AHighBHigh: int32 = 10040;
pub const DAQmx_Val_AHighBLow: int32 = 10041;
pub const DAQmx_Val_ALowBHigh: int32 = 10042;
pub const DAQmx_Val_ALowBLow: int32 = 10043;

//********** Levels and idle states **********
pub const DAQmx_Val_High: int32 = 10192;
pub const DAQmx_Val_Low: int32 = 10214;
pub const DAQmx_Val_Tristate: int32 = 10310;
pub const DAQmx_Val_NoChange: int32 = 10160;

//********** Measurement and output types **********
pub const DAQmx_Val_Voltage: int32 = 10322;
pub const DAQmx_Val_Current: int32 = 10134;
pub const DAQmx_Val_Temp_TC: int32 = 10303;
pub const DAQmx_Val_Temp_RTD: int32 = 10301;
pub const DAQmx_Val_Resistance: int32 = 10278;
pub const DAQmx_Val_Strain_Gage: int32 = 10300;
pub const DAQmx_Val_Temp_BuiltInSensor: int32 = 10311;
pub const DAQmx_Val_Accelerometer: int32 = 10356;
pub const DAQmx_Val_CountEdges: int32 = 10125;
pub const DAQmx_Val_Freq: int32 = 10179;
pub const DAQmx_Val_Period: int32 = 10256;
pub const DAQmx_Val_PulseWidth: int32 = 10359;
pub const DAQmx_Val_SemiPeriod: int32 = 10289;
pub const DAQmx_Val_TwoEdgeSep: int32 = 10267;
pub const DAQmx_Val_Position_AngEncoder: int32 = 10360;
pub const DAQmx_Val_Position_LinEncoder: int32 = 10361;
pub const DAQmx_Val_Pulse_Time: int32 = 10269;
pub const DAQmx_Val_Pulse_Freq: int32 = 10119;
pub const DAQmx_Val_Pulse_Ticks: int32 = 10268;

//********** Channel types **********
pub const DAQmx_Val_AI: int32 = 10100;
pub const DAQmx_Val_AO: int32 = 10102;
pub const DAQmx_Val_DI: int32 = 10151;
pub const DAQmx_Val_DO: int32 = 10153;
pub const DAQmx_Val_CI: int32 = 10131;
pub const DAQmx_Val_CO: int32 = 10132;

//********** Idle output behaviors / drive types **********
pub const DAQmx_Val_ZeroVolts: int32 = 12526;
pub const DAQmx_Val_HighImpedance: int32 = 12527;
pub const DAQmx_Val_MaintainExistingValue: int32 = 12528;
pub const DAQmx_Val_ActiveDrive: int32 = 12573;
pub const DAQmx_Val_OpenCollector: int32 = 12574;

//********** Exported signal output behaviors **********
pub const DAQmx_Val_Pulse: int32 = 10265;
pub const DAQmx_Val_Toggle: int32 = 10307;
pub const DAQmx_Val_Lvl: int32 = 10210;
pub const DAQmx_Val_Interlocked: int32 = 12549;

//********** Delay units **********
pub const DAQmx_Val_SampClkPeriods: int32 = 10286;

//********** Signal IDs **********
pub const DAQmx_Val_AIConvertClock: int32 = 12484;
pub const DAQmx_Val_10MHzRefClock: int32 = 12536;
pub const DAQmx_Val_20MHzTimebaseClock: int32 = 12486;
pub const DAQmx_Val_SampleClock: int32 = 12487;
pub const DAQmx_Val_AdvanceTrigger: int32 = 12488;
pub const DAQmx_Val_PauseTrigger: int32 = 12489;
pub const DAQmx_Val_ReferenceTrigger: int32 = 12490;
pub const DAQmx_Val_StartTrigger: int32 = 12491;
pub const DAQmx_Val_AdvCmpltEvent: int32 = 12492;
pub const DAQmx_Val_AIHoldCmpltEvent: int32 = 12493;
pub const DAQmx_Val_CounterOutputEvent: int32 = 12494;
pub const DAQmx_Val_ChangeDetectionEvent: int32 = 12511;
pub const DAQmx_Val_WDTExpiredEvent: int32 = 12512;
pub const DAQmx_Val_SampleCompleteEvent: int32 = 12530;

//********** Task actions (DAQmxTaskControl) **********
pub const DAQmx_Val_Task_Start: int32 = 0;
pub const DAQmx_Val_Task_Stop: int32 = 1;
pub const DAQmx_Val_Task_Verify: int32 = 2;
pub const DAQmx_Val_Task_Commit: int32 = 3;
pub const DAQmx_Val_Task_Reserve: int32 = 4;
pub const DAQmx_Val_Task_Unreserve: int32 = 5;
pub const DAQmx_Val_Task_Abort: int32 = 6;

//********** Regeneration modes **********
pub const DAQmx_Val_AllowRegen: int32 = 10097;
pub const DAQmx_Val_DoNotAllowRegen: int32 = 10158;

//********** Read / write relative-to positions **********
pub const DAQmx_Val_FirstSample: int32 = 10424;
pub const DAQmx_Val_CurrReadPos: int32 = 10425;
pub const DAQmx_Val_RefTrig: int32 = 10426;
pub const DAQmx_Val_FirstPretrigSamp: int32 = 10427;
pub const DAQmx_Val_MostRecentSamp: int32 = 10428;
pub const DAQmx_Val_CurrWritePos: int32 = 10430;

//********** Overwrite modes **********
pub const DAQmx_Val_OverwriteUnreadSamps: int32 = 10252;
pub const DAQmx_Val_DoNotOverwriteUnreadSamps: int32 = 10159;

//********** Wait modes **********
pub const DAQmx_Val_WaitForInterrupt: int32 = 12523;
pub const DAQmx_Val_Poll: int32 = 12524;
pub const DAQmx_Val_Yield: int32 = 12525;
pub const DAQmx_Val_Sleep: int32 = 12547;

//********** Data transfer mechanisms **********
pub const DAQmx_Val_DMA: int32 = 10054;
pub const DAQmx_Val_Interrupts: int32 = 10204;
pub const DAQmx_Val_ProgrammedIO: int32 = 10264;
pub const DAQmx_Val_USBbulk: int32 = 12590;

//********** Timing types **********
pub const DAQmx_Val_SampClk: int32 = 10388;
pub const DAQmx_Val_Handshake: int32 = 10389;
pub const DAQmx_Val_Implicit: int32 = 10451;
pub const DAQmx_Val_OnDemand: int32 = 10390;
pub const DAQmx_Val_ChangeDetection: int32 = 12504;

//********** Trigger types **********
pub const DAQmx_Val_AnlgEdge: int32 = 10099;
pub const DAQmx_Val_AnlgWin: int32 = 10103;
pub const DAQmx_Val_AnlgLvl: int32 = 10101;
pub const DAQmx_Val_DigEdge: int32 = 10150;
pub const DAQmx_Val_DigLvl: int32 = 10152;
pub const DAQmx_Val_DigPattern: int32 = 10398;

//********** Trigger conditions **********
pub const DAQmx_Val_EnteringWin: int32 = 10163;
pub const DAQmx_Val_LeavingWin: int32 = 10208;
pub const DAQmx_Val_InsideWin: int32 = 10199;
pub const DAQmx_Val_OutsideWin: int32 = 10251;
pub const DAQmx_Val_PatternMatches: int32 = 10254;
pub const DAQmx_Val_PatternDoesNotMatch: int32 = 10253;
pub const DAQmx_Val_AboveLvl: int32 = 10093;
pub const DAQmx_Val_BelowLvl: int32 = 10107;

//********** Event types and callback options **********
pub const DAQmx_Val_Acquired_Into_Buffer: int32 = 1;
pub const DAQmx_Val_Transferred_From_Buffer: int32 = 2;
pub const DAQmx_Val_SynchronousEventCallbacks: uInt32 = 1 << 0;

//********** Save options **********
pub const DAQmx_Val_Save_Overwrite: uInt32 = 1 << 0;
pub const DAQmx_Val_Save_AllowInteractiveEditing: uInt32 = 1 << 1;
pub const DAQmx_Val_Save_AllowInteractiveDeletion: uInt32 = 1 << 2;

//********** Polarity modifiers (DAQmxConnectTerms) **********
pub const DAQmx_Val_DoNotInvertPolarity: int32 = 0;
pub const DAQmx_Val_InvertPolarity: int32 = 1;

//********** Watchdog control actions **********
pub const DAQmx_Val_ResetTimer: int32 = 0;
pub const DAQmx_Val_ClearExpiration: int32 = 1;

//********** External calibration close actions **********
pub const DAQmx_Val_Action_Commit: int32 = 0;
pub const DAQmx_Val_Action_Cancel: int32 = 1;

//********** TEDS write options **********
pub const DAQmx_Val_DoNotWrite: int32 = 12540;
pub const DAQmx_Val_WriteToEEPROM: int32 = 12538;
pub const DAQmx_Val_WriteToPROM: int32 = 12539;

//********** Switch path status **********
pub const DAQmx_Val_PathStatus_Available: int32 = 10431;
pub const DAQmx_Val_PathStatus_AlreadyExists: int32 = 10432;
pub const DAQmx_Val_PathStatus_Unsupported: int32 = 10433;
pub const DAQmx_Val_PathStatus_ChannelInUse: int32 = 10434;
pub const DAQmx_Val_PathStatus_SourceChannelConflict: int32 = 10435;
pub const DAQmx_Val_PathStatus_ChannelReservedForRouting: int32 = 10436;

//********** Switch relay positions **********
pub const DAQmx_Val_Open: int32 = 10437;
pub const DAQmx_Val_Closed: int32 = 10438;

//********** Switch channel usage / scan modes **********
pub const DAQmx_Val_Source: int32 = 10439;
pub const DAQmx_Val_Load: int32 = 10440;
pub const DAQmx_Val_ReservedForRouting: int32 = 10441;
pub const DAQmx_Val_NoAction: int32 = 10227;
pub const DAQmx_Val_BreakBeforeMake: int32 = 10110;
pub const DAQmx_Val_Finite: int32 = 10172;
pub const DAQmx_Val_Cont: int32 = 10117;

//********** Switch topologies **********
pub const DAQmx_Val_Switch_Topology_1127_Independent: &str = "1127/Independent";
pub const DAQmx_Val_Switch_Topology_1128_Independent: &str = "1128/Independent";
pub const DAQmx_Val_Switch_Topology_2501_1_Wire_48x1_Mux: &str = "2501/1-Wire 48x1 Mux";
pub const DAQmx_Val_Switch_Topology_2501_2_Wire_24x1_Mux: &str = "2501/2-Wire 24x1 Mux";
pub const DAQmx_Val_Switch_Topology_2529_2_Wire_8x16_Matrix: &str = "2529/2-Wire 8x16 Matrix";
pub const DAQmx_Val_Switch_Topology_2530_1_Wire_128x1_Mux: &str = "2530/1-Wire 128x1 Mux";
pub const DAQmx_Val_Switch_Topology_2565_Independent: &str = "2565/Independent";
pub const DAQmx_Val_Switch_Topology_2566_Independent: &str = "2566/Independent";
pub const DAQmx_Val_Switch_Topology_2570_Independent: &str = "2570/Independent";

//********** Scale types **********
pub const DAQmx_Val_Linear: int32 = 10447;
pub const DAQmx_Val_MapRanges: int32 = 10448;
pub const DAQmx_Val_Polynomial: int32 = 10449;
pub const DAQmx_Val_Table: int32 = 10450;

//********** Bus types **********
pub const DAQmx_Val_PCI: int32 = 12582;
pub const DAQmx_Val_PCIe: int32 = 13612;
pub const DAQmx_Val_PXI: int32 = 12583;
pub const DAQmx_Val_PXIe: int32 = 14706;
pub const DAQmx_Val_SCXI: int32 = 12584;
pub const DAQmx_Val_SCC: int32 = 14707;
pub const DAQmx_Val_PCCard: int32 = 12585;
pub const DAQmx_Val_USB: int32 = 12586;
pub const DAQmx_Val_CompactDAQ: int32 = 14637;
pub const DAQmx_Val_TCPIP: int32 = 14828;
pub const DAQmx_Val_SwitchBlock: int32 = 15870;
pub const DAQmx_Val_Unknown: int32 = 12588;

//********** Product categories **********
pub const DAQmx_Val_MSeriesDAQ: int32 = 14643;
pub const DAQmx_Val_XSeriesDAQ: int32 = 15858;
pub const DAQmx_Val_ESeriesDAQ: int32 = 14642;
pub const DAQmx_Val_SSeriesDAQ: int32 = 14644;
pub const DAQmx_Val_BSeriesDAQ: int32 = 14662;
pub const DAQmx_Val_SCSeriesDAQ: int32 = 14645;
pub const DAQmx_Val_USBDAQ: int32 = 14646;
pub const DAQmx_Val_AOSeries: int32 = 14647;
pub const DAQmx_Val_DigitalIO: int32 = 14648;
pub const DAQmx_Val_TIOSeries: int32 = 14661;
pub const DAQmx_Val_DynamicSignalAcquisition: int32 = 14649;
pub const DAQmx_Val_Switches: int32 = 14650;
pub const DAQmx_Val_CompactDAQChassis: int32 = 14658;
pub const DAQmx_Val_CSeriesModule: int32 = 14659;
pub const DAQmx_Val_SCXIModule: int32 = 14660;
pub const DAQmx_Val_SCCConnectorBlock: int32 = 14704;
pub const DAQmx_Val_SCCModule: int32 = 14705;
pub const DAQmx_Val_NIELVIS: int32 = 14755;
pub const DAQmx_Val_NetworkDAQ: int32 = 14829;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn common_values() {
        assert_eq!(DAQmx_Val_Rising, 10280);
        assert_eq!(DAQmx_Val_Volts, 10348);
        assert_eq!(DAQmx_Val_FiniteSamps, 10178);
        assert_eq!(DAQmx_Val_DoNotAllowRegen, 10158);
        assert_eq!(DAQmx_Val_ChanForAllLines, 1);
        assert_eq!(DAQmx_Val_StartTrigger, 12491);
        assert_eq!(DAQmx_Val_10MHzRefClock, 12536);
        assert_eq!(DAQmx_Val_WaitInfinitely, -1.0);
    }

    #[test]
    fn aliases_share_values() {
        // The header reuses codes across sets; the aliases must agree.
        assert_eq!(DAQmx_Val_RisingSlope, DAQmx_Val_Rising);
        assert_eq!(DAQmx_Val_FallingSlope, DAQmx_Val_Falling);
        assert_eq!(DAQmx_Val_BuiltIn, DAQmx_Val_Internal);
        assert_eq!(DAQmx_Val_Default, DAQmx_Val_Cfg_Default);
    }

    #[test]
    fn save_options_are_disjoint_bits() {
        let all = [
            DAQmx_Val_Save_Overwrite,
            DAQmx_Val_Save_AllowInteractiveEditing,
            DAQmx_Val_Save_AllowInteractiveDeletion,
        ];
        assert_eq!(all.iter().fold(0, |acc, bit| acc | bit), 0b111);
    }
}
