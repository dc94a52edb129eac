//! Attribute identifiers passed to the `DAQmxGet*Attribute` / `DAQmxSet*Attribute`
//! families. Grouped the same way the header groups them.

use crate::types::int32;

//********** Buffer Attributes **********
pub const DAQmx_Buf_Input_BufSize: int32 = 0x186C;
pub const DAQmx_Buf_Input_OnbrdBufSize: int32 = 0x230A;
pub const DAQmx_Buf_Output_BufSize: int32 = 0x186D;
pub const DAQmx_Buf_Output_OnbrdBufSize: int32 = 0x230B;

//********** Calibration Info Attributes **********
pub const DAQmx_SelfCal_Supported: int32 = 0x1860;
pub const DAQmx_SelfCal_LastTemp: int32 = 0x1864;
pub const DAQmx_ExtCal_RecommendedInterval: int32 = 0x1868;
pub const DAQmx_ExtCal_LastTemp: int32 = 0x1867;
pub const DAQmx_Cal_UserDefinedInfo: int32 = 0x1861;
pub const DAQmx_Cal_UserDefinedInfo_MaxSize: int32 = 0x191C;
pub const DAQmx_Cal_DevTemp: int32 = 0x223B;

//********** Channel Attributes **********
pub const DAQmx_AI_Max: int32 = 0x17DD;
pub const DAQmx_AI_Min: int32 = 0x17DE;
pub const DAQmx_AI_CustomScaleName: int32 = 0x17E0;
pub const DAQmx_AI_MeasType: int32 = 0x0695;
pub const DAQmx_AI_Voltage_Units: int32 = 0x1094;
pub const DAQmx_AI_Temp_Units: int32 = 0x1033;
pub const DAQmx_AI_Thrmcpl_Type: int32 = 0x1050;
pub const DAQmx_AI_Thrmcpl_CJCSrc: int32 = 0x1035;
pub const DAQmx_AI_Thrmcpl_CJCVal: int32 = 0x1036;
pub const DAQmx_AI_RTD_Type: int32 = 0x1032;
pub const DAQmx_AI_RTD_R0: int32 = 0x1030;
pub const DAQmx_AI_Current_Units: int32 = 0x0701;
pub const DAQmx_AI_Resistance_Units: int32 = 0x0955;
pub const DAQmx_AI_Coupling: int32 = 0x0064;
pub const DAQmx_AI_TermCfg: int32 = 0x1097;
pub const DAQmx_AI_InputSrc: int32 = 0x2198;
pub const DAQmx_AI_Gain: int32 = 0x1818;
pub const DAQmx_AI_Rng_High: int32 = 0x1815;
pub const DAQmx_AI_Rng_Low: int32 = 0x1816;
pub const DAQmx_AI_Resolution: int32 = 0x1765;
pub const DAQmx_AI_AutoZeroMode: int32 = 0x1760;
pub const DAQmx_AI_DataXferMech: int32 = 0x1821;
pub const DAQmx_AI_Excit_Src: int32 = 0x17F4;
pub const DAQmx_AI_Excit_Val: int32 = 0x17F5;
pub const DAQmx_AI_Lowpass_Enable: int32 = 0x1802;
pub const DAQmx_AI_Lowpass_CutoffFreq: int32 = 0x1803;
pub const DAQmx_AO_Max: int32 = 0x1186;
pub const DAQmx_AO_Min: int32 = 0x1187;
pub const DAQmx_AO_CustomScaleName: int32 = 0x1188;
pub const DAQmx_AO_OutputType: int32 = 0x1108;
pub const DAQmx_AO_Voltage_Units: int32 = 0x1184;
pub const DAQmx_AO_Current_Units: int32 = 0x1109;
pub const DAQmx_AO_DAC_Rng_High: int32 = 0x182E;
pub const DAQmx_AO_DAC_Rng_Low: int32 = 0x182D;
pub const DAQmx_AO_DataXferMech: int32 = 0x0134;
pub const DAQmx_AO_IdleOutputBehavior: int32 = 0x2240;
pub const DAQmx_AO_TermCfg: int32 = 0x188E;
pub const DAQmx_AO_Resolution: int32 = 0x182C;
pub const DAQmx_DI_InvertLines: int32 = 0x0793;
pub const DAQmx_DI_NumLines: int32 = 0x2178;
pub const DAQmx_DI_DigFltr_Enable: int32 = 0x21D6;
pub const DAQmx_DI_DigFltr_MinPulseWidth: int32 = 0x21D7;
pub const DAQmx_DO_InvertLines: int32 = 0x1133;
pub const DAQmx_DO_NumLines: int32 = 0x2179;
pub const DAQmx_DO_Tristate: int32 = 0x18F3;
pub const DAQmx_DO_OutputDriveType: int32 = 0x1137;
pub const DAQmx_CI_Max: int32 = 0x189C;
pub const DAQmx_CI_Min: int32 = 0x189D;
pub const DAQmx_CI_MeasType: int32 = 0x18A0;
pub const DAQmx_CI_Freq_Units: int32 = 0x18A1;
pub const DAQmx_CI_Freq_Term: int32 = 0x18A2;
pub const DAQmx_CI_Period_Units: int32 = 0x18A3;
pub const DAQmx_CI_Period_Term: int32 = 0x18A4;
pub const DAQmx_CI_CountEdges_Term: int32 = 0x18C7;
pub const DAQmx_CI_CountEdges_Dir: int32 = 0x0696;
pub const DAQmx_CI_CountEdges_InitialCnt: int32 = 0x0698;
pub const DAQmx_CI_CountEdges_ActiveEdge: int32 = 0x0697;
pub const DAQmx_CI_AngEncoder_Units: int32 = 0x18A6;
pub const DAQmx_CI_AngEncoder_PulsesPerRev: int32 = 0x0875;
pub const DAQmx_CI_AngEncoder_InitialAngle: int32 = 0x0881;
pub const DAQmx_CI_LinEncoder_Units: int32 = 0x18A9;
pub const DAQmx_CI_LinEncoder_DistPerPulse: int32 = 0x0911;
pub const DAQmx_CI_Encoder_DecodingType: int32 = 0x21E6;
pub const DAQmx_CI_Encoder_AInputTerm: int32 = 0x219D;
pub const DAQmx_CI_Encoder_BInputTerm: int32 = 0x219E;
pub const DAQmx_CI_Encoder_ZInputTerm: int32 = 0x219F;
pub const DAQmx_CI_Encoder_ZIndexEnable: int32 = 0x0890;
pub const DAQmx_CI_Encoder_ZIndexVal: int32 = 0x0888;
pub const DAQmx_CI_Encoder_ZIndexPhase: int32 = 0x0889;
pub const DAQmx_CI_PulseWidth_Units: int32 = 0x0823;
pub const DAQmx_CI_PulseWidth_Term: int32 = 0x18AA;
pub const DAQmx_CI_PulseWidth_StartingEdge: int32 = 0x0825;
pub const DAQmx_CI_TwoEdgeSep_Units: int32 = 0x18AC;
pub const DAQmx_CI_SemiPeriod_Units: int32 = 0x18AF;
pub const DAQmx_CI_SemiPeriod_Term: int32 = 0x18B0;
pub const DAQmx_CI_CtrTimebaseSrc: int32 = 0x0143;
pub const DAQmx_CI_CtrTimebaseRate: int32 = 0x18B2;
pub const DAQmx_CI_Count: int32 = 0x0148;
pub const DAQmx_CI_OutputState: int32 = 0x0149;
pub const DAQmx_CI_TCReached: int32 = 0x0150;
pub const DAQmx_CI_DataXferMech: int32 = 0x0200;
pub const DAQmx_CI_NumPossiblyInvalidSamps: int32 = 0x193C;
pub const DAQmx_CO_OutputType: int32 = 0x18B5;
pub const DAQmx_CO_Pulse_IdleState: int32 = 0x1170;
pub const DAQmx_CO_Pulse_Term: int32 = 0x18E1;
pub const DAQmx_CO_Pulse_Time_Units: int32 = 0x18D6;
pub const DAQmx_CO_Pulse_HighTime: int32 = 0x18BA;
pub const DAQmx_CO_Pulse_LowTime: int32 = 0x18BB;
pub const DAQmx_CO_Pulse_Time_InitialDelay: int32 = 0x18BC;
pub const DAQmx_CO_Pulse_DutyCyc: int32 = 0x1176;
pub const DAQmx_CO_Pulse_Freq_Units: int32 = 0x18D5;
pub const DAQmx_CO_Pulse_Freq: int32 = 0x1178;
pub const DAQmx_CO_Pulse_Freq_InitialDelay: int32 = 0x0299;
pub const DAQmx_CO_Pulse_HighTicks: int32 = 0x1169;
pub const DAQmx_CO_Pulse_LowTicks: int32 = 0x1171;
pub const DAQmx_CO_Pulse_Ticks_InitialDelay: int32 = 0x0298;
pub const DAQmx_CO_CtrTimebaseSrc: int32 = 0x0339;
pub const DAQmx_CO_CtrTimebaseRate: int32 = 0x18C2;
pub const DAQmx_CO_Count: int32 = 0x0293;
pub const DAQmx_CO_OutputState: int32 = 0x0294;
pub const DAQmx_CO_AutoIncrCnt: int32 = 0x0295;
pub const DAQmx_CO_PulseDone: int32 = 0x190E;
pub const DAQmx_ChanType: int32 = 0x187F;
pub const DAQmx_PhysicalChanName: int32 = 0x18F5;
pub const DAQmx_ChanDescr: int32 = 0x1926;
pub const DAQmx_ChanIsGlobal: int32 = 0x2304;

//********** Exported Signal Attributes **********
pub const DAQmx_Exported_AIConvClk_OutputTerm: int32 = 0x1687;
pub const DAQmx_Exported_SampClk_OutputTerm: int32 = 0x1663;
pub const DAQmx_Exported_SampClk_OutputBehavior: int32 = 0x186B;
pub const DAQmx_Exported_StartTrig_OutputTerm: int32 = 0x0584;
pub const DAQmx_Exported_RefTrig_OutputTerm: int32 = 0x0590;
pub const DAQmx_Exported_CtrOutEvent_OutputTerm: int32 = 0x1717;
pub const DAQmx_Exported_CtrOutEvent_OutputBehavior: int32 = 0x174F;
pub const DAQmx_Exported_CtrOutEvent_Pulse_Polarity: int32 = 0x0718;
pub const DAQmx_Exported_10MHzRefClk_OutputTerm: int32 = 0x226E;
pub const DAQmx_Exported_20MHzTimebase_OutputTerm: int32 = 0x1657;
pub const DAQmx_Exported_WatchdogExpiredEvent_OutputTerm: int32 = 0x21AA;
pub const DAQmx_Exported_ChangeDetectEvent_OutputTerm: int32 = 0x2197;

//********** Device Attributes **********
pub const DAQmx_Dev_IsSimulated: int32 = 0x22CA;
pub const DAQmx_Dev_ProductCategory: int32 = 0x29A9;
pub const DAQmx_Dev_ProductType: int32 = 0x0631;
pub const DAQmx_Dev_ProductNum: int32 = 0x231D;
pub const DAQmx_Dev_SerialNum: int32 = 0x0632;
pub const DAQmx_Dev_AI_PhysicalChans: int32 = 0x231E;
pub const DAQmx_Dev_AI_MaxSingleChanRate: int32 = 0x298C;
pub const DAQmx_Dev_AI_MaxMultiChanRate: int32 = 0x298D;
pub const DAQmx_Dev_AI_MinRate: int32 = 0x298E;
pub const DAQmx_Dev_AI_VoltageRngs: int32 = 0x2990;
pub const DAQmx_Dev_AO_PhysicalChans: int32 = 0x231F;
pub const DAQmx_Dev_AO_MaxRate: int32 = 0x2997;
pub const DAQmx_Dev_AO_MinRate: int32 = 0x2998;
pub const DAQmx_Dev_AO_VoltageRngs: int32 = 0x299B;
pub const DAQmx_Dev_DI_Lines: int32 = 0x2320;
pub const DAQmx_Dev_DI_Ports: int32 = 0x2321;
pub const DAQmx_Dev_DO_Lines: int32 = 0x2322;
pub const DAQmx_Dev_DO_Ports: int32 = 0x2323;
pub const DAQmx_Dev_CI_PhysicalChans: int32 = 0x2324;
pub const DAQmx_Dev_CO_PhysicalChans: int32 = 0x2325;
pub const DAQmx_Dev_BusType: int32 = 0x2326;
pub const DAQmx_Dev_PCI_BusNum: int32 = 0x2327;
pub const DAQmx_Dev_PCI_DevNum: int32 = 0x2328;
pub const DAQmx_Dev_PXI_ChassisNum: int32 = 0x2329;
pub const DAQmx_Dev_PXI_SlotNum: int32 = 0x232A;
pub const DAQmx_Dev_NumDMAChans: int32 = 0x233C;
pub const DAQmx_Dev_Terminals: int32 = 0x2A40;
pub const DAQmx_Dev_Chassis_ModuleDevNames: int32 = 0x29B6;
pub const DAQmx_Dev_CompactDAQ_ChassisDevName: int32 = 0x29B7;
pub const DAQmx_Dev_CompactDAQ_SlotNum: int32 = 0x29B8;

//********** Persisted Task / Channel / Scale Attributes **********
pub const DAQmx_PersistedTask_Author: int32 = 0x22CC;
pub const DAQmx_PersistedTask_AllowInteractiveEditing: int32 = 0x22CD;
pub const DAQmx_PersistedTask_AllowInteractiveDeletion: int32 = 0x22CE;
pub const DAQmx_PersistedChan_Author: int32 = 0x22D0;
pub const DAQmx_PersistedChan_AllowInteractiveEditing: int32 = 0x22D1;
pub const DAQmx_PersistedChan_AllowInteractiveDeletion: int32 = 0x22D2;
pub const DAQmx_PersistedScale_Author: int32 = 0x22D4;
pub const DAQmx_PersistedScale_AllowInteractiveEditing: int32 = 0x22D5;
pub const DAQmx_PersistedScale_AllowInteractiveDeletion: int32 = 0x22D6;

//********** Physical Channel Attributes **********
pub const DAQmx_PhysicalChan_TEDS_MfgID: int32 = 0x21DA;
pub const DAQmx_PhysicalChan_TEDS_ModelNum: int32 = 0x21DB;
pub const DAQmx_PhysicalChan_TEDS_SerialNum: int32 = 0x21DC;
pub const DAQmx_PhysicalChan_TEDS_VersionNum: int32 = 0x21DD;
pub const DAQmx_PhysicalChan_TEDS_VersionLetter: int32 = 0x21DE;

//********** Read Attributes **********
pub const DAQmx_Read_RelativeTo: int32 = 0x190A;
pub const DAQmx_Read_Offset: int32 = 0x190B;
pub const DAQmx_Read_ChannelsToRead: int32 = 0x1823;
pub const DAQmx_Read_ReadAllAvailSamp: int32 = 0x1215;
pub const DAQmx_Read_AutoStart: int32 = 0x1826;
pub const DAQmx_Read_OverWrite: int32 = 0x1211;
pub const DAQmx_Read_CurrReadPos: int32 = 0x1221;
pub const DAQmx_Read_AvailSampPerChan: int32 = 0x1223;
pub const DAQmx_Read_TotalSampPerChanAcquired: int32 = 0x192A;
pub const DAQmx_Read_OverloadedChansExist: int32 = 0x2174;
pub const DAQmx_Read_OverloadedChans: int32 = 0x2175;
pub const DAQmx_Read_ChangeDetect_HasOverflowed: int32 = 0x2194;
pub const DAQmx_Read_RawDataWidth: int32 = 0x217A;
pub const DAQmx_Read_NumChans: int32 = 0x217B;
pub const DAQmx_Read_DigitalLines_BytesPerChan: int32 = 0x217C;
pub const DAQmx_Read_WaitMode: int32 = 0x2232;
pub const DAQmx_Read_SleepTime: int32 = 0x22B0;

//********** Real-Time Attributes **********
pub const DAQmx_RealTime_ConvLateErrorsToWarnings: int32 = 0x22EE;
pub const DAQmx_RealTime_NumOfWarmupIters: int32 = 0x22ED;
pub const DAQmx_RealTime_WaitForNextSampClkWaitMode: int32 = 0x22EF;
pub const DAQmx_RealTime_ReportMissedSamp: int32 = 0x2319;
pub const DAQmx_RealTime_WriteRecoveryMode: int32 = 0x231A;

//********** Scale Attributes **********
pub const DAQmx_Scale_Descr: int32 = 0x1226;
pub const DAQmx_Scale_ScaledUnits: int32 = 0x191B;
pub const DAQmx_Scale_PreScaledUnits: int32 = 0x18F7;
pub const DAQmx_Scale_Type: int32 = 0x1929;
pub const DAQmx_Scale_Lin_Slope: int32 = 0x1227;
pub const DAQmx_Scale_Lin_YIntercept: int32 = 0x1228;
pub const DAQmx_Scale_Map_ScaledMax: int32 = 0x1229;
pub const DAQmx_Scale_Map_PreScaledMax: int32 = 0x1231;
pub const DAQmx_Scale_Map_ScaledMin: int32 = 0x1230;
pub const DAQmx_Scale_Map_PreScaledMin: int32 = 0x1232;
pub const DAQmx_Scale_Poly_ForwardCoeff: int32 = 0x1234;
pub const DAQmx_Scale_Poly_ReverseCoeff: int32 = 0x1235;
pub const DAQmx_Scale_Table_ScaledVals: int32 = 0x1236;
pub const DAQmx_Scale_Table_PreScaledVals: int32 = 0x1237;

//********** Switch Channel / Device / Scan Attributes **********
pub const DAQmx_SwitchChan_Usage: int32 = 0x18E4;
pub const DAQmx_SwitchChan_AnlgBusSharingEnable: int32 = 0x2F9E;
pub const DAQmx_SwitchChan_MaxACCarryCurrent: int32 = 0x0648;
pub const DAQmx_SwitchChan_MaxACSwitchCurrent: int32 = 0x0646;
pub const DAQmx_SwitchChan_MaxACCarryPwr: int32 = 0x0642;
pub const DAQmx_SwitchChan_MaxACSwitchPwr: int32 = 0x0644;
pub const DAQmx_SwitchChan_MaxDCCarryCurrent: int32 = 0x0647;
pub const DAQmx_SwitchChan_MaxDCSwitchCurrent: int32 = 0x0645;
pub const DAQmx_SwitchChan_MaxDCCarryPwr: int32 = 0x0643;
pub const DAQmx_SwitchChan_MaxDCSwitchPwr: int32 = 0x0649;
pub const DAQmx_SwitchChan_MaxACVoltage: int32 = 0x0651;
pub const DAQmx_SwitchChan_MaxDCVoltage: int32 = 0x0650;
pub const DAQmx_SwitchChan_WireMode: int32 = 0x18E5;
pub const DAQmx_SwitchChan_Bandwidth: int32 = 0x0640;
pub const DAQmx_SwitchChan_Impedance: int32 = 0x0641;
pub const DAQmx_SwitchDev_SettlingTime: int32 = 0x1244;
pub const DAQmx_SwitchDev_AutoConnAnlgBus: int32 = 0x17DA;
pub const DAQmx_SwitchDev_PwrDownLatchRelaysAfterSettling: int32 = 0x22DB;
pub const DAQmx_SwitchDev_Settled: int32 = 0x1243;
pub const DAQmx_SwitchDev_RelayList: int32 = 0x17DC;
pub const DAQmx_SwitchDev_NumRelays: int32 = 0x18E6;
pub const DAQmx_SwitchDev_SwitchChanList: int32 = 0x18E7;
pub const DAQmx_SwitchDev_NumSwitchChans: int32 = 0x18E8;
pub const DAQmx_SwitchDev_NumRows: int32 = 0x18E9;
pub const DAQmx_SwitchDev_NumColumns: int32 = 0x18EA;
pub const DAQmx_SwitchDev_Topology: int32 = 0x193D;
pub const DAQmx_SwitchDev_Temperature: int32 = 0x301A;
pub const DAQmx_SwitchScan_BreakMode: int32 = 0x1247;
pub const DAQmx_SwitchScan_RepeatMode: int32 = 0x1248;
pub const DAQmx_SwitchScan_WaitingForAdv: int32 = 0x17D9;

//********** System Attributes **********
pub const DAQmx_Sys_GlobalChans: int32 = 0x1265;
pub const DAQmx_Sys_Scales: int32 = 0x1266;
pub const DAQmx_Sys_Tasks: int32 = 0x1267;
pub const DAQmx_Sys_DevNames: int32 = 0x193B;
pub const DAQmx_Sys_NIDAQMajorVersion: int32 = 0x1272;
pub const DAQmx_Sys_NIDAQMinorVersion: int32 = 0x1923;
pub const DAQmx_Sys_NIDAQUpdateVersion: int32 = 0x2F22;

//********** Task Attributes **********
pub const DAQmx_Task_Name: int32 = 0x1276;
pub const DAQmx_Task_Channels: int32 = 0x1273;
pub const DAQmx_Task_NumChans: int32 = 0x2181;
pub const DAQmx_Task_Devices: int32 = 0x230E;
pub const DAQmx_Task_NumDevices: int32 = 0x29BA;
pub const DAQmx_Task_Complete: int32 = 0x1274;

//********** Timing Attributes **********
pub const DAQmx_SampQuant_SampMode: int32 = 0x1300;
pub const DAQmx_SampQuant_SampPerChan: int32 = 0x1310;
pub const DAQmx_SampTimingType: int32 = 0x1347;
pub const DAQmx_SampClk_Rate: int32 = 0x1344;
pub const DAQmx_SampClk_MaxRate: int32 = 0x22C8;
pub const DAQmx_SampClk_Src: int32 = 0x1852;
pub const DAQmx_SampClk_ActiveEdge: int32 = 0x1301;
pub const DAQmx_SampClk_Timebase_Src: int32 = 0x1308;
pub const DAQmx_SampClk_Timebase_Rate: int32 = 0x1303;
pub const DAQmx_SampClk_DigFltr_Enable: int32 = 0x221E;
pub const DAQmx_AIConv_Src: int32 = 0x1502;
pub const DAQmx_AIConv_Rate: int32 = 0x1848;
pub const DAQmx_AIConv_MaxRate: int32 = 0x22C9;
pub const DAQmx_RefClk_Src: int32 = 0x1316;
pub const DAQmx_RefClk_Rate: int32 = 0x1315;
pub const DAQmx_MasterTimebase_Src: int32 = 0x1343;
pub const DAQmx_MasterTimebase_Rate: int32 = 0x1495;
pub const DAQmx_DelayFromSampClk_DelayUnits: int32 = 0x1304;
pub const DAQmx_DelayFromSampClk_Delay: int32 = 0x1317;
pub const DAQmx_SyncPulse_Src: int32 = 0x223D;
pub const DAQmx_ChangeDetect_DI_RisingEdgePhysicalChans: int32 = 0x2195;
pub const DAQmx_ChangeDetect_DI_FallingEdgePhysicalChans: int32 = 0x2196;
pub const DAQmx_OnDemand_SimultaneousAOEnable: int32 = 0x21A0;

//********** Trigger Attributes **********
pub const DAQmx_StartTrig_Type: int32 = 0x1393;
pub const DAQmx_DigEdge_StartTrig_Src: int32 = 0x1407;
pub const DAQmx_DigEdge_StartTrig_Edge: int32 = 0x1404;
pub const DAQmx_AnlgEdge_StartTrig_Src: int32 = 0x1398;
pub const DAQmx_AnlgEdge_StartTrig_Slope: int32 = 0x1397;
pub const DAQmx_AnlgEdge_StartTrig_Lvl: int32 = 0x1396;
pub const DAQmx_AnlgEdge_StartTrig_Hyst: int32 = 0x1395;
pub const DAQmx_AnlgWin_StartTrig_Src: int32 = 0x1400;
pub const DAQmx_AnlgWin_StartTrig_When: int32 = 0x1401;
pub const DAQmx_AnlgWin_StartTrig_Top: int32 = 0x1403;
pub const DAQmx_AnlgWin_StartTrig_Btm: int32 = 0x1402;
pub const DAQmx_StartTrig_Delay: int32 = 0x1856;
pub const DAQmx_StartTrig_DelayUnits: int32 = 0x18C8;
pub const DAQmx_StartTrig_Retriggerable: int32 = 0x190F;
pub const DAQmx_RefTrig_Type: int32 = 0x1419;
pub const DAQmx_RefTrig_PretrigSamples: int32 = 0x1445;
pub const DAQmx_DigEdge_RefTrig_Src: int32 = 0x1434;
pub const DAQmx_DigEdge_RefTrig_Edge: int32 = 0x1430;
pub const DAQmx_AnlgEdge_RefTrig_Src: int32 = 0x1424;
pub const DAQmx_AnlgEdge_RefTrig_Slope: int32 = 0x1423;
pub const DAQmx_AnlgEdge_RefTrig_Lvl: int32 = 0x1422;
pub const DAQmx_PauseTrig_Type: int32 = 0x1366;
pub const DAQmx_DigLvl_PauseTrig_Src: int32 = 0x1379;
pub const DAQmx_DigLvl_PauseTrig_When: int32 = 0x1380;
pub const DAQmx_ArmStartTrig_Type: int32 = 0x1414;
pub const DAQmx_DigEdge_ArmStartTrig_Src: int32 = 0x1417;
pub const DAQmx_DigEdge_ArmStartTrig_Edge: int32 = 0x1415;

//********** Watchdog Attributes **********
pub const DAQmx_Watchdog_Timeout: int32 = 0x21A9;
pub const DAQmx_WatchdogExpirTrig_Type: int32 = 0x21A3;
pub const DAQmx_DigEdge_WatchdogExpirTrig_Src: int32 = 0x21A4;
pub const DAQmx_DigEdge_WatchdogExpirTrig_Edge: int32 = 0x21A5;
pub const DAQmx_Watchdog_DO_ExpirState: int32 = 0x21A7;
pub const DAQmx_Watchdog_HasExpired: int32 = 0x21A8;

//********** Write Attributes **********
pub const DAQmx_Write_RelativeTo: int32 = 0x190C;
pub const DAQmx_Write_Offset: int32 = 0x190D;
pub const DAQmx_Write_RegenMode: int32 = 0x1453;
pub const DAQmx_Write_CurrWritePos: int32 = 0x1458;
pub const DAQmx_Write_SpaceAvail: int32 = 0x1460;
pub const DAQmx_Write_TotalSampPerChanGenerated: int32 = 0x192B;
pub const DAQmx_Write_RawDataWidth: int32 = 0x217D;
pub const DAQmx_Write_NumChans: int32 = 0x217E;
pub const DAQmx_Write_WaitMode: int32 = 0x22B1;
pub const DAQmx_Write_SleepTime: int32 = 0x22B2;
pub const DAQmx_Write_DigitalLines_BytesPerChan: int32 = 0x217F;
