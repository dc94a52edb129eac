mod common;

use std::sync::Arc;

use ndarray::{array, Array2};
use nidaqmx_backend::*;
use parking_lot::Mutex;

use common::{fake_daqmx, fake_daqmx_with, with_driver, with_task};

fn ai_task(daqmx: &Daqmx, name: &str, physical: &str) -> Task {
    let task = Task::new(daqmx, name).unwrap();
    task.create_ai_voltage_chan(physical, None, TerminalConfig::Rse, -5.0, 5.0, VoltageUnits::Volts, None)
        .unwrap();
    task
}

fn ao_task(daqmx: &Daqmx, physical: &str) -> Task {
    let task = Task::new(daqmx, "").unwrap();
    task.create_ao_voltage_chan(physical, None, -10.0, 10.0, VoltageUnits::Volts, None)
        .unwrap();
    task
}

#[test]
fn task_lifecycle() {
    let daqmx = fake_daqmx();
    let task = ai_task(&daqmx, "scan", "Dev1/ai0:1");
    assert_eq!(task.name().unwrap(), "scan");
    assert_eq!(task.num_chans().unwrap(), 2);
    assert_eq!(task.channels().unwrap(), vec!["Dev1/ai0", "Dev1/ai1"]);

    task.start().unwrap();
    assert!(!task.is_done().unwrap());
    task.stop().unwrap();
    assert!(task.is_done().unwrap());

    let handle = task.handle();
    with_task(handle, |t| {
        assert_eq!(t.starts, 1);
        assert_eq!(t.stops, 1);
    });
    drop(task);
    with_driver(|d| {
        assert_eq!(d.cleared, vec!["scan"]);
        assert!(d.tasks.is_empty());
    });
}

#[test]
fn explicit_clear_is_not_repeated_on_drop() {
    let daqmx = fake_daqmx();
    let task = Task::new(&daqmx, "once").unwrap();
    task.clear().unwrap();
    with_driver(|d| assert_eq!(d.cleared, vec!["once"]));
}

#[test]
fn driver_error_carries_code_name_and_details() {
    let daqmx = fake_daqmx();
    let task = Task::new(&daqmx, "").unwrap();
    let err = task
        .create_ai_voltage_chan("Dev1/ai0", None, TerminalConfig::Default, 5.0, -5.0, VoltageUnits::Volts, None)
        .unwrap_err();
    match &err {
        DaqmxError::Driver {
            code,
            name,
            function,
            message,
        } => {
            assert_eq!(*code, sys::DAQmxErrorInvalidAttributeValue);
            assert_eq!(*name, Some("DAQmxErrorInvalidAttributeValue"));
            assert_eq!(*function, "DAQmxCreateAIVoltageChan");
            assert_eq!(message, "Minimum must be below maximum");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().contains("-200077"));
}

#[test]
fn duplicate_task_name_is_rejected() {
    let daqmx = fake_daqmx();
    let _first = Task::new(&daqmx, "scan").unwrap();
    let err = Task::new(&daqmx, "scan").unwrap_err();
    assert_eq!(err.code(), Some(sys::DAQmxErrorDuplicateTask));
}

#[test]
fn missing_function_is_reported_by_name() {
    let daqmx = fake_daqmx();
    let err = daqmx.self_cal("Dev1").unwrap_err();
    assert!(err.is_missing_function());
    assert!(matches!(err, DaqmxError::MissingFunction("DAQmxSelfCal")));
    assert!(daqmx.fns().missing().contains(&"DAQmxSelfCal"));
}

#[test]
fn warnings_do_not_fail_the_call() {
    let daqmx = fake_daqmx();
    let task = ai_task(&daqmx, "", "Dev1/ai0");
    with_driver(|d| d.start_status = sys::DAQmxWarningStoppedBeforeDone);
    task.start().unwrap();
    with_task(task.handle(), |t| assert!(t.running));
}

#[test]
fn errors_are_appended_to_the_error_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("daqmx_errors.log");
    let daqmx = fake_daqmx_with(DriverConfig {
        error_log: Some(log.clone()),
        ..Default::default()
    });
    let task = ai_task(&daqmx, "", "Dev1/ai0");
    with_driver(|d| d.start_status = sys::DAQmxErrorPALResourceReserved);
    assert!(task.start().is_err());
    assert!(task.start().is_err());

    let text = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("DAQmx Error:"), "{text}");
    assert!(lines[0].contains("DAQmxStartTask"), "{text}");
}

#[test]
fn read_in_both_layouts() {
    let daqmx = fake_daqmx();
    let task = ai_task(&daqmx, "", "Dev1/ai0:1");
    task.start().unwrap();

    let mut by_channel = Array2::<f64>::zeros((2, 5));
    let read = task
        .read_analog_f64(Timeout::from_secs(1.0), DataLayout::GroupByChannel, &mut by_channel)
        .unwrap();
    assert_eq!(read, 5);
    assert_eq!(by_channel.row(0).to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(by_channel[[1, 2]], 1002.0);

    // The fake keeps counting from where the last read stopped.
    let mut by_scan = Array2::<f64>::zeros((3, 2));
    let read = task
        .read_analog_f64(Timeout::NONE, DataLayout::GroupByScanNumber, &mut by_scan)
        .unwrap();
    assert_eq!(read, 3);
    assert_eq!(by_scan, array![[5.0, 1005.0], [6.0, 1006.0], [7.0, 1007.0]]);
}

#[test]
fn read_rejects_wrong_channel_count() {
    let daqmx = fake_daqmx();
    let task = ai_task(&daqmx, "", "Dev1/ai0:1");
    let mut data = Array2::<f64>::zeros((3, 10));
    match task.read_analog_f64(Timeout::NONE, DataLayout::GroupByChannel, &mut data) {
        Err(DaqmxError::BufferShape { expected, actual }) => {
            assert_eq!(expected, "[2, samples]");
            assert_eq!(actual, vec![3, 10]);
        }
        other => panic!("unexpected result {other:?}"),
    }
    with_task(task.handle(), |t| assert_eq!(t.read_pos, 0));
}

#[test]
fn read_timeout_is_classified() {
    let daqmx = fake_daqmx();
    let task = ai_task(&daqmx, "", "Dev1/ai0");
    with_driver(|d| d.read_status = sys::DAQmxErrorSamplesNotYetAvailable);
    let mut data = Array2::<f64>::zeros((1, 4));
    let err = task
        .read_analog_f64(Timeout::NONE, DataLayout::GroupByChannel, &mut data)
        .unwrap_err();
    assert!(err.is_timeout());
    assert!(!err.is_overrun());
}

#[test]
fn write_analog_by_channel() {
    let daqmx = fake_daqmx();
    let task = ao_task(&daqmx, "Dev1/ao0:1");
    let data = array![[0.0, 0.5, 1.0, 1.5], [-1.0, -2.0, -3.0, -4.0]];
    let written = task
        .write_analog_f64(&data, false, Timeout::NONE, DataLayout::GroupByChannel)
        .unwrap();
    assert_eq!(written, 4);
    with_task(task.handle(), |t| {
        assert_eq!(t.written[0], vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(t.written[1], vec![-1.0, -2.0, -3.0, -4.0]);
    });

    // Interleaved layout expects [samples, channels].
    let scans = data.t().to_owned();
    task.write_analog_f64(&scans, false, Timeout::NONE, DataLayout::GroupByScanNumber)
        .unwrap();
    with_task(task.handle(), |t| assert_eq!(t.written[1].len(), 8));
    assert!(task
        .write_analog_f64(&scans, false, Timeout::NONE, DataLayout::GroupByChannel)
        .is_err());
}

#[test]
fn stream_writes_in_buffer_sized_chunks() {
    let daqmx = fake_daqmx();
    let task = ao_task(&daqmx, "Dev1/ao0:1");
    task.cfg_samp_clk_timing("", 1e6, Edge::Rising, SampleMode::Finite, 10)
        .unwrap();
    let signal = Array2::from_shape_fn((2, 10), |(c, i)| (c * 100 + i) as f64);

    let written = task.stream_analog_output(&signal, 4, Timeout::from_secs(1.0)).unwrap();
    assert_eq!(written, 10);
    with_task(task.handle(), |t| {
        assert_eq!(t.output_buffer, Some(4));
        assert_eq!(t.regen_mode, Some(sys::DAQmx_Val_DoNotAllowRegen));
        assert_eq!(t.writes, vec![4, 4, 2]);
        assert_eq!(t.written[0], signal.row(0).to_vec());
        assert_eq!(t.written[1], signal.row(1).to_vec());
        assert_eq!((t.starts, t.stops), (1, 1));
    });
}

#[test]
fn stream_rejects_empty_signal() {
    let daqmx = fake_daqmx();
    let task = ao_task(&daqmx, "Dev1/ao0");
    let empty = Array2::<f64>::zeros((1, 0));
    assert!(matches!(
        task.stream_analog_output(&empty, 4, Timeout::NONE),
        Err(DaqmxError::InvalidArgument(_))
    ));
}

#[test]
fn analog_stream_delivers_blocks() {
    let daqmx = fake_daqmx();
    let mut task = ai_task(&daqmx, "", "Dev1/ai0:1");
    with_driver(|d| d.every_n_events = 2);
    let stream = task.analog_stream(3, Timeout::NONE).unwrap();
    task.start().unwrap();

    let blocks: Vec<_> = stream.try_iter().map(Result::unwrap).collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].shape(), &[2, 3]);
    assert_eq!(blocks[0].row(1).to_vec(), vec![1000.0, 1001.0, 1002.0]);
    assert_eq!(blocks[1][[0, 0]], 3.0);
}

#[test]
fn unregistered_callbacks_stop_firing() {
    let daqmx = fake_daqmx();
    let mut task = ai_task(&daqmx, "", "Dev1/ai0");
    with_driver(|d| d.every_n_events = 1);
    let calls = Arc::new(Mutex::new(0));
    let counter = calls.clone();
    task.register_every_n_samples(EveryNSamplesEvent::AcquiredIntoBuffer, 10, move |_, n| {
        assert_eq!(n, 10);
        *counter.lock() += 1;
    })
    .unwrap();
    task.start().unwrap();
    task.stop().unwrap();
    task.unregister_every_n_samples().unwrap();
    task.start().unwrap();
    assert_eq!(*calls.lock(), 1);
}

#[test]
fn done_callback_receives_status() {
    let daqmx = fake_daqmx();
    let mut task = ai_task(&daqmx, "", "Dev1/ai0");
    let statuses = Arc::new(Mutex::new(Vec::new()));
    let sink = statuses.clone();
    task.register_done(move |_, status| sink.lock().push(status.map_err(|e| e.code())))
        .unwrap();

    task.start().unwrap();
    task.wait_until_done(Timeout::FOREVER).unwrap();
    with_driver(|d| d.done_status = sys::DAQmxErrorSamplesNoLongerAvailable);
    task.start().unwrap();
    task.wait_until_done(Timeout::FOREVER).unwrap();

    assert_eq!(
        *statuses.lock(),
        vec![Ok(()), Err(Some(sys::DAQmxErrorSamplesNoLongerAvailable))]
    );
}

#[test]
fn panicking_callback_does_not_unwind_into_the_driver() {
    let daqmx = fake_daqmx();
    let mut task = ai_task(&daqmx, "", "Dev1/ai0");
    task.register_done(|_, _| panic!("callback failure")).unwrap();
    task.start().unwrap();
    task.wait_until_done(Timeout::FOREVER).unwrap();
}

#[test]
fn device_table() {
    let daqmx = fake_daqmx();
    assert_eq!(daqmx.device_names().unwrap(), vec!["Dev1"]);

    let devices = daqmx.devices().unwrap();
    let dev = &devices["Dev1"];
    assert_eq!(dev.product_type, "PCIe-6363");
    assert_eq!(dev.serial_number, 0x1A2B3C);
    assert!(dev.is_simulated);
    assert_eq!(dev.product_category, Some(ProductCategory::XSeriesDaq));
    assert_eq!(dev.bus_type, Some(BusType::PciE));
    assert_eq!(dev.ai_physical_chans.len(), 4);
    assert_eq!(dev.do_lines[7], "Dev1/port0/line7");

    let err = daqmx.device_info("Dev9").unwrap_err();
    assert_eq!(err.code(), Some(sys::DAQmxErrorInvalidDeviceID));
}

#[test]
fn version_without_update_function() {
    let daqmx = fake_daqmx();
    let version = daqmx.driver_version().unwrap();
    assert_eq!(version.to_string(), "23.5.0");
}

#[test]
fn task_from_config_file() {
    let daqmx = fake_daqmx();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.toml");
    std::fs::write(
        &path,
        r#"
        name = "scan"
        input_buffer = 10000

        [[channel]]
        type = "ai_voltage"
        physical_channel = "Dev1/ai0:3"
        min = -5.0
        max = 5.0

        [timing]
        rate = 1000.0
        samples_per_chan = 500

        [start_trigger]
        source = "/Dev1/PFI0"
        "#,
    )
    .unwrap();

    let config = TaskConfig::from_file(&path).unwrap();
    let task = config.build(&daqmx).unwrap();
    assert_eq!(task.read_channels().unwrap().len(), 4);
    with_task(task.handle(), |t| {
        assert_eq!(t.name, "scan");
        assert_eq!(t.rate, 1000.0);
        assert_eq!(t.sample_mode, sys::DAQmx_Val_FiniteSamps);
        assert_eq!(t.samples_per_chan, 500);
        assert_eq!(t.start_trigger.as_deref(), Some("/Dev1/PFI0"));
        assert_eq!(t.input_buffer, Some(10000));
    });
}

#[test]
fn invalid_config_never_reaches_the_driver() {
    let daqmx = fake_daqmx();
    let config = TaskConfig::from_toml_str(
        r#"
        [[channel]]
        type = "ai_voltage"
        physical_channel = "Dev1/ai0:"
        "#,
    )
    .unwrap();
    assert!(config.build(&daqmx).is_err());
    with_driver(|d| assert!(d.tasks.is_empty()));
}

#[test]
fn switch_path_lookup() {
    let daqmx = fake_daqmx();
    let (path, status) = daqmx.switch_find_path("SC1Mod1/ch0", "SC1Mod1/com0").unwrap();
    assert_eq!(path, "SC1Mod1/ch0->SC1Mod1/com0");
    assert_eq!(status, PathStatus::Available);
}

#[test]
fn watchdog_needs_expiration_states() {
    let daqmx = fake_daqmx();
    let err = WatchdogTask::new(&daqmx, "Dev1", "", Timeout::from_secs(0.1), &[]).unwrap_err();
    assert!(matches!(err, DaqmxError::InvalidArgument(_)));
}

#[test]
fn error_text_comes_from_the_driver() {
    let daqmx = fake_daqmx();
    assert_eq!(
        daqmx.error_string(sys::DAQmxErrorSamplesNoLongerAvailable).unwrap(),
        "DAQmxErrorSamplesNoLongerAvailable (-200279)"
    );
    assert_eq!(daqmx.error_string(-1).unwrap(), "Status code -1");
}

fn di_task(daqmx: &Daqmx, lines: &str, grouping: LineGrouping) -> Task {
    let task = Task::new(daqmx, "").unwrap();
    task.create_di_chan(lines, None, grouping).unwrap();
    task
}

fn do_task(daqmx: &Daqmx, lines: &str) -> Task {
    let task = Task::new(daqmx, "").unwrap();
    task.create_do_chan(lines, None, LineGrouping::ChanForAllLines).unwrap();
    task
}

#[test]
fn digital_input_config_runs_with_digital_reads() {
    let daqmx = fake_daqmx();
    let config = TaskConfig::from_toml_str(
        r#"
        name = "lines"

        [[channel]]
        type = "di"
        lines = "Dev1/port0/line0:7"
        grouping = "chan_per_line"

        [timing]
        rate = 1000.0
        samples_per_chan = 4
        "#,
    )
    .unwrap();
    assert_eq!(config.input_kind(), Some(IoKind::Digital));

    let summary = config.run(&daqmx, None).unwrap();
    assert_eq!(summary.read, 4);
    assert_eq!(summary.channels.len(), 8);
    let first = &summary.channels[0];
    assert_eq!(first.name, "Dev1/port0/line0");
    assert_eq!((first.min, first.mean, first.max), (0.0, 1.5, 3.0));
    assert_eq!(summary.channels[7].mean, 7001.5);
    with_driver(|d| assert_eq!(d.cleared, vec!["lines"]));
}

#[test]
fn counter_input_config_runs_with_counter_reads() {
    let daqmx = fake_daqmx();
    let config = TaskConfig::from_toml_str(
        r#"
        name = "edges"

        [[channel]]
        type = "ci_count_edges"
        counter = "Dev1/ctr0"
        "#,
    )
    .unwrap();

    let single = config.run(&daqmx, None).unwrap();
    assert_eq!(single.read, 1);
    assert_eq!(single.channels[0].name, "Dev1/ctr0");

    let summary = config.run(&daqmx, Some(3)).unwrap();
    assert_eq!(summary.read, 3);
    assert_eq!((summary.channels[0].min, summary.channels[0].max), (0.0, 2.0));
}

#[test]
fn analog_config_reads_the_timed_sample_count() {
    let daqmx = fake_daqmx();
    let config = TaskConfig::from_toml_str(
        r#"
        [[channel]]
        type = "ai_voltage"
        physical_channel = "Dev1/ai0:1"

        [timing]
        rate = 1000.0
        samples_per_chan = 10
        "#,
    )
    .unwrap();
    let summary = config.run(&daqmx, None).unwrap();
    assert_eq!(summary.read, 10);
    assert_eq!(summary.channels[1].min, 1000.0);
}

#[test]
fn untimed_output_config_does_not_run() {
    let daqmx = fake_daqmx();
    let config = TaskConfig::from_toml_str(
        r#"
        [[channel]]
        type = "do"
        lines = "Dev1/port0/line0:3"
        "#,
    )
    .unwrap();
    assert!(matches!(config.run(&daqmx, None), Err(DaqmxError::InvalidArgument(_))));
}

#[test]
fn digital_and_counter_reads_fill_their_arrays() {
    let daqmx = fake_daqmx();
    let task = di_task(&daqmx, "Dev1/port0/line0:1", LineGrouping::ChanPerLine);
    let mut data = Array2::<u32>::zeros((3, 2));
    let read = task
        .read_digital_u32(Timeout::from_secs(1.0), DataLayout::GroupByScanNumber, &mut data)
        .unwrap();
    assert_eq!(read, 3);
    assert_eq!(data, array![[0, 1000], [1, 1001], [2, 1002]]);

    let counter = Task::new(&daqmx, "").unwrap();
    counter
        .create_ci_count_edges_chan("Dev1/ctr1", None, Edge::Falling, 0, CountDirection::Up)
        .unwrap();
    let mut counts = ndarray::Array1::<f64>::zeros(4);
    assert_eq!(counter.read_counter_f64(Timeout::from_secs(1.0), &mut counts).unwrap(), 4);
    assert_eq!(counts, array![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn digital_writes_check_the_channel_axis() {
    let daqmx = fake_daqmx();
    let task = do_task(&daqmx, "Dev1/port0/line0:7");
    let written = task
        .write_digital_u32(&array![[1u32, 2, 3]], false, Timeout::from_secs(1.0), DataLayout::GroupByChannel)
        .unwrap();
    assert_eq!(written, 3);

    let err = task
        .write_digital_u32(&array![[1u32], [2]], false, Timeout::from_secs(1.0), DataLayout::GroupByChannel)
        .unwrap_err();
    assert!(matches!(err, DaqmxError::BufferShape { .. }));
    with_task(task.handle(), |t| {
        assert_eq!(t.digital_writes, vec![1, 2, 3]);
        assert_eq!(t.writes, vec![3]);
    });
}

#[test]
fn counter_writes_pair_frequency_and_duty_cycle() {
    let daqmx = fake_daqmx();
    let task = Task::new(&daqmx, "").unwrap();
    task.create_co_pulse_chan_freq("Dev1/ctr0", None, FrequencyUnits::Hz, Level::Low, 0.0, 100.0, 0.5)
        .unwrap();
    let timeout = Timeout::from_secs(1.0);
    let layout = DataLayout::GroupByChannel;

    let written = task
        .write_ctr_freq(&array![[100.0, 200.0]], &array![[0.5, 0.25]], false, timeout, layout)
        .unwrap();
    assert_eq!(written, 2);

    let mismatched = task.write_ctr_freq(&array![[100.0, 200.0]], &array![[0.5]], false, timeout, layout);
    assert!(matches!(mismatched, Err(DaqmxError::BufferShape { .. })));
    let two_channels = task.write_ctr_freq(
        &array![[100.0], [200.0]],
        &array![[0.5], [0.5]],
        false,
        timeout,
        layout,
    );
    assert!(matches!(two_channels, Err(DaqmxError::BufferShape { .. })));

    with_task(task.handle(), |t| {
        assert_eq!(t.ctr_writes, vec![(100.0, 0.5), (200.0, 0.25)]);
        assert_eq!(t.writes, vec![2]);
    });
}

#[test]
fn signal_callbacks_fire_until_unregistered() {
    let daqmx = fake_daqmx();
    let mut task = ai_task(&daqmx, "", "Dev1/ai0");
    let fired = Arc::new(Mutex::new(0));
    let counter = fired.clone();
    task.register_signal(Signal::SampleClock, move |_task: &TaskRef| *counter.lock() += 1)
        .unwrap();

    task.start().unwrap();
    task.stop().unwrap();
    assert_eq!(*fired.lock(), 1);

    task.unregister_signal(Signal::SampleClock).unwrap();
    task.start().unwrap();
    assert_eq!(*fired.lock(), 1);
}

#[test]
fn analog_and_pattern_triggers_reach_the_driver() {
    let daqmx = fake_daqmx();
    let task = ai_task(&daqmx, "", "Dev1/ai0");
    task.cfg_anlg_edge_start_trig("APFI0", Edge::Rising, 1.5).unwrap();
    task.cfg_anlg_window_start_trig("APFI0", WindowCondition::EnteringWindow, 2.0, -2.0)
        .unwrap();
    task.cfg_dig_pattern_start_trig("/Dev1/PFI0:3", "10X1", PatternCondition::Matches)
        .unwrap();

    let bad_window = task
        .cfg_anlg_window_start_trig("APFI0", WindowCondition::LeavingWindow, -1.0, 1.0)
        .unwrap_err();
    assert_eq!(bad_window.code(), Some(sys::DAQmxErrorInvalidAttributeValue));
    assert!(task
        .cfg_dig_pattern_start_trig("/Dev1/PFI0", "102", PatternCondition::Matches)
        .is_err());

    task.export_signal(Signal::StartTrigger, "/Dev1/PFI1").unwrap();
    with_task(task.handle(), |t| {
        assert_eq!(
            t.triggers,
            vec![
                format!("anlg_edge start APFI0 {} 1.5", sys::DAQmx_Val_Rising),
                format!("anlg_window start APFI0 {} -2..2", sys::DAQmx_Val_EnteringWin),
                format!("dig_pattern start /Dev1/PFI0:3 10X1 {}", sys::DAQmx_Val_PatternMatches),
            ]
        );
        assert_eq!(t.exports, vec![(sys::DAQmx_Val_StartTrigger, "/Dev1/PFI1".to_string())]);
    });
}

#[test]
fn ext_cal_sessions_close_exactly_once() {
    let daqmx = fake_daqmx();
    ExtCalSession::open(&daqmx, "Dev1", "NI").unwrap().commit().unwrap();
    ExtCalSession::open(&daqmx, "Dev1", "NI").unwrap().cancel().unwrap();
    {
        let session = ExtCalSession::open(&daqmx, "Dev1", "NI").unwrap();
        assert_eq!(session.handle(), 3);
    }
    with_driver(|d| {
        assert!(d.cal_sessions.is_empty());
        assert_eq!(
            d.cal_closes,
            vec![
                (1, sys::DAQmx_Val_Action_Commit),
                (2, sys::DAQmx_Val_Action_Cancel),
                (3, sys::DAQmx_Val_Action_Cancel),
            ]
        );
    });

    let err = ExtCalSession::open(&daqmx, "Dev9", "NI").unwrap_err();
    assert_eq!(err.code(), Some(sys::DAQmxErrorInvalidDeviceID));
    with_driver(|d| assert_eq!(d.cal_closes.len(), 3));
}

#[test]
fn scales_and_reverse_coefficients() {
    let daqmx = fake_daqmx();
    daqmx
        .create_lin_scale("volts_to_mm", 2.0, 1.0, PreScaledUnits::Volts, "mm")
        .unwrap();
    daqmx
        .create_polynomial_scale("poly", &[0.0, 1.0, 0.5], &[], PreScaledUnits::Volts, "mm")
        .unwrap();
    assert!(daqmx
        .create_polynomial_scale("empty", &[], &[], PreScaledUnits::Volts, "mm")
        .is_err());
    with_driver(|d| {
        assert_eq!(d.scales["volts_to_mm"], vec![1.0, 2.0]);
        assert_eq!(d.scales["poly"], vec![0.0, 1.0, 0.5]);
        assert!(!d.scales.contains_key("empty"));
    });

    let reverse = daqmx.calculate_reverse_poly_coeff(&[1.0, 2.0], -10.0, 10.0, 100, 3).unwrap();
    assert_eq!(reverse, vec![-0.5, 0.5, 0.0, 0.0]);
    assert!(matches!(
        daqmx.calculate_reverse_poly_coeff(&[1.0, 2.0], -10.0, 10.0, 100, -1),
        Err(DaqmxError::InvalidArgument(_))
    ));
    assert!(daqmx.calculate_reverse_poly_coeff(&[1.0, 2.0], -10.0, 10.0, 2, 3).is_err());
}

#[test]
fn relay_counts_and_positions_follow_list_order() {
    let daqmx = fake_daqmx();
    daqmx.switch_close_relays("SwitchMod/k0:1", false).unwrap();
    daqmx.switch_open_relays("SwitchMod/k1", false).unwrap();

    assert_eq!(daqmx.switch_relay_counts("SwitchMod/k0:2").unwrap(), vec![1, 2, 0]);
    assert_eq!(
        daqmx.switch_relay_positions("SwitchMod/k2:0").unwrap(),
        vec![RelayPosition::Open, RelayPosition::Open, RelayPosition::Closed]
    );
}
