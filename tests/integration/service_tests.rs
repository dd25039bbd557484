//! End-to-end tick-path tests: virtual 500 Hz clock driving the real
//! `AppService` against mock hardware.

use fermastat::app::events::AppEvent;
use fermastat::app::service::AppService;
use fermastat::clock::TICKS_PER_SECOND;
use fermastat::config::RunParams;

use crate::mock_hw::{MockHardware, RecordingDelegate, RecordingSink};

const HOLD_OFF_PARAMS: RunParams = RunParams {
    relay_mode: true,
    threshold: 200,
    hysteresis: 16, // half-band of 2
    relay_delay: 1, // 128 evaluations
    ferment_hours: 1,
    overheat_alert: true,
    min_temperature: -400,
    max_temperature: 9000,
};

struct Bench {
    svc: AppService,
    hw: MockHardware,
    delegate: RecordingDelegate,
    sink: RecordingSink,
}

impl Bench {
    fn new(svc: AppService, temperature: i16) -> Self {
        Self {
            svc,
            hw: MockHardware::new(temperature),
            delegate: RecordingDelegate::default(),
            sink: RecordingSink::default(),
        }
    }

    fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.svc
                .tick(&mut self.hw, &mut self.delegate, &mut self.sink);
        }
    }
}

#[test]
fn boot_sequence_loads_params_from_store() {
    use fermastat::adapters::param_store::{ParamStore, load_or_default};
    use fermastat::app::ports::ParamPort;

    let mut store = ParamStore::new();
    store
        .save(&RunParams {
            threshold: 365,
            ..RunParams::default()
        })
        .unwrap();

    let svc = AppService::new(load_or_default(&store));
    assert_eq!(svc.params().threshold, 365);
}

#[test]
fn started_event_fires_once() {
    let mut bench = Bench::new(AppService::new(RunParams::default()), 400);
    bench.svc.start(&mut bench.sink);
    assert_eq!(bench.sink.events, vec![AppEvent::Started]);
}

#[test]
fn fan_out_fires_at_most_one_action_per_tick() {
    let mut bench = Bench::new(AppService::new(HOLD_OFF_PARAMS), 197);
    bench.svc.set_relay_enabled(true, &mut bench.sink);

    let mut prev = (0u32, 0u32, 0usize);
    for _ in 0..4 * TICKS_PER_SECOND {
        bench
            .svc
            .tick(&mut bench.hw, &mut bench.delegate, &mut bench.sink);
        let now = (
            bench.delegate.ui_refreshes,
            bench.delegate.sensor_kickoffs,
            bench.hw.levels.len(),
        );
        let fired = (now.0 - prev.0) + (now.1 - prev.1) + (now.2 - prev.2) as u32;
        assert!(fired <= 1, "more than one expensive action on one tick");
        prev = now;
    }

    // Per 500-tick second: 32 UI refreshes, 2 sensor kickoffs, 2 relay
    // evaluations.
    assert_eq!(bench.delegate.ui_refreshes, 128);
    assert_eq!(bench.delegate.sensor_kickoffs, 8);
    assert_eq!(bench.hw.levels.len(), 8);
}

#[test]
fn relay_commits_on_the_128th_sustained_evaluation() {
    let mut bench = Bench::new(AppService::new(HOLD_OFF_PARAMS), 197);
    bench.svc.set_relay_enabled(true, &mut bench.sink);

    // 128 evaluations at 2 per second need 64 s of virtual time.
    bench.run(66 * u64::from(TICKS_PER_SECOND));
    assert!(bench.hw.levels.len() >= 128);

    // 127 evaluations resist, the 128th commits and drives the mode level.
    assert!(bench.hw.levels[..127].iter().all(|&level| !level));
    assert!(bench.hw.levels[127]);
    assert_eq!(
        bench.sink.count(&AppEvent::RelayCommitted { active: true }),
        1
    );
    assert!(bench.svc.snapshot().relay_active);
}

#[test]
fn fermentation_run_completes_and_disables_relay() {
    let mut bench = Bench::new(AppService::new(HOLD_OFF_PARAMS), 200);
    bench.svc.start_fermentation(&mut bench.sink);
    assert!(bench.svc.snapshot().relay_enabled);

    // One configured hour loads 0:59, so expiry lands on the 59th minute
    // boundary: t = 59 min. Run a little past it.
    bench.run(3_550 * u64::from(TICKS_PER_SECOND));

    assert_eq!(bench.delegate.completions, 1);
    assert_eq!(bench.sink.count(&AppEvent::FermentationComplete), 1);
    assert_eq!(bench.sink.count(&AppEvent::RelayEnabled(false)), 1);

    let snap = bench.svc.snapshot();
    assert!(!snap.ferment_active);
    assert!(!snap.relay_enabled);
    assert_eq!((snap.ferment_hours, snap.ferment_minutes), (0, 0));

    // Further ticking never re-fires completion.
    bench.run(120 * u64::from(TICKS_PER_SECOND));
    assert_eq!(bench.delegate.completions, 1);
}

#[test]
fn fermentation_started_at_second_59_survives_rollover() {
    let mut bench = Bench::new(AppService::new(HOLD_OFF_PARAMS), 200);

    // Park the clock mid-way through second 59, then arm the countdown.
    bench.run(59 * u64::from(TICKS_PER_SECOND) + 100);
    assert_eq!(bench.svc.snapshot().seconds, 59);
    bench.svc.start_fermentation(&mut bench.sink);

    // The next trigger edge is seconds == 59 at t = 119 s: exactly one
    // decrement, none lost and none doubled across the minute rollover.
    bench.run(66 * u64::from(TICKS_PER_SECOND));
    let snap = bench.svc.snapshot();
    assert_eq!((snap.ferment_hours, snap.ferment_minutes), (0, 58));
}

#[test]
fn buzzer_bursts_after_settle_window_while_disabled() {
    let mut bench = Bench::new(AppService::with_buzzer(HOLD_OFF_PARAMS), 200);

    // Disabled controller: every relay slot runs the buzzer pattern.
    // 6040 evaluations at 2 per second.
    bench.run(3_020 * u64::from(TICKS_PER_SECOND));
    assert!(bench.hw.levels.len() >= 6040);

    // Settle: evaluations 1..=6000 rest at the idle (mode) level.
    assert!(bench.hw.levels[..6000].iter().all(|&level| level));

    // Burst: evaluations 6001..=6010 toggle on every evaluation.
    assert!(!bench.hw.levels[6000]);
    for i in 6000..6009 {
        assert_ne!(bench.hw.levels[i], bench.hw.levels[i + 1]);
    }

    // Cooldown: back to idle.
    assert!(bench.hw.levels[6010..6040].iter().all(|&level| level));
}

#[test]
fn overheat_alert_rises_and_clears() {
    let mut bench = Bench::new(
        AppService::new(RunParams {
            min_temperature: 100,
            max_temperature: 600,
            ..RunParams::default()
        }),
        700,
    );

    bench.run(u64::from(TICKS_PER_SECOND));
    let snap = bench.svc.snapshot();
    assert_eq!(snap.temperature, 700);
    assert_eq!(
        snap.alert,
        Some(fermastat::alarm::TemperatureAlert::High)
    );

    bench.hw.temperature = 400;
    bench.run(u64::from(TICKS_PER_SECOND));
    assert_eq!(bench.svc.snapshot().alert, None);

    let changes: Vec<_> = bench
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::AlertChanged(_)))
        .collect();
    assert_eq!(changes.len(), 2);
}

#[test]
fn snapshot_and_display_follow_the_clock() {
    let mut bench = Bench::new(AppService::new(RunParams::default()), 400);

    bench.run(61 * u64::from(TICKS_PER_SECOND) + 7);
    let snap = bench.svc.snapshot();
    assert_eq!(snap.minutes, 1);
    assert_eq!(snap.seconds, 1);
    assert_eq!(snap.ticks, 7);
    assert_eq!(bench.svc.render_display("MM.SS"), "01.01");

    bench.svc.reset_clock();
    assert_eq!(bench.svc.snapshot().uptime_raw, 0);
}
