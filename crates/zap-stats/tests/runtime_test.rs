//! Runtime loop tests against a scripted driver.
//!
//! # Test Strategy
//!
//! The simulation driver takes input events from a channel the test holds
//! and records a copy of the store for every rendered frame. Each test
//! drives the loop through real tokio timers (paused clock where ticks
//! matter) and then checks:
//! - which values each frame saw
//! - that the driver was stopped exactly once
//! - that feed producers are released on shutdown

use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::sync::mpsc;
use zap_stats::{
    Dashboard, DashboardConfig, DashboardEvent, Driver, FEED_CLOSED, FeedEvent, FeedState,
    KeyInput, Metric, MetricStore, Phase, Runtime,
};

/// Shared view of what the driver saw.
#[derive(Clone, Default)]
struct Probe {
    frames: Arc<Mutex<Vec<MetricStore>>>,
    stops: Arc<AtomicUsize>,
}

impl Probe {
    fn frames(&self) -> Vec<MetricStore> {
        self.frames.lock().map(|frames| frames.clone()).unwrap_or_default()
    }

    fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

struct SimDriver {
    inputs: mpsc::UnboundedReceiver<DashboardEvent>,
    probe: Probe,
    fail_render: Arc<AtomicBool>,
}

impl SimDriver {
    fn new() -> (Self, mpsc::UnboundedSender<DashboardEvent>, Probe) {
        let (tx, rx) = mpsc::unbounded_channel();
        let probe = Probe::default();
        let driver =
            Self { inputs: rx, probe: probe.clone(), fail_render: Arc::new(AtomicBool::new(false)) };
        (driver, tx, probe)
    }
}

impl Driver for SimDriver {
    type Error = io::Error;

    async fn poll_event(&mut self) -> Result<Option<DashboardEvent>, Self::Error> {
        Ok(self.inputs.recv().await)
    }

    fn render(&mut self, dashboard: &Dashboard) -> Result<(), Self::Error> {
        if self.fail_render.load(Ordering::SeqCst) {
            return Err(io::Error::other("render failed"));
        }
        if let Ok(mut frames) = self.probe.frames.lock() {
            frames.push(dashboard.store().clone());
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.probe.stops.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn quit() -> DashboardEvent {
    DashboardEvent::Key(KeyInput::Char('q'))
}

#[tokio::test(start_paused = true)]
async fn tick_frame_shows_known_topics_only() {
    let config = DashboardConfig::default();
    let (feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();

    feed_tx.send(FeedEvent::message("$SYS/broker/version", "4.1")).await.unwrap();
    feed_tx.send(FeedEvent::message("$SYS/broker/clients/total", "12")).await.unwrap();
    feed_tx.send(FeedEvent::message("$SYS/unknown/topic", "x")).await.unwrap();

    let task = tokio::spawn(Runtime::new(driver, feed_rx, &config).run());

    tokio::time::sleep(Duration::from_millis(150)).await;
    input_tx.send(quit()).unwrap();

    let dashboard = task.await.unwrap().unwrap();
    let frames = probe.frames();

    // Initial frame plus one tick
    assert!(frames.len() >= 2, "expected a tick frame, got {}", frames.len());
    let tick_frame = &frames[1];
    assert_eq!(tick_frame.get(Metric::BrokerVersion), "4.1");
    assert_eq!(tick_frame.get(Metric::ClientsTotal), "12");
    assert_eq!(tick_frame.len(), 2);

    assert_eq!(dashboard.phase(), Phase::Stopped);
    assert_eq!(probe.stops(), 1);
}

#[tokio::test(start_paused = true)]
async fn redraws_once_per_tick() {
    let config = DashboardConfig::default();
    let (_feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();

    let task = tokio::spawn(Runtime::new(driver, feed_rx, &config).run());

    tokio::time::sleep(Duration::from_millis(350)).await;
    input_tx.send(quit()).unwrap();
    task.await.unwrap().unwrap();

    // Initial frame plus ticks at 100, 200 and 300 ms
    assert_eq!(probe.frames().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn resize_redraws_without_waiting_for_tick() {
    let config = DashboardConfig::default();
    let (_feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();

    let task = tokio::spawn(Runtime::new(driver, feed_rx, &config).run());

    tokio::time::sleep(Duration::from_millis(50)).await;
    input_tx.send(DashboardEvent::Resize(120, 40)).unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    input_tx.send(quit()).unwrap();
    task.await.unwrap().unwrap();

    // Initial frame plus the resize, both before the first tick at 100 ms
    assert_eq!(probe.frames().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn updates_arriving_between_ticks_show_up_on_next_tick() {
    let config = DashboardConfig::default();
    let (feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();

    let task = tokio::spawn(Runtime::new(driver, feed_rx, &config).run());

    tokio::time::sleep(Duration::from_millis(150)).await;
    feed_tx.send(FeedEvent::message("$SYS/broker/uptime", "10 seconds")).await.unwrap();
    feed_tx.send(FeedEvent::message("$SYS/broker/uptime", "11 seconds")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    input_tx.send(quit()).unwrap();
    task.await.unwrap().unwrap();

    let frames = probe.frames();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[1].get(Metric::BrokerUptime), "n/a");
    assert_eq!(frames[2].get(Metric::BrokerUptime), "11 seconds");
}

#[tokio::test]
async fn quit_before_first_tick_still_keeps_queued_updates() {
    let config = DashboardConfig::default();
    let (feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();

    feed_tx.send(FeedEvent::message("$SYS/broker/version", "4.1")).await.unwrap();
    input_tx.send(DashboardEvent::Key(KeyInput::Ctrl('c'))).unwrap();

    let dashboard = Runtime::new(driver, feed_rx, &config).run().await.unwrap();

    assert_eq!(dashboard.store().get(Metric::BrokerVersion), "4.1");
    assert_eq!(probe.stops(), 1);
    assert!(feed_tx.is_closed());
}

#[tokio::test]
async fn shutdown_releases_blocked_producer() {
    let config = DashboardConfig { queue_capacity: 4, ..Default::default() };
    let (feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();

    let producer = tokio::spawn(async move {
        let mut sent = 0u64;
        loop {
            let event = FeedEvent::message("$SYS/broker/messages/received", sent.to_string());
            if feed_tx.send(event).await.is_err() {
                return sent;
            }
            sent += 1;
        }
    });

    input_tx.send(DashboardEvent::Key(KeyInput::Esc)).unwrap();
    let dashboard = Runtime::new(driver, feed_rx, &config).run().await.unwrap();

    let sent = tokio::time::timeout(Duration::from_secs(5), producer)
        .await
        .expect("producer still blocked after shutdown")
        .unwrap();

    assert_eq!(probe.stops(), 1);
    assert_eq!(dashboard.phase(), Phase::Stopped);
    // Everything the producer managed to enqueue was merged
    if sent > 0 {
        let expected = (sent - 1).to_string();
        assert_eq!(dashboard.store().get(Metric::MessagesReceived), expected);
    }
}

#[tokio::test]
async fn closed_input_counts_as_interrupt() {
    let config = DashboardConfig::default();
    let (_feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, probe) = SimDriver::new();
    drop(input_tx);

    let dashboard = Runtime::new(driver, feed_rx, &config).run().await.unwrap();

    assert_eq!(dashboard.phase(), Phase::Stopped);
    assert_eq!(probe.stops(), 1);
}

#[tokio::test]
async fn render_error_still_stops_driver() {
    let config = DashboardConfig::default();
    let (_feed_tx, feed_rx) = config.feed_channel();
    let (driver, _input_tx, probe) = SimDriver::new();
    driver.fail_render.store(true, Ordering::SeqCst);

    let result = Runtime::new(driver, feed_rx, &config).run().await;

    assert!(result.is_err());
    assert_eq!(probe.stops(), 1);
}

#[tokio::test(start_paused = true)]
async fn closed_feed_reports_disconnect_and_keeps_values() {
    let config = DashboardConfig::default();
    let (feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, _probe) = SimDriver::new();

    feed_tx.send(FeedEvent::Connected).await.unwrap();
    feed_tx.send(FeedEvent::message("$SYS/broker/clients/connected", "3")).await.unwrap();
    drop(feed_tx);

    let task = tokio::spawn(Runtime::new(driver, feed_rx, &config).run());
    tokio::time::sleep(Duration::from_millis(250)).await;
    input_tx.send(quit()).unwrap();

    let dashboard = task.await.unwrap().unwrap();
    assert_eq!(dashboard.feed_state(), &FeedState::Disconnected { error: FEED_CLOSED.into() });
    assert_eq!(dashboard.store().get(Metric::ClientsConnected), "3");
}

#[tokio::test(start_paused = true)]
async fn explicit_disconnect_reason_survives_queue_close() {
    let config = DashboardConfig::default();
    let (feed_tx, feed_rx) = config.feed_channel();
    let (driver, input_tx, _probe) = SimDriver::new();

    feed_tx.send(FeedEvent::Disconnected { error: "broker went away".into() }).await.unwrap();
    drop(feed_tx);

    let task = tokio::spawn(Runtime::new(driver, feed_rx, &config).run());
    tokio::time::sleep(Duration::from_millis(150)).await;
    input_tx.send(quit()).unwrap();

    let dashboard = task.await.unwrap().unwrap();
    assert_eq!(dashboard.feed_state(), &FeedState::Disconnected {
        error: "broker went away".into()
    });
}
