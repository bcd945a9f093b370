//! Rendering tests against ratatui's in-memory backend.
//!
//! These go through the real clipping writer and a real `Terminal`, so they
//! cover what ends up in the cell grid rather than the draw calls.

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Modifier};
use zap_stats::{Dashboard, FeedEvent};
use zap_tui::ui::{self, BufferWriter, FrameContext, PanelOrder};

fn context(width: u16) -> FrameContext {
    FrameContext {
        now: "Oct 18, 2026 09:05:07".into(),
        elapsed: Duration::from_secs(65),
        width,
        order: PanelOrder::MessagesFirst,
    }
}

fn draw(dashboard: &Dashboard, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let context = context(frame.area().width);
            ui::render(&mut BufferWriter::new(frame.buffer_mut()), dashboard, &context);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[test]
fn full_frame_layout() {
    let mut dashboard = Dashboard::new();
    dashboard.apply_feed(FeedEvent::Connected);
    dashboard.apply_feed(FeedEvent::message("$SYS/broker/version", "2.0.18"));
    dashboard.apply_feed(FeedEvent::message("$SYS/broker/load/sockets/1min", "12345678"));
    dashboard.apply_feed(FeedEvent::message("$SYS/broker/clients/total", "7"));

    let buffer = draw(&dashboard, 100, 30);

    assert_eq!(
        row(&buffer, 0),
        " Now:  Oct 18, 2026 09:05:07     Watching:    0:01:05  [Q] to quit"
    );
    assert_eq!(row(&buffer, 1), "");
    assert!(row(&buffer, 2).starts_with("Broker"));
    assert!(row(&buffer, 3).starts_with("     Broker Version : 2.0.18"));
    assert!(row(&buffer, 3).ends_with("       Sockets : 12.3 M    n/a    n/a"));
    assert_eq!(row(&buffer, 13).get(50..), Some("Clients"));
    assert_eq!(row(&buffer, 14).get(50..), Some("       Clients Total : 7"));
    assert!(row(&buffer, 12).starts_with("Message Stats"));
}

#[test]
fn titles_are_underlined() {
    let buffer = draw(&Dashboard::new(), 100, 30);
    let title = buffer.cell((0, 2)).map(|cell| cell.modifier);
    let body = buffer.cell((0, 3)).map(|cell| cell.modifier);
    assert_eq!(title, Some(Modifier::UNDERLINED));
    assert_eq!(body, Some(Modifier::empty()));
}

#[test]
fn disconnected_header_keeps_values() {
    let mut dashboard = Dashboard::new();
    dashboard.apply_feed(FeedEvent::message("$SYS/broker/clients/total", "7"));
    dashboard.apply_feed(FeedEvent::Disconnected { error: "connection refused".into() });

    let buffer = draw(&dashboard, 100, 30);

    assert!(row(&buffer, 0).contains("Disconnected: connection refused  [Q] to quit"));
    assert_eq!(row(&buffer, 14).get(50..), Some("       Clients Total : 7"));
}

#[test]
fn tiny_terminal_clips_without_panicking() {
    for (width, height) in [(1, 1), (10, 3), (30, 5), (100, 2)] {
        let buffer = draw(&Dashboard::new(), width, height);
        assert_eq!(buffer.area.width, width);
    }
}
