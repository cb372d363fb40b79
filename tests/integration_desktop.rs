use std::time::Duration;

use browser_desk::config::ViewConfig;
use browser_desk::desktop::{Desktop, NEW_WINDOW_LABEL};
use browser_desk::drivers::ScriptedDriver;
use browser_desk::layout::HitPolicy;
use browser_desk::runner::run_desktop;
use browser_desk::store::{Position, StorePolicy};
use browser_desk::ui::UiFrame;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn moved(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
        .collect()
}

fn redraw(terminal: &mut Terminal<TestBackend>, desktop: &mut Desktop) {
    terminal
        .draw(|frame| {
            let mut ui = UiFrame::new(frame);
            desktop.render(&mut ui);
        })
        .unwrap();
}

#[test]
fn scripted_session_opens_focuses_and_edits_a_window() {
    let button_x = WIDTH - NEW_WINDOW_LABEL.chars().count() as u16 - 1;
    let mut events = vec![click(button_x, 1), click(10, 8)];
    events.extend((0.."about:blank".len()).map(|_| key(KeyCode::Backspace)));
    events.extend("example.com".chars().map(|c| key(KeyCode::Char(c))));
    events.push(ctrl('q'));

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut driver = ScriptedDriver::new(events);
    let mut desktop = Desktop::new(StorePolicy::default(), ViewConfig::default());
    run_desktop(&mut terminal, &mut driver, &mut desktop, Duration::ZERO).unwrap();

    assert_eq!(driver.mouse_capture(), Some(true));
    let windows = desktop.store().windows();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].url, "example.com");
    assert_eq!(
        desktop.store().input().active_window_id.as_ref(),
        Some(&windows[0].id)
    );
    assert_eq!(desktop.store().input().keyboard_input, "m");

    redraw(&mut terminal, &mut desktop);
    let buffer = terminal.backend().buffer();
    assert!(row_text(buffer, 1).contains("New Window"));
    assert!(row_text(buffer, 1).contains(NEW_WINDOW_LABEL));
    assert!(row_text(buffer, 3).contains("example.com"));
    assert!(row_text(buffer, HEIGHT - 1).contains("1 windows"));
}

#[test]
fn closing_first_of_two_windows_keeps_second() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut desktop = Desktop::new(
        StorePolicy {
            cascade_step: 5,
            ..StorePolicy::default()
        },
        ViewConfig {
            initial_windows: 2,
            ..ViewConfig::default()
        },
    );
    let first = desktop.store().windows()[0].id.clone();
    let second = desktop.store().windows()[1].clone();

    // red light of the first panel; the second starts at (5, 5) and does not cover it
    let events = vec![click(2, 1), ctrl('q')];
    run_desktop(
        &mut terminal,
        ScriptedDriver::new(events),
        &mut desktop,
        Duration::ZERO,
    )
    .unwrap();

    assert_eq!(desktop.store().windows(), &[second.clone()]);
    assert_eq!(desktop.store().input().active_window_id, Some(first.clone()));

    desktop.store_mut().destroy_window(&first);
    assert_eq!(desktop.store().windows(), &[second]);
}

#[test]
fn overlapping_panels_respect_hit_policy() {
    let overlap = (12, 10);
    let run = |policy: HitPolicy| {
        let mut desktop = Desktop::new(
            StorePolicy {
                cascade_step: 5,
                ..StorePolicy::default()
            },
            ViewConfig {
                initial_windows: 2,
                hit_policy: policy,
                ..ViewConfig::default()
            },
        );
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        run_desktop(
            &mut terminal,
            ScriptedDriver::new(vec![moved(overlap.0, overlap.1), ctrl('q')]),
            &mut desktop,
            Duration::ZERO,
        )
        .unwrap();
        desktop
            .store()
            .windows()
            .iter()
            .map(|w| w.position)
            .collect::<Vec<_>>()
    };

    assert_eq!(
        run(HitPolicy::FirstRegistered),
        vec![Position::new(12, 10), Position::new(5, 5)]
    );
    assert_eq!(
        run(HitPolicy::Topmost),
        vec![Position::new(0, 0), Position::new(12, 10)]
    );
}

#[test]
fn later_panels_paint_over_earlier_ones() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut desktop = Desktop::new(
        StorePolicy {
            cascade_step: 2,
            ..StorePolicy::default()
        },
        ViewConfig {
            initial_windows: 2,
            ..ViewConfig::default()
        },
    );
    redraw(&mut terminal, &mut desktop);
    let buffer = terminal.backend().buffer();
    // top-left corner of the second panel sits inside the first
    assert_eq!(buffer.cell((2, 2)).map(|c| c.symbol()), Some("┌"));
}
