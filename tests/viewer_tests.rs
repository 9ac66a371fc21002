// Integration tests for loading, sequencing, and playing snapshot groups

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use heapviz::config::ViewerConfig;
use heapviz::error::ViewerError;
use heapviz::playback::{LabelMode, PlaybackState};
use heapviz::snapshot::{discover_selectors, open_group};
use heapviz::ui::App;
use ratatui::{backend::TestBackend, Terminal};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

const INIT: &str = r#"{
    "step": 0,
    "blocks": [
        { "offset": 16, "size": 10240, "free": true, "nextOffset": 0, "prevOffset": 0 }
    ],
    "stats": { "totalUsedMem": 0, "totalFreeMem": 10240, "numUsedBlocks": 0, "numFreeBlocks": 1 }
}"#;

const MALLOC: &str = r#"{
    "step": 1,
    "blocks": [
        { "offset": 16, "size": 8192, "free": false, "nextOffset": 0, "prevOffset": 0 },
        { "offset": 8208, "size": 2048, "free": true, "nextOffset": 0, "prevOffset": 0 }
    ],
    "stats": { "totalUsedMem": 8192, "totalFreeMem": 2048, "numUsedBlocks": 1, "numFreeBlocks": 1 }
}"#;

const FREE: &str = r#"{
    "step": 2,
    "blocks": [
        { "offset": 16, "size": 8192, "free": true, "nextOffset": 8208, "prevOffset": 0 },
        { "offset": 8208, "size": 2048, "free": true, "nextOffset": 0, "prevOffset": 16 }
    ],
    "stats": { "totalUsedMem": 0, "totalFreeMem": 10240, "numUsedBlocks": 0, "numFreeBlocks": 2 }
}"#;

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

/// Files named so that name order differs from step order
fn snapshot_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Test07_A_Free.json", FREE);
    write(dir.path(), "Test07_B_Init.json", INIT);
    write(dir.path(), "Test07_C_Malloc.json", MALLOC);
    write(dir.path(), "Test08_Init.json", INIT);
    write(dir.path(), "notes.txt", "not a snapshot");
    dir
}

fn config(dir: &TempDir) -> ViewerConfig {
    ViewerConfig::new(dir.path(), Duration::from_millis(1500))
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

fn current_label(app: &App) -> String {
    app.current_frame().unwrap().label.clone()
}

#[test]
fn test_group_plays_in_step_order_and_loops() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test07_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));

    let mut seen = vec![current_label(&app)];
    for _ in 0..3 {
        app.on_tick();
        seen.push(current_label(&app));
    }

    assert_eq!(
        seen,
        vec![
            "Test07_B_Init",
            "Test07_C_Malloc",
            "Test07_A_Free",
            "Test07_B_Init"
        ]
    );
}

#[test]
fn test_space_pauses_and_resumes() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test07_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));

    app.handle_event(press(KeyCode::Char(' ')));
    assert_eq!(app.playback.state(), PlaybackState::Paused);

    for _ in 0..4 {
        app.on_tick();
    }
    assert_eq!(current_label(&app), "Test07_B_Init");

    app.toggle_playback();
    app.on_tick();
    assert_eq!(app.playback.state(), PlaybackState::Playing);
    assert_eq!(current_label(&app), "Test07_C_Malloc");
}

#[test]
fn test_quit_keys() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test08_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));

    app.handle_event(press(KeyCode::Char('x')));
    assert!(!app.should_quit);
    app.handle_event(press(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn test_render_shows_frame_and_stats() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test07_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    app.on_tick();
    app.draw(&mut terminal).unwrap();
    let text = screen_text(&terminal);

    assert!(text.contains("Test07_C_Malloc"));
    assert!(text.contains("*** Heap Stats ***"));
    assert!(text.contains("Frame 2/3"));
    assert!(text.contains("8,192 B"));
    assert!(!app.needs_redraw);
}

#[test]
fn test_hover_toggles_label_until_next_frame() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test07_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    app.on_tick();
    app.draw(&mut terminal).unwrap();

    let region = app.labels.get(0).unwrap().region;
    app.handle_event(mouse(MouseEventKind::Moved, region.x, region.y));
    assert!(app.needs_redraw);
    assert_eq!(app.labels.modes()[0], LabelMode::Human);

    app.draw(&mut terminal).unwrap();
    assert!(screen_text(&terminal).contains("8.00 KB"));
    assert_eq!(app.labels.modes()[0], LabelMode::Human);

    // a new frame starts from raw labels
    app.on_tick();
    app.draw(&mut terminal).unwrap();
    assert!(app.labels.modes().iter().all(|mode| *mode == LabelMode::Raw));
}

#[test]
fn test_single_frame_group_resets_hover_each_tick() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test08_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    app.draw(&mut terminal).unwrap();
    let region = app.labels.get(0).unwrap().region;
    app.handle_event(mouse(MouseEventKind::Moved, region.x, region.y));
    app.draw(&mut terminal).unwrap();
    assert!(screen_text(&terminal).contains("10.00 KB"));

    app.on_tick();
    assert!(app.needs_redraw);
    app.draw(&mut terminal).unwrap();

    assert_eq!(current_label(&app), "Test08_Init");
    assert!(app.labels.modes().iter().all(|mode| *mode == LabelMode::Raw));
    assert!(screen_text(&terminal).contains("10,240 B"));
}

#[test]
fn test_clicking_play_button_toggles() {
    let dir = snapshot_dir();
    let sequence = open_group(&config(&dir), "Test07_").unwrap();
    let mut app = App::new(sequence, Duration::from_millis(1500));
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

    app.draw(&mut terminal).unwrap();
    let button = app.play_button;
    assert!(button.width > 0);

    app.handle_event(mouse(
        MouseEventKind::Down(MouseButton::Left),
        button.x,
        button.y,
    ));
    assert_eq!(app.playback.state(), PlaybackState::Paused);

    // clicks elsewhere are ignored
    app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
    assert_eq!(app.playback.state(), PlaybackState::Paused);
}

#[test]
fn test_malformed_files_are_skipped() {
    let dir = snapshot_dir();
    write(dir.path(), "Test07_D_Broken.json", "{ \"blocks\": [");

    let sequence = open_group(&config(&dir), "Test07_").unwrap();
    assert_eq!(sequence.len(), 3);
}

#[test]
fn test_empty_group_is_an_error() {
    let dir = snapshot_dir();
    let err = open_group(&config(&dir), "Test99_").unwrap_err();

    assert!(matches!(err, ViewerError::NoSnapshots { .. }));
    assert!(err.to_string().starts_with("No valid snapshots for 'Test99_'"));
}

#[test]
fn test_discovery_lists_groups() {
    let dir = snapshot_dir();
    assert_eq!(
        discover_selectors(dir.path()).unwrap(),
        vec!["Test07_".to_string(), "Test08_".to_string()]
    );
}
