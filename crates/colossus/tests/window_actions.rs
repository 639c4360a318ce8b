// Chunk: docs/chunks/terminal_window - Window action tests
//! Input handling, zoom, the context menu, drops and the title.

mod support;

use std::fs;

use colossus::context_menu::MenuItem;
use colossus::font_scale::{ZoomState, MAX_SCALE, MIN_SCALE};
use colossus::session::SessionLauncher;
use colossus::window::{Handled, TerminalWindow};
use colossus_input::{Key, KeyEvent, Modifiers, MouseButton, MouseEvent};
use tempfile::TempDir;

use support::{spec, RecordingWidget};

fn window_with(widget: RecordingWidget) -> TerminalWindow<RecordingWidget> {
    let session = SessionLauncher::new(spec(&["/bin/sh"]), Vec::new());
    let mut window = TerminalWindow::new("COLOSSUS", widget, session, ZoomState::default());
    window.open();
    window
}

fn window() -> TerminalWindow<RecordingWidget> {
    window_with(RecordingWidget::default())
}

fn assert_scale(window: &TerminalWindow<RecordingWidget>, expected: f64) {
    assert!((window.zoom().scale() - expected).abs() < 1e-9, "{}", window.zoom().scale());
    assert_eq!(window.widget().font_scale, window.zoom().scale());
}

#[test]
fn ctrl_c_without_selection_reaches_child() {
    let mut window = window();
    assert_eq!(window.handle_key(&KeyEvent::ctrl('c')), Handled::No);
    assert_eq!(window.widget().copies, 0);
}

#[test]
fn ctrl_c_with_selection_copies() {
    let mut window = window_with(RecordingWidget::with_selection());
    assert_eq!(window.handle_key(&KeyEvent::ctrl('c')), Handled::Yes);
    assert_eq!(window.widget().copies, 1);
}

#[test]
fn ctrl_shift_c_without_selection_copies_nothing() {
    let mut window = window();
    assert_eq!(window.handle_key(&KeyEvent::ctrl_shift('C')), Handled::Yes);
    assert_eq!(window.widget().copies, 0);
}

#[test]
fn ctrl_v_pastes() {
    let mut window = window();
    assert_eq!(window.handle_key(&KeyEvent::ctrl('v')), Handled::Yes);
    assert_eq!(window.handle_key(&KeyEvent::ctrl_shift('V')), Handled::Yes);
    assert_eq!(window.widget().pastes, 2);
}

#[test]
fn plain_keys_pass_through() {
    let mut window = window();
    assert_eq!(window.handle_key(&KeyEvent::char('v')), Handled::No);
    assert_eq!(
        window.handle_key(&KeyEvent::new(Key::Return, Modifiers::default())),
        Handled::No
    );
    assert_eq!(window.widget().pastes, 0);
}

#[test]
fn initial_scale_reaches_widget() {
    let session = SessionLauncher::new(spec(&["/bin/sh"]), Vec::new());
    let window = TerminalWindow::new(
        "COLOSSUS",
        RecordingWidget::default(),
        session,
        ZoomState::new(1.5),
    );
    assert_eq!(window.widget().font_scale, 1.5);
}

#[test]
fn zoom_chords_adjust_and_reset() {
    let mut window = window();

    window.handle_key(&KeyEvent::ctrl('='));
    window.handle_key(&KeyEvent::ctrl('+'));
    assert_scale(&window, 1.2);

    window.handle_key(&KeyEvent::ctrl('-'));
    assert_scale(&window, 1.1);

    window.handle_key(&KeyEvent::ctrl('0'));
    assert_eq!(window.zoom().scale(), 1.0);
    assert_eq!(window.widget().font_scale, 1.0);
}

#[test]
fn zoom_stops_at_bounds() {
    let mut window = window();
    let keypad_plus = KeyEvent::new(
        Key::KeypadAdd,
        Modifiers {
            control: true,
            ..Default::default()
        },
    );
    for _ in 0..40 {
        assert_eq!(window.handle_key(&keypad_plus), Handled::Yes);
    }
    assert_eq!(window.zoom().scale(), MAX_SCALE);
    assert_eq!(window.widget().font_scale, MAX_SCALE);

    for _ in 0..40 {
        window.handle_key(&KeyEvent::ctrl('-'));
    }
    assert_eq!(window.zoom().scale(), MIN_SCALE);
}

#[test]
fn right_click_opens_menu_at_pointer() {
    let mut window = window();
    let handled = window.handle_mouse(&MouseEvent::press(MouseButton::Right, 40.0, 12.0));

    assert_eq!(handled, Handled::Yes);
    let menu = window.context_menu().expect("menu should be open");
    assert_eq!(menu.position(), (40.0, 12.0));
    let labels: Vec<&str> = menu.items().iter().map(|item| item.label()).collect();
    assert_eq!(labels, ["Copy", "Paste", "Select All"]);
    assert_eq!(
        window.widget().display,
        "\r\n[COLOSSUS] 1) Copy 2) Paste 3) Select All\r\n"
    );
}

#[test]
fn menu_digit_activates_item() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));

    assert_eq!(window.handle_key(&KeyEvent::char('2')), Handled::Yes);
    assert_eq!(window.widget().pastes, 1);
    assert!(window.context_menu().is_none());

    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    let keypad_three = KeyEvent::new(Key::KeypadDigit(3), Modifiers::default());
    assert_eq!(window.handle_key(&keypad_three), Handled::Yes);
    assert_eq!(window.widget().select_alls, 1);
}

#[test]
fn other_key_dismisses_menu_without_reaching_child() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));

    assert_eq!(window.handle_key(&KeyEvent::char('q')), Handled::Yes);
    assert!(window.context_menu().is_none());
    assert_eq!(window.widget().pastes + window.widget().select_alls, 0);

    // With the menu gone, keys go to the child again
    assert_eq!(window.handle_key(&KeyEvent::char('q')), Handled::No);
}

#[test]
fn ctrl_digit_does_not_pick_menu_item() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.handle_key(&KeyEvent::ctrl('2'));
    assert_eq!(window.widget().pastes, 0);
    assert!(window.context_menu().is_none());
}

#[test]
fn left_click_dismisses_open_menu() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    let handled = window.handle_mouse(&MouseEvent::press(MouseButton::Left, 5.0, 5.0));
    assert_eq!(handled, Handled::Yes);
    assert!(window.context_menu().is_none());
}

#[test]
fn left_click_passes_through() {
    let mut window = window();
    let handled = window.handle_mouse(&MouseEvent::press(MouseButton::Left, 1.0, 1.0));
    assert_eq!(handled, Handled::No);
    assert!(window.context_menu().is_none());
}

#[test]
fn menu_copy_requires_selection() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.activate_menu_item(MenuItem::Copy);
    assert_eq!(window.widget().copies, 0);
    assert!(window.context_menu().is_none());

    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.activate_menu_item(MenuItem::SelectAll);
    assert_eq!(window.widget().select_alls, 1);

    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.activate_menu_item(MenuItem::Copy);
    assert_eq!(window.widget().copies, 1);
}

#[test]
fn menu_paste() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.activate_menu_item(MenuItem::Paste);
    assert_eq!(window.widget().pastes, 1);
}

#[test]
fn dismissing_menu_does_nothing() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.dismiss_menu();
    assert!(window.context_menu().is_none());
    assert_eq!(window.widget().pastes + window.widget().copies, 0);
}

#[test]
fn drop_types_quoted_paths() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("report final.pdf");
    let second = dir.path().join("data");
    fs::write(&first, "").unwrap();
    fs::create_dir(&second).unwrap();
    let uri = format!("file://{}", first.display()).replace(' ', "%20");

    let mut window = window();
    assert!(window.handle_drop(&[uri, second.display().to_string()]));

    assert_eq!(
        window.widget().child_input,
        format!("'{}' '{}' ", first.display(), second.display())
    );
}

#[test]
fn drop_of_nothing_usable_feeds_nothing() {
    let mut window = window();
    assert!(!window.handle_drop(&["file://elsewhere/tmp/x", "/no/such/path"]));
    assert!(window.widget().child_input.is_empty());
}

#[test]
fn title_defaults_to_terminal() {
    let window = window();
    assert_eq!(window.window_title(), "COLOSSUS — Terminal");
}

#[test]
fn title_follows_terminal() {
    let mut window = window();
    assert!(window.set_terminal_title(Some("vim notes.txt".to_string())));
    assert_eq!(window.window_title(), "COLOSSUS — vim notes.txt");

    assert!(!window.set_terminal_title(Some("vim notes.txt".to_string())));

    assert!(window.set_terminal_title(Some(String::new())));
    assert_eq!(window.window_title(), "COLOSSUS — Terminal");
}

#[test]
fn closed_window_swallows_input() {
    let mut window = window();
    assert!(window.close());
    assert_eq!(window.handle_key(&KeyEvent::ctrl('v')), Handled::Yes);
    assert_eq!(window.widget().pastes, 0);
}

#[test]
fn pasted_text_goes_to_child_verbatim() {
    let mut window = window();
    window.handle_paste("echo 'hi there'\n");
    assert_eq!(window.widget().child_input, "echo 'hi there'\n");
}

#[test]
fn pasted_file_list_is_a_drop() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a b");
    let second = dir.path().join("c");
    fs::write(&first, "").unwrap();
    fs::write(&second, "").unwrap();
    let pasted = format!(
        "{}\r\n'{}'\n",
        format!("file://{}", first.display()).replace(' ', "%20"),
        second.display()
    );

    let mut window = window();
    window.handle_paste(&pasted);

    assert_eq!(
        window.widget().child_input,
        format!("'{}' '{}' ", first.display(), second.display())
    );
}

#[test]
fn paste_closes_menu() {
    let mut window = window();
    window.handle_mouse(&MouseEvent::press(MouseButton::Right, 0.0, 0.0));
    window.handle_paste("x");
    assert!(window.context_menu().is_none());
    assert_eq!(window.widget().child_input, "x");
}
