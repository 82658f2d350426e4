use super::*;
use drawlines::{ContainerState, EventOutcome, Handle, Key, LinePart, LineTarget};

fn focus(controller: &mut InteractionController, line: usize, part: LinePart) {
    let outcome = controller.handle_event(InputEvent::Focus {
        target: LineTarget::new(line, part),
    });
    assert_eq!(outcome, EventOutcome::Applied);
}

fn press(controller: &mut InteractionController, key: Key) -> EventOutcome {
    controller.handle_event(InputEvent::KeyDown { key })
}

#[test]
fn arrow_keys_move_focused_line_out_of_home_one_pixel_at_a_time() {
    let mut controller = controller();
    focus(&mut controller, 0, LinePart::Body);

    // Home-Slot liegt bei y = 325, Rückkehr-Schwelle bei 300 - 20 = 280
    for _ in 0..44 {
        assert_eq!(press(&mut controller, Key::ArrowUp), EventOutcome::Applied);
    }
    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Home));
    assert_eq!(controller.fields().get("c0"), None);

    press(&mut controller, Key::ArrowUp);
    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Placed));
    assert_eq!(controller.fields().get("c0"), Some("10,280 210,280"));

    press(&mut controller, Key::Character('d'));
    assert_eq!(controller.fields().get("c0"), Some("11,280 211,280"));

    press(&mut controller, Key::ArrowDown);
    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Home));
    assert_eq!(controller.fields().get("c0"), Some(""));
}

#[test]
fn keys_move_focused_handle_only() {
    let mut controller = controller_with([("c0", "10,10 300,10")].into_iter().collect());
    focus(&mut controller, 0, LinePart::Handle(Handle::End));

    press(&mut controller, Key::Character('S'));
    press(&mut controller, Key::ArrowLeft);

    assert_eq!(controller.fields().get("c0"), Some("10,10 299,11"));
}

#[test]
fn space_and_escape_are_reserved_other_keys_ignored() {
    let mut controller = controller();
    focus(&mut controller, 0, LinePart::Body);
    let logged = controller.session().command_log.len();

    assert_eq!(press(&mut controller, Key::Space), EventOutcome::Reserved);
    assert_eq!(press(&mut controller, Key::Escape), EventOutcome::Reserved);
    assert_eq!(press(&mut controller, Key::Character('q')), EventOutcome::Ignored);
    assert_eq!(
        press(&mut controller, Key::Other("Tab".to_string())),
        EventOutcome::Ignored
    );

    assert_eq!(controller.session().command_log.len(), logged);
    assert_eq!(controller.fields().get("c0"), None);
}

#[test]
fn keys_without_focus_are_ignored() {
    let mut controller = controller();

    assert_eq!(press(&mut controller, Key::ArrowUp), EventOutcome::Ignored);

    focus(&mut controller, 0, LinePart::Body);
    assert_eq!(controller.handle_event(InputEvent::Blur), EventOutcome::Applied);
    assert_eq!(press(&mut controller, Key::ArrowUp), EventOutcome::Ignored);
}

#[test]
fn escape_ends_drag_and_keeps_last_position() {
    let mut controller = controller_with([("c0", "10,10 300,10")].into_iter().collect());

    controller.handle_event(InputEvent::PointerDown {
        target: LineTarget::new(0, LinePart::Body),
        position: DVec2::new(100.0, 10.0),
    });
    pointer_move(&mut controller, 120.0, 30.0);

    assert_eq!(press(&mut controller, Key::Escape), EventOutcome::Applied);
    assert!(!controller.session().gesture.is_dragging());
    assert_eq!(controller.fields().get("c0"), Some("30,30 320,30"));

    // Nach dem Abbruch bewegt der Zeiger nichts mehr
    pointer_move(&mut controller, 200.0, 100.0);
    assert_eq!(controller.fields().get("c0"), Some("30,30 320,30"));
}
