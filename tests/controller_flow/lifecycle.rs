use super::*;
use drawlines::{ContainerState, EventOutcome, Handle, LineCommand};

#[test]
fn new_controller_lays_lines_out_in_home_slots() {
    let controller = controller();

    let first = controller.line(0).expect("Linie 0 erwartet");
    let second = controller.line(1).expect("Linie 1 erwartet");
    assert_eq!(first.container, ContainerState::Home);
    assert_eq!(first.graded_points(), [DVec2::new(10.0, 325.0), DVec2::new(210.0, 325.0)]);
    assert_eq!(second.graded_points()[0], DVec2::new(10.0, 375.0));
    assert!(controller.current_response().is_empty());
}

#[test]
fn stored_response_restores_placed_lines() {
    let fields: Response = [("c0", "20,30 250,40"), ("c1", "0,200 10,200 300,200 400,200")]
        .into_iter()
        .collect();
    let controller = controller_with(fields);

    let first = controller.line(0).expect("Linie 0 erwartet");
    assert_eq!(first.container, ContainerState::Placed);
    assert_eq!(first.serialize_response(), "20,30 250,40");

    let second = controller.line(1).expect("Linie 1 erwartet");
    assert_eq!(second.container, ContainerState::Placed);
    assert_eq!(second.graded_points(), [DVec2::new(10.0, 200.0), DVec2::new(300.0, 200.0)]);

    let scene = controller.build_render_scene();
    assert!(scene.lines.iter().all(|l| l.state_tag == "placed"));
}

#[test]
fn stored_value_below_return_threshold_restores_at_home() {
    // Rückkehr-Schwelle: 300 - 20 = 280
    let fields: Response = [("c0", "10,290 200,290"), ("c1", "10,250 300,320")]
        .into_iter()
        .collect();
    let mut controller = controller_with(fields);

    let first = controller.line(0).expect("Linie 0 erwartet");
    assert_eq!(first.container, ContainerState::Home);
    assert_eq!(first.serialize_response(), "10,290 200,290");
    assert!(controller.current_response().get("c0").is_none());

    // Platziert, aber der Endpunkt wird auf die Ablagefläche begrenzt
    let second = controller.line(1).expect("Linie 1 erwartet");
    assert_eq!(second.container, ContainerState::Placed);
    assert_eq!(second.graded_points(), [DVec2::new(10.0, 250.0), DVec2::new(300.0, 300.0)]);

    // Ein Pixel nach oben reicht nicht zum Platzieren; Feld bleibt unberührt
    controller.handle_event(InputEvent::Focus {
        target: drawlines::LineTarget::new(0, drawlines::LinePart::Body),
    });
    controller.handle_event(InputEvent::KeyDown {
        key: drawlines::Key::ArrowUp,
    });
    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Home));
    assert_eq!(controller.fields().get("c0"), Some("10,290 200,290"));
}

#[test]
fn malformed_stored_value_leaves_line_at_home() {
    let fields: Response = [("c0", "abc 1,2"), ("c1", "")].into_iter().collect();
    let controller = controller_with(fields);

    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Home));
    assert_eq!(
        controller.line(0).map(|l| l.handle_position(Handle::Start)),
        Some(DVec2::new(10.0, 325.0))
    );
    assert_eq!(controller.line(1).map(|l| l.container), Some(ContainerState::Home));
}

#[test]
fn invalid_drop_size_is_rejected() {
    let result = InteractionController::new(
        "q1",
        question(),
        [f64::NAN, 300.0],
        DrawLinesOptions::default(),
        Response::new(),
    );
    assert!(result.is_err());
}

#[test]
fn image_load_resizes_drop_area_and_moves_tray() {
    let mut controller = controller_with([("c0", "10,10 300,10")].into_iter().collect());

    let outcome = controller.handle_event(InputEvent::ImageLoaded {
        width: 800.0,
        height: 600.0,
    });

    assert_eq!(outcome, EventOutcome::Applied);
    let scene = controller.build_render_scene();
    assert_eq!(scene.drop_size, [800.0, 600.0]);
    assert_eq!(scene.tray_bounds.min.y, 600.0);
    assert_eq!(
        controller.line(1).map(|l| l.graded_points()),
        Some([DVec2::new(10.0, 675.0), DVec2::new(210.0, 675.0)])
    );
    // Platzierte Linie bleibt und wird neu geschrieben
    assert_eq!(controller.fields().get("c0"), Some("10,10 300,10"));
}

#[test]
fn executed_commands_are_logged_in_order() {
    let mut controller = controller();

    controller.handle_event(InputEvent::PointerDown {
        target: drawlines::LineTarget::new(0, drawlines::LinePart::Body),
        position: DVec2::new(100.0, 325.0),
    });
    pointer_move(&mut controller, 100.0, 320.0);
    controller.handle_event(InputEvent::PointerUp);

    let entries = controller.session().command_log.entries();
    assert_eq!(entries.len(), 3);
    assert!(matches!(entries[0], LineCommand::BeginDrag { .. }));
    assert!(matches!(entries[1], LineCommand::DragTo { .. }));
    assert_eq!(entries[2], LineCommand::EndDrag);
    assert_eq!(controller.session().command_log.last_gesture(), entries);
}
