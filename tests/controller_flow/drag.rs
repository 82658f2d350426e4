use super::*;
use drawlines::app::GestureState;
use drawlines::{ContainerState, EventOutcome, Handle, LinePart, LineTarget};

fn pointer_down(controller: &mut InteractionController, line: usize, part: LinePart, x: f64, y: f64) {
    let outcome = controller.handle_event(InputEvent::PointerDown {
        target: LineTarget::new(line, part),
        position: DVec2::new(x, y),
    });
    assert_eq!(outcome, EventOutcome::Applied);
}

/// Alle bewerteten Punkte platzierter Linien liegen auf der Ablagefläche.
fn assert_placed_lines_inside_drop_area(controller: &InteractionController) {
    let drop = controller.session().layout.drop_bounds();
    for line in controller.lines() {
        if line.container == ContainerState::Placed {
            assert!(
                line.graded_points().iter().all(|p| drop.contains(*p)),
                "Linie {} verlässt die Ablagefläche: {}",
                line.number,
                line.serialize_response()
            );
        }
    }
}

#[test]
fn dragging_line_from_home_places_it_and_writes_response() {
    let mut controller = controller();

    pointer_down(&mut controller, 0, LinePart::Body, 100.0, 325.0);
    pointer_move(&mut controller, 100.0, 25.0);
    pointer_move(&mut controller, 100.0, 10.0);
    controller.handle_event(InputEvent::PointerUp);
    assert_placed_lines_inside_drop_area(&controller);

    let line = controller.line(0).expect("Linie 0 erwartet");
    assert_eq!(line.container, ContainerState::Placed);
    assert_eq!(controller.fields().get("c0"), Some("10,10 210,10"));
    assert_eq!(controller.session().gesture, GestureState::Idle);

    // Endpunkt einzeln in die Zielzone ziehen
    pointer_down(&mut controller, 0, LinePart::Handle(Handle::End), 210.0, 10.0);
    pointer_move(&mut controller, 300.0, 10.0);
    controller.handle_event(InputEvent::PointerUp);

    assert_eq!(controller.fields().get("c0"), Some("10,10 300,10"));
    let response = controller.current_response();
    assert_eq!(controller.definition().count_parts_right(&response), (2, 4));
}

#[test]
fn deltas_are_relative_to_previous_frame_with_reclamping() {
    let mut controller = controller_with([("c0", "10,10 300,10")].into_iter().collect());

    pointer_down(&mut controller, 0, LinePart::Handle(Handle::Start), 10.0, 10.0);
    pointer_move(&mut controller, -50.0, 10.0);
    assert_eq!(
        controller.line(0).map(|l| l.handle_position(Handle::Start)),
        Some(DVec2::new(0.0, 10.0))
    );

    // Zeiger kehrt um 10 px zurück: der Griff folgt um 10 px ab der geklemmten Lage
    pointer_move(&mut controller, -40.0, 10.0);
    assert_eq!(
        controller.line(0).map(|l| l.handle_position(Handle::Start)),
        Some(DVec2::new(10.0, 10.0))
    );
}

#[test]
fn dragging_below_threshold_returns_line_home_without_resetting_geometry() {
    let mut controller = controller_with([("c0", "10,10 300,10")].into_iter().collect());

    pointer_down(&mut controller, 0, LinePart::Body, 100.0, 10.0);
    pointer_move(&mut controller, 100.0, 290.0);
    controller.handle_event(InputEvent::PointerUp);

    let line = controller.line(0).expect("Linie 0 erwartet");
    assert_eq!(line.container, ContainerState::Home);
    assert_eq!(line.handle_position(Handle::Start), DVec2::new(10.0, 290.0));
    assert_eq!(controller.fields().get("c0"), Some(""));
    assert!(controller.current_response().get("c0").is_none());

    let scene = controller.build_render_scene();
    assert_eq!(scene.lines[0].state_tag, "inactive");
}

#[test]
fn moving_inside_home_tray_leaves_field_untouched() {
    let mut controller = controller();

    pointer_down(&mut controller, 0, LinePart::Body, 100.0, 325.0);
    pointer_move(&mut controller, 100.0, 330.0);

    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Home));
    assert_eq!(controller.fields().get("c0"), None);
}

#[test]
fn infinite_line_handles_drag_and_anchors_span_drop_area() {
    let mut controller = controller();

    pointer_down(&mut controller, 1, LinePart::Handle(Handle::Start), 10.0, 375.0);
    pointer_move(&mut controller, 10.0, 200.0);
    controller.handle_event(InputEvent::PointerUp);
    assert_eq!(controller.line(1).map(|l| l.container), Some(ContainerState::Placed));
    assert_eq!(controller.fields().get("c1"), Some("10,200 210,300"));
    assert_placed_lines_inside_drop_area(&controller);

    pointer_down(&mut controller, 1, LinePart::Handle(Handle::End), 210.0, 300.0);
    pointer_move(&mut controller, 300.0, 200.0);
    controller.handle_event(InputEvent::PointerUp);
    assert_placed_lines_inside_drop_area(&controller);

    assert_eq!(controller.fields().get("c1"), Some("10,200 300,200"));

    let points = controller.line(1).map(|l| l.to_svg_points()).unwrap_or_default();
    assert_eq!(points.len(), 4);
    let (left, right) = (points[0].x.min(points[3].x), points[0].x.max(points[3].x));
    assert!(left.abs() < 1e-9);
    assert!((right - 400.0).abs() < 1e-9);
    assert!(points.iter().all(|p| (p.y - 200.0).abs() < 1e-9));
}

#[test]
fn handle_dragged_out_of_home_pulls_other_end_onto_drop_area() {
    let mut controller = controller();

    pointer_down(&mut controller, 0, LinePart::Handle(Handle::Start), 10.0, 325.0);
    pointer_move(&mut controller, 10.0, 200.0);
    controller.handle_event(InputEvent::PointerUp);

    assert_eq!(controller.line(0).map(|l| l.container), Some(ContainerState::Placed));
    assert_eq!(controller.fields().get("c0"), Some("10,200 210,300"));
    assert_placed_lines_inside_drop_area(&controller);

    // Ein Tastendruck verschiebt um genau 1 px in x, y bleibt
    controller.handle_event(InputEvent::Focus {
        target: LineTarget::new(0, LinePart::Body),
    });
    controller.handle_event(InputEvent::KeyDown {
        key: drawlines::Key::ArrowRight,
    });
    assert_eq!(controller.fields().get("c0"), Some("11,200 211,300"));
    assert_placed_lines_inside_drop_area(&controller);
}

#[test]
fn pointer_events_without_gesture_are_ignored() {
    let mut controller = controller();

    assert_eq!(
        controller.handle_event(InputEvent::PointerMove {
            position: DVec2::new(5.0, 5.0)
        }),
        EventOutcome::Ignored
    );
    assert_eq!(controller.handle_event(InputEvent::PointerUp), EventOutcome::Ignored);
    assert!(controller.session().command_log.is_empty());
    assert_eq!(controller.session().command_log.ignored(), 2);
}

#[test]
fn pointer_down_on_unknown_line_is_ignored() {
    let mut controller = controller();

    let outcome = controller.handle_event(InputEvent::PointerDown {
        target: LineTarget::new(5, LinePart::Body),
        position: DVec2::ZERO,
    });

    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(!controller.session().gesture.is_dragging());
}
