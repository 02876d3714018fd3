use super::*;

// =============================================================
// Gesture
// =============================================================

#[test]
fn gestures_can_key_an_arbitration_set() {
    let active: std::collections::HashSet<Gesture> = [Gesture::Pan, Gesture::Select, Gesture::Pan].into_iter().collect();
    assert_eq!(active.len(), 2);
    assert!(active.contains(&Gesture::Pan));
    assert!(!active.contains(&Gesture::Zoom));
}

#[test]
fn primary_differs_from_other_buttons() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn idle_has_no_gesture() {
    assert_eq!(InputState::Idle.gesture(), None);
}

#[test]
fn dragging_locator_is_a_pan_gesture() {
    let state = InputState::DraggingLocator { grab_offset: Point::new(3.0, 4.0) };
    assert_eq!(state.gesture(), Some(Gesture::Pan));
}

#[test]
fn drag_states_compare_by_grab_offset() {
    let a = InputState::DraggingLocator { grab_offset: Point::new(3.0, 4.0) };
    let b = InputState::DraggingLocator { grab_offset: Point::new(3.0, 5.0) };
    assert_ne!(a, b);
    assert_ne!(a, InputState::Idle);
}

// =============================================================
// Action
// =============================================================

#[test]
fn action_pan_requested_carries_target() {
    let action = Action::PanRequested { x: 1.5, y: -2.0 };
    let Action::PanRequested { x, y } = action else {
        panic!("expected PanRequested");
    };
    assert!((x - 1.5).abs() < f64::EPSILON);
    assert!((y + 2.0).abs() < f64::EPSILON);
}

#[test]
fn action_gesture_changed_equality() {
    assert_eq!(Action::GestureChanged(Some(Gesture::Pan)), Action::GestureChanged(Some(Gesture::Pan)));
    assert_ne!(Action::GestureChanged(None), Action::GestureChanged(Some(Gesture::Pan)));
}
