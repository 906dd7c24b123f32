use parasketch::data::geometry::Coords;
use parasketch::data::interaction::{PointerInput, DRAG_MOVE_RADIUS, DRAG_START_RADIUS};
use egui::Color32;
use parasketch::data::points::{PointStore, POINT_FILL, POINT_RADIUS};
use parasketch::events::{EventFilter, EventKind};
use parasketch::{ColorScheme, EventController, SketchApp};

fn click(x: f64, y: f64) -> PointerInput {
    PointerInput::StageClick { x, y }
}

#[test]
fn stage_click_adds_point() {
    let mut store = PointStore::new();
    let kinds = click(3.0, 4.0).apply(&mut store);
    assert_eq!(kinds, EventKind::CLICK | EventKind::POINT_ADDED);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().coords(), Coords::new(3.0, 4.0));
}

#[test]
fn fourth_click_reports_eviction() {
    let mut store = PointStore::new();
    for i in 0..3 {
        click(i as f64, 0.0).apply(&mut store);
    }
    let kinds = click(9.0, 9.0).apply(&mut store);
    assert!(kinds.contains(EventKind::POINT_EVICTED));
}

#[test]
fn drag_lifecycle_moves_and_restores_radius() {
    let mut store = PointStore::new();
    click(0.0, 0.0).apply(&mut store);
    click(50.0, 50.0).apply(&mut store);

    PointerInput::DragStart { index: 1, x: 1.0, y: 2.0 }.apply(&mut store);
    let p = store.get(1).unwrap();
    assert_eq!((p.x, p.y, p.radius), (1.0, 2.0, DRAG_START_RADIUS));

    PointerInput::DragMove { index: 1, x: 20.0, y: 30.0 }.apply(&mut store);
    let p = store.get(1).unwrap();
    assert_eq!((p.x, p.y, p.radius), (20.0, 30.0, DRAG_MOVE_RADIUS));

    let kinds = PointerInput::DragEnd { index: 1, x: 25.0, y: 35.0 }.apply(&mut store);
    assert_eq!(kinds, EventKind::DRAG_END);
    let p = store.get(1).unwrap();
    assert_eq!((p.x, p.y, p.radius), (25.0, 35.0, POINT_RADIUS));

    // The other point is untouched.
    assert_eq!(store.get(0).unwrap().coords(), Coords::new(50.0, 50.0));
}

#[test]
fn drag_on_missing_index_is_ignored() {
    let mut store = PointStore::new();
    click(0.0, 0.0).apply(&mut store);
    let kinds = PointerInput::DragMove { index: 2, x: 1.0, y: 1.0 }.apply(&mut store);
    assert!(kinds.is_empty());
    assert_eq!(store.get(0).unwrap().coords(), Coords::new(0.0, 0.0));
}

#[test]
fn app_derives_geometry_after_each_input() {
    let mut app = SketchApp::new();
    app.handle_input(click(0.0, 0.0));
    app.handle_input(click(10.0, 0.0));
    assert!(app.geometry().shape().is_none());

    let kinds = app.handle_input(click(10.0, 10.0));
    assert!(kinds.contains(EventKind::SHAPE_UPDATED));
    let shape = app.geometry().shape().unwrap();
    assert_eq!(shape.area, 100.0);
    assert_eq!(shape.center, Coords::new(5.0, 5.0));

    app.handle_input(PointerInput::DragEnd { index: 1, x: 20.0, y: 0.0 });
    assert_eq!(app.geometry().area, Some(200.0));

    app.reset();
    assert!(app.store().is_empty());
    assert!(app.geometry().line_set.is_empty());
    assert!(app.geometry().shape().is_none());
}

#[test]
fn app_emits_events_with_metadata() {
    let ctrl = EventController::new();
    let rx_all = ctrl.subscribe_all();
    let rx_shape = ctrl.subscribe(EventFilter::only(EventKind::SHAPE_UPDATED));
    let mut app = SketchApp::new().with_event_controller(ctrl);

    app.handle_input(click(0.0, 0.0));
    let evt = rx_all.try_recv().unwrap();
    assert!(evt.kinds.contains(EventKind::CLICK));
    assert_eq!(evt.point_count, 1);
    assert_eq!(evt.click.unwrap().pos, Coords::new(0.0, 0.0));
    assert!(evt.shape.is_none());

    app.handle_input(click(10.0, 0.0));
    app.handle_input(click(10.0, 10.0));
    let shape_evt = rx_shape.try_recv().unwrap();
    assert_eq!(shape_evt.shape.unwrap().area, 100.0);
    assert!(rx_shape.try_recv().is_err());

    while rx_all.try_recv().is_ok() {}
    app.handle_input(PointerInput::DragStart { index: 2, x: 1.0, y: 1.0 });
    let drag_evt = rx_all.try_recv().unwrap();
    assert!(drag_evt.kinds.contains(EventKind::DRAG_START));
    let drag = drag_evt.drag.unwrap();
    assert_eq!(drag.index, 2);
    assert_eq!(drag.radius, DRAG_START_RADIUS);
}

#[test]
fn ignored_input_emits_nothing() {
    let ctrl = EventController::new();
    let rx = ctrl.subscribe_all();
    let mut app = SketchApp::new().with_event_controller(ctrl);
    let kinds = app.handle_input(PointerInput::DragEnd { index: 0, x: 0.0, y: 0.0 });
    assert!(kinds.is_empty());
    assert!(rx.try_recv().is_err());
}

#[test]
fn new_points_are_red_in_every_scheme() {
    for scheme in ColorScheme::all() {
        let mut app = SketchApp::new();
        app.set_color_scheme(*scheme);
        app.handle_input(click(1.0, 2.0));
        assert_eq!(app.store().get(0).unwrap().fill, POINT_FILL);
        assert_eq!(POINT_FILL, Color32::RED);
    }
}
