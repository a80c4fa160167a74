//! End-to-end tests for the rating view public API.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_rating::prelude::*;

#[derive(Default)]
struct Log {
    events: Mutex<Vec<String>>,
}

impl RatingViewDelegate for Log {
    fn rating_is_updating(&self, view: &RatingView, rating: f64) {
        assert_eq!(view.rating(), rating, "delegate sees the stored rating");
        self.events.lock().push(format!("updating {rating}"));
    }

    fn rating_did_update(&self, _view: &RatingView, rating: f64) {
        self.events.lock().push(format!("updated {rating}"));
    }
}

fn stars() -> (Image, Image) {
    (Image::new(32, 32).unwrap(), Image::new(32, 32).unwrap())
}

#[test]
fn half_star_drag_from_config_to_delegate() {
    let config = RatingViewConfig::from_toml_str(
        r#"
        max_rating = 5
        mode = "half"
        "#,
    )
    .expect("config should parse");

    let (empty, full) = stars();
    let log = Arc::new(Log::default());
    let mut view = RatingView::from_config(&config)
        .with_empty_image(empty)
        .with_full_image(full)
        .with_delegate(&log);
    view.set_geometry(Rect::new(0.0, 0.0, 160.0, 32.0));
    view.layout_if_needed();

    // host touches arrive in window coordinates
    let origin = Point::new(20.0, 100.0);
    let mut touches = TouchInputHandler::new();

    // slot 3 spans [96, 128); 0.9 of the way across
    let mut down = touches.handle_contact(3, TouchPhase::Started, Point::new(20.0 + 124.8, 110.0));
    down.map_to_local(origin);
    assert!(view.event(&mut WidgetEvent::Touch(down)));
    assert_eq!(view.rating(), 4.0);

    let mut up = touches.handle_contact(3, TouchPhase::Ended, Point::new(20.0 + 124.8, 110.0));
    up.map_to_local(origin);
    view.event(&mut WidgetEvent::Touch(up));

    assert_eq!(view.rating(), 4.0);
    assert_eq!(touches.active_touch_count(), 0);
    assert_eq!(*log.events.lock(), vec!["updating 4", "updated 4"]);
}

#[test]
fn signals_mirror_delegate() {
    let (empty, full) = stars();
    let mut view = RatingView::new()
        .with_max_rating(4)
        .with_empty_image(empty)
        .with_full_image(full);
    view.set_geometry(Rect::new(0.0, 0.0, 128.0, 32.0));
    view.layout_if_needed();

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    view.rating_updating.connect(move |&r| sink.lock().push(("updating", r)));
    let sink = seen.clone();
    view.rating_updated.connect(move |&r| sink.lock().push(("updated", r)));

    let at = |x: f32, phase| {
        let p = Point::new(x, 16.0);
        WidgetEvent::Touch(TouchEvent::new(TouchPoint::new(1, p, p, phase)))
    };
    view.event(&mut at(10.0, TouchPhase::Started));
    view.event(&mut at(70.0, TouchPhase::Moved));
    view.event(&mut at(70.0, TouchPhase::Ended));

    assert_eq!(
        *seen.lock(),
        vec![("updating", 1.0), ("updating", 3.0), ("updated", 3.0)]
    );
}

#[test]
fn rating_stays_in_bounds_through_every_path() {
    let (empty, full) = stars();
    let mut view = RatingView::new()
        .with_min_rating(1)
        .with_mode(RatingMode::Half)
        .with_empty_image(empty)
        .with_full_image(full);
    view.set_geometry(Rect::new(0.0, 0.0, 160.0, 32.0));
    view.layout_if_needed();

    for x in [-50.0, 0.0, 1.0, 40.0, 80.0, 159.0, 500.0] {
        let p = Point::new(x, 16.0);
        view.event(&mut WidgetEvent::Touch(TouchEvent::new(TouchPoint::new(
            1,
            p,
            p,
            TouchPhase::Moved,
        ))));
        let rating = view.rating();
        assert!(
            (1.0..=5.0).contains(&rating),
            "touch at {x} produced {rating}"
        );
    }

    for value in [-10.0, 0.2, 5.5, 1e9] {
        view.set_rating(value);
        assert!((1.0..=5.0).contains(&view.rating()));
    }
}

#[test]
fn shrinking_max_rating_relays_out_new_slots() {
    let (empty, full) = stars();
    let mut view = RatingView::new()
        .with_empty_image(empty)
        .with_full_image(full)
        .with_rating(5.0);
    view.set_geometry(Rect::new(0.0, 0.0, 160.0, 32.0));
    view.layout_if_needed();

    view.set_max_rating(2);
    view.layout_if_needed();

    assert_eq!(view.rating(), 2.0);
    assert_eq!(view.empty_slots().len(), 2);
    // (160 - 64) / 1 gap between two 32px icons
    assert_eq!(view.empty_slots()[1].geometry(), Rect::new(128.0, 0.0, 32.0, 32.0));
    assert!(view.full_slots().iter().all(|s| !s.is_hidden()));
}
