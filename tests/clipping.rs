use approx::assert_relative_eq;
use line_clipper::prelude::*;

fn demo_rect() -> ClipRect {
    ClipRect::new(-200.0, -100.0, 200.0, 100.0).unwrap()
}

#[test]
fn demo_scenarios() {
    let rect = demo_rect();

    let across = clip(Segment::from_coords(-300.0, 0.0, 300.0, 0.0), &rect);
    assert_eq!(across.kind(), ClipKind::Partial);
    assert_eq!(
        across.segment(),
        Some(Segment::from_coords(-200.0, 0.0, 200.0, 0.0))
    );
    assert_eq!(
        across.discarded(),
        &[
            Segment::from_coords(-300.0, 0.0, -200.0, 0.0),
            Segment::from_coords(200.0, 0.0, 300.0, 0.0),
        ]
    );

    let inside = Segment::from_coords(0.0, 0.0, 50.0, 50.0);
    let result = clip(inside, &rect);
    assert_eq!(result.kind(), ClipKind::Accepted);
    assert_eq!(result.segment(), Some(inside));

    let outside = clip(Segment::from_coords(300.0, 300.0, 400.0, 400.0), &rect);
    assert_eq!(outside.kind(), ClipKind::Rejected);
    assert_eq!(
        Outcode::of(Vec2::new(300.0, 300.0), &rect),
        Outcode::RIGHT | Outcode::TOP
    );

    let entering = clip(Segment::from_coords(-300.0, -50.0, 0.0, 0.0), &rect);
    assert_eq!(entering.kind(), ClipKind::Partial);
    assert_eq!(entering.discarded().len(), 1);
    let visible = entering.segment().unwrap();
    assert_relative_eq!(visible.start.x, -200.0);
    assert_relative_eq!(visible.start.y, -100.0 / 3.0, epsilon = 1e-4);
    assert_eq!(visible.end, Vec2::ZERO);
}

/// Endpoints sampled on a grid around the rectangle, every pair clipped.
#[test]
fn every_visible_result_lies_inside_and_is_stable() {
    let rect = demo_rect();
    let mut points = Vec::new();
    let mut y = -260.0;
    while y <= 260.0 {
        let mut x = -330.0;
        while x <= 330.0 {
            points.push(Vec2::new(x, y));
            x += 55.0;
        }
        y += 65.0;
    }

    for &a in &points {
        for &b in &points {
            let result = clip(Segment::new(a, b), &rect);
            let fragments: Vec<_> = result.fragments().collect();

            match result.kind() {
                ClipKind::Accepted => {
                    assert_eq!(result.segment(), Some(Segment::new(a, b)));
                    assert!(result.discarded().is_empty());
                    assert_eq!(fragments.len(), 1);
                }
                ClipKind::Partial => {
                    assert!(!result.discarded().is_empty());
                    assert_eq!(result.discarded().len(), result.trims());
                    assert_eq!(
                        fragments.last().map(|f| f.style),
                        Some(FragmentStyle::Accepted)
                    );
                }
                ClipKind::Rejected => {
                    assert!(result.segment().is_none());
                    assert_eq!(result.discarded().len(), result.trims() + 1);
                    assert!(fragments.iter().all(|f| f.style == FragmentStyle::Rejected));
                }
            }

            if let Some(visible) = result.segment() {
                assert!(rect.contains(visible.start), "{a:?} -> {b:?}");
                assert!(rect.contains(visible.end), "{a:?} -> {b:?}");

                let again = clip(visible, &rect);
                assert_eq!(again.kind(), ClipKind::Accepted);
                assert_eq!(again.segment(), Some(visible));
            }
        }
    }
}

#[test]
fn shared_half_plane_is_always_rejected() {
    let rect = demo_rect();
    let left_pairs = [
        ((-250.0, -300.0), (-201.0, 300.0)),
        ((-1000.0, 0.0), (-200.5, 50.0)),
    ];
    for ((x1, y1), (x2, y2)) in left_pairs {
        let result = clip(Segment::from_coords(x1, y1, x2, y2), &rect);
        assert_eq!(result.kind(), ClipKind::Rejected);
        assert_eq!(result.trims(), 0);
    }
}

#[test]
fn invalid_rect_reports_axis() {
    let err = ClipRect::new(0.0, 0.0, -1.0, 1.0).unwrap_err();
    assert!(err.to_string().contains("x axis"));
}

#[test]
fn viewer_round_trip_without_a_window() {
    let mut viewer = Viewer::new(ViewerConfig::default()).unwrap();
    viewer.pointer_pressed(Vec2::new(0.0, 0.0));
    viewer.pointer_released(Vec2::new(600.0, 600.0));
    viewer.update();
    viewer.render();

    let result = viewer.last_clip().unwrap();
    assert_eq!(result.kind(), ClipKind::Partial);
    let visible = result.segment().unwrap();
    assert_relative_eq!(visible.start, Vec2::new(200.0, 200.0));
    assert_relative_eq!(visible.end, Vec2::new(400.0, 400.0));
}
