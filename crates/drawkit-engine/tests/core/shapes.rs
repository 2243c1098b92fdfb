use drawkit_core::geometry::Point;
use drawkit_core::Error;
use drawkit_engine::shapes::{Shape, ShapeKind, ShapeStyle};

#[test]
fn test_point_shape() {
    let shape = Shape::point(Point::new(3.0, 4.0), ShapeStyle::default());
    assert_eq!(shape.kind, ShapeKind::Point);
    assert_eq!(shape.points, vec![Point::new(3.0, 4.0)]);
    assert_eq!(shape.display_color, shape.stroke_color);
    assert_eq!(shape.rotation_angle, 0.0);
}

#[test]
fn test_polyline_requires_two_points() {
    let err = Shape::polyline(vec![Point::new(1.0, 1.0)], ShapeStyle::default());
    assert_eq!(
        err.unwrap_err(),
        Error::InsufficientPoints {
            kind: "polyline",
            needed: 2,
            got: 1,
        }
    );

    let ok = Shape::polyline(
        vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        ShapeStyle::default(),
    );
    assert!(ok.is_ok());
}

#[test]
fn test_rectangle_corner_winding() {
    // Corners may arrive in any order; storage is normalized.
    let shape = Shape::rectangle(
        Point::new(10.0, 20.0),
        Point::new(0.0, 5.0),
        ShapeStyle::default(),
    );
    assert_eq!(shape.kind, ShapeKind::Rectangle);
    assert_eq!(
        shape.points,
        vec![
            Point::new(0.0, 5.0),
            Point::new(10.0, 5.0),
            Point::new(10.0, 20.0),
            Point::new(0.0, 20.0),
        ]
    );
}

#[test]
fn test_rectangle_zero_extent_coerced() {
    let shape = Shape::rectangle(
        Point::new(0.0, 5.0),
        Point::new(10.0, 5.0),
        ShapeStyle::default(),
    );
    let bbox = shape.bbox().unwrap();
    assert_eq!(bbox.height(), 0.01);
    assert_eq!(bbox.width(), 10.0);
}

#[test]
fn test_ellipse_is_open_sixty_gon() {
    let shape = Shape::ellipse(
        Point::new(0.0, 0.0),
        Point::new(10.0, 20.0),
        ShapeStyle::default(),
    );
    assert_eq!(shape.kind, ShapeKind::Ellipse);
    assert_eq!(shape.points.len(), 60);
    // First vertex sits at angle zero: center + (rx, 0).
    assert_eq!(shape.points[0], Point::new(10.0, 10.0));
    // The list is open: the closing edge wraps last-to-first.
    assert_ne!(shape.points[0], shape.points[59]);
}

#[test]
fn test_ellipse_degenerate_drag_gets_minimum_radii() {
    let shape = Shape::ellipse(
        Point::new(5.0, 5.0),
        Point::new(5.0, 5.0),
        ShapeStyle::default(),
    );
    let bbox = shape.bbox().unwrap();
    assert!(bbox.width() > 0.0 && bbox.width() <= 0.02 + 1e-9);
    assert!(bbox.height() > 0.0 && bbox.height() <= 0.02 + 1e-9);
}

#[test]
fn test_circular_ellipse_vertices_are_equidistant() {
    let shape = Shape::ellipse(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        ShapeStyle::default(),
    );
    let center = Point::new(5.0, 5.0);
    for p in &shape.points {
        assert!((p.distance_to(&center) - 5.0).abs() < 1e-9);
    }
}

#[test]
fn test_centroid_is_mean_of_points() {
    let shape = Shape::polyline(
        vec![
            Point::new(0.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(0.0, 3.0),
        ],
        ShapeStyle::default(),
    )
    .unwrap();
    assert_eq!(shape.centroid(), Point::new(2.0, 1.0));
}

#[test]
fn test_style_snapshot_round_trips() {
    let style = ShapeStyle {
        stroke_color: drawkit_core::Color::Teal,
        stroke_width: 7.0,
        filled: true,
    };
    let shape = Shape::rectangle(Point::new(0.0, 0.0), Point::new(4.0, 4.0), style);
    assert_eq!(shape.style(), style);
}
