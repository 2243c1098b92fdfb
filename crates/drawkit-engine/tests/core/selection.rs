use drawkit_core::geometry::{Point, Rect};
use drawkit_engine::canvas::Canvas;
use drawkit_engine::render::{RenderHandle, RenderSurface};
use drawkit_engine::shapes::ShapeKind;

/// Test double for the host's find-closest pick.
struct FakeSurface {
    nearest: Option<RenderHandle>,
}

impl RenderSurface for FakeSurface {
    fn nearest_handle(&self, _p: Point, _tolerance: f64) -> Option<RenderHandle> {
        self.nearest
    }
}

fn canvas_with_two_rects() -> (Canvas, u64, u64) {
    let mut canvas = Canvas::new();
    let bottom = canvas
        .create_shape(
            ShapeKind::Rectangle,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        )
        .unwrap();
    let top = canvas
        .create_shape(
            ShapeKind::Rectangle,
            vec![Point::new(5.0, 5.0), Point::new(15.0, 15.0)],
        )
        .unwrap();
    canvas.begin_render_pass();
    canvas.bind_handle(bottom, RenderHandle(101));
    canvas.bind_handle(top, RenderHandle(102));
    (canvas, bottom, top)
}

#[test]
fn test_select_resolves_handle_to_shape() {
    let (mut canvas, _, top) = canvas_with_two_rects();
    let surface = FakeSurface {
        nearest: Some(RenderHandle(102)),
    };

    let picked = canvas.begin_select(Point::new(7.0, 7.0), &surface);
    assert_eq!(picked, Some(top));
    assert_eq!(canvas.selected_id(), Some(top));
    assert_eq!(
        canvas.status_snapshot().selected_kind,
        Some(ShapeKind::Rectangle)
    );
}

#[test]
fn test_select_on_empty_space_clears_selection() {
    let (mut canvas, bottom, _) = canvas_with_two_rects();
    let hit = FakeSurface {
        nearest: Some(RenderHandle(101)),
    };
    let miss = FakeSurface { nearest: None };

    assert_eq!(canvas.begin_select(Point::new(2.0, 2.0), &hit), Some(bottom));
    assert_eq!(canvas.begin_select(Point::new(90.0, 90.0), &miss), None);
    assert_eq!(canvas.selected_id(), None);
}

#[test]
fn test_selection_decoration_is_padded_bbox() {
    let (mut canvas, bottom, _) = canvas_with_two_rects();
    let surface = FakeSurface {
        nearest: Some(RenderHandle(101)),
    };
    canvas.begin_select(Point::new(2.0, 2.0), &surface);

    assert_eq!(
        canvas.current_selection_bbox(),
        Some(Rect::new(-5.0, -5.0, 15.0, 15.0))
    );

    // The decoration follows the shape's points.
    canvas.begin_drag(Point::new(2.0, 2.0));
    canvas.apply_translate(10.0, 0.0);
    assert_eq!(
        canvas.current_selection_bbox(),
        Some(Rect::new(5.0, -5.0, 25.0, 15.0))
    );
    let _ = bottom;

    canvas.unselect();
    assert_eq!(canvas.current_selection_bbox(), None);
}

#[test]
fn test_handles_do_not_survive_a_render_pass() {
    let (mut canvas, _, _) = canvas_with_two_rects();
    canvas.begin_render_pass();

    let surface = FakeSurface {
        nearest: Some(RenderHandle(101)),
    };
    assert_eq!(canvas.begin_select(Point::new(2.0, 2.0), &surface), None);
}

#[test]
fn test_stale_handle_after_scene_rewrite_resolves_to_nothing() {
    let mut canvas = Canvas::new();
    let id = canvas
        .create_shape(
            ShapeKind::Polyline,
            vec![
                Point::new(-5.0, 5.0),
                Point::new(5.0, 5.0),
                Point::new(15.0, 5.0),
            ],
        )
        .unwrap();
    canvas.begin_render_pass();
    canvas.bind_handle(id, RenderHandle(55));

    // The clip splits the polyline; its original id no longer exists.
    canvas.clip_scene(Rect::new(0.0, 0.0, 10.0, 10.0));

    let surface = FakeSurface {
        nearest: Some(RenderHandle(55)),
    };
    assert_eq!(canvas.begin_select(Point::new(5.0, 5.0), &surface), None);
}

#[test]
fn test_bind_handle_ignores_unknown_ids() {
    let mut canvas = Canvas::new();
    canvas.begin_render_pass();
    canvas.bind_handle(999, RenderHandle(7));

    let surface = FakeSurface {
        nearest: Some(RenderHandle(7)),
    };
    assert_eq!(canvas.begin_select(Point::new(0.0, 0.0), &surface), None);
}
