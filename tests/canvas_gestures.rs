use egui::{Color32, Pos2};
use rand::rngs::mock::StepRng;
use sketchpad::canvas::{PaintCanvas, ToolMode, DEFAULT_STAMP_SIZE, ERASER_COLOR};
use sketchpad::shape::{Shape, ShapeType};

fn p(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

#[test]
fn freehand_gesture_commits_exactly_one_shape() {
    let mut canvas = PaintCanvas::new();
    let before = canvas.document().len();

    assert!(canvas.pointer_down(p(10.0, 10.0)));
    assert!(canvas.pointer_move(p(12.0, 11.0)));
    assert!(canvas.pointer_move(p(15.0, 14.0)));
    assert!(canvas.pointer_up(p(20.0, 20.0)));

    assert_eq!(canvas.document().len(), before + 1);
    assert!(canvas.live_line().is_none());
}

#[test]
fn tap_commits_a_degenerate_two_point_line() {
    let mut canvas = PaintCanvas::new();

    canvas.pointer_down(p(5.0, 5.0));
    canvas.pointer_up(p(5.0, 5.0));

    let ShapeType::Freehand(line) = &canvas.document().shapes()[0] else {
        panic!("expected a freehand line");
    };
    // Down and up each append a point; a tap with no drag stays invisible
    // but is still committed.
    assert_eq!(line.points(), [p(5.0, 5.0), p(5.0, 5.0)]);
}

#[test]
fn circle_stamp_is_instantaneous() {
    let mut canvas = PaintCanvas::new();
    canvas.enable_circle_stamp();

    assert!(canvas.pointer_down(p(30.0, 40.0)));

    assert_eq!(canvas.document().len(), 1);
    assert!(canvas.live_line().is_none());

    let ShapeType::Circle(circle) = &canvas.document().shapes()[0] else {
        panic!("expected a circle");
    };
    assert_eq!(circle.center(), p(30.0, 40.0));
    assert_eq!(circle.radius(), DEFAULT_STAMP_SIZE);

    // The stamp never opened a gesture, so move/up stay no-ops.
    assert!(!canvas.pointer_move(p(31.0, 41.0)));
    assert!(!canvas.pointer_up(p(31.0, 41.0)));
    assert_eq!(canvas.document().len(), 1);
}

#[test]
fn square_stamp_uses_pointer_as_top_left() {
    let mut canvas = PaintCanvas::new();
    canvas.enable_square_stamp();

    canvas.pointer_down(p(7.0, 9.0));

    let ShapeType::Square(square) = &canvas.document().shapes()[0] else {
        panic!("expected a square");
    };
    assert_eq!(square.top_left(), p(7.0, 9.0));
    assert_eq!(square.side(), DEFAULT_STAMP_SIZE);
    assert!(canvas.live_line().is_none());
}

#[test]
fn eraser_draws_in_background_color() {
    let mut canvas = PaintCanvas::new();
    canvas.set_color(Color32::RED);
    canvas.enable_eraser();

    canvas.pointer_down(p(1.0, 1.0));
    canvas.pointer_move(p(2.0, 2.0));
    canvas.pointer_up(p(3.0, 3.0));

    let ShapeType::Freehand(line) = &canvas.document().shapes()[0] else {
        panic!("expected a freehand line");
    };
    assert_eq!(line.color(), ERASER_COLOR);
    assert!(!line.is_rainbow());
}

#[test]
fn mode_setting_is_mutually_exclusive() {
    let mut canvas = PaintCanvas::new();

    canvas.enable_rainbow();
    canvas.enable_circle_stamp();
    canvas.enable_eraser();

    assert_eq!(canvas.mode(), ToolMode::Eraser);
    assert_ne!(canvas.mode(), ToolMode::Rainbow);
    assert_ne!(canvas.mode(), ToolMode::CircleStamp);
    assert_ne!(canvas.mode(), ToolMode::SquareStamp);
}

#[test]
fn picking_a_color_returns_to_the_plain_brush() {
    let mut canvas = PaintCanvas::new();
    canvas.enable_square_stamp();

    canvas.set_color(Color32::BLUE);

    assert_eq!(canvas.mode(), ToolMode::Brush);
    assert_eq!(canvas.color(), Color32::BLUE);

    // The next gesture is an ordinary stroke in the picked color.
    canvas.pointer_down(p(0.0, 0.0));
    let line = canvas.live_line().unwrap();
    assert_eq!(line.color(), Color32::BLUE);
    assert!(!line.is_rainbow());
}

#[test]
fn rainbow_color_follows_the_injected_rng() {
    // StepRng yields 1, 2, 3, ... as little-endian byte sources, so the
    // n-th pointer move rolls the color to rgb(n, 0, 0).
    let mut canvas = PaintCanvas::with_rng(Box::new(StepRng::new(1, 1)));
    canvas.enable_rainbow();

    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_move(p(1.0, 0.0));
    assert_eq!(canvas.live_line().unwrap().color(), Color32::from_rgb(1, 0, 0));

    canvas.pointer_move(p(2.0, 0.0));
    canvas.pointer_move(p(3.0, 0.0));
    canvas.pointer_up(p(4.0, 0.0));

    // The committed line keeps the color rolled on the last move; the
    // release itself never re-rolls.
    let ShapeType::Freehand(line) = &canvas.document().shapes()[0] else {
        panic!("expected a freehand line");
    };
    assert!(line.is_rainbow());
    assert_eq!(line.color(), Color32::from_rgb(3, 0, 0));
}

#[test]
fn brush_stroke_ignores_the_rng() {
    let mut canvas = PaintCanvas::with_rng(Box::new(StepRng::new(u64::MAX, 0)));

    canvas.pointer_down(p(0.0, 0.0));
    canvas.pointer_move(p(1.0, 1.0));
    canvas.pointer_up(p(2.0, 2.0));

    let ShapeType::Freehand(line) = &canvas.document().shapes()[0] else {
        panic!("expected a freehand line");
    };
    assert_eq!(line.color(), Color32::BLACK);
}

#[test]
fn insertion_order_is_preserved_across_mode_changes() {
    let mut canvas = PaintCanvas::new();

    canvas.enable_circle_stamp();
    canvas.pointer_down(p(10.0, 10.0));

    canvas.enable_brush();
    canvas.pointer_down(p(20.0, 20.0));
    canvas.pointer_move(p(25.0, 25.0));
    canvas.pointer_up(p(30.0, 30.0));

    canvas.enable_square_stamp();
    canvas.pointer_down(p(40.0, 40.0));

    // Later mode changes don't reorder what is already committed.
    canvas.enable_eraser();

    let kinds: Vec<&str> = canvas.document().shapes().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, ["circle", "freehand", "square"]);
}

#[test]
fn each_gesture_commits_independently() {
    let mut canvas = PaintCanvas::new();

    for i in 0..3 {
        let start = p(i as f32, 0.0);
        canvas.pointer_down(start);
        canvas.pointer_move(p(i as f32, 5.0));
        canvas.pointer_up(p(i as f32, 10.0));
        assert_eq!(canvas.document().len(), i + 1);
        assert!(canvas.live_line().is_none());
    }
}
