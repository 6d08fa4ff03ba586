use profile_charts::core::{LinePlot, Margins, PlotArea, Point, Position, ValueScaleTuning, Viewport};
use profile_charts::interaction::{
    HoverController, HoverState, TooltipConfig, clamp_tooltip, nearest_point_index,
};

/// Three points at x = 10, 50, 90 inside a 100x100 viewport.
fn plot_with_labels(labels: [&str; 3]) -> LinePlot {
    let points = labels
        .iter()
        .enumerate()
        .map(|(i, label)| Point::new(i, i as f64 * 50.0, *label))
        .collect();
    LinePlot::new(
        points,
        Viewport::new(100, 100),
        Margins::new(10.0, 10.0, 10.0, 10.0),
        ValueScaleTuning::default(),
    )
    .expect("plot")
}

fn plot() -> LinePlot {
    plot_with_labels(["d0", "d1", "d2"])
}

#[test]
fn nearest_point_uses_minimum_horizontal_distance() {
    let plot = plot();
    let xs: Vec<f64> = plot.positions().map(|p| p.x).collect();
    assert_eq!(xs, vec![10.0, 50.0, 90.0]);

    assert_eq!(nearest_point_index(&plot, 52.0), Some(1));
    assert_eq!(nearest_point_index(&plot, -100.0), Some(0));
    assert_eq!(nearest_point_index(&plot, 500.0), Some(2));
    assert_eq!(nearest_point_index(&plot, f64::NAN), None);
}

#[test]
fn exact_ties_pick_the_lower_index() {
    let plot = plot();
    assert_eq!(nearest_point_index(&plot, 30.0), Some(0));
    assert_eq!(nearest_point_index(&plot, 70.0), Some(1));
}

#[test]
fn pointer_move_sets_active_point_and_clamped_tooltip() {
    let mut controller = HoverController::new(plot(), TooltipConfig::default());

    let state = controller.on_pointer_move(Position::new(52.0, 50.0)).clone();
    let active = state.active_point.expect("active point");
    assert_eq!(active.index, 1);
    assert_eq!(state.tooltip_text.as_deref(), Some("50 XP - d1"));
    // anchor (62, 40); 10 chars * 7px overflows the right edge at 90
    assert_eq!(state.tooltip_position, Some(Position::new(20.0, 40.0)));

    let primitive = controller.tooltip_primitive();
    assert!(primitive.visible);
    assert_eq!(primitive.text, "50 XP - d1");
    assert_eq!((primitive.x, primitive.y), (20.0, 40.0));
}

#[test]
fn tooltip_never_renders_above_the_top_margin() {
    let mut controller = HoverController::new(plot(), TooltipConfig::default());
    let state = controller.on_pointer_move(Position::new(12.0, 5.0));
    assert_eq!(state.active_point.as_ref().map(|p| p.index), Some(0));
    assert_eq!(state.tooltip_position, Some(Position::new(22.0, 20.0)));
}

#[test]
fn wide_tooltip_is_pinned_to_the_left_margin() {
    let mut controller = HoverController::new(
        plot_with_labels(["a label far wider than the plot", "d1", "d2"]),
        TooltipConfig::default(),
    );
    let state = controller.on_pointer_move(Position::new(10.0, 50.0));
    let position = state.tooltip_position.expect("tooltip position");
    assert_eq!(position.x, 10.0);
}

#[test]
fn pointer_leave_clears_state() {
    let mut controller = HoverController::new(plot(), TooltipConfig::default());
    controller.on_pointer_move(Position::new(52.0, 50.0));
    controller.on_pointer_leave();

    assert_eq!(controller.state(), &HoverState::default());
    assert!(!controller.tooltip_primitive().visible);
}

#[test]
fn repeated_moves_are_idempotent() {
    let mut controller = HoverController::new(plot(), TooltipConfig::default());
    let first = controller.on_pointer_move(Position::new(44.0, 60.0)).clone();
    controller.on_pointer_move(Position::new(88.0, 30.0));
    let again = controller.on_pointer_move(Position::new(44.0, 60.0)).clone();
    assert_eq!(first, again);
}

#[test]
fn empty_plot_never_activates() {
    let plot = LinePlot::new(
        Vec::new(),
        Viewport::new(100, 100),
        Margins::new(10.0, 10.0, 10.0, 10.0),
        ValueScaleTuning::default(),
    )
    .expect("plot");
    let mut controller = HoverController::new(plot, TooltipConfig::default());
    assert!(!controller.on_pointer_move(Position::new(50.0, 50.0)).is_active());
}

#[test]
fn clamp_keeps_in_bounds_anchor_untouched() {
    let area = PlotArea {
        left: 5.0,
        right: 895.0,
        top: 20.0,
        bottom: 260.0,
    };
    let position = clamp_tooltip(
        Position::new(100.0, 100.0),
        50.0,
        area,
        &TooltipConfig::default(),
    );
    assert_eq!(position, Position::new(100.0, 100.0));
}
