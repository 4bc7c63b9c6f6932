use medifusion_export::chart::{
    ChartAdapter, ChartBackend, ChartKind, ChartSpec, Surfaces, SvgBackend, axis_range,
};

#[test]
fn tumor_size_is_a_bar_and_growth_rate_a_line() {
    assert_eq!(ChartSpec::tumor_size(3.2).kind, ChartKind::Bar);
    assert_eq!(ChartSpec::tumor_size(3.2).category, "Size");
    assert_eq!(ChartSpec::growth_rate(0.4).kind, ChartKind::Line);
    assert_eq!(ChartSpec::growth_rate(0.4).category, "Rate");
}

#[test]
fn svg_bar_has_single_labeled_point_and_no_legend() {
    let svg = SvgBackend::default().draw(&ChartSpec::tumor_size(3.2)).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(svg.contains(">Size</text>"));
    assert!(svg.contains(">3.2</text>"));
    assert!(!svg.contains("legend"));
}

#[test]
fn svg_line_draws_one_point() {
    let svg = SvgBackend::default().draw(&ChartSpec::growth_rate(0.4)).unwrap();
    assert_eq!(svg.matches("<circle").count(), 1);
    assert!(svg.contains(">Rate</text>"));
}

#[test]
fn value_axis_starts_at_zero() {
    assert_eq!(axis_range(3.2), (0.0, 5.0));
    assert_eq!(axis_range(0.4), (0.0, 0.5));
    assert_eq!(axis_range(12.0), (0.0, 20.0));
    assert_eq!(axis_range(0.0), (0.0, 1.0));
    assert_eq!(axis_range(-0.3), (-0.5, 0.0));
}

#[test]
fn non_finite_values_are_rejected_by_backend() {
    assert!(SvgBackend::default().draw(&ChartSpec::tumor_size(f64::NAN)).is_err());
    assert!(SvgBackend::default().draw(&ChartSpec::growth_rate(f64::INFINITY)).is_err());
}

#[test]
fn missing_surface_is_swallowed() {
    let adapter: ChartAdapter = ChartAdapter::default();
    let mut surfaces = Surfaces::for_card(0);

    assert!(!adapter.draw(&mut surfaces, "tumorChart_9", &ChartSpec::tumor_size(1.0)));
    assert!(surfaces.take("tumorChart_0").is_none());
}

#[test]
fn drawing_fills_only_the_target_surface() {
    let adapter: ChartAdapter = ChartAdapter::default();
    let mut surfaces = Surfaces::for_card(3);

    assert!(adapter.draw(&mut surfaces, "growthChart_3", &ChartSpec::growth_rate(0.6)));
    assert!(surfaces.take("growthChart_3").is_some());
    assert!(surfaces.take("tumorChart_3").is_none());
}

#[test]
fn backend_failure_is_swallowed() {
    let adapter: ChartAdapter = ChartAdapter::default();
    let mut surfaces = Surfaces::for_card(0);
    assert!(!adapter.draw(&mut surfaces, "tumorChart_0", &ChartSpec::tumor_size(f64::NAN)));
    assert!(surfaces.take("tumorChart_0").is_none());
}
