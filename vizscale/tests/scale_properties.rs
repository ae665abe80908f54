use float_cmp::assert_approx_eq;
use rstest::rstest;
use vizscale::array;
use vizscale::{
    BandScale, ContinuousScale, DiscreteScale, IdentityScale, NumericScale, PointScale, Scale,
    ScaleError, Transform,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn domain_size<S: Scale>(scale: &S) -> usize {
    scale.domain().len()
}

#[rstest]
#[case(0.0, 0.0)]
#[case(10.0, 100.0)]
#[case(5.0, 50.0)]
#[case(-5.0, -50.0)]
#[case(2.5, 25.0)]
fn test_linear_mapping(#[case] input: f64, #[case] expected: f64) -> Result<(), ScaleError> {
    let scale = ContinuousScale::linear(&[0.0, 10.0], &[0.0, 100.0])?;
    assert_approx_eq!(f64, scale.apply(input), expected);
    assert_approx_eq!(f64, Scale::apply(&scale, &input)?, expected);
    Ok(())
}

#[test]
fn test_linear_clamped() -> Result<(), ScaleError> {
    let scale = ContinuousScale::linear(&[0.0, 10.0], &[0.0, 100.0])?.with_clamp(true);
    assert_eq!(scale.apply(-5.0), 0.0);
    assert_eq!(scale.apply(50.0), 100.0);
    assert_approx_eq!(f64, scale.invert(&200.0)?, 10.0);
    assert!(Scale::clamp(&scale));
    Ok(())
}

#[rstest]
#[case(Transform::Identity, [-10.0, 10.0])]
#[case(Transform::pow(2.0), [-10.0, 10.0])]
#[case(Transform::pow(0.3), [0.0, 50.0])]
#[case(Transform::sqrt(), [-10.0, 10.0])]
#[case(Transform::log(10.0), [1.0, 1000.0])]
#[case(Transform::log(2.0), [0.5, 64.0])]
#[case(Transform::symlog(1.0), [-500.0, 500.0])]
fn test_round_trip(#[case] transform: Transform, #[case] domain: [f64; 2]) -> Result<(), ScaleError> {
    let scale = ContinuousScale::try_new(&domain, &[0.0, 800.0], transform)?;
    for i in 0..=20 {
        let x = domain[0] + (domain[1] - domain[0]) * i as f64 / 20.0;
        let y = scale.apply(x);
        assert_approx_eq!(f64, scale.invert(&y)?, x, epsilon = 1e-9 * x.abs().max(1.0));
    }
    Ok(())
}

#[rstest]
#[case(0.0, 100.0, 10, vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0])]
#[case(0.0, 1.0, 5, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0])]
#[case(-1.0, 1.0, 4, vec![-1.0, -0.5, 0.0, 0.5, 1.0])]
#[case(100.0, 0.0, 2, vec![100.0, 50.0, 0.0])]
fn test_linear_ticks(
    #[case] start: f64,
    #[case] stop: f64,
    #[case] count: usize,
    #[case] expected: Vec<f64>,
) -> Result<(), ScaleError> {
    let scale = ContinuousScale::linear(&[start, stop], &[0.0, 1.0])?;
    assert_eq!(scale.ticks(Some(count)), expected);
    assert_eq!(array::ticks(start, stop, count as f64), expected);
    Ok(())
}

#[test]
fn test_tick_step_for_hundred() -> Result<(), ScaleError> {
    let scale = ContinuousScale::linear(&[0.0, 100.0], &[0.0, 1.0])?;
    assert_eq!(scale.tick_step(Some(10)), 10.0);
    Ok(())
}

#[rstest]
#[case(Transform::Identity, [0.37, 97.2])]
#[case(Transform::Identity, [-12.5, 3.3])]
#[case(Transform::Identity, [9876.0, 123.0])]
#[case(Transform::pow(2.0), [0.013, 0.871])]
#[case(Transform::log(10.0), [3.0, 420.0])]
#[case(Transform::log(2.0), [3.0, 420.0])]
#[case(Transform::log(3.0), [1.5, 80.0])]
#[case(Transform::log(std::f64::consts::E), [1.5, 80.0])]
#[case(Transform::symlog(1.0), [-7.3, 1234.0])]
fn test_nice_never_shrinks(
    #[case] transform: Transform,
    #[case] domain: [f64; 2],
) -> Result<(), ScaleError> {
    init_tracing();
    for count in [1, 3, 5, 10, 20] {
        let scale =
            ContinuousScale::try_new(&domain, &[0.0, 1.0], transform)?.with_nice(Some(count));
        let (lo, hi) = scale.domain_extent();
        let (orig_lo, orig_hi) = (domain[0].min(domain[1]), domain[0].max(domain[1]));
        assert!(lo <= orig_lo, "{transform:?} count {count}: {lo} > {orig_lo}");
        assert!(hi >= orig_hi, "{transform:?} count {count}: {hi} < {orig_hi}");
    }
    Ok(())
}

#[rstest]
#[case(0.5)]
#[case(1.0)]
#[case(0.0)]
#[case(f64::INFINITY)]
fn test_log_base_must_exceed_one(#[case] base: f64) {
    assert!(matches!(
        ContinuousScale::log(&[1.5, 80.0], &[0.0, 1.0], base),
        Err(ScaleError::Configuration(_))
    ));
}

#[test]
fn test_huge_tick_count_is_capped() -> Result<(), ScaleError> {
    init_tracing();
    let scale = ContinuousScale::linear(&[0.0, 1.0], &[0.0, 1.0])?;
    let ticks = scale.ticks(Some(usize::MAX));
    assert!(ticks.len() <= array::MAX_TICKS);
    assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn test_band_layout() -> Result<(), ScaleError> {
    let scale = BandScale::try_new(vec!["a", "b", "c"])?.with_range((0.0, 90.0))?;
    assert_eq!(scale.bandwidth(), 30.0);
    assert_eq!(scale.apply(&"a")?, 0.0);
    assert_eq!(scale.apply(&"b")?, 30.0);
    assert_eq!(scale.apply(&"c")?, 60.0);
    assert_eq!(domain_size(&scale), 3);
    Ok(())
}

#[test]
fn test_band_unknown_key() -> Result<(), ScaleError> {
    let scale = BandScale::try_new(vec!["a", "b", "c"])?.with_range((0.0, 90.0))?;
    let err = scale.apply(&"z").unwrap_err();
    assert_eq!(err, ScaleError::KeyNotFound("\"z\"".to_string()));
    assert_eq!(err.to_string(), "Domain value not found: \"z\"");
    Ok(())
}

#[rstest]
#[case(0.0, 0.0, 0.5, (0.0, 100.0))]
#[case(0.3, 0.0, 0.5, (0.0, 100.0))]
#[case(0.0, 1.0, 0.0, (0.0, 100.0))]
#[case(0.5, 0.25, 1.0, (10.0, 640.0))]
#[case(1.0, 1.0, 0.5, (500.0, 0.0))]
#[case(0.1, 0.1, 0.2, (-40.0, 40.0))]
fn test_bands_stay_within_range(
    #[case] padding_inner: f64,
    #[case] padding_outer: f64,
    #[case] align: f64,
    #[case] range: (f64, f64),
) -> Result<(), ScaleError> {
    let keys = (0..7).map(|i| format!("k{i}")).collect::<Vec<_>>();
    let scale = BandScale::try_new(keys.clone())?
        .with_range(range)?
        .with_padding_inner(padding_inner)?
        .with_padding_outer(padding_outer)?
        .with_align(align)?;

    let (lo, hi) = (range.0.min(range.1), range.0.max(range.1));
    assert!(scale.bandwidth() >= 0.0);
    for key in &keys {
        let start = scale.apply(key)?;
        assert!(start >= lo - 1e-9, "{key} starts at {start}");
        assert!(start + scale.bandwidth() <= hi + 1e-9, "{key} ends past {hi}");
    }
    Ok(())
}

#[test]
fn test_discrete_dispatch() -> Result<(), ScaleError> {
    let mut scales: Vec<DiscreteScale<&str>> = vec![
        BandScale::try_new(vec!["a", "b"])?.into(),
        PointScale::try_new(vec!["a", "b"])?.into(),
    ];
    for scale in scales.iter_mut() {
        scale.set_range((0.0, 100.0))?;
        scale.set_domain(vec!["a", "b", "c", "d"])?;
    }

    assert_eq!(scales[0].bandwidth(), 25.0);
    assert_eq!(scales[0].step(), 25.0);
    assert_eq!(scales[0].apply(&"d")?, 75.0);

    assert_eq!(scales[1].bandwidth(), 0.0);
    assert_approx_eq!(f64, scales[1].step(), 100.0 / 3.0);
    assert_approx_eq!(f64, scales[1].apply(&"d")?, 100.0, epsilon = 1e-9);

    for scale in &scales {
        assert_eq!(scale.get_domain(), &["a", "b", "c", "d"]);
        assert_eq!(scale.range(), vec![0.0, 100.0]);
        assert!(matches!(
            scale.invert(&10.0),
            Err(ScaleError::UnsupportedOperation(_))
        ));
    }
    Ok(())
}

#[rstest]
#[case(1.0)]
#[case(100.0)]
#[case(24.0)]
#[case(78.6355)]
#[case(-100.0)]
#[case(-24.0)]
#[case(-78.6355)]
fn test_identity(#[case] value: f64) -> Result<(), ScaleError> {
    let scale = IdentityScale::new();
    assert_eq!(Scale::apply(&scale, &value)?, value);
    assert_eq!(Scale::invert(&scale, &value)?, value);
    Ok(())
}

#[test]
fn test_identity_is_immutable() {
    let mut scale = NumericScale::from(IdentityScale::with_extent(-1.0, 1.0));
    assert!(matches!(
        scale.set_domain(&[10.0, 56.2]),
        Err(ScaleError::Configuration(_))
    ));
    assert!(matches!(
        scale.set_range(&[10.0, 56.2]),
        Err(ScaleError::Configuration(_))
    ));
    assert!(matches!(
        scale.set_clamp(true),
        Err(ScaleError::Configuration(_))
    ));
    assert_eq!(scale.get_domain(), vec![-1.0, 1.0]);
}

#[test]
fn test_custom_transform_without_inverse() -> Result<(), ScaleError> {
    let scale = ContinuousScale::try_new(
        &[0.0, 10.0],
        &[0.0, 1.0],
        Transform::custom(|x| x.powi(3), None),
    )?;
    assert_approx_eq!(f64, scale.apply(5.0), 0.125);
    assert!(matches!(
        scale.invert(&0.5),
        Err(ScaleError::UnsupportedOperation(_))
    ));
    Ok(())
}

#[test]
fn test_mismatched_lengths_are_logged_and_truncated() -> Result<(), ScaleError> {
    init_tracing();
    let scale = ContinuousScale::linear(&[0.0, 1.0, 2.0], &[0.0, 10.0])?;
    assert_eq!(scale.apply(2.0), 20.0);
    Ok(())
}
