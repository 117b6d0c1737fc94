use devctx::region::{Point, Size};
use devctx::{CoordinateTransform, DcError, DeviceMetrics, LayoutDirection, MappingMode};

const SCALES: [(f64, f64); 6] = [
    (1.0, 1.0),
    (2.0, 2.0),
    (-1.0, 1.0),
    (0.5, 3.0),
    (1.75, -0.25),
    (-4.0, -4.0),
];

const ORIENTATIONS: [(bool, bool); 4] = [(true, false), (true, true), (false, false), (false, true)];

fn configured_transforms() -> Vec<CoordinateTransform> {
    let _ = env_logger::builder().is_test(true).try_init();

    let metrics = DeviceMetrics::new(96, 120, 640, 480).unwrap();
    let mut out = Vec::new();
    for mode in MappingMode::ALL {
        for (sx, sy) in SCALES {
            for (x_lr, y_bu) in ORIENTATIONS {
                for layout in [LayoutDirection::Default, LayoutDirection::RightToLeft] {
                    let mut t = CoordinateTransform::new(metrics);
                    t.set_map_mode(mode);
                    t.set_user_scale(sx, sy).unwrap();
                    t.set_axis_orientation(x_lr, y_bu);
                    t.set_device_origin(13, -7);
                    t.set_layout_direction(layout);
                    out.push(t);
                }
            }
        }
    }
    out
}

#[test]
fn test_point_roundtrip_within_rounding() {
    for t in configured_transforms() {
        let (sx, sy) = t.scale();
        let tol_x = 0.5 / sx.abs() + 0.5;
        let tol_y = 0.5 / sy.abs() + 0.5;

        for v in (-500..=500).step_by(7) {
            let back_x = t.device_to_logical_x(t.logical_to_device_x(v));
            let back_y = t.device_to_logical_y(t.logical_to_device_y(v));

            if sx.abs() >= 1.0 {
                assert_eq!(back_x, v, "x roundtrip failed at {v} with {t:?}");
            } else {
                assert!(f64::from((back_x - v).abs()) <= tol_x, "x drifted at {v} with {t:?}");
            }
            if sy.abs() >= 1.0 {
                assert_eq!(back_y, v, "y roundtrip failed at {v} with {t:?}");
            } else {
                assert!(f64::from((back_y - v).abs()) <= tol_y, "y drifted at {v} with {t:?}");
            }
        }
    }
}

#[test]
fn test_device_value_is_stable_after_roundtrip() {
    for t in configured_transforms() {
        for v in (-500..=500).step_by(11) {
            let p = Point::new(v, -v);
            let device = t.to_device_point(p);
            assert_eq!(
                t.to_device_point(t.from_device_point(device)),
                device,
                "device value moved for {p:?} with {t:?}"
            );
        }
    }
}

#[test]
fn test_extents_ignore_orientation() {
    let metrics = DeviceMetrics::default();
    for mode in MappingMode::ALL {
        let mut upright = CoordinateTransform::new(metrics);
        upright.set_map_mode(mode);
        upright.set_device_origin(50, 50);

        for (x_lr, y_bu) in ORIENTATIONS {
            let mut flipped = upright.clone();
            flipped.set_axis_orientation(x_lr, y_bu);
            for w in [0, 1, 17, 250, 1440] {
                assert_eq!(
                    flipped.logical_to_device_x_rel(w),
                    upright.logical_to_device_x_rel(w)
                );
                assert_eq!(
                    flipped.logical_to_device_y_rel(w),
                    upright.logical_to_device_y_rel(w)
                );
                assert!(flipped.logical_to_device_x_rel(w) >= 0);
            }
        }
    }
}

#[test]
fn test_one_inch_maps_to_ppi() {
    let metrics = DeviceMetrics::new(96, 200, 0, 0).unwrap();
    let mut t = CoordinateTransform::new(metrics);
    let inch = [
        (MappingMode::Twips, 1440),
        (MappingMode::Points, 72),
        (MappingMode::LoMetric, 254),
    ];
    for (mode, units) in inch {
        t.set_map_mode(mode);
        assert_eq!(
            t.to_device_size(Size::new(units, units)),
            Size::new(96, 200),
            "{mode}"
        );
    }
}

#[test]
fn test_metric_scenario() {
    let mut t = CoordinateTransform::default();
    t.set_map_mode(MappingMode::Metric);
    t.set_user_scale(2.0, 2.0).unwrap();
    t.set_axis_orientation(true, true);
    t.set_device_origin(10, 10);

    assert_eq!(t.to_device_point(Point::new(5, 5)), Point::new(48, -28));
    assert_eq!(t.from_device_point(Point::new(48, -28)), Point::new(5, 5));
}

#[test]
fn test_negative_scale_mirrors_orientation_only_result() {
    let mut orientation_only = CoordinateTransform::default();
    orientation_only.set_axis_orientation(true, true);

    let mut mirrored = orientation_only.clone();
    mirrored.set_user_scale(-1.0, 1.0).unwrap();

    assert_eq!(
        mirrored.logical_to_device_x(5),
        -orientation_only.logical_to_device_x(5)
    );
    // y is untouched by the x scale
    assert_eq!(
        mirrored.logical_to_device_y(5),
        orientation_only.logical_to_device_y(5)
    );
}

#[test]
fn test_bounding_box_lifecycle() {
    let mut t = CoordinateTransform::default();
    t.calc_bounding_box(3, 3);
    t.calc_bounding_box(3, 3);
    assert_eq!(t.min_x().unwrap(), 3);
    assert_eq!(t.max_x().unwrap(), 3);

    t.reset_bounding_box();
    for query in [t.min_x(), t.max_x(), t.min_y(), t.max_y()] {
        assert!(matches!(query, Err(DcError::NoBoundingBox)));
    }
}
