//! Geo module tests.

use super::*;
use proptest::prelude::*;

const SAO_PAULO: GeoPoint = GeoPoint::new(-23.5505, -46.6333);

fn unit_square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(-1.0, -1.0),
        GeoPoint::new(-1.0, 1.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(1.0, -1.0),
    ]
}

#[test]
fn test_distance_identity_is_zero() {
    assert_eq!(distance_km(&SAO_PAULO, &SAO_PAULO), 0.0);
}

#[test]
fn test_distance_one_degree_latitude() {
    let d = distance_km(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(1.0, 0.0));
    assert!((d - 111.195).abs() < 0.01, "got {d}");
}

#[test]
fn test_distance_known_city_pair() {
    // São Paulo to Rio de Janeiro is roughly 360 km as the crow flies
    let rio = GeoPoint::new(-22.9068, -43.1729);
    let d = distance_km(&SAO_PAULO, &rio);
    assert!((350.0..370.0).contains(&d), "got {d}");
}

#[test]
fn test_distance_antipodal_points() {
    let d = distance_km(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 180.0));
    let half_circumference = std::f64::consts::PI * crate::config::EARTH_RADIUS_KM;
    assert!((d - half_circumference).abs() < 1e-3, "got {d}");
}

#[test]
fn test_circle_contains_center() {
    let circle = CircleRegion::new(SAO_PAULO, 5.0);
    assert!(is_in_circle(&SAO_PAULO, &circle));
}

#[test]
fn test_circle_excludes_far_point() {
    let far = GeoPoint::new(-23.6505, -46.7333);
    let d = distance_km(&SAO_PAULO, &far);
    assert!((13.0..16.0).contains(&d), "got {d}");

    let circle = CircleRegion::new(SAO_PAULO, 1.0);
    assert!(!is_in_circle(&far, &circle));
}

#[test]
fn test_circle_boundary_is_inclusive() {
    let edge = GeoPoint::new(-23.5605, -46.6333);
    let d = distance_km(&SAO_PAULO, &edge);

    assert!(is_in_circle(&edge, &CircleRegion::new(SAO_PAULO, d)));
    assert!(!is_in_circle(&edge, &CircleRegion::new(SAO_PAULO, d - 1e-9)));
}

#[test]
fn test_circle_zero_radius_matches_only_center() {
    let circle = CircleRegion::new(SAO_PAULO, 0.0);
    assert!(circle.contains(&SAO_PAULO));
    assert!(!circle.contains(&GeoPoint::new(-23.5505, -46.6334)));
}

#[test]
fn test_circle_negative_radius_contains_nothing() {
    let circle = CircleRegion::new(SAO_PAULO, -1.0);
    assert!(!circle.contains(&SAO_PAULO));
}

#[test]
fn test_polygon_degenerate_rings() {
    let p1 = GeoPoint::new(0.0, 0.0);
    let p2 = GeoPoint::new(1.0, 1.0);
    let probe = GeoPoint::new(0.5, 0.5);

    assert!(!is_in_polygon(&probe, &[]));
    assert!(!is_in_polygon(&probe, &[p1]));
    assert!(!is_in_polygon(&probe, &[p1, p2]));
    assert!(PolygonRegion::new(vec![p1, p2]).is_degenerate());
}

#[test]
fn test_polygon_unit_square() {
    let square = unit_square();
    assert!(is_in_polygon(&GeoPoint::new(0.0, 0.0), &square));
    assert!(!is_in_polygon(&GeoPoint::new(5.0, 5.0), &square));
}

#[test]
fn test_polygon_explicitly_closed_ring_matches_open_ring() {
    let open = unit_square();
    let mut closed = open.clone();
    closed.push(open[0]);

    for probe in [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.9, -0.9),
        GeoPoint::new(2.0, 0.0),
        GeoPoint::new(0.0, -3.0),
    ] {
        assert_eq!(
            is_in_polygon(&probe, &open),
            is_in_polygon(&probe, &closed),
            "probe {probe:?}"
        );
    }
}

#[test]
fn test_polygon_concave_notch_is_outside() {
    // U shape opening to the north: the notch between the arms is outside
    let u_shape = vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 3.0),
        GeoPoint::new(3.0, 3.0),
        GeoPoint::new(3.0, 2.0),
        GeoPoint::new(1.0, 2.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(3.0, 1.0),
        GeoPoint::new(3.0, 0.0),
    ];
    assert!(is_in_polygon(&GeoPoint::new(0.5, 1.5), &u_shape));
    assert!(is_in_polygon(&GeoPoint::new(2.5, 0.5), &u_shape));
    assert!(!is_in_polygon(&GeoPoint::new(2.0, 1.5), &u_shape));
}

#[test]
fn test_polygon_winding_order_does_not_matter() {
    let mut reversed = unit_square();
    reversed.reverse();
    assert!(is_in_polygon(&GeoPoint::new(0.25, -0.25), &reversed));
    assert!(!is_in_polygon(&GeoPoint::new(-1.5, 0.0), &reversed));
}

#[test]
fn test_region_dispatch() {
    let circle: Region = CircleRegion::new(SAO_PAULO, 2.0).into();
    let polygon: Region = PolygonRegion::new(unit_square()).into();

    assert_eq!(circle.kind(), RegionKind::Circle);
    assert_eq!(polygon.kind(), RegionKind::Polygon);
    assert!(circle.contains(&SAO_PAULO));
    assert!(!polygon.contains(&SAO_PAULO));
    assert!(polygon.contains(&GeoPoint::new(0.0, 0.0)));
}

#[test]
fn test_region_kind_string_forms() {
    assert_eq!(RegionKind::Circle.to_string(), "CIRCLE");
    assert_eq!(RegionKind::Polygon.as_ref(), "POLYGON");
    assert_eq!(
        serde_json::to_string(&RegionKind::Polygon).unwrap(),
        "\"POLYGON\""
    );
}

#[test]
fn test_region_kind_display_matches_wire_format() {
    use strum::IntoEnumIterator;

    for kind in RegionKind::iter() {
        let wire = serde_json::to_string(&kind).unwrap();
        assert_eq!(wire, format!("\"{kind}\""));
        let back: RegionKind = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, kind);
    }
    assert_eq!(RegionKind::iter().count(), 2);
}

#[test]
fn test_try_new_rejects_out_of_range() {
    assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
    assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
    assert!(GeoPoint::try_new(90.1, 0.0).is_err());
    assert!(GeoPoint::try_new(0.0, -180.5).is_err());
    assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
    assert!(GeoPoint::try_new(0.0, f64::INFINITY).is_err());
}

#[test]
fn test_from_parts_requires_both_coordinates() {
    assert_eq!(
        GeoPoint::from_parts(Some(1.0), Some(2.0)),
        Some(GeoPoint::new(1.0, 2.0))
    );
    assert_eq!(GeoPoint::from_parts(None, Some(2.0)), None);
    assert_eq!(GeoPoint::from_parts(Some(1.0), None), None);
}

fn any_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

proptest! {
    #[test]
    fn test_distance_is_symmetric(a in any_point(), b in any_point()) {
        prop_assert_eq!(distance_km(&a, &b), distance_km(&b, &a));
    }

    #[test]
    fn test_distance_identity(a in any_point()) {
        prop_assert_eq!(distance_km(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_is_bounded(a in any_point(), b in any_point()) {
        let d = distance_km(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * crate::config::EARTH_RADIUS_KM + 1e-6);
    }

    #[test]
    fn test_circle_agrees_with_distance(a in any_point(), b in any_point(), radius in 0.0f64..5000.0) {
        let circle = CircleRegion::new(a, radius);
        prop_assert_eq!(circle.contains(&b), distance_km(&b, &a) <= radius);
    }
}
