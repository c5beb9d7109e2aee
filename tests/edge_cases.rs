use geo::Point;
use zquad::{Config, DistanceMetric, MAX_ZOOM, QuadIndex, VALUE_LIMIT, ZQuad, ZQuadError, bias};

/// Test 1: Value space boundaries
#[test]
fn test_value_limits() {
    assert_eq!(VALUE_LIMIT, 6_004_799_503_160_661);
    assert!(VALUE_LIMIT < 1 << 53);

    let last = ZQuad::from_value(VALUE_LIMIT - 1).expect("largest value");
    assert_eq!(last.zoom(), MAX_ZOOM);
    assert!(last.children().is_none());
    assert_eq!(
        ZQuad::from_value(VALUE_LIMIT),
        Err(ZQuadError::InvalidQuad(VALUE_LIMIT))
    );

    let first_leaf = ZQuad::from_value(bias(MAX_ZOOM)).expect("first zoom 26 value");
    assert_eq!(first_leaf.zoom(), MAX_ZOOM);
    assert_eq!(ZQuad::from_value(bias(MAX_ZOOM) - 1).map(|q| q.zoom()), Ok(25));
}

/// Test 2: Navigator range violations are errors
#[test]
fn test_navigator_out_of_range() {
    let quad = ZQuad::from_value(14).expect("zoom 2");
    assert_eq!(
        quad.ancestor(3),
        Err(ZQuadError::ZoomOutOfRange {
            zoom: 2,
            requested: 3
        })
    );
    assert!(quad.descendancy(3).is_err());
    assert!(quad.to_zoom(5).is_err());
    assert_eq!(quad.clamp_to_zoom(5), quad);

    let leaf = ZQuad::from_wgs84(1.0, 1.0).expect("valid coordinates");
    assert!(leaf.descendant(&ZQuad::from_value(1).expect("zoom 1")).is_err());
    assert_eq!(leaf.descendant(&ZQuad::ROOT), Ok(leaf));
}

/// Test 3: Ancestor/descendancy split at every depth
#[test]
fn test_split_and_join_at_every_depth() {
    let leaf = ZQuad::from_wgs84(-12.0464, -77.0428).expect("valid coordinates");
    for n in 0..=MAX_ZOOM {
        let top = leaf.ancestor(n).expect("depth within zoom");
        let bottom = leaf.descendancy(n).expect("depth within zoom");
        assert_eq!(top.zoom() + bottom.zoom(), MAX_ZOOM);
        assert_eq!(top.descendant(&bottom), Ok(leaf));
    }
}

/// Test 4: Root edge cases
#[test]
fn test_root() {
    let root = ZQuad::ROOT;
    assert!(root.is_root());
    assert_eq!(root.parent(), None);
    assert_eq!(root.ancestor(0), Ok(root));
    assert_eq!(root.descendancy(0), Ok(root));
    assert_eq!(root.least_common_ancestor(&root), root);

    let children = root.children().expect("root has children");
    let values: Vec<u64> = children.iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
    for child in children {
        assert_eq!(child.parent(), Some(root));
        assert_eq!(root.child_toward(&child), Ok(child));
    }
    assert!(root.child_toward(&root).is_err());
}

/// Test 5: Least common ancestor across hemispheres and depths
#[test]
fn test_least_common_ancestor() {
    let nyc = ZQuad::from_wgs84(40.7128, -74.0060).expect("valid coordinates");
    let sydney = ZQuad::from_wgs84(-33.8688, 151.2093).expect("valid coordinates");
    assert_eq!(nyc.least_common_ancestor(&sydney), ZQuad::ROOT);

    let brooklyn = ZQuad::from_wgs84(40.6782, -73.9442).expect("valid coordinates");
    let common = nyc.least_common_ancestor(&brooklyn);
    assert!(common.is_ancestor_of(&nyc));
    assert!(common.is_ancestor_of(&brooklyn));
    assert_ne!(
        common.child_toward(&nyc).expect("strict descendant"),
        common.child_toward(&brooklyn).expect("strict descendant")
    );

    let coarse = nyc.to_zoom(4).expect("coarser zoom");
    assert_eq!(coarse.least_common_ancestor(&nyc), coarse);
    assert_eq!(nyc.least_common_ancestor(&coarse), coarse);
}

/// Test 6: Extreme coordinate values
#[test]
fn test_extreme_coordinates() {
    let corners = [(90.0, -180.0), (90.0, 180.0), (-90.0, -180.0), (-90.0, 180.0)];
    let expected = [1, 2, 3, 4];
    for ((lat, lng), value) in corners.into_iter().zip(expected) {
        let quad = ZQuad::from_wgs84(lat, lng).expect("corner is valid");
        assert_eq!(quad.to_zoom(1).map(|q| q.value()), Ok(value), "{}, {}", lat, lng);
    }

    assert!(ZQuad::from_wgs84(90.0001, 0.0).is_err());
    assert!(ZQuad::from_wgs84(0.0, -180.0001).is_err());
    assert!(ZQuad::from_wgs84(f64::INFINITY, 0.0).is_err());
    assert!(ZQuad::from_wgs84(0.0, f64::NAN).is_err());

    // geo points carry longitude on x.
    let point = Point::new(-180.0, 90.0);
    assert_eq!(ZQuad::from_point(&point), ZQuad::from_wgs84(90.0, -180.0));
    assert!(ZQuad::from_point(&Point::new(0.0, 180.0)).is_err());
}

/// Test 7: Malformed names
#[test]
fn test_malformed_names() {
    let _ = env_logger::builder().is_test(true).try_init();
    let valid = ZQuad::from_wgs84(-1.2921, 36.8219).expect("valid coordinates");
    let name = valid.name();

    let cases = [
        String::new(),
        "-".to_string(),
        format!("{}-", name),
        format!("-{}", name),
        name.replace('-', "--"),
        name.to_uppercase(),
        name.replace('-', " "),
        format!("{}-{}", name, name),
        "abcd".to_string(),
        "aeae".to_string(),
        "bcbc".to_string(),
        "nop3".to_string(),
    ];
    for case in cases {
        assert_eq!(ZQuad::from_name(&case), None, "{:?}", case);
        assert!(matches!(
            case.parse::<ZQuad>(),
            Err(ZQuadError::InvalidName(_))
        ));
    }
}

/// Test 8: Bounds tile the parent exactly
#[test]
fn test_children_tile_parent() {
    let parent = ZQuad::from_wgs84(64.1466, -21.9426)
        .and_then(|q| q.to_zoom(6))
        .expect("valid quad");
    let bounds = parent.bounds();
    let children = parent.children().expect("zoom 6 has children");

    let area: f64 = children
        .iter()
        .map(|c| c.bounds().width() * c.bounds().height())
        .sum();
    assert!((area - bounds.width() * bounds.height()).abs() < 1e-9);

    let eps = 1e-9;
    for child in children {
        let b = child.bounds();
        assert!(b.min().x >= bounds.min().x - eps && b.max().x <= bounds.max().x + eps);
        assert!(b.min().y >= bounds.min().y - eps && b.max().y <= bounds.max().y + eps);
        assert!(parent.contains_point(child.center_lat(), child.center_lng()).expect("valid"));
    }
}

/// Test 9: Index with a coarse bucket zoom
#[test]
fn test_index_coarse_buckets() {
    let config = Config::default()
        .with_index_zoom(4)
        .with_distance_metric(DistanceMetric::Rhumb);
    let mut index = QuadIndex::with_config(config);
    for i in 0..100 {
        let lat = -45.0 + i as f64 * 0.9;
        index.insert(lat, 10.0, i).expect("valid coordinates");
    }
    assert_eq!(index.len(), 100);
    assert!(index.stats().cells < 100);

    // The equator belongs to the southern half.
    let north = ZQuad::from_value(2).expect("zoom 1");
    let found = index.within(&north);
    assert!(found.iter().all(|(q, _)| q.center_lat() > 0.0));
    assert_eq!(found.len(), 49);

    let nearest = index.nearest(0.0, 10.0, 3).expect("valid coordinates");
    assert_eq!(nearest.len(), 3);
    assert_eq!(*nearest[0].2, 50);
}

/// Test 10: Empty index queries
#[test]
fn test_empty_index() {
    let index: QuadIndex<String> = QuadIndex::default();
    assert!(index.within(&ZQuad::ROOT).is_empty());
    assert!(index.nearest(0.0, 0.0, 5).expect("valid coordinates").is_empty());
    assert_eq!(index.stats().density(), 0.0);
}
