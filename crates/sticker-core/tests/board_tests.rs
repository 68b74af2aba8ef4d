// Host-side tests for sticker creation and the blankness predicate.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sticker_core::*;

#[test]
fn spawn_places_whole_footprint_inside_container() {
    let container = Vec2::new(1280.0, 720.0);
    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let color = StrokeColor::random(&mut rng);
        let id = board.spawn(container, String::new(), color, &mut rng);
        let pos = board.get(id).unwrap().pos;
        // Half-open placement: the upper bound itself is never produced
        assert!(pos.x >= 0.0 && pos.x < container.x - ITEM_SIZE, "{pos:?}");
        assert!(pos.y >= 0.0 && pos.y < container.y - ITEM_SIZE, "{pos:?}");
    }
}

#[test]
fn spawn_in_tiny_container_pins_to_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut board = Board::new();
    let color = StrokeColor::random(&mut rng);
    // Container smaller than one item: the placement span collapses
    let id = board.spawn(Vec2::new(120.0, 90.0), String::new(), color, &mut rng);
    assert_eq!(board.get(id).unwrap().pos, Vec2::ZERO);
}

#[test]
fn spawn_appends_in_creation_order_with_unique_ids() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut board = Board::new();
    let container = Vec2::new(800.0, 600.0);
    let color = StrokeColor::random(&mut rng);

    let a = board.spawn(container, "a".into(), color, &mut rng);
    let b = board.spawn(container, "b".into(), color, &mut rng);
    let c = board.spawn(container, "c".into(), color, &mut rng);

    assert_eq!(board.len(), 3);
    assert_ne!(a, b);
    assert_ne!(b, c);
    let order: Vec<&str> = board.items().iter().map(|it| it.mask_url.as_str()).collect();
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn new_items_start_idle_with_no_effect() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut board = Board::new();
    let color = StrokeColor::random(&mut rng);
    let id = board.spawn(Vec2::new(800.0, 600.0), String::new(), color, &mut rng);
    let item = board.get(id).unwrap();
    assert!(!item.dragging);
    assert_eq!(item.active_effect, None);
}

#[test]
fn blankness_is_all_zero_bytes() {
    // Fresh/cleared surface
    assert!(is_blank(&[0u8; 4 * 64]));
    // Zero-sized surface counts as blank
    assert!(is_blank(&[]));

    // One touched pixel anywhere makes it non-blank
    let mut rgba = vec![0u8; 4 * 64];
    rgba[131] = 1;
    assert!(!is_blank(&rgba));
}

#[test]
fn stroke_color_is_full_saturation_half_lightness() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..50 {
        let c = StrokeColor::random(&mut rng);
        assert!((0.0..360.0).contains(&c.hue));
        let css = c.css();
        assert!(css.starts_with("hsl("), "{css}");
        assert!(css.ends_with(", 100%, 50%)"), "{css}");
    }
}

#[test]
fn backing_size_scales_css_size_by_pixel_ratio() {
    assert_eq!(backing_size(300.0, 300.0, 2.0), (600, 600));
    assert_eq!(backing_size(300.0, 150.0, 1.0), (300, 150));
    // Fractional CSS sizes truncate after scaling
    assert_eq!(backing_size(100.5, 50.25, 2.0), (201, 100));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    // A hidden or zero-sized canvas still gets a 1x1 store, so later
    // pixel reads stay well-defined
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.4, 300.0, 1.0), (1, 300));
}

#[test]
fn surface_error_names_the_problem() {
    assert_eq!(SurfaceError::Blank.to_string(), "drawing surface is blank");
}
