/// Region, Rect and logging tests
use crate::logging::LogLevel;
use crate::region::{Rect, Region, Vector2D};

const EPSILON: f64 = 1e-9;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < EPSILON, "{} != {}", a, b);
}

fn assert_rect_close(a: &Rect<f64>, b: &Rect<f64>) {
    assert_close(a.r_pos.0, b.r_pos.0);
    assert_close(a.r_pos.1, b.r_pos.1);
    assert_close(a.r_size.0, b.r_size.0);
    assert_close(a.r_size.1, b.r_size.1);
}

/// Check that no two rects in the region overlap
fn assert_disjoint(region: &Region) {
    let rects = region.rects();
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            assert!(
                !rects[i].overlaps(&rects[j]),
                "{:?} overlaps {:?}",
                rects[i],
                rects[j]
            );
        }
    }
}

#[test]
fn expand_then_shrink_is_identity() {
    let rect = Rect::new(12.5, -4.0, 300.0, 80.25);

    for amount in [0.0, 1.0, 2.5, 17.0, 150.0].iter() {
        let round_trip = rect.expand(*amount).expand(-amount);
        assert_rect_close(&round_trip, &rect);
    }
}

#[test]
fn shrink_past_zero_is_empty() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0).expand(-6.0);
    assert!(rect.r_size.0 < 0.0);
    assert!(rect.is_empty());
    assert!(rect.is_degenerate());
    assert_close(rect.area(), 0.0);
}

#[test]
fn translate_scale_round() {
    let rect = Rect::new(10.2, 20.7, 99.6, 50.2)
        .translate(&Vector2D::new(-10.0, -20.0))
        .scale(2.0)
        .round();

    // x: 0.4 -> 0, right edge 199.6 -> 200
    assert_rect_close(&rect, &Rect::new(0.0, 1.0, 200.0, 101.0));
}

#[test]
fn square_wide_and_tall() {
    let wide = Rect::new(0.0, 0.0, 200.0, 100.0).square();
    assert_rect_close(&wide, &Rect::new(50.0, 0.0, 100.0, 100.0));

    let tall = Rect::new(10.0, 10.0, 40.0, 100.0).square();
    assert_rect_close(&tall, &Rect::new(10.0, 40.0, 40.0, 40.0));
}

#[test]
fn scale_from_center_keeps_center() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0).scale_from_center(0.5);
    assert_rect_close(&rect, &Rect::new(25.0, 25.0, 50.0, 50.0));
}

#[test]
fn region_subtract_hole() {
    let mut region = Region::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    region.subtract(&Rect::new(25.0, 25.0, 50.0, 50.0));

    assert_eq!(region.rects().len(), 4);
    assert_disjoint(&region);
    assert_close(region.area(), 100.0 * 100.0 - 50.0 * 50.0);
    assert!(region.contains(10.0, 10.0));
    assert!(!region.contains(50.0, 50.0));
    assert!(region.contains(80.0, 50.0));
}

#[test]
fn region_subtract_everything() {
    let mut region = Region::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    region.subtract(&Rect::new(-10.0, -10.0, 500.0, 500.0));
    assert!(region.is_empty());
    assert_close(region.area(), 0.0);
}

#[test]
fn region_subtract_disjoint_and_empty() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let mut region = Region::from_rect(rect);

    // not touching
    region.subtract(&Rect::new(20.0, 20.0, 5.0, 5.0));
    // sharing only an edge
    region.subtract(&Rect::new(10.0, 0.0, 5.0, 10.0));
    // negative size
    region.subtract(&Rect::new(0.0, 0.0, -5.0, 10.0));

    assert_eq!(region.rects(), &[rect]);
}

#[test]
fn region_subtract_region() {
    let mut region = Region::from_rect(Rect::new(0.0, 0.0, 300.0, 100.0));
    let mut other = Region::new();
    other.add(Rect::new(0.0, 0.0, 100.0, 100.0));
    other.add(Rect::new(200.0, 0.0, 100.0, 100.0));

    region.subtract_region(&other);
    assert_disjoint(&region);
    assert_close(region.area(), 100.0 * 100.0);
    assert_eq!(
        region.bounding_box(),
        Some(Rect::new(100.0, 0.0, 100.0, 100.0))
    );
}

#[test]
fn region_add_overlapping_stays_disjoint() {
    let mut region = Region::new();
    region.add(Rect::new(0.0, 0.0, 100.0, 100.0));
    region.add(Rect::new(50.0, 50.0, 100.0, 100.0));
    region.add(Rect::new(0.0, 0.0, 10.0, 10.0));

    assert_disjoint(&region);
    assert_close(region.area(), 2.0 * 100.0 * 100.0 - 50.0 * 50.0);
    assert_eq!(
        region.bounding_box(),
        Some(Rect::new(0.0, 0.0, 150.0, 150.0))
    );
}

#[test]
fn empty_rect_makes_empty_region() {
    let region = Region::from_rect(Rect::new(5.0, 5.0, 0.0, 10.0));
    assert!(region.is_empty());
    assert_eq!(region.bounding_box(), None);
}

#[test]
fn log_level_names() {
    assert_eq!(LogLevel::from_name("debug"), Some(LogLevel::debug));
    assert_eq!(LogLevel::from_name(" 4 "), Some(LogLevel::verbose));
    assert_eq!(LogLevel::from_name("loud"), None);
    assert!(LogLevel::error.get_level() < LogLevel::info.get_level());
}
