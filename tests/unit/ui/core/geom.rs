use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    assert!(!Rect::new(0, 0, 0, 10).contains(Pos::new(0, 0)));
    assert!(!Rect::new(0, 0, 10, 0).contains(Pos::new(0, 0)));
}

#[test]
fn rect_row_selects_single_line() {
    let r = Rect::new(4, 10, 8, 3);
    assert_eq!(r.row(0), Rect::new(4, 10, 8, 1));
    assert_eq!(r.row(2), Rect::new(4, 12, 8, 1));
    assert!(r.row(3).is_empty());
}

#[test]
fn rect_edges_saturate() {
    let r = Rect::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
    assert_eq!(r.right(), u16::MAX);
    assert_eq!(r.bottom(), u16::MAX);
}

#[test]
fn shrink_pads_both_sides() {
    let r = Rect::new(4, 2, 30, 9);
    assert_eq!(r.shrink(2, 1), Rect::new(6, 3, 26, 7));
    assert_eq!(r.shrink(0, 0), r);
}

#[test]
fn shrink_saturates_to_empty() {
    let r = Rect::new(0, 0, 3, 1);
    assert!(r.shrink(2, 1).is_empty());
}

#[test]
fn intersect_returns_overlap() {
    let a = Rect::new(0, 0, 5, 5);
    let b = Rect::new(3, 3, 5, 5);
    assert_eq!(a.intersect(b), Rect::new(3, 3, 2, 2));
}

#[test]
fn intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert!(a.intersect(b).is_empty());
}

#[test]
fn centered_clamps_to_bounds() {
    let r = Rect::new(0, 0, 10, 5);
    assert_eq!(r.centered(4, 1), Rect::new(3, 2, 4, 1));
    assert_eq!(r.centered(100, 100), r);
}

#[test]
fn centered_keeps_the_origin_offset() {
    let row = Rect::new(10, 7, 20, 1);
    assert_eq!(row.centered(5, 1), Rect::new(17, 7, 5, 1));
}
