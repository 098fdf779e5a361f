#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn client_point_widens_coordinates() {
    let p = client_point(120, -8);
    assert_eq!(p.x, 120.0);
    assert_eq!(p.y, -8.0);
}

#[test]
fn client_point_origin() {
    assert_eq!(client_point(0, 0), Point::default());
}
