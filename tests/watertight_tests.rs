mod support;

use approx::assert_relative_eq;
use cleaver::float_types::Real;
use cleaver::{CutOutcome, Plane, cut, shapes};
use nalgebra::Vector3;
use support::{assert_all_wound, enclosed_volume, surface_area};

#[test]
fn cylinder_cut_conserves_enclosed_volume() {
    let cylinder = shapes::cylinder(1.0, 2.0, 24);
    let plane = Plane::from_normal(Vector3::y(), 0.75);

    let CutOutcome::Split { front, back } = cut(&plane, &cylinder).unwrap() else {
        panic!("plane through the barrel must split it");
    };
    assert_all_wound(&front);
    assert_all_wound(&back);

    let whole = enclosed_volume(&cylinder);
    let front_vol = enclosed_volume(&front.export());
    let back_vol = enclosed_volume(&back.export());
    assert!(front_vol > 0.0 && back_vol > 0.0);
    assert_relative_eq!(front_vol + back_vol, whole, epsilon = 1e-9);

    // The taller piece (above y = 0.75 of a height-2 barrel) is the front.
    assert!(front_vol > back_vol);
}

#[test]
fn cylinder_caps_triangulate_completely() {
    let segments = 24;
    let cylinder = shapes::cylinder(1.0, 2.0, segments);
    let plane = Plane::from_normal(Vector3::y(), 0.75);

    let CutOutcome::Split { front, back } = cut(&plane, &cylinder).unwrap() else {
        panic!("plane through the barrel must split it");
    };

    // The cross-section outline has 2 points per side quad (one on a rim
    // edge, one on the quad diagonal); a complete ear-clip of an n-gon is
    // n - 2 triangles, emitted once per side under the fresh cap group.
    let outline_points = 2 * segments as usize;
    assert_eq!(front.group(2).len(), outline_points - 2);
    assert_eq!(back.group(2).len(), outline_points - 2);

    // Cap normals face out of their piece.
    for tri in front.group(2) {
        assert_eq!(tri.vertices[0].normal, -Vector3::y());
    }
    for tri in back.group(2) {
        assert_eq!(tri.vertices[0].normal, Vector3::y());
    }

    // Each cap's area matches the cross-section polygon it fills.
    let front_cap: Real = front.group(2).iter().map(|t| t.area()).sum();
    let back_cap: Real = back.group(2).iter().map(|t| t.area()).sum();
    assert_relative_eq!(front_cap, back_cap, epsilon = 1e-9);
}

#[test]
fn cut_area_accounting_on_the_cylinder() {
    let cylinder = shapes::cylinder(1.0, 2.0, 16);
    let plane = Plane::from_normal(Vector3::y(), 1.0);

    let CutOutcome::Split { front, back } = cut(&plane, &cylinder).unwrap() else {
        panic!("plane through the barrel must split it");
    };
    let cap_area: Real = front.group(2).iter().map(|t| t.area()).sum();
    assert_relative_eq!(
        surface_area(&front.export()) + surface_area(&back.export()),
        surface_area(&cylinder) + 2.0 * cap_area,
        epsilon = 1e-9
    );
}

#[test]
fn every_input_triangle_is_accounted_for() {
    // Conservation contract: each input triangle is an unchanged copy, a set
    // of split pieces, or a dropped degenerate — nothing is silently lost.
    // With the plane clear of all vertices no split piece degenerates, so
    // areas must balance exactly.
    let cylinder = shapes::cylinder(1.0, 2.0, 16);
    let plane = Plane::from_normal(Vector3::y(), 0.4);

    let CutOutcome::Split { front, back } = cut(&plane, &cylinder).unwrap() else {
        panic!("plane through the barrel must split it");
    };
    let pieces_area: Real = front
        .triangles()
        .chain(back.triangles())
        .filter(|t| t.group < 2)
        .map(|t| t.area())
        .sum();
    assert_relative_eq!(pieces_area, surface_area(&cylinder), epsilon = 1e-9);
}
