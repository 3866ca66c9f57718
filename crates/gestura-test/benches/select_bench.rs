//! Benchmarks for GESTURA pointer resolution

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gestura_core::{GestureState, Vec2, Vec3};
use gestura_select::{resolve_pointer, AtomPicker, Camera};
use gestura_structure::{Atom, Structure};
use gestura_transform::ObjectTransform;

/// Cubic lattice of carbon atoms, 1.5 Å apart
fn lattice(side: usize) -> Structure {
    let mut atoms = Vec::with_capacity(side * side * side);
    for i in 0..side {
        for j in 0..side {
            for k in 0..side {
                atoms.push(Atom {
                    id: atoms.len() as u32 + 1,
                    name: "C".into(),
                    element: "C".into(),
                    residue: "LAT".into(),
                    res_seq: 1,
                    position: Vec3::new(i as f32 * 1.5, j as f32 * 1.5, k as f32 * 1.5),
                });
            }
        }
    }
    Structure::from_atoms(atoms)
}

fn bench_pick_lattice(c: &mut Criterion) {
    let structure = lattice(16);
    let picker = AtomPicker::new(&structure);
    let camera = Camera::default();
    let transform = ObjectTransform::default();
    let state = GestureState::point(Vec2::new(0.05, -0.02));

    c.bench_function("pick_lattice_4096", |b| {
        b.iter(|| resolve_pointer(black_box(&state), &camera, &transform, &picker))
    });
}

criterion_group!(benches, bench_pick_lattice);
criterion_main!(benches);
