//! Reference atom picker
//!
//! Atoms are drawn as spheres of `van_der_waals_radius * radius_scale`
//! centered on `position - structure.center`, then rotated and scaled by the
//! object transform. The picker casts the ray into object-local space once
//! and tests every sphere there.

use std::fmt;

use gestura_core::Vec3;
use gestura_structure::{van_der_waals_radius, Atom, Structure};
use gestura_transform::ObjectTransform;

use crate::{Ray, Selection, SelectionResolver};

/// Display radius as a fraction of the van der Waals radius
pub const DEFAULT_RADIUS_SCALE: f32 = 0.3;

/// Ray picker over a structure's atom spheres
#[derive(Debug, Clone)]
pub struct AtomPicker<'a> {
    structure: &'a Structure,
    radius_scale: f32,
}

impl<'a> AtomPicker<'a> {
    pub fn new(structure: &'a Structure) -> Self {
        Self {
            structure,
            radius_scale: DEFAULT_RADIUS_SCALE,
        }
    }

    pub fn with_radius_scale(mut self, radius_scale: f32) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    /// Displayed sphere radius of an atom, in object-local units
    pub fn display_radius(&self, atom: &Atom) -> f32 {
        van_der_waals_radius(&atom.element) * self.radius_scale
    }

    /// Atom behind a selection
    pub fn atom(&self, selection: &Selection) -> Option<&'a Atom> {
        self.structure.atoms.get(selection.index)
    }

    /// HUD label for a selection
    pub fn label(&self, selection: &Selection) -> Option<AtomLabel> {
        self.atom(selection).map(AtomLabel::from)
    }
}

impl SelectionResolver for AtomPicker<'_> {
    fn resolve(&self, ray: &Ray, transform: &ObjectTransform) -> Option<Selection> {
        if !(transform.scale.is_finite() && transform.scale > 0.0) {
            return None;
        }
        let local_ray = Ray::new(
            transform.to_local(ray.origin),
            transform.orientation.conjugate().rotate(ray.direction),
        );

        let mut nearest: Option<(usize, Vec3, f32)> = None;
        for (index, atom) in self.structure.atoms.iter().enumerate() {
            let center = atom.position - self.structure.center;
            let Some(t) = local_ray.intersect_sphere(center, self.display_radius(atom)) else {
                continue;
            };
            if nearest.map_or(true, |(_, _, best)| t < best) {
                nearest = Some((index, center, t));
            }
        }

        nearest.map(|(index, local_position, t)| Selection {
            index,
            local_position,
            distance: t * transform.scale,
        })
    }
}

/// Identity of a picked atom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomLabel {
    pub element: String,
    pub id: u32,
    pub residue: String,
    pub res_seq: i32,
}

impl From<&Atom> for AtomLabel {
    fn from(atom: &Atom) -> Self {
        Self {
            element: atom.element.clone(),
            id: atom.id,
            residue: atom.residue.clone(),
            res_seq: atom.res_seq,
        }
    }
}

impl fmt::Display for AtomLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} {})",
            self.element, self.id, self.residue, self.res_seq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Camera;
    use gestura_core::{Quat, Vec2};
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    fn atom(id: u32, element: &str, x: f32, y: f32, z: f32) -> Atom {
        Atom {
            id,
            name: element.into(),
            element: element.into(),
            residue: "LIG".into(),
            res_seq: 7,
            position: Vec3::new(x, y, z),
        }
    }

    /// Two atoms along x, symmetric about (10, 0, 0)
    fn pair() -> Structure {
        Structure::from_atoms(vec![atom(1, "C", 6.0, 0.0, 0.0), atom(2, "O", 14.0, 0.0, 0.0)])
    }

    fn straight_down_z(x: f32, y: f32) -> Ray {
        Ray::new(Vec3::new(x, y, 40.0), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_hits_centered_atom() {
        let s = pair();
        let picker = AtomPicker::new(&s);
        let hit = picker
            .resolve(&straight_down_z(4.0, 0.0), &ObjectTransform::default())
            .unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.local_position, Vec3::new(4.0, 0.0, 0.0));
        let radius = 1.52 * DEFAULT_RADIUS_SCALE;
        assert!((hit.distance - (40.0 - radius)).abs() < 1e-4);
        assert_eq!(picker.label(&hit).unwrap().to_string(), "O - 2 (LIG 7)");
    }

    #[test]
    fn test_miss_between_atoms() {
        let s = pair();
        let picker = AtomPicker::new(&s);
        assert!(picker
            .resolve(&straight_down_z(0.0, 0.0), &ObjectTransform::default())
            .is_none());
    }

    #[test]
    fn test_scale_moves_spheres() {
        let s = pair();
        let picker = AtomPicker::new(&s);
        let doubled = ObjectTransform::new(Quat::IDENTITY, 2.0);
        assert!(picker.resolve(&straight_down_z(4.0, 0.0), &doubled).is_none());
        let hit = picker.resolve(&straight_down_z(8.0, 0.0), &doubled).unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_rotation_moves_spheres() {
        let s = pair();
        let picker = AtomPicker::new(&s);
        // Quarter turn about z carries local +x onto world +y
        let turned = ObjectTransform::new(
            Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2),
            1.0,
        );
        assert!(picker.resolve(&straight_down_z(4.0, 0.0), &turned).is_none());
        let hit = picker.resolve(&straight_down_z(0.0, 4.0), &turned).unwrap();
        assert_eq!(hit.index, 1);
        // Reported position stays in the untransformed frame
        assert_eq!(hit.local_position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_nearest_atom_wins() {
        let s = Structure::from_atoms(vec![
            atom(1, "C", 0.0, 0.0, -5.0),
            atom(2, "C", 0.0, 0.0, 5.0),
        ]);
        let picker = AtomPicker::new(&s);
        let hit = picker
            .resolve(&straight_down_z(0.0, 0.0), &ObjectTransform::default())
            .unwrap();
        assert_eq!(hit.index, 1);
    }

    #[test]
    fn test_camera_center_ray_picks_center_atom() {
        let s = Structure::from_atoms(vec![atom(1, "N", 3.0, 3.0, 3.0)]);
        let picker = AtomPicker::new(&s);
        let ray = Camera::default().ray_from_ndc(Vec2::ZERO);
        let hit = picker.resolve(&ray, &ObjectTransform::default()).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.local_position, Vec3::ZERO);
    }

    #[test]
    fn test_degenerate_scale_selects_nothing() {
        let s = pair();
        let picker = AtomPicker::new(&s);
        let collapsed = ObjectTransform::new(Quat::IDENTITY, 0.0);
        assert!(picker.resolve(&straight_down_z(4.0, 0.0), &collapsed).is_none());
    }

    #[test]
    fn test_empty_structure_selects_nothing() {
        let s = Structure::default();
        let picker = AtomPicker::new(&s);
        assert!(picker
            .resolve(&straight_down_z(0.0, 0.0), &ObjectTransform::default())
            .is_none());
    }

    proptest! {
        #[test]
        fn prop_hit_lies_on_sphere_surface(
            angle in -3.0f32..3.0,
            scale in 0.1f32..5.0,
            offset in -0.3f32..0.3,
        ) {
            let s = Structure::from_atoms(vec![atom(1, "S", 0.0, 0.0, 0.0)]);
            let picker = AtomPicker::new(&s);
            let transform = ObjectTransform::new(
                Quat::from_axis_angle(Vec3::UP, angle),
                scale,
            );
            let ray = straight_down_z(offset * scale, 0.0);
            let hit = picker.resolve(&ray, &transform).unwrap();
            let world_radius = 1.8 * DEFAULT_RADIUS_SCALE * scale;
            let point = ray.at(hit.distance);
            prop_assert!((point.length() - world_radius).abs() < 1e-3 * scale.max(1.0));
        }
    }
}
