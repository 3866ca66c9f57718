//! Atoms and structures

use gestura_core::Vec3;
use serde::{Deserialize, Serialize};

/// One atom record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Serial number from the source file
    pub id: u32,
    /// Atom name (e.g. `CA`)
    pub name: String,
    /// Uppercase element symbol (e.g. `C`, `FE`)
    pub element: String,
    /// Residue name (e.g. `GLY`)
    pub residue: String,
    /// Residue sequence number
    pub res_seq: i32,
    /// Position in source coordinates (Å)
    pub position: Vec3,
}

/// A loaded structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub atoms: Vec<Atom>,
    /// Arithmetic mean of atom positions; origin when empty
    pub center: Vec3,
}

impl Structure {
    /// Build a structure and compute its center
    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        let center = centroid(&atoms);
        Self { atoms, center }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Position of an atom relative to the structure center
    pub fn local_position(&self, index: usize) -> Option<Vec3> {
        self.atoms.get(index).map(|a| a.position - self.center)
    }

    /// Largest atom distance from the center
    pub fn bounding_radius(&self) -> f32 {
        self.atoms
            .iter()
            .map(|a| a.position.distance(&self.center))
            .fold(0.0, f32::max)
    }
}

fn centroid(atoms: &[Atom]) -> Vec3 {
    if atoms.is_empty() {
        return Vec3::ZERO;
    }
    // Accumulate in f64: large structures lose precision otherwise
    let (sx, sy, sz) = atoms.iter().fold((0.0f64, 0.0f64, 0.0f64), |(x, y, z), a| {
        (
            x + a.position.x as f64,
            y + a.position.y as f64,
            z + a.position.z as f64,
        )
    });
    let n = atoms.len() as f64;
    Vec3::new((sx / n) as f32, (sy / n) as f32, (sz / n) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(id: u32, x: f32, y: f32, z: f32) -> Atom {
        Atom {
            id,
            name: "CA".into(),
            element: "C".into(),
            residue: "GLY".into(),
            res_seq: 1,
            position: Vec3::new(x, y, z),
        }
    }

    #[test]
    fn test_center_is_mean() {
        let s = Structure::from_atoms(vec![atom(1, 0.0, 0.0, 0.0), atom(2, 2.0, 4.0, -6.0)]);
        assert_eq!(s.center, Vec3::new(1.0, 2.0, -3.0));
        assert_eq!(s.local_position(1), Some(Vec3::new(1.0, 2.0, -3.0)));
        assert_eq!(s.local_position(2), None);
    }

    #[test]
    fn test_empty_structure_centers_on_origin() {
        let s = Structure::from_atoms(Vec::new());
        assert!(s.is_empty());
        assert_eq!(s.center, Vec3::ZERO);
        assert_eq!(s.bounding_radius(), 0.0);
    }

    #[test]
    fn test_bounding_radius() {
        let s = Structure::from_atoms(vec![atom(1, -3.0, 0.0, 0.0), atom(2, 3.0, 0.0, 0.0)]);
        assert!((s.bounding_radius() - 3.0).abs() < 1e-6);
    }
}
