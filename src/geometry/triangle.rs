use nalgebra::Point3;
use serde::Deserialize;

/// A triangle in world space, vertices ordered (A, B, C)
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    pub fn a(&self) -> &Point3<f64> {
        &self.vertices[0]
    }

    pub fn b(&self) -> &Point3<f64> {
        &self.vertices[1]
    }

    pub fn c(&self) -> &Point3<f64> {
        &self.vertices[2]
    }

    /// Iterate over the nine coordinates in A.x, A.y, A.z, B.x, ... order
    pub fn coords(&self) -> impl Iterator<Item = f64> + '_ {
        self.vertices.iter().flat_map(|v| [v.x, v.y, v.z])
    }

    /// Area via the cross product, zero for collinear vertices
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a)).norm() * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.coords().all(f64::is_finite)
    }
}

/// How the third vertex picks its distance from the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThirdVertex {
    /// C sits at its own sampled magnitude
    #[default]
    Independent,
    /// C mirrors B across the x axis, reusing B's magnitude
    Mirrored,
}

/// Build the three local-frame points in the z = 0 plane.
///
/// A lies on +x, B at 150 degrees and C at 210 degrees, so B and C are
/// mirror images across the x axis when their magnitudes match. Each vertex
/// uses its own magnitude except C under [`ThirdVertex::Mirrored`], which
/// takes `lengths[1]`.
pub fn local_frame(lengths: [f64; 3], third: ThirdVertex) -> [Point3<f64>; 3] {
    let half_sqrt3 = 3.0_f64.sqrt() / 2.0;
    let [length_a, length_b, length_c] = lengths;
    let length_c = match third {
        ThirdVertex::Independent => length_c,
        ThirdVertex::Mirrored => length_b,
    };

    [
        Point3::new(length_a, 0.0, 0.0),
        Point3::new(-half_sqrt3 * length_b, length_b / 2.0, 0.0),
        Point3::new(-half_sqrt3 * length_c, -length_c / 2.0, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_frame_is_planar() {
        for third in [ThirdVertex::Independent, ThirdVertex::Mirrored] {
            let points = local_frame([3.0, 7.5, 12.0], third);
            assert!(points.iter().all(|p| p.z == 0.0));
        }
    }

    #[test]
    fn test_local_frame_distances() {
        let [a, b, c] = local_frame([3.0, 7.5, 12.0], ThirdVertex::Independent);
        assert!((a.coords.norm() - 3.0).abs() < 1e-12);
        assert!((b.coords.norm() - 7.5).abs() < 1e-12);
        assert!((c.coords.norm() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_local_frame_mirrored_reuses_b() {
        let [_, b, c] = local_frame([3.0, 7.5, 12.0], ThirdVertex::Mirrored);
        assert_eq!(b.x, c.x);
        assert_eq!(b.y, -c.y);
    }

    #[test]
    fn test_vertex_directions() {
        let [a, b, c] = local_frame([2.0, 2.0, 2.0], ThirdVertex::Independent);
        assert_eq!(a.y.atan2(a.x), 0.0);
        assert!((b.y.atan2(b.x).to_degrees() - 150.0).abs() < 1e-9);
        assert!((c.y.atan2(c.x).to_degrees() + 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_isosceles_with_equal_lengths() {
        let [a, b, c] = local_frame([2.0, 2.0, 2.0], ThirdVertex::Independent);
        let tri = Triangle::new(a, b, c);
        let ab = (tri.b() - tri.a()).norm();
        let ca = (tri.a() - tri.c()).norm();
        assert!((ab - ca).abs() < 1e-12);
        assert!(((tri.c() - tri.b()).norm() - 2.0).abs() < 1e-12);
        assert!(tri.area() > 0.0);
    }

    #[test]
    fn test_zero_lengths_are_degenerate() {
        let [a, b, c] = local_frame([0.0, 0.0, 0.0], ThirdVertex::Independent);
        let tri = Triangle::new(a, b, c);
        assert_eq!(tri.area(), 0.0);
        assert!(tri.is_finite());
    }

    #[test]
    fn test_coords_order() {
        let tri = Triangle::new(
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
            Point3::new(7.0, 8.0, 9.0),
        );
        let coords: Vec<f64> = tri.coords().collect();
        assert_eq!(coords, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }
}
