use nalgebra::{Isometry3, Point3, Translation3, Unit, UnitQuaternion, Vector3};

/// Axes shorter than this are treated as having no direction
const MIN_AXIS_LENGTH: f64 = 1e-12;

/// Rigid-body transform: a translation applied after a chain of rotations
#[derive(Debug, Clone, PartialEq)]
pub struct RigidTransform {
    isometry: Isometry3<f64>,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl RigidTransform {
    pub fn identity() -> Self {
        Self {
            isometry: Isometry3::identity(),
        }
    }

    pub fn from_translation(offset: Vector3<f64>) -> Self {
        Self {
            isometry: Isometry3::from_parts(Translation3::from(offset), UnitQuaternion::identity()),
        }
    }

    /// Post-multiply a rotation of `angle` radians about `axis`.
    ///
    /// The axis does not need to be normalized. Successive calls compose
    /// like `M = M * R`, so the last rotation added is applied to points first.
    /// A zero-length axis leaves the transform unchanged.
    pub fn rotate(mut self, axis: Vector3<f64>, angle: f64) -> Self {
        if let Some(axis) = Unit::try_new(axis, MIN_AXIS_LENGTH) {
            self.isometry.rotation *= UnitQuaternion::from_axis_angle(&axis, angle);
        }
        self
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.isometry.translation.vector
    }

    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        self.isometry.transform_point(point)
    }

    /// Undo only the rotational part, keeping the translation in world axes
    pub fn unrotate(&self, point: &Point3<f64>) -> Point3<f64> {
        let offset = point.coords - self.translation();
        Point3::from(self.isometry.rotation.inverse_transform_vector(&offset) + self.translation())
    }
}
