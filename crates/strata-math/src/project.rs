//! Projection of vectors and lines onto other spatial values.
//!
//! The result type depends on the destination:
//!
//! | self     | destination   | result                                         |
//! |----------|---------------|------------------------------------------------|
//! | `Vector` | `Vector`      | component along the destination's line         |
//! | `Vector` | `Orientation` | in-plane component                             |
//! | `Vector` | `Line`        | `Line` at the line's origin, projected direction |
//! | `Vector` | `Plane`       | `Line` at the plane's origin, in-plane direction |
//! | `Line`   | `Vector`, `Orientation`, `Plane` | `Line` with origin and direction projected |
//! | `Line`   | `Line`        | `Line` at its own origin, projected direction  |

use crate::{Line, Orientation, Plane, Vector};

/// Project `self` onto a destination.
pub trait Project<Destination: ?Sized> {
    /// Result of the projection.
    type Output;

    /// Project `self` onto `destination`.
    fn project(&self, destination: &Destination) -> Self::Output;
}

impl Project<Vector> for Vector {
    type Output = Vector;

    fn project(&self, destination: &Vector) -> Vector {
        let axis = destination.unit();
        axis * self.dot(&axis)
    }
}

impl Project<Orientation> for Vector {
    type Output = Vector;

    fn project(&self, destination: &Orientation) -> Vector {
        *self - self.project(&destination.normal())
    }
}

impl Project<Line> for Vector {
    type Output = Line;

    fn project(&self, destination: &Line) -> Line {
        Line {
            origin: destination.origin,
            direction: self.project(&destination.direction),
        }
    }
}

impl Project<Plane> for Vector {
    type Output = Line;

    fn project(&self, destination: &Plane) -> Line {
        Line {
            origin: destination.origin,
            direction: self.project(&destination.orientation),
        }
    }
}

impl Project<Vector> for Line {
    type Output = Line;

    fn project(&self, destination: &Vector) -> Line {
        Line {
            origin: self.origin.project(destination),
            direction: self.direction.project(destination),
        }
    }
}

impl Project<Orientation> for Line {
    type Output = Line;

    fn project(&self, destination: &Orientation) -> Line {
        Line {
            origin: self.origin.project(destination),
            direction: self.direction.project(destination),
        }
    }
}

impl Project<Line> for Line {
    type Output = Line;

    fn project(&self, destination: &Line) -> Line {
        Line {
            origin: self.origin,
            direction: self.direction.project(&destination.direction),
        }
    }
}

impl Project<Plane> for Line {
    type Output = Line;

    fn project(&self, destination: &Plane) -> Line {
        Line {
            origin: destination.project_point(&self.origin),
            direction: self.direction.project(&destination.orientation),
        }
    }
}
