use crate::error::{check_length, check_velocity, DomainError};
use crate::math::{linspace, rotate, Vec2, PI};

/// Uniform motion along a circle of a given radius, centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularMotion {
    radius: f32,
    velocity: f32,
}

impl CircularMotion {
    pub fn new(radius: f32, velocity: f32) -> Result<Self, DomainError> {
        Ok(CircularMotion {
            radius: check_length(radius)?,
            velocity: check_velocity(velocity)?,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn angular_rate(&self) -> f32 {
        self.velocity / self.radius
    }

    pub fn position_at(&self, t: f32) -> Vec2 {
        Vec2::from_angle(self.angular_rate() * t) * self.radius
    }

    pub fn centripetal_acceleration(&self) -> f32 {
        self.velocity.powi(2) / self.radius
    }

    pub fn period(&self) -> f32 {
        2.0 * PI * self.radius / self.velocity
    }

    pub fn frequency(&self) -> f32 {
        1.0 / self.period()
    }
}

/// Motion along an axis-aligned ellipse centered at the origin, traversed
/// at the constant angular rate v/a referenced to the semi-major axis.
///
/// The acceleration reported here is the mean value w^2 * a, not the true
/// instantaneous curvature of the ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticMotion {
    semi_major: f32,
    semi_minor: f32,
    velocity: f32,
}

impl EllipticMotion {
    pub fn new(semi_major: f32, semi_minor: f32, velocity: f32) -> Result<Self, DomainError> {
        Ok(EllipticMotion {
            semi_major: check_length(semi_major)?,
            semi_minor: check_length(semi_minor)?,
            velocity: check_velocity(velocity)?,
        })
    }

    pub fn semi_major(&self) -> f32 {
        self.semi_major
    }

    pub fn semi_minor(&self) -> f32 {
        self.semi_minor
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn angular_rate(&self) -> f32 {
        self.velocity / self.semi_major
    }

    pub fn position_at(&self, t: f32) -> Vec2 {
        let angle = self.angular_rate() * t;
        Vec2::new(self.semi_major * angle.cos(), self.semi_minor * angle.sin())
    }

    pub fn centripetal_acceleration(&self) -> f32 {
        self.angular_rate().powi(2) * self.semi_major
    }

    pub fn period(&self) -> f32 {
        2.0 * PI * self.semi_major / self.velocity
    }

    pub fn frequency(&self) -> f32 {
        1.0 / self.period()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionModel {
    Circular(CircularMotion),
    Elliptic(EllipticMotion),
}

impl MotionModel {
    pub fn circular(radius: f32, velocity: f32) -> Result<Self, DomainError> {
        Ok(MotionModel::Circular(CircularMotion::new(radius, velocity)?))
    }

    pub fn elliptic(semi_major: f32, semi_minor: f32, velocity: f32) -> Result<Self, DomainError> {
        Ok(MotionModel::Elliptic(EllipticMotion::new(
            semi_major, semi_minor, velocity,
        )?))
    }

    pub fn angular_rate(&self) -> f32 {
        match self {
            MotionModel::Circular(c) => c.angular_rate(),
            MotionModel::Elliptic(e) => e.angular_rate(),
        }
    }

    pub fn position_at(&self, t: f32) -> Vec2 {
        match self {
            MotionModel::Circular(c) => c.position_at(t),
            MotionModel::Elliptic(e) => e.position_at(t),
        }
    }

    pub fn centripetal_acceleration(&self) -> f32 {
        match self {
            MotionModel::Circular(c) => c.centripetal_acceleration(),
            MotionModel::Elliptic(e) => e.centripetal_acceleration(),
        }
    }

    pub fn period(&self) -> f32 {
        match self {
            MotionModel::Circular(c) => c.period(),
            MotionModel::Elliptic(e) => e.period(),
        }
    }

    pub fn frequency(&self) -> f32 {
        match self {
            MotionModel::Circular(c) => c.frequency(),
            MotionModel::Elliptic(e) => e.frequency(),
        }
    }

    /// The full closed path, sampled at nsamples angles over one revolution.
    pub fn outline(&self, nsamples: usize) -> Vec<Vec2> {
        linspace(0.0, 2.0 * PI, nsamples)
            .iter()
            .map(|angle| match self {
                MotionModel::Circular(c) => rotate(Vec2::X * c.radius(), *angle),
                MotionModel::Elliptic(e) => Vec2::new(
                    e.semi_major() * angle.cos(),
                    e.semi_minor() * angle.sin(),
                ),
            })
            .collect()
    }

    /// Largest coordinate magnitude the path reaches. Renderers use this
    /// to size viewports.
    pub fn extent(&self) -> f32 {
        match self {
            MotionModel::Circular(c) => c.radius(),
            MotionModel::Elliptic(e) => e.semi_major().max(e.semi_minor()),
        }
    }
}

impl std::fmt::Display for MotionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionModel::Circular(c) => write!(
                f,
                "Circular motion, radius {:0.2} m, velocity {:0.2} m/s",
                c.radius(),
                c.velocity()
            ),
            MotionModel::Elliptic(e) => write!(
                f,
                "Elliptic motion, semi-major {:0.2} m, semi-minor {:0.2} m, velocity {:0.2} m/s",
                e.semi_major(),
                e.semi_minor(),
                e.velocity()
            ),
        }
    }
}

/// Payload of a parameter-change event, e.g. one slider interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionParams {
    Circular { radius: f32, velocity: f32 },
    Elliptic { semi_major: f32, semi_minor: f32, velocity: f32 },
}

impl MotionParams {
    pub fn build(self) -> Result<MotionModel, DomainError> {
        match self {
            MotionParams::Circular { radius, velocity } => MotionModel::circular(radius, velocity),
            MotionParams::Elliptic {
                semi_major,
                semi_minor,
                velocity,
            } => MotionModel::elliptic(semi_major, semi_minor, velocity),
        }
    }

    pub fn default_circular() -> Self {
        MotionParams::Circular {
            radius: 1.0,
            velocity: 1.0,
        }
    }

    pub fn default_elliptic() -> Self {
        MotionParams::Elliptic {
            semi_major: 1.0,
            semi_minor: 0.5,
            velocity: 1.0,
        }
    }
}
