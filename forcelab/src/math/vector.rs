use glam::Vec2;

/// Magnitudes below this are treated as direction-less.
pub const EPSILON: f32 = 1e-4;

/// Polar force: magnitude and angle in degrees, counterclockwise from +x with y pointing up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ForceSpec {
    pub magnitude: f32,
    pub angle: f32,
}

pub trait F32MathUtils {
    fn normalize_degrees(&self) -> f32;
}

pub trait Vec2ScreenUtils {
    fn flip_y(self) -> Vec2;
    fn from_screen_polar(length: f32, angle: f32) -> Vec2;
    fn screen_angle(self) -> Option<f32>;
}

impl ForceSpec {
    pub fn new(magnitude: f32, angle: f32) -> Self {
        let magnitude = if magnitude.is_finite() { magnitude.max(0.0) } else { 0.0 };
        let angle = if angle.is_finite() { angle } else { 0.0 };

        Self { magnitude, angle }
    }

    pub fn from_vector(vector: Vec2) -> Self {
        let magnitude = vector.length();
        if !magnitude.is_finite() || magnitude < EPSILON {
            return Self::default();
        }

        Self { magnitude, angle: vector.y.atan2(vector.x).to_degrees().normalize_degrees() }
    }

    pub fn to_vector(&self) -> Vec2 {
        if self.is_directionless() {
            return Vec2::ZERO;
        }

        let (sin, cos) = sin_cos_degrees(self.angle);
        Vec2::new(cos, sin) * self.magnitude
    }

    /// Same vector expressed in canvas space, where y grows downwards.
    pub fn to_screen(&self) -> Vec2 {
        self.to_vector().flip_y()
    }

    pub fn is_directionless(&self) -> bool {
        self.magnitude < EPSILON
    }
}

/// Parallelogram-rule sum of two forces. The angle between them is `f2.angle - f1.angle`.
pub fn resultant(f1: ForceSpec, f2: ForceSpec) -> ForceSpec {
    let theta = f2.angle - f1.angle;
    let magnitude = resultant_magnitude(f1.magnitude, f2.magnitude, theta);

    if magnitude < EPSILON {
        return ForceSpec { magnitude: 0.0, angle: f1.angle };
    }

    let (sin, cos) = sin_cos_degrees(theta);
    let offset = (f2.magnitude * sin).atan2(f1.magnitude + f2.magnitude * cos).to_degrees();

    ForceSpec { magnitude, angle: (f1.angle + offset).normalize_degrees() }
}

/// Law of cosines. Exactly `f1 + f2` when the forces are parallel and `|f1 - f2|` when opposed.
pub fn resultant_magnitude(f1: f32, f2: f32, theta: f32) -> f32 {
    let (_, cos) = sin_cos_degrees(theta);

    if cos >= 1.0 {
        return f1 + f2;
    }
    if cos <= -1.0 {
        return (f1 - f2).abs();
    }

    (f1 * f1 + f2 * f2 + 2.0 * f1 * f2 * cos).max(0.0).sqrt()
}

/// Linear spring model: the force shown on a scale grows with the stretched length.
pub fn force_from_separation(a: Vec2, b: Vec2, scale: f32) -> f32 {
    scale * a.distance(b)
}

pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }

    points.iter().copied().sum::<Vec2>() / points.len() as f32
}

pub fn sin_cos_degrees(degrees: f32) -> (f32, f32) {
    let wrapped = degrees.rem_euclid(360.0);

    if wrapped == 0.0 {
        (0.0, 1.0)
    } else if wrapped == 90.0 {
        (1.0, 0.0)
    } else if wrapped == 180.0 {
        (0.0, -1.0)
    } else if wrapped == 270.0 {
        (-1.0, 0.0)
    } else {
        degrees.to_radians().sin_cos()
    }
}

impl F32MathUtils for f32 {
    fn normalize_degrees(&self) -> f32 {
        let angle = self.rem_euclid(360.0);

        if angle > 180.0 {
            angle - 360.0
        } else {
            angle
        }
    }
}

impl Vec2ScreenUtils for Vec2 {
    fn flip_y(self) -> Vec2 {
        Vec2::new(self.x, -self.y)
    }

    // Counterclockwise on screen means a negative rotation once y points down
    fn from_screen_polar(length: f32, angle: f32) -> Vec2 {
        let (sin, cos) = sin_cos_degrees(-angle);
        Vec2::new(cos, sin) * length
    }

    fn screen_angle(self) -> Option<f32> {
        if !self.is_finite() || self.length() < EPSILON {
            return None;
        }

        Some((-self.y).atan2(self.x).to_degrees())
    }
}
