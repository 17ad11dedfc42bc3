use crate::math::vector::Vec2ScreenUtils;
use crate::math::vector::EPSILON;
use glam::Vec2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dash {
    pub length: f32,
    pub gap: f32,
}

impl Dash {
    pub fn new(length: f32, gap: f32) -> Self {
        Self { length, gap }
    }
}

/// Triangle `[tip, left, right]` placed at `to`, or `None` when the vector has no direction.
pub fn arrow_head(from: Vec2, to: Vec2, size: f32) -> Option<[Vec2; 3]> {
    if from.distance(to) < EPSILON {
        return None;
    }

    let direction = (to - from).try_normalize()?;

    let normal = direction.perp() * size * 0.5;
    let base = to - direction * size;

    Some([to, base + normal, base - normal])
}

/// Points along an arc, angles in degrees measured counterclockwise on screen.
pub fn arc_points(center: Vec2, radius: f32, start: f32, sweep: f32, sides: Option<u32>) -> Vec<Vec2> {
    let sides = sides.unwrap_or(((radius * 4.0) * sweep.abs() / 360.0).ceil() as u32).max(1);
    let step = sweep / sides as f32;

    (0..=sides).map(|i| center + Vec2::from_screen_polar(radius, start + step * i as f32)).collect()
}

pub fn dash_segments(from: Vec2, to: Vec2, dash: Dash) -> Vec<(Vec2, Vec2)> {
    dash_polyline(&[from, to], dash)
}

/// Splits a polyline into visible dash pieces; the pattern continues across vertices.
pub fn dash_polyline(points: &[Vec2], dash: Dash) -> Vec<(Vec2, Vec2)> {
    let period = dash.length + dash.gap;
    if dash.length <= 0.0 || dash.gap <= 0.0 || !period.is_finite() {
        return points.windows(2).map(|pair| (pair[0], pair[1])).collect();
    }

    let mut segments = Vec::new();
    let mut phase = 0.0;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = a.distance(b);
        if length < EPSILON {
            continue;
        }

        let direction = (b - a) / length;
        let mut travelled = 0.0;

        while travelled < length {
            let visible = phase < dash.length;
            let step = (if visible { dash.length - phase } else { period - phase }).min(length - travelled);
            if step <= 0.0 {
                break;
            }

            if visible {
                segments.push((a + direction * travelled, a + direction * (travelled + step)));
            }

            travelled += step;
            phase += step;

            if phase >= period {
                phase = 0.0;
            }
        }
    }

    segments
}

/// Corners of a `width` x `height` box hanging from `origin` along local +y, rotated clockwise on screen.
pub fn rotated_rectangle(origin: Vec2, width: f32, height: f32, rotation: f32) -> Vec<Vec2> {
    let rotation = Vec2::from_angle(rotation.to_radians());
    let half = width / 2.0;

    [Vec2::new(-half, 0.0), Vec2::new(half, 0.0), Vec2::new(half, height), Vec2::new(-half, height)]
        .into_iter()
        .map(|corner| origin + rotation.rotate(corner))
        .collect()
}
