use crate::math::vector;
use glam::Vec2;
use log::warn;

pub const TABLE_FORCE: f32 = 20.0;
pub const TABLE_ANGLES: [f32; 5] = [0.0, 60.0, 90.0, 120.0, 180.0];
pub const ANSWER_TOLERANCE: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellStatus {
    Empty,
    Invalid,
    Correct,
    Incorrect,
}

/// Fill-in table of resultant magnitudes for two equal forces at fixed angles.
#[derive(Clone, Debug)]
pub struct ResultantTable {
    force: f32,
    angles: Vec<f32>,
    inputs: Vec<String>,
    answers_visible: bool,
}

impl ResultantTable {
    pub fn new(force: f32, angles: &[f32]) -> Self {
        Self { force, angles: angles.to_vec(), inputs: vec![String::new(); angles.len()], answers_visible: false }
    }

    pub fn force(&self) -> f32 {
        self.force
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    pub fn columns(&self) -> usize {
        self.angles.len()
    }

    /// Rounded to one decimal, as printed in the answer row.
    pub fn expected(&self, column: usize) -> Option<f32> {
        let angle = self.angles.get(column)?;
        let magnitude = vector::resultant_magnitude(self.force, self.force, *angle);

        Some((magnitude * 10.0).round() / 10.0)
    }

    pub fn input(&self, column: usize) -> Option<&str> {
        self.inputs.get(column).map(|input| input.as_str())
    }

    pub fn input_mut(&mut self, column: usize) -> Option<&mut String> {
        self.inputs.get_mut(column)
    }

    pub fn set_input(&mut self, column: usize, text: &str) {
        match self.inputs.get_mut(column) {
            Some(input) => *input = text.to_string(),
            None => warn!("Table column {} does not exist", column),
        }
    }

    pub fn check(&self, column: usize) -> CellStatus {
        let (Some(input), Some(expected)) = (self.input(column), self.expected(column)) else {
            return CellStatus::Invalid;
        };

        let input = input.trim();
        if input.is_empty() {
            return CellStatus::Empty;
        }

        match input.parse::<f32>() {
            Ok(value) if value.is_finite() => {
                if (value - expected).abs() <= ANSWER_TOLERANCE + f32::EPSILON * expected.abs().max(1.0) {
                    CellStatus::Correct
                } else {
                    CellStatus::Incorrect
                }
            }
            _ => CellStatus::Invalid,
        }
    }

    pub fn correct_count(&self) -> usize {
        (0..self.columns()).filter(|column| self.check(*column) == CellStatus::Correct).count()
    }

    pub fn answers_visible(&self) -> bool {
        self.answers_visible
    }

    pub fn set_answers_visible(&mut self, visible: bool) {
        self.answers_visible = visible;
    }

    pub fn toggle_answers(&mut self) {
        self.answers_visible = !self.answers_visible;
    }

    /// `(min, max)` of the resultant over every angle: `|F1 - F2|` and `F1 + F2`.
    pub fn range(&self) -> (f32, f32) {
        ((self.force - self.force).abs(), self.force + self.force)
    }

    /// Resultant magnitude sampled evenly over [0, 180] degrees, as `(angle, magnitude)` points.
    pub fn curve(&self, samples: usize) -> Vec<Vec2> {
        let samples = samples.max(2);

        (0..samples)
            .map(|i| {
                let angle = 180.0 * i as f32 / (samples - 1) as f32;
                Vec2::new(angle, vector::resultant_magnitude(self.force, self.force, angle))
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.inputs.iter_mut().for_each(|input| input.clear());
        self.answers_visible = false;
    }
}

impl Default for ResultantTable {
    fn default() -> Self {
        Self::new(TABLE_FORCE, &TABLE_ANGLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn expected_values_are_rounded() {
        let table = ResultantTable::default();
        let expected: Vec<f32> = (0..table.columns()).filter_map(|column| table.expected(column)).collect();

        assert_eq!(expected, vec![40.0, 34.6, 28.3, 20.0, 0.0]);
        assert_eq!(table.expected(5), None);
    }

    #[test]
    fn answers_within_tolerance_are_accepted() {
        let mut table = ResultantTable::default();
        table.set_input(1, "34.64");
        table.set_input(2, " 28.2 ");
        table.set_input(3, "21");
        table.set_input(4, "zero");

        assert_eq!(table.check(0), CellStatus::Empty);
        assert_eq!(table.check(1), CellStatus::Correct);
        assert_eq!(table.check(2), CellStatus::Correct);
        assert_eq!(table.check(3), CellStatus::Incorrect);
        assert_eq!(table.check(4), CellStatus::Invalid);
        assert_eq!(table.check(9), CellStatus::Invalid);
        assert_eq!(table.correct_count(), 2);
    }

    #[test]
    fn range_spans_difference_to_sum() {
        assert_eq!(ResultantTable::default().range(), (0.0, 40.0));
    }

    #[test]
    fn curve_falls_from_sum_to_difference() {
        let curve = ResultantTable::default().curve(19);

        assert_eq!(curve.len(), 19);
        assert_eq!(curve[0], Vec2::new(0.0, 40.0));
        assert_relative_eq!(curve[18].x, 180.0);
        assert_relative_eq!(curve[18].y, 0.0);
        assert!(curve.windows(2).all(|pair| pair[1].y <= pair[0].y + 1e-3));
    }

    #[test]
    fn reset_clears_inputs() {
        let mut table = ResultantTable::default();
        table.set_input(0, "40");
        table.toggle_answers();
        table.reset();

        assert_eq!(table.input(0), Some(""));
        assert!(!table.answers_visible());
    }
}
