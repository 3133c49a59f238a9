use serde::Serialize;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Points scored in each of the four regulation quarters.
///
/// Used both for a single player's split and for sums across a lineup or a
/// whole boxscore. No reconciliation with the player's total points is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct QuarterPoints {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
}

impl QuarterPoints {
    pub fn new(q1: f64, q2: f64, q3: f64, q4: f64) -> Self {
        Self { q1, q2, q3, q4 }
    }

    /// Q1 + Q2
    pub fn early(&self) -> f64 {
        self.q1 + self.q2
    }

    /// Q3 + Q4
    pub fn late(&self) -> f64 {
        self.q3 + self.q4
    }

    pub fn total(&self) -> f64 {
        self.early() + self.late()
    }

    /// (label, value) pairs in quarter order, for charts and tables.
    pub fn labelled(&self) -> [(&'static str, f64); 4] {
        [("Q1", self.q1), ("Q2", self.q2), ("Q3", self.q3), ("Q4", self.q4)]
    }
}

impl Add for QuarterPoints {
    type Output = QuarterPoints;

    fn add(self, rhs: QuarterPoints) -> QuarterPoints {
        QuarterPoints {
            q1: self.q1 + rhs.q1,
            q2: self.q2 + rhs.q2,
            q3: self.q3 + rhs.q3,
            q4: self.q4 + rhs.q4,
        }
    }
}

impl AddAssign for QuarterPoints {
    fn add_assign(&mut self, rhs: QuarterPoints) {
        *self = *self + rhs;
    }
}

impl Sum for QuarterPoints {
    fn sum<I: Iterator<Item = QuarterPoints>>(iter: I) -> Self {
        iter.fold(QuarterPoints::default(), Add::add)
    }
}
