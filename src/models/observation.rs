use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A single inflammation reading taken on a given day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    day: usize,
    value: f64,
}

impl Observation {
    pub fn new(day: usize, value: f64) -> Self {
        Observation { day, value }
    }

    pub fn day(&self) -> usize {
        self.day
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
