use super::{Named, Observation};
use crate::error::InflammationError;
use ndarray::ArrayView1;
use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// A patient in an inflammation study, with their readings in the order they were recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    name: String,
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_observations(name, Vec::new())
    }

    pub fn with_observations(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Patient {
            name: name.into(),
            observations,
        }
    }

    /// Create a patient from one row of a [Matrix](crate::structs::matrix::Matrix)
    ///
    /// Every present reading becomes an observation on the day of its column; missing readings are skipped.
    pub fn from_row(name: impl Into<String>, row: ArrayView1<'_, Option<f64>>) -> Self {
        let observations = row
            .iter()
            .enumerate()
            .filter_map(|(day, cell)| cell.map(|value| Observation::new(day, value)))
            .collect();
        Self::with_observations(name, observations)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Record a new reading and return it
    ///
    /// Without an explicit `day` the reading is placed on the day after the last observation,
    /// or on day 0 for a patient without observations. An explicit `day` is taken as is, even if
    /// it is out of order or already used.
    ///
    /// Fails without recording anything when the day has to follow an observation on `usize::MAX`.
    pub fn add_observation(
        &mut self,
        value: f64,
        day: Option<usize>,
    ) -> Result<Observation, InflammationError> {
        let day = match day {
            Some(day) => day,
            None => self.next_day()?,
        };
        let observation = Observation::new(day, value);
        self.observations.push(observation);
        Ok(observation)
    }

    fn next_day(&self) -> Result<usize, InflammationError> {
        match self.observations.last() {
            Some(last) => last
                .day()
                .checked_add(1)
                .ok_or_else(|| InflammationError::DayOverflow {
                    patient: self.name.clone(),
                }),
            None => Ok(0),
        }
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_create_patient() {
        let patient = Patient::new("Alice");
        assert_eq!(patient.name(), "Alice");
        assert_eq!(patient.to_string(), "Alice");
        assert!(patient.observations().is_empty());
    }

    #[test]
    fn test_add_observation_with_day() {
        let mut patient = Patient::new("Alice");
        let observation = patient.add_observation(5.0, Some(2)).unwrap();

        assert_eq!(observation.day(), 2);
        assert_eq!(patient.observations()[0].day(), 2);
        assert_eq!(patient.observations()[0].value(), 5.0);
    }

    #[test]
    fn test_add_observation_increments_day() {
        let mut patient = Patient::new("Alice");

        assert_eq!(patient.add_observation(10.0, None).unwrap().day(), 0);
        assert_eq!(patient.add_observation(12.0, None).unwrap().day(), 1);
        assert_eq!(patient.add_observation(3.0, Some(7)).unwrap().day(), 7);
        assert_eq!(patient.add_observation(4.0, None).unwrap().day(), 8);
    }

    #[test]
    fn test_explicit_day_is_not_validated() {
        let mut patient = Patient::new("Alice");
        patient.add_observation(1.0, Some(4)).unwrap();
        patient.add_observation(2.0, Some(1)).unwrap();
        patient.add_observation(3.0, Some(1)).unwrap();

        let days: Vec<usize> = patient.observations().iter().map(|o| o.day()).collect();
        assert_eq!(days, vec![4, 1, 1]);
        assert_eq!(patient.add_observation(-2.5, None).unwrap().day(), 2);
    }

    #[test]
    fn test_no_day_after_last_representable_day() {
        let mut patient = Patient::new("Alice");
        patient.add_observation(1.0, Some(usize::MAX)).unwrap();

        let err = patient.add_observation(2.0, None).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::PreconditionFailure);
        assert_eq!(patient.observations().len(), 1);

        assert_eq!(patient.add_observation(3.0, Some(0)).unwrap().day(), 0);
    }

    #[test]
    fn test_from_row() {
        let row = array![Some(1.0), None, Some(3.0)];
        let patient = Patient::from_row("Bob", row.view());

        assert_eq!(
            patient.observations(),
            &[Observation::new(0, 1.0), Observation::new(2, 3.0)]
        );
    }
}
