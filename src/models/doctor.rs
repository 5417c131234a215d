use super::{Named, Patient};
use crate::error::InflammationError;
use crate::routines::names::NamedRow;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A doctor in an inflammation study, responsible for a roster of uniquely named patients
///
/// Deserialization goes through [Doctor::with_patients], so a serialized roster with a repeated
/// patient name is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DoctorRecord")]
pub struct Doctor {
    name: String,
    patients: Vec<Patient>,
}

/// Serialized form of a [Doctor], before the roster is checked
#[derive(Deserialize)]
struct DoctorRecord {
    name: String,
    patients: Vec<Patient>,
}

impl TryFrom<DoctorRecord> for Doctor {
    type Error = InflammationError;

    fn try_from(record: DoctorRecord) -> Result<Self, Self::Error> {
        Doctor::with_patients(record.name, record.patients)
    }
}

impl Doctor {
    pub fn new(name: impl Into<String>) -> Self {
        Doctor {
            name: name.into(),
            patients: Vec::new(),
        }
    }

    /// Create a doctor with an existing roster, failing if two patients share a name
    pub fn with_patients(
        name: impl Into<String>,
        patients: Vec<Patient>,
    ) -> Result<Self, InflammationError> {
        if let Some(duplicate) = first_duplicate(patients.iter().map(Named::name)) {
            return Err(InflammationError::DuplicatePatient(duplicate.to_string()));
        }
        Ok(Doctor {
            name: name.into(),
            patients,
        })
    }

    /// Create a doctor whose roster holds one patient per named matrix row
    pub fn from_named_rows(
        name: impl Into<String>,
        rows: &[NamedRow<'_>],
    ) -> Result<Self, InflammationError> {
        let patients = rows
            .iter()
            .map(|row| Patient::from_row(row.name.as_str(), row.data.view()))
            .collect();
        Self::with_patients(name, patients)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn patient(&self, name: &str) -> Option<&Patient> {
        self.patients.iter().find(|patient| patient.name() == name)
    }

    pub fn patient_mut(&mut self, name: &str) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|patient| patient.name() == name)
    }

    /// Add a patient without observations to the roster and return it
    pub fn add_patient(&mut self, name: &str) -> Result<&mut Patient, InflammationError> {
        if self.patient(name).is_some() {
            return Err(InflammationError::DuplicatePatient(name.to_string()));
        }
        tracing::debug!("Adding patient {} to the roster of {}", name, self.name);
        self.patients.push(Patient::new(name));
        let index = self.patients.len() - 1;
        Ok(&mut self.patients[index])
    }

    /// Add several patients at once
    ///
    /// Either every name is added or, if any name is already on the roster or repeated in
    /// `names`, none is and the first offending name is reported.
    pub fn add_patients<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), InflammationError> {
        let roster = self.patients.iter().map(Named::name);
        let batch = names.iter().map(|name| name.as_ref());
        if let Some(duplicate) = first_duplicate(roster.chain(batch)) {
            return Err(InflammationError::DuplicatePatient(duplicate.to_string()));
        }

        for name in names {
            self.add_patient(name.as_ref())?;
        }
        Ok(())
    }
}

fn first_duplicate<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    names.into_iter().find(|name| !seen.insert(*name))
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
