//! Analysis of daily inflammation readings across a cohort of patients.
//!
//! The crate offers two views over the same data. The table view works on a [Matrix] of
//! readings (one row per patient, one column per day) and provides daily statistics,
//! per-patient normalisation and threshold counts. The model view tracks named [Patient]s,
//! their [Observation]s, and the [Doctor]s responsible for them.
//!
//! [Matrix]: structs::matrix::Matrix
//! [Patient]: models::Patient
//! [Observation]: models::Observation
//! [Doctor]: models::Doctor

pub mod entrypoints;
pub mod error;
pub mod models;
pub mod routines {
    pub mod logger;
    pub mod names;
    pub mod normalisation;
    pub mod output;
    pub mod settings;
    pub mod statistics;
    pub mod threshold;
}
pub mod structs {
    pub mod matrix;
}

pub use crate::entrypoints::{analyse, analyse_internal};

pub mod prelude {
    pub use crate::error::{ErrorKind, InflammationError};
    pub use crate::models::{Doctor, Named, Observation, Patient};
    pub use crate::routines::names::{attach_names, NamedRow};
    pub use crate::routines::normalisation::patient_normalise;
    pub use crate::routines::output::{PatientReport, Report};
    pub use crate::routines::settings::{parse_settings, read_settings, Settings};
    pub use crate::routines::statistics::{
        daily_max, daily_mean, daily_min, daily_std, DailySummary,
    };
    pub use crate::routines::threshold::daily_above_threshold;
    pub use crate::routines::*;
    pub use crate::structs::matrix::{load_matrix, Matrix};
}
