//! Object view over the cohort: named patients, their observations, and the doctors responsible for them

pub mod doctor;
pub mod observation;
pub mod patient;

pub use doctor::Doctor;
pub use observation::Observation;
pub use patient::Patient;

/// Anything identified by a human readable name, such as a [Patient] or a [Doctor]
pub trait Named {
    fn name(&self) -> &str;
}
