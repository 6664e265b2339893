pub mod a001_patient;
pub mod a002_appointment;
pub mod a003_prescription;
