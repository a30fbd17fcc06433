// Storage models for patient records
pub mod patient;
