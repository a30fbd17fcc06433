// VitalWatch Domain
// This crate contains the business logic for the VitalWatch monitoring service

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Testing utilities - available in tests and with the mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
