pub mod appointment;
pub mod contact;
pub mod doctor;
pub mod error;
pub mod hhmm;
pub mod service;
