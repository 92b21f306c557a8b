//! GCP authentication

pub mod adc;

pub use adc::AuthenticationManager;
