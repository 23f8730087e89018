//! Core Kernel - Foundational types for the duty drawback claims service
//!
//! This crate provides the building blocks shared by the domain, storage and
//! API layers:
//! - Date windows (absolute and relative) used to filter claims by import date
//! - The port error type and marker trait implemented by storage adapters

pub mod temporal;
pub mod ports;

pub use temporal::{DateRange, RelativeRange, TemporalError};
pub use ports::{DomainPort, PortError};
