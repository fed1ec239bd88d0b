//! Attendance and payroll tracking engine.
//!
//! This crate tracks daily attendance and overtime per calendar day for
//! independently configured profiles, and derives monthly income, payment
//! status, and pending balances from each profile's salary terms and
//! weekly-off schedule.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod store;
pub mod transfer;
