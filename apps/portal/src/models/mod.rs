pub mod employee;
pub mod fire22;

pub use employee::{Department, EmployeeData, Tier};
