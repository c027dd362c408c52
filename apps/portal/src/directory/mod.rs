//! Employee directory — the read-only source of `EmployeeData` records.
//!
//! Loaded once at startup from a JSON array (configured file or the bundled
//! seed) and shared immutably through `AppState`.

pub mod tools;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::{Department, EmployeeData, Tier};

pub use tools::{tools_for_department, ToolInfo};

const SEED_DIRECTORY: &str = include_str!("../../data/employees.json");

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed directory JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate employee id '{0}'")]
    DuplicateId(String),

    #[error("employee id must not be empty")]
    EmptyId,
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    /// Insertion order, kept for listing.
    employees: Vec<EmployeeData>,
    index: HashMap<String, usize>,
}

impl EmployeeDirectory {
    pub fn from_json(raw: &str) -> Result<Self, DirectoryError> {
        let employees: Vec<EmployeeData> = serde_json::from_str(raw)?;
        Self::from_employees(employees)
    }

    pub fn from_employees(employees: Vec<EmployeeData>) -> Result<Self, DirectoryError> {
        let mut index = HashMap::with_capacity(employees.len());
        for (position, employee) in employees.iter().enumerate() {
            if employee.id.trim().is_empty() {
                return Err(DirectoryError::EmptyId);
            }
            if index.insert(employee.id.clone(), position).is_some() {
                return Err(DirectoryError::DuplicateId(employee.id.clone()));
            }
        }
        Ok(Self { employees, index })
    }

    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_json(&raw)?;
        info!(
            "Loaded {} employees from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// The directory compiled into the binary.
    pub fn seed() -> Result<Self, DirectoryError> {
        Self::from_json(SEED_DIRECTORY)
    }

    pub fn get(&self, id: &str) -> Option<&EmployeeData> {
        self.index.get(id).map(|&i| &self.employees[i])
    }

    pub fn all(&self) -> &[EmployeeData] {
        &self.employees
    }

    /// Employees matching every supplied criterion, in directory order.
    pub fn filter(&self, department: Option<Department>, tier: Option<Tier>) -> Vec<&EmployeeData> {
        self.all()
            .iter()
            .filter(|e| department.map_or(true, |d| e.department == d))
            .filter(|e| tier.map_or(true, |t| e.tier == t))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
