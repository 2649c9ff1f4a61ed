use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain student record. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    id: i32,
    name: String,
    email: String,
    department: String,
}

impl Student {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            department: department.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student(id={}, name={}, email={}, department={})",
            self.id, self.name, self.email, self.department
        )
    }
}

/// Summary of one showcase run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseReport {
    pub greeting: String,
    pub meal: String,
    pub transformed: f64,
    pub winner: String,
    pub no_show: String,
    pub companies: Vec<String>,
    pub students: Vec<Student>,
}
