//! Edit-form payloads and their coercion into stored records.

use thiserror::Error;

use crate::employee::{Documents, EmergencyContact, Employee, OtherDocument, Socials};
use crate::id::EmployeeId;

/// Default employment status for new records.
pub const DEFAULT_STATUS: &str = "Tetap";
/// Default gender for new records.
pub const DEFAULT_GENDER: &str = "Laki-laki";

/// A list-valued form field, either as typed free text or already structured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput<T> {
    /// Text as typed by the user, parsed on save.
    RawText(String),
    /// An already parsed sequence.
    Parsed(Vec<T>),
}

impl<T> Default for FieldInput<T> {
    fn default() -> Self {
        Self::Parsed(Vec::new())
    }
}

impl FieldInput<String> {
    /// Resolve into the ordered hobby list.
    #[must_use]
    pub fn resolve(self) -> Vec<String> {
        match self {
            Self::RawText(text) => parse_hobbies(&text),
            Self::Parsed(items) => items,
        }
    }
}

impl FieldInput<OtherDocument> {
    /// Resolve into the ordered extra-document list.
    #[must_use]
    pub fn resolve(self) -> Vec<OtherDocument> {
        match self {
            Self::RawText(text) => parse_other_documents(&text),
            Self::Parsed(items) => items,
        }
    }
}

/// Split a comma-separated hobby list, trimming and dropping empty entries.
#[must_use]
pub fn parse_hobbies(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|hobby| !hobby.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse `name|url` pairs separated by `;`.
///
/// Each segment is split once on the first `|`; a segment without one yields
/// an entry with an empty url.
#[must_use]
pub fn parse_other_documents(text: &str) -> Vec<OtherDocument> {
    text.split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('|') {
            Some((name, url)) => OtherDocument::new(name.trim(), url.trim()),
            None => OtherDocument::new(segment, ""),
        })
        .collect()
}

/// Render hobbies back into the editable comma-separated form.
#[must_use]
pub fn format_hobbies(hobbies: &[String]) -> String {
    hobbies.join(", ")
}

/// Render extra documents back into the editable `name|url; ...` form.
#[must_use]
pub fn format_other_documents(others: &[OtherDocument]) -> String {
    others
        .iter()
        .map(|doc| format!("{}|{}", doc.name, doc.url))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validation failures raised when saving a form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("required field is empty: {0}")]
    MissingField(&'static str),
}

/// Editable employee form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub nik: String,
    pub name: String,
    pub division: String,
    pub position: String,
    pub status: String,
    pub email: String,
    pub phone: String,
    pub photo: String,
    pub address: String,
    pub dob: String,
    pub gender: String,
    pub hire_date: String,
    pub contract_end: String,
    pub hobbies: FieldInput<String>,
    pub socials: Socials,
    pub emergency: EmergencyContact,
    pub cv: String,
    pub contract: String,
    pub letter: String,
    pub others: FieldInput<OtherDocument>,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            nik: String::new(),
            name: String::new(),
            division: String::new(),
            position: String::new(),
            status: DEFAULT_STATUS.to_owned(),
            email: String::new(),
            phone: String::new(),
            photo: String::new(),
            address: String::new(),
            dob: String::new(),
            gender: DEFAULT_GENDER.to_owned(),
            hire_date: String::new(),
            contract_end: String::new(),
            hobbies: FieldInput::default(),
            socials: Socials::default(),
            emergency: EmergencyContact::default(),
            cv: String::new(),
            contract: String::new(),
            letter: String::new(),
            others: FieldInput::default(),
        }
    }
}

impl EmployeeDraft {
    /// Pre-fill a form from an existing record.
    #[must_use]
    pub fn from_employee(employee: &Employee) -> Self {
        let employee = employee.clone();
        Self {
            nik: employee.nik,
            name: employee.name,
            division: employee.division,
            position: employee.position,
            status: employee.status,
            email: employee.email,
            phone: employee.phone,
            photo: employee.photo,
            address: employee.address,
            dob: employee.dob,
            gender: employee.gender,
            hire_date: employee.hire_date,
            contract_end: employee.contract_end,
            hobbies: FieldInput::Parsed(employee.hobbies),
            socials: employee.socials,
            emergency: employee.emergency,
            cv: employee.documents.cv,
            contract: employee.documents.contract,
            letter: employee.documents.letter,
            others: FieldInput::Parsed(employee.documents.others),
        }
    }

    /// Validate required fields and resolve list inputs into a record.
    ///
    /// The returned record carries a blank id; the store assigns or keeps ids.
    ///
    /// # Errors
    /// Returns [`DraftError::MissingField`] when a required field is blank.
    pub fn into_employee(self) -> Result<Employee, DraftError> {
        for (field, value) in [
            ("name", &self.name),
            ("nik", &self.nik),
            ("division", &self.division),
            ("position", &self.position),
            ("status", &self.status),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }

        Ok(Employee {
            id: EmployeeId::default(),
            nik: self.nik,
            name: self.name,
            division: self.division,
            position: self.position,
            status: self.status,
            email: self.email,
            phone: self.phone,
            photo: self.photo,
            address: self.address,
            dob: self.dob,
            gender: self.gender,
            hire_date: self.hire_date,
            contract_end: self.contract_end,
            hobbies: self.hobbies.resolve(),
            socials: self.socials,
            emergency: self.emergency,
            documents: Documents {
                cv: self.cv.trim().to_owned(),
                contract: self.contract.trim().to_owned(),
                letter: self.letter.trim().to_owned(),
                others: self.others.resolve(),
            },
        })
    }
}
