use serde::Deserialize;

/// Project offered by a company. Date-time fields are opaque strings,
/// displayed as-is.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Project {
    pub number: String,
    pub name: String,
    pub description: String,
    pub application_open: String,
    pub application_close: String,
    pub activity_start: String,
    pub project_end: String,
    pub company: String,
}
