use serde::Deserialize;

/// Position within a project, with its study-field and course requirements.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Position {
    pub code: String,
    pub name: String,
    pub description: String,
    pub weekly_hours: u32,
    pub field: String,
    pub min_approved_courses: u32,
    pub min_regular_courses: u32,
    pub vacancies: u32,
}
