use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct University {
    pub id: String,
    pub name: String,
}
