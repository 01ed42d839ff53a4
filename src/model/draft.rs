use super::{Position, Project};

/// The six screens of the wizard, in order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Step {
    #[default]
    University,
    Legajo,
    Projects,
    Positions,
    Confirm,
    Done,
}

impl Step {
    pub const COUNT: u8 = 6;

    pub fn number(self) -> u8 {
        match self {
            Step::University => 1,
            Step::Legajo => 2,
            Step::Projects => 3,
            Step::Positions => 4,
            Step::Confirm => 5,
            Step::Done => 6,
        }
    }

    /// Screens reachable with the back action. Confirmation declines through
    /// its own routing and the success screen only resets.
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Legajo => Some(Step::University),
            Step::Projects => Some(Step::Legajo),
            Step::Positions => Some(Step::Projects),
            _ => None,
        }
    }
}

/// The one mutable entity of the wizard. Created empty, mutated only through
/// the wizard's named operations, discarded on reset.
///
/// `position` is only meaningful once `project` is set; the step only moves
/// past a screen once that screen's field is filled in (validated, for the
/// legajo).
#[derive(Clone, Debug, Default)]
pub struct Draft {
    pub step: Step,
    pub university: Option<String>,
    pub legajo: Option<String>,
    pub project: Option<Project>,
    pub position: Option<Position>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.university.is_none()
            && self.legajo.is_none()
            && self.project.is_none()
            && self.position.is_none()
    }
}
