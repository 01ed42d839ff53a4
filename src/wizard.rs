//! Step controller for the application wizard.
//!
//! The wizard owns the draft and advances it only through the named
//! operations below. Failures from the simulated checks post a notice and
//! hold the step; nothing here is fatal.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::model::{Draft, Step};
use crate::notice::NoticeBoard;
use crate::records::{AcademicRecords, Verdict};
use crate::rules::{self, Rejection};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("unknown university: {0}")]
    UnknownUniversity(String),
    #[error("unknown project: {0}")]
    UnknownProject(String),
    #[error("unknown position: {0}")]
    UnknownPosition(String),
    #[error("operation out of turn on step {step:?}")]
    OutOfTurn { step: Step },
}

/// Outcome of the entry-time legajo check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verification {
    Advanced,
    Rejected,
    /// A check is already in flight; nothing was done.
    Busy,
}

/// Outcome of the final submission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Submission {
    Accepted,
    Rejected,
    /// A check is already in flight; nothing was done.
    Busy,
}

pub struct Wizard<'a> {
    catalog: &'a Catalog,
    records: AcademicRecords,
    notices: NoticeBoard,
    draft: Draft,
    busy: bool,
}

impl<'a> Wizard<'a> {
    pub fn new(catalog: &'a Catalog, config: &Config) -> Wizard<'a> {
        Wizard {
            catalog,
            records: AcademicRecords::new(config.verify_delay(), config.submit_delay()),
            notices: NoticeBoard::new(config.notice_ttl()),
            draft: Draft::default(),
            busy: false,
        }
    }

    pub fn step(&self) -> Step {
        self.draft.step
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    fn expect_step(&self, step: Step) -> Result<(), WizardError> {
        if self.draft.step == step {
            Ok(())
        } else {
            Err(WizardError::OutOfTurn {
                step: self.draft.step,
            })
        }
    }

    pub fn choose_university(&mut self, id: &str) -> Result<(), WizardError> {
        self.expect_step(Step::University)?;
        let university = self
            .catalog
            .university(id)
            .ok_or_else(|| WizardError::UnknownUniversity(id.to_owned()))?;
        self.draft.university = Some(university.id.clone());
        self.draft.step = Step::Legajo;
        debug!(university = %university.name, "university chosen");
        Ok(())
    }

    /// Validate the entered legajo and advance on success. A malformed or
    /// unknown legajo posts a notice, clears the field and holds the step.
    pub async fn submit_legajo(&mut self, raw: &str) -> Result<Verification, WizardError> {
        self.expect_step(Step::Legajo)?;
        if self.busy {
            return Ok(Verification::Busy);
        }
        let legajo = raw.trim();
        if !rules::is_well_formed(legajo) {
            self.draft.legajo = None;
            self.notices.error(rules::INVALID_FORMAT);
            return Ok(Verification::Rejected);
        }
        self.busy = true;
        let verdict = self.records.verify(legajo).await;
        self.busy = false;
        match verdict {
            Verdict::NotFound => {
                self.draft.legajo = None;
                self.notices.error(rules::STUDENT_NOT_FOUND);
                Ok(Verification::Rejected)
            }
            Verdict::Eligible => {
                self.draft.legajo = Some(legajo.to_owned());
                self.draft.step = Step::Projects;
                info!(legajo, "student verified");
                Ok(Verification::Advanced)
            }
        }
    }

    pub fn choose_project(&mut self, number: &str) -> Result<(), WizardError> {
        self.expect_step(Step::Projects)?;
        let project = self
            .catalog
            .project(number)
            .ok_or_else(|| WizardError::UnknownProject(number.to_owned()))?;
        self.draft.project = Some(project.clone());
        // Changing project invalidates any previously chosen position.
        self.draft.position = None;
        self.draft.step = Step::Positions;
        debug!(project = %project.name, "project chosen");
        Ok(())
    }

    pub fn choose_position(&mut self, code: &str) -> Result<(), WizardError> {
        self.expect_step(Step::Positions)?;
        debug_assert!(self.draft.project.is_some());
        let position = self
            .catalog
            .position(code)
            .ok_or_else(|| WizardError::UnknownPosition(code.to_owned()))?;
        self.draft.position = Some(position.clone());
        self.draft.step = Step::Confirm;
        debug!(position = %position.name, "position chosen");
        Ok(())
    }

    /// Commit the application. The records system re-checks the business
    /// rules; a rejection posts its notice and holds the confirmation step so
    /// the user can retry or decline.
    pub async fn confirm(&mut self) -> Result<Submission, WizardError> {
        self.expect_step(Step::Confirm)?;
        if self.busy {
            return Ok(Submission::Busy);
        }
        let legajo = self
            .draft
            .legajo
            .clone()
            .expect("legajo validated before confirmation");
        let project = self
            .draft
            .project
            .clone()
            .expect("project chosen before confirmation");
        self.busy = true;
        let result = self.records.register(&legajo).await;
        self.busy = false;
        match result {
            Ok(()) => {
                self.notices.success(rules::SUCCESS);
                self.draft.step = Step::Done;
                info!(legajo, project = %project.name, "application registered");
                Ok(Submission::Accepted)
            }
            Err(rejection) => {
                self.notices.error(rejection.message(&project.name));
                Ok(Submission::Rejected)
            }
        }
    }

    /// Decline the confirmation. A window-closed legajo routes back to the
    /// project list; every other case returns to the position list.
    pub fn decline(&mut self) -> Result<(), WizardError> {
        self.expect_step(Step::Confirm)?;
        let window_closed = self
            .draft
            .legajo
            .as_deref()
            .and_then(rules::rejection_for)
            == Some(Rejection::WindowClosed);
        self.draft.step = if window_closed {
            Step::Projects
        } else {
            Step::Positions
        };
        debug!(step = ?self.draft.step, "confirmation declined");
        Ok(())
    }

    pub fn back(&mut self) -> Result<(), WizardError> {
        match self.draft.step.previous() {
            Some(step) => {
                self.draft.step = step;
                Ok(())
            }
            None => Err(WizardError::OutOfTurn {
                step: self.draft.step,
            }),
        }
    }

    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.notices.clear();
        debug!("wizard reset");
    }
}
