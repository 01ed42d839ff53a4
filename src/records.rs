//! Simulated academic-records system.
//!
//! Both calls resolve after a fixed delay to emulate an external service.
//! The entry-time lookup only knows whether the student exists; the business
//! rules are re-evaluated at registration time, since the backend state may
//! have changed in between.

use crate::rules::{self, Rejection};
use std::time::Duration;
use tokio::time::sleep;
use tracing::trace;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Eligible,
    NotFound,
}

pub struct AcademicRecords {
    verify_delay: Duration,
    submit_delay: Duration,
}

impl AcademicRecords {
    pub fn new(verify_delay: Duration, submit_delay: Duration) -> AcademicRecords {
        AcademicRecords {
            verify_delay,
            submit_delay,
        }
    }

    /// Student lookup for a well-formed legajo.
    pub async fn verify(&self, legajo: &str) -> Verdict {
        sleep(self.verify_delay).await;
        let verdict = if legajo == rules::NOT_FOUND {
            Verdict::NotFound
        } else {
            Verdict::Eligible
        };
        trace!(legajo, ?verdict, "eligibility check resolved");
        verdict
    }

    /// Final commit of the application.
    pub async fn register(&self, legajo: &str) -> Result<(), Rejection> {
        sleep(self.submit_delay).await;
        match rules::rejection_for(legajo) {
            Some(rejection) => {
                trace!(legajo, ?rejection, "registration rejected");
                Err(rejection)
            }
            None => {
                trace!(legajo, "registration accepted");
                Ok(())
            }
        }
    }
}
