//! Sequential script runner: create one user, delete another, report, disconnect.

use crate::db::models::{NewUser, User};
use crate::db::traits::UserStore;
use crate::error::OperationError;
use std::future::Future;
use std::io::Write;
use tracing::{debug, info, warn};

pub const CREATE_NAME: &str = "Tony";
pub const CREATE_AGE: i64 = 46;
pub const CREATE_EMAIL: &str = "tony@nomail.com";
pub const DELETE_EMAIL: &str = "sally@test3.com";

/// The fixed record the script inserts.
pub fn create_payload() -> NewUser {
    NewUser::new(CREATE_NAME, CREATE_AGE, CREATE_EMAIL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Creating,
    Deleting,
    Reporting,
    Succeeded,
    Failed,
    Disconnected,
}

/// Result of one run: the deleted record (or the error) plus every phase entered.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: Result<User, OperationError>,
    pub phases: Vec<Phase>,
}

impl RunReport {
    pub fn final_phase(&self) -> Phase {
        self.phases.last().copied().unwrap_or(Phase::NotStarted)
    }
}

struct PhaseLog {
    phases: Vec<Phase>,
}

impl PhaseLog {
    fn new() -> Self {
        Self {
            phases: vec![Phase::NotStarted],
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!(?phase, "script phase");
        self.phases.push(phase);
    }
}

/// Run the script against the store produced by `acquire`.
///
/// The deleted record goes to `out` as one JSON line. Any failure is written to
/// `err` as its message; that line is the only place the message appears.
/// Once a store was acquired, `close` is awaited exactly once after the other
/// steps settle, whatever their outcome.
pub async fn run<S, F, O, E>(acquire: F, out: &mut O, err: &mut E) -> RunReport
where
    S: UserStore,
    F: Future<Output = Result<S, OperationError>>,
    O: Write,
    E: Write,
{
    let mut log = PhaseLog::new();

    let (outcome, store) = match acquire.await {
        Ok(store) => {
            let outcome = execute(&store, out, &mut log).await;
            (outcome, Some(store))
        }
        Err(e) => (Err(e), None),
    };

    match &outcome {
        Ok(user) => {
            log.enter(Phase::Succeeded);
            info!(id = user.id, email = %user.email, "script finished");
        }
        Err(e) => {
            log.enter(Phase::Failed);
            if e.is_unique_violation() {
                debug!("create rejected on unique email; the record exists from an earlier run");
            }
            if let Err(io_err) = writeln!(err, "{e}") {
                warn!(error = %io_err, "failed to write error message");
            }
        }
    }

    if let Some(store) = store {
        store.close().await;
    }
    log.enter(Phase::Disconnected);

    RunReport {
        outcome,
        phases: log.phases,
    }
}

async fn execute<S, O>(store: &S, out: &mut O, log: &mut PhaseLog) -> Result<User, OperationError>
where
    S: UserStore,
    O: Write,
{
    log.enter(Phase::Creating);
    store.create_user(create_payload()).await?;

    log.enter(Phase::Deleting);
    let deleted = store.delete_user_by_email(DELETE_EMAIL).await?;

    log.enter(Phase::Reporting);
    let line = serde_json::to_string(&deleted)?;
    writeln!(out, "{line}")?;

    Ok(deleted)
}
