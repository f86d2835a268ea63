//! Payroll run orchestration.
//!
//! [`PayrollRunner`] generates one [`PayrollRun`] per invocation: it lists the
//! school's staff, fetches each member's salary profile and attendance through
//! a bounded worker pool, computes payouts, and appends the assembled run to
//! the payroll history.
//!
//! Problems with one staff member's data become an error entry in the run.
//! Store failures and timeouts abort the whole run before anything is
//! persisted.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use futures::future::try_join_all;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_payout, summarize_attendance};
use crate::config::EngineSettings;
use crate::error::{EngineError, EngineResult, StoreError};
use crate::models::{
    NO_SALARY_STRUCTURE, PayrollMonth, PayrollRun, PerEmployeeResult, StaffMember,
};
use crate::store::{AttendanceStore, PayrollHistoryStore, SalaryProfileStore, StaffDirectory};

const STAFF_DIRECTORY: &str = "staff directory";
const SALARY_PROFILE_STORE: &str = "salary profile store";
const ATTENDANCE_STORE: &str = "attendance store";
const PAYROLL_HISTORY_STORE: &str = "payroll history store";

/// Parses `input` and rejects months that start after `today`'s month.
///
/// # Example
///
/// ```
/// use payroll_engine::payroll::parse_payroll_month;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// assert!(parse_payroll_month("2026-10", today).is_ok());
/// assert!(parse_payroll_month("2026-11", today).is_err());
/// ```
pub fn parse_payroll_month(input: &str, today: NaiveDate) -> EngineResult<PayrollMonth> {
    let month: PayrollMonth = input.parse()?;
    if month.is_after(today) {
        return Err(EngineError::FutureMonth {
            month: month.to_string(),
        });
    }
    Ok(month)
}

/// Generates and reads payroll runs for schools.
///
/// The runner holds no state between calls. Generating twice for the same
/// school and month appends two runs; readers use the most recent one.
///
/// # Example
///
/// ```
/// use payroll_engine::config::EngineSettings;
/// use payroll_engine::payroll::PayrollRunner;
/// use payroll_engine::store::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let runner = PayrollRunner::from_store(InMemoryStore::new(), EngineSettings::default());
/// let run = runner.generate("school_1", "2025-09").await.unwrap();
/// assert!(run.payroll_data.is_empty());
/// # });
/// ```
#[derive(Clone)]
pub struct PayrollRunner {
    staff: Arc<dyn StaffDirectory>,
    salaries: Arc<dyn SalaryProfileStore>,
    attendance: Arc<dyn AttendanceStore>,
    history: Arc<dyn PayrollHistoryStore>,
    settings: EngineSettings,
}

impl PayrollRunner {
    /// Creates a runner over separate store implementations.
    pub fn new(
        staff: Arc<dyn StaffDirectory>,
        salaries: Arc<dyn SalaryProfileStore>,
        attendance: Arc<dyn AttendanceStore>,
        history: Arc<dyn PayrollHistoryStore>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            staff,
            salaries,
            attendance,
            history,
            settings,
        }
    }

    /// Creates a runner where one backend serves every store role.
    pub fn from_store<S>(store: S, settings: EngineSettings) -> Self
    where
        S: StaffDirectory + SalaryProfileStore + AttendanceStore + PayrollHistoryStore + 'static,
    {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store.clone(), store, settings)
    }

    /// Returns the engine settings in use.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Generates and persists the payroll run for `school_id` and `month`.
    ///
    /// `month` is a `YYYY-MM` string; malformed or future months are rejected
    /// before any store is contacted.
    pub async fn generate(&self, school_id: &str, month: &str) -> EngineResult<PayrollRun> {
        self.execute(school_id, month, Utc::now(), &CancellationToken::new())
            .await
    }

    /// Same as [`generate`](Self::generate), with `now` used for the
    /// future-month check and the `generated_on` stamp.
    pub async fn generate_at(
        &self,
        school_id: &str,
        month: &str,
        now: DateTime<Utc>,
    ) -> EngineResult<PayrollRun> {
        self.execute(school_id, month, now, &CancellationToken::new())
            .await
    }

    /// Same as [`generate`](Self::generate), abandoning the run with
    /// `RunCancelled` if `token` is cancelled before the run is persisted.
    pub async fn generate_with_cancellation(
        &self,
        school_id: &str,
        month: &str,
        token: &CancellationToken,
    ) -> EngineResult<PayrollRun> {
        self.execute(school_id, month, Utc::now(), token).await
    }

    async fn execute(
        &self,
        school_id: &str,
        month: &str,
        now: DateTime<Utc>,
        token: &CancellationToken,
    ) -> EngineResult<PayrollRun> {
        let month = parse_payroll_month(month, now.date_naive())?;
        let start_time = Instant::now();
        let cancelled = || EngineError::RunCancelled {
            school_id: school_id.to_string(),
            month: month.to_string(),
        };

        info!(school_id = %school_id, month = %month, "Generating payroll");

        let payroll_data = tokio::select! {
            biased;
            _ = token.cancelled() => {
                warn!(school_id = %school_id, month = %month, "Payroll run cancelled");
                return Err(cancelled());
            }
            result = self.compute_batch(school_id, month) => result.inspect_err(|err| {
                warn!(school_id = %school_id, month = %month, error = %err, "Payroll run failed");
            })?,
        };

        // Last point at which the run can be abandoned without a write.
        if token.is_cancelled() {
            warn!(school_id = %school_id, month = %month, "Payroll run cancelled");
            return Err(cancelled());
        }

        let run = PayrollRun {
            run_id: Uuid::new_v4(),
            school_id: school_id.to_string(),
            month,
            generated_on: now,
            payroll_data,
        };

        self.call(PAYROLL_HISTORY_STORE, self.history.append(run.clone()))
            .await?;

        info!(
            school_id = %school_id,
            month = %month,
            run_id = %run.run_id,
            staff_count = run.payroll_data.len(),
            ok_count = run.ok_count(),
            error_count = run.error_count(),
            duration_us = start_time.elapsed().as_micros(),
            "Payroll run generated"
        );

        Ok(run)
    }

    /// Computes every staff member's entry, ordered by staff id.
    async fn compute_batch(
        &self,
        school_id: &str,
        month: PayrollMonth,
    ) -> Result<Vec<PerEmployeeResult>, StoreError> {
        let mut staff = self
            .call(STAFF_DIRECTORY, self.staff.list_staff(school_id))
            .await?;
        staff.sort_by(|a, b| a.id.cmp(&b.id));

        if staff.is_empty() {
            info!(school_id = %school_id, month = %month, "No staff listed for school");
            return Ok(Vec::new());
        }

        // Zero permits would park every task forever.
        let semaphore = Semaphore::new(self.settings.max_concurrent_fetches.max(1));
        let tasks = staff.iter().map(|member| {
            let semaphore = &semaphore;
            async move {
                let Ok(_permit) = semaphore.acquire().await else {
                    return Err(StoreError::unavailable("worker pool", "closed"));
                };
                self.compute_member(school_id, month, member).await
            }
        });

        // try_join_all keeps input order and drops in-flight fetches on the
        // first store failure.
        try_join_all(tasks).await
    }

    /// Computes one staff member's entry. Only store failures are errors.
    async fn compute_member(
        &self,
        school_id: &str,
        month: PayrollMonth,
        member: &StaffMember,
    ) -> Result<PerEmployeeResult, StoreError> {
        let profile = self
            .call(
                SALARY_PROFILE_STORE,
                self.salaries.get_profile(school_id, &member.id),
            )
            .await?;

        let Some(profile) = profile else {
            warn!(school_id = %school_id, staff_id = %member.id, "No salary structure defined");
            return Ok(PerEmployeeResult::error(member, NO_SALARY_STRUCTURE));
        };

        if let Err(err) = profile.validate() {
            warn!(school_id = %school_id, staff_id = %member.id, error = %err, "Invalid salary profile");
            return Ok(PerEmployeeResult::error(member, err.to_string()));
        }

        let records = self
            .call(
                ATTENDANCE_STORE,
                self.attendance.get_month(school_id, &member.id, month),
            )
            .await?;

        let attendance_summary = match summarize_attendance(
            month,
            &records,
            self.settings.missing_attendance_policy,
        ) {
            Ok(summary) => summary,
            Err(err) => {
                warn!(school_id = %school_id, staff_id = %member.id, error = %err, "Attendance rejected");
                return Ok(PerEmployeeResult::error(member, err.to_string()));
            }
        };

        if attendance_summary.defaulted {
            debug!(
                school_id = %school_id,
                staff_id = %member.id,
                policy = ?self.settings.missing_attendance_policy,
                "No attendance recorded; applied missing-attendance policy"
            );
        }

        let payout = calculate_payout(&profile, &attendance_summary);
        for warning in &payout.warnings {
            warn!(
                school_id = %school_id,
                staff_id = %member.id,
                code = %warning.code,
                "{}",
                warning.message
            );
        }

        Ok(PerEmployeeResult::Ok {
            staff_id: member.id.clone(),
            name: member.name.clone(),
            attendance_summary,
            salary_details: profile,
            payout,
        })
    }

    /// Awaits a store call, bounded by the configured fetch timeout.
    async fn call<T>(
        &self,
        store: &str,
        request: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match tokio::time::timeout(self.settings.fetch_timeout(), request).await {
            Ok(result) => result,
            Err(_) => Err(StoreError::Timeout {
                store: store.to_string(),
                timeout_ms: self.settings.fetch_timeout_ms,
            }),
        }
    }

    /// Lists every stored run for the school, oldest first.
    pub async fn history(&self, school_id: &str) -> EngineResult<Vec<PayrollRun>> {
        let mut runs = self
            .call(PAYROLL_HISTORY_STORE, self.history.list_runs(school_id))
            .await
            .map_err(EngineError::HistoryUnavailable)?;
        runs.sort_by_key(|run| run.generated_on);
        Ok(runs)
    }

    /// Returns the most recently generated run for the school and month.
    pub async fn latest_run(&self, school_id: &str, month: &str) -> EngineResult<PayrollRun> {
        let month: PayrollMonth = month.parse()?;

        self.history(school_id)
            .await?
            .into_iter()
            .rfind(|run| run.month == month)
            .ok_or_else(|| EngineError::PayrollRunNotFound {
                school_id: school_id.to_string(),
                month: month.to_string(),
            })
    }

    /// Looks up one staff member's entry in the latest run for the month.
    pub async fn payslip(
        &self,
        school_id: &str,
        month: &str,
        staff_id: &str,
    ) -> EngineResult<PerEmployeeResult> {
        let run = self.latest_run(school_id, month).await?;

        run.find(staff_id)
            .cloned()
            .ok_or_else(|| EngineError::PayslipNotFound {
                staff_id: staff_id.to_string(),
                month: run.month.to_string(),
            })
    }
}
