//! In-memory store backend.
//!
//! [`InMemoryStore`] implements every store trait over shared maps. It backs
//! the bundled server and the test suites, and can be seeded from a YAML file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{EngineError, EngineResult, StoreError};
use crate::models::{AttendanceDay, PayrollMonth, PayrollRun, SalaryProfile, StaffMember};

use super::{AttendanceStore, PayrollHistoryStore, SalaryProfileStore, StaffDirectory};

/// Seed data for one staff member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedStaff {
    /// Staff identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Salary profile, if HR has defined one.
    #[serde(default)]
    pub salary: Option<SalaryProfile>,
    /// Attendance records across any months.
    #[serde(default)]
    pub attendance: Vec<AttendanceDay>,
}

/// Seed data for one school.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedSchool {
    /// The school's staff.
    #[serde(default)]
    pub staff: Vec<SeedStaff>,
}

/// Top-level seed file layout, keyed by school id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    /// Schools keyed by id.
    #[serde(default)]
    pub schools: HashMap<String, SeedSchool>,
}

#[derive(Debug, Default)]
struct SchoolData {
    staff: Vec<StaffMember>,
    profiles: HashMap<String, SalaryProfile>,
    attendance: HashMap<String, Vec<AttendanceDay>>,
    runs: Vec<PayrollRun>,
}

/// Thread-safe in-memory implementation of all store traits.
///
/// Clones share the same data.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayComponent, SalaryProfile, StaffMember};
/// use payroll_engine::store::{InMemoryStore, SalaryProfileStore};
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryStore::new();
/// store.add_staff("school_1", StaffMember::new("t1", "Asha Rao")).await;
/// store
///     .set_profile("school_1", "t1", SalaryProfile {
///         basic_salary: Decimal::from(30000),
///         allowances: vec![PayComponent::new("HRA", Decimal::from(5000))],
///         deductions: vec![],
///     })
///     .await;
///
/// let profile = store.get_profile("school_1", "t1").await.unwrap();
/// assert!(profile.is_some());
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    schools: Arc<RwLock<HashMap<String, SchoolData>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from parsed seed data.
    pub fn from_seed(seed: SeedFile) -> Self {
        let schools = seed
            .schools
            .into_iter()
            .map(|(school_id, school)| {
                let mut data = SchoolData::default();
                for staff in school.staff {
                    if let Some(profile) = staff.salary {
                        data.profiles.insert(staff.id.clone(), profile);
                    }
                    data.attendance.insert(staff.id.clone(), staff.attendance);
                    data.staff.push(StaffMember::new(staff.id, staff.name));
                }
                (school_id, data)
            })
            .collect();

        Self {
            schools: Arc::new(RwLock::new(schools)),
        }
    }

    /// Loads seed data from a YAML file.
    pub fn load_seed<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path_str = path.as_ref().display().to_string();

        let content = fs::read_to_string(path.as_ref()).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let seed: SeedFile =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self::from_seed(seed))
    }

    /// Adds a staff member to a school's directory.
    pub async fn add_staff(&self, school_id: &str, staff: StaffMember) {
        let mut schools = self.schools.write().await;
        schools
            .entry(school_id.to_string())
            .or_default()
            .staff
            .push(staff);
    }

    /// Creates or overwrites a staff member's salary profile.
    pub async fn set_profile(&self, school_id: &str, staff_id: &str, profile: SalaryProfile) {
        let mut schools = self.schools.write().await;
        schools
            .entry(school_id.to_string())
            .or_default()
            .profiles
            .insert(staff_id.to_string(), profile);
    }

    /// Records attendance days for a staff member.
    pub async fn record_attendance(
        &self,
        school_id: &str,
        staff_id: &str,
        days: impl IntoIterator<Item = AttendanceDay>,
    ) {
        let mut schools = self.schools.write().await;
        schools
            .entry(school_id.to_string())
            .or_default()
            .attendance
            .entry(staff_id.to_string())
            .or_default()
            .extend(days);
    }
}

#[async_trait]
impl StaffDirectory for InMemoryStore {
    async fn list_staff(&self, school_id: &str) -> Result<Vec<StaffMember>, StoreError> {
        let schools = self.schools.read().await;
        Ok(schools
            .get(school_id)
            .map(|school| school.staff.clone())
            .unwrap_or_default())
    }
}

#[async_trait]
impl SalaryProfileStore for InMemoryStore {
    async fn get_profile(
        &self,
        school_id: &str,
        staff_id: &str,
    ) -> Result<Option<SalaryProfile>, StoreError> {
        let schools = self.schools.read().await;
        Ok(schools
            .get(school_id)
            .and_then(|school| school.profiles.get(staff_id).cloned()))
    }
}

#[async_trait]
impl AttendanceStore for InMemoryStore {
    async fn get_month(
        &self,
        school_id: &str,
        staff_id: &str,
        month: PayrollMonth,
    ) -> Result<Vec<AttendanceDay>, StoreError> {
        let schools = self.schools.read().await;
        let mut days: Vec<AttendanceDay> = schools
            .get(school_id)
            .and_then(|school| school.attendance.get(staff_id))
            .map(|days| days.iter().filter(|d| month.contains(d.date)).copied().collect())
            .unwrap_or_default();
        days.sort_by_key(|d| d.date);
        Ok(days)
    }
}

#[async_trait]
impl PayrollHistoryStore for InMemoryStore {
    async fn append(&self, run: PayrollRun) -> Result<(), StoreError> {
        let mut schools = self.schools.write().await;
        schools
            .entry(run.school_id.clone())
            .or_default()
            .runs
            .push(run);
        Ok(())
    }

    async fn list_runs(&self, school_id: &str) -> Result<Vec<PayrollRun>, StoreError> {
        let schools = self.schools.read().await;
        Ok(schools
            .get(school_id)
            .map(|school| school.runs.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const SEED: &str = r#"
schools:
  school_1:
    staff:
      - id: t1
        name: Asha Rao
        salary:
          basic_salary: "30000"
          allowances:
            - { name: HRA, amount: "5000" }
        attendance:
          - { date: 2026-09-01, status: present }
          - { date: 2026-08-31, status: absent }
      - id: t2
        name: Ben Okafor
"#;

    fn seeded() -> InMemoryStore {
        InMemoryStore::from_seed(serde_yaml::from_str(SEED).unwrap())
    }

    #[tokio::test]
    async fn test_seed_populates_directory_and_profiles() {
        let store = seeded();

        let staff = store.list_staff("school_1").await.unwrap();
        assert_eq!(staff.len(), 2);
        assert_eq!(staff[0], StaffMember::new("t1", "Asha Rao"));

        let profile = store.get_profile("school_1", "t1").await.unwrap().unwrap();
        assert_eq!(profile.basic_salary, Decimal::from(30000));
        assert!(store.get_profile("school_1", "t2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_month_filters_to_month() {
        let store = seeded();
        let september = PayrollMonth::new(2026, 9).unwrap();

        let days = store.get_month("school_1", "t1", september).await.unwrap();
        assert_eq!(days, vec![AttendanceDay::new(date(2026, 9, 1), AttendanceStatus::Present)]);

        let none = store.get_month("school_1", "t2", september).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_school_is_empty_not_an_error() {
        let store = InMemoryStore::new();
        assert!(store.list_staff("missing").await.unwrap().is_empty());
        assert!(store.list_runs("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_profiles_are_overwritten_in_place() {
        let store = InMemoryStore::new();
        let profile = |basic: i64| SalaryProfile {
            basic_salary: Decimal::from(basic),
            allowances: vec![],
            deductions: vec![],
        };

        store.set_profile("s", "t1", profile(100)).await;
        store.set_profile("s", "t1", profile(200)).await;

        let stored = store.get_profile("s", "t1").await.unwrap().unwrap();
        assert_eq!(stored.basic_salary, Decimal::from(200));
    }

    #[tokio::test]
    async fn test_append_keeps_every_run() {
        let store = InMemoryStore::new();
        let run = PayrollRun {
            run_id: Uuid::new_v4(),
            school_id: "school_1".to_string(),
            month: PayrollMonth::new(2026, 9).unwrap(),
            generated_on: Utc::now(),
            payroll_data: vec![],
        };

        store.append(run.clone()).await.unwrap();
        store.append(run.clone()).await.unwrap();

        assert_eq!(store.list_runs("school_1").await.unwrap().len(), 2);
    }

    #[test]
    fn test_load_seed_missing_file() {
        let result = InMemoryStore::load_seed("/nonexistent/seed.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }
}
