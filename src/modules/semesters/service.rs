use anyhow::anyhow;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use rollcall_core::AppError;
use rollcall_db::{DocPath, DocumentStore, Fields, Write, WriteBatch, encode, string_values};
use rollcall_models::{Semester, User, UserSummary};

use super::model::{CreateSemesterRequest, SemesterStudentRequest, SemesterStudentsResponse};

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::bad_request(anyhow!("Invalid {}: expected a YYYY-MM-DD date.", field))
    })
}

pub fn semester_not_found() -> AppError {
    AppError::not_found(anyhow!("Semester not found"))
}

pub struct SemesterService;

impl SemesterService {
    /// Writes the semester document, replacing any existing one.
    #[instrument(skip(store), fields(semester.id = %dto.semester_id))]
    pub async fn create_semester(
        store: &dyn DocumentStore,
        dto: &CreateSemesterRequest,
    ) -> Result<Semester, AppError> {
        let start = parse_date("start_date", &dto.start_date)?;
        let end = parse_date("end_date", &dto.end_date)?;
        if end < start {
            return Err(AppError::bad_request(anyhow!(
                "end_date must not be before start_date."
            )));
        }

        let semester = Semester {
            id: dto.semester_id.clone(),
            semester_name: dto.semester_name.clone(),
            start_date: start.format(DATE_FORMAT).to_string(),
            end_date: end.format(DATE_FORMAT).to_string(),
            ..Default::default()
        };

        let path = DocPath::of::<Semester>(&semester.id)?;
        store.apply(Write::set(path, encode(&semester)?)).await?;

        info!("Semester document successfully written");
        Ok(semester)
    }

    #[instrument(skip(store))]
    pub async fn get_semester(
        store: &dyn DocumentStore,
        semester_id: &str,
    ) -> Result<Semester, AppError> {
        store
            .fetch::<Semester>(semester_id)
            .await?
            .ok_or_else(semester_not_found)
    }

    #[instrument(skip(store))]
    pub async fn list_semesters(store: &dyn DocumentStore) -> Result<Vec<Semester>, AppError> {
        Ok(store.fetch_all::<Semester>().await?)
    }

    /// Deletes the semester document only. References held by teachers,
    /// users and classrooms are left in place.
    #[instrument(skip(store))]
    pub async fn delete_semester(
        store: &dyn DocumentStore,
        semester_id: &str,
    ) -> Result<(), AppError> {
        let path = DocPath::of::<Semester>(semester_id)?;
        store.apply(Write::delete(path)).await?;
        info!("Semester successfully removed");
        Ok(())
    }

    /// Links a user and a semester in both directions. Both documents must exist.
    #[instrument(skip(store), fields(semester.id = %dto.semester_id, user.id = %dto.student_id))]
    pub async fn add_student(
        store: &dyn DocumentStore,
        dto: &SemesterStudentRequest,
    ) -> Result<(), AppError> {
        let mut batch = WriteBatch::new();
        batch
            .push(
                Write::update(DocPath::of::<User>(&dto.student_id)?, Fields::new())
                    .array_union("active_semesters", string_values([&*dto.semester_id])),
            )
            .push(
                Write::update(DocPath::of::<Semester>(&dto.semester_id)?, Fields::new())
                    .array_union("students", string_values([&*dto.student_id])),
            );
        batch.commit(store).await?;

        info!("Student added to semester");
        Ok(())
    }

    #[instrument(skip(store), fields(semester.id = %dto.semester_id, user.id = %dto.student_id))]
    pub async fn remove_student(
        store: &dyn DocumentStore,
        dto: &SemesterStudentRequest,
    ) -> Result<(), AppError> {
        let mut batch = WriteBatch::new();
        batch
            .push(
                Write::update(DocPath::of::<User>(&dto.student_id)?, Fields::new())
                    .array_remove("active_semesters", string_values([&*dto.semester_id])),
            )
            .push(
                Write::update(DocPath::of::<Semester>(&dto.semester_id)?, Fields::new())
                    .array_remove("students", string_values([&*dto.student_id])),
            );
        batch.commit(store).await?;

        info!("Student successfully removed from semester");
        Ok(())
    }

    /// Profiles of the semester's students. IDs without a profile are skipped.
    #[instrument(skip(store))]
    pub async fn semester_students(
        store: &dyn DocumentStore,
        semester_id: &str,
    ) -> Result<SemesterStudentsResponse, AppError> {
        let semester = Self::get_semester(store, semester_id).await?;

        let mut students = Vec::with_capacity(semester.students.len());
        for student_id in &semester.students {
            match store.fetch::<User>(student_id).await? {
                Some(user) => students.push(UserSummary::from(user)),
                None => debug!(user.id = %student_id, "Semester references a missing user"),
            }
        }

        Ok(SemesterStudentsResponse {
            semester_id: semester.id,
            students,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        let date = parse_date("start_date", " 2024-09-01 ").unwrap();
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2024-09-01");
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        for value in ["09/01/2024", "2024-13-01", "soon"] {
            let err = parse_date("end_date", value).unwrap_err();
            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), "Invalid end_date: expected a YYYY-MM-DD date.");
        }
    }
}
