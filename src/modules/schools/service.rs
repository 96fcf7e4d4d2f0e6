use anyhow::anyhow;
use serde_json::json;
use tracing::{debug, info, instrument};

use rollcall_core::{AppError, school_id};
use rollcall_db::{DocPath, DocumentStore, Fields, Write, WriteBatch, fields, string_values};
use rollcall_models::{School, Semester};

use crate::modules::semesters::service::SemesterService;

use super::model::AddSemesterSchoolRequest;

pub struct SchoolService;

impl SchoolService {
    /// Merges the school keyed by the hash of its address and adds it to
    /// the semester. The semester must exist.
    #[instrument(skip(store), fields(semester.id = %dto.semester_id))]
    pub async fn add_semester_school(
        store: &dyn DocumentStore,
        dto: &AddSemesterSchoolRequest,
    ) -> Result<String, AppError> {
        let address = dto.address.trim();
        let id = school_id(address);

        let mut batch = WriteBatch::new();
        batch
            .push(Write::merge(
                DocPath::of::<School>(&id)?,
                fields(json!({ "name": dto.name, "address": address }))?,
            ))
            .push(
                Write::update(DocPath::of::<Semester>(&dto.semester_id)?, Fields::new())
                    .array_union("schools", string_values([&*id])),
            );
        batch.commit(store).await?;

        info!(school.id = %id, "School added to semester");
        Ok(id)
    }

    #[instrument(skip(store))]
    pub async fn get_school(store: &dyn DocumentStore, school_id: &str) -> Result<School, AppError> {
        store
            .fetch::<School>(school_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("School not found")))
    }

    /// Schools listed on the semester. IDs without a document are skipped.
    #[instrument(skip(store))]
    pub async fn semester_schools(
        store: &dyn DocumentStore,
        semester_id: &str,
    ) -> Result<Vec<School>, AppError> {
        let semester = SemesterService::get_semester(store, semester_id).await?;

        let mut schools = Vec::with_capacity(semester.schools.len());
        for id in &semester.schools {
            match store.fetch::<School>(id).await? {
                Some(school) => schools.push(school),
                None => debug!(school.id = %id, "Semester references a missing school"),
            }
        }
        Ok(schools)
    }
}
