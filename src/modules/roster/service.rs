use anyhow::anyhow;
use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use rollcall_config::AirtableFieldNames;
use rollcall_core::{AppError, classroom_id, school_id};
use rollcall_db::{DocPath, DocumentStore, Fields, Write, WriteBatch, encode, fields, string_values};
use rollcall_models::{Classroom, School, Semester, Teacher};
use rollcall_roster::{RosterRecord, RosterSource, TeacherRow};

use crate::metrics;
use crate::modules::semesters::service::semester_not_found;

use super::model::{ImportSummary, LinkTeacherRequest, LinkTeacherResponse};

/// Where a linked teacher works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchoolRef {
    /// A school document that must already exist.
    Existing(String),
    /// A school identified by its address, created or merged on link.
    Address { name: String, address: String },
}

impl SchoolRef {
    pub fn id(&self) -> String {
        match self {
            SchoolRef::Existing(id) => id.clone(),
            SchoolRef::Address { address, .. } => school_id(address),
        }
    }
}

/// Everything needed to link one teacher into a semester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherLink {
    pub semester_id: String,
    pub teacher_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub school: SchoolRef,
}

impl TeacherLink {
    pub fn from_row(semester_id: &str, row: TeacherRow) -> Self {
        Self {
            semester_id: semester_id.to_string(),
            teacher_id: row.teacher_id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            school: SchoolRef::Address {
                name: row.school_name,
                address: row.school_address,
            },
        }
    }
}

impl TryFrom<LinkTeacherRequest> for TeacherLink {
    type Error = AppError;

    fn try_from(dto: LinkTeacherRequest) -> Result<Self, Self::Error> {
        let school = match (dto.school_id, dto.school_address) {
            (None, Some(address)) => SchoolRef::Address {
                name: dto.school_name.unwrap_or_else(|| address.clone()),
                address,
            },
            (Some(id), None) => SchoolRef::Existing(id),
            (Some(_), Some(_)) => {
                return Err(AppError::bad_request(anyhow!(
                    "Provide either school_id or school_address, not both."
                )));
            }
            (None, None) => return Err(AppError::missing_fields(&["school_address"])),
        };

        Ok(Self {
            semester_id: dto.semester_id,
            teacher_id: dto.teacher_id,
            name: dto.name,
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            school,
        })
    }
}

/// The writes that link one teacher, in commit order.
pub fn link_writes(link: &TeacherLink) -> Result<(Vec<Write>, LinkTeacherResponse), AppError> {
    let school_id = link.school.id();
    let classroom_id = classroom_id(&link.semester_id, &link.teacher_id);
    let teacher_ids = || string_values([&*link.teacher_id]);

    let semester = Write::update(DocPath::of::<Semester>(&link.semester_id)?, Fields::new())
        .array_union("teachers", teacher_ids())
        .array_union("schools", string_values([&*school_id]));

    let teacher = Teacher {
        id: link.teacher_id.clone(),
        name: link.name.clone(),
        email: link.email.clone(),
        phone: link.phone.clone(),
        school: Some(school_id.clone()),
        semester: Some(link.semester_id.clone()),
    };
    let teacher = Write::set(DocPath::of::<Teacher>(&link.teacher_id)?, encode(&teacher)?);

    let school_path = DocPath::of::<School>(&school_id)?;
    let school = match &link.school {
        SchoolRef::Existing(_) => Write::update(school_path, Fields::new()),
        SchoolRef::Address { name, address } => Write::merge(
            school_path,
            fields(json!({ "name": name, "address": address.trim() }))?,
        ),
    }
    .array_union("teachers", teacher_ids());

    // Merged so a re-link keeps the students already enrolled.
    let classroom = Write::merge(
        DocPath::of::<Classroom>(&classroom_id)?,
        fields(json!({
            "school": school_id,
            "semester": link.semester_id,
            "teacher": link.teacher_id,
        }))?,
    )
    .array_union("students", Vec::new());

    Ok((
        vec![semester, teacher, school, classroom],
        LinkTeacherResponse {
            classroom_id,
            school_id,
        },
    ))
}

pub struct RosterService;

impl RosterService {
    /// Links a teacher into a semester with one atomic batch: the semester
    /// gains the teacher and school, the teacher document is replaced, the
    /// school gains the teacher and the classroom is created with an empty
    /// roster, or keeps its roster when it already exists. Fails with 404
    /// when the semester does not exist.
    #[instrument(skip(store, link), fields(semester.id = %link.semester_id, teacher.id = %link.teacher_id))]
    pub async fn link_teacher(
        store: &dyn DocumentStore,
        link: &TeacherLink,
    ) -> Result<LinkTeacherResponse, AppError> {
        let (writes, response) = link_writes(link)?;
        WriteBatch::from(writes).commit(store).await?;

        metrics::track_teacher_linked();
        info!(classroom.id = %response.classroom_id, "Teacher linked to semester");
        Ok(response)
    }

    /// Links every teacher of a spreadsheet view. Records without a name
    /// or school address are skipped. The first failing link aborts the
    /// import; teachers linked before it stay linked.
    #[instrument(skip(store, roster, names))]
    pub async fn import_teachers(
        store: &dyn DocumentStore,
        roster: &dyn RosterSource,
        names: &AirtableFieldNames,
        semester_id: &str,
        view: &str,
    ) -> Result<ImportSummary, AppError> {
        if store.fetch::<Semester>(semester_id).await?.is_none() {
            return Err(semester_not_found());
        }

        let records = roster.list_records(view).await?;
        info!(records = records.len(), "Importing teachers");

        let mut summary = ImportSummary::default();
        for record in &records {
            let row = match TeacherRow::from_record(record, names) {
                Ok(row) => row,
                Err(skipped) => {
                    warn!(record.id = %skipped.record_id, missing = ?skipped.missing, "Skipping roster record");
                    summary.skipped.push(skipped);
                    continue;
                }
            };

            let link = TeacherLink::from_row(semester_id, row);
            let linked = Self::link_teacher(store, &link).await?;
            summary.classrooms.push(linked.classroom_id);
        }

        metrics::track_import(summary.classrooms.len(), summary.skipped.len());
        info!(
            classrooms = summary.classrooms.len(),
            skipped = summary.skipped.len(),
            "Teacher import finished"
        );
        Ok(summary)
    }

    /// Removes the teacher from the semester and clears the teacher's
    /// semester reference. Both documents must exist.
    #[instrument(skip(store))]
    pub async fn unlink_teacher(
        store: &dyn DocumentStore,
        semester_id: &str,
        teacher_id: &str,
    ) -> Result<(), AppError> {
        let mut batch = WriteBatch::new();
        batch
            .push(
                Write::update(DocPath::of::<Semester>(semester_id)?, Fields::new())
                    .array_remove("teachers", string_values([teacher_id])),
            )
            .push(Write::update(
                DocPath::of::<Teacher>(teacher_id)?,
                fields(json!({ "semester": Value::Null }))?,
            ));
        batch.commit(store).await?;

        info!("Teacher successfully removed from semester");
        Ok(())
    }

    #[instrument(skip(roster))]
    pub async fn find_teacher(
        roster: &dyn RosterSource,
        teacher_id: &str,
    ) -> Result<RosterRecord, AppError> {
        roster.find_record(teacher_id).await?.ok_or_else(|| {
            AppError::not_found(anyhow!("Teacher with ID '{}' not found.", teacher_id))
        })
    }

    #[instrument(skip(roster))]
    pub async fn list_teachers(
        roster: &dyn RosterSource,
        view: &str,
    ) -> Result<Vec<RosterRecord>, AppError> {
        Ok(roster.list_records(view).await?)
    }
}
