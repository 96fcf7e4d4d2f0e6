use anyhow::anyhow;
use tracing::{info, instrument};

use rollcall_core::{AppError, classroom_id};
use rollcall_db::{DocPath, DocumentStore, Fields, Write, WriteBatch, encode, string_values};
use rollcall_models::{Classroom, User};

use super::model::{ClassroomStudentRequest, CreateClassroomRequest};

fn classroom_not_found() -> AppError {
    AppError::not_found(anyhow!("Classroom not found"))
}

pub struct ClassroomService;

impl ClassroomService {
    /// Writes the classroom keyed by `hash(semester_id ‖ teacher_id)`.
    /// An existing classroom with the same key has its roster reset.
    #[instrument(skip(store))]
    pub async fn create_classroom(
        store: &dyn DocumentStore,
        dto: &CreateClassroomRequest,
    ) -> Result<String, AppError> {
        let classroom = Classroom {
            id: classroom_id(&dto.semester_id, &dto.teacher_id),
            school: dto.school_id.clone(),
            semester: dto.semester_id.clone(),
            teacher: dto.teacher_id.clone(),
            students: Vec::new(),
        };

        let path = DocPath::of::<Classroom>(&classroom.id)?;
        store.apply(Write::set(path, encode(&classroom)?)).await?;

        info!(classroom.id = %classroom.id, "Classroom document successfully written");
        Ok(classroom.id)
    }

    #[instrument(skip(store))]
    pub async fn get_classroom(
        store: &dyn DocumentStore,
        classroom_id: &str,
    ) -> Result<Classroom, AppError> {
        store
            .fetch::<Classroom>(classroom_id)
            .await?
            .ok_or_else(classroom_not_found)
    }

    /// Adds the student to the classroom roster and the classroom's teacher
    /// to the student's `teacher_ids`.
    #[instrument(skip(store), fields(classroom.id = %dto.classroom_id, user.id = %dto.student_id))]
    pub async fn add_student(
        store: &dyn DocumentStore,
        dto: &ClassroomStudentRequest,
    ) -> Result<(), AppError> {
        let classroom = Self::get_classroom(store, &dto.classroom_id).await?;

        let mut batch = WriteBatch::new();
        batch
            .push(
                Write::update(DocPath::of::<Classroom>(&classroom.id)?, Fields::new())
                    .array_union("students", string_values([&*dto.student_id])),
            )
            .push(
                Write::update(DocPath::of::<User>(&dto.student_id)?, Fields::new())
                    .array_union("teacher_ids", string_values([classroom.teacher])),
            );
        batch.commit(store).await?;

        info!("Student added to classroom");
        Ok(())
    }

    /// Deletes the classroom document only.
    #[instrument(skip(store))]
    pub async fn delete_classroom(
        store: &dyn DocumentStore,
        classroom_id: &str,
    ) -> Result<(), AppError> {
        let path = DocPath::of::<Classroom>(classroom_id)?;
        store.apply(Write::delete(path)).await?;
        info!("Classroom successfully removed");
        Ok(())
    }
}
