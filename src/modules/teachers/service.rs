use tracing::{info, instrument};

use rollcall_core::AppError;
use rollcall_db::{DocPath, DocumentStore, Write, encode};
use rollcall_models::Teacher;

use super::model::CreateTeacherRequest;

pub struct TeacherService;

impl TeacherService {
    /// Writes a teacher document without touching semesters, schools or
    /// classrooms. Use the roster link to keep those in step.
    #[instrument(skip(store), fields(teacher.id = %dto.teacher_id))]
    pub async fn create_teacher(
        store: &dyn DocumentStore,
        dto: CreateTeacherRequest,
    ) -> Result<Teacher, AppError> {
        let teacher = Teacher {
            id: dto.teacher_id,
            name: dto.name,
            email: dto.email.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            school: dto.school_id,
            semester: dto.semester_id,
        };

        let path = DocPath::of::<Teacher>(&teacher.id)?;
        store.apply(Write::set(path, encode(&teacher)?)).await?;

        info!("Teacher document successfully written");
        Ok(teacher)
    }

    /// Deletes the teacher document only.
    #[instrument(skip(store))]
    pub async fn delete_teacher(store: &dyn DocumentStore, teacher_id: &str) -> Result<(), AppError> {
        let path = DocPath::of::<Teacher>(teacher_id)?;
        store.apply(Write::delete(path)).await?;
        info!("Teacher successfully removed");
        Ok(())
    }
}
