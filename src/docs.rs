use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use rollcall_models::{Classroom, School, Semester, Teacher, User, UserSummary};
use rollcall_roster::{RosterRecord, SkippedRecord};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    AuthResponse, CurrentUserResponse, IsAdminResponse, LoginRequest, RegisterRequest,
    ResetRequest,
};
use crate::modules::classrooms::model::{
    ClassroomIdRequest, ClassroomIdResponse, ClassroomStudentRequest, CreateClassroomRequest,
};
use crate::modules::health::controller::HealthResponse;
use crate::modules::roster::model::{
    ImportSummary, ImportTeachersRequest, LinkTeacherRequest, LinkTeacherResponse,
    SemesterTeacherRequest, TeacherListRequest, TeacherListResponse, TeacherRecordRequest,
    TeacherRecordResponse,
};
use crate::modules::schools::model::{AddSemesterSchoolRequest, SchoolIdRequest, SchoolIdResponse};
use crate::modules::semesters::model::{
    CreateSemesterRequest, SemesterIdRequest, SemesterStudentRequest, SemesterStudentsResponse,
};
use crate::modules::teachers::model::{CreateTeacherRequest, TeacherIdRequest};
use crate::modules::users::model::{CreateUserRequest, UserIdRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::auth::controller::register,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::logout,
        crate::modules::auth::controller::reset_password,
        crate::modules::auth::controller::current_user,
        crate::modules::auth::controller::is_admin,
        crate::modules::auth::controller::delete_current_user,
        crate::modules::semesters::controller::create_semester,
        crate::modules::semesters::controller::get_semester,
        crate::modules::semesters::controller::list_semesters,
        crate::modules::semesters::controller::delete_semester,
        crate::modules::semesters::controller::add_semester_student,
        crate::modules::semesters::controller::remove_semester_student,
        crate::modules::semesters::controller::semester_students,
        crate::modules::roster::controller::link_teacher,
        crate::modules::roster::controller::import_teachers,
        crate::modules::roster::controller::unlink_teacher,
        crate::modules::roster::controller::get_teacher,
        crate::modules::roster::controller::list_teachers,
        crate::modules::schools::controller::add_semester_school,
        crate::modules::schools::controller::semester_schools,
        crate::modules::schools::controller::get_school,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::classrooms::controller::create_classroom,
        crate::modules::classrooms::controller::add_classroom_student,
        crate::modules::classrooms::controller::get_classroom,
        crate::modules::classrooms::controller::delete_classroom,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::teacher_students,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            ResetRequest,
            AuthResponse,
            CurrentUserResponse,
            IsAdminResponse,
            Semester,
            CreateSemesterRequest,
            SemesterIdRequest,
            SemesterStudentRequest,
            SemesterStudentsResponse,
            Teacher,
            CreateTeacherRequest,
            TeacherIdRequest,
            LinkTeacherRequest,
            LinkTeacherResponse,
            ImportTeachersRequest,
            ImportSummary,
            SkippedRecord,
            SemesterTeacherRequest,
            TeacherRecordRequest,
            TeacherRecordResponse,
            TeacherListRequest,
            TeacherListResponse,
            RosterRecord,
            School,
            AddSemesterSchoolRequest,
            SchoolIdRequest,
            SchoolIdResponse,
            Classroom,
            CreateClassroomRequest,
            ClassroomIdRequest,
            ClassroomIdResponse,
            ClassroomStudentRequest,
            User,
            UserSummary,
            CreateUserRequest,
            UserIdRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "Account registration, sign-in and session endpoints"),
        (name = "Semesters", description = "Semester documents and enrollment"),
        (name = "Roster", description = "Teacher import and semester links"),
        (name = "Schools", description = "School documents"),
        (name = "Teachers", description = "Teacher documents"),
        (name = "Classrooms", description = "Classroom documents and rosters"),
        (name = "Users", description = "User profiles")
    ),
    info(
        title = "Rollcall API",
        version = "0.1.0",
        description = "School, semester and roster management over Firestore, Firebase Auth and Airtable.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("The account UID returned by register or login"))
                        .build(),
                ),
            )
        }
    }
}
