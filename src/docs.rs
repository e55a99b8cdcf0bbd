//! OpenAPI documentation for the Markbook API.

use utoipa::OpenApi;

use markbook_models::course_modules::{CreateModuleDto, Module};
use markbook_models::grades::{CreateGradeDto, Grade, UpdateGradeDto};
use markbook_models::grading::Classification;
use markbook_models::students::{CreateStudentDto, StudentResponse};
use markbook_models::tutors::{CreateTutorDto, Tutor};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::tutors::controller::create_tutor,
        crate::modules::tutors::controller::get_tutors,
        crate::modules::tutors::controller::get_tutor,
        crate::modules::course_modules::controller::create_module,
        crate::modules::course_modules::controller::get_modules,
        crate::modules::course_modules::controller::get_module,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_student_grades,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::get_module_grades,
        crate::modules::grades::controller::update_grade,
    ),
    components(
        schemas(
            Tutor,
            CreateTutorDto,
            Module,
            CreateModuleDto,
            StudentResponse,
            CreateStudentDto,
            Grade,
            CreateGradeDto,
            UpdateGradeDto,
            Classification,
        )
    ),
    tags(
        (name = "Tutors", description = "Tutor management endpoints"),
        (name = "Modules", description = "Course module management endpoints"),
        (name = "Students", description = "Student management and derived grade summaries"),
        (name = "Grades", description = "Grade recording and updates"),
    )
)]
pub struct ApiDoc;
