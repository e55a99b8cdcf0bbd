pub mod course_modules;
pub mod grades;
pub mod students;
pub mod tutors;
