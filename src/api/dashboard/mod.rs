use actix_web::{web, Scope};

pub(crate) mod controller;
pub(crate) mod dtos;
mod error;
mod repo;

pub(crate) fn dashboard_module() -> Scope {
    web::scope("")
        .route("/teachers", web::get().to(controller::list_teachers))
        .route("/teachers/{teacher_id}", web::get().to(controller::get_teacher))
        .route("/classes", web::get().to(controller::list_classes))
        .route("/subjects", web::get().to(controller::list_subjects))
        .route("/assignments", web::get().to(controller::list_assignments))
        .route("/attendance", web::get().to(controller::list_attendance))
        .route("/schedule", web::get().to(controller::list_schedule))
        .route("/performance", web::get().to(controller::performance_overview))
}
