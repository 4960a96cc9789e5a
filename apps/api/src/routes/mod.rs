pub mod employees;
pub mod health;
pub mod skills;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

async fn root_handler() -> &'static str {
    "Employee Management System - Your one stop solution for your employees"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        // Employee API
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/:id",
            put(employees::update_employee).delete(employees::delete_employee),
        )
        .route("/employees/search/name/:name", get(employees::search_by_name))
        .route(
            "/employees/search/surname/:surname",
            get(employees::search_by_surname),
        )
        .route(
            "/employees/search/skill/:skill",
            get(employees::search_by_skill),
        )
        // Skill API
        .route("/skills", get(skills::list_skills).post(skills::create_skill))
        .route(
            "/skills/:id",
            put(skills::update_skill).delete(skills::delete_skill),
        )
        .with_state(state)
}
