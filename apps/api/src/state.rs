use crate::models::employee::Employee;
use crate::models::skill::Skill;
use crate::store::SharedStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Each resource type owns its own store; records are never shared across stores.
#[derive(Clone)]
pub struct AppState {
    pub employees: SharedStore<Employee>,
    pub skills: SharedStore<Skill>,
}
