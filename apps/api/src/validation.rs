//! Payload validation for the two resource types.
//!
//! Both validators are pure functions over the raw JSON payload. Rules are
//! checked in a fixed order (presence, type, non-blank, skills shape) and the
//! first violated rule is the single error reported.

use serde_json::Value;
use thiserror::Error;

pub const EMPLOYEE_REQUIRED: &str = "Name and surname are required fields";
pub const EMPLOYEE_NOT_STRINGS: &str = "Name and surname must be strings";
pub const EMPLOYEE_EMPTY: &str = "Name and surname cannot be empty";
pub const SKILLS_NOT_ARRAY: &str = "Skills must be an array";

pub const SKILL_REQUIRED: &str = "Name, description and category are required fields";
pub const SKILL_NOT_STRINGS: &str = "Name, description and category must be strings";
pub const SKILL_EMPTY: &str = "Name, description and category cannot be empty";

/// A rejected payload. Carries the message of the first violated rule; the
/// "Validation Error" category label is attached at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(&'static str);

impl ValidationError {
    pub fn message(&self) -> &'static str {
        self.0
    }
}

/// A field counts as present only when it exists and is not JSON null.
/// Non-object payloads have no fields present at all.
fn present<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.get(key).filter(|v| !v.is_null())
}

pub fn validate_employee(payload: &Value) -> Result<(), ValidationError> {
    let (Some(name), Some(surname)) = (present(payload, "name"), present(payload, "surname"))
    else {
        return Err(ValidationError(EMPLOYEE_REQUIRED));
    };

    let (Some(name), Some(surname)) = (name.as_str(), surname.as_str()) else {
        return Err(ValidationError(EMPLOYEE_NOT_STRINGS));
    };

    if name.trim().is_empty() || surname.trim().is_empty() {
        return Err(ValidationError(EMPLOYEE_EMPTY));
    }

    // Element types are deliberately left unchecked.
    if let Some(skills) = present(payload, "skills") {
        if !skills.is_array() {
            return Err(ValidationError(SKILLS_NOT_ARRAY));
        }
    }

    Ok(())
}

pub fn validate_skill(payload: &Value) -> Result<(), ValidationError> {
    let (Some(name), Some(description), Some(category)) = (
        present(payload, "name"),
        present(payload, "description"),
        present(payload, "category"),
    ) else {
        return Err(ValidationError(SKILL_REQUIRED));
    };

    let (Some(name), Some(description), Some(category)) =
        (name.as_str(), description.as_str(), category.as_str())
    else {
        return Err(ValidationError(SKILL_NOT_STRINGS));
    };

    if name.trim().is_empty() || description.trim().is_empty() || category.trim().is_empty() {
        return Err(ValidationError(SKILL_EMPTY));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn employee_err(payload: Value) -> &'static str {
        validate_employee(&payload).unwrap_err().message()
    }

    fn skill_err(payload: Value) -> &'static str {
        validate_skill(&payload).unwrap_err().message()
    }

    #[test]
    fn accepts_a_complete_employee() {
        let payload = json!({
            "name": "Marios",
            "surname": "Spanos",
            "skills": ["Workshop", "Public speaking"]
        });
        assert_eq!(validate_employee(&payload), Ok(()));
    }

    #[test]
    fn accepts_an_employee_without_skills() {
        assert_eq!(
            validate_employee(&json!({ "name": "Nikos", "surname": "Andreou" })),
            Ok(())
        );
    }

    #[test]
    fn rejects_missing_required_fields() {
        assert_eq!(employee_err(json!({ "surname": "Papakostas" })), EMPLOYEE_REQUIRED);
        assert_eq!(employee_err(json!({ "name": "Giorgos" })), EMPLOYEE_REQUIRED);
        assert_eq!(employee_err(json!({})), EMPLOYEE_REQUIRED);
    }

    #[test]
    fn explicit_null_counts_as_missing() {
        assert_eq!(
            employee_err(json!({ "name": null, "surname": "Markatos" })),
            EMPLOYEE_REQUIRED
        );
    }

    #[test]
    fn presence_is_checked_before_type() {
        // Missing name AND non-string surname: the presence rule wins.
        assert_eq!(employee_err(json!({ "surname": 42 })), EMPLOYEE_REQUIRED);
    }

    #[test]
    fn rejects_non_string_fields() {
        assert_eq!(
            employee_err(json!({ "name": 1, "surname": "Markatos" })),
            EMPLOYEE_NOT_STRINGS
        );
    }

    #[test]
    fn type_is_checked_before_blankness() {
        assert_eq!(
            employee_err(json!({ "name": 1, "surname": "  " })),
            EMPLOYEE_NOT_STRINGS
        );
    }

    #[test]
    fn rejects_blank_fields_after_trimming() {
        assert_eq!(
            employee_err(json!({ "name": "", "surname": "Spanos" })),
            EMPLOYEE_EMPTY
        );
        assert_eq!(
            employee_err(json!({ "name": "Marios", "surname": "   " })),
            EMPLOYEE_EMPTY
        );
    }

    #[test]
    fn rejects_scalar_skills() {
        assert_eq!(
            employee_err(json!({
                "name": "Giorgos",
                "surname": "Markatos",
                "skills": "Not an array"
            })),
            SKILLS_NOT_ARRAY
        );
    }

    #[test]
    fn tolerates_null_skills_and_unchecked_element_types() {
        assert_eq!(
            validate_employee(&json!({ "name": "A", "surname": "B", "skills": null })),
            Ok(())
        );
        // Element types are not validated, by design.
        assert_eq!(
            validate_employee(&json!({ "name": "A", "surname": "B", "skills": [1, 2] })),
            Ok(())
        );
    }

    #[test]
    fn non_object_payload_fails_the_presence_rule() {
        assert_eq!(employee_err(json!("just a string")), EMPLOYEE_REQUIRED);
        assert_eq!(skill_err(json!([1, 2, 3])), SKILL_REQUIRED);
    }

    #[test]
    fn accepts_a_complete_skill() {
        let payload = json!({
            "name": "Audit",
            "description": "Financial and business inspection",
            "category": "Finance"
        });
        assert_eq!(validate_skill(&payload), Ok(()));
    }

    #[test]
    fn skill_rules_follow_the_same_order() {
        assert_eq!(
            skill_err(json!({ "name": "Audit", "description": "..." })),
            SKILL_REQUIRED
        );
        assert_eq!(
            skill_err(json!({ "name": "Audit", "description": "...", "category": 7 })),
            SKILL_NOT_STRINGS
        );
        assert_eq!(
            skill_err(json!({ "name": "Audit", "description": "...", "category": " " })),
            SKILL_EMPTY
        );
    }
}
