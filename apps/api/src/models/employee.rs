use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the store at creation; empty in raw payloads.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub surname: String,
    /// Optional and omitted from JSON when absent. Elements stay raw JSON
    /// values: the validator only requires an array, not string elements,
    /// so whatever the client sent round-trips unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Value>>,
}

impl Employee {
    /// Skill entries as searchable text. Non-string entries never match.
    pub fn skill_terms(&self) -> Vec<String> {
        self.skills
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect()
    }
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn merge(&mut self, patch: &Map<String, Value>) {
        if let Some(name) = patch.get("name").and_then(Value::as_str) {
            self.name = name.to_owned();
        }
        if let Some(surname) = patch.get("surname").and_then(Value::as_str) {
            self.surname = surname.to_owned();
        }
        if let Some(skills) = patch.get("skills").and_then(Value::as_array) {
            self.skills = Some(skills.clone());
        }
    }
}

/// Initial employees, mirroring the demo data the service ships with.
/// Ids are assigned when the seeds pass through `Store::create`.
pub fn seed() -> Vec<Employee> {
    vec![
        Employee {
            id: String::new(),
            name: "Dimitris".to_string(),
            surname: "Papadopoulos".to_string(),
            skills: Some(vec![
                Value::from("Financial Analysis"),
                Value::from("Budget Planning"),
            ]),
        },
        Employee {
            id: String::new(),
            name: "Maria".to_string(),
            surname: "Konstantinou".to_string(),
            skills: Some(vec![
                Value::from("Talent Acquisition"),
                Value::from("Performance Management"),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_without_skills_key_when_absent() {
        let employee = Employee {
            id: "abc".to_string(),
            name: "Nikos".to_string(),
            surname: "Andreou".to_string(),
            skills: None,
        };
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            value,
            json!({ "id": "abc", "name": "Nikos", "surname": "Andreou" })
        );
    }

    #[test]
    fn deserializes_a_payload_without_id() {
        let employee: Employee =
            serde_json::from_value(json!({ "name": "Marios", "surname": "Spanos" })).unwrap();
        assert_eq!(employee.id, "");
        assert_eq!(employee.skills, None);
    }

    #[test]
    fn merge_ignores_fields_of_the_wrong_type() {
        let mut employee = seed().remove(0);
        let before = employee.clone();
        let patch = json!({ "name": 42, "skills": "scalar" });
        employee.merge(patch.as_object().unwrap());
        assert_eq!(employee, before);
    }

    #[test]
    fn skill_terms_skips_non_string_elements() {
        let employee = Employee {
            id: String::new(),
            name: "A".to_string(),
            surname: "B".to_string(),
            skills: Some(vec![json!("Audit"), json!(7)]),
        };
        assert_eq!(employee.skill_terms(), vec!["Audit".to_string()]);
    }
}
