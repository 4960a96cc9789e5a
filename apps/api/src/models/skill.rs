use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Assigned by the store at creation; empty in raw payloads.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

impl Record for Skill {
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
        if let Some(description) = patch.get("description").and_then(Value::as_str) {
            self.description = description.to_owned();
        }
        if let Some(category) = patch.get("category").and_then(Value::as_str) {
            self.category = category.to_owned();
        }
    }
}

/// Initial skill catalog. Ids are assigned when the seeds pass through
/// `Store::create`.
pub fn seed() -> Vec<Skill> {
    let catalog = [
        ("Audit", "Financial and business inspection", "Finance"),
        ("Marketing", "Acquire and retain customers", "Advertising"),
        ("Accounting", "Measure economic results", "Finance"),
        ("SEO", "Helping users find websites", "Advertising"),
    ];
    catalog
        .into_iter()
        .map(|(name, description, category)| Skill {
            id: String::new(),
            name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_overrides_only_provided_fields() {
        let mut skill = seed().remove(0);
        let patch = json!({ "description": "Inspection of accounts", "id": "x" });
        skill.merge(patch.as_object().unwrap());
        assert_eq!(skill.name, "Audit");
        assert_eq!(skill.description, "Inspection of accounts");
        assert_eq!(skill.category, "Finance");
        assert_eq!(skill.id, "");
    }

    #[test]
    fn seed_covers_both_categories() {
        let seeds = seed();
        let categories: Vec<&str> = seeds.iter().map(|s| s.category.as_str()).collect();
        assert!(categories.contains(&"Finance"));
        assert!(categories.contains(&"Advertising"));
    }
}
