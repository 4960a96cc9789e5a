use uuid::Uuid;

/// Returns a fresh record identifier: a 128-bit random UUID in canonical
/// hyphenated text form. Collision-resistant; never repeats in practice
/// within a process lifetime.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
