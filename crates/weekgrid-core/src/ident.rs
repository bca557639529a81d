use uuid::Uuid;

/// Opaque, collision-resistant row
/// identifier.
#[must_use]
pub fn new_row_id() -> String {
  format!(
    "row_{}",
    Uuid::new_v4().simple()
  )
}
