use anyhow::Context;
use tracing::{debug, error, info};

use crate::ident::new_row_id;
use crate::row::Row;

/// Fixed local-storage key holding the serialized grid.
pub const STORAGE_KEY: &str = "schedule-table-data";

/// Storage backend for the serialized grid. The frontend provides a
/// local-storage implementation; tests inject an in-memory double.
pub trait ScheduleStore {
    fn read(&self) -> Option<String>;
    fn write(&self, payload: &str) -> anyhow::Result<()>;
}

#[tracing::instrument(skip(store))]
pub fn load_rows(store: &dyn ScheduleStore, current_week: i32) -> Vec<Row> {
    let Some(raw) = store.read() else {
        info!("no stored grid, seeding a fresh row");
        return seed_rows(current_week);
    };

    match decode_rows(&raw) {
        Ok(mut rows) => {
            migrate_rows(&mut rows, current_week);
            debug!(count = rows.len(), "loaded grid from storage");
            rows
        }
        Err(err) => {
            error!(error = %err, "stored grid is unreadable, reinitializing");
            seed_rows(current_week)
        }
    }
}

#[tracing::instrument(skip(store, rows))]
pub fn save_rows(store: &dyn ScheduleStore, rows: &[Row]) {
    // an empty collection is never persisted; the stored blob keeps the
    // last non-empty grid
    if rows.is_empty() {
        return;
    }

    match encode_rows(rows) {
        Ok(payload) => {
            if let Err(err) = store.write(&payload) {
                error!(error = %err, "failed writing grid to storage");
            } else {
                debug!(count = rows.len(), "saved grid");
            }
        }
        Err(err) => error!(error = %err, "failed serializing grid"),
    }
}

pub fn decode_rows(raw: &str) -> anyhow::Result<Vec<Row>> {
    serde_json::from_str(raw).context("failed parsing stored grid")
}

pub fn encode_rows(rows: &[Row]) -> anyhow::Result<String> {
    serde_json::to_string(rows).context("failed serializing grid")
}

/// Upgrades records written before week membership existed. Presence
/// checks guard every assignment, so re-running on migrated data is a
/// no-op. A missing `status` already decodes straight to Active, so only
/// the week lists need repair here.
pub fn migrate_rows(rows: &mut [Row], current_week: i32) {
    for row in rows.iter_mut() {
        if row.weeks.is_empty() {
            debug!(row = %row.id, week = current_week, "migrating row without weeks");
            row.weeks = vec![current_week];
        }
        for cell in row.cell_states.values_mut() {
            if cell.weeks.is_empty() {
                cell.weeks = vec![current_week];
            }
        }
    }
}

fn seed_rows(current_week: i32) -> Vec<Row> {
    vec![Row::new_seeded(new_row_id(), current_week)]
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{ScheduleStore, decode_rows, encode_rows, load_rows, migrate_rows, save_rows};
    use crate::row::{CellColor, CellFill, Day, RowStatus};

    #[derive(Default)]
    struct MemStore {
        blob: RefCell<Option<String>>,
    }

    impl MemStore {
        fn with_blob(raw: &str) -> Self {
            Self {
                blob: RefCell::new(Some(raw.to_string())),
            }
        }
    }

    impl ScheduleStore for MemStore {
        fn read(&self) -> Option<String> {
            self.blob.borrow().clone()
        }

        fn write(&self, payload: &str) -> anyhow::Result<()> {
            *self.blob.borrow_mut() = Some(payload.to_string());
            Ok(())
        }
    }

    #[test]
    fn missing_blob_seeds_one_empty_row() {
        let store = MemStore::default();
        let rows = load_rows(&store, 14);

        assert_eq!(rows.len(), 1);
        assert!(rows[0].text.is_empty());
        assert_eq!(rows[0].status, RowStatus::Active);
        assert_eq!(rows[0].weeks, vec![14]);
        assert!(rows[0].cell_states.is_empty());
    }

    #[test]
    fn malformed_blob_seeds_one_empty_row() {
        let store = MemStore::with_blob("definitely not json");
        let rows = load_rows(&store, 14);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weeks, vec![14]);
    }

    #[test]
    fn well_formed_empty_grid_is_kept() {
        let store = MemStore::with_blob("[]");
        let rows = load_rows(&store, 14);

        assert!(rows.is_empty());
    }

    #[test]
    fn legacy_records_gain_weeks_and_status() {
        let raw = r#"[{
            "id": "row_1712000000_x8k2jq9fn",
            "text": "Gym",
            "cellStates": {
                "M": {"state": "partial", "color": "green"}
            }
        }]"#;
        let store = MemStore::with_blob(raw);
        let rows = load_rows(&store, 7);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "row_1712000000_x8k2jq9fn");
        assert_eq!(rows[0].status, RowStatus::Active);
        assert_eq!(rows[0].weeks, vec![7]);

        let cell = &rows[0].cell_states[&Day::M];
        assert_eq!(cell.state, CellFill::Partial);
        assert_eq!(cell.color, CellColor::Green);
        assert_eq!(cell.weeks, vec![7]);
    }

    #[test]
    fn migration_is_idempotent() {
        let raw = r#"[{
            "id": "row_1712000000_x8k2jq9fn",
            "text": "Gym",
            "cellStates": {
                "Tu": {"state": "filled", "color": "red"}
            }
        }]"#;
        let mut once = decode_rows(raw).expect("decode legacy blob");
        migrate_rows(&mut once, 9);

        let mut twice = once.clone();
        migrate_rows(&mut twice, 31);

        assert_eq!(once, twice);
    }

    #[test]
    fn garbage_enum_values_clamp_to_defaults() {
        let raw = r#"[{
            "id": "row_a",
            "text": "",
            "status": "Z",
            "weeks": [3],
            "cellStates": {
                "W": {"state": "sparkle", "color": "mauve", "weeks": [3]}
            }
        }]"#;
        let rows = decode_rows(raw).expect("decode survives garbage values");

        assert_eq!(rows[0].status, RowStatus::Active);
        let cell = &rows[0].cell_states[&Day::W];
        assert_eq!(cell.state, CellFill::None);
        assert_eq!(cell.color, CellColor::Black);
    }

    #[test]
    fn done_status_round_trips_as_a_single_letter() {
        let raw = r#"[{"id": "row_a", "text": "", "status": "D", "weeks": [3]}]"#;
        let rows = decode_rows(raw).expect("decode done row");
        assert_eq!(rows[0].status, RowStatus::Done);

        let encoded = encode_rows(&rows).expect("encode done row");
        assert!(encoded.contains(r#""status":"D""#));
    }

    #[test]
    fn save_skips_an_empty_collection() {
        let store = MemStore::with_blob("[]");
        save_rows(&store, &[]);

        assert_eq!(store.read().as_deref(), Some("[]"));
    }

    #[test]
    fn rows_round_trip_through_the_blob() {
        let raw = r#"[{
            "id": "row_a",
            "text": "Water plants",
            "status": "A",
            "weeks": [4, 6],
            "cellStates": {
                "Sa": {"state": "selected", "color": "blue", "weeks": [4]}
            }
        }]"#;
        let rows = decode_rows(raw).expect("decode");
        let encoded = encode_rows(&rows).expect("encode");
        let again = decode_rows(&encoded).expect("decode again");

        assert_eq!(rows, again);
    }
}
