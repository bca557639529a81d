use anyhow::anyhow;
use chrono::NaiveDate;
use weekgrid_core::grid::ScheduleGrid;
use weekgrid_core::row::Row;
use weekgrid_core::store::{
  STORAGE_KEY,
  ScheduleStore,
  save_rows
};

pub struct LocalStore;

impl ScheduleStore for LocalStore {
  fn read(&self) -> Option<String> {
    web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      })
      .and_then(|storage| {
        storage
          .get_item(STORAGE_KEY)
          .ok()
          .flatten()
      })
  }

  fn write(
    &self,
    payload: &str
  ) -> anyhow::Result<()> {
    let storage = web_sys::window()
      .and_then(|window| {
        window
          .local_storage()
          .ok()
          .flatten()
      })
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })?;

    storage
      .set_item(STORAGE_KEY, payload)
      .map_err(|err| {
        anyhow!(
          "failed writing local \
           storage: {err:?}"
        )
      })
  }
}

pub fn load_grid(
  today: NaiveDate
) -> ScheduleGrid {
  ScheduleGrid::load(
    &LocalStore, today
  )
}

pub fn persist_rows(rows: &[Row]) {
  save_rows(&LocalStore, rows);
}
