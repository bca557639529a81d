mod day_cell;
mod schedule_row;
mod schedule_table;
mod week_nav;

pub use day_cell::DayCell;
pub use schedule_row::ScheduleRow;
pub use schedule_table::ScheduleTable;
pub use week_nav::WeekNav;
