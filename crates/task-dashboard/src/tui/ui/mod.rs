/*
[INPUT]:  TuiApp view state
[OUTPUT]: Panel renderers for the TUI
[POS]:    TUI UI module root
[UPDATE]: When adding panels
*/

mod layout;
mod logs;
mod result;
mod task_table;

pub(in crate::tui) use layout::{draw_footer, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use result::draw_result;
pub(in crate::tui) use task_table::draw_task_table;
