//! User actions on worksheets, grouped by workflow stage.

mod form;
mod inquiry;
mod selection;
mod turnaround;
mod worksheet;
