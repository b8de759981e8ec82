pub mod dispatch;
pub mod entry;
pub mod inquiry;
pub mod schema;
pub mod sentence;
pub mod shared;
pub mod turnaround;
pub mod worksheet;
