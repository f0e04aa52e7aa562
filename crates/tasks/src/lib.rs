//! Warehouse work tasks (picking, replenishment, counting, packing, putaway).

pub mod task;

pub use task::{NewTask, Task, TaskFilter, TaskItem, TaskPatch, TaskStatus, TaskType};
pub use wms_core::Priority;
