//! Outbound customer orders.

pub mod order;

pub use order::{
    NewOrder, NewOrderItem, Order, OrderFilter, OrderItem, OrderPatch, OrderStatus,
};
pub use wms_core::Priority;
