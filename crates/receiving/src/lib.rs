//! Inbound receiving: advance shipment notices (ASNs) and their received quantities.

pub mod asn;

pub use asn::{
    NewReceivingItem, NewReceivingOrder, ReceivingFilter, ReceivingItem, ReceivingOrder,
    ReceivingOrderPatch, ReceivingStatus,
};
