pub mod area;
pub mod notification;
pub mod reposition;
pub mod status;
pub mod tipo;
pub mod transfer;
pub mod urgency;
