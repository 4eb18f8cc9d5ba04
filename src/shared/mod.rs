pub mod api;
pub mod observable;
