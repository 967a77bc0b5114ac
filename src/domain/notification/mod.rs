pub mod entity;

pub use entity::{DismissReason, Toast, ToastKind};
