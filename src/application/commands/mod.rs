// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between callers and Services
// - Commands accept DTOs, return DTOs
// - Failures cross the boundary as serialized ErrorResponse strings
// - Commands NEVER contain business logic

pub mod course_commands;
pub mod notification_commands;
pub mod video_commands;

pub use course_commands::*;
pub use notification_commands::*;
pub use video_commands::*;
