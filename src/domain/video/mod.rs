// src/domain/video/mod.rs
//
// Video Domain
//
// Pure value objects describing how a free-form video descriptor was
// interpreted. Resolution itself lives in the services layer.

pub mod value_objects;

pub use value_objects::{trim_descriptor, ResolvedVideoReference, VideoKind, VideoPresentation};
