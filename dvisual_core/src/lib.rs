#![forbid(unsafe_code)]

pub mod binder;
pub mod controller;
mod error;
pub mod file_handle;
pub mod upload;

pub use error::UploadError;
