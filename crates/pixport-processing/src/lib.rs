//! Upload intake and image conversion.
//!
//! Everything here is request-scoped: uploads land in uniquely named temp
//! files guarded by [`temp::TempArtifact`], which removes the file on drop
//! so no exit path can leak scratch data.

pub mod convert;
pub mod intake;
pub mod temp;

pub use convert::{ConversionError, ImageConverter};
pub use intake::{IntakeError, UploadPolicy, UploadedArtifact, ValidationError};
pub use temp::TempArtifact;
