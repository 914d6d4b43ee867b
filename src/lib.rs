//! Client-side models for the OpenStack Block Storage (Cinder) API.
//!
//! The service reports enumerated fields as lower-case, hyphenated wire tokens
//! (for example `"in-use"` or `"error-deleting"`). [`Status`] and
//! [`MigrationStatus`] map those tokens onto closed symbol sets while
//! tolerating values this client does not know about yet: an unknown status
//! decodes to [`Status::Unrecognized`] instead of failing the whole payload.
//! [`Volume`] composes both alongside the plain payload fields.

mod error;
pub use error::{Error, Result};

mod wire;

mod status;
pub use status::Status;

mod migration_status;
pub use migration_status::MigrationStatus;

mod volume;
pub use volume::{Volume, VolumeAttachment, VolumeBuilder};
