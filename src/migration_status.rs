use core::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::error;

use crate::wire;

/// The migration status of a volume.
///
/// [`MigrationStatus::None`] doubles as the legitimate "no migration in
/// progress" value and as the fallback for anything that fails to decode, so
/// a caller cannot tell garbled input apart from a genuine "none" — only the
/// logged diagnostic can.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStatus {
    Migrating,
    Error,
    Success,
    Completing,
    None,
    Starting,
}

impl MigrationStatus {
    /// Decodes a wire token into a migration status.
    ///
    /// Never fails: a missing or unknown token logs a diagnostic and decodes
    /// to [`MigrationStatus::None`]. This is deliberately softer than
    /// [`Status::from_wire`](crate::Status::from_wire), which treats a
    /// missing token as a hard error; existing consumers rely on both
    /// behaviors. Matching is case-insensitive and treats hyphens and
    /// underscores as interchangeable.
    pub fn from_wire(token: Option<&str>) -> Self {
        let Some(token) = token else {
            error!("migration status token missing, defaulting to `none`");

            return Self::None;
        };

        match wire::to_symbol(token).as_str() {
            "MIGRATING" => Self::Migrating,
            "ERROR" => Self::Error,
            "SUCCESS" => Self::Success,
            "COMPLETING" => Self::Completing,
            "NONE" => Self::None,
            "STARTING" => Self::Starting,
            _ => {
                error!("unrecognized migration status token `{token}`, defaulting to `none`");

                Self::None
            }
        }
    }

    /// The lower-case token for this migration status as the service
    /// transmits it.
    pub fn wire_token(&self) -> &'static str {
        match self {
            Self::Migrating => "migrating",
            Self::Error => "error",
            Self::Success => "success",
            Self::Completing => "completing",
            Self::None => "none",
            Self::Starting => "starting",
        }
    }
}

impl Default for MigrationStatus {
    fn default() -> Self {
        Self::None
    }
}

impl Display for MigrationStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.wire_token())
    }
}

impl Serialize for MigrationStatus {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_token())
    }
}

impl<'de> Deserialize<'de> for MigrationStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The field is nullable on the wire; an explicit null degrades to
        // `None` like every other decode failure.
        let token = Option::<String>::deserialize(deserializer)?;

        Ok(Self::from_wire(token.as_deref()))
    }
}
