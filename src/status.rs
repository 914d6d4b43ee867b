use core::fmt::Display;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{wire, Error, Result};

/// The lifecycle status of a volume.
///
/// The set of statuses the service can report grows over time, so decoding
/// never fails on an unknown token: it maps to [`Status::Unrecognized`]
/// instead. `Unrecognized` encodes to `"unrecognized"`, which is not a token
/// the service accepts — don't send it back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Available,
    Attaching,
    BackingUp,
    Creating,
    Deleting,
    Downloading,
    Uploading,
    Error,
    ErrorDeleting,
    ErrorRestoring,
    InUse,
    RestoringBackup,
    Detaching,
    /// The service reported a status this client does not know about.
    Unrecognized,
}

impl Status {
    /// Decodes a wire token into a status.
    ///
    /// A missing token is a contract violation and returns
    /// [`Error::InvalidArgument`]; any present-but-unknown token decodes to
    /// [`Status::Unrecognized`]. Matching is case-insensitive and treats
    /// hyphens and underscores as interchangeable.
    pub fn from_wire(token: Option<&str>) -> Result<Self> {
        let token = token.ok_or(Error::InvalidArgument("status"))?;

        Ok(match wire::to_symbol(token).as_str() {
            "AVAILABLE" => Self::Available,
            "ATTACHING" => Self::Attaching,
            "BACKING_UP" => Self::BackingUp,
            "CREATING" => Self::Creating,
            "DELETING" => Self::Deleting,
            "DOWNLOADING" => Self::Downloading,
            "UPLOADING" => Self::Uploading,
            "ERROR" => Self::Error,
            "ERROR_DELETING" => Self::ErrorDeleting,
            "ERROR_RESTORING" => Self::ErrorRestoring,
            "IN_USE" => Self::InUse,
            "RESTORING_BACKUP" => Self::RestoringBackup,
            "DETACHING" => Self::Detaching,
            _ => Self::Unrecognized,
        })
    }

    /// The lower-case, hyphenated token for this status as the service
    /// transmits it.
    pub fn wire_token(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Attaching => "attaching",
            Self::BackingUp => "backing-up",
            Self::Creating => "creating",
            Self::Deleting => "deleting",
            Self::Downloading => "downloading",
            Self::Uploading => "uploading",
            Self::Error => "error",
            Self::ErrorDeleting => "error-deleting",
            Self::ErrorRestoring => "error-restoring",
            Self::InUse => "in-use",
            Self::RestoringBackup => "restoring-backup",
            Self::Detaching => "detaching",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Unrecognized
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.wire_token())
    }
}

impl Serialize for Status {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.wire_token())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;

        Self::from_wire(Some(&token)).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMED: &[Status] = &[
        Status::Available,
        Status::Attaching,
        Status::BackingUp,
        Status::Creating,
        Status::Deleting,
        Status::Downloading,
        Status::Uploading,
        Status::Error,
        Status::ErrorDeleting,
        Status::ErrorRestoring,
        Status::InUse,
        Status::RestoringBackup,
        Status::Detaching,
    ];

    #[test]
    fn named_symbols_round_trip() {
        for status in NAMED {
            let token = status.wire_token();
            let decoded = Status::from_wire(Some(token)).unwrap();
            assert_eq!(decoded, *status);
            // Re-decoding the re-encoded value is stable.
            assert_eq!(Status::from_wire(Some(decoded.wire_token())).unwrap(), decoded);
        }
    }

    #[test]
    fn canonical_tokens_decode() {
        assert_eq!(Status::from_wire(Some("in-use")).unwrap(), Status::InUse);
        assert_eq!(Status::InUse.wire_token(), "in-use");
        assert_eq!(Status::from_wire(Some("error-deleting")).unwrap(), Status::ErrorDeleting);
    }

    #[test]
    fn matching_is_lenient_about_case_and_separators() {
        assert_eq!(Status::from_wire(Some("IN-USE")).unwrap(), Status::InUse);
        assert_eq!(Status::from_wire(Some("in_use")).unwrap(), Status::InUse);
        assert_eq!(Status::from_wire(Some("error_deleting")).unwrap(), Status::ErrorDeleting);
        assert_eq!(Status::from_wire(Some("ERROR_DELETING")).unwrap(), Status::ErrorDeleting);
    }

    #[test]
    fn unknown_token_falls_back_to_unrecognized() {
        assert_eq!(Status::from_wire(Some("totally-unknown-value")).unwrap(), Status::Unrecognized);
        assert_eq!(Status::from_wire(Some("")).unwrap(), Status::Unrecognized);
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(matches!(Status::from_wire(None), Err(Error::InvalidArgument("status"))));
    }

    #[test]
    fn serde_uses_wire_tokens() {
        assert_eq!(serde_json::to_string(&Status::InUse).unwrap(), "\"in-use\"");
        let status: Status = serde_json::from_str("\"restoring-backup\"").unwrap();
        assert_eq!(status, Status::RestoringBackup);
        let status: Status = serde_json::from_str("\"brand-new-state\"").unwrap();
        assert_eq!(status, Status::Unrecognized);
    }

    #[test]
    fn display_prints_the_wire_token() {
        assert_eq!(Status::BackingUp.to_string(), "backing-up");
    }
}
