use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{MigrationStatus, Result, Status};

/// A block-storage volume as reported by the service.
///
/// A `Volume` is decoded fresh from each payload and never mutated in place;
/// a newer fetch supersedes the previous value. The two enumerated fields are
/// always one of their named symbols: unknown status tokens decode to
/// [`Status::Unrecognized`] and anything unparseable in the migration status
/// decodes to [`MigrationStatus::None`], so decoding a payload never yields a
/// partially-populated volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    id: String,
    #[serde(alias = "display_name")]
    name: Option<String>,
    #[serde(alias = "display_description")]
    description: Option<String>,
    #[serde(default)]
    status: Status,
    #[serde(rename = "os-vol-mig-status-attr:migstat", default)]
    migration_status: MigrationStatus,
    #[serde(default)]
    size: u64,
    availability_zone: Option<String>,
    created_at: Option<NaiveDateTime>,
    volume_type: Option<String>,
    snapshot_id: Option<String>,
    #[serde(rename = "imageRef")]
    image_ref: Option<String>,
    source_volid: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
    #[serde(default)]
    attachments: Vec<VolumeAttachment>,
    // String-encoded on the wire ("true"/"false"), unlike `encrypted`.
    #[serde(default, with = "wire_bool")]
    bootable: bool,
    #[serde(default)]
    encrypted: bool,
    multiattach: Option<bool>,
    #[serde(rename = "os-vol-host-attr:host")]
    host: Option<String>,
    #[serde(rename = "os-vol-tenant-attr:tenant_id", alias = "tenant_id")]
    tenant_id: Option<String>,
}

impl Volume {
    /// Creates a builder for assembling a volume, typically for a create
    /// request.
    pub fn builder() -> VolumeBuilder {
        VolumeBuilder::default()
    }

    /// Decodes a volume from a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).map_err(Into::into)
    }

    /// Encodes the volume as a JSON payload.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Into::into)
    }

    /// The identifier of the volume, assigned by the service.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The name of the volume.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The display name of the volume.
    #[deprecated(note = "use `Volume::name` instead")]
    pub fn display_name(&self) -> Option<&str> {
        self.name()
    }

    /// The description of the volume.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The display description of the volume.
    #[deprecated(note = "use `Volume::description` instead")]
    pub fn display_description(&self) -> Option<&str> {
        self.description()
    }

    /// The lifecycle status of the volume.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The migration status of the volume.
    pub fn migration_status(&self) -> MigrationStatus {
        self.migration_status
    }

    /// The size of the volume in GB.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The availability zone of the volume.
    pub fn zone(&self) -> Option<&str> {
        self.availability_zone.as_deref()
    }

    /// When the volume was created.
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// The type of the volume.
    pub fn volume_type(&self) -> Option<&str> {
        self.volume_type.as_deref()
    }

    /// The identifier of the snapshot the volume was created from, if any.
    pub fn snapshot_id(&self) -> Option<&str> {
        self.snapshot_id.as_deref()
    }

    /// The image reference the volume was created from, if any.
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// The identifier of the source volume this one was cloned from, if any.
    pub fn source_volid(&self) -> Option<&str> {
        self.source_volid.as_deref()
    }

    /// Extended metadata as string key/value pairs.
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The attachments of the volume.
    pub fn attachments(&self) -> &[VolumeAttachment] {
        &self.attachments
    }

    /// Whether the volume is bootable.
    pub fn bootable(&self) -> bool {
        self.bootable
    }

    /// Whether the volume is encrypted.
    pub fn encrypted(&self) -> bool {
        self.encrypted
    }

    /// Whether the volume can be attached to multiple instances.
    pub fn multiattach(&self) -> Option<bool> {
        self.multiattach
    }

    /// The back-end host currently serving the volume.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The tenant owning the volume.
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }
}

/// An attachment of a volume to a server.
///
/// Pass-through data from the payload; no invariants are enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeAttachment {
    id: Option<String>,
    volume_id: Option<String>,
    server_id: Option<String>,
    device: Option<String>,
    host_name: Option<String>,
    attached_at: Option<NaiveDateTime>,
}

impl VolumeAttachment {
    /// The identifier of the attachment.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The identifier of the attached volume.
    pub fn volume_id(&self) -> Option<&str> {
        self.volume_id.as_deref()
    }

    /// The identifier of the server the volume is attached to.
    pub fn server_id(&self) -> Option<&str> {
        self.server_id.as_deref()
    }

    /// The device path the volume is exposed at, e.g. `/dev/vdb`.
    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    /// The name of the host the volume is attached to.
    pub fn host_name(&self) -> Option<&str> {
        self.host_name.as_deref()
    }

    /// When the volume was attached.
    pub fn attached_at(&self) -> Option<NaiveDateTime> {
        self.attached_at
    }
}

/// Assembles a [`Volume`] field by field.
///
/// Unset enumerated fields keep their codec defaults ([`Status::Unrecognized`]
/// and [`MigrationStatus::None`]), so a built volume always holds valid
/// symbols.
#[derive(Debug, Default)]
pub struct VolumeBuilder {
    volume: Volume,
}

impl VolumeBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.volume.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.volume.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.volume.description = Some(description.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.volume.status = status;
        self
    }

    pub fn migration_status(mut self, migration_status: MigrationStatus) -> Self {
        self.volume.migration_status = migration_status;
        self
    }

    /// The size of the volume in GB.
    pub fn size(mut self, size: u64) -> Self {
        self.volume.size = size;
        self
    }

    pub fn zone(mut self, zone: impl Into<String>) -> Self {
        self.volume.availability_zone = Some(zone.into());
        self
    }

    pub fn volume_type(mut self, volume_type: impl Into<String>) -> Self {
        self.volume.volume_type = Some(volume_type.into());
        self
    }

    pub fn snapshot_id(mut self, snapshot_id: impl Into<String>) -> Self {
        self.volume.snapshot_id = Some(snapshot_id.into());
        self
    }

    pub fn image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.volume.image_ref = Some(image_ref.into());
        self
    }

    pub fn source_volid(mut self, source_volid: impl Into<String>) -> Self {
        self.volume.source_volid = Some(source_volid.into());
        self
    }

    pub fn metadata(mut self, metadata: HashMap<String, String>) -> Self {
        self.volume.metadata = metadata;
        self
    }

    pub fn bootable(mut self, bootable: bool) -> Self {
        self.volume.bootable = bootable;
        self
    }

    pub fn multiattach(mut self, multiattach: bool) -> Self {
        self.volume.multiattach = Some(multiattach);
        self
    }

    pub fn build(self) -> Volume {
        self.volume
    }
}

/// The `bootable` flag is transmitted as the strings `"true"`/`"false"`
/// rather than a JSON boolean. Decoding also accepts a genuine boolean in
/// case the service ever fixes that.
mod wire_bool {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => Ok(b),
            Raw::Text(t) if t.eq_ignore_ascii_case("true") => Ok(true),
            Raw::Text(t) if t.eq_ignore_ascii_case("false") => Ok(false),
            Raw::Text(t) => Err(de::Error::custom(format!("invalid boolean string `{t}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_a_volume() {
        let volume = Volume::builder()
            .name("backups")
            .description("nightly backup target")
            .size(100)
            .zone("nova")
            .bootable(false)
            .build();

        assert_eq!(volume.name(), Some("backups"));
        assert_eq!(volume.size(), 100);
        assert_eq!(volume.zone(), Some("nova"));
        // Enum fields hold their codec defaults even when never set.
        assert_eq!(volume.status(), Status::Unrecognized);
        assert_eq!(volume.migration_status(), MigrationStatus::None);
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_aliases_track_the_canonical_fields() {
        let volume = Volume::builder().name("vol").description("desc").build();

        assert_eq!(volume.display_name(), volume.name());
        assert_eq!(volume.display_description(), volume.description());
    }

    #[test]
    fn legacy_payload_field_names_are_accepted() {
        let volume = Volume::from_json(
            r#"{
                "id": "e1e2...",
                "display_name": "legacy",
                "display_description": "from a v1 payload",
                "status": "available"
            }"#,
        )
        .unwrap();

        assert_eq!(volume.name(), Some("legacy"));
        assert_eq!(volume.description(), Some("from a v1 payload"));
        assert_eq!(volume.status(), Status::Available);
    }

    #[test]
    fn bootable_decodes_from_string_and_encodes_to_string() {
        let volume =
            Volume::from_json(r#"{"id": "b0", "status": "available", "bootable": "true"}"#)
                .unwrap();
        assert!(volume.bootable());

        let value: serde_json::Value =
            serde_json::from_str(&volume.to_json().unwrap()).unwrap();
        assert_eq!(value["bootable"], "true");
    }

    #[test]
    fn bootable_tolerates_a_real_boolean() {
        let volume =
            Volume::from_json(r#"{"id": "b1", "status": "available", "bootable": true}"#).unwrap();
        assert!(volume.bootable());
    }

    #[test]
    fn garbled_bootable_is_rejected() {
        let res = Volume::from_json(r#"{"id": "b2", "status": "available", "bootable": "maybe"}"#);
        assert!(res.is_err());
    }
}
