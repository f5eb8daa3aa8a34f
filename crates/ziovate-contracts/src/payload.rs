//! Request payloads and response envelopes for the API seam.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Open key→value payload for patient registration.
///
/// The registration form is still evolving, so the payload stays an open
/// string map rather than a fixed struct. `REQUIRED_FIELDS` lists the keys a
/// backend must see; everything else travels through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterPatientPayload(pub BTreeMap<String, String>);

impl RegisterPatientPayload {
    /// Keys that must be present and non-empty for registration to succeed.
    pub const REQUIRED_FIELDS: [&'static str; 3] = ["name", "email", "phone"];

    /// Insert or replace one field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up one field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// A prescription file to upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionUpload {
    pub file_name: String,
    /// MIME type, e.g. "application/pdf".
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Bare success envelope, mirroring the future wire shape `{ success: bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    /// A successful acknowledgement.
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Listing envelope, mirroring the future wire shape `{ success, data: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    /// A successful listing carrying `data`.
    pub fn of(data: Vec<T>) -> Self {
        Self { success: true, data }
    }
}
