//! Location addressing: local paths and object store URLs.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// URL prefix marking a remote object store location.
const REMOTE_SCHEME: &str = "s3://";

/// Where an image is read from or written to.
///
/// The two variants are decided once, at parse time; everything downstream
/// dispatches on the enum rather than re-inspecting the string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A path on the local filesystem.
    Local(PathBuf),
    /// An object in a remote bucket. The key keeps the leading slash it
    /// had in the URL.
    Remote { bucket: String, key: String },
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("malformed object store url {0}: expected s3://bucket/object-path")]
    Malformed(String),
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix(REMOTE_SCHEME) else {
            return Ok(Location::Local(PathBuf::from(s)));
        };

        match rest.find('/') {
            // no key separator, or nothing before it (missing bucket)
            None | Some(0) => Err(LocationError::Malformed(s.to_string())),
            // separator is the last character (empty object path)
            Some(idx) if idx + 1 == rest.len() => Err(LocationError::Malformed(s.to_string())),
            Some(idx) => Ok(Location::Remote {
                bucket: rest[..idx].to_string(),
                key: rest[idx..].to_string(),
            }),
        }
    }
}
