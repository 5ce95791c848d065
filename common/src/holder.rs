use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};
use thiserror::Error;

// 32 bytes / 256 bits
pub const HOLDER_ID_SIZE: usize = 32;

/// Identity of a holder.
///
/// Holders are any identities allowed to own a balance of the managed asset.
/// They arrive already authenticated by the host; the ledger treats them as
/// opaque 32-byte handles and never interprets their content.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Hash, Debug)]
pub struct HolderId([u8; HOLDER_ID_SIZE]);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolderIdError {
    #[error("Invalid hex for holder identity")]
    InvalidHex,
    #[error("Invalid holder identity size")]
    InvalidSize,
}

impl HolderId {
    pub const fn new(bytes: [u8; HOLDER_ID_SIZE]) -> Self {
        HolderId(bytes)
    }

    pub const fn zero() -> Self {
        HolderId([0; HOLDER_ID_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; HOLDER_ID_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; HOLDER_ID_SIZE] {
        self.0
    }
}

impl Display for HolderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for HolderId {
    type Err = HolderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| HolderIdError::InvalidHex)?;
        let bytes: [u8; HOLDER_ID_SIZE] =
            bytes.try_into().map_err(|_| HolderIdError::InvalidSize)?;
        Ok(HolderId(bytes))
    }
}

impl Serialize for HolderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HolderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        HolderId::from_str(&hex).map_err(SerdeError::custom)
    }
}

impl From<[u8; HOLDER_ID_SIZE]> for HolderId {
    fn from(bytes: [u8; HOLDER_ID_SIZE]) -> Self {
        HolderId(bytes)
    }
}

impl AsRef<[u8]> for HolderId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
