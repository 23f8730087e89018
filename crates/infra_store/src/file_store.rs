//! JSON file claim store
//!
//! The whole claim list is one JSON array in one file. Reads parse the entire
//! file; appends read, push and rewrite the entire file. There is no index and
//! no schema versioning.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use core_kernel::{DomainPort, PortError};
use domain_claims::{Claim, ClaimStore};

use crate::error::StoreError;

const EMPTY_ARRAY: &[u8] = b"[]";
const INDENT: &[u8] = b"    ";

/// Claim store backed by a single JSON file
///
/// A missing file (and its parent directory) is created as an empty array on
/// first read. Every store operation runs under one async mutex, so concurrent
/// appends never lose each other's claims. Writes go to a sibling `.tmp` file
/// that is then renamed over the data file.
#[derive(Debug)]
pub struct FileClaimStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileClaimStore {
    /// Creates a store for the given data file; nothing is touched until first use
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the full claim list
    ///
    /// Initializes the file as `[]` when it does not exist yet.
    ///
    /// # Errors
    ///
    /// * `StoreError::Io` - the file or its directory could not be created or read
    /// * `StoreError::Corrupt` - the file is not a JSON array of claims
    pub async fn read_data(&self) -> Result<Vec<Claim>, StoreError> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(StoreError::io("inspect", &self.path))?;
        if !exists {
            self.ensure_parent_dir().await?;
            fs::write(&self.path, EMPTY_ARRAY)
                .await
                .map_err(StoreError::io("initialize", &self.path))?;
            info!(path = %self.path.display(), "Initialized empty claim file");
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::io("read", &self.path))?;

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes the full list with 4-space indentation and replaces the file
    ///
    /// # Errors
    ///
    /// * `StoreError::Serialize` - a claim could not be encoded
    /// * `StoreError::Io` - the temp file could not be written or renamed
    pub async fn write_data(&self, claims: &[Claim]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        claims.serialize(&mut serializer)?;

        self.ensure_parent_dir().await?;
        let tmp = self.temp_path();
        fs::write(&tmp, &buf)
            .await
            .map_err(StoreError::io("write", &tmp))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(StoreError::io("replace", &self.path))?;

        debug!(path = %self.path.display(), count = claims.len(), "Wrote claim file");
        Ok(())
    }

    /// Reads the list, appends `claim` and writes the list back as one step
    #[instrument(skip(self, claim), fields(claim_id = claim.claim_id))]
    pub async fn append(&self, claim: Claim) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut claims = self.read_data().await?;
        claims.push(claim);
        self.write_data(&claims).await
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(StoreError::io("create directory", parent)),
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl DomainPort for FileClaimStore {}

#[async_trait]
impl ClaimStore for FileClaimStore {
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_data().await?)
    }

    async fn append_claim(&self, claim: Claim) -> Result<(), PortError> {
        Ok(self.append(claim).await?)
    }
}
