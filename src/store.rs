// Copyright (c) 2026 Spendtrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Profile;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("dev.spendtrack", "Spendtrack", "spendtrack"));

const TOKEN_KEY: &str = "session_token";
const PROFILE_KEY: &str = "user_profile";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("credentials.sqlite"))
}

/// Durable storage for exactly two entries: the session token and the user
/// profile, keyed independently so either can be read without the other.
///
/// Read and write failures are logged and treated as "absent" rather than
/// propagated: losing a session only costs a re-login, so this layer fails
/// open to the anonymous state instead of surfacing storage errors.
pub struct CredentialStore {
    conn: Connection,
}

impl CredentialStore {
    pub fn open_or_init() -> Result<Self> {
        Self::open_at(&store_path()?)
    }

    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Open credential store at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Persist the token and profile together. The profile is written first
    /// so a readable token always has a profile behind it.
    pub fn save(&self, token: &str, profile: &Profile) {
        let profile_json = match serde_json::to_string(profile) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("could not encode profile for persistence: {e}");
                return;
            }
        };
        let result = self
            .put(PROFILE_KEY, &profile_json)
            .and_then(|_| self.put(TOKEN_KEY, token));
        if let Err(e) = result {
            tracing::warn!("could not persist session: {e}");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    pub fn profile(&self) -> Option<Profile> {
        let raw = self.get(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("stored profile is unreadable: {e}");
                None
            }
        }
    }

    /// Remove both entries. The token goes first so a half-cleared store can
    /// never authorize a request. Safe to call repeatedly.
    pub fn clear(&self) {
        for key in [TOKEN_KEY, PROFILE_KEY] {
            if let Err(e) = self
                .conn
                .execute("DELETE FROM credentials WHERE key=?1", params![key])
            {
                tracing::warn!("could not clear credential '{key}': {e}");
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> rusqlite::Result<()> {
        self.conn.execute(
            "INSERT INTO credentials(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        let result = self
            .conn
            .query_row(
                "SELECT value FROM credentials WHERE key=?1",
                params![key],
                |r| r.get(0),
            )
            .optional();
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("credential read failed for '{key}': {e}");
                None
            }
        }
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS credentials(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}
