// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Track catalog.
//!
//! The catalog is the read-only source of every track the user can pick from.
//! It is built once at startup from a [`CatalogSource`], either the built-in
//! track list or a TOML file named in the application configuration.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::model::Track;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("Failed to read catalog file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog entry \"{title}\" has an empty id")]
    EmptyId { title: String },

    #[error("Duplicate track id in catalog: {0}")]
    DuplicateId(String),
}

/// An `(id, title)` pair as supplied by a catalog source.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogEntry {
    pub(crate) id: String,
    pub(crate) title: String,
}

/// Supplies the static track data the catalog is built from.
pub(crate) trait CatalogSource {
    fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}

/// The compiled-in track list, used when no catalog file is configured.
pub(crate) struct BuiltinCatalog;

const BUILTIN_TRACKS: &[(&str, &str)] = &[
    ("1", "Blue in Green"),
    ("2", "So What"),
    ("3", "Autumn Leaves"),
    ("4", "Take Five"),
    ("5", "Round Midnight"),
    ("6", "All Blues"),
    ("7", "My Favorite Things"),
    ("8", "Naima"),
    ("9", "Blue Train"),
    ("10", "Moanin'"),
    ("11", "Song for My Father"),
    ("12", "Maiden Voyage"),
    ("13", "Cantaloupe Island"),
    ("14", "Footprints"),
    ("15", "Giant Steps"),
    ("16", "Summertime"),
];

impl CatalogSource for BuiltinCatalog {
    fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(BUILTIN_TRACKS
            .iter()
            .map(|(id, title)| CatalogEntry {
                id: id.to_string(),
                title: title.to_string(),
            })
            .collect())
    }
}

/// A catalog read from a TOML file of `[[tracks]]` tables.
pub(crate) struct FileCatalog {
    path: PathBuf,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<CatalogEntry>,
}

impl FileCatalog {
    pub(crate) fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogSource for FileCatalog {
    fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;

        let file: CatalogFile = toml::from_str(&content).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(file.tracks)
    }
}

/// The fixed collection of all available tracks.
#[derive(Debug)]
pub(crate) struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Builds the catalog from a source, rejecting empty and duplicate ids.
    pub(crate) fn from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let entries = source.entries()?;

        let mut seen = HashSet::with_capacity(entries.len());
        let mut tracks = Vec::with_capacity(entries.len());

        for entry in entries {
            if entry.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { title: entry.title });
            }
            if !seen.insert(entry.id.clone()) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            tracks.push(Track::new(entry.id, entry.title));
        }

        info!(tracks = tracks.len(), "Catalog loaded");

        Ok(Self { tracks })
    }

    pub(crate) fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub(crate) fn len(&self) -> usize {
        self.tracks.len()
    }
}
