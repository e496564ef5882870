//! Week files on disk: where they live, seeding new ones, reading and writing.

use crate::core::bootstrap::{default_document, week_file_name};
use crate::core::serializer::{parse_document, write_document};
use crate::errors::{AppError, AppResult};
use crate::models::document::Document;
use chrono::NaiveDate;
use log::{debug, info};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct TrackerRepository {
    data_dir: PathBuf,
    explicit_week_file: Option<PathBuf>,
}

impl TrackerRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            explicit_week_file: None,
        }
    }

    /// Every date resolves to `path` instead of its week file under the data dir.
    pub fn with_explicit_week_file(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_week_file = path;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the week file for `date`. Never touches the filesystem.
    pub fn week_file(&self, date: NaiveDate) -> PathBuf {
        self.explicit_week_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(week_file_name(date)))
    }

    /// Path of the week file for `date`, created with the default week if absent.
    pub fn week_file_create_if_needed(&self, date: NaiveDate) -> AppResult<PathBuf> {
        let path = self.week_file(date);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AppError::week_file(parent, e))?;
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let text = write_document(&default_document(date));
                file.write_all(text.as_bytes())
                    .map_err(|e| AppError::week_file(&path, e))?;
                info!("created week file {}", path.display());
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(AppError::week_file(&path, e)),
        }

        Ok(path)
    }

    pub fn read_document(&self, path: &Path) -> AppResult<Document> {
        debug!("reading {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| AppError::week_file(path, e))?;
        parse_document(&text)
    }

    /// Like `read_document`, but a missing file is `Ok(None)`.
    pub fn read_document_if_exists(&self, path: &Path) -> AppResult<Option<Document>> {
        match fs::read_to_string(path) {
            Ok(text) => parse_document(&text).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::week_file(path, e)),
        }
    }

    /// Replaces the whole file with the serialized document.
    pub fn write_document(&self, path: &Path, document: &Document) -> AppResult<()> {
        debug!("writing {}", path.display());
        fs::write(path, write_document(document)).map_err(|e| AppError::week_file(path, e))
    }
}
