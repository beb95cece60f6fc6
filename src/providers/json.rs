use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::{Item, Provider, Result};

/// Reads a JSON array of items. Every entry is either a string or a `{"key", "value"}` object.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Provider for JsonFile {
    fn title(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Item>> {
        let fp = File::open(&self.path)?;
        Ok(serde_json::from_reader(BufReader::new(fp))?)
    }
}
