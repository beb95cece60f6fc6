use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::{Item, Provider, Result};

/// One plain item per non-blank line, read from a file or from stdin.
pub struct Lines {
    path: Option<PathBuf>,
}

impl Lines {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    pub fn stdin() -> Self {
        Self { path: None }
    }

    fn read(r: impl BufRead) -> Result<Vec<Item>> {
        let mut items = Vec::new();

        for line in r.lines() {
            let line = line?;

            if !line.trim().is_empty() {
                items.push(Item::from(line));
            }
        }

        Ok(items)
    }
}

impl Provider for Lines {
    fn title(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "stdin".into(),
        }
    }

    fn load(&self) -> Result<Vec<Item>> {
        match &self.path {
            Some(path) => Self::read(BufReader::new(File::open(path)?)),
            None => Self::read(io::stdin().lock()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_blank_lines() {
        let input = "bobcat\n\n   \nConcatenate\r\nDog";
        let items = Lines::read(input.as_bytes()).unwrap();

        assert_eq!(items, vec![Item::plain("bobcat"), Item::plain("Concatenate"), Item::plain("Dog")]);
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.txt");
        std::fs::write(&path, "alpha\nbeta\n").unwrap();

        let provider = Lines::new(&path);
        assert_eq!(provider.load().unwrap().len(), 2);
        assert!(provider.title().ends_with("items.txt"));
    }
}
