use std::{fs, ops::Range, path::Path};

use anyhow::Context;
use log::{debug, trace};

use crate::{
    autocomplete,
    error::{Error, Result},
    prefix,
};

/// An owned phrase list, kept sorted under the shared case-insensitive
/// collation. Queries only borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrases {
    phrases: Vec<String>,
}

impl Phrases {
    pub fn from_sorted(phrases: Vec<String>) -> Result<Self> {
        if let Some(index) = prefix::first_unsorted(&phrases) {
            return Err(Error::UnsortedPhrases { index });
        }

        Ok(Phrases { phrases })
    }

    pub fn from_unsorted(mut phrases: Vec<String>) -> Self {
        prefix::sort(&mut phrases);
        Phrases { phrases }
    }

    /// Parses one phrase per line, skipping blank lines.
    pub fn parse(text: &str, sort: bool) -> Result<Self> {
        let phrases: Vec<String> = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        trace!("parsed {} phrases", phrases.len());

        if sort {
            Ok(Phrases::from_unsorted(phrases))
        } else {
            Phrases::from_sorted(phrases)
        }
    }

    pub fn load(path: &Path, sort: bool) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read dictionary `{}`", path.display()))?;
        let phrases = Phrases::parse(&text, sort)?;
        debug!("loaded {} phrases from {}", phrases.len(), path.display());
        Ok(phrases)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }

    pub fn find_first(&self, prefix: &str) -> Option<&str> {
        autocomplete::find_first_by_prefix(&self.phrases, prefix)
    }

    pub fn top(&self, prefix: &str, count: isize) -> Vec<&str> {
        autocomplete::top_by_prefix(&self.phrases, prefix, count)
    }

    pub fn count(&self, prefix: &str) -> usize {
        autocomplete::count_by_prefix(&self.phrases, prefix)
    }

    pub fn range(&self, prefix: &str) -> Range<usize> {
        autocomplete::prefix_range(&self.phrases, prefix)
    }

    pub fn find_one(&self, prefix: &str) -> Result<&str> {
        autocomplete::find_one_by_prefix(&self.phrases, prefix)
    }

    pub fn common_completion(&self, prefix: &str) -> Option<&str> {
        autocomplete::common_completion(&self.phrases, prefix)
    }
}
