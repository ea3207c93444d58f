// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{ops::Deref, path::{Path, PathBuf}, sync::Arc};

/// A configuration file's text together with the path it was read from.
#[derive(Debug, Clone)]
pub struct SourceCode {
    path: Arc<PathBuf>,
    contents: Arc<str>,
}

impl SourceCode {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Arc<str>>) -> Self {
        Self {
            path: Arc::new(path.into()),
            contents: contents.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The text of the given one-based line, without its terminator.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&str> {
        self.contents.lines().nth(line.checked_sub(1)?)
    }
}

impl Deref for SourceCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.contents()
    }
}
