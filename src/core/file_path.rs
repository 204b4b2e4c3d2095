//! File paths as reported by the build-graph extractor.
//!
//! Every input file is tagged with where it lives: in the project tree, in an
//! external repository, in the generated output tree, or in files owned by the
//! generator itself. The extractor writes project paths as bare strings and
//! everything else as a small object:
//!
//! ```json
//! "Sources/App.swift"
//! {"t": "g", "_": "ios-arm64/bin/Lib/Generated.swift"}
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Where a file path is rooted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FilePathKind {
    /// Relative to the project (workspace) root
    #[default]
    Project,
    /// Inside an external repository
    External,
    /// Inside the build output tree
    Generated,
    /// Owned by the generator
    Internal,
}

impl FilePathKind {
    /// The single-letter code used in the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            FilePathKind::Project => "p",
            FilePathKind::External => "e",
            FilePathKind::Generated => "g",
            FilePathKind::Internal => "i",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(FilePathKind::Project),
            "e" => Some(FilePathKind::External),
            "g" => Some(FilePathKind::Generated),
            "i" => Some(FilePathKind::Internal),
            _ => None,
        }
    }
}

/// A file path together with its root kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePath {
    pub kind: FilePathKind,
    pub path: PathBuf,
}

impl FilePath {
    /// A path relative to the project root.
    pub fn project(path: impl Into<PathBuf>) -> Self {
        FilePath {
            kind: FilePathKind::Project,
            path: path.into(),
        }
    }

    /// A path inside an external repository.
    pub fn external(path: impl Into<PathBuf>) -> Self {
        FilePath {
            kind: FilePathKind::External,
            path: path.into(),
        }
    }

    /// A path inside the build output tree.
    pub fn generated(path: impl Into<PathBuf>) -> Self {
        FilePath {
            kind: FilePathKind::Generated,
            path: path.into(),
        }
    }

    /// A generator-internal path.
    pub fn internal(path: impl Into<PathBuf>) -> Self {
        FilePath {
            kind: FilePathKind::Internal,
            path: path.into(),
        }
    }

    /// Get the path component.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FilePathKind::Project => write!(f, "{}", self.path.display()),
            FilePathKind::External => write!(f, "external/{}", self.path.display()),
            FilePathKind::Generated => write!(f, "bazel-out/{}", self.path.display()),
            FilePathKind::Internal => write!(f, "internal/{}", self.path.display()),
        }
    }
}

impl Serialize for FilePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.kind == FilePathKind::Project {
            return self.path.serialize(serializer);
        }
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("t", self.kind.code())?;
        map.serialize_entry("_", &self.path)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for FilePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FilePathVisitor)
    }
}

struct FilePathVisitor;

impl<'de> Visitor<'de> for FilePathVisitor {
    type Value = FilePath;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a path string or an object with `t` and `_` keys")
    }

    fn visit_str<E>(self, v: &str) -> Result<FilePath, E>
    where
        E: de::Error,
    {
        Ok(FilePath::project(v))
    }

    fn visit_map<A>(self, mut map: A) -> Result<FilePath, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut kind = None;
        let mut path: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "t" => {
                    let code: String = map.next_value()?;
                    kind = Some(FilePathKind::from_code(&code).ok_or_else(|| {
                        de::Error::invalid_value(
                            de::Unexpected::Str(&code),
                            &"one of `p`, `e`, `g`, `i`",
                        )
                    })?);
                }
                "_" => path = Some(map.next_value()?),
                other => {
                    return Err(de::Error::unknown_field(other, &["t", "_"]));
                }
            }
        }

        let path = path.ok_or_else(|| de::Error::missing_field("_"))?;
        Ok(FilePath {
            kind: kind.unwrap_or_default(),
            path: PathBuf::from(path),
        })
    }
}
