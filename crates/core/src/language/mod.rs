// crates/core/src/language/mod.rs
//! Language registry.
//!
//! Maps a file extension to a [`Language`]. Languages are a closed set, so two
//! lookups of the same extension always compare equal and can be grouped on.

pub mod comment_style;
pub mod ext_map;

use std::fmt;

use serde::{Serialize, Serializer};

pub use comment_style::CommentStyle;
pub use ext_map::{ExtensionMap, ExtensionMapError};

/// A language the classifier knows how to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Rust,
    C,
    Cpp,
    CSharp,
    Go,
    Java,
    Kotlin,
    Swift,
    Ruby,
    Shell,
    Yaml,
    Toml,
    Sql,
    Lua,
    Haskell,
    Markdown,
    Json,
}

impl Language {
    pub const ALL: &'static [Self] = &[
        Self::TypeScript,
        Self::JavaScript,
        Self::Python,
        Self::Rust,
        Self::C,
        Self::Cpp,
        Self::CSharp,
        Self::Go,
        Self::Java,
        Self::Kotlin,
        Self::Swift,
        Self::Ruby,
        Self::Shell,
        Self::Yaml,
        Self::Toml,
        Self::Sql,
        Self::Lua,
        Self::Haskell,
        Self::Markdown,
        Self::Json,
    ];

    /// Display name used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::Rust => "Rust",
            Self::C => "C",
            Self::Cpp => "C++",
            Self::CSharp => "C#",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Swift => "Swift",
            Self::Ruby => "Ruby",
            Self::Shell => "Shell",
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Sql => "SQL",
            Self::Lua => "Lua",
            Self::Haskell => "Haskell",
            Self::Markdown => "Markdown",
            Self::Json => "JSON",
        }
    }

    #[must_use]
    pub const fn comment_style(self) -> CommentStyle {
        match self {
            Self::TypeScript
            | Self::JavaScript
            | Self::Rust
            | Self::C
            | Self::Cpp
            | Self::CSharp
            | Self::Go
            | Self::Java
            | Self::Kotlin
            | Self::Swift => CommentStyle::DoubleSlash,
            Self::Python | Self::Ruby | Self::Shell | Self::Yaml | Self::Toml => CommentStyle::Hash,
            Self::Sql | Self::Lua | Self::Haskell => CommentStyle::DoubleDash,
            Self::Markdown | Self::Json => CommentStyle::None,
        }
    }

    /// Extensions registered for this language, without the leading dot.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::TypeScript => &["ts", "tsx", "mts", "cts"],
            Self::JavaScript => &["js", "jsx", "mjs", "cjs"],
            Self::Python => &["py", "pyw", "pyi"],
            Self::Rust => &["rs"],
            Self::C => &["c", "h"],
            Self::Cpp => &["cpp", "cc", "cxx", "hpp", "hh", "hxx"],
            Self::CSharp => &["cs"],
            Self::Go => &["go"],
            Self::Java => &["java"],
            Self::Kotlin => &["kt", "kts"],
            Self::Swift => &["swift"],
            Self::Ruby => &["rb", "rake"],
            Self::Shell => &["sh", "bash", "zsh"],
            Self::Yaml => &["yml", "yaml"],
            Self::Toml => &["toml"],
            Self::Sql => &["sql"],
            Self::Lua => &["lua"],
            Self::Haskell => &["hs"],
            Self::Markdown => &["md", "markdown"],
            Self::Json => &["json"],
        }
    }

    /// Looks up the language registered for `ext`. Matching ignores ASCII case.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
