//! Single-line comment syntax.

use std::sync::LazyLock;

use regex::Regex;

static DOUBLE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*//").expect("invalid `//` comment regex"));
static HASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*#").expect("invalid `#` comment regex"));
static DOUBLE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*--").expect("invalid `--` comment regex"));

/// Single-line comment marker of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `// ...` (C family, JavaScript, TypeScript, Rust, Go ...)
    DoubleSlash,
    /// `# ...` (Python, Ruby, shell, YAML, TOML)
    Hash,
    /// `-- ...` (SQL, Lua, Haskell)
    DoubleDash,
    /// No comment syntax; every non-blank line is code.
    None,
}

impl CommentStyle {
    /// Pattern anchored at line start; leading whitespace is permitted before the marker.
    #[must_use]
    pub fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::DoubleSlash => Some(&DOUBLE_SLASH),
            Self::Hash => Some(&HASH),
            Self::DoubleDash => Some(&DOUBLE_DASH),
            Self::None => None,
        }
    }

    #[must_use]
    pub fn is_comment(self, line: &str) -> bool {
        self.pattern().is_some_and(|re| re.is_match(line))
    }
}
