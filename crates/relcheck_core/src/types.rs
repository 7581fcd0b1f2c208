/// An import-like reference found on a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub request: String,
    /// 1-based line number
    pub line: usize,
    pub kind: ImportKind,
}

/// Keyword that introduced the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Import,
    From,
    Require,
}

impl ImportKind {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "import" => Some(Self::Import),
            "from" => Some(Self::From),
            "require" => Some(Self::Require),
            _ => None,
        }
    }
}
