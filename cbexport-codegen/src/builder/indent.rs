//! Indentation configuration for generated text.

/// Indentation style for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width.
    Spaces(u8),
}

impl Indent {
    /// 3-space indentation used by Code::Blocks project files.
    pub const CODEBLOCKS: Self = Self::Spaces(3);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(3) => "   ",
            Self::Spaces(4) => "    ",
            // Fallback to 3 whitespaces
            Self::Spaces(_) => "   ",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CODEBLOCKS
    }
}
