//! Parser configuration.
//!
//! The parser recurses once per nested container, so the nesting depth of the
//! input bounds its stack use. `ParseOptions` caps that depth; inputs nested
//! deeper than `max_depth` are rejected as malformed instead of exhausting the
//! stack.

/// Default maximum nesting depth for arrays/objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Maximum nesting depth used by [`ParseOptions::strict`].
pub const STRICT_MAX_DEPTH: usize = 32;

/// Options controlling [`parse_with_options`](crate::parse_with_options).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of nested arrays/objects. A top-level scalar has depth 0,
    /// `[]` has depth 1, `[[]]` depth 2.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Default options (`max_depth` = 128).
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Tighter limits for untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_depth: STRICT_MAX_DEPTH,
        }
    }

    /// No depth bound. Deeply nested input can overflow the stack.
    pub const fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    /// Returns a copy with a different depth limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
