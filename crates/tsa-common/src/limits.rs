//! Centralized limits and thresholds.
//!
//! The materializer and the query layer do not impose any limit unless one is
//! configured. The values here are suggestions callers can opt into.

/// Suggested maximum node nesting depth for materialization.
///
/// Each nested node or list element adds a frame to the decoder's call stack.
/// Real TypeScript sources rarely exceed a few hundred levels; a tree deeper
/// than this is almost certainly pathological.
///
/// # TypeScript example
///
/// ```typescript
/// // Deeply nested parentheses produce one ParenthesizedExpression per level:
/// const x = ((((((((((((((((((((1))))))))))))))))))));
/// ```
pub const RECOMMENDED_MAX_NODE_DEPTH: u32 = 2048;

/// Initial capacity reserved for the decode path stack.
pub const DECODE_PATH_INLINE_CAPACITY: usize = 16;
