//! Documentation and `@zod` override extraction.
//!
//! A Prisma doc comment carries two things: prose for humans and `@zod`
//! lines that append refinements to the generated validator:
//!
//! ```prisma
//! /// The user's handle
//! /// @zod.min(3)
//! /// @zod.max(32)
//! handle String
//! ```
//!
//! [`DocBlock::parse`] splits them in one pass. Everything downstream works
//! with [`Directive`] values and never looks at raw doc text again.

use std::fmt;

/// Reserved prefix for override lines.
pub const DIRECTIVE_MARKER: &str = "@zod";

/// A validator refinement taken verbatim from an `@zod` line.
///
/// `@zod.min(1)` yields the directive `min(1)`, which the type mapper
/// appends to the validator chain as `.min(1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive(String);

impl Directive {
    /// Parse one documentation line. Returns `None` for lines that are not
    /// directives, or whose directive body is empty.
    fn parse(line: &str) -> Option<Self> {
        let body = strip_marker(line)?.trim();
        let body = body.strip_prefix('.').unwrap_or(body).trim();
        if body.is_empty() {
            None
        } else {
            Some(Self(body.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The text after a leading `@zod` marker. The marker must end at `.`,
/// whitespace or the end of the line, so `@zodiac` is prose.
fn strip_marker(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(DIRECTIVE_MARKER)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c == '.' || c.is_whitespace() => Some(rest),
        Some(_) => None,
    }
}

/// Documentation text split into display lines and override directives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    /// Lines destined for a `/** */` comment, in source order.
    pub lines: Vec<String>,
    /// `@zod` overrides, in source order.
    pub directives: Vec<Directive>,
}

impl DocBlock {
    /// Classify each line of `docs` as prose or directive.
    pub fn parse(docs: Option<&str>) -> Self {
        let mut block = Self::default();
        let Some(docs) = docs else {
            return block;
        };

        for line in docs.lines() {
            if strip_marker(line).is_some() {
                match Directive::parse(line) {
                    Some(directive) => block.directives.push(directive),
                    None => tracing::debug!(line, "dropping empty @zod directive"),
                }
            } else {
                block.lines.push(line.to_string());
            }
        }

        block
    }

    /// Whether there is anything to render as a comment.
    pub fn has_comment(&self) -> bool {
        !self.lines.is_empty()
    }

    /// The display lines wrapped as a JSDoc block, or nothing when there are none.
    pub fn comment_lines(&self) -> Vec<String> {
        if self.lines.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.lines.len() + 2);
        out.push("/**".to_string());
        out.extend(self.lines.iter().map(|line| format!(" * {}", line)));
        out.push(" */".to_string());
        out
    }
}
