//! Rendering module: walks a directory hierarchy and writes it as a text tree.
//!
//! This module contains the tree renderer and the prefix state it maintains:
//!
//! - **Tree styles**: Unicode (default) or ASCII connectors via `TreeChars`
//! - **Prefix stack**: `PrefixStack` holds one token per ancestor level; a
//!   `LevelGuard` pops the level it pushed on every exit path
//! - **Entry display**: directories by name, files as `name (size)`
//! - **Streaming output**: every line is written to the sink as soon as it
//!   is known, in depth-first order
//!
//! File: src/render.rs
//! Author: WaterRun
//! Date: 2026-10-19

#![forbid(unsafe_code)]

use std::fmt;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::path::Path;

use tracing::debug;

use crate::config::CharsetMode;
use crate::error::{DirtreeResult, RenderError};
use crate::scan::{self, DirectoryEntry};

// ============================================================================
// Tree Characters
// ============================================================================

/// Tree drawing characters for the selected charset.
///
/// All four tokens are four columns wide, so nested levels line up no matter
/// which filler a parent left behind.
///
/// # Examples
///
/// ```
/// use dirtree::render::TreeChars;
/// use dirtree::config::CharsetMode;
///
/// let chars = TreeChars::from_charset(CharsetMode::Unicode);
/// assert_eq!(chars.branch, "├───");
///
/// let ascii_chars = TreeChars::from_charset(CharsetMode::Ascii);
/// assert_eq!(ascii_chars.last_branch, "\\---");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChars {
    /// Branch connector for an entry with more siblings after it.
    pub branch: &'static str,
    /// Branch connector for the last entry of a directory.
    pub last_branch: &'static str,
    /// Filler under a non-last directory while its subtree is rendered.
    pub vertical: &'static str,
    /// Filler under the last directory while its subtree is rendered.
    pub space: &'static str,
}

impl TreeChars {
    /// Creates a character set from the specified charset mode.
    #[must_use]
    pub fn from_charset(charset: CharsetMode) -> Self {
        Self {
            branch: charset.branch(),
            last_branch: charset.last_branch(),
            vertical: charset.vertical(),
            space: charset.indent(),
        }
    }
}

impl Default for TreeChars {
    fn default() -> Self {
        Self::from_charset(CharsetMode::default())
    }
}

// ============================================================================
// Prefix Stack
// ============================================================================

/// Ordered stack of indentation tokens, one per level being rendered.
///
/// Displaying the stack concatenates its tokens, which yields the exact
/// prefix written before an entry's name.
///
/// # Examples
///
/// ```
/// use dirtree::render::PrefixStack;
///
/// let mut stack = PrefixStack::new();
/// {
///     let mut level = stack.enter("├───");
///     level.replace_last("│   ");
///     assert_eq!(level.to_string(), "│   ");
/// }
/// assert!(stack.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixStack {
    tokens: Vec<&'static str>,
}

impl PrefixStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of levels currently on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no level is on the stack.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Topmost token, if any.
    #[must_use]
    pub fn last(&self) -> Option<&'static str> {
        self.tokens.last().copied()
    }

    /// Replaces the topmost token.
    ///
    /// On an empty stack the token is pushed instead.
    pub fn replace_last(&mut self, token: &'static str) {
        match self.tokens.last_mut() {
            Some(last) => *last = token,
            None => self.tokens.push(token),
        }
    }

    /// Pushes `token` as a new level and returns a guard that pops it on drop.
    ///
    /// The guard dereferences to the stack, so it can be handed down to a
    /// recursive call as `&mut PrefixStack`.
    #[must_use]
    pub fn enter(&mut self, token: &'static str) -> LevelGuard<'_> {
        self.tokens.push(token);
        let depth = self.tokens.len();
        LevelGuard { stack: self, depth }
    }
}

impl fmt::Display for PrefixStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| f.write_str(token))
    }
}

/// Scoped level of a [`PrefixStack`].
///
/// Dropping the guard truncates the stack back to the depth it had before
/// [`PrefixStack::enter`], including when an error unwinds through `?`.
#[derive(Debug)]
pub struct LevelGuard<'a> {
    stack: &'a mut PrefixStack,
    depth: usize,
}

impl Deref for LevelGuard<'_> {
    type Target = PrefixStack;

    fn deref(&self) -> &Self::Target {
        &*self.stack
    }
}

impl DerefMut for LevelGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.stack
    }
}

impl Drop for LevelGuard<'_> {
    fn drop(&mut self) {
        self.stack.tokens.truncate(self.depth - 1);
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a file size for display.
///
/// Zero bytes renders as `empty`; anything else as the byte count followed
/// by `b`, without unit scaling.
///
/// # Examples
///
/// ```
/// use dirtree::render::format_size;
///
/// assert_eq!(format_size(0), "empty");
/// assert_eq!(format_size(42), "42b");
/// assert_eq!(format_size(1048576), "1048576b");
/// ```
#[must_use]
pub fn format_size(size: u64) -> String {
    if size == 0 {
        "empty".to_string()
    } else {
        format!("{size}b")
    }
}

/// Formats an entry's display string (without prefix or line terminator).
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::render::format_entry;
/// use dirtree::scan::DirectoryEntry;
///
/// let file = DirectoryEntry::file(PathBuf::from("a/x"), 5);
/// assert_eq!(format_entry(&file), "x (5b)");
///
/// let dir = DirectoryEntry::directory(PathBuf::from("a"));
/// assert_eq!(format_entry(&dir), "a");
/// ```
#[must_use]
pub fn format_entry(entry: &DirectoryEntry) -> String {
    match entry.size {
        Some(size) if !entry.is_dir() => format!("{} ({})", entry.name, format_size(size)),
        _ => entry.name.clone(),
    }
}

// ============================================================================
// Tree Renderer
// ============================================================================

/// Depth-first directory tree renderer.
///
/// Owns the output sink. Each call to [`TreeRenderer::render`] lists one
/// directory, writes its entries and recurses into subdirectories.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dirtree::config::CharsetMode;
/// use dirtree::render::{PrefixStack, TreeChars, TreeRenderer};
///
/// let mut renderer = TreeRenderer::new(Vec::new(), true, TreeChars::from_charset(CharsetMode::Unicode));
/// renderer.render(Path::new("."), &mut PrefixStack::new()).unwrap();
/// let text = String::from_utf8(renderer.into_inner()).unwrap();
/// print!("{text}");
/// ```
#[derive(Debug)]
pub struct TreeRenderer<W: Write> {
    out: W,
    include_files: bool,
    chars: TreeChars,
}

impl<W: Write> TreeRenderer<W> {
    /// Creates a renderer writing to `out`.
    #[must_use]
    pub fn new(out: W, include_files: bool, chars: TreeChars) -> Self {
        Self {
            out,
            include_files,
            chars,
        }
    }

    /// Consumes the renderer and returns the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders the contents of `path` below the given prefix.
    ///
    /// The stack is left exactly as it was passed in, whether rendering
    /// succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns the first scan or write error encountered; rendering stops
    /// immediately.
    pub fn render(&mut self, path: &Path, prefix: &mut PrefixStack) -> DirtreeResult<()> {
        let entries = scan::list_dir(path, self.include_files)?;

        let Some((last, rest)) = entries.split_last() else {
            return Ok(());
        };

        debug!(path = %path.display(), depth = prefix.depth(), "rendering directory");

        let mut level = prefix.enter(self.chars.branch);

        for entry in rest {
            self.write_line(&level, entry)?;
            if entry.is_dir() {
                level.replace_last(self.chars.vertical);
                self.render(&entry.path, &mut level)?;
                level.replace_last(self.chars.branch);
            }
        }

        level.replace_last(self.chars.last_branch);
        self.write_line(&level, last)?;
        level.replace_last(self.chars.space);

        if last.is_dir() {
            self.render(&last.path, &mut level)?;
        }

        Ok(())
    }

    /// Writes one entry line.
    fn write_line(&mut self, prefix: &PrefixStack, entry: &DirectoryEntry) -> Result<(), RenderError> {
        writeln!(self.out, "{}{}", prefix, format_entry(entry))?;
        Ok(())
    }
}

/// Renders the tree rooted at `path` into `out`.
///
/// The root itself is not printed; its children start at depth one. The root
/// is checked before anything is written, so an invalid root produces no
/// output at all.
///
/// # Errors
///
/// Returns a scan error if the root or any subdirectory cannot be read, and a
/// render error if writing to `out` fails.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dirtree::config::CharsetMode;
/// use dirtree::render::render_tree;
///
/// let mut out = Vec::new();
/// render_tree(&mut out, Path::new("."), false, CharsetMode::Unicode).unwrap();
/// ```
pub fn render_tree<W: Write>(
    out: W,
    path: &Path,
    include_files: bool,
    charset: CharsetMode,
) -> DirtreeResult<()> {
    scan::check_root(path)?;

    let mut renderer = TreeRenderer::new(out, include_files, TreeChars::from_charset(charset));
    renderer.render(path, &mut PrefixStack::new())?;
    renderer.out.flush().map_err(RenderError::from)?;

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
