//! Shaped Output Model
//!
//! The per-glyph record a shaper emits for each [`ScriptRun`], and the
//! rotation policy applied when painting vertical text. No shaping happens
//! here; this is the data contract between the shaper and the layout stage.
//!
//! [`ScriptRun`]: crate::itemize::ScriptRun

use std::fmt;

use unicode_script::Script;

use crate::script::{script_rotation, Rotation};

/// Identity of a shared, externally-owned font. Glyphs reference the font
/// they were shaped with; they never own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// A shaped glyph for the given font and font size.
///
/// One glyph of the shaper's output for a single run: the glyph ID within
/// the font, the cluster it maps back to, its X and Y advance and offset in
/// font design units, and the source code point it primarily represents.
/// Immutable once created; a run may yield zero, one, or many of these
/// (ligatures merge code points, decomposition splits them).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    /// Font the glyph was shaped with
    pub font: FontId,
    /// Point size used for shaping
    pub size: f32,
    /// Resolved script of the run this glyph came from
    pub script: Script,
    /// Glyph is laid out in vertical writing mode
    pub vertical: bool,
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// Cluster index, for cursor and selection mapping
    pub cluster: u32,
    /// Horizontal advance (font units)
    pub x_advance: i32,
    /// Vertical advance (font units)
    pub y_advance: i32,
    /// X offset from current position (font units)
    pub x_offset: i32,
    /// Y offset from current position (font units)
    pub y_offset: i32,
    /// Source code point this glyph primarily represents
    pub text: char,
}

impl ShapedGlyph {
    /// Rotation to apply when painting this glyph.
    ///
    /// Horizontal layout never rotates. Vertical layout uses the script's
    /// intrinsic rotation; scripts without one (Latin embedded in vertical
    /// CJK, say) default to clockwise so they read sideways.
    ///
    /// Always derived from script + layout mode, never stored, so it cannot
    /// drift from the glyph it describes.
    pub fn rotation(&self) -> Rotation {
        if !self.vertical {
            return Rotation::None;
        }
        match script_rotation(self.script) {
            Rotation::None => Rotation::Clockwise,
            rotation => rotation,
        }
    }
}

impl fmt::Display for ShapedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} GID={} Cluster={} Adv=({},{}) Off=({},{})",
            self.text,
            self.glyph_id,
            self.cluster,
            self.x_advance,
            self.y_advance,
            self.x_offset,
            self.y_offset
        )
    }
}
