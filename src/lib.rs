//! scriptrun - Script/Level Itemization
//!
//! The first structural stage of a text-layout pipeline:
//! - Script classification (weak, spaceless, vertical, glyph rotation)
//! - Itemization of code points into script/bidi-level runs
//! - The shaped-glyph record the downstream shaper emits per run
//!
//! Callers decode text and resolve bidi embedding levels up front (e.g. with
//! `unicode-bidi`), itemize with [`itemize`], hand each [`ScriptRun`] to a
//! shaper bound to one font and size, and lay out the resulting
//! [`ShapedGlyph`] records, applying [`ShapedGlyph::rotation`] when painting
//! vertical text. Everything here is a pure function over its input: no
//! shared state, no I/O, safe to call concurrently on independent texts.

pub mod itemize;
pub mod script;
pub mod shaping;

pub use itemize::{itemize, ScriptRun};
pub use script::{
    is_paragraph_separator, is_spaceless_script, is_vertical_script, is_weak_script,
    script_class, script_rotation, Rotation, ScriptClass,
};
pub use shaping::{FontId, ShapedGlyph};

// The script property enumeration itself comes from the Unicode tables.
pub use unicode_script::Script;
