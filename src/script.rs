//! Script Classification
//!
//! Per-script layout properties: which scripts are weak (script-neutral),
//! which are written without word-separating spaces, which support vertical
//! writing, and how glyphs rotate in vertical layout.
//!
//! These are lookup tables over the Unicode script property, not algorithms.
//! Scripts without an entry get the conservative default (no special
//! handling), which is intentional: an unanticipated script degrades to
//! plain treatment instead of failing.

use unicode_script::Script;

/// Glyph rotation applied when painting a run in vertical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Glyph stays upright
    #[default]
    None,
    /// Rotated 90 degrees clockwise
    Clockwise,
    /// Rotated 90 degrees counter-clockwise
    CounterClockwise,
}

impl Rotation {
    /// Rotation angle in degrees, negative for clockwise.
    pub const fn degrees(self) -> f32 {
        match self {
            Rotation::None => 0.0,
            Rotation::Clockwise => -90.0,
            Rotation::CounterClockwise => 90.0,
        }
    }
}

/// Layout properties of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptClass {
    /// Script does not use word-separating whitespace
    pub spaceless: bool,
    /// Script has an established vertical writing convention
    pub vertical: bool,
    /// Intrinsic glyph rotation in vertical layout
    pub rotation: Rotation,
}

/// Look up the layout properties of a script.
///
/// Total over all scripts: anything not listed gets
/// `{spaceless: false, vertical: false, rotation: None}`.
pub const fn script_class(script: Script) -> ScriptClass {
    ScriptClass {
        spaceless: matches!(
            script,
            Script::Han
                | Script::Hangul
                | Script::Katakana
                | Script::Khmer
                | Script::Lao
                | Script::Phags_Pa
                | Script::Brahmi
                | Script::Tai_Tham
                | Script::New_Tai_Lue
                | Script::Tai_Le
                | Script::Tai_Viet
                | Script::Thai
                | Script::Tibetan
                | Script::Myanmar
        ),
        vertical: matches!(
            script,
            Script::Bopomofo
                | Script::Egyptian_Hieroglyphs
                | Script::Hiragana
                | Script::Katakana
                | Script::Han
                | Script::Hangul
                | Script::Meroitic_Cursive
                | Script::Meroitic_Hieroglyphs
                | Script::Mongolian
                | Script::Ogham
                | Script::Old_Turkic
                | Script::Phags_Pa
                | Script::Yi
        ),
        rotation: match script {
            Script::Mongolian | Script::Phags_Pa => Rotation::Clockwise,
            Script::Ogham | Script::Old_Turkic => Rotation::CounterClockwise,
            _ => Rotation::None,
        },
    }
}

/// Check if a script is weak (script-neutral): `Common` covers punctuation,
/// digits and symbols, `Inherited` covers combining marks. Weak code points
/// take the script of the text around them during itemization.
pub const fn is_weak_script(script: Script) -> bool {
    matches!(script, Script::Common | Script::Inherited)
}

/// Check if a script is written without word-separating spaces.
pub const fn is_spaceless_script(script: Script) -> bool {
    script_class(script).spaceless
}

/// Check if a script supports vertical writing mode.
pub const fn is_vertical_script(script: Script) -> bool {
    script_class(script).vertical
}

/// Intrinsic glyph rotation of a script in vertical layout.
pub const fn script_rotation(script: Script) -> Rotation {
    script_class(script).rotation
}

/// Check if a code point separates paragraphs.
pub const fn is_paragraph_separator(c: char) -> bool {
    // line feed, vertical tab, form feed, carriage return, next line,
    // line separator, paragraph separator
    matches!(c, '\u{0A}'..='\u{0D}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
