//! Script Itemization
//!
//! Segments a code-point sequence into maximal contiguous runs that share
//! one resolved script and one bidi embedding level. Every later pipeline
//! stage (font selection, shaping, line breaking) operates per-run, so this
//! is the first structural split of the text.
//!
//! Level boundaries are hard: a run is shaped in a single direction, so two
//! adjacent code points with different embedding levels never share a run.
//! Script boundaries are soft around weak (`Common`/`Inherited`) code
//! points: punctuation and combining marks absorb into the neighboring
//! concrete-script run, so a quotation mark is shaped with the word it
//! punctuates instead of alone.

use unicode_script::{Script, UnicodeScript};

use crate::script::is_weak_script;

/// A maximal contiguous run of code points with one resolved script and one
/// embedding level.
///
/// Concatenating the `text` of every run emitted for an input, in order,
/// reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun<'a> {
    /// Resolved script of the run. Stays `Common`/`Inherited` only if no
    /// concrete script ever appeared; such a run is script-agnostic and
    /// should be shaped with a default font.
    pub script: Script,
    /// The run's code points, borrowed from the input slice.
    pub text: &'a [char],
}

/// Pending-run state of the itemizer: the resolved script and embedding
/// level of the run currently being built.
#[derive(Debug, Clone, Copy)]
struct RunState {
    script: Script,
    level: u8,
}

impl RunState {
    /// Feed the next position's script and level. Returns the resolved
    /// script of the finished run if this position starts a new one, or
    /// `None` if the current run absorbs it.
    fn advance(&mut self, script: Script, level: u8) -> Option<Script> {
        let level_cut = level != self.level;
        let script_cut =
            script != self.script && !is_weak_script(script) && !is_weak_script(self.script);
        if level_cut || script_cut {
            let closed = self.script;
            self.script = script;
            self.level = level;
            return Some(closed);
        }
        // A run opened by weak code points inherits the first concrete
        // script that follows; a concrete run never downgrades.
        if is_weak_script(self.script) && !is_weak_script(script) {
            self.script = script;
        }
        None
    }
}

/// Segment `text` into script/level runs.
///
/// `levels` holds the bidi embedding level of each code point, parallel to
/// `text`, as produced by UAX-9 resolution. Runs are emitted in input order
/// and partition the input exactly. An empty input yields a single run with
/// empty text and script [`Script::Common`].
///
/// # Panics
///
/// Panics if `text` and `levels` have different lengths. A mismatch is a
/// caller bug; truncating or padding would silently corrupt run boundaries.
pub fn itemize<'a>(text: &'a [char], levels: &[u8]) -> Vec<ScriptRun<'a>> {
    assert_eq!(
        text.len(),
        levels.len(),
        "one embedding level per code point"
    );

    let mut runs = Vec::new();
    let mut state = RunState {
        script: Script::Common,
        level: 0,
    };
    let mut start = 0;
    for (j, &c) in text.iter().enumerate() {
        let script = lookup_script(c);
        let level = levels[j];
        if j == 0 {
            state = RunState { script, level };
        } else if let Some(script) = state.advance(script, level) {
            runs.push(ScriptRun {
                script,
                text: &text[start..j],
            });
            start = j;
        }
    }
    runs.push(ScriptRun {
        script: state.script,
        text: &text[start..],
    });

    tracing::trace!(
        "itemized {} code points into {} runs",
        text.len(),
        runs.len()
    );
    runs
}

/// Script property of a single code point. Unassigned code points come back
/// as `Unknown` from the property table; they are folded into `Common` so
/// unanticipated input gets plain weak treatment instead of splitting runs.
fn lookup_script(c: char) -> Script {
    match c.script() {
        Script::Unknown => Script::Common,
        script => script,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run_text(run: &ScriptRun<'_>) -> String {
        run.text.iter().collect()
    }

    #[test]
    fn test_single_script() {
        let text = chars("Hello World");
        let runs = itemize(&text, &[0; 11]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Latin);
        assert_eq!(run_text(&runs[0]), "Hello World");
    }

    #[test]
    fn test_weak_absorption() {
        // "A" + combining acute (Inherited) + Han + "!" (Common), level 0
        // throughout: the accent trails into the Latin run, the Han/Latin
        // boundary cuts, and the trailing "!" absorbs into the Han run.
        let text = ['A', '\u{0301}', '一', '!'];
        let runs = itemize(&text, &[0; 4]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].script, Script::Latin);
        assert_eq!(runs[0].text, &['A', '\u{0301}']);
        assert_eq!(runs[1].script, Script::Han);
        assert_eq!(runs[1].text, &['一', '!']);
    }

    #[test]
    fn test_level_always_cuts() {
        // Same script on both sides: the level change still splits.
        let text = ['A', 'B'];
        let runs = itemize(&text, &[0, 1]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, &['A']);
        assert_eq!(runs[1].text, &['B']);
        assert_eq!(runs[0].script, Script::Latin);
        assert_eq!(runs[1].script, Script::Latin);
    }

    #[test]
    fn test_level_cuts_between_weak() {
        // Even two Common code points cannot merge across a level change.
        let text = ['.', '.'];
        let runs = itemize(&text, &[1, 2]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].script, Script::Common);
        assert_eq!(runs[1].script, Script::Common);
    }

    #[test]
    fn test_empty_input() {
        let runs = itemize(&[], &[]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Common);
        assert!(runs[0].text.is_empty());
    }

    #[test]
    fn test_single_code_point() {
        let text = ['中'];
        let runs = itemize(&text, &[0]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Han);
        assert_eq!(runs[0].text, &['中']);
    }

    #[test]
    fn test_all_weak_stays_weak() {
        let text = chars("... 123");
        let runs = itemize(&text, &[0; 7]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Common);
    }

    #[test]
    fn test_weak_prefix_upgrades() {
        // A run opened by punctuation adopts the first concrete script.
        let text = chars("«hola»");
        let runs = itemize(&text, &[0; 6]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Latin);
    }

    #[test]
    fn test_weak_between_scripts_joins_left() {
        // Weak code points between two concrete scripts trail into the run
        // already open; the next concrete script starts a fresh run.
        let text = chars("abc, ぜんぶ");
        let runs = itemize(&text, &[0; 8]);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].script, Script::Latin);
        assert_eq!(run_text(&runs[0]), "abc, ");
        assert_eq!(runs[1].script, Script::Hiragana);
        assert_eq!(run_text(&runs[1]), "ぜんぶ");
    }

    #[test]
    fn test_concatenation_partitions_input() {
        let text = chars("fox 狐 شعلة 123 กิน!");
        let levels: Vec<u8> = (0..text.len()).map(|i| (i / 5) as u8).collect();
        let runs = itemize(&text, &levels);
        let rejoined: String = runs.iter().map(run_text).collect();
        assert_eq!(rejoined, "fox 狐 شعلة 123 กิน!");
        for run in &runs {
            assert!(!run.text.is_empty());
        }
    }

    #[test]
    fn test_unassigned_treated_as_common() {
        // U+0378 is unassigned; it must merge like any weak code point.
        let text = ['a', '\u{0378}', 'b'];
        let runs = itemize(&text, &[0; 3]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Latin);
    }

    #[test]
    #[should_panic(expected = "one embedding level per code point")]
    fn test_mismatched_lengths_panics() {
        itemize(&['a', 'b'], &[0]);
    }
}
