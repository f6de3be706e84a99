//! Open/closed state for the collapsible sections and the letter dialog.
//!
//! ```text
//! ┌──────────────┐  Toggle / Open   ┌──────────────┐
//! │  collapsed   │ ───────────────▶ │   expanded   │
//! │   (closed)   │ ◀─────────────── │    (open)    │
//! └──────────────┘  Toggle / Close  └──────────────┘
//! ```
//!
//! Every section runs this machine on its own flag. Nothing here couples two
//! flags: opening one section never closes another.

use std::fmt;

/// One of the four toggleable parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// Word list panel
    Vocabulary,
    /// Favorite activity panel
    Activity,
    /// Trip reflection panel
    Reflection,
    /// Letter overlay dialog
    Letter,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 4] = [
        Section::Vocabulary,
        Section::Activity,
        Section::Reflection,
        Section::Letter,
    ];

    /// Stable identifier used in element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Vocabulary => "vocabulary",
            Section::Activity => "activity",
            Section::Reflection => "reflection",
            Section::Letter => "letter",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A state change requested by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    /// Invert the flag
    Toggle(Section),
    /// Set the flag (idempotent)
    Open(Section),
    /// Clear the flag (idempotent)
    Close(Section),
}

impl SectionAction {
    /// The section this action targets.
    pub fn section(&self) -> Section {
        match *self {
            SectionAction::Toggle(s) | SectionAction::Open(s) | SectionAction::Close(s) => s,
        }
    }
}

/// Four independent booleans, all false at load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionFlags {
    vocabulary: bool,
    activity: bool,
    reflection: bool,
    letter: bool,
}

impl SectionFlags {
    /// All sections collapsed and the letter closed.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, section: Section) -> &mut bool {
        match section {
            Section::Vocabulary => &mut self.vocabulary,
            Section::Activity => &mut self.activity,
            Section::Reflection => &mut self.reflection,
            Section::Letter => &mut self.letter,
        }
    }

    /// Current value of one flag.
    pub fn is_open(&self, section: Section) -> bool {
        match section {
            Section::Vocabulary => self.vocabulary,
            Section::Activity => self.activity,
            Section::Reflection => self.reflection,
            Section::Letter => self.letter,
        }
    }

    /// Invert one flag and return its new value.
    pub fn toggle(&mut self, section: Section) -> bool {
        let slot = self.slot(section);
        *slot = !*slot;
        tracing::debug!(%section, open = *slot, "section toggled");
        *slot
    }

    pub fn toggle_vocabulary(&mut self) -> bool {
        self.toggle(Section::Vocabulary)
    }

    pub fn toggle_activity(&mut self) -> bool {
        self.toggle(Section::Activity)
    }

    pub fn toggle_reflection(&mut self) -> bool {
        self.toggle(Section::Reflection)
    }

    pub fn toggle_letter(&mut self) -> bool {
        self.toggle(Section::Letter)
    }

    /// Set one flag. Returns true if it was closed before.
    pub fn open(&mut self, section: Section) -> bool {
        let slot = self.slot(section);
        let changed = !*slot;
        *slot = true;
        changed
    }

    /// Clear one flag. Returns true if it was open before.
    pub fn close(&mut self, section: Section) -> bool {
        let slot = self.slot(section);
        let changed = *slot;
        *slot = false;
        changed
    }

    /// Reducer entry point. Returns whether the targeted flag changed.
    pub fn apply(&mut self, action: SectionAction) -> bool {
        match action {
            SectionAction::Toggle(s) => {
                self.toggle(s);
                true
            }
            SectionAction::Open(s) => self.open(s),
            SectionAction::Close(s) => self.close(s),
        }
    }

    /// Sections currently open, in page order.
    pub fn open_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.is_open(*s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_closed() {
        let flags = SectionFlags::new();
        for section in Section::ALL {
            assert!(!flags.is_open(section));
        }
        assert!(flags.open_sections().is_empty());
    }

    #[test]
    fn toggle_returns_new_value() {
        let mut flags = SectionFlags::new();
        assert!(flags.toggle_activity());
        assert!(!flags.toggle_activity());
    }

    #[test]
    fn named_toggles_hit_their_own_flag() {
        let mut flags = SectionFlags::new();
        flags.toggle_vocabulary();
        flags.toggle_reflection();
        flags.toggle_letter();
        assert_eq!(
            flags.open_sections(),
            vec![Section::Vocabulary, Section::Reflection, Section::Letter]
        );
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut flags = SectionFlags::new();
        assert!(flags.open(Section::Letter));
        assert!(!flags.open(Section::Letter));
        assert!(flags.is_open(Section::Letter));
        assert!(flags.close(Section::Letter));
        assert!(!flags.close(Section::Letter));
        assert!(!flags.is_open(Section::Letter));
    }

    #[test]
    fn apply_reports_change() {
        let mut flags = SectionFlags::new();
        assert!(flags.apply(SectionAction::Toggle(Section::Reflection)));
        assert!(!flags.apply(SectionAction::Open(Section::Reflection)));
        assert!(flags.apply(SectionAction::Close(Section::Reflection)));
        assert!(!flags.is_open(Section::Reflection));
    }

    #[test]
    fn action_targets() {
        assert_eq!(
            SectionAction::Close(Section::Letter).section(),
            Section::Letter
        );
        assert_eq!(
            SectionAction::Toggle(Section::Activity).section(),
            Section::Activity
        );
    }

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = Section::ALL.iter().map(Section::slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), Section::ALL.len());
    }
}
