//! Album data model.
//!
//! An [`Album`] is everything the page shows: photos in display order, the
//! copy for the three text sections and the letter. Albums are authored as
//! JSON; the presets below are compiled into the binary.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScrapbookError, ScrapbookResult};
use crate::sections::Section;

const DUBLIN_JSON: &str = include_str!("../albums/dublin.json");
const PLACEHOLDER_JSON: &str = include_str!("../albums/placeholder.json");

/// One gallery photo. List position is display position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Image resource reference (path or URL)
    pub path: String,
    pub caption: String,
}

/// Title row of a collapsible section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    /// Emoji or short glyph shown before the title
    #[serde(default)]
    pub icon: String,
}

impl SectionHeading {
    /// Element id fragment derived from the title ("Irish Vocabulary" -> "irish-vocabulary").
    pub fn anchor(&self) -> String {
        self.title
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularySection {
    pub heading: SectionHeading,
    pub entries: Vec<VocabularyEntry>,
}

/// A section made of plain paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProseSection {
    pub heading: SectionHeading,
    pub paragraphs: Vec<String>,
}

/// Static text shown in the letter dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    /// Label of the button that opens the dialog
    pub button_label: String,
    pub salutation: String,
    pub paragraphs: Vec<String>,
    pub closing: String,
    pub signature: String,
}

/// The data set a scrapbook page is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Page heading
    pub title: String,
    pub gallery_heading: String,
    pub photos: Vec<Photo>,
    pub vocabulary: VocabularySection,
    pub activity: ProseSection,
    pub reflection: ProseSection,
    pub letter: Letter,
}

impl Album {
    /// Parse and validate an album from JSON.
    pub fn from_json_str(json: &str) -> ScrapbookResult<Self> {
        let album: Album = serde_json::from_str(json)?;
        album.validate()?;
        Ok(album)
    }

    /// Read, parse and validate an album file.
    pub fn from_path(path: impl AsRef<Path>) -> ScrapbookResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let album = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), photos = album.photos.len(), "album loaded");
        Ok(album)
    }

    /// Load one of the embedded albums.
    pub fn preset(preset: AlbumPreset) -> ScrapbookResult<Self> {
        Self::from_json_str(preset.json())
    }

    /// Pretty JSON, suitable as an authoring starting point.
    pub fn to_json_pretty(&self) -> ScrapbookResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the fields the page cannot render without.
    pub fn validate(&self) -> ScrapbookResult<()> {
        if self.title.trim().is_empty() {
            return Err(ScrapbookError::InvalidAlbum("title is empty".into()));
        }

        for (i, photo) in self.photos.iter().enumerate() {
            if photo.path.trim().is_empty() {
                return Err(ScrapbookError::InvalidAlbum(format!(
                    "photo {i} has an empty path"
                )));
            }
            if photo.caption.trim().is_empty() {
                return Err(ScrapbookError::InvalidAlbum(format!(
                    "photo {i} has an empty caption"
                )));
            }
        }

        for (i, entry) in self.vocabulary.entries.iter().enumerate() {
            if entry.word.trim().is_empty() {
                return Err(ScrapbookError::InvalidAlbum(format!(
                    "vocabulary entry {i} has an empty word"
                )));
            }
        }

        if self.letter.salutation.trim().is_empty() {
            return Err(ScrapbookError::InvalidAlbum(
                "letter salutation is empty".into(),
            ));
        }

        Ok(())
    }

    /// Heading shown for a section. The letter reuses its button label.
    pub fn section_heading(&self, section: Section) -> SectionHeading {
        match section {
            Section::Vocabulary => self.vocabulary.heading.clone(),
            Section::Activity => self.activity.heading.clone(),
            Section::Reflection => self.reflection.heading.clone(),
            Section::Letter => SectionHeading {
                title: self.letter.button_label.clone(),
                icon: "\u{2709}".to_string(),
            },
        }
    }
}

/// Albums compiled into the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlbumPreset {
    /// Dublin and Bray trip
    #[default]
    Dublin,
    /// Same layout with placeholder copy
    Placeholder,
}

impl AlbumPreset {
    pub const ALL: [AlbumPreset; 2] = [AlbumPreset::Dublin, AlbumPreset::Placeholder];

    pub fn name(&self) -> &'static str {
        match self {
            AlbumPreset::Dublin => "dublin",
            AlbumPreset::Placeholder => "placeholder",
        }
    }

    fn json(&self) -> &'static str {
        match self {
            AlbumPreset::Dublin => DUBLIN_JSON,
            AlbumPreset::Placeholder => PLACEHOLDER_JSON,
        }
    }
}

impl fmt::Display for AlbumPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlbumPreset {
    type Err = ScrapbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AlbumPreset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ScrapbookError::UnknownPreset(s.to_string()))
    }
}
