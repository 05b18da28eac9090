use std::fmt;

use serde::Serialize;

/// How much detail an explanation or code sample should carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthLevel {
    Brief,
    #[default]
    Moderate,
    Comprehensive,
}

impl DepthLevel {
    /// Unrecognized or missing values fall back to [`DepthLevel::Moderate`].
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("brief") => DepthLevel::Brief,
            Some(v) if v.eq_ignore_ascii_case("moderate") => DepthLevel::Moderate,
            Some(v) if v.eq_ignore_ascii_case("comprehensive") => DepthLevel::Comprehensive,
            _ => DepthLevel::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DepthLevel::Brief => "brief",
            DepthLevel::Moderate => "moderate",
            DepthLevel::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target length of an audio script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioLength {
    #[default]
    Brief,
    Detailed,
}

impl AudioLength {
    /// Unrecognized or missing values fall back to [`AudioLength::Brief`].
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("detailed") => AudioLength::Detailed,
            _ => AudioLength::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioLength::Brief => "brief",
            AudioLength::Detailed => "detailed",
        }
    }
}

impl fmt::Display for AudioLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentVariant {
    Text,
    Code,
    Audio,
    Visual,
}

impl fmt::Display for ContentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentVariant::Text => write!(f, "text"),
            ContentVariant::Code => write!(f, "code"),
            ContentVariant::Audio => write!(f, "audio"),
            ContentVariant::Visual => write!(f, "visual"),
        }
    }
}
