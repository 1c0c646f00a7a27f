//! Free-text lines printed on documents

use serde::{Deserialize, Serialize};

use super::{require, Validate};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintoutLine {
    Line(Line),
    TextLine(TextLine),
}

impl Validate for PrintoutLine {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Line(line) => line.validate(),
            Self::TextLine(line) => line.validate(),
        }
    }
}

/// Plain text line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    pub masked: bool,
}

impl Validate for Line {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.text, "text")
    }
}

/// Formatted text line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextLine {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub invers: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub center: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_number: Option<u8>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub big: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub text: String,
    pub masked: bool,
}

impl Validate for TextLine {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.text, "text")?;
        if let Some(font) = self.font_number {
            if !(1..=3).contains(&font) {
                return Err(ValidationError::new("font_number must be between 1 and 3"));
            }
        }
        Ok(())
    }
}
