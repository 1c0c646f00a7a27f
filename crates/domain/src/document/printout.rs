//! Non-fiscal printout (`nf_printout`)

use serde::{Deserialize, Serialize};

use super::common::{DeviceControl, EDocument, SystemInfo};
use super::lines::PrintoutLine;
use super::{validate_each, Validate};
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrintoutOptions {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub without_header: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub left_margin: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub copy_only: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fiscal_margins_off: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Printout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PrintoutOptions>,
    pub lines: Vec<PrintoutLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e_document: Option<EDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_control: Option<DeviceControl>,
}

impl Validate for Printout {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.lines.is_empty() {
            return Err(ValidationError::new("lines are required"));
        }
        validate_each(&self.lines, "lines")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::lines::{Line, TextLine};

    #[test]
    fn printout_requires_lines() {
        assert_eq!(Printout::default().validate().unwrap_err().message, "lines are required");
    }

    #[test]
    fn printout_checks_each_line() {
        let printout = Printout {
            lines: vec![
                PrintoutLine::Line(Line { text: "Order #12".into(), masked: false }),
                PrintoutLine::TextLine(TextLine {
                    text: "Thank you".into(),
                    font_number: Some(9),
                    ..Default::default()
                }),
            ],
            ..Default::default()
        };
        assert_eq!(
            printout.validate().unwrap_err().message,
            "lines[1].font_number must be between 1 and 3"
        );
    }
}
