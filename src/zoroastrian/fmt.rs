//! Roj and mah names, and rendering dates through display templates.

use std::str::FromStr;

use serde::Deserialize;

use super::TraditionalDate;
use crate::error::CalendarError;

/// Month names, `MAH_NAMES[0]` being mah 1 (Fravardin).
pub const MAH_NAMES: [&str; 12] = [
    "Fravardin", "Ardibehesht", "Khordad", "Tir", "Amardad", "Shehrevar", "Meher", "Ava", "Adar",
    "Dae", "Bahman", "Aspandard",
];

/// Day names, `ROJ_NAMES[0]` being roj 1 (Hormazd). Roj 31 to 35 are the
/// five Gatha days closing the year; roj 36 is the leap day.
pub const ROJ_NAMES: [&str; 36] = [
    "Hormazd", "Bahman", "Ardibehesht", "Shehrevar", "Aspandard", "Khordad", "Amardad",
    "Dae-Pa-Adar", "Adar", "Ava", "Khorshed", "Mohor", "Tir", "Gosh", "Dae-Pa-Meher", "Meher",
    "Srosh", "Rashne", "Fravardin", "Behram", "Ram", "Govad", "Dae-Pa-Din", "Din", "Ashishvangh",
    "Ashtad", "Asman", "Zamyad", "Mareshpand", "Aneran", "Ahunavad", "Ashtavad", "Spentamainyu",
    "Vohuxshathra", "Vahishtoisht", "Avardad-Saal",
];

/// Name of roj `roj`.
///
/// # Example
///
/// ```
/// use parsi_calendar::zoroastrian::fmt;
///
/// assert_eq!("Govad", fmt::roj_name(22));
/// ```
///
/// # Panics
///
/// Panics if `roj` is not in `1..=36`.
pub fn roj_name(roj: u32) -> &'static str {
    match roj {
        1..=36 => ROJ_NAMES[roj as usize - 1],
        _ => panic!("roj {} not in 1..=36", roj),
    }
}

/// Name of mah `mah`.
///
/// # Example
///
/// ```
/// use parsi_calendar::zoroastrian::fmt;
///
/// assert_eq!("Ava", fmt::mah_name(8));
/// ```
///
/// # Panics
///
/// Panics if `mah` is not in `1..=12`.
pub fn mah_name(mah: u32) -> &'static str {
    match mah {
        1..=12 => MAH_NAMES[mah as usize - 1],
        _ => panic!("mah {} not in 1..=12", mah),
    }
}

/// Built-in display templates.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// `Govad, mah Ava, 1394 yz`
    Compact,
    /// `Govad Roj, Ava Mah, 1394 Y.Z.`
    #[default]
    Formal,
}

impl Preset {
    pub fn template(&self) -> &'static str {
        match self {
            Preset::Compact => "{roj}, mah {mah}, {year} yz",
            Preset::Formal => "{roj} Roj, {mah} Mah, {year} Y.Z.",
        }
    }
}

impl FromStr for Preset {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Preset::Compact),
            "formal" => Ok(Preset::Formal),
            _ => Err(CalendarError::UnknownName {
                kind: "display preset",
                name: s.into(),
            }),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Field {
    RojName,
    MahName,
    Year,
    RojNumber,
    MahNumber,
    DayOfYear,
}

impl Field {
    fn from_placeholder(name: &str) -> Option<Self> {
        Some(match name {
            "roj" => Field::RojName,
            "mah" => Field::MahName,
            "year" => Field::Year,
            "roj_num" => Field::RojNumber,
            "mah_num" => Field::MahNumber,
            "day_of_year" => Field::DayOfYear,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A compiled display template.
///
/// Placeholders are `{roj}` and `{mah}` for names, `{year}`, `{roj_num}`,
/// `{mah_num}` and `{day_of_year}` for numbers. `{{` and `}}` stand for
/// literal braces.
///
/// # Example
///
/// ```
/// use parsi_calendar::TraditionalDate;
/// use parsi_calendar::zoroastrian::fmt::DisplayFormat;
///
/// let format = DisplayFormat::parse("{roj_num}/{mah_num}/{year} ({roj})").unwrap();
/// let date = TraditionalDate::new(22, 8, 1394).unwrap();
/// assert_eq!("22/8/1394 (Govad)", format.render(&date));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DisplayFormat {
    template: String,
    segments: Vec<Segment>,
}

impl DisplayFormat {
    /// Compiles `template`.
    ///
    /// Returns `Err` on an unknown or unterminated placeholder, or a stray
    /// closing brace.
    pub fn parse(template: &str) -> Result<Self, CalendarError> {
        let invalid = |reason: String| CalendarError::InvalidTemplate {
            template: template.into(),
            reason,
        };

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(invalid("unterminated placeholder".into())),
                        }
                    }
                    let field = Field::from_placeholder(&name)
                        .ok_or_else(|| invalid(format!("unknown placeholder `{name}`")))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(invalid("unmatched `}`".into())),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            template: template.into(),
            segments,
        })
    }

    /// The template this format was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Renders `date` through the template.
    pub fn render(&self, date: &TraditionalDate) -> String {
        let mut rt = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => rt += s,
                Segment::Field(Field::RojName) => rt += date.roj_name(),
                Segment::Field(Field::MahName) => rt += date.mah_name(),
                Segment::Field(Field::Year) => rt += &date.year().to_string(),
                Segment::Field(Field::RojNumber) => rt += &date.roj().to_string(),
                Segment::Field(Field::MahNumber) => rt += &date.mah().to_string(),
                Segment::Field(Field::DayOfYear) => rt += &date.day_of_year().to_string(),
            }
        }
        rt
    }
}

impl From<Preset> for DisplayFormat {
    fn from(preset: Preset) -> Self {
        Self::parse(preset.template()).expect("preset templates are well-formed")
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Preset::default().into()
    }
}

impl FromStr for DisplayFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders `date` for display.
///
/// # Example
///
/// ```
/// use parsi_calendar::TraditionalDate;
/// use parsi_calendar::zoroastrian::fmt::{DisplayFormat, Preset, format_display_string};
///
/// let date = TraditionalDate::new(22, 8, 1394).unwrap();
/// assert_eq!(
///     "Govad Roj, Ava Mah, 1394 Y.Z.",
///     format_display_string(&date, &DisplayFormat::from(Preset::Formal))
/// );
/// assert_eq!(
///     "Govad, mah Ava, 1394 yz",
///     format_display_string(&date, &DisplayFormat::from(Preset::Compact))
/// );
/// ```
pub fn format_display_string(date: &TraditionalDate, format: &DisplayFormat) -> String {
    format.render(date)
}
