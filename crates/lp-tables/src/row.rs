//! Table rows and typed views over a rolled row.

use serde::Deserialize;

use crate::error::{TableError, TableResult};

/// One row of a roll table.
///
/// Most tables hold plain text. `Family Background` rows are a
/// two-element list (family type, anecdote) and `Cultural Origins` rows
/// are a region/languages record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Row {
    /// A plain text row.
    Text(String),
    /// A list of strings.
    List(Vec<String>),
    /// A cultural origin record.
    Origin(OriginRow),
}

impl From<&str> for Row {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// A raw `Cultural Origins` row as it appears in the data file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OriginRow {
    /// Region name; may hold `/`-separated alternatives.
    #[serde(rename = "Cultural Region", default)]
    pub region: Option<String>,
    /// Languages spoken in the region.
    #[serde(rename = "Languages", default)]
    pub languages: Option<Vec<String>>,
}

/// A validated view of a cultural origin row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin<'a> {
    /// Region name, possibly with `/` alternatives.
    pub region: &'a str,
    /// Languages, never empty.
    pub languages: &'a [String],
}

/// A row together with the table and roll it came from.
#[derive(Debug, Clone, Copy)]
pub struct RolledRow<'a> {
    /// Table the row belongs to.
    pub table: &'a str,
    /// Key of the row.
    pub roll: u32,
    /// The row itself.
    pub row: &'a Row,
}

impl<'a> RolledRow<'a> {
    /// The row as plain text.
    pub fn text(&self) -> TableResult<&'a str> {
        match self.row {
            Row::Text(text) => Ok(text.as_str()),
            _ => Err(self.malformed("expected a text row")),
        }
    }

    /// The row as a two-element list.
    pub fn pair(&self) -> TableResult<(&'a str, &'a str)> {
        match self.row {
            Row::List(items) if items.len() == 2 => Ok((items[0].as_str(), items[1].as_str())),
            _ => Err(self.malformed("expected a list of two strings")),
        }
    }

    /// The row as a cultural origin record.
    pub fn origin(&self) -> TableResult<Origin<'a>> {
        let Row::Origin(raw) = self.row else {
            return Err(self.malformed("expected a 'Cultural Region'/'Languages' record"));
        };
        let region = match raw.region.as_deref() {
            Some(region) if !region.trim().is_empty() => region,
            _ => return Err(self.malformed("missing 'Cultural Region'")),
        };
        let languages = match raw.languages.as_deref() {
            Some(languages) if !languages.is_empty() => languages,
            _ => return Err(self.malformed("missing 'Languages'")),
        };
        Ok(Origin { region, languages })
    }

    fn malformed(&self, reason: &str) -> TableError {
        TableError::MalformedRow {
            table: self.table.to_string(),
            roll: self.roll,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled(row: &Row) -> RolledRow<'_> {
        RolledRow {
            table: "Test",
            roll: 3,
            row,
        }
    }

    #[test]
    fn untagged_rows_deserialize() {
        let text: Row = serde_yaml::from_str("\"Cold and distant\"").unwrap();
        assert_eq!(text, Row::from("Cold and distant"));

        let list: Row = serde_yaml::from_str("[Corporate Execs, Moved often]").unwrap();
        assert_eq!(
            list,
            Row::List(vec!["Corporate Execs".into(), "Moved often".into()])
        );

        let origin: Row =
            serde_yaml::from_str("{Cultural Region: North America, Languages: [English]}").unwrap();
        assert_eq!(
            origin,
            Row::Origin(OriginRow {
                region: Some("North America".into()),
                languages: Some(vec!["English".into()]),
            })
        );
    }

    #[test]
    fn text_view_rejects_lists() {
        let row = Row::List(vec!["a".into(), "b".into()]);
        let err = rolled(&row).text().unwrap_err();
        assert!(matches!(err, TableError::MalformedRow { roll: 3, .. }));
    }

    #[test]
    fn pair_view_needs_two_items() {
        let ok = Row::List(vec!["Nomad Pack".into(), "Always moving".into()]);
        assert_eq!(rolled(&ok).pair().unwrap(), ("Nomad Pack", "Always moving"));

        let short = Row::List(vec!["Nomad Pack".into()]);
        assert!(rolled(&short).pair().is_err());
    }

    #[test]
    fn origin_without_languages_is_malformed() {
        let row = Row::Origin(OriginRow {
            region: Some("Africa".into()),
            languages: None,
        });
        let err = rolled(&row).origin().unwrap_err();
        assert!(err.to_string().contains("Languages"), "{err}");
    }

    #[test]
    fn origin_view_exposes_fields() {
        let row = Row::Origin(OriginRow {
            region: Some("Eastern/Western Europe".into()),
            languages: Some(vec!["Polish".into(), "French".into()]),
        });
        let origin = rolled(&row).origin().unwrap();
        assert_eq!(origin.region, "Eastern/Western Europe");
        assert_eq!(origin.languages.len(), 2);
    }
}
