//! Entity categories and the tagger label vocabulary.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A label in the underlying tagger's fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagLabel {
    /// A named person.
    Person,
    /// A company, agency, or other organization.
    Org,
    /// A geopolitical entity (country, city, state).
    Gpe,
    /// A non-geopolitical location (mountain, river, region).
    Loc,
    /// A nationality, religious or political group.
    Norp,
    /// A facility (building, airport, bridge).
    Fac,
    /// A product.
    Product,
    /// A date or period.
    Date,
    /// A named law or legal document.
    Law,
    /// A measured quantity.
    Quantity,
}

impl TagLabel {
    /// Uppercase name of the label as the tagger reports it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Product => "PRODUCT",
            Self::Date => "DATE",
            Self::Law => "LAW",
            Self::Quantity => "QUANTITY",
        }
    }
}

impl fmt::Display for TagLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when parsing an unknown category or label name.
#[derive(Debug, Clone, Error)]
#[error("unknown entity category: {0}")]
pub struct UnknownCategoryError(pub String);

impl FromStr for TagLabel {
    type Err = UnknownCategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "PERSON" => Ok(Self::Person),
            "ORG" => Ok(Self::Org),
            "GPE" => Ok(Self::Gpe),
            "LOC" => Ok(Self::Loc),
            "NORP" => Ok(Self::Norp),
            "FAC" => Ok(Self::Fac),
            "PRODUCT" => Ok(Self::Product),
            "DATE" => Ok(Self::Date),
            "LAW" => Ok(Self::Law),
            "QUANTITY" => Ok(Self::Quantity),
            _ => Err(UnknownCategoryError(input.to_string())),
        }
    }
}

/// A requestable extraction category.
///
/// SUBJECT and PLACE are composite aliases over the tagger vocabulary;
/// the rest map to exactly one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityCategory {
    /// People and organizations (PERSON + ORG).
    Subject,
    /// Geopolitical entities and locations (GPE + LOC).
    Place,
    /// Nationalities, religious or political groups.
    Norp,
    /// Facilities.
    Fac,
    /// Non-geopolitical locations only.
    Loc,
    /// Products.
    Product,
    /// Dates and periods.
    Date,
    /// Named laws.
    Law,
    /// Quantities.
    Quantity,
}

impl EntityCategory {
    /// Every requestable category, in display order.
    pub const ALL: [Self; 9] = [
        Self::Subject,
        Self::Place,
        Self::Norp,
        Self::Fac,
        Self::Loc,
        Self::Product,
        Self::Date,
        Self::Law,
        Self::Quantity,
    ];

    /// Tagger labels accepted for this category.
    pub fn accepted_labels(&self) -> &'static [TagLabel] {
        match self {
            Self::Subject => &[TagLabel::Person, TagLabel::Org],
            Self::Place => &[TagLabel::Gpe, TagLabel::Loc],
            Self::Norp => &[TagLabel::Norp],
            Self::Fac => &[TagLabel::Fac],
            Self::Loc => &[TagLabel::Loc],
            Self::Product => &[TagLabel::Product],
            Self::Date => &[TagLabel::Date],
            Self::Law => &[TagLabel::Law],
            Self::Quantity => &[TagLabel::Quantity],
        }
    }

    /// Returns true when spans with `label` belong to this category.
    pub fn accepts(&self, label: TagLabel) -> bool {
        self.accepted_labels().contains(&label)
    }

    /// Uppercase name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subject => "SUBJECT",
            Self::Place => "PLACE",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Loc => "LOC",
            Self::Product => "PRODUCT",
            Self::Date => "DATE",
            Self::Law => "LAW",
            Self::Quantity => "QUANTITY",
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityCategory {
    type Err = UnknownCategoryError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "SUBJECT" => Ok(Self::Subject),
            "PLACE" => Ok(Self::Place),
            "NORP" => Ok(Self::Norp),
            "FAC" => Ok(Self::Fac),
            "LOC" => Ok(Self::Loc),
            "PRODUCT" => Ok(Self::Product),
            "DATE" => Ok(Self::Date),
            "LAW" => Ok(Self::Law),
            "QUANTITY" => Ok(Self::Quantity),
            _ => Err(UnknownCategoryError(input.to_string())),
        }
    }
}
