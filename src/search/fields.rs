//! Declarative column table shared by the matcher and every renderer.
//!
//! [`FIELDS`] is the single source of truth for which advocate fields exist,
//! in what order they are displayed, and how each one is matched. Adding a
//! searchable, displayable field is one entry here; neither the filter engine
//! nor the table renderers need edits.

use std::borrow::Cow;

use crate::model::Advocate;

/// Value of one advocate field as seen by the matcher and the renderers.
///
/// Scalar fields (including the numeric ones, coerced to their decimal
/// rendering) are `Text`; the specialties list is `Tags` and is matched
/// element-wise.
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Tags(&'a [String]),
}

impl FieldValue<'_> {
    /// Case-insensitive substring test against an already lower-cased needle.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Text(text) => text.to_lowercase().contains(needle),
            Self::Tags(tags) => tags.iter().any(|tag| tag.to_lowercase().contains(needle)),
        }
    }

    /// Render the value as a single table cell.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone().into_owned(),
            Self::Tags(tags) => tags.join(", "),
        }
    }
}

/// One searchable, displayable column.
pub struct FieldSpec {
    pub label: &'static str,
    pub extract: fn(&Advocate) -> FieldValue<'_>,
}

impl FieldSpec {
    /// The cell value for `advocate` in this column.
    pub fn value<'a>(&self, advocate: &'a Advocate) -> FieldValue<'a> {
        (self.extract)(advocate)
    }
}

/// Every column, in display order.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec {
        label: "First Name",
        extract: |a| FieldValue::Text(Cow::Borrowed(&a.first_name)),
    },
    FieldSpec {
        label: "Last Name",
        extract: |a| FieldValue::Text(Cow::Borrowed(&a.last_name)),
    },
    FieldSpec {
        label: "City",
        extract: |a| FieldValue::Text(Cow::Borrowed(&a.city)),
    },
    FieldSpec {
        label: "Degree",
        extract: |a| FieldValue::Text(Cow::Borrowed(&a.degree)),
    },
    FieldSpec {
        label: "Specialties",
        extract: |a| FieldValue::Tags(&a.specialties),
    },
    FieldSpec {
        label: "Years of Experience",
        extract: |a| FieldValue::Text(Cow::Owned(a.years_of_experience.to_string())),
    },
    FieldSpec {
        label: "Phone Number",
        extract: |a| FieldValue::Text(Cow::Owned(a.phone_number.to_string())),
    },
];
