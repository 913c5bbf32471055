//! Schema column descriptors.

use std::fmt;

/// Storage kind of a column.
///
/// The kind decides which input control a form renders for the column.
/// Storage type names that do not map to a known kind are kept verbatim in
/// [`ColumnKind::Other`] and are rendered as plain text inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// Short character data (`VARCHAR`, `CHAR`).
    String,
    /// Long character data (`TEXT`, `CLOB`).
    Text,
    /// Whole numbers.
    Integer,
    /// Floating point numbers.
    Float,
    /// Fixed precision numbers.
    Decimal,
    /// Calendar date.
    Date,
    /// Date and time of day.
    DateTime,
    /// Date and time of day, stored as a timestamp.
    Timestamp,
    /// Time of day.
    Time,
    /// True/false flag.
    Boolean,
    /// Raw bytes.
    Binary,
    /// Any other storage type, lower-cased.
    Other(String),
}

impl ColumnKind {
    /// Maps an SQL storage type name to a column kind.
    ///
    /// Matching is case-insensitive and ignores any size suffix, so
    /// `VARCHAR(255)` and `varchar` both map to [`ColumnKind::String`].
    ///
    /// ```
    /// use dynaform_model::ColumnKind;
    ///
    /// assert_eq!(ColumnKind::from_sql_type("VARCHAR(255)"), ColumnKind::String);
    /// assert_eq!(ColumnKind::from_sql_type("datetime"), ColumnKind::DateTime);
    /// assert_eq!(
    ///     ColumnKind::from_sql_type("geometry"),
    ///     ColumnKind::Other("geometry".to_string()),
    /// );
    /// ```
    pub fn from_sql_type(sql_type: &str) -> Self {
        let lowered = sql_type.trim().to_ascii_lowercase();
        let base = lowered
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();

        match base.as_str() {
            "string" | "varchar" | "char" | "character varying" | "character" | "nvarchar" => {
                Self::String
            }
            "text" | "clob" | "mediumtext" | "longtext" | "tinytext" => Self::Text,
            "integer" | "int" | "bigint" | "smallint" | "tinyint" | "serial" | "bigserial" => {
                Self::Integer
            }
            "float" | "double" | "double precision" | "real" => Self::Float,
            "decimal" | "numeric" | "number" => Self::Decimal,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "timestamp" | "timestamptz" => Self::Timestamp,
            "time" => Self::Time,
            "boolean" | "bool" => Self::Boolean,
            "binary" | "blob" | "bytea" | "varbinary" => Self::Binary,
            _ => Self::Other(base),
        }
    }

    /// Returns the canonical lower-case name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Boolean => "boolean",
            Self::Binary => "binary",
            Self::Other(name) => name,
        }
    }

    /// Returns whether values of this kind carry a calendar date.
    pub fn has_date(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Timestamp)
    }

    /// Returns whether values of this kind carry a time of day.
    pub fn has_time(&self) -> bool {
        matches!(self, Self::DateTime | Self::Timestamp | Self::Time)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ColumnKind {
    fn from(sql_type: &str) -> Self {
        Self::from_sql_type(sql_type)
    }
}

/// A content column of a record's schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Storage kind.
    pub kind: ColumnKind,
    /// Field name (`written_on`).
    pub name: String,
    /// Label shown to users (`Written on`).
    pub human_name: String,
}

impl Column {
    /// Creates a column whose label is the humanized field name.
    pub fn new(kind: impl Into<ColumnKind>, name: impl Into<String>) -> Self {
        let name = name.into();
        let human_name = humanize(&name);
        Self {
            kind: kind.into(),
            name,
            human_name,
        }
    }

    /// Overrides the human-readable label.
    #[must_use]
    pub fn human_name(mut self, label: impl Into<String>) -> Self {
        self.human_name = label.into();
        self
    }

    /// Creates a `string` column.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::String, name)
    }

    /// Creates a `text` column.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::Text, name)
    }

    /// Creates an `integer` column.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::Integer, name)
    }

    /// Creates a `date` column.
    pub fn date(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::Date, name)
    }

    /// Creates a `datetime` column.
    pub fn datetime(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::DateTime, name)
    }

    /// Creates a `time` column.
    pub fn time(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::Time, name)
    }

    /// Creates a `boolean` column.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(ColumnKind::Boolean, name)
    }
}

/// Turns a field name into a label: `author_id` becomes `Author`,
/// `written_on` becomes `Written on`.
pub fn humanize(name: &str) -> String {
    let trimmed = name.strip_suffix("_id").unwrap_or(name);
    let spaced = trimmed.replace('_', " ").to_lowercase();
    let spaced = spaced.trim();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
