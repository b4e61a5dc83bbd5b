//! Declarative field contract for ad performance rows.
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s. The order matters: the
//! row validator walks fields in declaration order, and the first violation
//! reported for a failing row is the first one in that order.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Name of the built-in ad performance schema.
pub const AD_PERFORMANCE_SCHEMA: &str = "ad_performance";

/// Field used to label rows of the built-in schema in error reports.
pub const DEFAULT_LABEL_FIELD: &str = "AdSet_name";

/// Declared value type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Any non-empty text, kept as-is.
    #[serde(alias = "string")]
    Text,
    /// Whole number.
    Integer,
    /// Decimal number. Whole numbers are accepted and widened.
    Float,
    /// Either a whole or a decimal number.
    #[serde(alias = "integer-or-float")]
    Number,
}

impl FieldType {
    /// Canonical name used in schema listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Number => "integer-or-float",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, FieldType::Text)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "string" | "text" | "str" => Ok(FieldType::Text),
            "integer" | "int" => Ok(FieldType::Integer),
            "float" | "decimal" => Ok(FieldType::Float),
            "number" | "integer-or-float" | "int-or-float" => Ok(FieldType::Number),
            _ => Err(format!("Unknown field type: {s}")),
        }
    }
}

/// Numeric constraint checked after a value has been coerced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Constraint {
    /// Value must be greater than or equal to the bound.
    Min(f64),
}

impl Constraint {
    pub fn allows(&self, value: f64) -> bool {
        match self {
            Constraint::Min(bound) => value >= *bound,
        }
    }

    /// Engine-native diagnostic for a value that fails this constraint.
    pub fn diagnostic(&self) -> String {
        match self {
            Constraint::Min(bound) => format!("must be greater than or equal to {bound}"),
        }
    }

    /// Short symbolic form for schema listings (e.g. `>= 0`).
    pub fn describe(&self) -> String {
        match self {
            Constraint::Min(bound) => format!(">= {bound}"),
        }
    }
}

/// Contract for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldSpec {
    pub fn required(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            required: true,
            field_type,
            constraint: None,
            description: None,
        }
    }

    pub fn optional(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required(name, field_type)
        }
    }

    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered set of field contracts applied uniformly to every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef")]
pub struct Schema {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label_field: Option<String>,
    fields: Vec<FieldSpec>,
}

/// Unchecked wire form of a schema; converted through [`Schema::new`].
#[derive(Deserialize)]
struct SchemaDef {
    name: String,
    #[serde(default)]
    label_field: Option<String>,
    fields: Vec<FieldSpec>,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = SchemaError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        Schema::new(def.name, def.fields, def.label_field)
    }
}

impl Schema {
    /// Build a schema, rejecting contracts the validator cannot apply.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the field list is empty, a field name is
    /// blank or repeated, a constraint is attached to a text field, or the
    /// label field is not one of the declared fields.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<FieldSpec>,
        label_field: Option<String>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if fields.is_empty() {
            return Err(SchemaError::Empty { schema: name });
        }
        let mut seen = BTreeSet::new();
        for (position, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::BlankFieldName { position });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    field: field.name.clone(),
                });
            }
            if field.constraint.is_some() && !field.field_type.is_numeric() {
                return Err(SchemaError::ConstraintOnText {
                    field: field.name.clone(),
                });
            }
        }
        if let Some(label) = &label_field
            && !seen.contains(label.as_str())
        {
            return Err(SchemaError::UnknownLabelField {
                field: label.clone(),
            });
        }
        Ok(Self {
            name,
            label_field,
            fields,
        })
    }

    /// The built-in advertising performance contract.
    pub fn ad_performance() -> Self {
        Self {
            name: AD_PERFORMANCE_SCHEMA.to_string(),
            label_field: Some(DEFAULT_LABEL_FIELD.to_string()),
            fields: ad_performance_fields(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Field whose value identifies a row in error reports.
    pub fn label_field(&self) -> Option<&str> {
        self.label_field.as_deref()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::ad_performance()
    }
}

fn ad_performance_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::required("Organizador", FieldType::Integer)
            .with_description("Numeric organizer identifier."),
        FieldSpec::required("Ano_Mes", FieldType::Text)
            .with_description("Record period (e.g. '2024 | Março')."),
        FieldSpec::required("Dia_da_Semana", FieldType::Text)
            .with_description("Weekday name (e.g. 'Sexta-Feira')."),
        FieldSpec::required("Tipo_Dia", FieldType::Text)
            .with_description("Day classification (e.g. 'Dia útil')."),
        FieldSpec::required("Objetivo", FieldType::Text)
            .with_description("Campaign objective (e.g. 'Leads')."),
        FieldSpec::required("Date", FieldType::Text)
            .with_description("Record date (e.g. '2024-03-01')."),
        FieldSpec::required("AdSet_name", FieldType::Text).with_description("Ad set name."),
        FieldSpec::required("Amount_spent", FieldType::Float)
            .with_constraint(Constraint::Min(0.0))
            .with_description("Amount spent; zero or positive."),
        FieldSpec::optional("Link_clicks", FieldType::Number)
            .with_description("Number of link clicks."),
        FieldSpec::optional("Impressions", FieldType::Number)
            .with_description("Number of impressions."),
        FieldSpec::optional("Conversions", FieldType::Number)
            .with_description("Number of conversions."),
        FieldSpec::optional("Segmentação", FieldType::Text)
            .with_description("Audience segmentation type."),
        FieldSpec::required("Tipo_de_Anúncio", FieldType::Text)
            .with_description("Creative type (e.g. 'Estático', 'Video')."),
        FieldSpec::required("Fase", FieldType::Text).with_description("Campaign or launch phase."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_schema_passes_its_own_checks() {
        let schema = Schema::ad_performance();
        let rebuilt = Schema::new(
            schema.name().to_string(),
            schema.fields().to_vec(),
            schema.label_field().map(str::to_string),
        )
        .expect("built-in schema is valid");
        assert_eq!(rebuilt, schema);
    }

    #[test]
    fn min_constraint_is_inclusive() {
        let constraint = Constraint::Min(0.0);
        assert!(constraint.allows(0.0));
        assert!(constraint.allows(12.5));
        assert!(!constraint.allows(-0.01));
        assert_eq!(
            constraint.diagnostic(),
            "must be greater than or equal to 0"
        );
        assert_eq!(constraint.describe(), ">= 0");
    }

    #[test]
    fn field_type_parses_aliases() {
        assert_eq!("string".parse::<FieldType>(), Ok(FieldType::Text));
        assert_eq!("INT".parse::<FieldType>(), Ok(FieldType::Integer));
        assert_eq!("integer_or_float".parse::<FieldType>(), Ok(FieldType::Number));
        assert!("date".parse::<FieldType>().is_err());
    }
}
