//! Human-readable error messages for the error report.
//!
//! Every violation maps to exactly one sentence. Missing fields and numeric
//! type mismatches get dedicated templates; anything else falls through to a
//! generic `Field '<name>': <Diagnostic>.` sentence built from the engine's
//! diagnostic text.

use std::fmt;
use std::str::FromStr;

use adperf_model::{FieldType, Violation};
use serde::{Deserialize, Serialize};

/// Display language of the error report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-br",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            "pt" | "pt-br" => Ok(Locale::PtBr),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}

/// Format one violation as a report sentence.
pub fn format_violation(violation: &Violation, locale: Locale) -> String {
    let field = violation.field();
    match violation {
        Violation::MissingField { .. } => match locale {
            Locale::En => format!("Field '{field}' is missing or empty."),
            Locale::PtBr => format!("O campo '{field}' está faltando ou vazio."),
        },
        Violation::TypeMismatch {
            expected: FieldType::Integer | FieldType::Number,
            ..
        } => match locale {
            Locale::En => format!("Field '{field}' must be a whole number (e.g., 100)."),
            Locale::PtBr => format!("O campo '{field}' deve ser um número inteiro (ex: 100)."),
        },
        Violation::TypeMismatch {
            expected: FieldType::Float,
            ..
        } => match locale {
            Locale::En => format!("Field '{field}' must be a decimal number (e.g., 100.50)."),
            Locale::PtBr => {
                format!("O campo '{field}' deve ser um número decimal (ex: 100.50).")
            }
        },
        _ => generic_message(field, &violation.diagnostic(), locale),
    }
}

/// Message for a row that could not be read at all.
pub fn format_fault(message: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!("General error: {message}"),
        Locale::PtBr => format!("Erro Geral: {message}"),
    }
}

fn generic_message(field: &str, diagnostic: &str, locale: Locale) -> String {
    let text = capitalize(diagnostic.trim().trim_end_matches('.'));
    match locale {
        Locale::En => format!("Field '{field}': {text}."),
        Locale::PtBr => format!("Campo '{field}': {text}."),
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
