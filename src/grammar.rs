//! Grammar parser: compact `Name : Type field, ...` lines → `GrammarSpec`.
//!
//! One line describes one variant. The variant name sits left of the first `:`,
//! the field list to its right. Field lists split on top-level commas, so type
//! references may carry their own comma-separated arguments (`Map<K, V> table`).
//! Each field splits at its last whitespace run: the final word is the name and
//! everything before it is the (opaque) type.
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

// ------------------------------- Types ----------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarSpec {
    pub base_name: String,
    pub variants: Vec<VariantSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub ty: String,
    pub name: String,
}

impl GrammarSpec {
    /// Lower-cased base name; used for artifact names and visit parameters.
    pub fn namespace(&self) -> String {
        self.base_name.to_lowercase()
    }

    /// Reject grammars that parse but cannot be emitted.
    pub fn validate(&self) -> Result<()> {
        let mut seen = IndexSet::new();
        for variant in &self.variants {
            if variant.name == self.base_name {
                return Err(Error::VariantShadowsBase { base: self.base_name.clone() });
            }
            if !seen.insert(variant.name.as_str()) {
                return Err(Error::DuplicateVariant {
                    base: self.base_name.clone(),
                    variant: variant.name.clone(),
                });
            }
            let mut fields = IndexSet::new();
            for field in &variant.fields {
                if !fields.insert(field.name.as_str()) {
                    return Err(Error::DuplicateField {
                        base: self.base_name.clone(),
                        variant: variant.name.clone(),
                        field: field.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ------------------------------- Parse ----------------------------------- //

pub fn is_identifier(name: &str) -> bool {
    name != "_" && IDENT.is_match(name)
}

pub fn parse<I>(base_name: &str, lines: I) -> Result<GrammarSpec>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if !is_identifier(base_name) {
        return Err(Error::InvalidIdentifier {
            base: base_name.to_string(),
            name: base_name.to_string(),
        });
    }
    let mut variants = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let Some((name, field_list)) = line.split_once(':') else {
            return Err(Error::MalformedGrammar {
                base: base_name.to_string(),
                line: index + 1,
                text: line.to_string(),
            });
        };
        let name = name.trim();
        if !is_identifier(name) {
            return Err(Error::InvalidIdentifier {
                base: base_name.to_string(),
                name: name.to_string(),
            });
        }
        let fields = parse_field_list(base_name, name, field_list)?;
        variants.push(VariantSpec { name: name.to_string(), fields });
    }
    tracing::debug!(base = base_name, variants = variants.len(), "parsed grammar");
    Ok(GrammarSpec { base_name: base_name.to_string(), variants })
}

/// Parse the right-hand side of a grammar line. Blank input yields no fields.
pub fn parse_field_list(base: &str, variant: &str, field_list: &str) -> Result<Vec<FieldSpec>> {
    if field_list.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(field_list)
        .into_iter()
        .map(|token| parse_field(base, variant, token))
        .collect()
}

fn parse_field(base: &str, variant: &str, token: &str) -> Result<FieldSpec> {
    let token = token.trim();
    let malformed = || Error::MalformedField {
        base: base.to_string(),
        variant: variant.to_string(),
        token: token.to_string(),
    };
    let (ty, name) = token.rsplit_once(char::is_whitespace).ok_or_else(malformed)?;
    let ty = ty.trim_end();
    if ty.is_empty() {
        return Err(malformed());
    }
    if !is_identifier(name) {
        return Err(Error::InvalidIdentifier { base: base.to_string(), name: name.to_string() });
    }
    Ok(FieldSpec { ty: ty.to_string(), name: name.to_string() })
}

// Commas nested in <>, () or [] belong to the type.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (at, ch) in list.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                out.push(&list[start..at]);
                start = at + 1;
            }
            _ => {}
        }
    }
    out.push(&list[start..]);
    out
}

// ------------------------------- Tests ------------------------------------ //
