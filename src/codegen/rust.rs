//! Rust target.
//!
//! The base becomes a tagged enum with one boxed payload per variant, so
//! downstream code can `match` exhaustively; the dispatch interface becomes a
//! `<Base>Visitor<R>` trait whose methods the enum's `accept` routes to.
//! Variant structs keep their fields private and expose read accessors, which
//! keeps nodes immutable once built. Field types are emitted verbatim and
//! resolved through `use super::*;` in the consuming crate.
use indexmap::IndexMap;

use super::{check_type_names, line};
use super::wrap::{self, ParamStyle};
use crate::error::{Error, Result};
use crate::ir::{EmitPlan, VariantDecl};

pub const PARAMS: ParamStyle = ParamStyle {
    lead: "\n        ",
    separator: ",\n        ",
    trail: ",\n    ",
};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

// Keywords that are not allowed even as raw identifiers.
const NOT_RAW: &[&str] = &["self", "Self", "super", "crate"];

// Inherent methods every variant struct already has.
const METHODS: &[&str] = &["new", "accept"];

// Types the enum payloads name directly.
const PRELUDE: &[&str] = &["Box"];

pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_lower) {
                out.push('_');
            }
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Identifiers after keyword escaping, resolved once up front.
struct Names {
    base: String,
    visitor: String,
    param: String,
    methods: Vec<String>,
    variants: Vec<String>,
    fields: Vec<Vec<String>>,
}

impl Names {
    fn resolve(plan: &EmitPlan) -> Result<Self> {
        let base_name = &plan.base.name;
        let visitor = format!("{base_name}{}", plan.visitor.name);
        let mut generated = vec![visitor.as_str(), plan.visitor.result.as_str()];
        generated.extend_from_slice(PRELUDE);
        check_type_names(plan, &generated, "rust")?;
        let ident = |name: &str| -> Result<String> {
            if NOT_RAW.contains(&name) {
                return Err(Error::ReservedIdentifier {
                    base: base_name.clone(),
                    name: name.to_string(),
                    target: "rust",
                });
            }
            if KEYWORDS.contains(&name) {
                Ok(format!("r#{name}"))
            } else {
                Ok(name.to_string())
            }
        };

        let mut seen: IndexMap<String, &str> = IndexMap::new();
        let mut methods = Vec::with_capacity(plan.visitor.methods.len());
        for method in &plan.visitor.methods {
            let snake = to_snake_case(&method.name);
            if let Some(first) = seen.insert(snake.clone(), method.variant.as_str()) {
                return Err(Error::NameCollision {
                    base: base_name.clone(),
                    first: first.to_string(),
                    second: method.variant.clone(),
                    method: snake,
                });
            }
            methods.push(snake);
        }

        let mut variants = Vec::with_capacity(plan.variants.len());
        let mut fields = Vec::with_capacity(plan.variants.len());
        for variant in &plan.variants {
            variants.push(ident(&variant.name)?);
            let mut names = Vec::with_capacity(variant.fields.len());
            for field in &variant.fields {
                if METHODS.contains(&field.name.as_str()) {
                    return Err(Error::ReservedIdentifier {
                        base: base_name.clone(),
                        name: field.name.clone(),
                        target: "rust",
                    });
                }
                names.push(ident(&field.name)?);
            }
            fields.push(names);
        }

        let base = ident(base_name)?;
        Ok(Self {
            visitor: format!("{base}{}", plan.visitor.name),
            param: ident(&plan.base.namespace)?,
            base,
            methods,
            variants,
            fields,
        })
    }
}

pub(crate) fn render(plan: &EmitPlan, out: &mut String) -> Result<()> {
    let names = Names::resolve(plan)?;
    let Names { base, visitor, param, .. } = &names;
    let r = &plan.visitor.result;

    line(out, format!("// Generated by generate_ast from the `{}` grammar. Do not edit.", plan.base.name));
    line(out, "");
    line(out, "use super::*;");

    // base
    line(out, "");
    line(out, "#[derive(Debug, Clone)]");
    line(out, format!("pub enum {base} {{"));
    for variant in &names.variants {
        line(out, format!("    {variant}(Box<{variant}>),"));
    }
    line(out, "}");
    line(out, "");
    line(out, format!("impl {base} {{"));
    line(out, format!("    pub fn accept<{r}>(&self, visitor: &mut dyn {visitor}<{r}>) -> {r} {{"));
    if names.variants.is_empty() {
        line(out, "        match *self {}");
    } else {
        line(out, "        match self {");
        for variant in &names.variants {
            line(out, format!("            {base}::{variant}(node) => node.accept(visitor),"));
        }
        line(out, "        }");
    }
    line(out, "    }");
    line(out, "}");

    // dispatch interface
    line(out, "");
    line(out, format!("pub trait {visitor}<{r}> {{"));
    for (method, variant) in names.methods.iter().zip(&names.variants) {
        line(out, format!("    fn {method}(&mut self, {param}: &{variant}) -> {r};"));
    }
    line(out, "}");

    for (index, variant) in plan.variants.iter().enumerate() {
        render_variant(plan, variant, &names, index, out);
    }
    Ok(())
}

fn render_variant(plan: &EmitPlan, variant: &VariantDecl, names: &Names, index: usize, out: &mut String) {
    let Names { base, visitor, .. } = names;
    let r = &plan.visitor.result;
    let name = &names.variants[index];
    let fields = &names.fields[index];

    line(out, "");
    line(out, "#[derive(Debug, Clone)]");
    if fields.is_empty() {
        line(out, format!("pub struct {name} {{}}"));
    } else {
        line(out, format!("pub struct {name} {{"));
        for (field, decl) in fields.iter().zip(&variant.fields) {
            line(out, format!("    {field}: {},", decl.ty));
        }
        line(out, "}");
    }

    line(out, "");
    line(out, format!("impl {name} {{"));
    let params: Vec<String> = fields
        .iter()
        .zip(&variant.constructor.params)
        .map(|(field, decl)| format!("{field}: {}", decl.ty))
        .collect();
    line(out, format!("    pub fn new({}) -> Self {{", wrap::layout(&params, PARAMS)));
    if fields.is_empty() {
        line(out, "        Self {}");
    } else {
        line(out, format!("        Self {{ {} }}", fields.join(", ")));
    }
    line(out, "    }");

    for (field, decl) in fields.iter().zip(&variant.fields) {
        line(out, "");
        line(out, format!("    pub fn {field}(&self) -> &{} {{", decl.ty));
        line(out, format!("        &self.{field}"));
        line(out, "    }");
    }

    line(out, "");
    line(out, format!("    pub fn accept<{r}>(&self, visitor: &mut dyn {visitor}<{r}>) -> {r} {{"));
    line(out, format!("        visitor.{}(self)", names.methods[index]));
    line(out, "    }");
    line(out, "}");

    line(out, "");
    line(out, format!("impl From<{name}> for {base} {{"));
    line(out, format!("    fn from(node: {name}) -> Self {{"));
    line(out, format!("        {base}::{name}(Box::new(node))"));
    line(out, "    }");
    line(out, "}");
}
