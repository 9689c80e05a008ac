//! Java target: abstract base class with a nested `Visitor<R>` interface and one
//! nested static class per variant, in the reference generator's layout.
use super::{check_type_names, line};
use super::wrap::{self, ParamStyle};
use crate::error::{Error, Result};
use crate::ir::{EmitPlan, VariantDecl};

pub const PARAMS: ParamStyle = ParamStyle {
    lead: "",
    separator: ",\n          ",
    trail: "",
};

const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient",
    "true", "try", "void", "volatile", "while",
];

pub(crate) fn render(plan: &EmitPlan, package: &str, out: &mut String) -> Result<()> {
    check_identifiers(plan)?;
    check_type_names(plan, &[plan.visitor.name.as_str(), plan.visitor.result.as_str()], "java")?;
    let base = &plan.base.name;
    let visitor = &plan.visitor.name;
    let r = &plan.visitor.result;

    if !package.is_empty() {
        line(out, format!("package {package};"));
        line(out, "");
    }
    line(out, "import java.util.List;");
    line(out, "");
    line(out, format!("abstract class {base} {{"));

    line(out, format!("  interface {visitor}<{r}> {{"));
    for method in &plan.visitor.methods {
        line(out, format!("    {r} {}({} {});", method.name, method.variant, method.param));
    }
    line(out, "  }");

    for variant in &plan.variants {
        line(out, "");
        render_variant(plan, variant, out);
    }

    line(out, "");
    line(out, format!("  abstract <{r}> {r} accept({visitor}<{r}> visitor);"));
    line(out, "}");
    Ok(())
}

fn render_variant(plan: &EmitPlan, variant: &VariantDecl, out: &mut String) {
    let visitor = &plan.visitor.name;
    let r = &plan.visitor.result;
    let name = &variant.name;

    line(out, format!("  static class {name} extends {} {{", plan.base.name));

    let params: Vec<String> = variant
        .constructor
        .params
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect();
    line(out, format!("    {name}({}) {{", wrap::layout(&params, PARAMS)));
    for slot in &variant.constructor.stores {
        line(out, format!("      this.{slot} = {slot};"));
    }
    line(out, "    }");

    line(out, "");
    line(out, "    @Override");
    line(out, format!("    <{r}> {r} accept({visitor}<{r}> visitor) {{"));
    line(out, format!("      return visitor.{}(this);", variant.dispatch));
    line(out, "    }");

    if !variant.fields.is_empty() {
        line(out, "");
        for field in &variant.fields {
            line(out, format!("    final {} {};", field.ty, field.name));
        }
    }
    line(out, "  }");
}

fn check_identifiers(plan: &EmitPlan) -> Result<()> {
    let base = &plan.base.name;
    let names = std::iter::once(base.as_str())
        .chain(std::iter::once(plan.base.namespace.as_str()))
        .chain(plan.variants.iter().flat_map(|v| {
            std::iter::once(v.name.as_str()).chain(v.fields.iter().map(|f| f.name.as_str()))
        }));
    for name in names {
        if RESERVED.contains(&name) {
            return Err(Error::ReservedIdentifier {
                base: base.clone(),
                name: name.to_string(),
                target: "java",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::{render, CodegenSettings, Target, DEFAULT_JAVA_PACKAGE};
    use crate::grammar::parse;
    use crate::lower::build_plan;
    use crate::table::GRAMMARS;
    use pretty_assertions::assert_eq;

    fn java(base: &str, lines: &[&str]) -> Result<String> {
        let settings = CodegenSettings { target: Target::Java, java_package: DEFAULT_JAVA_PACKAGE.into() };
        render(&build_plan(&parse(base, lines)?), &settings)
    }

    #[test]
    fn stmt_matches_reference_layout() {
        let text = java(GRAMMARS[1].base_name, GRAMMARS[1].lines).unwrap();
        let expected = r#"package com.craftinginterpreters.lox;

import java.util.List;

abstract class Stmt {
  interface Visitor<R> {
    R visitBlockStmt(Block stmt);
    R visitExpressionStmt(Expression stmt);
    R visitPrintStmt(Print stmt);
    R visitVarStmt(Var stmt);
  }

  static class Block extends Stmt {
    Block(List<Stmt> statements) {
      this.statements = statements;
    }

    @Override
    <R> R accept(Visitor<R> visitor) {
      return visitor.visitBlockStmt(this);
    }

    final List<Stmt> statements;
  }

  static class Expression extends Stmt {
    Expression(Expr expression) {
      this.expression = expression;
    }

    @Override
    <R> R accept(Visitor<R> visitor) {
      return visitor.visitExpressionStmt(this);
    }

    final Expr expression;
  }

  static class Print extends Stmt {
    Print(Expr expression) {
      this.expression = expression;
    }

    @Override
    <R> R accept(Visitor<R> visitor) {
      return visitor.visitPrintStmt(this);
    }

    final Expr expression;
  }

  static class Var extends Stmt {
    Var(Token name, Expr initializer) {
      this.name = name;
      this.initializer = initializer;
    }

    @Override
    <R> R accept(Visitor<R> visitor) {
      return visitor.visitVarStmt(this);
    }

    final Token name;
    final Expr initializer;
  }

  abstract <R> R accept(Visitor<R> visitor);
}
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn long_constructors_wrap() {
        let text = java(
            "Stmt",
            &["Class : Token name, Expr.Variable superclass, List<Stmt.Function> methods"],
        )
        .unwrap();
        assert!(text.contains(
            "    Class(Token name,\n          Expr.Variable superclass,\n          List<Stmt.Function> methods) {\n"
        ));
        assert!(text.contains("      this.superclass = superclass;\n"));
    }

    #[test]
    fn unit_variant_has_no_field_block() {
        let text = java("Expr", &["Nil :"]).unwrap();
        assert!(text.contains("    Nil() {\n    }\n"));
        assert!(text.contains("      return visitor.visitNilExpr(this);\n    }\n  }\n"));
    }

    #[test]
    fn empty_package_is_omitted() {
        let plan = build_plan(&parse("Expr", ["Literal : Object value"]).unwrap());
        let settings = CodegenSettings { target: Target::Java, java_package: String::new() };
        let text = render(&plan, &settings).unwrap();
        assert!(text.starts_with("import java.util.List;\n"));
    }

    #[test]
    fn reserved_words_are_rejected() {
        let err = java("Expr", &["Literal : Object class"]).unwrap_err();
        assert!(matches!(err, Error::ReservedIdentifier { ref name, target: "java", .. } if name == "class"));
        // the lower-cased base becomes the visit parameter
        assert!(java("Int", &["Lit : Object value"]).is_err());
    }

    #[test]
    fn generated_type_names_are_rejected() {
        assert!(matches!(
            java("Expr", &["Visitor : Expr inner"]),
            Err(Error::ClashesWithGenerated { ref name, ref generated, target: "java", .. })
                if name == "Visitor" && generated == "Visitor"
        ));
        assert!(matches!(
            java("Expr", &["R : Object value"]),
            Err(Error::ClashesWithGenerated { ref generated, .. }) if generated == "R"
        ));
        assert!(matches!(
            java("Visitor", &["Lit : Object value"]),
            Err(Error::ClashesWithGenerated { ref name, .. }) if name == "Visitor"
        ));
        assert!(java("Expr", &["ExprVisitor : Expr inner"]).is_ok());
    }
}
