use crate::grammar::{FieldSpec, GrammarSpec, VariantSpec};
use crate::ir::{BaseDecl, ConstructorDecl, DispatchMethod, EmitPlan, FieldDecl, VariantDecl, VisitorDecl};

const VISITOR_NAME: &str = "Visitor";
const RESULT_PARAM: &str = "R";

pub fn dispatch_name(variant: &str, base: &str) -> String {
    format!("visit{variant}{base}")
}

/// Derive every declaration to emit for one grammar. Pure; call `GrammarSpec::validate` first.
pub fn build_plan(spec: &GrammarSpec) -> EmitPlan {
    let namespace = spec.namespace();
    let methods = spec
        .variants
        .iter()
        .map(|v| DispatchMethod {
            name: dispatch_name(&v.name, &spec.base_name),
            variant: v.name.clone(),
            param: namespace.clone(),
        })
        .collect();
    let variants = spec
        .variants
        .iter()
        .map(|v| lower_variant(v, &spec.base_name))
        .collect::<Vec<_>>();

    tracing::debug!(base = %spec.base_name, variants = variants.len(), "built emit plan");
    EmitPlan {
        base: BaseDecl { name: spec.base_name.clone(), namespace },
        visitor: VisitorDecl {
            name: VISITOR_NAME.to_string(),
            result: RESULT_PARAM.to_string(),
            methods,
        },
        variants,
    }
}

fn lower_variant(variant: &VariantSpec, base: &str) -> VariantDecl {
    let fields: Vec<FieldDecl> = variant.fields.iter().map(lower_field).collect();
    VariantDecl {
        name: variant.name.clone(),
        constructor: ConstructorDecl {
            params: fields.clone(),
            stores: fields.iter().map(|f| f.name.clone()).collect(),
        },
        fields,
        dispatch: dispatch_name(&variant.name, base),
    }
}

fn lower_field(field: &FieldSpec) -> FieldDecl {
    FieldDecl { ty: field.ty.clone(), name: field.name.clone() }
}
