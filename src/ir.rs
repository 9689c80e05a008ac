// Emit plan: everything a backend needs, already in declaration order. No grammar text here.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitPlan {
    pub base: BaseDecl,
    pub visitor: VisitorDecl,
    pub variants: Vec<VariantDecl>,
}

/// The abstract base type. Its only operation is `accept<R>(visitor) -> R`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseDecl {
    pub name: String,
    pub namespace: String,   // lower-cased name: artifact stem, visit parameter
}

/// The dispatch interface, generic over the result type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorDecl {
    pub name: String,
    pub result: String,
    pub methods: Vec<DispatchMethod>,   // one per variant, same order
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchMethod {
    pub name: String,        // visit<Variant><Base>
    pub variant: String,
    pub param: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantDecl {
    pub name: String,
    pub fields: Vec<FieldDecl>,   // storage order
    pub constructor: ConstructorDecl,
    pub dispatch: String,         // the visitor method `accept` calls
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDecl {
    pub ty: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstructorDecl {
    pub params: Vec<FieldDecl>,
    pub stores: Vec<String>,      // param i is stored into field stores[i]
}
