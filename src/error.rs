//! Error taxonomy for the generator pipeline.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A grammar line without its `:` separator.
    #[error("malformed grammar `{base}` line {line}: expected `Name : Type field, ...`, got {text:?}")]
    MalformedGrammar { base: String, line: usize, text: String },

    /// A field token that does not split into `<type> <name>`.
    #[error("malformed field {token:?} in `{base}.{variant}`: expected `<type> <name>`")]
    MalformedField { base: String, variant: String, token: String },

    #[error("invalid identifier {name:?} in grammar `{base}`")]
    InvalidIdentifier { base: String, name: String },

    #[error("duplicate variant `{variant}` in grammar `{base}`")]
    DuplicateVariant { base: String, variant: String },

    #[error("duplicate field `{field}` in `{base}.{variant}`")]
    DuplicateField { base: String, variant: String, field: String },

    #[error("variant `{base}` has the same name as its base type")]
    VariantShadowsBase { base: String },

    #[error("`{name}` cannot be used as an identifier in the {target} output for `{base}`")]
    ReservedIdentifier { base: String, name: String, target: &'static str },

    /// A base or variant type named like something the backend emits itself.
    #[error("type `{name}` in grammar `{base}` clashes with the generated `{generated}` in the {target} output")]
    ClashesWithGenerated { base: String, name: String, generated: String, target: &'static str },

    #[error("variants `{first}` and `{second}` of `{base}` both dispatch through `{method}`")]
    NameCollision { base: String, first: String, second: String, method: String },

    #[error("failed to serialize the emit plan for `{base}`")]
    Serialize {
        base: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// sysexits-style process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MalformedGrammar { .. }
            | Error::MalformedField { .. }
            | Error::InvalidIdentifier { .. }
            | Error::DuplicateVariant { .. }
            | Error::DuplicateField { .. }
            | Error::VariantShadowsBase { .. }
            | Error::ClashesWithGenerated { .. }
            | Error::ReservedIdentifier { .. }
            | Error::NameCollision { .. } => 65,
            Error::Io { .. } => 74,
            Error::Serialize { .. } => 70,
        }
    }
}
