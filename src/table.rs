//! The embedded grammar table.

/// Raw grammar lines for one base type.
#[derive(Debug, Clone, Copy)]
pub struct GrammarSource<'a> {
    pub base_name: &'a str,
    pub lines: &'a [&'a str],
}

/// Every grammar the CLI generates, in generation order.
pub const GRAMMARS: &[GrammarSource<'static>] = &[
    GrammarSource {
        base_name: "Expr",
        lines: &[
            "Binary   : Expr left, Token operator, Expr right",
            "Grouping : Expr expression",
            "Literal  : Object value",
            "Unary    : Token operator, Expr right",
        ],
    },
    GrammarSource {
        base_name: "Stmt",
        lines: &[
            "Block      : List<Stmt> statements",
            "Expression : Expr expression",
            "Print      : Expr expression",
            "Var        : Token name, Expr initializer",
        ],
    },
];

impl GrammarSource<'_> {
    pub fn parse(&self) -> crate::Result<crate::grammar::GrammarSpec> {
        crate::grammar::parse(self.base_name, self.lines)
    }
}
