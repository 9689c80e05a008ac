//! Parameter-list layout. Purely cosmetic: names are never re-derived from wrapped text.

/// Lists wider than this many characters are laid out one parameter per line.
pub const WRAP_WIDTH: usize = 64;

/// How a wrapped list is spelled for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamStyle {
    pub lead: &'static str,        // after the opening parenthesis
    pub separator: &'static str,   // between parameters
    pub trail: &'static str,       // before the closing parenthesis
}

const FLAT_SEPARATOR: &str = ", ";

/// Lay out `params` (already rendered, e.g. `Expr left`) for the inside of `( ... )`.
pub fn layout(params: &[String], style: ParamStyle) -> String {
    let flat = params.join(FLAT_SEPARATOR);
    if flat.chars().count() <= WRAP_WIDTH {
        return flat;
    }
    format!("{}{}{}", style.lead, params.join(style.separator), style.trail)
}

/// Inverse of [`layout`]: bring a wrapped list back to its single-line form.
pub fn reflow(text: &str, style: ParamStyle) -> String {
    let inner = text.strip_prefix(style.lead).unwrap_or(text);
    let inner = if style.trail.is_empty() {
        inner
    } else {
        inner.strip_suffix(style.trail).unwrap_or(inner)
    };
    inner.replace(style.separator, FLAT_SEPARATOR)
}
