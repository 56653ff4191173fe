//! Structured filter expressions
//!
//! Builds the platform's filter string: clauses of the form
//! `field<op>value` joined with `;` (logical AND). The raw form is
//! merged into query parameters under the `filter` key by the list
//! fetcher; this module never talks to the network.

use std::fmt;

/// Comparison operator in a filter clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Like => "~",
        };
        f.write_str(op)
    }
}

/// A caller-supplied predicate over entity fields.
///
/// Immutable once built; the fetcher only reads its raw form.
///
/// ```
/// use stockbook::FilterQuery;
///
/// let filter = FilterQuery::new()
///     .eq("archived", "false")
///     .gt("salePrice", "1000");
/// assert_eq!(filter.raw(), "archived=false;salePrice>1000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    clauses: Vec<String>,
}

impl FilterQuery {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filter from an already-rendered expression
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self {
            clauses: vec![raw.into()],
        }
    }

    fn clause(mut self, field: &str, op: Op, value: &str) -> Self {
        self.clauses.push(format!("{field}{op}{value}"));
        self
    }

    /// `field = value`
    #[must_use]
    pub fn eq(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Eq, value)
    }

    /// `field != value`
    #[must_use]
    pub fn ne(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Ne, value)
    }

    /// `field > value`
    #[must_use]
    pub fn gt(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Gt, value)
    }

    /// `field >= value`
    #[must_use]
    pub fn gte(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Gte, value)
    }

    /// `field < value`
    #[must_use]
    pub fn lt(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Lt, value)
    }

    /// `field <= value`
    #[must_use]
    pub fn lte(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Lte, value)
    }

    /// Substring match, `field ~ value`
    #[must_use]
    pub fn like(self, field: &str, value: &str) -> Self {
        self.clause(field, Op::Like, value)
    }

    /// Whether any clause has been added
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The raw filter string sent under the `filter` query key
    pub fn raw(&self) -> String {
        self.clauses.join(";")
    }
}
