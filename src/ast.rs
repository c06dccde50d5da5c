// Parsed template representation

use crate::operator::Operator;

/// A parsed template: literal spans interleaved with expressions
#[derive(Debug, Clone)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

impl Template {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// All variable specifications referenced by this template, in the
    /// order they appear
    pub fn variables(&self) -> Vec<&VarSpec> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Expression(expr) => Some(expr),
                _ => None,
            })
            .flat_map(|expr| expr.vars.iter())
            .collect()
    }
}

/// A template consists of literal strings and `{...}` expressions
#[derive(Debug, Clone)]
pub enum TemplatePart {
    Literal(String),
    Expression(Expression),
}

/// One `{...}` unit: an operator and its comma-separated variables
#[derive(Debug, Clone)]
pub struct Expression {
    pub operator: &'static Operator,
    pub vars: Vec<VarSpec>,
}

/// A single variable reference with its modifiers.
///
/// The name is stored percent-decoded; a variable written `{foo%20bar}`
/// resolves against the params key `"foo bar"`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarSpec {
    pub name: String,
    pub explode: bool,
    pub max_length: Option<usize>,
}

impl VarSpec {
    pub fn new(name: String) -> Self {
        Self {
            name,
            explode: false,
            max_length: None,
        }
    }

    pub fn with_explode(mut self, explode: bool) -> Self {
        self.explode = explode;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}
