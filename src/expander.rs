// Variable expansion against parameter values

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::ast::{Expression, Template, TemplatePart, VarSpec};
use crate::encoder::{self, EncodeMode};
use crate::error::ExpandError;
use crate::operator::Operator;
use crate::parser::TemplateParser;
use crate::value::Value;

/// Expand a URI Template against parameter values in one call.
///
/// Fails on a reserved operator or an unterminated expression; an unknown
/// or absent variable is silently skipped.
pub fn expand(template: &str, params: &HashMap<String, Value>) -> Result<String, ExpandError> {
    Ok(TemplateParser::parse(template)?.expand(params))
}

impl Template {
    /// Parse a template once; the result can be expanded many times.
    pub fn parse(template: &str) -> Result<Template, ExpandError> {
        TemplateParser::parse(template)
    }

    /// Render this template against the given parameter values.
    ///
    /// Rendering itself cannot fail: both error conditions are grammar
    /// properties caught at parse time.
    pub fn expand(&self, params: &HashMap<String, Value>) -> String {
        let mut uri = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => uri.push_str(text),
                TemplatePart::Expression(expr) => uri.push_str(&expand_expression(expr, params)),
            }
        }
        log::debug!("expanded template to {} bytes", uri.len());
        uri
    }
}

/// Expand one expression. When every variable is absent the whole
/// expression renders empty, operator prefix included.
fn expand_expression(expr: &Expression, params: &HashMap<String, Value>) -> String {
    let fragments: Vec<String> = expr
        .vars
        .iter()
        .filter_map(|spec| {
            params
                .get(&spec.name)
                .and_then(|value| expand_var(expr.operator, spec, value))
        })
        .collect();

    if fragments.is_empty() {
        return String::new();
    }

    let mut out = String::from(expr.operator.prefix);
    out.push_str(&fragments.join(expr.operator.separator));
    out
}

/// Render one variable, or `None` when its value is absent
fn expand_var(op: &Operator, spec: &VarSpec, value: &Value) -> Option<String> {
    match value {
        Value::Absent => None,
        Value::Scalar(text) => Some(expand_scalar(op, spec, text)),
        Value::List(items) if items.is_empty() => None,
        Value::List(items) => Some(expand_list(op, spec, items)),
        Value::Map(pairs) if pairs.is_empty() => None,
        Value::Map(pairs) => Some(expand_map(op, spec, pairs)),
    }
}

fn expand_scalar(op: &Operator, spec: &VarSpec, text: &str) -> String {
    let text: String = match spec.max_length {
        Some(max) => text.chars().take(max).collect(),
        None => text.to_string(),
    };

    if op.named {
        let mut out = encode_name(spec);
        out.push_str(if text.is_empty() { op.empty } else { "=" });
        out.push_str(&encoder::encode(op.encoding, &text));
        out
    } else {
        encoder::encode(op.encoding, &text)
    }
}

/// Exploded lists join items with the operator separator and repeat the
/// name per item; unexploded lists comma-join and name only the first item.
fn expand_list(op: &Operator, spec: &VarSpec, items: &[String]) -> String {
    let separator = if spec.explode { op.separator } else { "," };
    let mut out = String::new();

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        if op.named && (spec.explode || index == 0) {
            out.push_str(&encode_name(spec));
            out.push_str(if item.is_empty() { op.empty } else { "=" });
        }
        out.push_str(&encoder::encode(op.encoding, item));
    }

    out
}

/// Exploded maps render `key=value` pairs; unexploded maps comma-join keys
/// and values into one fragment carrying the variable name when named.
fn expand_map(op: &Operator, spec: &VarSpec, pairs: &IndexMap<String, String>) -> String {
    let separator = if spec.explode { op.separator } else { "," };
    let pair_separator = if spec.explode { "=" } else { "," };
    let mut out = String::new();

    if op.named && !spec.explode {
        out.push_str(&encode_name(spec));
        // a non-empty map always has content after the name
        out.push('=');
    }

    for (index, (key, value)) in pairs.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        out.push_str(&encoder::encode(op.encoding, key));
        out.push_str(pair_separator);
        out.push_str(&encoder::encode(op.encoding, value));
    }

    out
}

/// Variable names encode strictly no matter which operator expands them
fn encode_name(spec: &VarSpec) -> String {
    encoder::encode(EncodeMode::Strict, &spec.name)
}
