// Template parser: literal scanner plus expression grammar

use crate::ast::{Expression, Template, TemplatePart, VarSpec};
use crate::encoder;
use crate::error::ExpandError;
use crate::operator::{self, Lookup, SIMPLE};

pub struct TemplateParser {
    input: String,
    pos: usize,
}

impl TemplateParser {
    pub fn parse(template: &str) -> Result<Template, ExpandError> {
        let mut parser = Self {
            input: template.to_string(),
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Result<Template, ExpandError> {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();

        while let Some(ch) = self.peek_char() {
            if ch == '{' {
                if !literal_buf.is_empty() {
                    parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                }
                let expr = self.parse_expression()?;
                parts.push(TemplatePart::Expression(expr));
            } else {
                // Everything outside an expression is literal text,
                // including a stray '}'
                literal_buf.push(ch);
                self.pos += ch.len_utf8();
            }
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        log::trace!("parsed template into {} parts", parts.len());
        Ok(Template::new(parts))
    }

    /// Parse one `{...}` starting at the current cursor.
    ///
    /// The first '}' always closes the expression; a missing one fails
    /// immediately instead of stalling the scanner.
    fn parse_expression(&mut self) -> Result<Expression, ExpandError> {
        let start = self.pos;
        self.pos += 1; // consume '{'

        let close = self.input[self.pos..]
            .find('}')
            .ok_or(ExpandError::UnterminatedExpression { start })?;
        let body = &self.input[self.pos..self.pos + close];
        self.pos += close + 1;

        let (operator, rest) = match body.chars().next() {
            Some(ch) => match operator::lookup(ch) {
                Some(Lookup::Active(op)) => (op, &body[ch.len_utf8()..]),
                Some(Lookup::Reserved) => return Err(ExpandError::UnsupportedOperator(ch)),
                None => (&SIMPLE, body),
            },
            None => (&SIMPLE, body),
        };

        let vars = rest.split(',').map(parse_varspec).collect();
        Ok(Expression { operator, vars })
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }
}

/// Parse one comma-separated variable token. The explode modifier is
/// stripped before the prefix-length match; the grammar never carries both.
fn parse_varspec(token: &str) -> VarSpec {
    let (token, explode) = match token.strip_suffix('*') {
        Some(stripped) => (stripped, true),
        None => (token, false),
    };

    let (name, max_length) = split_prefix_modifier(token);

    VarSpec {
        name: encoder::decode(name),
        explode,
        max_length,
    }
}

/// Match a trailing `:<digits>` prefix-length modifier.
///
/// The portion before the colon must be colon-free, and a length of zero
/// never truncates, so it is dropped here.
fn split_prefix_modifier(token: &str) -> (&str, Option<usize>) {
    match token.split_once(':') {
        Some((name, digits))
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            (name, digits.parse::<usize>().ok().filter(|&n| n > 0))
        }
        _ => (token, None),
    }
}
