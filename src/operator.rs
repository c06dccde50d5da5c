// Operator descriptors for the expression forms of RFC 6570

use crate::encoder::EncodeMode;

/// Rendering rules selected by an expression's leading character.
///
/// Descriptors are process-wide constants, never mutated, and safe to share
/// across concurrent expansions.
#[derive(Debug, PartialEq, Eq)]
pub struct Operator {
    /// Emitted once before the first fragment
    pub prefix: &'static str,
    /// Joins fragments, and exploded items within one fragment
    pub separator: &'static str,
    /// Render `name=value` pairs instead of bare values
    pub named: bool,
    /// Substituted for `=value` when a named value is empty
    pub empty: &'static str,
    /// Encoding applied to expanded values
    pub encoding: EncodeMode,
}

pub const SIMPLE: Operator = Operator {
    prefix: "",
    separator: ",",
    named: false,
    empty: "",
    encoding: EncodeMode::Strict,
};

pub const RESERVED_EXPANSION: Operator = Operator {
    prefix: "",
    separator: ",",
    named: false,
    empty: "",
    encoding: EncodeMode::ReservedPreserving,
};

pub const FRAGMENT: Operator = Operator {
    prefix: "#",
    separator: ",",
    named: false,
    empty: "",
    encoding: EncodeMode::ReservedPreserving,
};

pub const LABEL: Operator = Operator {
    prefix: ".",
    separator: ".",
    named: false,
    empty: "",
    encoding: EncodeMode::Strict,
};

pub const PATH: Operator = Operator {
    prefix: "/",
    separator: "/",
    named: false,
    empty: "",
    encoding: EncodeMode::Strict,
};

pub const PATH_PARAM: Operator = Operator {
    prefix: ";",
    separator: ";",
    named: true,
    empty: "",
    encoding: EncodeMode::Strict,
};

pub const QUERY: Operator = Operator {
    prefix: "?",
    separator: "&",
    named: true,
    empty: "=",
    encoding: EncodeMode::Strict,
};

pub const QUERY_CONTINUATION: Operator = Operator {
    prefix: "&",
    separator: "&",
    named: true,
    empty: "=",
    encoding: EncodeMode::Strict,
};

/// Table entry for a leading expression character
#[derive(Debug)]
pub(crate) enum Lookup {
    /// An active operator; the character is consumed
    Active(&'static Operator),
    /// Reserved for future RFC extensions; expansion must fail
    Reserved,
}

/// Consult the operator table.
///
/// `None` means the character is not in the table at all: the expression
/// uses the default operator and the character belongs to the first
/// variable name.
pub(crate) fn lookup(ch: char) -> Option<Lookup> {
    match ch {
        '+' => Some(Lookup::Active(&RESERVED_EXPANSION)),
        '#' => Some(Lookup::Active(&FRAGMENT)),
        '.' => Some(Lookup::Active(&LABEL)),
        '/' => Some(Lookup::Active(&PATH)),
        ';' => Some(Lookup::Active(&PATH_PARAM)),
        '?' => Some(Lookup::Active(&QUERY)),
        '&' => Some(Lookup::Active(&QUERY_CONTINUATION)),
        '=' | ',' | '!' | '@' | '|' => Some(Lookup::Reserved),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_active_operators() {
        for (ch, expected) in [
            ('+', &RESERVED_EXPANSION),
            ('#', &FRAGMENT),
            ('.', &LABEL),
            ('/', &PATH),
            (';', &PATH_PARAM),
            ('?', &QUERY),
            ('&', &QUERY_CONTINUATION),
        ] {
            match lookup(ch) {
                Some(Lookup::Active(op)) => assert_eq!(op, expected, "operator for '{}'", ch),
                other => panic!("expected active operator for '{}', got {:?}", ch, other),
            }
        }
    }

    #[test]
    fn test_lookup_reserved_operators() {
        for ch in ['=', ',', '!', '@', '|'] {
            assert!(
                matches!(lookup(ch), Some(Lookup::Reserved)),
                "'{}' should be reserved",
                ch
            );
        }
    }

    #[test]
    fn test_lookup_plain_character_misses() {
        assert!(lookup('v').is_none());
        assert!(lookup('0').is_none());
        assert!(lookup('%').is_none());
    }

    #[test]
    fn test_named_operators_use_strict_encoding() {
        for op in [&PATH_PARAM, &QUERY, &QUERY_CONTINUATION] {
            assert!(op.named);
            assert_eq!(op.encoding, EncodeMode::Strict);
        }
    }
}
