//! Schema → Rust mapping tables.
//!
//! Deterministic mappings from extracted model constructs to Rust
//! identifiers, modules, and primitive types.

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:boolean`.
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
/// `xsd:nonNegativeInteger`.
pub const XSD_NON_NEGATIVE_INTEGER: &str =
    "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
/// `xsd:positiveInteger`.
pub const XSD_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";
/// `xsd:decimal`.
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
/// `xsd:dateTime`.
pub const XSD_DATETIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
/// `xsd:dateTimeStamp`.
pub const XSD_DATETIME_STAMP: &str = "http://www.w3.org/2001/XMLSchema#dateTimeStamp";
/// `xsd:anyURI`.
pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

/// Maps an XSD datatype IRI to a Rust primitive type. Unknown datatypes
/// (including the SPDX-defined `DateTime` refinement) fall back to
/// `String`, keeping the generated types permissive about literal shapes.
#[must_use]
pub fn rust_type_for_xsd(xsd_iri: &str) -> &'static str {
    match xsd_iri {
        XSD_BOOLEAN => "bool",
        XSD_INTEGER => "i64",
        XSD_NON_NEGATIVE_INTEGER | XSD_POSITIVE_INTEGER => "u64",
        XSD_DECIMAL => "f64",
        XSD_STRING | XSD_DATETIME | XSD_DATETIME_STAMP | XSD_ANY_URI => "String",
        _ => "String",
    }
}

/// Converts a camelCase or PascalCase name into a snake_case Rust
/// identifier, escaping Rust keywords with a trailing underscore.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            // No underscore inside consecutive uppercase runs ("AI", "CVSS").
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
        prev = Some(ch);
    }
    escape_keyword(result)
}

/// Converts a camelCase, snake_case, or plain lowercase name into a
/// PascalCase Rust identifier (`noAssertion` → `NoAssertion`,
/// `sha256` → `Sha256`, `blake2b_256` → `Blake2b256`).
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;
    for ch in s.chars() {
        if ch == '_' || ch == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

/// Returns the Rust module name for a schema namespace
/// (`Core` → `core`, `ExpandedLicensing` → `expanded_licensing`).
#[must_use]
pub fn module_name(namespace: &str) -> String {
    to_snake_case(namespace)
}

fn escape_keyword(ident: String) -> String {
    match ident.as_str() {
        "type" | "self" | "super" | "crate" | "mod" | "fn" | "pub" | "use" | "let" | "mut"
        | "ref" | "as" | "in" | "for" | "if" | "else" | "match" | "return" | "struct" | "enum"
        | "trait" | "impl" | "where" | "loop" | "while" | "break" | "continue" | "move" | "box"
        | "dyn" | "static" | "const" | "unsafe" | "extern" | "true" | "false" => {
            let mut escaped = ident;
            escaped.push('_');
            escaped
        }
        _ => ident,
    }
}
