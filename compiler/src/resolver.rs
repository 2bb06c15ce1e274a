use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::StprotoError;
use crate::types::{Primitive, WireType};
use crate::utils::quote;

/// Defensive bound on `[]`/`map[..]` nesting. Type-trees are finite per
/// parse; a pathological token nested deeper than this is rejected instead
/// of recursing without bound.
pub const MAX_TYPE_DEPTH: usize = 32;

lazy_static! {
    static ref MAP_TYPE: Regex = Regex::new(r"^map\[(?P<key>[a-z]+)\](?P<value>.+)$").unwrap();
}

/// Resolve a field's textual type token against the set of declared struct
/// names. Pure function of its inputs; recursive over `[]` prefixes and
/// `map[K]V` values.
pub fn resolve(token: &str, symbols: &HashSet<String>) -> Result<WireType, StprotoError> {
    resolve_at(token, symbols, 0)
}

fn resolve_at(
    token: &str,
    symbols: &HashSet<String>,
    depth: usize,
) -> Result<WireType, StprotoError> {
    if depth > MAX_TYPE_DEPTH {
        return Err(StprotoError::Semantic(format!(
            "type {} is nested deeper than {} levels",
            quote(token),
            MAX_TYPE_DEPTH
        )));
    }

    if let Some(primitive) = Primitive::from_keyword(token) {
        return Ok(WireType::Primitive(primitive));
    }

    if symbols.contains(token) {
        return Ok(WireType::Struct(token.to_string()));
    }

    if let Some(rest) = token.strip_prefix("[]") {
        let elem = resolve_at(rest, symbols, depth + 1)?;
        return Ok(WireType::List(Box::new(elem)));
    }

    if let Some(caps) = MAP_TYPE.captures(token) {
        let key_token = &caps["key"];
        let key = Primitive::from_keyword(key_token).ok_or_else(|| {
            StprotoError::Semantic(format!(
                "map key type {} is not a primitive",
                quote(key_token)
            ))
        })?;
        if !key.is_hashable() {
            return Err(StprotoError::Semantic(format!(
                "map key type {} is not allowed, keys must be hashable",
                quote(key_token)
            )));
        }
        let value = resolve_at(&caps["value"], symbols, depth + 1)?;
        return Ok(WireType::Map(key, Box::new(value)));
    }

    Err(StprotoError::Semantic(format!(
        "unresolved type {}",
        quote(token)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_primitives() {
        let syms = symbols(&[]);
        assert_eq!(
            resolve("int", &syms).unwrap(),
            WireType::Primitive(Primitive::Int)
        );
        assert_eq!(
            resolve("string", &syms).unwrap(),
            WireType::Primitive(Primitive::String)
        );
        assert_eq!(
            resolve("double", &syms).unwrap(),
            WireType::Primitive(Primitive::Double)
        );
    }

    #[test]
    fn resolves_struct_references() {
        let syms = symbols(&["point"]);
        assert_eq!(
            resolve("point", &syms).unwrap(),
            WireType::Struct("point".to_string())
        );
    }

    #[test]
    fn resolves_nested_lists() {
        let syms = symbols(&["point"]);
        assert_eq!(
            resolve("[][]point", &syms).unwrap(),
            WireType::List(Box::new(WireType::List(Box::new(WireType::Struct(
                "point".to_string()
            )))))
        );
    }

    #[test]
    fn resolves_maps() {
        let syms = symbols(&["point"]);
        assert_eq!(
            resolve("map[string][]point", &syms).unwrap(),
            WireType::Map(
                Primitive::String,
                Box::new(WireType::List(Box::new(WireType::Struct(
                    "point".to_string()
                ))))
            )
        );
    }

    #[test]
    fn rejects_struct_map_keys() {
        // lowercase struct name: matches the map key pattern but is not a
        // primitive
        let syms = symbols(&["foo"]);
        let err = resolve("map[foo]int", &syms).unwrap_err();
        assert!(err.to_string().contains("not a primitive"), "{}", err);
    }

    #[test]
    fn rejects_float_map_keys() {
        let syms = symbols(&[]);
        let err = resolve("map[float]int", &syms).unwrap_err();
        assert!(err.to_string().contains("hashable"), "{}", err);
        let err = resolve("map[double]int", &syms).unwrap_err();
        assert!(err.to_string().contains("hashable"), "{}", err);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let syms = symbols(&[]);
        let err = resolve("currency", &syms).unwrap_err();
        assert!(err.to_string().contains("unresolved type"), "{}", err);
        assert!(err.to_string().contains("currency"), "{}", err);
    }

    #[test]
    fn rejects_excessive_nesting() {
        let syms = symbols(&[]);
        let token = format!("{}int", "[]".repeat(MAX_TYPE_DEPTH + 4));
        let err = resolve(&token, &syms).unwrap_err();
        assert!(err.to_string().contains("nested deeper"), "{}", err);
    }
}
