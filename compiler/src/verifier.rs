use std::collections::HashMap;

use crate::error::StprotoError;
use crate::types::{Schema, StructDef, WireType};
use crate::utils::quote;

/// The wire format carries a struct's field count and each tag in a single
/// byte.
pub const MAX_FIELDS: usize = 255;

/// Check a parsed schema before code generation: field-count bounds, and
/// structs that contain themselves through bare struct-typed fields.
pub fn verify_schema(schema: &Schema) -> Result<(), StprotoError> {
    let mut structs_map: HashMap<&str, &StructDef> = HashMap::new();
    for def in &schema.structs {
        structs_map.insert(def.name.as_str(), def);
    }

    for def in &schema.structs {
        if def.fields.len() > MAX_FIELDS {
            return Err(StprotoError::Semantic(format!(
                "struct {} has {} fields, the wire format allows at most {}",
                quote(&def.name),
                def.fields.len(),
                MAX_FIELDS
            )));
        }
    }

    // Cycles through lists and maps are fine: the generated containers are
    // constructible empty and finite data terminates. A bare struct field
    // cycle has no representable zero value.
    let mut state: HashMap<String, u8> = HashMap::new();
    for def in &schema.structs {
        check_recursion(&def.name, &structs_map, &mut state)?;
    }

    Ok(())
}

fn check_recursion(
    name: &str,
    structs_map: &HashMap<&str, &StructDef>,
    state: &mut HashMap<String, u8>,
) -> Result<(), StprotoError> {
    let def = match structs_map.get(name) {
        Some(def) => def,
        None => return Ok(()),
    };

    if let Some(&s) = state.get(name) {
        if s == 1 {
            return Err(StprotoError::Semantic(format!(
                "recursive nesting of {} is not allowed",
                quote(name)
            )));
        } else if s == 2 {
            return Ok(());
        }
    }

    state.insert(name.to_string(), 1);
    for field in &def.fields {
        if let WireType::Struct(ref ty) = field.ty {
            check_recursion(ty, structs_map, state)?;
        }
    }
    state.insert(name.to_string(), 2);

    Ok(())
}
