use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::StprotoError;
use crate::resolver;
use crate::types::{Field, FuncDef, Schema, StructDef};
use crate::utils::quote;

lazy_static! {
    static ref STRUCT_BLOCK: Regex = Regex::new(
        r"(?s)struct[ \t]+(?P<name>[A-Za-z_][0-9A-Za-z_]*)[ \t\n]*\{(?P<body>.*?)\}"
    )
    .unwrap();
    static ref FUNC_BLOCK: Regex = Regex::new(
        r"(?s)func[ \t]+(?P<name>[A-Za-z_][0-9A-Za-z_]*)[ \t\n]*\{[ \t\n]*req[ \t\n]*\((?P<req>.*?)\)[ \t\n]*rsp[ \t\n]*\((?P<rsp>.*?)\)[ \t\n]*\}"
    )
    .unwrap();
    static ref FIELD_LINE: Regex = Regex::new(
        r"^[ \t]*(?P<name>[A-Za-z_][0-9A-Za-z_]*)[ \t]+(?P<ty>[A-Za-z0-9_\[\]]+)(?P<filters>[ \t]+[A-Za-z0-9,() \t]*)?(?P<comment>[ \t]*//[ \t]*.*)?$"
    )
    .unwrap();
}

/// Per-file parser context: the symbol table plus the structs and funcs
/// collected so far. Built for one schema file and discarded afterwards.
struct SchemaParser {
    symbols: HashSet<String>,
    names: HashSet<String>,
    structs: Vec<StructDef>,
    funcs: Vec<FuncDef>,
}

/// Parse one schema file into its model. `name` is the file's logical name
/// (the stem the output artifact is named after).
pub fn parse_schema(name: &str, text: &str) -> Result<Schema, StprotoError> {
    let mut parser = SchemaParser {
        symbols: HashSet::new(),
        names: HashSet::new(),
        structs: Vec::new(),
        funcs: Vec::new(),
    };

    // First pass: collect every declared struct name before resolving any
    // field, so forward references between structs in the same file work.
    for caps in STRUCT_BLOCK.captures_iter(text) {
        parser.symbols.insert(caps["name"].to_string());
    }

    let struct_blocks: Vec<(String, String)> = STRUCT_BLOCK
        .captures_iter(text)
        .map(|caps| (caps["name"].to_string(), caps["body"].trim().to_string()))
        .collect();
    for (struct_name, body) in struct_blocks {
        let def = parser.parse_struct_body(&struct_name, &body)?;
        parser.push_struct(def)?;
    }

    // Func blocks synthesize a request and a response struct, parsed with
    // the same field grammar and added to the struct namespace.
    let func_blocks: Vec<(String, String, String)> = FUNC_BLOCK
        .captures_iter(text)
        .map(|caps| {
            (
                caps["name"].to_string(),
                caps["req"].trim().to_string(),
                caps["rsp"].trim().to_string(),
            )
        })
        .collect();
    for (func_name, req_body, rsp_body) in func_blocks {
        let req_name = format!("{}Req", func_name);
        let rsp_name = format!("{}Rsp", func_name);

        let req = parser.parse_struct_body(&req_name, &req_body)?;
        let rsp = parser.parse_struct_body(&rsp_name, &rsp_body)?;
        parser.push_struct(req)?;
        parser.push_struct(rsp)?;
        parser.funcs.push(FuncDef {
            name: func_name,
            req: req_name,
            rsp: rsp_name,
        });
    }

    Ok(Schema {
        name: name.to_string(),
        structs: parser.structs,
        funcs: parser.funcs,
    })
}

impl SchemaParser {
    /// Split a struct (or req/rsp) body into field declarations. Every line
    /// must match the field grammar; the field's position is its wire tag.
    fn parse_struct_body(
        &self,
        struct_name: &str,
        body: &str,
    ) -> Result<StructDef, StprotoError> {
        if body.is_empty() {
            return Err(StprotoError::Semantic(format!(
                "struct {} is empty, it must have at least one field",
                quote(struct_name)
            )));
        }

        let mut fields = Vec::new();
        for raw_line in body.lines() {
            let line = raw_line.trim();
            let caps = FIELD_LINE.captures(line).ok_or_else(|| {
                StprotoError::Syntax(format!(
                    "struct {}: line {} does not match the field grammar",
                    quote(struct_name),
                    quote(line)
                ))
            })?;

            let field_name = caps["name"].to_string();
            let type_token = caps["ty"].to_string();
            let ty = resolver::resolve(&type_token, &self.symbols).map_err(|err| match err {
                StprotoError::Semantic(msg) => StprotoError::Semantic(format!(
                    "struct {}: field {}: {}",
                    quote(struct_name),
                    quote(&field_name),
                    msg
                )),
                other => other,
            })?;

            let filters = caps
                .name("filters")
                .map(|m| {
                    m.as_str()
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            let comment = caps
                .name("comment")
                .map(|m| m.as_str().trim().trim_start_matches("//").trim().to_string())
                .filter(|c| !c.is_empty());

            fields.push(Field {
                name: field_name,
                tag: fields.len(),
                ty,
                filters,
                comment,
            });
        }

        Ok(StructDef {
            name: struct_name.to_string(),
            fields,
        })
    }

    fn push_struct(&mut self, def: StructDef) -> Result<(), StprotoError> {
        if !self.names.insert(def.name.clone()) {
            return Err(StprotoError::Semantic(format!(
                "struct {} is duplicated",
                quote(&def.name)
            )));
        }
        self.structs.push(def);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Primitive, WireType};

    #[test]
    fn parses_a_simple_struct() {
        let schema = parse_schema("demo", "struct point {\n  x int\n  y int\n}").unwrap();
        assert_eq!(schema.structs.len(), 1);

        let point = &schema.structs[0];
        assert_eq!(point.name, "point");
        assert_eq!(point.fields.len(), 2);
        assert_eq!(point.fields[0].name, "x");
        assert_eq!(point.fields[0].tag, 0);
        assert_eq!(point.fields[0].ty, WireType::Primitive(Primitive::Int));
        assert_eq!(point.fields[1].name, "y");
        assert_eq!(point.fields[1].tag, 1);
    }

    #[test]
    fn tags_follow_declaration_order() {
        let a = parse_schema("a", "struct p {\n  x int\n  y int\n}").unwrap();
        let b = parse_schema("b", "struct p {\n  y int\n  x int\n}").unwrap();
        assert_eq!(a.structs[0].fields[0].name, "x");
        assert_eq!(a.structs[0].fields[0].tag, 0);
        assert_eq!(b.structs[0].fields[1].name, "x");
        assert_eq!(b.structs[0].fields[1].tag, 1);
    }

    #[test]
    fn resolves_forward_references() {
        let text = "struct outer {\n  inner inner\n}\nstruct inner {\n  n int\n}";
        let schema = parse_schema("demo", text).unwrap();
        assert_eq!(
            schema.structs[0].fields[0].ty,
            WireType::Struct("inner".to_string())
        );
    }

    #[test]
    fn captures_filters_and_comments() {
        let text = "struct user {\n  name string required trim // display name\n}";
        let schema = parse_schema("demo", text).unwrap();
        let field = &schema.structs[0].fields[0];
        assert_eq!(field.filters, vec!["required", "trim"]);
        assert_eq!(field.comment.as_deref(), Some("display name"));
    }

    #[test]
    fn synthesizes_req_and_rsp_structs() {
        let text = "func get {\n  req(\n    id int\n  )\n  rsp(\n    val string\n  )\n}";
        let schema = parse_schema("demo", text).unwrap();

        assert_eq!(schema.funcs.len(), 1);
        assert_eq!(schema.funcs[0].name, "get");
        assert_eq!(schema.funcs[0].req, "getReq");
        assert_eq!(schema.funcs[0].rsp, "getRsp");

        let req = schema.get_struct("getReq").unwrap();
        assert_eq!(req.fields.len(), 1);
        assert_eq!(req.fields[0].name, "id");
        assert_eq!(req.fields[0].ty, WireType::Primitive(Primitive::Int));

        let rsp = schema.get_struct("getRsp").unwrap();
        assert_eq!(rsp.fields[0].name, "val");
        assert_eq!(rsp.fields[0].ty, WireType::Primitive(Primitive::String));
    }

    #[test]
    fn parses_parenthesized_filters_in_func_bodies() {
        // the lazy req group extends past the filter's closing paren
        let text = "func set {\n  req(\n    n int range(1,10)\n  )\n  rsp(\n    ok bool\n  )\n}";
        let schema = parse_schema("demo", text).unwrap();
        let req = schema.get_struct("setReq").unwrap();
        assert_eq!(req.fields[0].filters, vec!["range(1,10)"]);
    }

    #[test]
    fn rejects_duplicate_structs() {
        let text = "struct p {\n  x int\n}\nstruct p {\n  y int\n}";
        let err = parse_schema("demo", text).unwrap_err();
        assert!(err.to_string().contains("duplicated"), "{}", err);
    }

    #[test]
    fn rejects_collision_with_synthesized_name() {
        let text = "struct getReq {\n  x int\n}\nfunc get {\n  req(\n    id int\n  )\n  rsp(\n    val string\n  )\n}";
        let err = parse_schema("demo", text).unwrap_err();
        assert!(err.to_string().contains("duplicated"), "{}", err);
        assert!(err.to_string().contains("getReq"), "{}", err);
    }

    #[test]
    fn rejects_empty_struct() {
        let err = parse_schema("demo", "struct nothing {}").unwrap_err();
        assert!(err.to_string().contains("at least one field"), "{}", err);
    }

    #[test]
    fn rejects_bad_field_lines() {
        let err = parse_schema("demo", "struct p {\n  not-a-field!\n}").unwrap_err();
        assert!(matches!(err, StprotoError::Syntax(_)));
        assert!(err.to_string().contains("not-a-field!"), "{}", err);
    }

    #[test]
    fn rejects_blank_interior_lines() {
        let err = parse_schema("demo", "struct p {\n  x int\n\n  y int\n}").unwrap_err();
        assert!(matches!(err, StprotoError::Syntax(_)));
    }

    #[test]
    fn rejects_undeclared_field_types() {
        let err = parse_schema("demo", "struct money {\n  amount currency\n}").unwrap_err();
        assert!(err.to_string().contains("unresolved type"), "{}", err);
        assert!(err.to_string().contains("currency"), "{}", err);
    }
}
