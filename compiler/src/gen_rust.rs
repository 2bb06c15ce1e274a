use stproto_protocol::DataType;

use crate::types::{Field, Primitive, Schema, StructDef, WireType};

/// Converts a string to PascalCase.
/// - If the string contains underscores, it splits on underscores and
///   uppercases each word's first letter.
/// - If the string is fully uppercase, only the first letter stays upper.
/// - Otherwise only the first letter is uppercased and the rest preserved.
fn to_pascal_case(s: &str) -> String {
    if s.contains('_') {
        s.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().to_string() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<String>()
    } else if s == s.to_uppercase() {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
        }
    } else {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_uppercase().to_string() + chars.as_str(),
        }
    }
}

/// Converts a string to snake_case without splitting consecutive uppercase
/// letters, so acronyms stay intact (e.g. "sessionID" becomes "session_id").
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    snake.push('_');
                }
            }
            snake.extend(c.to_lowercase());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Escapes Rust reserved keywords by suffixing with an underscore.
fn escape_rust_keyword(s: &str) -> String {
    let keywords = [
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while",
    ];
    if keywords.contains(&s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

fn field_ident(field: &Field) -> String {
    escape_rust_keyword(&to_snake_case(&field.name))
}

/// Maps a resolved type-tree to the Rust type of the generated field.
fn rust_type(ty: &WireType) -> String {
    match ty {
        WireType::Primitive(primitive) => rust_primitive(*primitive).to_string(),
        WireType::List(elem) => format!("Vec<{}>", rust_type(elem)),
        WireType::Map(key, value) => {
            format!("HashMap<{}, {}>", rust_primitive(*key), rust_type(value))
        }
        WireType::Struct(name) => to_pascal_case(name),
    }
}

fn rust_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Byte => "u8",
        Primitive::Bool => "bool",
        Primitive::Int => "i32",
        Primitive::Long => "i64",
        Primitive::Float => "f32",
        Primitive::Double => "f64",
        Primitive::String => "String",
    }
}

/// The zero value the generated constructor assigns to a field.
fn zero_value(ty: &WireType) -> String {
    match ty {
        WireType::Primitive(primitive) => match primitive {
            Primitive::Byte | Primitive::Int | Primitive::Long => "0".to_string(),
            Primitive::Bool => "false".to_string(),
            Primitive::Float | Primitive::Double => "0.0".to_string(),
            Primitive::String => "String::new()".to_string(),
        },
        WireType::List(_) => "Vec::new()".to_string(),
        WireType::Map(_, _) => "HashMap::new()".to_string(),
        WireType::Struct(name) => format!("{}::new()", to_pascal_case(name)),
    }
}

fn marker_ident(data_type: DataType) -> String {
    format!("DataType::{:?}", data_type)
}

// Loop and binding names are suffixed with the nesting depth at which they
// are introduced, so recursive emission never collides across levels.

fn elem_var(depth: usize) -> String {
    format!("e{}", depth)
}

fn key_var(depth: usize) -> String {
    format!("k{}", depth)
}

fn val_var(depth: usize) -> String {
    format!("v{}", depth)
}

fn len_var(depth: usize) -> String {
    format!("l{}", depth)
}

fn read_var(base: &str, depth: usize) -> String {
    format!("{}{}", base, depth)
}

/// Ordered emission instructions: (indent level, line text), rendered once
/// at the end. Keeps the recursive emitters free of raw indentation
/// splicing.
struct CodeBuf {
    lines: Vec<(usize, String)>,
    indent: usize,
}

impl CodeBuf {
    fn new() -> CodeBuf {
        CodeBuf {
            lines: Vec::new(),
            indent: 0,
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.lines.push((self.indent, text));
    }

    fn blank(&mut self) {
        self.lines.push((0, String::new()));
    }

    fn open(&mut self, text: impl Into<String>) {
        self.line(text);
        self.indent += 1;
    }

    fn close(&mut self, text: impl Into<String>) {
        self.indent -= 1;
        self.line(text);
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (indent, text) in &self.lines {
            if text.is_empty() {
                out.push('\n');
                continue;
            }
            for _ in 0..*indent {
                out.push_str("    ");
            }
            out.push_str(text);
            out.push('\n');
        }
        out
    }
}

/// Compiles the schema model into one generated Rust source artifact: a
/// fixed header, then per struct its type declaration, codec impl, and
/// zero-value constructor.
pub fn compile_schema_to_rust(schema: &Schema) -> String {
    let mut buf = CodeBuf::new();

    buf.line(format!(
        "// Code generated by stprotoc from {}.stproto. DO NOT EDIT.",
        schema.name
    ));
    buf.blank();
    if schema_uses_map(schema) {
        buf.line("use std::collections::HashMap;");
        buf.blank();
    }
    buf.line("use serde::{Deserialize, Serialize};");
    buf.line("use stproto::{DataType, ProtoError, StBuffer, StBufferMut, StCodec};");
    buf.blank();

    for def in &schema.structs {
        generate_struct_decl(&mut buf, def);
        buf.blank();
        generate_codec_impl(&mut buf, def);
        buf.blank();
        generate_constructor(&mut buf, def);
        buf.blank();
    }

    buf.render()
}

fn schema_uses_map(schema: &Schema) -> bool {
    fn uses_map(ty: &WireType) -> bool {
        match ty {
            WireType::Map(_, _) => true,
            WireType::List(elem) => uses_map(elem),
            _ => false,
        }
    }
    schema
        .structs
        .iter()
        .flat_map(|def| &def.fields)
        .any(|field| uses_map(&field.ty))
}

fn generate_struct_decl(buf: &mut CodeBuf, def: &StructDef) {
    buf.line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]");
    buf.open(format!("pub struct {} {{", to_pascal_case(&def.name)));
    for field in &def.fields {
        if let Some(ref comment) = field.comment {
            buf.line(format!("/// {}", comment));
        }
        buf.line(format!("#[serde(rename = \"{}\")]", field.name));
        buf.line(format!(
            "pub {}: {},",
            field_ident(field),
            rust_type(&field.ty)
        ));
    }
    buf.close("}");
}

fn generate_codec_impl(buf: &mut CodeBuf, def: &StructDef) {
    buf.open(format!("impl StCodec for {} {{", to_pascal_case(&def.name)));

    buf.open("fn write_data_buf(&self, bf: &mut StBufferMut) {");
    buf.line(format!("bf.write_struct_length({});", def.fields.len()));
    for field in &def.fields {
        buf.blank();
        buf.line(format!("bf.write_tag({});", field.tag));
        buf.line(format!(
            "bf.write_data_type({});",
            marker_ident(field.ty.marker())
        ));
        let expr = format!("self.{}", field_ident(field));
        emit_write_value(buf, &field.ty, &expr, false, 1);
    }
    buf.close("}");

    buf.blank();

    buf.open("fn read_data_buf(&mut self, bf: &mut StBuffer) -> Result<(), ProtoError> {");
    buf.line("let count = bf.read_struct_length()?;");
    buf.open("for _ in 0..count {");
    buf.line("let tag = bf.read_tag()?;");
    buf.line("let data_type = bf.read_data_type()?;");
    buf.open("match tag {");
    for field in &def.fields {
        buf.open(format!("{} => {{", field.tag));
        emit_read_value(buf, &field.ty, "d", 1);
        buf.line(format!("self.{} = d1;", field_ident(field)));
        buf.close("}");
    }
    buf.line("_ => bf.skip_value(data_type)?,");
    buf.close("}");
    buf.close("}");
    buf.line("Ok(())");
    buf.close("}");

    buf.close("}");
}

fn generate_constructor(buf: &mut CodeBuf, def: &StructDef) {
    let name = to_pascal_case(&def.name);

    buf.open(format!("impl {} {{", name));
    buf.open("pub fn new() -> Self {");
    buf.open("Self {");
    for field in &def.fields {
        buf.line(format!("{}: {},", field_ident(field), zero_value(&field.ty)));
    }
    buf.close("}");
    buf.close("}");
    buf.close("}");

    buf.blank();

    buf.open(format!("impl Default for {} {{", name));
    buf.open("fn default() -> Self {");
    buf.line("Self::new()");
    buf.close("}");
    buf.close("}");
}

/// Emit the statements that write one value of type `ty`. `expr` names the
/// value; `is_ref` says whether it is a borrowed loop binding rather than an
/// owned field. `depth` indexes the temporary names for this nesting level.
fn emit_write_value(buf: &mut CodeBuf, ty: &WireType, expr: &str, is_ref: bool, depth: usize) {
    match ty {
        WireType::Primitive(primitive) => {
            buf.line(primitive_write_call(*primitive, expr, is_ref));
        }
        WireType::List(elem) => {
            buf.line(format!(
                "bf.write_data_type({});",
                marker_ident(elem.marker())
            ));
            buf.line(format!("bf.write_length({}.len() as u32);", expr));
            if matches!(elem.as_ref(), WireType::Primitive(Primitive::Byte)) {
                // byte runs are written in bulk
                if is_ref {
                    buf.line(format!("bf.write_bytes({});", expr));
                } else {
                    buf.line(format!("bf.write_bytes(&{});", expr));
                }
            } else {
                let elem_name = elem_var(depth);
                buf.open(format!("for {} in {}.iter() {{", elem_name, expr));
                emit_write_value(buf, elem, &elem_name, true, depth + 1);
                buf.close("}");
            }
        }
        WireType::Map(key, value) => {
            buf.line(format!(
                "bf.write_data_type({});",
                marker_ident(key.marker())
            ));
            buf.line(format!(
                "bf.write_data_type({});",
                marker_ident(value.marker())
            ));
            buf.line(format!("bf.write_length({}.len() as u32);", expr));
            let key_name = key_var(depth);
            let val_name = val_var(depth);
            buf.open(format!(
                "for ({}, {}) in {}.iter() {{",
                key_name, val_name, expr
            ));
            buf.line(primitive_write_call(*key, &key_name, true));
            emit_write_value(buf, value, &val_name, true, depth + 1);
            buf.close("}");
        }
        WireType::Struct(_) => {
            buf.line(format!("{}.write_data_buf(bf);", expr));
        }
    }
}

/// Emit the statements that read one value of type `ty` into a new binding
/// named `<base><depth>`.
fn emit_read_value(buf: &mut CodeBuf, ty: &WireType, base: &str, depth: usize) {
    let var = read_var(base, depth);
    match ty {
        WireType::Primitive(primitive) => {
            buf.line(format!(
                "let {} = bf.{}()?;",
                var,
                primitive_read_method(*primitive)
            ));
        }
        WireType::List(elem) => {
            buf.line("bf.read_data_type()?;");
            let len_name = len_var(depth);
            buf.line(format!("let {} = bf.read_length()?;", len_name));
            if matches!(elem.as_ref(), WireType::Primitive(Primitive::Byte)) {
                buf.line(format!(
                    "let {} = bf.read_bytes({} as usize)?.to_vec();",
                    var, len_name
                ));
            } else {
                buf.line(format!(
                    "let mut {}: {} = Vec::with_capacity({} as usize);",
                    var,
                    rust_type(ty),
                    len_name
                ));
                buf.open(format!("for _ in 0..{} {{", len_name));
                let elem_name = elem_var(depth + 1);
                emit_read_value(buf, elem, "e", depth + 1);
                buf.line(format!("{}.push({});", var, elem_name));
                buf.close("}");
            }
        }
        WireType::Map(key, value) => {
            buf.line("bf.read_data_type()?;");
            buf.line("bf.read_data_type()?;");
            let len_name = len_var(depth);
            buf.line(format!("let {} = bf.read_length()?;", len_name));
            buf.line(format!(
                "let mut {}: {} = HashMap::with_capacity({} as usize);",
                var,
                rust_type(ty),
                len_name
            ));
            buf.open(format!("for _ in 0..{} {{", len_name));
            let key_name = read_var("k", depth + 1);
            let val_name = read_var("v", depth + 1);
            buf.line(format!(
                "let {} = bf.{}()?;",
                key_name,
                primitive_read_method(*key)
            ));
            emit_read_value(buf, value, "v", depth + 1);
            buf.line(format!("{}.insert({}, {});", var, key_name, val_name));
            buf.close("}");
        }
        WireType::Struct(name) => {
            buf.line(format!("let mut {} = {}::new();", var, to_pascal_case(name)));
            buf.line(format!("{}.read_data_buf(bf)?;", var));
        }
    }
}

fn primitive_write_call(primitive: Primitive, expr: &str, is_ref: bool) -> String {
    let value = if is_ref && primitive != Primitive::String {
        format!("*{}", expr)
    } else {
        expr.to_string()
    };
    match primitive {
        Primitive::Byte => format!("bf.write_byte({});", value),
        Primitive::Bool => format!("bf.write_bool({});", value),
        Primitive::Int => format!("bf.write_var_int({});", value),
        Primitive::Long => format!("bf.write_var_int64({});", value),
        Primitive::Float => format!("bf.write_var_float({});", value),
        Primitive::Double => format!("bf.write_double({});", value),
        Primitive::String => {
            if is_ref {
                format!("bf.write_string({});", value)
            } else {
                format!("bf.write_string(&{});", value)
            }
        }
    }
}

fn primitive_read_method(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Byte => "read_byte",
        Primitive::Bool => "read_bool",
        Primitive::Int => "read_var_int",
        Primitive::Long => "read_var_int64",
        Primitive::Float => "read_var_float",
        Primitive::Double => "read_double",
        Primitive::String => "read_string",
    }
}
