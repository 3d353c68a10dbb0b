//! Domain / Row / DTO interface text.

use std::collections::HashSet;

use crate::domain::entities::schema::{AUDIT_COLUMNS, IDENTIFIER, PropertyInfo, PropertySchema, TypeBucket};

/// Emit the three shape declarations for a domain.
pub fn generate_types(pascal: &str, schema: Option<&PropertySchema>) -> String {
    match schema {
        Some(schema) => from_schema(pascal, schema),
        None => fallback(pascal),
    }
}

fn from_schema(pascal: &str, schema: &PropertySchema) -> String {
    let domain: Vec<String> = schema.iter().map(domain_member).collect();
    let dto: Vec<String> = schema.dto_properties().map(domain_member).collect();

    format!(
        "export interface I{pascal} {{\n{}\n}}\n\n\
         export interface I{pascal}Row {{\n{}\n}}\n\n\
         export interface I{pascal}DTO {{\n{}\n}}\n",
        domain.join("\n"),
        row_members(schema).join("\n"),
        dto.join("\n"),
    )
}

fn domain_member(p: &PropertyInfo) -> String {
    let optional = if p.is_optional { "?" } else { "" };
    format!("\t{}{optional}: {};", p.name, p.declared_type)
}

/// Row keys are snake_case, unique, and always include `id` and the audit
/// columns.
fn row_members(schema: &PropertySchema) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut members = Vec::with_capacity(schema.len() + 3);

    if !schema.has_identifier() {
        members.push(format!("\t{IDENTIFIER}: string | null;"));
        seen.insert(IDENTIFIER.to_string());
    }

    for p in schema.iter() {
        let column = p.column_name();
        if !seen.insert(column.clone()) {
            continue;
        }
        members.push(format!("\t{column}: {};", row_type(p)));
    }

    for column in AUDIT_COLUMNS {
        if seen.insert(column.to_string()) {
            members.push(format!("\t{column}: string;"));
        }
    }

    members
}

fn row_type(p: &PropertyInfo) -> String {
    let base = match p.bucket() {
        TypeBucket::TextArray => "any[]".to_string(),
        TypeBucket::Timestamp => "string".to_string(),
        _ => p.declared_type.clone(),
    };
    if p.is_optional || p.is_identifier() {
        format!("{base} | null")
    } else {
        base
    }
}

fn fallback(pascal: &str) -> String {
    format!(
        "export interface I{pascal} {{
\tid: string;
\tnome: string;
\tativo: boolean;
\tcreatedAt: Date;
\tupdatedAt: Date;
}}

export interface I{pascal}Row {{
\tid: string | null;
\tnome: string;
\tativo: boolean;
\tcreated_at: string;
\tupdated_at: string;
}}

export interface I{pascal}DTO {{
\tnome: string;
\tativo?: boolean;
}}
"
    )
}
