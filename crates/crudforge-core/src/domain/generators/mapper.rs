//! Row ↔ domain mapping functions.
//!
//! `mapDTOToRow` and `mapRowToDomain` cover the same columns, so a DTO taken
//! through both comes back with every shared field intact (timestamps go
//! through their ISO text form).

use std::collections::HashSet;

use crate::domain::entities::schema::{PropertyInfo, PropertySchema, TypeBucket};

pub fn generate_mapper(pascal: &str, schema: Option<&PropertySchema>) -> String {
    let (dto_to_row, row_to_domain) = match schema {
        Some(schema) => (dto_entries(schema), domain_entries(schema)),
        None => (fallback_dto_entries(), fallback_domain_entries()),
    };

    format!(
        "import {{ randomUUID }} from \"node:crypto\";
import type {{ I{pascal}, I{pascal}DTO, I{pascal}Row }} from \"./{pascal}.type\";

export const mapDTOToRow = (
\tdto: I{pascal}DTO,
\tid?: string,
): Partial<I{pascal}Row> => {{
\tconst now = new Date().toISOString();
\treturn {{
\t\tid: id || randomUUID(),
{dto_to_row}
\t\t...(id ? {{}} : {{ created_at: now }}),
\t\tupdated_at: now,
\t}};
}};

export const mapRowToDomain = (row: I{pascal}Row): I{pascal} => ({{
{row_to_domain}
}});
"
    )
}

fn dto_entries(schema: &PropertySchema) -> String {
    let mut seen = HashSet::new();
    schema
        .dto_properties()
        .filter(|p| seen.insert(p.column_name()))
        .map(|p| format!("\t\t{}: {},", p.column_name(), dto_value(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dto_value(p: &PropertyInfo) -> String {
    let field = format!("dto.{}", p.name);
    if p.is_active_flag() {
        return format!("{field} ?? true");
    }
    match (p.bucket(), p.is_optional) {
        (TypeBucket::Timestamp, false) => format!("new Date({field}).toISOString()"),
        (TypeBucket::Timestamp, true) => {
            format!("{field} ? new Date({field}).toISOString() : undefined")
        }
        _ => field,
    }
}

fn domain_entries(schema: &PropertySchema) -> String {
    schema
        .iter()
        .map(|p| format!("\t{}: {},", p.name, domain_value(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn domain_value(p: &PropertyInfo) -> String {
    let field = format!("row.{}", p.column_name());
    match p.bucket() {
        TypeBucket::TextArray => format!("{field} ?? []"),
        TypeBucket::Timestamp if p.is_optional => {
            format!("{field} ? new Date({field}) : undefined")
        }
        TypeBucket::Timestamp => format!("new Date({field})"),
        TypeBucket::Text if !p.is_optional && p.declared_type.contains("string") => {
            format!("{field} ?? \"\"")
        }
        _ if p.is_optional => format!("{field} ?? undefined"),
        _ => field,
    }
}

fn fallback_dto_entries() -> String {
    "\t\tnome: dto.nome,\n\t\tativo: dto.ativo ?? true,".to_string()
}

fn fallback_domain_entries() -> String {
    [
        "\tid: row.id ?? \"\",",
        "\tnome: row.nome,",
        "\tativo: row.ativo,",
        "\tcreatedAt: new Date(row.created_at),",
        "\tupdatedAt: new Date(row.updated_at),",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> PropertySchema {
        PropertySchema::new(vec![
            PropertyInfo::new("id", "string"),
            PropertyInfo::new("nomeCompleto", "string"),
            PropertyInfo::new("apelido", "string").optional(),
            PropertyInfo::new("saldo", "number"),
            PropertyInfo::new("ativo", "boolean").optional(),
            PropertyInfo::new("nascimento", "Date"),
            PropertyInfo::new("tags", "string[]").optional(),
            PropertyInfo::new("createdAt", "Date"),
        ])
        .unwrap()
    }

    #[test]
    fn dto_to_row_uses_snake_keys_and_defaults() {
        let out = generate_mapper("Cliente", Some(&schema()));
        assert!(out.contains("\t\tnome_completo: dto.nomeCompleto,"));
        assert!(out.contains("\t\tativo: dto.ativo ?? true,"));
        assert!(out.contains("\t\tnascimento: new Date(dto.nascimento).toISOString(),"));
        assert!(out.contains("\t\tid: id || randomUUID(),"));
        assert!(!out.contains("created_at: dto."));
    }

    #[test]
    fn creation_stamps_only_without_id() {
        let out = generate_mapper("Cliente", Some(&schema()));
        assert!(out.contains("...(id ? {} : { created_at: now }),"));
        assert!(out.contains("\t\tupdated_at: now,"));
    }

    #[test]
    fn row_to_domain_restores_types() {
        let out = generate_mapper("Cliente", Some(&schema()));
        assert!(out.contains("\tnomeCompleto: row.nome_completo ?? \"\","));
        assert!(out.contains("\tapelido: row.apelido ?? undefined,"));
        assert!(out.contains("\tsaldo: row.saldo,"));
        assert!(out.contains("\tnascimento: new Date(row.nascimento),"));
        assert!(out.contains("\ttags: row.tags ?? [],"));
        assert!(out.contains("\tcreatedAt: new Date(row.created_at),"));
    }

    #[test]
    fn every_dto_field_round_trips() {
        let schema = schema();
        let out = generate_mapper("Cliente", Some(&schema));
        let (to_row, to_domain) = out.split_once("mapRowToDomain").unwrap();
        for p in schema.dto_properties() {
            let column = p.column_name();
            assert!(to_row.contains(&format!("\t\t{column}: ")), "row misses {column}");
            assert!(
                to_domain.contains(&format!("\t{}: ", p.name)) && to_domain.contains(&format!("row.{column}")),
                "domain misses {}",
                p.name
            );
        }
    }

    #[test]
    fn fallback_maps_generic_fields() {
        let out = generate_mapper("Produto", None);
        assert!(out.contains("nome: dto.nome,"));
        assert!(out.contains("ativo: dto.ativo ?? true,"));
        assert!(out.contains("updatedAt: new Date(row.updated_at),"));
        assert!(out.contains("from \"./Produto.type\";"));
    }
}
