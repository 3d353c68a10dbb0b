//! `CREATE TABLE` statement with row-level security.
//!
//! Columns are derived from the schema, deduplicated by name. The primary
//! key and the two audit columns are guaranteed exactly once each.

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::schema::{AUDIT_COLUMNS, IDENTIFIER, PropertyInfo, PropertySchema};

pub const READ_POLICY: &str = "Allow read for authenticated users";

const AUDIT_CONSTRAINTS: &str = "NOT NULL DEFAULT now()";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlColumn {
    pub name: String,
    pub sql_type: &'static str,
    pub constraints: String,
}

impl SqlColumn {
    fn new(name: impl Into<String>, sql_type: &'static str, constraints: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type,
            constraints: constraints.into(),
        }
    }

    fn primary_key() -> Self {
        Self::new(IDENTIFIER, "UUID", "PRIMARY KEY DEFAULT gen_random_uuid()")
    }

    fn audit(name: &str) -> Self {
        Self::new(name, "TIMESTAMPTZ", AUDIT_CONSTRAINTS)
    }

    fn from_property(p: &PropertyInfo) -> Self {
        let name = p.column_name();
        if name == IDENTIFIER {
            return Self::primary_key();
        }
        if AUDIT_COLUMNS.contains(&name.as_str()) {
            return Self::audit(&name);
        }
        let constraints = if p.is_optional { "" } else { "NOT NULL" };
        Self::new(name, p.bucket().sql_type(), constraints)
    }
}

impl fmt::Display for SqlColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} {}", self.name, self.sql_type)?;
        if !self.constraints.is_empty() {
            write!(f, " {}", self.constraints)?;
        }
        Ok(())
    }
}

/// Column list for a table, before rendering.
pub fn table_columns(schema: Option<&PropertySchema>) -> Vec<SqlColumn> {
    let mut columns = match schema {
        Some(schema) => {
            let mut seen = HashSet::new();
            let mut columns = Vec::with_capacity(schema.len() + 3);
            if !schema.has_column(IDENTIFIER) {
                columns.push(SqlColumn::primary_key());
                seen.insert(IDENTIFIER.to_string());
            }
            for column in schema.iter().map(SqlColumn::from_property) {
                if seen.insert(column.name.clone()) {
                    columns.push(column);
                }
            }
            columns
        }
        None => vec![
            SqlColumn::primary_key(),
            SqlColumn::new("nome", "TEXT", "NOT NULL"),
            SqlColumn::new("ativo", "BOOLEAN", "DEFAULT true NOT NULL"),
        ],
    };

    for audit in AUDIT_COLUMNS {
        if !columns.iter().any(|c| c.name == audit) {
            columns.push(SqlColumn::audit(audit));
        }
    }
    columns
}

/// Full DDL script for `public.<table>`.
pub fn generate_sql(table: &str, schema: Option<&PropertySchema>) -> String {
    let columns = table_columns(schema)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "CREATE TABLE IF NOT EXISTS public.{table} (
{columns}
);

ALTER TABLE public.{table} ENABLE ROW LEVEL SECURITY;

DO $$
BEGIN
    IF NOT EXISTS (
        SELECT 1 FROM pg_policies WHERE tablename = '{table}' AND policyname = '{READ_POLICY}'
    ) THEN
        CREATE POLICY \"{READ_POLICY}\" ON public.{table}
        FOR SELECT USING (auth.role() = 'authenticated');
    END IF;
END
$$;
"
    )
}
