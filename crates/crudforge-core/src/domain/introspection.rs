//! Interface declaration parser.
//!
//! Turns TypeScript source text into a minimal declaration model: the name
//! of each `interface` and its flat list of property members. The source is
//! parsed with `oxc_parser`, so anything valid TypeScript (regex literals,
//! template strings, decorators) around the interfaces is handled by a real
//! tokenizer. Only what the generators need is lifted out of the AST:
//!
//! - property members with or without a type annotation
//! - `?` optionality
//! - quoted member names
//!
//! Method signatures, index signatures, call/construct signatures, computed
//! keys and heritage clauses are skipped. Type expressions are kept as raw
//! source text with whitespace collapsed.

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    Declaration, ExportDefaultDeclarationKind, Statement, TSInterfaceDeclaration, TSSignature,
};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use tracing::warn;

use crate::domain::entities::schema::{PropertyInfo, is_array_type};

/// Type text recorded for members without an annotation.
pub const IMPLICIT_TYPE: &str = "any";

/// One parsed `interface` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub properties: Vec<PropertyInfo>,
}

/// Find the first declaration whose name matches a candidate.
///
/// Candidates are tried in order, so `["Cliente", "ICliente"]` prefers a
/// plain `Cliente` interface when a file declares both.
pub fn find_interface(source: &str, candidates: &[String]) -> Option<InterfaceDecl> {
    let decls = parse_interfaces(source);
    candidates
        .iter()
        .find_map(|wanted| decls.iter().find(|d| &d.name == wanted))
        .cloned()
}

/// Parse every top-level interface declaration in a source file.
///
/// A file with syntax errors yields no declarations.
pub fn parse_interfaces(source: &str) -> Vec<InterfaceDecl> {
    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, SourceType::ts()).parse();

    if parsed.panicked || !parsed.errors.is_empty() {
        warn!(errors = parsed.errors.len(), "TypeScript source did not parse");
        return Vec::new();
    }

    parsed
        .program
        .body
        .iter()
        .filter_map(interface_of)
        .map(|decl| lower_interface(decl, source))
        .collect()
}

fn interface_of<'s, 'a>(stmt: &'s Statement<'a>) -> Option<&'s TSInterfaceDeclaration<'a>> {
    match stmt {
        Statement::TSInterfaceDeclaration(decl) => Some(decl),
        Statement::ExportNamedDeclaration(export) => match &export.declaration {
            Some(Declaration::TSInterfaceDeclaration(decl)) => Some(decl),
            _ => None,
        },
        Statement::ExportDefaultDeclaration(export) => match &export.declaration {
            ExportDefaultDeclarationKind::TSInterfaceDeclaration(decl) => Some(decl),
            _ => None,
        },
        _ => None,
    }
}

fn lower_interface(decl: &TSInterfaceDeclaration<'_>, source: &str) -> InterfaceDecl {
    let properties = decl
        .body
        .body
        .iter()
        .filter_map(|member| match member {
            TSSignature::TSPropertySignature(prop) if !prop.computed => {
                let name = prop.key.static_name()?.into_owned();
                let declared_type = prop
                    .type_annotation
                    .as_ref()
                    .map(|ann| normalize_type(ann.type_annotation.span().source_text(source)))
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| IMPLICIT_TYPE.to_string());

                Some(PropertyInfo {
                    name,
                    is_array: is_array_type(&declared_type),
                    declared_type,
                    is_optional: prop.optional,
                })
            }
            _ => None,
        })
        .collect();

    InterfaceDecl {
        name: decl.id.name.to_string(),
        properties,
    }
}

/// Collapse whitespace and drop a leading union bar.
fn normalize_type(annotation: &str) -> String {
    let collapsed = annotation.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_start_matches('|').trim().to_string()
}
