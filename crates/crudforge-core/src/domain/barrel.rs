//! Route barrel document model.
//!
//! The barrel is the one shared file that aggregates every module's route
//! map. It is read as a small structured document:
//!
//! ```text
//! import { healthRoutes } from "../../modules/Health";   <- import statements
//! import { prefixRoutes, type RouteMap } from "../../utils/http";
//!
//! const internalRoutes: RouteMap = {                     <- aggregate literal
//!     ...healthRoutes,
//! };
//! ```
//!
//! Registering a module adds one import after the last import statement and
//! one spread entry right after the aggregate's opening brace. Anything the
//! model does not recognise is left untouched; a missing aggregate yields
//! [`BarrelPatch::MarkerMissing`] and no output. The file's line ending
//! (`\n` or `\r\n`) is detected once and reused for every line written back.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::descriptor::DomainDescriptor;

/// Relative location of the barrel inside a backend project.
pub const BARREL_PATH: &str = "src/infra/Routes/routesBarrel.ts";

static IMPORT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s").expect("valid import pattern"));

static IMPORT_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\bfrom\s*["'][^"']*["']|^import\s+["'][^"']*["'])\s*;?\s*$"#)
        .expect("valid import terminator pattern")
});

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_$][A-Za-z0-9_$]*").expect("valid identifier pattern"));

static AGGREGATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+internalRoutes\s*:\s*RouteMap\s*=\s*\{").expect("valid aggregate pattern")
});

/// Result of registering a route map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarrelPatch {
    /// New file content to write.
    Patched(String),
    /// The route symbol is already referenced. Nothing to do.
    AlreadyRegistered,
    /// No aggregate object literal was found. Nothing is written.
    MarkerMissing,
}

#[derive(Debug, Clone)]
pub struct RouteBarrel {
    lines: Vec<String>,
    /// Index of the last line of each import statement.
    import_lines: Vec<usize>,
    /// Line and byte offset just past the aggregate's `{`.
    aggregate: Option<(usize, usize)>,
    line_ending: &'static str,
}

impl RouteBarrel {
    pub fn parse(source: &str) -> Self {
        let line_ending = if source.contains("\r\n") { "\r\n" } else { "\n" };
        let lines: Vec<String> = source
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        let mut import_lines = Vec::new();
        let mut aggregate = None;
        let mut open_import = false;

        for (i, line) in lines.iter().enumerate() {
            if open_import || IMPORT_START.is_match(line) {
                open_import = !IMPORT_END.is_match(line);
                if !open_import {
                    import_lines.push(i);
                }
                continue;
            }
            if aggregate.is_none() {
                if let Some(m) = AGGREGATE.find(line) {
                    aggregate = Some((i, m.end()));
                }
            }
        }

        Self {
            lines,
            import_lines,
            aggregate,
            line_ending,
        }
    }

    /// Whether `symbol` appears as a whole identifier anywhere in the file.
    pub fn references(&self, symbol: &str) -> bool {
        self.lines
            .iter()
            .any(|l| IDENTIFIER.find_iter(l).any(|m| m.as_str() == symbol))
    }

    pub fn has_aggregate(&self) -> bool {
        self.aggregate.is_some()
    }

    /// Add the import and spread entry for a domain's route map.
    pub fn register(&self, domain: &DomainDescriptor) -> BarrelPatch {
        let symbol = domain.routes_symbol();
        if self.references(&symbol) {
            return BarrelPatch::AlreadyRegistered;
        }
        let Some((agg_line, agg_col)) = self.aggregate else {
            return BarrelPatch::MarkerMissing;
        };

        let import = format!(
            "import {{ {symbol} }} from \"../../modules/{}\";",
            domain.pascal()
        );
        let import_at = self.import_lines.last().map_or(0, |last| last + 1);

        let mut lines = self.lines.clone();

        // Later insertion first so the earlier index stays valid.
        let insert_entry = |lines: &mut Vec<String>| {
            let (head, tail) = lines[agg_line].split_at(agg_col);
            let (head, tail) = (head.to_string(), tail.to_string());
            let mut replacement = vec![head, format!("\t...{symbol},")];
            if !tail.trim().is_empty() {
                replacement.push(tail);
            }
            lines.splice(agg_line..=agg_line, replacement);
        };

        if agg_line >= import_at {
            insert_entry(&mut lines);
            lines.insert(import_at, import);
        } else {
            lines.insert(import_at, import);
            insert_entry(&mut lines);
        }

        BarrelPatch::Patched(lines.join(self.line_ending))
    }
}
