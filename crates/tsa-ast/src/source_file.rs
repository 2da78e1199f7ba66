//! SourceFile: the root record and its file-level queries.

use crate::node_access::HasKind;
use crate::nodes::{Member, Statement};
use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

ast_record! {
    /// A parsed file. Read-only once materialized, except for the import
    /// bindings, which are computed on first use and frozen afterwards.
    pub struct SourceFile {
        file_name: String = "fileName",
        statements: Vec<Statement> = "statements",
    }
    memo {
        resolved_imports: OnceCell<FxHashMap<String, String>>,
    }
}

/// Result of [`SourceFile::get_members_of_type`].
#[derive(Clone, Copy, Debug)]
pub enum TypeMembers<'a> {
    /// Members declared by a local interface, as written. Members inherited
    /// through `extends` are not included.
    Local(&'a [Member]),
    /// The type name is imported. Cross-module member resolution is not
    /// supported, so nothing is returned for it.
    Unresolved { module: &'a str },
    NotFound,
}

impl<'a> TypeMembers<'a> {
    pub fn members(&self) -> Option<&'a [Member]> {
        match *self {
            TypeMembers::Local(members) => Some(members),
            TypeMembers::Unresolved { .. } | TypeMembers::NotFound => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, TypeMembers::Unresolved { .. })
    }
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>, statements: Vec<Statement>) -> SourceFile {
        SourceFile {
            file_name: file_name.into(),
            statements,
            ..SourceFile::default()
        }
    }

    /// Module path a local name was imported from.
    ///
    /// Default and namespace imports bind their local name; named imports bind
    /// the specifier's local name (`Baz` in `{ Bar as Baz }`), never the
    /// original `propertyName`.
    pub fn get_import_path(&self, local_name: &str) -> Option<&str> {
        self.resolved_imports().get(local_name).map(String::as_str)
    }

    /// All import bindings of the file, resolved once on first access.
    pub fn resolved_imports(&self) -> &FxHashMap<String, String> {
        self.resolved_imports
            .get_or_init(|| self.collect_import_bindings())
    }

    /// Resolve import bindings now instead of on first query.
    pub fn resolve_imports(&self) {
        self.resolved_imports();
    }

    fn collect_import_bindings(&self) -> FxHashMap<String, String> {
        let mut bindings = FxHashMap::default();

        for statement in &self.statements {
            if !statement.is_import_declaration() {
                continue;
            }

            let Some(library) = statement.module_specifier.as_deref().map(|m| m.text.as_str())
            else {
                trace!(file = %self.file_name, "import declaration without module specifier");
                continue;
            };
            // `import "polyfill";` binds nothing.
            let Some(clause) = statement.import_clause.as_deref() else {
                continue;
            };

            let mut bind = |name: Option<&str>| {
                if let Some(name) = name {
                    bindings.insert(name.to_string(), library.to_string());
                }
            };

            bind(clause.name.as_deref().and_then(|n| n.escaped_text.as_deref()));

            if let Some(named) = clause.named_bindings.as_deref() {
                bind(named.name.as_deref().and_then(|n| n.escaped_text.as_deref()));
                for element in &named.elements {
                    bind(element.name.as_deref().and_then(|n| n.escaped_text.as_deref()));
                }
            }
        }

        debug!(file = %self.file_name, bindings = bindings.len(), "resolved imports");
        bindings
    }

    pub fn has_class_declaration(&self) -> bool {
        self.statements.iter().any(|s| s.is_class_declaration())
    }

    pub fn classes(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(|s| s.is_class_declaration())
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &Statement> {
        self.statements
            .iter()
            .filter(|s| s.is_interface_declaration())
    }

    /// First top-level interface declared with `name`.
    pub fn find_interface(&self, name: &str) -> Option<&Statement> {
        self.interfaces().find(|s| s.name_text() == Some(name))
    }

    /// Members of the type called `type_name`.
    ///
    /// Imported names are reported as [`TypeMembers::Unresolved`]. Local
    /// interfaces yield their own members only; `extends` clauses are not
    /// followed.
    pub fn get_members_of_type(&self, type_name: &str) -> TypeMembers<'_> {
        if let Some(module) = self.get_import_path(type_name) {
            debug!(type_name, module, "members of imported type are not resolved");
            return TypeMembers::Unresolved { module };
        }

        match self.find_interface(type_name) {
            Some(interface) => TypeMembers::Local(&interface.members),
            None => TypeMembers::NotFound,
        }
    }
}

#[cfg(test)]
#[path = "../tests/source_file_tests.rs"]
mod tests;
