//! Loading source files through an external TypeScript parser.
//!
//! tsa does not parse TypeScript itself. The host supplies a
//! [`TypeScriptParser`] that turns source text into the compiler's untyped
//! tree, and [`SourceLoader`] materializes that tree into a [`SourceFile`].

use crate::config::TsaConfig;
use anyhow::{Context, Result};
use tracing::{debug, info_span};
use tsa_ast::{MaterializeOptions, SourceFile, materialize_with};
use tsa_common::DynamicNode;

/// The parser seam.
pub trait TypeScriptParser {
    /// Parse `source_text` into the compiler's dynamic tree for `file_name`.
    fn parse(&self, source_text: &str, file_name: &str) -> Result<DynamicNode>;
}

impl<P: TypeScriptParser + ?Sized> TypeScriptParser for &P {
    fn parse(&self, source_text: &str, file_name: &str) -> Result<DynamicNode> {
        (**self).parse(source_text, file_name)
    }
}

pub struct SourceLoader<P> {
    parser: P,
    options: MaterializeOptions,
    eager_imports: bool,
}

impl<P: TypeScriptParser> SourceLoader<P> {
    pub fn new(parser: P, config: &TsaConfig) -> SourceLoader<P> {
        SourceLoader {
            parser,
            options: config.materialize_options(),
            eager_imports: config.eager_imports(),
        }
    }

    pub fn options(&self) -> &MaterializeOptions {
        &self.options
    }

    /// Parse and materialize one file.
    ///
    /// Decode failures keep their [`tsa_ast::DecodeError`] as the root cause,
    /// so callers can `downcast_ref` it out of the returned error.
    pub fn load(&self, source_text: &str, file_name: &str) -> Result<SourceFile> {
        let _span = info_span!("load", file = file_name).entered();

        let tree = self
            .parser
            .parse(source_text, file_name)
            .with_context(|| format!("failed to parse {file_name}"))?;
        let mut file = self.materialize(&tree, file_name)?;

        // Parsers that omit `fileName` still get one.
        if file.file_name.is_empty() {
            file.file_name = file_name.to_string();
        }
        Ok(file)
    }

    /// Materialize a JSON dump of a parsed source file.
    pub fn load_json_dump(&self, json: &str) -> Result<SourceFile> {
        let tree = DynamicNode::from_json_str(json).context("failed to read JSON tree dump")?;
        self.materialize(&tree, "<json dump>")
    }

    fn materialize(&self, tree: &DynamicNode, file_name: &str) -> Result<SourceFile> {
        let file: SourceFile = materialize_with(tree, &self.options)
            .with_context(|| format!("failed to materialize {file_name}"))?;

        debug!(
            statements = file.statements.len(),
            eager_imports = self.eager_imports,
            "materialized source file"
        );
        if self.eager_imports {
            file.resolve_imports();
        }
        Ok(file)
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
