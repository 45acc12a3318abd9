//! TypeScript / JavaScript import extractor using Tree-sitter.

use tree_sitter::{Language, Node, Parser};

use crate::extractor::{ExtractError, FileAnalysis, ImportInfo, LanguageExtractor};

/// Extracts `import ... from '...'` declarations from TypeScript or TSX.
///
/// The TypeScript grammar also covers plain JavaScript; JSX needs the TSX
/// grammar, so `.jsx` files go through [`TypeScriptExtractor::tsx`].
pub struct TypeScriptExtractor {
    language: Language,
    language_id: &'static str,
    extensions: &'static [&'static str],
}

impl TypeScriptExtractor {
    /// Extractor for `.ts`, `.mts`, `.cts`, `.js`, `.mjs` and `.cjs` files.
    #[must_use]
    pub fn typescript() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            language_id: "typescript",
            extensions: &[".ts", ".mts", ".cts", ".js", ".mjs", ".cjs"],
        }
    }

    /// Extractor for `.tsx` and `.jsx` files.
    #[must_use]
    pub fn tsx() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TSX.into(),
            language_id: "tsx",
            extensions: &[".tsx", ".jsx"],
        }
    }

    /// Specifier literal of an `import_statement`, if it has one.
    fn extract_import(node: &Node<'_>, src: &str) -> Option<ImportInfo> {
        let literal = node.child_by_field_name("source")?;
        let text = src.get(literal.start_byte()..literal.end_byte())?;
        let specifier = text
            .get(1..text.len().saturating_sub(1))
            .unwrap_or_default();
        let start = literal.start_position();

        Some(ImportInfo {
            line: start.row + 1,
            column: start.column + 1,
            offset: literal.start_byte(),
            length: literal.end_byte() - literal.start_byte(),
            specifier: specifier.to_owned(),
        })
    }
}

/// Both extractors, covering every supported extension.
#[must_use]
pub fn default_extractors() -> Vec<Box<dyn LanguageExtractor>> {
    vec![
        Box::new(TypeScriptExtractor::typescript()),
        Box::new(TypeScriptExtractor::tsx()),
    ]
}

impl LanguageExtractor for TypeScriptExtractor {
    fn language_id(&self) -> &'static str {
        self.language_id
    }

    fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    fn analyze(&self, source: &str) -> Result<FileAnalysis, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::Language {
                language: self.language_id,
                message: e.to_string(),
            })?;

        let tree = parser.parse(source, None).ok_or(ExtractError::Parse {
            language: self.language_id,
        })?;
        let root = tree.root_node();

        let mut result = FileAnalysis {
            has_syntax_errors: root.has_error(),
            ..FileAnalysis::default()
        };

        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            if node.kind() == "import_statement" {
                if let Some(import) = Self::extract_import(&node, source) {
                    result.imports.push(import);
                }
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imports(extractor: &TypeScriptExtractor, src: &str) -> Vec<ImportInfo> {
        extractor.analyze(src).expect("analyze failed").imports
    }

    #[test]
    fn extracts_named_and_default_imports() {
        let src = "import React from 'react';\nimport { Article } from \"entities/Article\";\n";
        let found = imports(&TypeScriptExtractor::typescript(), src);
        let specs: Vec<&str> = found.iter().map(|i| i.specifier.as_str()).collect();
        assert_eq!(specs, ["react", "entities/Article"]);
    }

    #[test]
    fn records_literal_span_with_quotes() {
        let src = "import { a } from 'entities/Article/model';";
        let found = imports(&TypeScriptExtractor::typescript(), src);
        assert_eq!(found.len(), 1);
        let import = &found[0];
        assert_eq!(import.line, 1);
        assert_eq!(import.column, 19);
        assert_eq!(
            &src[import.offset..import.offset + import.length],
            "'entities/Article/model'"
        );
    }

    #[test]
    fn extracts_side_effect_and_type_imports() {
        let src = "import './styles.scss';\nimport type { User } from 'entities/User/model/types';\n";
        let found = imports(&TypeScriptExtractor::typescript(), src);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].specifier, "./styles.scss");
        assert_eq!(found[1].specifier, "entities/User/model/types");
        assert_eq!(found[1].line, 2);
    }

    #[test]
    fn ignores_exports_and_dynamic_imports() {
        let src = "export { a } from 'entities/A/model';\nconst b = import('entities/B/ui');\n";
        assert!(imports(&TypeScriptExtractor::typescript(), src).is_empty());
    }

    #[test]
    fn tsx_handles_jsx() {
        let src = "import { Button } from 'shared/ui';\nexport const A = () => <Button />;\n";
        let analysis = TypeScriptExtractor::tsx().analyze(src).expect("analyze failed");
        assert_eq!(analysis.imports.len(), 1);
        assert!(!analysis.has_syntax_errors);
    }

    #[test]
    fn empty_source() {
        assert!(imports(&TypeScriptExtractor::typescript(), "").is_empty());
    }

    #[test]
    fn extensions_do_not_overlap() {
        let ts = TypeScriptExtractor::typescript();
        let tsx = TypeScriptExtractor::tsx();
        assert!(ts.extensions().iter().all(|e| !tsx.extensions().contains(e)));
        assert_eq!(default_extractors().len(), 2);
    }
}
