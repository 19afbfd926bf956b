//! Declaration emission.
//!
//! Drives the full pipeline for one IR document: collect, sort, assemble,
//! then render the ordered declarations into one source text. The whole run
//! is a pure function of the document and the generator configuration.

use crate::error::CycleDiagnostic;
use crate::ir::IrDocument;
use crate::naming::Naming;

use super::assemble::target_expr;
use super::collect::collect_targets;
use super::formatter::format_source;
use super::sort::sort_targets;

/// Options controlling emitted text. Nothing here alters collection or
/// ordering, only surface shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Emit a `type X = infer<...>` alias next to each schema constant.
    pub generate_types: bool,

    /// Emit the import preamble and file header comment.
    pub generate_header: bool,

    /// Indentation unit for object bodies.
    pub indent: String,

    /// Identifier naming context.
    pub naming: Naming,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_types: true,
            generate_header: true,
            indent: "  ".to_string(),
            naming: Naming::default(),
        }
    }
}

impl GeneratorConfig {
    /// Toggle type-alias emission.
    pub fn with_types(mut self, generate_types: bool) -> Self {
        self.generate_types = generate_types;
        self
    }

    /// Toggle the header preamble.
    pub fn with_header(mut self, generate_header: bool) -> Self {
        self.generate_header = generate_header;
        self
    }

    /// Set the naming context.
    pub fn with_naming(mut self, naming: Naming) -> Self {
        self.naming = naming;
        self
    }
}

/// One emitted declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Raw IR target name.
    pub name: String,

    /// Emitted schema constant identifier.
    pub schema_name: String,

    /// Full declaration text, without surrounding blank lines.
    pub code: String,
}

/// Result of compiling one document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOutput {
    /// Declarations in emission order.
    pub declarations: Vec<Declaration>,

    /// Set when the sorter hit an unresolvable cycle. The declarations are
    /// still complete; the stuck subset is merely unordered at the end.
    pub cycle: Option<CycleDiagnostic>,
}

impl CompileOutput {
    /// Schema constant identifiers in emission order.
    pub fn schema_names(&self) -> Vec<&str> {
        self.declarations
            .iter()
            .map(|d| d.schema_name.as_str())
            .collect()
    }
}

/// Compile an IR document into ordered declarations.
pub fn compile(doc: &IrDocument, config: &GeneratorConfig) -> CompileOutput {
    let outcome = sort_targets(collect_targets(doc));

    let declarations = outcome
        .ordered
        .iter()
        .map(|target| {
            let schema_name = config.naming.schema_identifier(&target.name);
            let expr = target_expr(target, &config.naming, &config.indent);
            let mut code = format!("export const {} = {};", schema_name, expr);
            if config.generate_types {
                code.push_str(&format!(
                    "\n\nexport type {} = z.infer<typeof {}>;",
                    config.naming.type_identifier(&target.name),
                    schema_name
                ));
            }
            Declaration {
                name: target.name.clone(),
                schema_name,
                code,
            }
        })
        .collect();

    CompileOutput {
        declarations,
        cycle: outcome.cycle,
    }
}

/// Render compiled declarations into one source text.
pub fn render(output: &CompileOutput, config: &GeneratorConfig) -> String {
    let mut text = String::new();

    if config.generate_header {
        text.push_str("// Generated schemas. Do not edit by hand.\n\n");
        text.push_str("import { z } from 'zod';\n\n");
    }

    let blocks: Vec<&str> = output.declarations.iter().map(|d| d.code.as_str()).collect();
    text.push_str(&blocks.join("\n\n"));
    text.push('\n');

    format_source(&text)
}

/// Compile and render in one step.
pub fn generate(doc: &IrDocument, config: &GeneratorConfig) -> (String, Option<CycleDiagnostic>) {
    let output = compile(doc, config);
    (render(&output, config), output.cycle)
}
