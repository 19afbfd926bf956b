//! Schema generation driver.
//!
//! Thin bridge between the CLI configuration and the core compiler: loads
//! nothing and writes nothing, just turns an IR document into rendered
//! output plus per-schema metadata for reporting.

use crate::config::Config;
use zodgen::{compile, render, CycleDiagnostic, IrDocument};

/// Generated output for one run.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Complete TypeScript content.
    pub content: String,

    /// Individual generated schemas, in emission order.
    pub schemas: Vec<GeneratedSchema>,

    /// Cycle diagnostic, when dependency ordering was incomplete.
    pub cycle: Option<CycleDiagnostic>,
}

/// A single generated schema.
#[derive(Debug, Clone)]
pub struct GeneratedSchema {
    /// Raw IR target name.
    pub name: String,

    /// Schema constant name (e.g., "UserSchema").
    pub schema_name: String,
}

/// Schema generator driving the core compiler.
pub struct SchemaGenerator {
    config: Config,
}

impl SchemaGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate TypeScript Zod schemas from an IR document.
    pub fn generate(&self, doc: &IrDocument) -> GeneratedOutput {
        let generator_config = self.config.generator_config();
        let output = compile(doc, &generator_config);
        let content = render(&output, &generator_config);

        let schemas = output
            .declarations
            .iter()
            .map(|d| GeneratedSchema {
                name: d.name.clone(),
                schema_name: d.schema_name.clone(),
            })
            .collect();

        GeneratedOutput {
            content,
            schemas,
            cycle: output.cycle,
        }
    }
}
