use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Expression, batch::BatchError, interpreter::evaluator::operation::Definition};

/// A batch of expressions sharing a set of definitions.
///
/// ```json
/// {
///   "define": [ { "name": "a", "value": 3 } ],
///   "expressions": [ { "expression": "a + 1" } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Document {
    /// Definitions applied to every expression.
    #[serde(default, rename = "define")]
    pub definitions: Vec<DefinitionEntry>,
    /// The expressions to evaluate, in order.
    pub expressions: Vec<ExpressionEntry>,
}

/// One expression of a batch with its own definitions.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExpressionEntry {
    /// The expression text.
    pub expression:  String,
    /// Definitions applied after the shared ones, shadowing them.
    #[serde(default, rename = "define")]
    pub definitions: Vec<DefinitionEntry>,
}

/// A name bound either to a constant or to a sub-expression.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DefinitionEntry {
    pub name:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value:    Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
}

impl DefinitionEntry {
    /// Maps the entry onto the binding API. A `value` wins over a `function`.
    ///
    /// # Errors
    /// `InvalidDefinition` when neither is given.
    pub fn to_definition(&self) -> Result<Definition, BatchError> {
        match (self.value, &self.function) {
            (Some(value), _) => Ok(Definition::from(value)),
            (None, Some(function)) => Ok(Definition::from(function.as_str())),
            (None, None) => Err(BatchError::InvalidDefinition { name: self.name.clone() }),
        }
    }
}

impl Document {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    /// `Json` when the text is not a valid document.
    pub fn from_json(text: &str) -> Result<Self, BatchError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a document file.
    ///
    /// # Errors
    /// `Io` when the file cannot be read, `Json` when it is not a valid
    /// document.
    pub fn load(path: &Path) -> Result<Self, BatchError> {
        let text = fs::read_to_string(path).map_err(|source| BatchError::Io { path: path.to_path_buf(),
                                                                               source })?;
        Self::from_json(&text)
    }

    /// Builds one root [`Expression`] per entry with the shared and then the
    /// entry's own definitions applied.
    ///
    /// # Errors
    /// `InvalidDefinition` for any entry with neither a value nor a function.
    pub fn build(&self) -> Result<Vec<Expression<'static>>, BatchError> {
        self.expressions
            .iter()
            .map(|entry| {
                let mut expression = Expression::new(entry.expression.as_str());
                for definition in self.definitions.iter().chain(&entry.definitions) {
                    expression.define(definition.name.as_str(), definition.to_definition()?);
                }
                Ok(expression)
            })
            .collect()
    }
}
