use std::fmt;

use crate::{
    batch::{BatchError, document::Document},
    error::Error,
};

/// The result of one batch entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The expression text as given in the document.
    pub expression: String,
    /// Its value, or the error that stopped its evaluation.
    pub result:     Result<f64, Error>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(value) => write!(f, "{} = {value}", self.expression),
            Err(e) => write!(f, "{} = error: {e}", self.expression),
        }
    }
}

impl Document {
    /// Evaluates every expression of the document without positional
    /// arguments.
    ///
    /// A failing expression does not stop the batch; its error is recorded in
    /// its [`Outcome`].
    ///
    /// # Errors
    /// Only document-level errors: a definition with neither a value nor a
    /// function.
    ///
    /// # Example
    /// ```
    /// use reckon::batch::document::Document;
    ///
    /// let document = Document::from_json(r#"{
    ///     "define": [ { "name": "sq", "function": "$0 ^ 2" } ],
    ///     "expressions": [ { "expression": "sq(3)" }, { "expression": "sq(" } ]
    /// }"#).unwrap();
    ///
    /// let outcomes = document.run().unwrap();
    /// assert_eq!(outcomes[0].result, Ok(9.0));
    /// assert!(outcomes[1].result.is_err());
    /// ```
    #[tracing::instrument(skip(self), fields(expressions = self.expressions.len()))]
    pub fn run(&self) -> Result<Vec<Outcome>, BatchError> {
        let outcomes = self.build()?
                           .iter()
                           .map(|expression| {
                               let result = expression.evaluate(&[]);
                               if let Err(e) = &result {
                                   tracing::debug!(expression = expression.source(), error = %e, "batch entry failed");
                               }
                               Outcome { expression: expression.source().to_string(),
                                         result }
                           })
                           .collect::<Vec<_>>();

        tracing::debug!(failed = outcomes.iter().filter(|o| o.result.is_err()).count(), "batch finished");
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn failures_are_reported_per_entry() {
        let document = Document::from_json(
                                           r#"{ "expressions": [
                { "expression": "1 + 1" },
                { "expression": "nope" },
                { "expression": "2 * 3" }
            ] }"#,
        ).unwrap();

        let outcomes = document.run().unwrap();
        assert_eq!(outcomes[0].result, Ok(2.0));
        assert_eq!(outcomes[1].result.as_ref().unwrap_err().kind(), ErrorKind::UnknownName);
        assert_eq!(outcomes[2].result, Ok(6.0));
    }

    #[test]
    fn self_calling_definition_fails_only_its_entry() {
        let document = Document::from_json(
                                           r#"{
                "define": [ { "name": "f", "function": "f($0)" } ],
                "expressions": [ { "expression": "1+1" }, { "expression": "f(1)" } ]
            }"#,
        ).unwrap();

        let outcomes = document.run().unwrap();
        assert_eq!(outcomes[0].result, Ok(2.0));
        assert_eq!(outcomes[1].result.as_ref().unwrap_err().kind(), ErrorKind::Structural);
    }

    #[test]
    fn outcome_display() {
        let outcome = Outcome { expression: "5!".to_string(),
                                result:     Ok(120.0), };
        assert_eq!(outcome.to_string(), "5! = 120");
    }
}
