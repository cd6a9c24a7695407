/// The analyzer module turns tokens into a postfix unit sequence.
///
/// The analyzer consumes the token stream once and orders operands and
/// operations for single-pass stack evaluation, using an operator-precedence
/// algorithm.
///
/// # Responsibilities
/// - Resolves operator precedence and left associativity.
/// - Tells unary minus apart from subtraction.
/// - Inserts multiplication between juxtaposed values, such as `2x` or
///   `2(1+2)`.
/// - Counts the arguments of every function call.
/// - Reports structural errors: incomplete, empty or unbalanced expressions.
pub mod analyzer;
/// The evaluator module runs analyzed expressions.
///
/// The evaluator owns the scopes expressions are evaluated in, resolves names
/// through scope chains, and dispatches calls to operations by arity.
///
/// # Responsibilities
/// - Runs the unit sequence on a value stack.
/// - Binds constants, functions and sub-expressions to names.
/// - Reports unknown names, argument count mismatches and domain errors.
pub mod evaluator;
/// The lexer module tokenizes expression text for further analysis.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numbers, identifiers, function names, positional arguments,
/// operators, brackets and separators. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   position.
/// - Reports lexical errors for unknown symbols and malformed numbers.
pub mod lexer;
