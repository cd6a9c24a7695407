use crate::interpreter::evaluator::function::core::names;

/// Binding strength of a pending operation on the analyzer's stack.
///
/// Declaration order is the comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// `+` and binary `-`.
    Low,
    /// `*` and `/`.
    Medium,
    /// Multiplication synthesized between juxtaposed values, such as `2x`.
    Implicit,
    /// `^`.
    High,
    /// Postfix `!` and unary `-`.
    Highest,
    /// Prefix `√`.
    SquareRoot,
    /// Function calls and bare `(` scopes. Never popped by an operator.
    Barrier,
}

/// An operation waiting on the analyzer's stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationInfo {
    pub priority:                Priority,
    pub name:                    String,
    pub argument_count:          usize,
    pub is_argument_count_fixed: bool,
}

/// Name of the pseudo-operation pushed for a bare `(`. It is never emitted.
pub const SCOPE: &str = "scope";

impl OperationInfo {
    fn fixed(priority: Priority, name: &str, argument_count: usize) -> Self {
        Self { priority,
               name: name.to_string(),
               argument_count,
               is_argument_count_fixed: true }
    }

    /// Looks up an operator symbol (or `(`) and returns its registered
    /// priority, canonical name and argument count.
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn operator(symbol: &str) -> Option<Self> {
        let operation = match symbol {
            "+" => Self::fixed(Priority::Low, names::SUM, 2),
            "-" => Self::fixed(Priority::Low, names::SUB, 2),
            "*" => Self::fixed(Priority::Medium, names::MUL, 2),
            "/" => Self::fixed(Priority::Medium, names::DIV, 2),
            "^" => Self::fixed(Priority::High, names::POW, 2),
            "!" => Self::fixed(Priority::Highest, names::FAC, 1),
            "√" => Self::fixed(Priority::SquareRoot, names::SQRT, 1),
            "(" => Self::fixed(Priority::Barrier, SCOPE, 1),
            _ => return None,
        };
        Some(operation)
    }

    /// The unary minus, pushed when `-` follows no value.
    #[must_use]
    pub fn negative() -> Self {
        Self::fixed(Priority::Highest, names::NEG, 1)
    }

    /// The multiplication inserted between two juxtaposed values.
    #[must_use]
    pub fn implicit_multiplication() -> Self {
        Self::fixed(Priority::Implicit, names::MUL, 2)
    }

    /// A call whose argument count grows with every separator.
    #[must_use]
    pub fn function(name: &str) -> Self {
        Self { priority:                Priority::Barrier,
               name:                    name.to_string(),
               argument_count:          0,
               is_argument_count_fixed: false, }
    }

    #[must_use]
    pub fn is_barrier(&self) -> bool {
        self.priority == Priority::Barrier
    }

    /// `true` for a bare `(` scope, which yields its single value unchanged.
    #[must_use]
    pub fn is_scope(&self) -> bool {
        self.is_barrier() && self.is_argument_count_fixed
    }

    /// Prefix operators (`√`, `(`) expect their operand on the right.
    #[must_use]
    pub fn is_prefix(&self) -> bool {
        self.priority > Priority::Highest
    }

    /// Postfix operators (`!`) complete the value on their left.
    #[must_use]
    pub fn is_postfix(&self) -> bool {
        self.name == names::FAC
    }

    /// Counts one more argument of a variadic call. Fixed counts stay as they
    /// are.
    pub fn add_argument(&mut self) {
        if !self.is_argument_count_fixed {
            self.argument_count += 1;
        }
    }
}
