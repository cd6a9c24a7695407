use std::f64::consts::{E, PI, TAU};

use crate::interpreter::evaluator::{
    function::{builtin, factorial, min_max},
    operation::Operation,
    scope::Bindings,
};

/// Canonical names of the built-in operations the analyzer emits for
/// operator symbols.
pub mod names {
    pub const SUM: &str = "sum";
    pub const SUB: &str = "sub";
    pub const MUL: &str = "mul";
    pub const DIV: &str = "div";
    pub const POW: &str = "pow";
    pub const FAC: &str = "fac";
    pub const NEG: &str = "neg";
    pub const SQRT: &str = "sqrt";
}

/// Defines built-in operations by generating a registration function and a
/// name list.
///
/// Each entry provides:
/// - a string name,
/// - the [`Operation`] constructor to wrap it with,
/// - the function implementing it.
///
/// The macro produces:
/// - `BUILTIN_FUNCTIONS` (public list of built-in names),
/// - `register_operations` (binds every entry into a scope).
macro_rules! builtin_functions {
    (
        $(
            $name:expr => $kind:ident($func:expr)
        ),* $(,)?
    ) => {
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        fn register_operations(bindings: &mut Bindings) {
            $(
                bindings.insert_operation($name, Operation::$kind($func));
            )*
        }
    };
}

builtin_functions! {
    names::SUM  => variadic(builtin::sum),
    names::SUB  => binary(builtin::sub),
    names::MUL  => variadic(builtin::mul),
    names::DIV  => binary(builtin::div),
    names::POW  => binary(f64::powf),
    names::FAC  => checked_unary(factorial::factorial),
    names::NEG  => unary(builtin::neg),
    names::SQRT => unary(f64::sqrt),
    "sin"       => unary(f64::sin),
    "cos"       => unary(f64::cos),
    "tn"        => unary(f64::tan),
    "ctg"       => unary(builtin::ctg),
    "abs"       => unary(f64::abs),
    "min"       => checked_variadic(|args| min_max::min_max("min", args)),
    "max"       => checked_variadic(|args| min_max::min_max("max", args)),
    "avg"       => checked_variadic(min_max::avg),
}

/// Constants bound in every root scope.
pub const BUILTIN_CONSTANTS: &[(&str, f64)] = &[("e", E), ("pi", PI), ("tau", TAU)];

/// Binds every built-in operation and constant into `bindings`.
pub(crate) fn register_builtins(bindings: &mut Bindings) {
    register_operations(bindings);
    for &(name, value) in BUILTIN_CONSTANTS {
        bindings.insert_value(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_builtin_is_registered() {
        let mut bindings = Bindings::default();
        register_builtins(&mut bindings);

        for name in BUILTIN_FUNCTIONS {
            assert!(bindings.operation(name).is_some(), "missing {name}");
        }
        assert_eq!(bindings.value("tau"), Some(TAU));
    }

    #[test]
    fn operator_names_have_expected_shapes() {
        let mut bindings = Bindings::default();
        register_builtins(&mut bindings);

        assert!(matches!(bindings.operation(names::SUM), Some(Operation::Variadic(_))));
        assert!(matches!(bindings.operation(names::SUB), Some(Operation::Binary(_))));
        assert!(matches!(bindings.operation(names::FAC), Some(Operation::Unary(_))));
    }
}
