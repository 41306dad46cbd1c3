//! The capability shared by expressions and equations.

use crate::canonicalize;
use crate::error::Error;
use mathcheck_parser::ast::{Entity, EntityKind, Equation, Expr};

/// Anything the tutoring layer can display, classify, and compare: an expression, an equation,
/// or an [`Entity`] holding either.
pub trait MathEntity {
    /// A one-way textual projection; not a parseable wire format.
    fn string_value(&self) -> String;

    fn entity_kind(&self) -> EntityKind;

    fn to_entity(&self) -> Entity;

    /// True if both denote the same mathematical object, compared by normal form. Entities of
    /// different kinds are never equivalent.
    fn is_equivalent(&self, other: &dyn MathEntity) -> Result<bool, Error> {
        canonicalize::is_equivalent(&self.to_entity(), &other.to_entity())
    }
}

impl MathEntity for Expr {
    fn string_value(&self) -> String {
        self.to_string()
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Expression
    }

    fn to_entity(&self) -> Entity {
        Entity::Expression(self.clone())
    }
}

impl MathEntity for Equation {
    fn string_value(&self) -> String {
        self.to_string()
    }

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Equation
    }

    fn to_entity(&self) -> Entity {
        Entity::Equation(self.clone())
    }
}

impl MathEntity for Entity {
    fn string_value(&self) -> String {
        self.to_string()
    }

    fn entity_kind(&self) -> EntityKind {
        self.kind()
    }

    fn to_entity(&self) -> Entity {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathcheck_parser::parser::Parser;

    #[test]
    fn equivalence_across_entity_types() {
        let expr = Parser::new("2x + 3x").parse_expression().unwrap();
        let other = Parser::new("5x").parse_expression().unwrap();
        assert!(expr.is_equivalent(&other).unwrap());

        let eq = Parser::new("2x = 6").parse_equation().unwrap();
        let same = Parser::new("x = 3").parse_equation().unwrap();
        assert!(eq.is_equivalent(&same).unwrap());

        // an expression is never equivalent to an equation
        assert!(!expr.is_equivalent(&eq).unwrap());
    }

    #[test]
    fn string_values_round_trip_through_the_parser() {
        let eq = Parser::new("x = 2y + 1").parse_equation().unwrap();
        let reparsed = Parser::new(&eq.string_value()).parse_equation().unwrap();
        assert!(eq.is_equivalent(&reparsed).unwrap());
    }
}
