//! Shunting-yard infix parser building [`Expr`]/[`Equation`] trees from a [`Symbol`] stream.
//!
//! The parser keeps an operand stack and an operator stack. Implicit multiplication is inserted
//! between adjacent operand-producing tokens (`2x`, `)(`, `2(`); a unary minus is distinguished
//! from binary subtraction by its left context (start of input, after an operator, after an open
//! parenthesis, or after a relation). All binary operators are left-associative; unary minus is
//! right-associative and binds tightest. Division binds tighter than multiplication, so `1/2x`
//! parses as `(1/2)*x`.
//!
//! Both [`Parser::new`] (raw text) and [`Parser::from_symbols`] (a pre-tokenized input list)
//! reduce to the same core algorithm over symbols.

pub mod error;

use crate::ast::{Associativity, Entity, Equation, ExpectedKind, Expr, OpKind, Relation};
use crate::tokenizer::{OpToken, Symbol, SymbolKind, Tokenizer};
use error::{Error, ParseErrorKind};
use std::ops::Range;

/// A parser for one input. Parsing does not consume the parser; each `parse_*` call runs the
/// algorithm over the same symbols again.
#[derive(Debug, Clone)]
pub struct Parser {
    symbols: Vec<Symbol>,

    /// One-past-the-end offset of the input, for errors that point at the end.
    end: usize,
}

impl Parser {
    /// Creates a parser by tokenizing the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            symbols: Tokenizer::new(source).collect(),
            end: source.len(),
        }
    }

    /// Creates a parser over an already-tokenized symbol list, as supplied by a structured input
    /// representation. The symbols' spans index whatever source that representation reports.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        let end = symbols.last().map_or(0, |symbol| symbol.span.end);
        Self { symbols, end }
    }

    /// Parses the input into an expression or an equation, depending on what is found and what
    /// the caller will accept.
    pub fn parse_entity(&self, expected: ExpectedKind) -> Result<Entity, Error> {
        let mut yard = ShuntingYard::new(self.end);
        for symbol in &self.symbols {
            yard.feed(symbol)?;
        }
        yard.finish(expected)
    }

    /// Parses the input as an expression. Finding a relation symbol is an error.
    pub fn parse_expression(&self) -> Result<Expr, Error> {
        match self.parse_entity(ExpectedKind::Expression)? {
            Entity::Expression(expr) => Ok(expr),
            Entity::Equation(_) => unreachable!("expression parse cannot produce an equation"),
        }
    }

    /// Parses the input as an equation. Not finding a relation symbol is an error.
    pub fn parse_equation(&self) -> Result<Equation, Error> {
        match self.parse_entity(ExpectedKind::Equation)? {
            Entity::Equation(eq) => Ok(eq),
            Entity::Expression(_) => unreachable!("equation parse cannot produce an expression"),
        }
    }
}

/// What the previously consumed symbol was, as far as operand/operator position is concerned.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Context {
    /// Nothing consumed yet.
    Start,

    /// After a number literal. Another number directly after is a missing operator, not an
    /// implicit multiplication.
    NumberOperand,

    /// After a variable or a closing parenthesis.
    Operand,

    /// After a binary or unary operator.
    Operator,

    /// After an opening parenthesis.
    OpenParen,

    /// After a relation symbol.
    Relation,
}

impl Context {
    /// Returns true if an operand just ended, so an operand-starting token next implies a
    /// multiplication.
    fn ends_operand(self) -> bool {
        matches!(self, Self::NumberOperand | Self::Operand)
    }

    /// Returns true if the next `-` is a unary minus rather than a subtraction.
    fn starts_operand(self) -> bool {
        matches!(self, Self::Start | Self::Operator | Self::OpenParen | Self::Relation)
    }
}

/// An entry on the operator stack.
#[derive(Debug, Clone)]
enum StackOp {
    Op { kind: OpKind, span: Range<usize> },
    OpenParen { span: Range<usize> },
}

/// The state of one run of the shunting-yard algorithm.
struct ShuntingYard {
    operands: Vec<Expr>,
    operators: Vec<StackOp>,

    /// The relation symbol and the left-hand side captured when it was seen.
    relation: Option<(Relation, Range<usize>, Expr)>,

    context: Context,
    end: usize,
}

impl ShuntingYard {
    fn new(end: usize) -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
            relation: None,
            context: Context::Start,
            end,
        }
    }

    fn feed(&mut self, symbol: &Symbol) -> Result<(), Error> {
        let span = symbol.span.clone();
        match &symbol.kind {
            SymbolKind::Number(value) => {
                self.begin_operand(&span, true)?;
                self.operands.push(
                    Expr::number(value.clone()).with_range(Some(span)),
                );
                self.context = Context::NumberOperand;
            }
            SymbolKind::Variable(name) => {
                self.begin_operand(&span, false)?;
                self.operands.push(Expr::variable(*name).with_range(Some(span)));
                self.context = Context::Operand;
            }
            SymbolKind::OpenParen => {
                self.begin_operand(&span, false)?;
                self.operators.push(StackOp::OpenParen { span });
                self.context = Context::OpenParen;
            }
            SymbolKind::CloseParen => {
                self.close_paren(&span)?;
                self.context = Context::Operand;
            }
            SymbolKind::Operator(op) => {
                if self.context.starts_operand() {
                    // only a unary minus may appear where an operand should start
                    if *op != OpToken::Minus {
                        return Err(Error::new(span, ParseErrorKind::UnsupportedOperation));
                    }
                    self.push_operator(OpKind::UnaryMinus, span);
                } else {
                    let kind = match op {
                        OpToken::Plus => OpKind::Addition,
                        OpToken::Minus => OpKind::Subtraction,
                        OpToken::Times => OpKind::Multiplication,
                        OpToken::Divide => OpKind::Division,
                    };
                    self.push_operator_popping(kind, span)?;
                }
                self.context = Context::Operator;
            }
            SymbolKind::Relation(relation) => {
                self.take_relation(*relation, span)?;
                self.context = Context::Relation;
            }
            SymbolKind::Placeholder => {
                return Err(Error::new(span, ParseErrorKind::PlaceholderPresent));
            }
            SymbolKind::Invalid(c) => {
                return Err(Error::new(span, ParseErrorKind::InvalidCharacter(*c)));
            }
            SymbolKind::InvalidNumber => {
                return Err(Error::new(span, ParseErrorKind::InvalidNumber));
            }
        }
        Ok(())
    }

    /// Called before pushing an operand-starting token. Inserts the implicit multiplication
    /// between adjacent operands, and rejects a number directly following a number.
    fn begin_operand(&mut self, span: &Range<usize>, is_number: bool) -> Result<(), Error> {
        if self.context == Context::NumberOperand && is_number {
            return Err(Error::new(span.clone(), ParseErrorKind::MissingOperator));
        }
        if self.context.ends_operand() {
            self.push_operator_popping(OpKind::Multiplication, span.start..span.start)?;
        }
        Ok(())
    }

    /// Pushes an operator without popping. Used for right-associative unary minus, which never
    /// pops anything (no operator binds tighter).
    fn push_operator(&mut self, kind: OpKind, span: Range<usize>) {
        self.operators.push(StackOp::Op { kind, span });
    }

    /// Pops every stacked operator that binds at least as tightly, then pushes this one.
    fn push_operator_popping(&mut self, kind: OpKind, span: Range<usize>) -> Result<(), Error> {
        while let Some(StackOp::Op { kind: top, .. }) = self.operators.last() {
            let pop = top.precedence() > kind.precedence()
                || (top.precedence() == kind.precedence()
                    && kind.associativity() == Associativity::Left);
            if pop {
                self.apply_top()?;
            } else {
                break;
            }
        }
        self.operators.push(StackOp::Op { kind, span });
        Ok(())
    }

    /// Pops the top operator and applies it to the operands on the stack.
    fn apply_top(&mut self) -> Result<(), Error> {
        let Some(StackOp::Op { kind, span }) = self.operators.pop() else {
            unreachable!("apply_top is only called with an operator on the stack");
        };

        let arity = if kind.is_unary() { 1 } else { 2 };
        if self.operands.len() < arity {
            return Err(Error::new(span, ParseErrorKind::NotEnoughArguments));
        }

        let args = self.operands.split_off(self.operands.len() - arity);
        let range = node_range(&span, &args);
        self.operands.push(Expr::nary(kind, args).with_range(Some(range)));
        Ok(())
    }

    /// Pops operators until the matching open parenthesis.
    fn close_paren(&mut self, span: &Range<usize>) -> Result<(), Error> {
        loop {
            match self.operators.last() {
                Some(StackOp::Op { .. }) => self.apply_top()?,
                Some(StackOp::OpenParen { .. }) => {
                    self.operators.pop();
                    return Ok(());
                }
                None => {
                    return Err(Error::new(span.clone(), ParseErrorKind::MismatchParens));
                }
            }
        }
    }

    /// Handles a relation symbol: drains the stacks and captures the left-hand side.
    fn take_relation(&mut self, relation: Relation, span: Range<usize>) -> Result<(), Error> {
        if self.relation.is_some() {
            return Err(Error::new(span, ParseErrorKind::MultipleRelations));
        }
        let lhs = self.take_operand(&span)?;
        self.relation = Some((relation, span, lhs));
        Ok(())
    }

    /// Drains the operator stack and takes the single resulting operand.
    fn take_operand(&mut self, span: &Range<usize>) -> Result<Expr, Error> {
        while let Some(top) = self.operators.last() {
            match top {
                StackOp::Op { .. } => self.apply_top()?,
                StackOp::OpenParen { span } => {
                    return Err(Error::new(span.clone(), ParseErrorKind::MismatchParens));
                }
            }
        }

        match self.operands.len() {
            0 => Err(Error::new(span.clone(), ParseErrorKind::MissingExpression)),
            1 => Ok(self.operands.pop().unwrap_or(Expr::Null)),
            _ => Err(Error::new(span.clone(), ParseErrorKind::MissingOperator)),
        }
    }

    fn finish(mut self, expected: ExpectedKind) -> Result<Entity, Error> {
        let end_span = self.end..self.end;
        let rhs = self.take_operand(&end_span)?;

        match self.relation.take() {
            Some((relation, relation_span, lhs)) => {
                if expected == ExpectedKind::Expression {
                    return Err(Error::new(relation_span, ParseErrorKind::UnsupportedOperation));
                }
                Ok(Entity::Equation(Equation::new(relation, lhs, rhs)))
            }
            None => {
                if expected == ExpectedKind::Equation {
                    return Err(Error::new(0..self.end, ParseErrorKind::EquationExpected));
                }
                Ok(Entity::Expression(rhs))
            }
        }
    }
}

/// The source range covered by an operator node: the operator's own span extended over its
/// children's ranges.
fn node_range(op_span: &Range<usize>, args: &[Expr]) -> Range<usize> {
    let mut range = op_span.clone();
    for arg in args {
        if let Some(child) = arg.range() {
            range.start = range.start.min(child.start);
            range.end = range.end.max(child.end);
        }
    }
    range
}
