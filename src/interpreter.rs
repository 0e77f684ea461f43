use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::environment::Environment;
use crate::error::{Diagnostics, RuntimeError};
use crate::expr::{self, Expr};
use crate::stmt::Stmt;
use crate::token::{Token, Type};
use crate::value::Value;

type RuntimeResult<T> = Result<T, RuntimeError>;

/// Walks the statement list against a chain of scope frames rooted at the
/// globals. `print` output goes to the writer supplied by the driver.
pub struct Interpreter<'a> {
    environment: Rc<RefCell<Environment>>,
    out: &'a mut dyn Write,
}

impl<'a> Interpreter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Interpreter {
            environment: Rc::new(RefCell::new(Environment::default())),
            out,
        }
    }

    /// Executes the statements in order. The first runtime error is
    /// reported, and the rest of the program is abandoned.
    pub fn interpret(&mut self, statements: &[Stmt], diagnostics: &mut Diagnostics) {
        for statement in statements {
            if let Err(error) = self.execute(statement) {
                diagnostics.runtime_error(&error);
                return;
            }
        }
    }

    fn execute(&mut self, stmt: &Stmt) -> RuntimeResult<()> {
        match stmt {
            Stmt::Expression(data) => {
                self.evaluate(&data.expr)?;
                Ok(())
            },
            Stmt::Print(data) => {
                let value = self.evaluate(&data.expr)?;
                writeln!(self.out, "{value}").unwrap();
                Ok(())
            },
            Stmt::Var(data) => {
                let value = match &data.initializer {
                    Some(initializer) => self.evaluate(initializer)?,
                    None => Value::Nil,
                };

                self.environment.borrow_mut().define(&data.name.lexeme, value);
                Ok(())
            },
            Stmt::Block(data) => self.execute_block(&data.statements),
            Stmt::If(data) => {
                if self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.then_branch)
                } else if let Some(else_branch) = &data.else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            },
            Stmt::While(data) => {
                while self.evaluate(&data.condition)?.is_truthy() {
                    self.execute(&data.body)?;
                }
                Ok(())
            },
        }
    }

    /// Executes the statements inside a fresh scope. The previous scope is
    /// restored on both normal completion and error propagation.
    fn execute_block(&mut self, statements: &[Stmt]) -> RuntimeResult<()> {
        let previous = Rc::clone(&self.environment);
        self.environment = Rc::new(RefCell::new(Environment::new(Some(Rc::clone(&previous)))));

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }

    fn evaluate(&mut self, expr: &Expr) -> RuntimeResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal.clone())),
            Expr::Grouping(data) => self.evaluate(&data.expr),
            Expr::Unary(data) => self.unary(data),
            Expr::Binary(data) => self.binary(data),
            Expr::Logical(data) => self.logical(data),
            Expr::Variable(data) => self.environment.borrow().get(&data.name),
            Expr::Assign(data) => {
                let value = self.evaluate(&data.value)?;
                self.environment.borrow_mut().assign(&data.name, value.clone())?;
                Ok(value)
            },
        }
    }

    fn unary(&mut self, data: &expr::UnaryData) -> RuntimeResult<Value> {
        let right = self.evaluate(&data.expr)?;

        match data.operator.r#type {
            Type::Bang => Ok(Value::Bool(!right.is_truthy())),
            Type::Minus => match right {
                Value::Int(n) => Ok(Value::Int(-n)),
                _ => Err(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operands must be numbers.".to_string(),
                }),
            },
            _ => unreachable!("unary operator {:?}", data.operator.r#type),
        }
    }

    fn binary(&mut self, data: &expr::BinaryData) -> RuntimeResult<Value> {
        let left = self.evaluate(&data.left)?;
        let right = self.evaluate(&data.right)?;

        match data.operator.r#type {
            Type::Plus => match (left, right) {
                (Value::Int(l), Value::Int(r)) => Ok(Value::Int(l + r)),
                (Value::Str(l), Value::Str(r)) => Ok(Value::Str(l + &r)),
                _ => Err(RuntimeError {
                    token: data.operator.clone(),
                    message: "Operands must be two numbers or two strings.".to_string(),
                }),
            },
            Type::Minus => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                Ok(Value::Int(l - r))
            },
            Type::Star => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                Ok(Value::Int(l * r))
            },
            Type::Slash => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                if r == 0 {
                    return Err(RuntimeError {
                        token: data.operator.clone(),
                        message: "Division by zero.".to_string(),
                    });
                }

                Ok(Value::Int(l / r))
            },
            Type::Greater => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                Ok(Value::Bool(l > r))
            },
            Type::GreaterEqual => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                Ok(Value::Bool(l >= r))
            },
            Type::Less => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                Ok(Value::Bool(l < r))
            },
            Type::LessEqual => {
                let (l, r) = number_operands(&data.operator, left, right)?;
                Ok(Value::Bool(l <= r))
            },
            Type::EqualEqual => Ok(Value::Bool(left == right)),
            Type::BangEqual => Ok(Value::Bool(left != right)),
            _ => unreachable!("binary operator {:?}", data.operator.r#type),
        }
    }

    fn logical(&mut self, data: &expr::LogicalData) -> RuntimeResult<Value> {
        let left = self.evaluate(&data.left)?;

        // The deciding operand is returned untouched, never coerced into
        // a boolean. The right side is evaluated at most once.
        match data.operator.r#type {
            Type::Or if left.is_truthy() => Ok(left),
            Type::And if !left.is_truthy() => Ok(left),
            _ => self.evaluate(&data.right),
        }
    }
}

/// Requires both operands to be numbers.
fn number_operands(operator: &Token, left: Value, right: Value) -> RuntimeResult<(i64, i64)> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => Ok((l, r)),
        _ => Err(RuntimeError {
            token: operator.clone(),
            message: "Operands must be numbers.".to_string(),
        }),
    }
}
