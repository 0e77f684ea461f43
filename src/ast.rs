use crate::expr::Expr;
use crate::stmt::Stmt;

/// Returns a string representation of the expressions in parenthesize.
macro_rules! parenthesize {
    ( $self:ident, $name:expr, $( $x:expr ),+ ) => {
        {
            let mut string = String::new();
            string += "(";
            string += $name;
            $(
                string += " ";
                string += &$self.print_expr($x);
            )*
            string += ")";

            string
        }
    };
}

/// Renders statements and expressions in parenthesized prefix form.
/// Only used for debugging and for asserting tree shapes in tests.
pub struct AstPrinter;

impl AstPrinter {
    /// Prints the statement.
    pub fn print(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(data) => parenthesize!(self, "expr", &data.expr),
            Stmt::Print(data) => parenthesize!(self, "print", &data.expr),
            Stmt::Var(data) => {
                let mut string = String::new();
                string += "(var ";
                string += &data.name.lexeme;
                if let Some(initializer) = &data.initializer {
                    string += " = ";
                    string += &self.print_expr(initializer);
                }
                string += ")";

                string
            },
            Stmt::Block(data) => {
                let mut string = String::new();
                string += "{";
                for stmt in &data.statements {
                    string += " ";
                    string += &self.print(stmt);
                }
                string += " }";

                string
            },
            Stmt::If(data) => {
                let mut string = String::new();
                string += "(if ";
                string += &self.print_expr(&data.condition);
                string += " ";
                string += &self.print(&data.then_branch);
                if let Some(else_branch) = &data.else_branch {
                    string += " else ";
                    string += &self.print(else_branch);
                }
                string += ")";

                string
            },
            Stmt::While(data) => {
                let mut string = String::new();
                string += "(while ";
                string += &self.print_expr(&data.condition);
                string += " ";
                string += &self.print(&data.body);
                string += ")";

                string
            },
        }
    }

    /// Prints the expression.
    pub fn print_expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => literal.to_string(),
            Expr::Unary(data) => parenthesize!(self, &data.operator.lexeme, &data.expr),
            Expr::Binary(data) => parenthesize!(self, &data.operator.lexeme, &data.left, &data.right),
            Expr::Logical(data) => parenthesize!(self, &data.operator.lexeme, &data.left, &data.right),
            Expr::Grouping(data) => parenthesize!(self, "group", &data.expr),
            Expr::Variable(data) => data.name.lexeme.clone(),
            Expr::Assign(data) => {
                parenthesize!(self, format!("= {}", &data.name.lexeme).as_str(), &data.value)
            },
        }
    }
}
