use std::fmt;

/// A comparison operator for variable conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparisonOp {
    #[default]
    Equal,
    NotEqual,
    Greater,
    Less,
    GreaterOrEqual,
    LessOrEqual,
}

impl ComparisonOp {
    /// Parses an operator symbol. Anything unrecognised becomes `Equal`.
    pub fn parse(symbol: &str) -> Self {
        match symbol.trim() {
            "!=" => ComparisonOp::NotEqual,
            ">" => ComparisonOp::Greater,
            "<" => ComparisonOp::Less,
            ">=" => ComparisonOp::GreaterOrEqual,
            "<=" => ComparisonOp::LessOrEqual,
            _ => ComparisonOp::Equal,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "==",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Greater => ">",
            ComparisonOp::Less => "<",
            ComparisonOp::GreaterOrEqual => ">=",
            ComparisonOp::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A declarative runtime condition attached to a Condition node or a menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// True when the switch's ON/OFF state equals `value`.
    Switch { switch_id: u32, value: bool },
    /// Compares a game variable against a constant.
    Variable {
        variable_id: u32,
        op: ComparisonOp,
        value: i64,
    },
    /// A raw script expression, emitted as stored. `None` or blank evaluates as `true`.
    Script { expression: Option<String> },
}

impl Condition {
    pub fn switch(switch_id: u32, value: bool) -> Self {
        Condition::Switch { switch_id, value }
    }

    pub fn variable(variable_id: u32, op: ComparisonOp, value: i64) -> Self {
        Condition::Variable {
            variable_id,
            op,
            value,
        }
    }

    pub fn script(expression: impl Into<String>) -> Self {
        Condition::Script {
            expression: Some(expression.into()),
        }
    }

    /// Generates the boolean expression the engine evaluates for this condition.
    /// Total: every condition yields a valid expression.
    pub fn to_script(&self) -> String {
        match self {
            Condition::Switch { switch_id, value } => {
                format!("$gameSwitches.value({}) === {}", switch_id, value)
            }
            Condition::Variable {
                variable_id,
                op,
                value,
            } => format!("$gameVariables.value({}) {} {}", variable_id, op, value),
            Condition::Script { expression } => match expression.as_deref() {
                Some(expr) if !expr.trim().is_empty() => expr.to_string(),
                _ => "true".to_string(),
            },
        }
    }
}

impl Default for Condition {
    fn default() -> Self {
        Condition::Script { expression: None }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_script())
    }
}
