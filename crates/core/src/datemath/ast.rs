//! AST types for date-math expressions

/// Calendar unit of a shift or rounding operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Map a grammar symbol to its unit. `H` is an alias for `h`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "y" => Some(Self::Year),
            "M" => Some(Self::Month),
            "w" => Some(Self::Week),
            "d" => Some(Self::Day),
            "h" | "H" => Some(Self::Hour),
            "m" => Some(Self::Minute),
            "s" => Some(Self::Second),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "M",
            Self::Week => "w",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        }
    }
}

/// A single step in an operation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Signed offset, e.g. `-60y` or `+12h`. A missing amount defaults to 1.
    Shift {
        negative: bool,
        amount: u32,
        unit: Unit,
    },
    /// Rounding to a unit boundary, e.g. `/d`.
    Round { unit: Unit },
}

/// Starting instant of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// The injected current instant.
    Now,
    /// An absolute date literal, unparsed until evaluation.
    Absolute(String),
}

/// A parsed date-math expression: an anchor plus an operation chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMathExpr {
    pub anchor: Anchor,
    pub operations: Vec<Operation>,
}

impl DateMathExpr {
    pub fn now(operations: Vec<Operation>) -> Self {
        Self {
            anchor: Anchor::Now,
            operations,
        }
    }

    pub fn anchored(date: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            anchor: Anchor::Absolute(date.into()),
            operations,
        }
    }

    /// True when the expression is anchored to the current instant.
    pub fn is_relative(&self) -> bool {
        self.anchor == Anchor::Now
    }
}
