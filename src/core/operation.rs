//! The fixed set of operations the dispatcher understands.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How many arguments an operation takes after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Reverse,
    Sort,
    Unique,
    Prime,
    Factorial,
    Uppercase,
    WordCount,
    Palindrome,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Reverse,
        Operation::Sort,
        Operation::Unique,
        Operation::Prime,
        Operation::Factorial,
        Operation::Uppercase,
        Operation::WordCount,
        Operation::Palindrome,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Reverse => "reverse",
            Operation::Sort => "sort",
            Operation::Unique => "unique",
            Operation::Prime => "prime",
            Operation::Factorial => "factorial",
            Operation::Uppercase => "uppercase",
            Operation::WordCount => "wordcount",
            Operation::Palindrome => "palindrome",
        }
    }

    /// Name used at the start of arity error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Reverse => "Reverse",
            Operation::Sort => "Sort",
            Operation::Unique => "Unique",
            Operation::Prime => "Prime",
            Operation::Factorial => "Factorial",
            Operation::Uppercase => "Uppercase",
            Operation::WordCount => "WordCount",
            Operation::Palindrome => "Palindrome",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operation::Sort | Operation::Unique => Arity::AtLeast(1),
            _ => Arity::Exactly(1),
        }
    }

    /// What a single argument is called in messages and usage.
    fn operand(&self) -> &'static str {
        match self {
            Operation::Sort | Operation::Unique => "element",
            Operation::Prime | Operation::Factorial => "number",
            _ => "string",
        }
    }

    pub fn arity_message(&self) -> String {
        format!(
            "{} operation requires {} {}",
            self.label(),
            self.arity(),
            self.operand()
        )
    }

    fn usage_args(&self) -> &'static str {
        match self {
            Operation::Sort | Operation::Unique => "<item1> <item2>...",
            Operation::Prime | Operation::Factorial => "<number>",
            _ => "<string>",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Operation::Reverse => "Reverse a string",
            Operation::Sort => "Sort array elements",
            Operation::Unique => "Remove duplicates from array",
            Operation::Prime => "Check if number is prime",
            Operation::Factorial => "Calculate factorial (max 20)",
            Operation::Uppercase => "Convert string to uppercase",
            Operation::WordCount => "Count words in string",
            Operation::Palindrome => "Check if string is palindrome",
        }
    }

    /// One line of the usage listing, e.g. `  prime <number>             - Check if number is prime`.
    pub fn usage_line(&self) -> String {
        let synopsis = format!("{} {}", self.name(), self.usage_args());
        format!("  {:<27}- {}", synopsis, self.description())
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|op| op.name().to_string()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == lowered)
            .ok_or_else(|| Error::usage_unknown_operation(s, Self::names()))
    }
}

/// Full usage text, operations listed in dispatch order.
pub fn usage(program: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Usage: {} <operation> <arguments>\n", program));
    out.push_str("Operations:\n");
    for op in Operation::ALL {
        out.push_str(&op.usage_line());
        out.push('\n');
    }
    out.push('\n');
    out.push_str("Examples:\n");
    out.push_str(&format!("  {} reverse \"Hello World\"\n", program));
    out.push_str(&format!("  {} sort apple banana cherry\n", program));
    out.push_str(&format!("  {} prime 17\n", program));
    out.push_str(&format!("  {} factorial 5\n", program));
    out
}
