use lazy_static::lazy_static;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorInfo {
    pub name: &'static str,
    pub precedence: i32,
}

#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
    entries: HashMap<String, OperatorInfo>,
}

impl OperatorTable {
    pub fn new() -> Self {
        OperatorTable {
            entries: HashMap::new(),
        }
    }

    /// Registers `symbol`, replacing any previous entry.
    pub fn insert(&mut self, symbol: impl Into<String>, name: &'static str, precedence: i32) {
        self.entries
            .insert(symbol.into(), OperatorInfo { name, precedence });
    }

    pub fn get(&self, symbol: &str) -> Option<&OperatorInfo> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    pub static ref DEFAULT_OPERATORS: OperatorTable = {
        let mut table = OperatorTable::new();
        // Multiplicative
        table.insert("*", "multiply", 14);
        table.insert("/", "divide", 14);
        table.insert("%", "modulo", 14);

        // Additive
        table.insert("+", "add", 13);
        table.insert("-", "subtract", 13);

        // Relational
        table.insert("<", "lessThan", 11);
        table.insert("<=", "lessThanOrEqual", 11);
        table.insert(">", "greaterThan", 11);
        table.insert(">=", "greaterThanOrEqual", 11);
        table.insert("==", "equal", 10);
        table.insert("!=", "notEqual", 10);

        // Logical
        table.insert("&&", "and", 6);
        table.insert("||", "or", 5);

        table.insert("=", "assignment", 3);
        // Ternary branch separator
        table.insert(":", "tuple", 2);
        table
    };
}
