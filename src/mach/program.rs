use crate::error;
use crate::lang::{Error, LineNumber, Statement};
use std::collections::BTreeMap;

type Result<T> = std::result::Result<T, Error>;

/// A loaded program: an ascending map of line number to statement.
/// Built once from raw source lines and immutable for the rest of the run.
#[derive(Debug)]
pub struct Program {
    statements: BTreeMap<LineNumber, Statement>,
}

impl Program {
    /// Loads raw source lines into a statement table. Line numbers must be
    /// strictly increasing in source order.
    pub fn load<'a, T: IntoIterator<Item = &'a str>>(lines: T) -> Result<Program> {
        let mut statements = BTreeMap::new();
        let mut previous: Option<LineNumber> = None;
        for raw in lines {
            let statement = Statement::from_str(raw)?;
            if let Some(previous) = previous {
                if statement.number() <= previous {
                    return Err(error!(MalformedLine, statement.number();
                        "LINE NUMBERS OUT OF ORDER"));
                }
            }
            previous = Some(statement.number());
            statements.insert(statement.number(), statement);
        }
        Ok(Program { statements })
    }

    pub fn first_line(&self) -> Option<LineNumber> {
        self.statements.keys().next().copied()
    }

    pub fn last_line(&self) -> Option<LineNumber> {
        self.statements.keys().next_back().copied()
    }

    pub fn get(&self, number: LineNumber) -> Option<&Statement> {
        self.statements.get(&number)
    }

    pub fn contains_line(&self, number: LineNumber) -> bool {
        self.statements.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements from `start` through the end of the program, in line order.
    pub fn range(&self, start: LineNumber) -> impl Iterator<Item = &Statement> {
        self.statements.range(start..).map(|(_, statement)| statement)
    }

    /// Re-renders the statement table in line order.
    pub fn list(&self) -> Vec<String> {
        self.statements
            .values()
            .map(|statement| statement.to_string())
            .collect()
    }
}
