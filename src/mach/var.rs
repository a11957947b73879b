use crate::error;
use crate::lang::{ident, Error};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
enum Val {
    Declared,
    Integer(i32),
}

/// ## Variable memory
///
/// Every variable moves through a two-state lifecycle: declaration brings it
/// into existence without a value, and the first `store` makes it readable.
/// Fetching a variable that is still only declared is a program error.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn declare(&mut self, name: &str) -> Result<()> {
        if !ident::is_valid(name) {
            return Err(error!(InvalidIdentifier; format!("NOT A VALID NAME: {}", name)));
        }
        if self.vars.contains_key(name) {
            return Err(error!(DuplicateDeclaration; format!("{} ALREADY DECLARED", name)));
        }
        self.vars.insert(name.into(), Val::Declared);
        Ok(())
    }

    pub fn store(&mut self, name: &str, value: i32) -> Result<()> {
        match self.vars.get_mut(name) {
            Some(val) => {
                *val = Val::Integer(value);
                Ok(())
            }
            None => Err(error!(UndeclaredVariable; format!("{} NOT DECLARED", name))),
        }
    }

    pub fn fetch(&self, name: &str) -> Result<i32> {
        match self.vars.get(name) {
            Some(Val::Integer(value)) => Ok(*value),
            Some(Val::Declared) => {
                Err(error!(UninitializedRead; format!("{} HAS NO VALUE", name)))
            }
            None => Err(error!(UndeclaredVariable; format!("{} NOT DECLARED", name))),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }
}
