use serde::{Deserialize, Serialize};

/// Fixed set of names the generator draws from.
pub const PERSON_NAMES: [&str; 5] = ["Alice", "Bob", "Charlie", "Diana", "Ethan"];

/// Something that can introduce itself.
pub trait Greeter {
    fn greet(&self) -> String;
}

/// A generated person record.
///
/// Records are moved through channels by value and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u8,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Greeter for Person {
    fn greet(&self) -> String {
        format!(
            "Hello, my name is {} and I am {} years old.",
            self.name, self.age
        )
    }
}
