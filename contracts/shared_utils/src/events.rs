//! Event emission patterns and utilities

use soroban_sdk::{Env, Symbol, Topics};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with a single topic and data
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    {
        e.events().publish(topics, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{symbol_short, testutils::Address as TestAddress};

    #[test]
    fn test_emit() {
        let env = Env::default();
        Events::emit(&env, symbol_short!("Test"), (1i128,));
    }

    #[test]
    fn test_emit_with_topics() {
        let env = Env::default();
        let who = <soroban_sdk::Address as TestAddress>::generate(&env);
        Events::emit_with_topics(&env, (symbol_short!("iou"), symbol_short!("supply")), (who, 100i128));
    }
}
