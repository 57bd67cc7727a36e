pub trait AlphaGreeting {
    fn greet(&self) -> String {
        "Hello from A".to_string()
    }
}

pub trait BetaGreeting {
    fn greet(&self) -> String {
        "Hello from B".to_string()
    }
}

/// Implements both greeting traits. A plain `combined.greet()` resolves to
/// the inherent method, which picks `BetaGreeting`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Combined;

impl AlphaGreeting for Combined {}

impl BetaGreeting for Combined {}

impl Combined {
    pub fn greet(&self) -> String {
        BetaGreeting::greet(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherent_greet_delegates_to_beta() {
        assert_eq!(Combined.greet(), "Hello from B");
    }

    #[test]
    fn each_trait_remains_reachable() {
        assert_eq!(AlphaGreeting::greet(&Combined), "Hello from A");
        assert_eq!(<Combined as BetaGreeting>::greet(&Combined), "Hello from B");
    }
}
