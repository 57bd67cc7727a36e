#[derive(Debug, Clone, Copy, Default)]
pub struct MethodA;

impl MethodA {
    pub fn a_method(&self) -> String {
        "A method".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MethodB;

impl MethodB {
    pub fn b_method(&self) -> String {
        "B method".to_string()
    }
}

/// Gets the behaviour of both helpers by holding one of each.
#[derive(Debug, Clone, Copy, Default)]
pub struct Composite {
    a: MethodA,
    b: MethodB,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_a(&self) -> String {
        self.a.a_method()
    }

    pub fn use_b(&self) -> String {
        self.b.b_method()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_to_owned_parts() {
        let composite = Composite::new();
        assert_eq!(composite.use_a(), "A method");
        assert_eq!(composite.use_b(), "B method");
    }
}
