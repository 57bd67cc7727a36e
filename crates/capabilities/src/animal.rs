/// Line every animal reports when it sleeps.
pub const BASE_SLEEP: &str = "animal is sleeping...";

/// Shared base behaviour. `name` and `make_sound` must be provided.
pub trait Animal {
    fn name(&self) -> &str;

    fn make_sound(&self) -> String;

    fn sleep(&self) -> Vec<String> {
        vec![BASE_SLEEP.to_string()]
    }
}

pub trait Swimmable {
    fn swim(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dolphin {
    name: String,
}

impl Dolphin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Dolphin {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        format!("{} makes clicking sounds", self.name)
    }

    /// Base line first, then the dolphin's own.
    fn sleep(&self) -> Vec<String> {
        tracing::trace!(name = %self.name, "dolphin going to sleep");
        vec![
            BASE_SLEEP.to_string(),
            format!("{} is sleeping.....", self.name),
        ]
    }
}

impl Swimmable for Dolphin {
    fn swim(&self) -> String {
        format!("{} is swimming fast!", self.name)
    }
}
