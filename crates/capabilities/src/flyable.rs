/// Something that can fly. Implementors get `start` for free.
pub trait Flyable {
    fn start(&self) -> String {
        "Default start".to_string()
    }
}

impl dyn Flyable {
    /// Shared advice, callable without any flyer: `<dyn Flyable>::maintenance_tip()`.
    pub fn maintenance_tip() -> &'static str {
        "Check oil every 5000 km"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Airplane;

impl Flyable for Airplane {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airplane_uses_default_start() {
        let plane: &dyn Flyable = &Airplane;
        assert_eq!(plane.start(), "Default start");
    }

    #[derive(Debug)]
    struct Glider;

    impl Flyable for Glider {
        fn start(&self) -> String {
            "Towed into the air".to_string()
        }
    }

    #[test]
    fn override_replaces_default() {
        assert_eq!(Glider.start(), "Towed into the air");
    }

    #[test]
    fn maintenance_tip_needs_no_instance() {
        assert_eq!(<dyn Flyable>::maintenance_tip(), "Check oil every 5000 km");
    }
}
