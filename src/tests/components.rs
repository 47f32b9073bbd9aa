#[cfg(test)]
mod tests {
    use crate::components::{ button_class, switch_state, ButtonSize, ButtonVariant };

    #[test]
    fn test_default_button_class() {
        let class = button_class(ButtonVariant::Default, ButtonSize::Default, "");
        assert!(class.starts_with("inline-flex items-center"));
        assert!(class.contains("bg-primary text-primary-foreground"));
        assert!(class.ends_with("h-9 px-4 py-2"));
    }

    #[test]
    fn test_button_class_appends_extra() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Lg, "  w-full mt-4 ");
        assert!(class.contains("border border-input"));
        assert!(class.contains("h-10 rounded-md px-8"));
        assert!(class.ends_with("w-full mt-4"));
        assert!(!class.contains("  "));
    }

    #[test]
    fn test_button_variants_are_distinct() {
        let variants = [
            ButtonVariant::Default,
            ButtonVariant::Destructive,
            ButtonVariant::Outline,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
            ButtonVariant::Link,
        ];
        let classes: Vec<String> = variants
            .iter()
            .map(|v| button_class(*v, ButtonSize::Icon, ""))
            .collect();
        for (i, a) in classes.iter().enumerate() {
            for b in classes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_switch_state() {
        assert_eq!(switch_state(true), "checked");
        assert_eq!(switch_state(false), "unchecked");
    }
}
