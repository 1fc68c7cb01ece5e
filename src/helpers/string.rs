//! String Utilities

use std::borrow::Cow;

/// Replace `{name}` placeholders with their values
///
/// Unknown placeholders are left as they are. Returns the input unchanged
/// (borrowed) when there is nothing to substitute.
pub fn interpolate<'a>(template: &'a str, args: &[(&str, &str)]) -> Cow<'a, str> {
    if args.is_empty() || !template.contains('{') {
        return Cow::Borrowed(template);
    }

    let mut result = template.to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{name}}}"), value);
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_replaces_named_placeholders() {
        let text = interpolate("{count} artisans in {city}", &[("count", "42"), ("city", "Fès")]);
        assert_eq!(text, "42 artisans in Fès");
    }

    #[test]
    fn interpolate_repeated_placeholder() {
        let text = interpolate("{n} + {n}", &[("n", "1")]);
        assert_eq!(text, "1 + 1");
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        let text = interpolate("À partir de {price} MAD", &[("count", "3")]);
        assert_eq!(text, "À partir de {price} MAD");
    }

    #[test]
    fn interpolate_without_args_borrows() {
        assert!(matches!(interpolate("{year}", &[]), Cow::Borrowed("{year}")));
        assert!(matches!(interpolate("plain", &[("a", "b")]), Cow::Borrowed("plain")));
    }
}
