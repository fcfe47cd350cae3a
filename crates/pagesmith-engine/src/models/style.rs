/// Style properties the builder can produce.
///
/// The set is closed: layout presets and the layout border are the only
/// sources of style, so free-form property names never enter the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Display,
    FlexDirection,
    Gap,
    FlexWrap,
    JustifyContent,
    AlignItems,
    Flex,
    Padding,
    MarginBottom,
    Border,
}

impl StyleProperty {
    /// Name in the camelCase convention used inside the model
    pub fn camel_name(self) -> &'static str {
        match self {
            StyleProperty::Display => "display",
            StyleProperty::FlexDirection => "flexDirection",
            StyleProperty::Gap => "gap",
            StyleProperty::FlexWrap => "flexWrap",
            StyleProperty::JustifyContent => "justifyContent",
            StyleProperty::AlignItems => "alignItems",
            StyleProperty::Flex => "flex",
            StyleProperty::Padding => "padding",
            StyleProperty::MarginBottom => "marginBottom",
            StyleProperty::Border => "border",
        }
    }

    /// Hyphenated name as written in a stylesheet
    pub fn css_name(self) -> String {
        kebab_case(self.camel_name())
    }
}

/// Convert a camelCase property name to its hyphenated stylesheet form
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Insertion-ordered property → value mapping.
///
/// Setting a property that is already present replaces its value in place,
/// so the order stays that of first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(StyleProperty, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: StyleProperty, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn get(&self, property: StyleProperty) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleProperty, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Into<String>> FromIterator<(StyleProperty, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (StyleProperty, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("display", "display")]
    #[case("flexDirection", "flex-direction")]
    #[case("marginBottom", "margin-bottom")]
    #[case("justifyContent", "justify-content")]
    #[case("", "")]
    fn test_kebab_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(kebab_case(input), expected);
    }

    #[test]
    fn test_css_name_matches_camel_name() {
        assert_eq!(StyleProperty::AlignItems.css_name(), "align-items");
        assert_eq!(StyleProperty::FlexWrap.css_name(), "flex-wrap");
        assert_eq!(StyleProperty::Border.css_name(), "border");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut map = StyleMap::new();
        map.set(StyleProperty::Display, "block");
        map.set(StyleProperty::Gap, "1rem");
        map.set(StyleProperty::Display, "flex");

        let entries: Vec<_> = map.iter().collect();
        assert_eq!(
            entries,
            vec![(StyleProperty::Display, "flex"), (StyleProperty::Gap, "1rem")]
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_missing_property() {
        let map = StyleMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(StyleProperty::Flex), None);
    }
}
