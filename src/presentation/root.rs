//! DocumentRoot - In-Process Document Root Model

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::PresentationRoot;
use crate::constants::{DIR_ATTRIBUTE, LANG_ATTRIBUTE, RTL_CLASS};
use crate::i18n::{Direction, Language};

/// Attributes and classes of the document root element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl PresentationRoot for DocumentRoot {
    fn apply_direction(&mut self, direction: Direction) {
        self.attributes
            .insert(DIR_ATTRIBUTE.to_string(), direction.as_attr().to_string());

        if direction.is_rtl() {
            self.classes.insert(RTL_CLASS.to_string());
        } else {
            self.classes.remove(RTL_CLASS);
        }

        debug!(direction = %direction, "Direction applied to document root");
    }

    fn direction(&self) -> Option<Direction> {
        match self.attribute(DIR_ATTRIBUTE)? {
            "rtl" => Some(Direction::Rtl),
            "ltr" => Some(Direction::Ltr),
            _ => None,
        }
    }

    fn apply_language(&mut self, language: Language) {
        self.attributes
            .insert(LANG_ATTRIBUTE.to_string(), language.code().to_string());
        self.apply_direction(language.direction());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_root_has_no_direction() {
        let root = DocumentRoot::new();
        assert_eq!(root.direction(), None);
        assert!(!root.has_class(RTL_CLASS));
    }

    #[test]
    fn rtl_sets_attribute_and_class_together() {
        let mut root = DocumentRoot::new();
        root.apply_direction(Direction::Rtl);
        assert_eq!(root.attribute(DIR_ATTRIBUTE), Some("rtl"));
        assert!(root.has_class(RTL_CLASS));
        assert_eq!(root.direction(), Some(Direction::Rtl));

        root.apply_direction(Direction::Ltr);
        assert_eq!(root.attribute(DIR_ATTRIBUTE), Some("ltr"));
        assert!(!root.has_class(RTL_CLASS));
        assert_eq!(root.direction(), Some(Direction::Ltr));
    }

    #[test]
    fn reapplying_is_idempotent() {
        let mut once = DocumentRoot::new();
        once.apply_language(Language::Ar);

        let mut twice = DocumentRoot::new();
        twice.apply_language(Language::Ar);
        twice.apply_language(Language::Ar);

        assert_eq!(once, twice);
        assert_eq!(twice.classes().collect::<Vec<_>>(), vec![RTL_CLASS]);
    }

    #[test]
    fn apply_language_sets_lang_attribute() {
        let mut root = DocumentRoot::new();
        root.apply_language(Language::Fr);
        assert_eq!(
            root.attributes().collect::<Vec<_>>(),
            vec![("dir", "ltr"), ("lang", "fr")]
        );
    }
}
