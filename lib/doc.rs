//! Documentation metadata attached to bloq types.
//!
//! Each bloq type can publish a [`BloqDocSpec`]: the import line users need,
//! a handful of named example instances, and the literature it draws on.
//! Documentation generators and test harnesses consume this to render pages
//! and to exercise every example.

use std::fmt;
use itertools::Itertools;

/// A named factory for an example instance of a bloq.
#[derive(Copy, Clone, Debug)]
pub struct BloqExample<B> {
    /// Identifier for the example.
    pub name: &'static str,
    /// Zero-argument factory producing the example.
    pub make: fn() -> B,
}

impl<B> BloqExample<B> {
    /// Construct the example bloq.
    pub fn make(&self) -> B { (self.make)() }
}

/// A literature reference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    pub title: &'static str,
    pub authors: &'static str,
    pub year: u16,
    pub url: &'static str,
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}). {}. {}", self.authors, self.year, self.title, self.url)
    }
}

/// Documentation record for a bloq type.
#[derive(Clone, Debug)]
pub struct BloqDocSpec<B> {
    /// Name of the bloq type.
    pub bloq_name: &'static str,
    /// Line of Rust bringing the type into scope.
    pub import_line: &'static str,
    pub examples: Vec<BloqExample<B>>,
    pub references: Vec<Reference>,
}

impl<B> BloqDocSpec<B> {
    /// Look up an example by name.
    pub fn example(&self, name: &str) -> Option<&BloqExample<B>> {
        self.examples.iter().find(|ex| ex.name == name)
    }

    /// Construct every example, in declaration order.
    pub fn make_examples(&self) -> Vec<B> {
        self.examples.iter().map(BloqExample::make).collect()
    }

    /// Render the reference list as a Markdown bullet list.
    pub fn references_markdown(&self) -> String {
        self.references.iter()
            .map(|r| format!("- [{}]({}). {}. {}.", r.title, r.url, r.authors, r.year))
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn byte_doc() -> BloqDocSpec<u8> {
        BloqDocSpec {
            bloq_name: "Byte",
            import_line: "use bytes::Byte;",
            examples: vec![
                BloqExample { name: "zero", make: || 0 },
                BloqExample { name: "max", make: || u8::MAX },
            ],
            references: vec![
                Reference {
                    title: "On bytes",
                    authors: "A. Author",
                    year: 1999,
                    url: "https://example.org/bytes",
                },
            ],
        }
    }

    #[test]
    fn examples() {
        let doc = byte_doc();
        assert_eq!(doc.make_examples(), vec![0, 255]);
        assert_eq!(doc.example("max").map(|ex| ex.make()), Some(255));
        assert!(doc.example("min").is_none());
    }

    #[test]
    fn references() {
        let doc = byte_doc();
        assert_eq!(
            doc.references_markdown(),
            "- [On bytes](https://example.org/bytes). A. Author. 1999.",
        );
        assert_eq!(
            doc.references[0].to_string(),
            "A. Author (1999). On bytes. https://example.org/bytes",
        );
    }
}
