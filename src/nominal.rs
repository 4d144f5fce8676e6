//! Constructor-built and literal-built values of the same type.
//!
//! A [Labelled] made through [Labelled::new] and one written out as a
//! struct literal are indistinguishable; both are simply `Labelled`.
//!
//! ```
//! use shape_compat::nominal::{describe, Labelled};
//!
//! let c = Labelled::new("instance of Labelled");
//! let d = Labelled { foo: "struct literal".to_string() };
//!
//! assert_eq!("instance of Labelled", describe(&c));
//! assert_eq!("struct literal", describe(&d));
//! ```
//!
//! Type identity is nominal, though. [Unlabelled] has exactly the same
//! fields and is still rejected where a `Labelled` is expected:
//!
//! ```compile_fail
//! use shape_compat::nominal::{describe, Unlabelled};
//!
//! let u = Unlabelled { foo: "same shape".to_string() };
//! describe(&u);
//! ```
//!
//! Code that should accept anything with a `foo` asks for the capability
//! instead, through [HasFoo]:
//!
//! ```
//! use shape_compat::nominal::{describe_any, Labelled, Unlabelled};
//!
//! assert_eq!("a", describe_any(&Labelled::new("a")));
//! assert_eq!("b", describe_any(&Unlabelled { foo: "b".to_string() }));
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labelled {
    pub foo: String,
}

impl Labelled {
    pub fn new(foo: impl Into<String>) -> Self {
        Self { foo: foo.into() }
    }
}

/// Same fields as [Labelled], different type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unlabelled {
    pub foo: String,
}

pub trait HasFoo {
    fn foo(&self) -> &str;
}

impl HasFoo for Labelled {
    fn foo(&self) -> &str {
        &self.foo
    }
}

impl HasFoo for Unlabelled {
    fn foo(&self) -> &str {
        &self.foo
    }
}

/// Accepts a `Labelled` and nothing else.
pub fn describe(value: &Labelled) -> &str {
    &value.foo
}

/// Accepts anything exposing `foo`.
pub fn describe_any<T: HasFoo + ?Sized>(value: &T) -> &str {
    value.foo()
}

impl From<Unlabelled> for Labelled {
    fn from(value: Unlabelled) -> Self {
        Self { foo: value.foo }
    }
}

#[cfg(test)]
mod tests {
    use super::{describe, describe_any, HasFoo, Labelled, Unlabelled};

    #[test]
    fn constructor_and_literal_are_the_same_type() {
        let c = Labelled::new("x");
        let d = Labelled {
            foo: "x".to_string(),
        };
        assert_eq!(c, d);
        assert_eq!(describe(&c), describe(&d));
    }

    #[test]
    fn look_alike_needs_an_explicit_conversion() {
        let u = Unlabelled {
            foo: "same shape".to_string(),
        };
        let converted = Labelled::from(u.clone());
        assert_eq!("same shape", describe(&converted));
        assert_eq!(describe_any(&u), describe_any(&converted));
    }

    #[test]
    fn capability_accepts_trait_objects() {
        let values: Vec<Box<dyn HasFoo>> = vec![
            Box::new(Labelled::new("one")),
            Box::new(Unlabelled {
                foo: "two".to_string(),
            }),
        ];
        let foos: Vec<&str> = values.iter().map(|v| describe_any(v.as_ref())).collect();
        assert_eq!(vec!["one", "two"], foos);
    }
}
