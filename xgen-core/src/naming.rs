//! Name-case transforms used to derive symbol, file and package names.
//!
//! Words are separated by `_` or `/`. Case mapping is ASCII-only: any
//! non-ASCII character is passed through untouched.

use crate::error::{Error, Result};

const SEPARATORS: [char; 2] = ['_', '/'];

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_uppercase().to_string() + chars.as_str(),
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(is_separator).map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    decapitalize(&to_pascal_case(s))
}

/// Convert a string to snake_case (e.g., "Blog/Post" -> "blog_post")
pub fn to_snake_case(s: &str) -> String {
    s.split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Check that `name` is a usable identifier for a package or resource.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name is empty"));
    }
    if name.chars().all(is_separator) {
        return Err(Error::invalid_name(name, "name contains only separators"));
    }
    if name
        .trim_start_matches(is_separator)
        .starts_with(|c: char| c.is_ascii_digit())
    {
        return Err(Error::invalid_name(name, "name starts with a digit"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| c.is_ascii() && !c.is_ascii_alphanumeric() && !is_separator(*c))
    {
        return Err(Error::invalid_name(
            name,
            format!("character '{}' is not allowed", bad.escape_default()),
        ));
    }
    Ok(())
}

/// Check that `name` can be used as an application name.
///
/// Application names end up as a directory name and as the import root of
/// the generated code, so they are more permissive than identifiers
/// (`my-api` is fine) but cannot contain separators or whitespace.
pub fn validate_app_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "application name is empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_name(name, "application name must be a directory name"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| c.is_whitespace() || c.is_control() || *c == '/' || *c == '\\')
    {
        return Err(Error::invalid_name(
            name,
            format!("character '{}' is not allowed", bad.escape_default()),
        ));
    }
    Ok(())
}

/// Every case variant of one base name.
///
/// All fields are computed once in [`NameForms::new`] and are pure functions
/// of the base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForms {
    /// The name exactly as given
    pub raw: String,
    /// `user_profile` -> `UserProfile`
    pub pascal: String,
    /// `user_profile` -> `userProfile`
    pub camel: String,
    /// `blog/Post` -> `blog_post`
    pub snake: String,
    /// `blog/Post` -> `blog/post`, used for file names
    pub lower: String,
    /// `userProfile` -> `UserProfile`, only the first character changes
    pub title: String,
}

impl NameForms {
    pub fn new(name: &str) -> Result<Self> {
        validate_identifier(name)?;

        let pascal = to_pascal_case(name);
        Ok(Self {
            raw: name.to_string(),
            camel: decapitalize(&pascal),
            pascal,
            snake: to_snake_case(name),
            lower: name.to_ascii_lowercase(),
            title: capitalize(name),
        })
    }
}

/// The case variants a package segment needs: its raw form plus a
/// PascalCase/camelCase pair for import aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNames {
    pub raw: String,
    pub pascal: String,
    pub camel: String,
}

impl PackageNames {
    pub fn new(name: &str) -> Result<Self> {
        validate_identifier(name)?;

        let pascal = to_pascal_case(name);
        Ok(Self {
            raw: name.to_string(),
            camel: decapitalize(&pascal),
            pascal,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo/bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case("__user"), "User");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("get_user_id"), "getUserId");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("login_user"), "login_user");
        assert_eq!(to_snake_case("Blog/Post"), "blog_post");
        assert_eq!(to_snake_case("a__b"), "a_b");
    }

    #[test]
    fn test_name_forms() {
        let forms = NameForms::new("login_user").unwrap();
        assert_eq!(forms.pascal, "LoginUser");
        assert_eq!(forms.camel, "loginUser");
        assert_eq!(forms.snake, "login_user");
        assert_eq!(forms.lower, "login_user");
        assert_eq!(forms.title, "Login_user");
    }

    #[test]
    fn test_name_forms_mixed_case() {
        let forms = NameForms::new("userProfile").unwrap();
        assert_eq!(forms.pascal, "UserProfile");
        assert_eq!(forms.camel, "userProfile");
        assert_eq!(forms.lower, "userprofile");
        assert_eq!(forms.title, "UserProfile");
    }

    #[test]
    fn test_name_forms_non_ascii_passthrough() {
        let forms = NameForms::new("café_über").unwrap();
        assert_eq!(forms.pascal, "Caféüber");
        assert_eq!(forms.snake, "café_über");
    }

    #[test]
    fn test_package_names() {
        let names = PackageNames::new("order_item").unwrap();
        assert_eq!(names.raw, "order_item");
        assert_eq!(names.pascal, "OrderItem");
        assert_eq!(names.camel, "orderItem");
    }

    #[test]
    fn test_invalid_names() {
        let names = [
            "", "_", "/_/", "9lives", "_9lives", "/9lives", "my-app", "user name", "a.b",
        ];
        for name in names {
            let err = NameForms::new(name).unwrap_err();
            assert!(
                matches!(*err, Error::InvalidName { .. }),
                "expected InvalidName for {name:?}"
            );
        }
    }

    #[test]
    fn test_validate_app_name() {
        assert!(validate_app_name("shop").is_ok());
        assert!(validate_app_name("my-api").is_ok());
        assert!(validate_app_name("").is_err());
        assert!(validate_app_name("..").is_err());
        assert!(validate_app_name("a/b").is_err());
        assert!(validate_app_name("my app").is_err());
    }

    fn identifier() -> impl Strategy<Value = String> {
        "_?[a-zA-Z][a-zA-Z0-9]{0,8}(_[a-zA-Z0-9]{1,8}){0,3}"
    }

    proptest! {
        #[test]
        fn pascal_and_camel_agree(name in identifier()) {
            let forms = NameForms::new(&name).unwrap();
            let pascal_first = forms.pascal.chars().next().unwrap();
            let camel_first = forms.camel.chars().next().unwrap();

            prop_assert!(pascal_first.is_ascii_uppercase());
            prop_assert!(camel_first.is_ascii_lowercase());
            prop_assert_eq!(decapitalize(&forms.pascal), forms.camel);
        }

        #[test]
        fn forms_are_deterministic(name in identifier()) {
            prop_assert_eq!(NameForms::new(&name).unwrap(), NameForms::new(&name).unwrap());
            prop_assert_eq!(to_pascal_case(&name), to_pascal_case(&name));
        }

        #[test]
        fn snake_is_lowercase(name in identifier()) {
            let snake = to_snake_case(&name);
            prop_assert!(!snake.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
