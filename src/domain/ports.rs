//! Single-operation capability contracts.
//!
//! Every trait here has exactly one required method, and a blanket impl lets
//! any closure (or method reference wrapped in a closure) with the matching
//! signature stand in for it.

use std::borrow::Cow;

/// Placeholder printed by [`BinaryChooser::no_show`] when nothing overrides it.
pub const DEFAULT_NO_SHOW: &str = "No Game";

/// Consumes a value and produces nothing observable except output.
pub trait Printer<T> {
    fn print(&self, value: T);
}

impl<T, F> Printer<T> for F
where
    F: Fn(T),
{
    fn print(&self, value: T) {
        self(value)
    }
}

/// Converts a value of one type into another, possibly failing.
///
/// The contract does not recover from failures; the error is handed back to
/// the caller unchanged.
///
/// # Example
///
/// ```
/// use callable_contracts::domain::ports::Transformer;
///
/// let halve = |n: i32| -> Result<i32, String> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
/// };
///
/// assert_eq!(halve.transform(10), Ok(5));
/// assert!(halve.transform(3).is_err());
/// ```
pub trait Transformer<A> {
    type Output;
    type Error;

    fn transform(&self, value: A) -> Result<Self::Output, Self::Error>;
}

impl<A, B, E, F> Transformer<A> for F
where
    F: Fn(A) -> Result<B, E>,
{
    type Output = B;
    type Error = E;

    fn transform(&self, value: A) -> Result<B, E> {
        self(value)
    }
}

/// Picks one of two values of the same type.
///
/// Implementations must return one of the two inputs, never a third value.
/// The no-show behavior is optional; the default prints [`DEFAULT_NO_SHOW`].
pub trait BinaryChooser<T> {
    fn choose(&self, a: T, b: T) -> T;

    fn no_show_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(DEFAULT_NO_SHOW)
    }

    fn no_show(&self) {
        println!("{}", self.no_show_message());
    }
}

impl<T, F> BinaryChooser<T> for F
where
    F: Fn(T, T) -> T,
{
    fn choose(&self, a: T, b: T) -> T {
        self(a, b)
    }
}

/// Produces a value from nothing.
pub trait Supplier<T> {
    fn supply(&self) -> T;
}

impl<T, F> Supplier<T> for F
where
    F: Fn() -> T,
{
    fn supply(&self) -> T {
        self()
    }
}

/// Consumes two values.
pub trait BiConsumer<A, B> {
    fn consume(&self, a: A, b: B);
}

impl<A, B, F> BiConsumer<A, B> for F
where
    F: Fn(A, B),
{
    fn consume(&self, a: A, b: B) {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_satisfies_printer() {
        let seen = RefCell::new(Vec::new());
        let printer = |value: &str| seen.borrow_mut().push(value.to_string());

        printer.print("Hello World");

        assert_eq!(*seen.borrow(), vec!["Hello World".to_string()]);
    }

    #[test]
    fn test_closure_satisfies_transformer() {
        let parse = |text: &str| text.parse::<i64>();

        assert_eq!(parse.transform("42"), Ok(42));
        assert!(parse.transform("forty-two").is_err());
    }

    #[test]
    fn test_closure_chooser_uses_default_no_show() {
        let first = |a: u8, _b: u8| a;

        assert_eq!(first.choose(1, 2), 1);
        assert_eq!(BinaryChooser::<u8>::no_show_message(&first), DEFAULT_NO_SHOW);

        BinaryChooser::<u8>::no_show(&first);
    }

    #[test]
    fn test_closure_satisfies_supplier_and_bi_consumer() {
        let eat = || "Eating a burger".to_string();
        assert_eq!(eat.supply(), "Eating a burger");

        let pairs = RefCell::new(Vec::new());
        let record = |a: &str, b: &str| pairs.borrow_mut().push(format!("{a}+{b}"));
        record.consume("x", "y");
        assert_eq!(*pairs.borrow(), vec!["x+y".to_string()]);
    }
}
