use crate::domain::ports::Printer;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Writes one line per printed value.
///
/// `Printer::print` has no failure condition, so write errors are logged and
/// dropped.
#[derive(Debug)]
pub struct LinePrinter<W: Write> {
    writer: RefCell<W>,
}

impl LinePrinter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LinePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write, T: Display> Printer<T> for LinePrinter<W> {
    fn print(&self, value: T) {
        let mut writer = self.writer.borrow_mut();
        if let Err(e) = writeln!(writer, "{}", value).and_then(|_| writer.flush()) {
            tracing::warn!("⚠️ Failed to write line: {}", e);
        }
    }
}

/// Prints a pair of names, one per line.
///
/// `print_two_names` is meant to be passed around as a method reference that
/// satisfies `BiConsumer<&str, &str>`.
pub struct PrintTwo<'p, P: ?Sized> {
    printer: &'p P,
}

impl<'p, P: Printer<String> + ?Sized> PrintTwo<'p, P> {
    pub fn new(printer: &'p P) -> Self {
        Self { printer }
    }

    pub fn print_two_names(&self, name1: &str, name2: &str) {
        self.printer.print(format!("name1 {}", name1));
        self.printer.print(format!("name2 {}", name2));
    }
}
