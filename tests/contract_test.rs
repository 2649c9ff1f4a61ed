use anyhow::Result;
use approx::assert_relative_eq;
use callable_contracts::{
    BiConsumer, BinaryChooser, ContractError, DecimalParser, LinePrinter, NoShow, Printer,
    RandomChooser, Supplier, Transformer, WithNoShow, DEFAULT_NO_SHOW,
};
use std::cell::RefCell;

/// 以 closure 滿足所有契約
#[test]
fn test_inline_closures_satisfy_every_contract() {
    let printed = RefCell::new(Vec::new());
    let printer = |line: String| printed.borrow_mut().push(line);
    printer.print("Hello World".to_string());

    let parse = |text: &str| text.trim().parse::<f64>();
    let parsed = parse.transform("123.45").unwrap();
    assert_relative_eq!(parsed, 123.45);

    let coin = |a: &'static str, _b: &'static str| a;
    assert_eq!(coin.choose("Meta", "Apple"), "Meta");

    let eat = || "Eating a burger";
    assert_eq!(eat.supply(), "Eating a burger");

    let pair = |a: &str, b: &str| printed.borrow_mut().push(format!("{a} & {b}"));
    pair.consume("Alice", "Bob");

    assert_eq!(
        *printed.borrow(),
        vec!["Hello World".to_string(), "Alice & Bob".to_string()]
    );
}

#[test]
fn test_decimal_parser_reports_parse_error() -> Result<()> {
    let parser = DecimalParser::new();
    assert_relative_eq!(parser.transform("123.45")?, 123.45);

    match parser.transform("abc") {
        Err(ContractError::Parse { input, .. }) => assert_eq!(input, "abc"),
        other => panic!("expected parse error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_printer_writes_one_representation_per_call() {
    let printer = LinePrinter::new(Vec::new());
    printer.print(3.5);
    printer.print("three and a half");

    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(output, "3.5\nthree and a half\n");
}

#[test]
fn test_random_chooser_only_returns_inputs_and_hits_both() {
    let chooser = RandomChooser::from_time();
    let mut firsts = 0;
    let mut seconds = 0;

    for _ in 0..2_000 {
        match chooser.choose("a", "b") {
            "a" => firsts += 1,
            "b" => seconds += 1,
            other => panic!("chooser returned a third value: {other}"),
        }
    }

    assert!(firsts > 0);
    assert!(seconds > 0);
}

#[test]
fn test_no_show_override_leaves_choice_untouched() {
    let chooser = WithNoShow::new(
        RandomChooser::seeded(21),
        NoShow::custom(|| "Match cancelled".to_string()),
    );
    let reference = RandomChooser::seeded(21);

    for i in 0..32 {
        assert_eq!(chooser.choose(i, i + 100), reference.choose(i, i + 100));
    }
    assert_eq!(
        BinaryChooser::<i32>::no_show_message(&chooser),
        "Match cancelled"
    );
    assert_eq!(
        BinaryChooser::<i32>::no_show_message(&reference),
        DEFAULT_NO_SHOW
    );
}
