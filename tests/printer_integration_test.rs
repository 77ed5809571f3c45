use arg_bag::utils::validation::Validate;
use arg_bag::{bag, ArgBag, CliConfig, Printer, Value, WriteSink};

fn render(bag: &ArgBag) -> String {
    let mut printer = Printer::new(WriteSink::new(Vec::new()));
    printer.print_bag(bag).unwrap();
    String::from_utf8(printer.into_inner().into_inner()).unwrap()
}

#[test]
fn test_demo_scenario_produces_exact_output() {
    let config = CliConfig {
        pairs: vec![],
        json_file: None,
        verbose: false,
    };

    let bag = config.build_bag().unwrap();
    let output = render(&bag);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "ArgBag");
    assert_eq!(lines[1], "name: Honeybeei");
    assert_eq!(lines[2], "age: 29");
    assert_eq!(lines[3], "city: Hamburg");
}

#[test]
fn test_cli_pairs_flow_end_to_end() {
    let config = CliConfig {
        pairs: vec![
            "city=Hamburg".to_string(),
            "age=29".to_string(),
            "name=Honeybeei".to_string(),
        ],
        json_file: None,
        verbose: false,
    };

    config.validate().unwrap();
    let bag = config.build_bag().unwrap();
    let output = render(&bag);

    // Pair-lines follow the order given on the command line
    assert_eq!(output, "ArgBag\ncity: Hamburg\nage: 29\nname: Honeybeei\n");
}

#[test]
fn test_empty_bag_prints_type_line_only() {
    let output = render(&bag! {});

    assert_eq!(output.lines().count(), 1);
    assert_eq!(output, "ArgBag\n");
}

#[test]
fn test_pair_line_count_equals_argument_count() {
    for n in 0..5 {
        let bag: ArgBag = (0..n).map(|i| (format!("k{}", i), i)).collect();

        let mut printer = Printer::new(WriteSink::new(Vec::new()));
        let count = printer.print_bag(&bag).unwrap();

        assert_eq!(count, n as usize);
    }
}

#[test]
fn test_repeated_invocations_are_identical() {
    let bag = bag! { name = "Honeybeei", age = 29, city = "Hamburg" };

    let first = render(&bag);
    let second = render(&bag);
    let third = render(&bag);

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[test]
fn test_heterogeneous_values_render_raw() {
    let bag = bag! { label = "x", count = 3, ratio = 0.5, flag = false };
    let output = render(&bag);

    assert_eq!(
        output,
        "ArgBag\nlabel: x\ncount: 3\nratio: 0.5\nflag: false\n"
    );
    assert_eq!(bag.get("ratio"), Some(&Value::Float(0.5)));
}

#[test]
fn test_malformed_pair_fails_validation() {
    let config = CliConfig {
        pairs: vec!["name=Honeybeei".to_string(), "broken".to_string()],
        json_file: None,
        verbose: false,
    };

    assert!(config.validate().is_err());
}
