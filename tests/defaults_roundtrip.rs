use args_dialog::{ArgDialog, ArgGroup, ArgSpec, Schema, Value};

fn demo_schema() -> Schema {
    Schema::new()
        .desc("Settings are grouped, but ungrouped items appear here.")
        .arg(ArgSpec::string("orphanedSetting").help("This setting does not belong to a group"))
        .group(
            ArgGroup::new("Strings")
                .desc("Text input")
                .arg(
                    ArgSpec::string("freetext")
                        .default("Enter freetext here")
                        .help("Type anything you want here"),
                )
                .arg(
                    ArgSpec::choice("pickText", ["Bee mine", "I choo-choo-choose you"])
                        .default("I choo-choo-choose you")
                        .help("Choose one of these"),
                ),
        )
        .group(
            ArgGroup::new("Numbers")
                .desc("Numeric input")
                .arg(ArgSpec::int("int").default(100i64).help("Decimals are not allowed"))
                .arg(ArgSpec::float("float").help("Decimals are allowed"))
                .arg(ArgSpec::choice("pickInt", [1i64, 2, 3]))
                .arg(ArgSpec::choice("pickFloat", [1.1, 22.22, 333.333]).default(333.333)),
        )
        .group(
            ArgGroup::new("Booleans")
                .desc("Booleans and consts")
                .arg(ArgSpec::flag("storeTrue"))
                .arg(ArgSpec::flag_false("storeFalse"))
                .arg(ArgSpec::constant("storeConst", 999i64)),
        )
}

#[test]
fn accepting_unchanged_yields_declared_defaults() {
    let dialog = ArgDialog::new(&demo_schema()).unwrap();
    let values = dialog.resolve().unwrap();

    assert!(values.is_null("orphanedSetting"));
    assert_eq!(values.str("freetext"), Some("Enter freetext here"));
    assert_eq!(values.str("pickText"), Some("I choo-choo-choose you"));
    assert_eq!(values.int("int"), Some(100));
    assert!(values.is_null("float"));
    assert!(values.is_null("pickInt"));
    assert_eq!(values.float("pickFloat"), Some(333.333));
    assert_eq!(values.flag("storeTrue"), Some(false));
    assert_eq!(values.flag("storeFalse"), Some(true));
    assert_eq!(values.int("storeConst"), Some(999));
}

#[test]
fn result_has_exactly_one_entry_per_specification() {
    let schema = demo_schema();
    let declared = schema.all_args().count();
    let values = ArgDialog::new(&schema).unwrap().resolve().unwrap();
    assert_eq!(values.len(), declared);
    for spec in schema.all_args() {
        assert!(values.get(spec.get_name()).is_some(), "missing entry for {}", spec.get_name());
    }
}

#[test]
fn entries_iterate_in_declaration_order() {
    let values = ArgDialog::new(&demo_schema()).unwrap().resolve().unwrap();
    let names: Vec<&str> = values.iter().map(|(n, _)| n).collect();
    assert_eq!(names.first(), Some(&"orphanedSetting"));
    assert_eq!(names.get(1), Some(&"freetext"));
    assert_eq!(names.last(), Some(&"storeConst"));
}

#[test]
fn edited_text_shows_up_in_the_result() {
    let mut dialog = ArgDialog::new(&demo_schema()).unwrap();
    dialog.binding_mut("freetext").unwrap().set_value(&Value::Str("hello".into()));
    let values = dialog.resolve().unwrap();
    assert_eq!(values.str("freetext"), Some("hello"));
}

#[test]
fn choice_results_are_always_members_of_the_choice_set() {
    let options = [Value::Float(1.1), Value::Float(22.22), Value::Float(333.333)];
    for opt in &options {
        let mut dialog = ArgDialog::new(&demo_schema()).unwrap();
        dialog.binding_mut("pickFloat").unwrap().set_value(opt);
        let values = dialog.resolve().unwrap();
        assert!(options.contains(values.get("pickFloat").unwrap()));
    }
}

#[test]
fn bounded_results_always_lie_within_bounds() {
    use args_dialog::ArgKind;
    for default in [-50i64, 0, 3, 50] {
        let schema = Schema::new()
            .arg(ArgSpec::new("n", ArgKind::Int { min: Some(0), max: Some(10) }).default(default));
        let values = ArgDialog::new(&schema).unwrap().resolve().unwrap();
        let n = values.int("n").unwrap();
        assert!((0..=10).contains(&n), "{n} escaped declared bounds");
    }
}
