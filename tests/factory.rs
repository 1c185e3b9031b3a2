use args_dialog::{ArgKind, ArgSpec, Binding, Error, Value, WidgetState, SPIN_BOUND};

#[test]
fn string_maps_to_text_seeded_with_default() {
    let b = Binding::build(&ArgSpec::string("freetext").default("Enter freetext here")).unwrap();
    match b.state() {
        WidgetState::Text { buf } => assert_eq!(buf, "Enter freetext here"),
        other => panic!("expected text state, got {other:?}"),
    }
    assert_eq!(b.value().unwrap(), Value::Str("Enter freetext here".into()));
}

#[test]
fn unbounded_int_gets_the_spin_range() {
    let b = Binding::build(&ArgSpec::int("int").default(100i64)).unwrap();
    match b.state() {
        WidgetState::Int { value, min, max } => {
            assert_eq!(*value, 100);
            assert_eq!(*min, -SPIN_BOUND);
            assert_eq!(*max, SPIN_BOUND);
        }
        other => panic!("expected int state, got {other:?}"),
    }
}

#[test]
fn declared_bounds_override_the_spin_range() {
    let spec = ArgSpec::new("n", ArgKind::Int { min: Some(0), max: Some(10) }).default(5i64);
    let b = Binding::build(&spec).unwrap();
    match b.state() {
        WidgetState::Int { value, min, max } => {
            assert_eq!((*value, *min, *max), (5, 0, 10));
        }
        other => panic!("expected int state, got {other:?}"),
    }
}

#[test]
fn float_maps_to_decimal_spin_box() {
    let b = Binding::build(&ArgSpec::float("float").default(1.5)).unwrap();
    assert_eq!(b.value().unwrap(), Value::Float(1.5));
}

#[test]
fn choices_keep_declaration_order_and_original_types() {
    let b = Binding::build(&ArgSpec::choice("pickInt", [1i64, 2, 3]).default(2i64)).unwrap();
    match b.state() {
        WidgetState::Choice { options, selected } => {
            assert_eq!(options.as_slice(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
            assert_eq!(*selected, Some(1));
        }
        other => panic!("expected choice state, got {other:?}"),
    }
    assert_eq!(b.value().unwrap(), Value::Int(2));
}

#[test]
fn choice_without_default_starts_unset() {
    let b = Binding::build(&ArgSpec::choice("pickText", ["a", "b"])).unwrap();
    assert_eq!(b.value().unwrap(), Value::Null);
}

#[test]
fn store_true_flag_maps_to_unchecked_checkbox() {
    let b = Binding::build(&ArgSpec::flag("storeTrue")).unwrap();
    assert_eq!(b.value().unwrap(), Value::Bool(false));
}

#[test]
fn store_false_flag_maps_to_checked_checkbox() {
    let b = Binding::build(&ArgSpec::flag_false("storeFalse")).unwrap();
    assert_eq!(b.value().unwrap(), Value::Bool(true));
}

#[test]
fn const_store_starts_armed_with_its_const() {
    let b = Binding::build(&ArgSpec::constant("storeConst", 999i64)).unwrap();
    assert_eq!(b.value().unwrap(), Value::Int(999));
}

#[test]
fn list_seeds_one_row_per_default_element() {
    let spec = ArgSpec::list("textList", ArgKind::Str)
        .default(vec![Value::Str("Hello".into()), Value::Str("world!".into())]);
    let b = Binding::build(&spec).unwrap();
    assert_eq!(
        b.value().unwrap(),
        Value::List(vec![Value::Str("Hello".into()), Value::Str("world!".into())])
    );
}

#[test]
fn custom_type_is_unsupported() {
    let err = Binding::build(&ArgSpec::custom("rgb", "rgb")).unwrap_err();
    match err {
        Error::UnsupportedType { arg, type_name } => {
            assert_eq!(arg, "rgb");
            assert_eq!(type_name, "rgb");
        }
        other => panic!("expected unsupported-type error, got {other:?}"),
    }
}

#[test]
fn empty_choice_set_is_unsupported() {
    let err = Binding::build(&ArgSpec::choice("empty", Vec::<Value>::new())).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
}

#[test]
fn list_of_lists_is_unsupported() {
    let inner = ArgKind::List { element: Box::new(ArgKind::Str) };
    let err = Binding::build(&ArgSpec::list("listList", inner)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
}
