//! The full grouped-settings tour: every widget kind the factory maps,
//! pre-seeded with an overlay the way a CLI parse result would be.

use args_dialog::{ArgDialog, ArgGroup, ArgKind, ArgSpec, DialogOptions, DialogValues, Schema, Value};

fn schema() -> Schema {
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
                .arg(ArgSpec::choice("pickInt", [1i64, 2, 3]).help("Choose one of these"))
                .arg(
                    ArgSpec::choice("pickFloat", [1.1, 22.22, 333.333])
                        .default(333.333)
                        .help("You can only pick one"),
                ),
        )
        .group(
            ArgGroup::new("Booleans")
                .desc("Booleans and consts")
                .arg(ArgSpec::flag("storeTrue"))
                .arg(ArgSpec::flag_false("storeFalse"))
                .arg(ArgSpec::constant("storeConst", 999i64)),
        )
        .group(
            ArgGroup::new("List types")
                .desc("Lists of types")
                .arg(
                    ArgSpec::list("textList", ArgKind::Str)
                        .default(vec![Value::Str("Hello".into()), Value::Str("world!".into())]),
                )
                .arg(ArgSpec::list("intList", ArgKind::Int { min: None, max: None }))
                .arg(ArgSpec::list("floatList", ArgKind::Float { min: None, max: None })),
        )
}

fn main() {
    env_logger::init();

    // values obtained elsewhere (e.g. an earlier parse) can pre-fill the form
    let mut overlay = DialogValues::new();
    overlay.insert("freetext", Value::Str("seeded from the command line".into()));

    let options = DialogOptions { title: "Demo settings".to_string(), ..DialogOptions::default() };
    let schema = schema();

    let outcome = ArgDialog::with_options(&schema, &options)
        .map(|mut dialog| {
            dialog.set_values(&overlay);
            dialog
        })
        .and_then(ArgDialog::present);

    match outcome {
        Ok(outcome) => match outcome.values() {
            Some(values) => {
                println!("Values:");
                for (name, value) in values.iter() {
                    println!("  {name} = {}", value.display());
                }
            }
            None => println!("User cancelled"),
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
