use args_dialog::{present, ArgSpec, Schema};

fn main() {
    env_logger::init();

    let schema = Schema::new()
        .desc("A few top-level settings")
        .arg(ArgSpec::string("name").default("world").help("Who to greet"))
        .arg(ArgSpec::int("count").default(1i64).help("How many times"))
        .arg(ArgSpec::flag("loud").help("Shout it"));

    match present(&schema) {
        Ok(outcome) => match outcome.values() {
            Some(values) => {
                for (name, value) in values.iter() {
                    println!("{name} = {}", value.display());
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
