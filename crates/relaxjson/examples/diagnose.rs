//! Parses each argument (or a few built-in samples) and prints either the
//! compact rendering of the value or a diagnosis of the syntax error.
//!
//! Run with
//!
//! ```bash
//! cargo run -p relaxjson --example diagnose -- '{"a": [1 2 3]}' '{a: 1}'
//! ```

use relaxjson::{ParserOptions, parse_with_options};

const SAMPLES: &[&str] = &[
    r#"{"name": "relaxjson", "tags": ["json" "lenient"]}"#,
    r#"{"name": relaxjson}"#,
    "{name: 1}",
    r#"[1, 2, 3"#,
    "   ",
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let options = ParserOptions {
        context_radius: 20,
        context_marker: " --> ",
    };

    for input in inputs {
        println!("input:   {input}");
        match parse_with_options(input, options) {
            Ok(Some(value)) => println!("value:   {value}"),
            Ok(None) => println!("value:   (none)"),
            Err(err) => {
                println!("error:   {err}");
                println!("code:    {}", err.code());
                println!("context: {}", err.context());
            }
        }
        println!();
    }
}
