//! Loads a request document and prints each encoded message.
//!
//! Usage: `inspect_requests <file.yaml|file.json|literal JSON> [message size]`
//! Set `RUST_LOG=pdp_requests=debug` to see loader logs.

use pdp_requests::{decode_request, load, AttributeValue, LoadOptions};
use tracing_subscriber::EnvFilter;

fn format_value(v: &AttributeValue) -> String {
    match v {
        AttributeValue::Boolean(b) => format!("{}", b),
        AttributeValue::String(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        AttributeValue::Integer(i) => format!("{}", i),
        AttributeValue::Float(f) => format!("{:.6}", f),
        AttributeValue::Address(a) => format!("ADDRESS({})", a),
        AttributeValue::Network(n) => format!("NETWORK({})", n),
        AttributeValue::Domain(d) => format!("DOMAIN({})", d),
        AttributeValue::ListOfStrings(l) => format!("{:?}", l),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let data = args
        .next()
        .unwrap_or_else(|| r#"{"requests": [{"flag": true, "tags": ["a", "b"]}]}"#.to_string());
    let mut options = LoadOptions::default();
    if let Some(size) = args.next() {
        match size.parse() {
            Ok(size) => options = options.with_message_size(size),
            Err(e) => {
                eprintln!("error: invalid message size {:?}: {}", size, e);
                std::process::exit(2);
            }
        }
    }

    let msgs = match load(&data, &options) {
        Ok(msgs) => msgs,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Requests ({}) ===", msgs.len());
    for (i, msg) in msgs.iter().enumerate() {
        let assignments = match decode_request(&msg.body) {
            Ok(assignments) => assignments,
            Err(e) => {
                eprintln!("error: request {} failed to decode: {}", i + 1, e);
                std::process::exit(1);
            }
        };
        println!("[{}] {} bytes, {} attributes", i + 1, msg.body.len(), assignments.len());
        for a in &assignments {
            println!("      {}: {} = {}", a.name, a.value.type_of(), format_value(&a.value));
        }
    }
}
