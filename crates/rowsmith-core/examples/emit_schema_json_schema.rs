use rowsmith_core::SchemaSpec;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(SchemaSpec);
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
