use rowsmith_generate::{FakeProvider, SemanticCategory, SemanticProvider};

fn main() {
    let mut provider = FakeProvider::new(42);
    for category in SemanticCategory::ALL {
        println!("{category}\t{}", provider.category(*category));
    }
}
