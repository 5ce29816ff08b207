#[sellit_derive::sellit_error]
enum StorageError {
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
