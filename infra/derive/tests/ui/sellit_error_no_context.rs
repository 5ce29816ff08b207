#[sellit_derive::sellit_error]
enum StorageError {
    Io { source: std::io::Error },
}

fn main() {}
