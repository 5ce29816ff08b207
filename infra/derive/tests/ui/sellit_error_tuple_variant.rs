#[sellit_derive::sellit_error]
enum StorageError {
    Io(std::io::Error),
}

fn main() {}
