#[sellit_derive::sellit_error]
struct StorageError {
    message: String,
}

fn main() {}
