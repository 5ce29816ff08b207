use sellit_derive::sellit_error;
use std::borrow::Cow;

#[sellit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<()> {
    Err::<(), _>(std::io::Error::other("disk")).context("reading demo")?;
    Ok(())
}

fn main() {
    let _ = read();
}
