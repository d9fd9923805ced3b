use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn code_decimal() {
    assert!(code_decimal_impl().is_ok());
}

fn code_decimal_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::bytes(b"( 104 101 108 108 111 )"))?;
    let mut scanner = ctx.start(pattern, Text::bytes(b"hello"));

    assert!(scanner.match_().is_some());
    Ok(())
}
