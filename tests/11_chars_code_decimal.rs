use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn chars_code_decimal() {
    assert!(chars_code_decimal_impl().is_ok());
}

fn chars_code_decimal_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars("( 20170 26085 12399 )"))?;
    let mut scanner = ctx.start(pattern, Text::chars("今日は"));

    assert!(scanner.match_().is_some());
    Ok(())
}
