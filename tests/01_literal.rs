use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn literal() {
    assert!(literal_impl().is_ok());
}

fn literal_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars("Literal text, ( 'not literal' )."))?;
    let mut scanner = ctx.start(pattern, Text::chars("Literal text, not literal."));

    assert!(scanner.match_().is_some());
    Ok(())
}
