use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn one_or_more() {
    assert!(one_or_more_impl().is_ok());
}

fn one_or_more_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars("I < 'love ' >food!"))?;
    let mut scanner = ctx.start(pattern, Text::chars("I love love love food!"));

    assert!(scanner.match_().is_some());
    Ok(())
}
