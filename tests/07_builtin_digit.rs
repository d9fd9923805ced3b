use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn builtin_digit() {
    assert!(builtin_digit_impl().is_ok());
}

fn builtin_digit_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars("I ate ( digit ) tacos."))?;

    let mut three = ctx.start(pattern.clone(), Text::chars("I ate 3 tacos."));
    assert!(three.match_().is_some());

    let mut letter = ctx.start(pattern, Text::chars("I ate N tacos."));
    assert!(letter.match_().is_none());
    Ok(())
}
