use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn positive_lookahead() {
    assert!(positive_lookahead_impl().is_ok());
}

fn positive_lookahead_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars(
        "I eat ^( 't' )( 'tacos' | 'enchiladas' | 'fries' ).",
    ))?;

    let mut tacos = ctx.start(pattern.clone(), Text::chars("I eat tacos."));
    assert!(tacos.match_().is_some());

    let mut fries = ctx.start(pattern, Text::chars("I eat fries."));
    assert!(fries.match_().is_none());
    Ok(())
}
