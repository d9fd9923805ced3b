use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn negative_lookahead() {
    assert!(negative_lookahead_impl().is_ok());
}

fn negative_lookahead_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars(
        "I drink~( ' wine' )[ ' water' | ' beer' ].",
    ))?;

    let mut water = ctx.start(pattern.clone(), Text::chars("I drink water."));
    assert!(water.match_().is_some());

    let mut wine = ctx.start(pattern, Text::chars("I drink wine."));
    assert!(wine.match_().is_none());
    Ok(())
}
