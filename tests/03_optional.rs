use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn optional() {
    assert!(optional_impl().is_ok());
}

fn optional_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars("I eat [ 'blueberry ' ]pancakes."))?;

    let mut without = ctx.start(pattern.clone(), Text::chars("I eat pancakes."));
    assert!(without.match_().is_some());

    let mut with = ctx.start(pattern, Text::chars("I eat blueberry pancakes."));
    assert!(with.match_().is_some());
    Ok(())
}
