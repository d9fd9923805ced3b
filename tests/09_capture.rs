use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn capture() {
    assert!(capture_impl().is_ok());
}

fn capture_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars(
        "I have two ( 'apples' | 'oranges' ):fruit.",
    ))?;
    let mut scanner = ctx.start(pattern, Text::chars("I have two apples."));

    let m = scanner.match_().expect("anchored match");
    let fruit = m.get("fruit").expect("fruit capture");
    assert_eq!((fruit.loc, fruit.end), (11, 17));
    Ok(())
}
