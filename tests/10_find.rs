use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn find() {
    assert!(find_impl().is_ok());
}

fn find_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();
    let pattern = ctx.compile(Text::chars("( 'apple' | 'orange' | 'pear' )"))?;
    let mut scanner = ctx.start(pattern, Text::chars("I ate an apple."));

    let m = scanner.find().expect("a match somewhere in the haystack");
    assert_eq!((m.loc, m.end), (9, 14));
    Ok(())
}
