use scanpat::Context;
use scanpat::cursor::Text;

#[test]
fn glob() {
    assert!(glob_impl().is_ok());
}

fn glob_impl() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let ctx = Context::init();

    let splat = ctx.compile(Text::chars("< ~'/' ~'.' char >"))?;
    ctx.define("splat", (*splat).clone());

    let quark = ctx.compile(Text::chars("( char )"))?;
    ctx.define("quark", (*quark).clone());

    let pattern = ctx.compile(Text::chars("*/*/*.txt"))?;
    let mut scanner = ctx.start(pattern, Text::chars("dir1/dir2/thing.txt"));

    assert!(scanner.match_().is_some());
    Ok(())
}
