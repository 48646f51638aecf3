//! CLI command for checking catalog colors

use chemcore::color::format_argb;

use crate::cli::GlobalOptions;

pub fn execute(options: &GlobalOptions, hex: &str, name: Option<&str>) -> anyhow::Result<()> {
    let codec = options.load_config()?.color_codec();
    let (argb, ok) = match name {
        Some(name) => codec.resolve(name, hex),
        None => chemcore::color::parse_color(hex),
    };

    println!("{}", format_argb(argb));
    if !ok {
        println!("invalid color {hex:?}, using fallback");
    }
    Ok(())
}
