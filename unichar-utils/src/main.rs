use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use unichar::{character, surrogate, traverse, Codepoint, UnicodeBlock, UnicodeScript};

const HELP: &str = "\
Usage: uc-info [OPTIONS] [TEXT]

Input options:
    --text TEXT                             Set input text
    --text-file PATH                        Set input text file-name (\"-\" for stdin)
    -u, --unicodes LIST                     Set input Unicode codepoints
                                            Examples: 'U+0056,U+0057'
                                            Surrogates are kept as single units
    --utf16-file PATH                       Set raw UTF-16 input file-name (\"-\" for stdin)
    --big-endian                            Read --utf16-file as big endian [default: little]

Query options:
    --block NAME                            Print the range of a Unicode block
    --script NAME                           Print the names of a Unicode script
    --count                                 Print code unit and code point counts only

Other options:
    -h, --help                              Show help options
    --version                               Show version number
    --unicode-version                       Show the supported Unicode version

The RUST_LOG environment variable controls diagnostics [default: warn].
";

#[derive(Debug)]
struct Args {
    help: bool,
    version: bool,
    unicode_version: bool,
    // Input options
    text: Option<String>,
    text_file: Option<PathBuf>,
    unicodes: Option<Vec<u16>>,
    utf16_file: Option<PathBuf>,
    big_endian: bool,
    // Query options
    block: Option<UnicodeBlock>,
    script: Option<UnicodeScript>,
    count: bool,
    // Positional
    free: Vec<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let parsed = Args {
        help: args.contains(["-h", "--help"]),
        version: args.contains("--version"),
        unicode_version: args.contains("--unicode-version"),
        // Input options
        text: args.opt_value_from_str("--text")?,
        text_file: args.opt_value_from_str("--text-file")?,
        unicodes: args.opt_value_from_fn(["-u", "--unicodes"], parse_unicodes)?,
        utf16_file: args.opt_value_from_str("--utf16-file")?,
        big_endian: args.contains("--big-endian"),
        // Query options
        block: args.opt_value_from_str("--block")?,
        script: args.opt_value_from_str("--script")?,
        count: args.contains("--count"),
        // Positional
        free: args
            .finish()
            .iter()
            .map(|s| s.to_string_lossy().to_string())
            .collect(),
    };

    Ok(parsed)
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {e}.");
            std::process::exit(1);
        }
    };
    log::debug!("{args:?}");

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.help {
        print!("{HELP}");
        return;
    }

    if args.unicode_version {
        let (major, minor, update) = unichar::UNICODE_VERSION;
        println!("{major}.{minor}.{update}");
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.block.is_some() || args.script.is_some() {
        if let Some(block) = args.block {
            print_block(&mut out, block).unwrap_or_else(|e| exit_on_io(&e));
        }
        if let Some(script) = args.script {
            writeln!(out, "{} {}", script.name(), script.short_name())
                .unwrap_or_else(|e| exit_on_io(&e));
        }
        out.flush().unwrap_or_else(|e| exit_on_io(&e));
        return;
    }

    let units = read_input(&args);
    let count = traverse::code_point_count(units.as_slice(), 0, units.len()).unwrap_or(0);
    log::debug!("{} code units, {count} code points", units.len());

    let mut iter = traverse::code_points(units.as_slice());
    loop {
        let offset = iter.offset();
        let Some(cp) = iter.next() else { break };
        if cp < 0x10000 && surrogate::is_surrogate(cp as u16) {
            log::warn!("unpaired surrogate U+{cp:04X} at code unit {offset}");
        }
        if !args.count {
            writeln!(out, "{}", describe(cp)).unwrap_or_else(|e| exit_on_io(&e));
        }
    }

    if args.count {
        writeln!(out, "units: {}, code points: {count}", units.len())
            .unwrap_or_else(|e| exit_on_io(&e));
    }
    out.flush().unwrap_or_else(|e| exit_on_io(&e));
}

fn exit_on_io(e: &io::Error) -> ! {
    eprintln!("Error: writing output: {e}");
    std::process::exit(1);
}

fn print_block(out: &mut impl Write, block: UnicodeBlock) -> io::Result<()> {
    match block.range() {
        Some(range) => writeln!(
            out,
            "{} ({}) U+{:04X}..U+{:04X}",
            block.name(),
            block.canonical_name(),
            range.start(),
            range.end()
        ),
        None => writeln!(out, "{} (no code points)", block.name()),
    }
}

/// Resolves the input options to a buffer of UTF-16 code units.
fn read_input(args: &Args) -> Vec<u16> {
    if let Some(ref path) = args.utf16_file {
        let bytes = read_bytes(path);
        return decode_utf16_bytes(&bytes, args.big_endian);
    }

    let text = if let Some(ref path) = args.text_file {
        if path == Path::new("-") {
            read_stdin()
        } else {
            std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error: cannot read '{}': {e}", path.display());
                std::process::exit(1);
            })
        }
    } else if let Some(ref units) = args.unicodes {
        return units.clone();
    } else if let Some(ref text) = args.text {
        text.clone()
    } else if !args.free.is_empty() {
        args.free.join(" ")
    } else {
        read_stdin()
    };

    text.encode_utf16().collect()
}

fn read_bytes(path: &Path) -> Vec<u8> {
    if path == Path::new("-") {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes).unwrap_or_else(|e| {
            eprintln!("Error: reading stdin: {e}");
            std::process::exit(1);
        });
        bytes
    } else {
        std::fs::read(path).unwrap_or_else(|e| {
            eprintln!("Error: cannot read '{}': {e}", path.display());
            std::process::exit(1);
        })
    }
}

fn decode_utf16_bytes(bytes: &[u8], big_endian: bool) -> Vec<u16> {
    let even = bytes.len() & !1;
    if even != bytes.len() {
        log::warn!("ignoring trailing odd byte of UTF-16 input");
    }

    let mut units: Vec<u16> = bytemuck::pod_collect_to_vec(&bytes[..even]);
    if big_endian != cfg!(target_endian = "big") {
        for u in &mut units {
            *u = surrogate::reverse_bytes(*u);
        }
    }
    if units.first() == Some(&0xFEFF) {
        log::debug!("skipping byte order mark");
        units.remove(0);
    } else if units.first() == Some(&0xFFFE) {
        log::warn!("byte order mark suggests the other endianness");
    }
    units
}

fn read_stdin() -> String {
    let mut text = String::new();
    io::stdin().lock().read_to_string(&mut text).unwrap_or_else(|e| {
        eprintln!("Error: reading stdin: {e}");
        std::process::exit(1);
    });
    text
}

/// Parses `U+0041,U+D800` into code units, keeping lone surrogates.
fn parse_unicodes(s: &str) -> Result<Vec<u16>, String> {
    let mut units = Vec::new();
    for token in s.split([',', ' ', ';', '\t']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let hex = token
            .strip_prefix("U+")
            .or_else(|| token.strip_prefix("u+"))
            .or_else(|| token.strip_prefix("0x"))
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        let u = u32::from_str_radix(hex, 16)
            .map_err(|_| format!("'{token}' is not a valid codepoint"))?;
        let chars = surrogate::to_chars(u).map_err(|e| format!("'{token}': {e}"))?;
        units.extend_from_slice(chars.as_slice());
    }
    Ok(units)
}

fn describe(cp: Codepoint) -> String {
    use std::fmt::Write;

    let mut s = format!(
        "U+{cp:04X} {} {}",
        character::get_type(cp).abbreviation(),
        character::directionality(cp).abbreviation()
    );

    match UnicodeBlock::of(cp) {
        Ok(Some(block)) => write!(s, " {block}").unwrap(),
        _ => s.push_str(" NO_BLOCK"),
    }
    if let Ok(script) = UnicodeScript::of(cp) {
        write!(s, " {script}").unwrap();
    }

    let lower = character::to_lower_case(cp);
    let upper = character::to_upper_case(cp);
    let title = character::to_title_case(cp);
    if lower != cp {
        write!(s, " lower=U+{lower:04X}").unwrap();
    }
    if upper != cp {
        write!(s, " upper=U+{upper:04X}").unwrap();
    }
    if title != upper {
        write!(s, " title=U+{title:04X}").unwrap();
    }
    let full = character::to_upper_case_multi(cp);
    if full.len() > 1 {
        s.push_str(" full-upper=");
        for (i, u) in full.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            write!(s, "U+{u:04X}").unwrap();
        }
    }

    match character::numeric_value(cp) {
        unichar::NumericValue::Integer(v) => write!(s, " numeric={v}").unwrap(),
        unichar::NumericValue::NonInteger => s.push_str(" numeric=non-integer"),
        unichar::NumericValue::None => {}
    }

    let flags = unichar::PropertyDatabase::properties(cp).flags();
    let names = flags
        .iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect::<Vec<_>>();
    if !names.is_empty() {
        write!(s, " [{}]", names.join(",")).unwrap();
    }
    s
}
