use stddate::{CompoundType, Date, StandardizeDetails, TokenKind};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(details: &StandardizeDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Standardizing: \"{}\"", details.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    print_tokens(details, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match (&details.result, details.encoded()) {
        (Some(date), Some(encoded)) => {
            println!("  {} {}", palette.dim("key:"), palette.bold(palette.paint(encoded, ansi::GREEN)));
            if let Some(production) = details.production {
                println!("  {} {}", palette.dim("production:"), palette.paint(production.name(), ansi::BLUE));
            }
            if date.kind != CompoundType::None {
                println!("  {} {}", palette.dim("type:"), palette.paint(date.kind.to_string(), ansi::BLUE));
            }
            print_date("first", &date.first, &palette);
            if date.kind != CompoundType::None {
                print_date("second", &date.second, &palette);
            }
        }
        _ => {
            println!("{}", palette.dim("  No date recognized"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • No year token (200..2200) and no month name in the input");
            println!("  • A day and month with nothing to anchor them to a year");
            println!("\n{}", palette.dim("  Tip: Set RUST_LOG=stddate=trace to see parser traces"));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Scan: {}  │  Parse: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.scan), ansi::CYAN),
        palette.dim(format!("{:?}", details.parse)),
    );
    println!();
}

fn print_tokens(details: &StandardizeDetails, palette: &ansi::Palette) {
    let tokens: Vec<_> = details.tokens.iter().filter(|t| t.kind != TokenKind::Eof).collect();
    if tokens.is_empty() {
        println!("{}", palette.dim("  (none)"));
        return;
    }
    for (idx, token) in tokens.iter().enumerate() {
        let kind = if token.kind == TokenKind::Noise {
            palette.dim(token.kind.name())
        } else {
            palette.paint(token.kind.name(), ansi::BLUE)
        };
        println!("  {} {} {}", palette.paint(format!("[{idx}]"), ansi::GRAY), palette.paint(&token.lexeme, ansi::YELLOW), kind);
    }
}

fn print_date(label: &str, date: &Date, palette: &ansi::Palette) {
    let mut qualifiers: Vec<String> = Vec::new();
    for qualifier in [date.modifier.to_string(), date.double.to_string(), date.quality.to_string()] {
        if !qualifier.is_empty() {
            qualifiers.push(qualifier);
        }
    }
    println!(
        "  {} {} {} {}",
        palette.dim(format!("{label}:")),
        palette.paint(date.year_mm_dd(), ansi::GREEN),
        palette.dim("│"),
        palette.paint(
            format!("{}..{} {}", date.start_year_mm_dd(), date.end_year_mm_dd(), qualifiers.join(" ")),
            ansi::CYAN
        ),
    );
}
