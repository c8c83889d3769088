use lipsync::{ConversionVerbose, SegmentSummary};

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

pub fn print_run(input: &str, tables: &str, res: &ConversionVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("👄 Converting: \"{}\"", input.trim()), ansi::CYAN)));
    println!("  {} {}", palette.dim("tables:"), palette.paint(tables, ansi::BLUE));

    println!("\n{}", palette.paint("━━━ Normalized ━━━", ansi::GRAY));
    println!("  {}", details.normalized);
    if !details.traits.is_empty() {
        println!("  {} {}", palette.dim("traits:"), palette.dim(format!("{:?}", details.traits)));
    }

    println!("\n{}", palette.paint("━━━ Segments ━━━", ansi::GRAY));
    print_segments(&details.segments, &palette);

    println!("\n{}", palette.paint("━━━ Visemes ━━━", ansi::GRAY));
    if res.sequence.is_empty() {
        println!("{}", palette.dim("  No visemes produced"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • Input contains no characters covered by the tables");
        println!("  • Fallback phonemes have no viseme mapping");
        println!("\n{}", palette.dim("  Tip: Set RUST_LOG=lipsync=trace to see skipped characters"));
    } else {
        for (idx, (viseme, start, duration)) in res.sequence.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{:>3}]", idx), ansi::GRAY),
                palette.bold(palette.paint(format!("{:<3}", viseme.as_str()), ansi::GREEN)),
                palette.dim("│"),
                palette.paint(format!("t={:>7.2}  d={:.2}", start, duration), ansi::YELLOW),
            );
        }
    }
    if details.dropped > 0 || details.skipped > 0 {
        println!(
            "  {} {}  {} {}",
            palette.dim("dropped:"),
            palette.paint(details.dropped.to_string(), ansi::YELLOW),
            palette.dim("skipped:"),
            palette.paint(details.skipped.to_string(), ansi::YELLOW)
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Normalize: {}  │  Rewrite: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.normalize), ansi::CYAN),
        palette.paint(format!("{:?}", details.rewrite), ansi::CYAN),
        palette.dim(format!("{:?}", details.resolve)),
    );
    println!();
}

fn print_segments(segments: &[SegmentSummary], palette: &ansi::Palette) {
    if segments.is_empty() {
        println!("{}", palette.dim("  (none)"));
        return;
    }
    let line: Vec<String> = segments
        .iter()
        .map(|s| {
            if s.kind == "phoneme" {
                palette.paint(format!("/{}/", s.text), ansi::BLUE)
            } else {
                palette.dim(format!("\"{}\"", s.text))
            }
        })
        .collect();
    println!("  {}", line.join(" "));
}
