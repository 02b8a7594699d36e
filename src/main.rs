use tracing_subscriber::EnvFilter;

const SINGLES: &str = "!#$%&*+,-./:;>=<?@^_`|~\\№";

const PAIRS: &[(char, char)] = &[
    ('(', ')'),
    ('«', '»'),
    ('„', '“'),
    ('‘', '’'),
    ('"', '"'),
    ('[', ']'),
    ('{', '}'),
    ('\'', '\''),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let raw = sample_document();
    let clean = tidystr::normalize(&raw);
    for line in report(&raw, &clean) {
        println!("{line}");
    }
}

/// Every managed sign between two words, badly spaced, once with letters and
/// once with digits. Each case is a header line, a sample line and a blank.
fn sample_document() -> String {
    let mut doc = String::new();
    for word in ["string", "000000"] {
        for sign in SINGLES.chars() {
            doc.push_str(&format!("case for [{sign}]:\n"));
            doc.push_str(&format!("{word}  {sign}  {word}  \n\n"));
        }
        for &(open, close) in PAIRS {
            doc.push_str(&format!("case for [{open} {close}]:\n"));
            doc.push_str(&format!("{word}  {open}  {word}  {close}  {word}\n\n"));
        }
    }
    doc
}

fn report(raw: &str, clean: &str) -> Vec<String> {
    raw.split('\n')
        .zip(clean.split('\n'))
        .enumerate()
        .map(|(i, (before, after))| {
            if before.is_empty() {
                "-".repeat(79)
            } else if i % 3 == 0 {
                after.to_owned()
            } else {
                format!("[{before}] -> [{after}]")
            }
        })
        .collect()
}
