// the sample command line shown on the inspect page
// -Xmx appears twice and BADSWITCH is bogus on purpose, the analyser
// uses them to demo its duplicate and unknown-switch reports

pub const EXAMPLE_ENTRY_POINT: &str = "com.chrisnewland.someproject.SomeApplication";

/// Fragments in display order. Markup chars are already escaped (`&#34;`).
pub const EXAMPLE_FRAGMENTS: [&str; 19] = [
    "/usr/bin/java",
    "-Dfoo=bar",
    "-cp=/all/the/jars",
    "-java.library.path=/home/chris/lib",
    "-Xmx8g",
    "-XX:+UseG1GC",
    "-XX:MaxGCPauseMillis=100",
    "-XX:+UnlockDiagnosticVMOptions",
    "-XX:+BADSWITCH",
    "-XX:+LogCompilation",
    "-XX:LogFile=&#34;/home/chris/hotspot.log&#34;",
    "-XX:FreqInlineSize=512",
    "-Xmx4g",
    "-XX:+TraceRangeCheckElimination",
    "-XX:+UnsyncloadClass",
    "-XX:+UseSpinning",
    "-XX:+PrintCodeHeapAnalytics",
    "-XX:ReplaySuppressInitializers=4",
    EXAMPLE_ENTRY_POINT,
];

/// build the example fresh each call, single space between fragments
pub fn example_text() -> String {
    EXAMPLE_FRAGMENTS.join(" ")
}

/// Whether a submitted command line is just the example.
/// Callers should run `glyph::from_display` first if the text came off the page.
pub fn is_example_invocation(command: &str) -> bool {
    command.contains(EXAMPLE_ENTRY_POINT)
}
