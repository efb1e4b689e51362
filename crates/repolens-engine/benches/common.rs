/// Builds a representative analysis report: headings, prose with inline
/// markup, lists, and fenced code in alternation.
pub fn generate_report(sections: usize) -> String {
    let mut out = String::new();
    for i in 0..sections {
        out.push_str(&format!("## Section {i}\n"));
        out.push_str("Replace the **super-loop** with `uasyncio` per [docs](https://example.com).\n");
        out.push_str("- keep the watchdog fed\n");
        out.push_str("- reconnect without blocking\n");
        out.push_str("\n```py\n");
        out.push_str("import uasyncio\n\nasync def main():\n    await uasyncio.sleep(1)\n");
        out.push_str("```\n");
    }
    out
}
