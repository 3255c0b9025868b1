// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "Paragraph with *some* **content** and ~~struck~~ text.\nA second line with [a link](/target) and \\*escapes\\*.\n\n> Quoted ***text***\n> continues here\n\n";
    base.repeat(size)
}

/// Paragraphs dense with marker runs, including unmatched ones.
#[allow(dead_code)]
pub fn generate_marker_heavy(paragraphs: usize) -> String {
    let mut content = String::new();
    for i in 0..paragraphs {
        content.push_str(&format!(
            "**Hello, *world {i}***! *a **b** c* ***x** y* ~~s~wt~~ *open **never\n\n"
        ));
    }
    content
}

/// Reference links with their declarations at the end of the document.
#[allow(dead_code)]
pub fn generate_reference_links(count: usize) -> String {
    let mut content = String::new();
    for i in 0..count {
        content.push_str(&format!("See [item {i}][ref{i}] for details.\n\n"));
    }
    for i in 0..count {
        content.push_str(&format!("[ref{i}]: https://example.com/{i}\n"));
    }
    content
}
