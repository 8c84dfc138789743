use divan::{Bencher, black_box};

fn main() {
    divan::main();
}

/// Build a document of `paragraphs` paragraphs with some inline formatting.
fn document(paragraphs: usize) -> String {
    let mut html = String::new();
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i} has <b>bold</b> words, <i>italic</i> words and plain words.</p>\n"
        ));
    }
    html
}

/// Helper to make a few small edits
fn modify_html(html: &str) -> String {
    html.replacen("plain", "ordinary", 3)
        .replacen("<b>bold</b>", "bold", 2)
}

#[divan::bench(args = [10, 100, 1000])]
fn tokenize(bencher: Bencher, paragraphs: usize) {
    let html = document(paragraphs);
    bencher.bench_local(|| {
        black_box(redline::tokenize(black_box(&html)));
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn diff(bencher: Bencher, paragraphs: usize) {
    let old = document(paragraphs);
    let new = modify_html(&old);
    bencher.bench_local(|| {
        black_box(redline::diff_html(black_box(&old), black_box(&new)));
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn diff_identical(bencher: Bencher, paragraphs: usize) {
    let html = document(paragraphs);
    bencher.bench_local(|| {
        black_box(redline::diff_html(black_box(&html), black_box(&html)));
    });
}
